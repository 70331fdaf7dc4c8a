mod count_vectorizer;
mod ngrams;
mod params;
mod tfidf_vectorizer;
mod tokenizer;

use sprs::{CsMat, CsVec};

pub use params::{Norm, VectorizerParams};
pub use tfidf_vectorizer::TfidfVectorizer;

/// Sparse feature representation of one cleaned document.
pub type FeatureVector = CsVec<f64>;

/// Maps cleaned text to sparse feature vectors of a fixed dimension.
///
/// The dimension is fixed when the vectorizer is loaded and never changes.
pub trait Vectorizer: Send + Sync {
    /// Transform a batch of documents into a CSR matrix with one row per
    /// document, in input order.
    fn transform(&self, texts: &[&str]) -> CsMat<f64>;

    /// Number of columns produced by [`Vectorizer::transform`].
    fn num_features(&self) -> usize;

    /// Transform a single document.
    fn transform_one(&self, text: &str) -> FeatureVector {
        self.transform(&[text])
            .outer_view(0)
            .map_or_else(|| CsVec::empty(self.num_features()), |row| row.to_owned())
    }
}
