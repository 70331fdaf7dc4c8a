use ahash::HashMap;
use serde::{Deserialize, Serialize};
use sprs::CsMat;
use tracing::debug;

use super::{
    Vectorizer,
    count_vectorizer::CountVectorizer,
    params::{Norm, VectorizerParams},
};
use crate::VectorizerError;

/// Serialized layout of a fitted TF-IDF vectorizer.
///
/// This is the shape both the bincode artifact and the JSON export share:
/// the fitted `vocabulary` (term to column), the per-column `idf` weights and
/// the inference `params`.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct TfidfArtifact {
    #[serde(default)]
    params: VectorizerParams,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

/// A fitted TF-IDF vectorizer used at inference time.
///
/// Every decode path goes through validation, so a value of this type always
/// has one finite idf weight per vocabulary column.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "TfidfArtifact", into = "TfidfArtifact")]
pub struct TfidfVectorizer {
    count_vectorizer: CountVectorizer,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Assemble a vectorizer from a fitted vocabulary and its idf weights.
    pub fn new(
        vocabulary: impl IntoIterator<Item = (String, usize)>,
        idf: Vec<f64>,
        params: VectorizerParams,
    ) -> Result<Self, VectorizerError> {
        let count_vectorizer = CountVectorizer::new(vocabulary.into_iter().collect(), params)?;

        if idf.len() != count_vectorizer.num_features() {
            return Err(VectorizerError::IdfLength {
                idf: idf.len(),
                vocabulary: count_vectorizer.num_features(),
            });
        }
        if let Some(index) = idf.iter().position(|w| !w.is_finite()) {
            return Err(VectorizerError::NonFiniteIdf { index });
        }

        Ok(Self {
            count_vectorizer,
            idf,
        })
    }

    /// Decode a vectorizer from its bincode artifact.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VectorizerError> {
        let (vectorizer, _) =
            bincode::serde::decode_from_slice::<Self, _>(bytes, bincode::config::standard())?;
        debug!(
            num_features = vectorizer.num_features(),
            "TfidfVectorizer decoded from bytes"
        );
        Ok(vectorizer)
    }

    /// Encode this vectorizer as a bincode artifact.
    pub fn to_bytes(&self) -> Result<Vec<u8>, VectorizerError> {
        Ok(bincode::serde::encode_to_vec(
            self,
            bincode::config::standard(),
        )?)
    }

    /// Read a vectorizer from its JSON export.
    pub fn from_json(json: &str) -> Result<Self, VectorizerError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn transform<T: AsRef<str> + Sync>(&self, texts: &[T]) -> CsMat<f64> {
        debug!(
            num_texts = texts.len(),
            "Transforming texts using TfidfVectorizer"
        );
        let mut tf_matrix = self.count_vectorizer.transform(texts);
        let params = self.count_vectorizer.params();

        for mut row_vec in tf_matrix.outer_iterator_mut() {
            for (col_idx, val) in row_vec.iter_mut() {
                if params.sublinear_tf() {
                    *val = 1.0 + val.ln();
                }
                *val *= self.idf[col_idx];
            }

            let norm = match params.norm() {
                Some(Norm::L2) => row_vec.iter().map(|(_, &v)| v * v).sum::<f64>().sqrt(),
                Some(Norm::L1) => row_vec.iter().map(|(_, &v)| v.abs()).sum::<f64>(),
                None => continue,
            };
            if norm > 0.0 {
                for (_, val) in row_vec.iter_mut() {
                    *val /= norm;
                }
            }
        }
        tf_matrix
    }

    #[must_use]
    pub fn num_features(&self) -> usize {
        self.count_vectorizer.num_features()
    }

    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        self.count_vectorizer.vocabulary()
    }

    #[must_use]
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    #[must_use]
    pub fn params(&self) -> &VectorizerParams {
        self.count_vectorizer.params()
    }
}

impl Vectorizer for TfidfVectorizer {
    fn transform(&self, texts: &[&str]) -> CsMat<f64> {
        Self::transform(self, texts)
    }

    fn num_features(&self) -> usize {
        Self::num_features(self)
    }
}

impl TryFrom<TfidfArtifact> for TfidfVectorizer {
    type Error = VectorizerError;

    fn try_from(artifact: TfidfArtifact) -> Result<Self, Self::Error> {
        Self::new(artifact.vocabulary, artifact.idf, artifact.params)
    }
}

impl From<TfidfVectorizer> for TfidfArtifact {
    fn from(vectorizer: TfidfVectorizer) -> Self {
        Self {
            params: vectorizer.params().clone(),
            vocabulary: vectorizer.vocabulary().clone(),
            idf: vectorizer.idf,
        }
    }
}
