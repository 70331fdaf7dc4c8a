//! # fakenews
//!
//! Classify news articles as real or fake.
//!
//! A pre-trained linear classifier and a pre-fitted TF-IDF vectorizer are
//! loaded once into a [`Predictor`]. Each article is cleaned, vectorized and
//! scored; the decision score becomes a label and a logistic confidence.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fakenews::{ArtifactPaths, Predictor};
//!
//! let predictor = Predictor::load(&ArtifactPaths::new("model.bin", "vectorizer.bin"))?;
//!
//! let prediction = predictor.predict("WASHINGTON (Reuters) - The Senate passed...");
//! println!(
//!     "{} ({:.2}%)",
//!     prediction.classification(),
//!     prediction.confidence() * 100.0
//! );
//! # Ok::<(), fakenews::ArtifactError>(())
//! ```
//!
//! ## The Form
//!
//! ```rust,no_run
//! use fakenews::{ArtifactPaths, ClassifyForm, Predictor};
//!
//! let predictor = Predictor::load(&ArtifactPaths::default())?;
//! let mut form = ClassifyForm::new();
//! form.use_sample(0)?;
//! println!("{}", form.submit(&predictor)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#[cfg(feature = "cli")]
pub mod cli;

pub mod artifacts;
pub mod form;
pub mod model;
mod pipeline;
mod stats;

pub use artifacts::{ArtifactCache, ArtifactError, ArtifactFormat, ArtifactPaths};
pub use fakenews_preprocessing::{FeatureVector, clean_text};
use fakenews_preprocessing::{TfidfVectorizer, Vectorizer};
pub use form::{ABOUT, ClassifyForm, FormError, Report, SAMPLE_NEWS};
use model::{Classifier, LinearClassifier};
pub use pipeline::{Classification, Prediction, confidence};
pub use stats::{TextStats, WORDS_PER_MINUTE};

/// Immutable prediction service over a vectorizer and a classifier.
///
/// Build it once at startup and share it by reference; it is `Send + Sync`.
///
/// # Examples
///
/// ```rust
/// use fakenews::{Predictor, model::LinearClassifier};
/// use fakenews_preprocessing::{TfidfVectorizer, VectorizerParams};
///
/// let vectorizer = TfidfVectorizer::new(
///     [("reuters".to_owned(), 0), ("video".to_owned(), 1)],
///     vec![1.0, 1.5],
///     VectorizerParams::default(),
/// )?;
/// let classifier = LinearClassifier::new(vec![2.0, -1.0], 0.0, [0, 1])?;
/// let predictor = Predictor::new(vectorizer, classifier)?;
///
/// assert!(predictor.predict("JAKARTA (Reuters) - ...").classification().is_real());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Predictor<V = TfidfVectorizer, C = LinearClassifier> {
    vectorizer: V,
    classifier: C,
}

impl Predictor {
    /// Load both artifacts from disk.
    pub fn load(paths: &ArtifactPaths) -> Result<Self, ArtifactError> {
        let (classifier, vectorizer) = artifacts::load(paths)?;
        Ok(Self {
            vectorizer,
            classifier,
        })
    }
}

impl<V: Vectorizer, C: Classifier> Predictor<V, C> {
    /// Pair a vectorizer with a classifier of the same feature dimension.
    pub fn new(vectorizer: V, classifier: C) -> Result<Self, ArtifactError> {
        if vectorizer.num_features() != classifier.num_features() {
            return Err(ArtifactError::DimensionMismatch {
                vectorizer: vectorizer.num_features(),
                classifier: classifier.num_features(),
            });
        }
        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Clean, vectorize and classify a single text.
    #[must_use]
    pub fn predict<T: AsRef<str>>(&self, text: T) -> Prediction {
        pipeline::predict(&self.vectorizer, &self.classifier, text.as_ref())
    }

    /// Predict for multiple texts, in input order.
    #[must_use]
    pub fn predict_batch<T: AsRef<str> + Sync>(&self, texts: &[T]) -> Vec<Prediction> {
        pipeline::predict_batch(&self.vectorizer, &self.classifier, texts)
    }

    /// Classify a single text.
    #[must_use]
    pub fn classify<T: AsRef<str>>(&self, text: T) -> Classification {
        self.predict(text).classification()
    }

    /// Feature vector for a text, after cleaning.
    #[must_use]
    pub fn features<T: AsRef<str>>(&self, text: T) -> FeatureVector {
        self.vectorizer.transform_one(&clean_text(text.as_ref()))
    }

    #[must_use]
    pub fn num_features(&self) -> usize {
        self.vectorizer.num_features()
    }

    #[must_use]
    pub fn vectorizer(&self) -> &V {
        &self.vectorizer
    }

    #[must_use]
    pub fn classifier(&self) -> &C {
        &self.classifier
    }
}

#[cfg(test)]
mod tests {
    use fakenews_preprocessing::VectorizerParams;
    use sprs::CsVecView;

    use super::*;
    use crate::model::Decision;

    fn vectorizer() -> TfidfVectorizer {
        TfidfVectorizer::new(
            [
                ("reuters".to_owned(), 0),
                ("trump".to_owned(), 1),
                ("video".to_owned(), 2),
            ],
            vec![1.0, 1.0, 1.0],
            VectorizerParams::default(),
        )
        .unwrap()
    }

    /// Always answers with a fixed class, to check the label mapping in isolation.
    struct FixedClassifier(i64);

    impl Classifier for FixedClassifier {
        fn decide(&self, _features: CsVecView<'_, f64>) -> Decision {
            Decision {
                class: self.0,
                score: 0.25,
            }
        }

        fn num_features(&self) -> usize {
            3
        }
    }

    #[test]
    fn test_rejects_dimension_mismatch() {
        let classifier = LinearClassifier::new(vec![1.0, 2.0], 0.0, [0, 1]).unwrap();
        let err = Predictor::new(vectorizer(), classifier).unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::DimensionMismatch {
                vectorizer: 3,
                classifier: 2
            }
        ));
    }

    #[test]
    fn test_custom_classifier_behind_trait() {
        let real = Predictor::new(vectorizer(), FixedClassifier(1)).unwrap();
        assert_eq!(real.classify("anything"), Classification::Real);

        let fake = Predictor::new(vectorizer(), FixedClassifier(0)).unwrap();
        let prediction = fake.predict("anything");
        assert_eq!(prediction.classification(), Classification::Fake);
        assert!((prediction.confidence() - confidence(0.25)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_trump_trump_trump_features() {
        let classifier = LinearClassifier::new(vec![0.0, 1.0, 0.0], 0.0, [0, 1]).unwrap();
        let predictor = Predictor::new(vectorizer(), classifier).unwrap();

        let features = predictor.features("Trump Trump Trump");
        assert_eq!(features.dim(), 3);
        assert_eq!(features.indices(), &[1]);
        assert!((features.data()[0] - 1.0).abs() < 1e-12);
        assert_eq!(predictor.classify("Trump Trump Trump"), Classification::Real);
    }

    #[test]
    fn test_accessors_expose_loaded_parts() {
        let classifier = LinearClassifier::new(vec![0.5, -1.0, 2.0], -0.25, [0, 1]).unwrap();
        let predictor = Predictor::new(vectorizer(), classifier).unwrap();

        assert_eq!(
            predictor.vectorizer().vocabulary().get("trump"),
            Some(&1)
        );
        assert_eq!(predictor.vectorizer().idf(), &[1.0, 1.0, 1.0]);
        assert_eq!(predictor.classifier().coef(), &[0.5, -1.0, 2.0]);
        assert!((predictor.classifier().intercept() + 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_predictor_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Predictor>();
    }
}
