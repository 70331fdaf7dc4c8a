use serde::{Deserialize, Serialize};
use sprs::CsVecView;
use thiserror::Error;
use tracing::debug;

use super::{Classifier, Decision};

/// Errors raised while decoding or validating a classifier artifact.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to decode classifier from bincode")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("failed to encode classifier as bincode")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("failed to read classifier from JSON")]
    Json(#[from] serde_json::Error),

    #[error("classifier has no weights")]
    Empty,

    #[error("classifier weight {index} is not a finite number")]
    NonFiniteWeight { index: usize },

    #[error("classifier intercept is not a finite number")]
    NonFiniteIntercept,

    #[error("classifier classes must be distinct, got {0:?}")]
    DuplicateClasses([i64; 2]),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct LinearArtifact {
    coef: Vec<f64>,
    intercept: f64,
    classes: [i64; 2],
}

/// Binary linear classifier: `score = coef · x + intercept`.
///
/// A positive score predicts `classes[1]`, anything else `classes[0]`. This is
/// the prediction interface shared by online linear learners such as the
/// passive-aggressive classifier the artifacts come from.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "LinearArtifact", into = "LinearArtifact")]
pub struct LinearClassifier {
    coef: Vec<f64>,
    intercept: f64,
    classes: [i64; 2],
}

impl LinearClassifier {
    pub fn new(coef: Vec<f64>, intercept: f64, classes: [i64; 2]) -> Result<Self, ModelError> {
        if coef.is_empty() {
            return Err(ModelError::Empty);
        }
        if let Some(index) = coef.iter().position(|w| !w.is_finite()) {
            return Err(ModelError::NonFiniteWeight { index });
        }
        if !intercept.is_finite() {
            return Err(ModelError::NonFiniteIntercept);
        }
        if classes[0] == classes[1] {
            return Err(ModelError::DuplicateClasses(classes));
        }
        Ok(Self {
            coef,
            intercept,
            classes,
        })
    }

    /// Decode a classifier from its bincode artifact.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ModelError> {
        let (model, _) =
            bincode::serde::decode_from_slice::<Self, _>(bytes, bincode::config::standard())?;
        debug!(
            num_features = model.num_features(),
            "LinearClassifier decoded from bytes"
        );
        Ok(model)
    }

    /// Encode this classifier as a bincode artifact.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ModelError> {
        Ok(bincode::serde::encode_to_vec(
            self,
            bincode::config::standard(),
        )?)
    }

    /// Read a classifier from its JSON export.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Signed distance of `features` from the decision boundary.
    ///
    /// Indices beyond the weight vector contribute nothing.
    #[must_use]
    pub fn decision_function(&self, features: CsVecView<'_, f64>) -> f64 {
        features
            .iter()
            .filter_map(|(idx, &value)| self.coef.get(idx).map(|w| w * value))
            .sum::<f64>()
            + self.intercept
    }

    #[must_use]
    pub fn coef(&self) -> &[f64] {
        &self.coef
    }

    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    #[must_use]
    pub fn classes(&self) -> [i64; 2] {
        self.classes
    }
}

impl Classifier for LinearClassifier {
    fn decide(&self, features: CsVecView<'_, f64>) -> Decision {
        let score = self.decision_function(features);
        let class = if score > 0.0 {
            self.classes[1]
        } else {
            self.classes[0]
        };
        Decision { class, score }
    }

    fn num_features(&self) -> usize {
        self.coef.len()
    }
}

impl TryFrom<LinearArtifact> for LinearClassifier {
    type Error = ModelError;

    fn try_from(artifact: LinearArtifact) -> Result<Self, Self::Error> {
        Self::new(artifact.coef, artifact.intercept, artifact.classes)
    }
}

impl From<LinearClassifier> for LinearArtifact {
    fn from(model: LinearClassifier) -> Self {
        Self {
            coef: model.coef,
            intercept: model.intercept,
            classes: model.classes,
        }
    }
}
