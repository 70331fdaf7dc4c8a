//! The classifier seam.
//!
//! The classifier is an externally trained artifact; everything downstream
//! only sees [`Classifier::decide`].

mod linear;

use sprs::CsVecView;

pub use linear::{LinearClassifier, ModelError};

/// Class value the training data used for genuine articles.
pub const REAL_CLASS: i64 = 1;

/// Raw classifier output for one feature vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    /// Predicted class value as stored in the model.
    pub class: i64,
    /// Signed distance from the decision boundary.
    pub score: f64,
}

/// A trained binary classifier over sparse features.
pub trait Classifier: Send + Sync {
    /// Predict a class and its decision score.
    fn decide(&self, features: CsVecView<'_, f64>) -> Decision;

    /// Number of input features the classifier expects.
    fn num_features(&self) -> usize;
}
