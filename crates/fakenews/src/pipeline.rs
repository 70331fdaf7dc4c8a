use core::fmt;

use fakenews_preprocessing::{Vectorizer, clean_text};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Classifier, Decision, REAL_CLASS};

/// Minimum batch size before cleaning runs on the rayon pool
const MIN_TEXTS_FOR_PARALLEL: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Real,
    Fake,
}

impl Classification {
    /// Map a raw class value from the model. Only [`REAL_CLASS`] is real.
    #[must_use]
    pub fn from_class(class: i64) -> Self {
        if class == REAL_CLASS {
            Self::Real
        } else {
            Self::Fake
        }
    }

    /// Returns true if this classification is Real
    #[must_use]
    pub fn is_real(&self) -> bool {
        matches!(self, Self::Real)
    }

    /// Returns true if this classification is Fake
    #[must_use]
    pub fn is_fake(&self) -> bool {
        matches!(self, Self::Fake)
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Real => "Real News",
            Self::Fake => "Fake News",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Logistic squashing of a decision score into the open interval (0, 1).
///
/// This is a monotonic confidence proxy, not a calibrated probability. The
/// result is clamped so very large scores never round to exactly 0 or 1.
/// A NaN score, which an artifact with extreme idf weights and no norm can
/// produce through overflow, carries no information and maps to 0.5.
#[must_use]
pub fn confidence(score: f64) -> f64 {
    if score.is_nan() {
        return 0.5;
    }
    let squashed = if score >= 0.0 {
        1.0 / (1.0 + (-score).exp())
    } else {
        let e = score.exp();
        e / (1.0 + e)
    };
    squashed.clamp(f64::MIN_POSITIVE, 1.0 - f64::EPSILON)
}

/// Outcome of classifying one article.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    classification: Classification,
    score: f64,
    confidence: f64,
}

impl Prediction {
    #[must_use]
    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// Raw decision score from the classifier.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Logistic confidence in (0, 1).
    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

impl From<Decision> for Prediction {
    fn from(decision: Decision) -> Self {
        Self {
            classification: Classification::from_class(decision.class),
            score: decision.score,
            confidence: confidence(decision.score),
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (score={:.3}, confidence={:.2}%)",
            self.classification,
            self.score,
            self.confidence * 100.0
        )
    }
}

#[must_use]
pub fn predict<V, C>(vectorizer: &V, classifier: &C, text: &str) -> Prediction
where
    V: Vectorizer + ?Sized,
    C: Classifier + ?Sized,
{
    let cleaned = clean_text(text);
    debug!(
        raw_len = text.len(),
        cleaned_len = cleaned.len(),
        "Cleaned input text"
    );
    let features = vectorizer.transform_one(&cleaned);
    let prediction = Prediction::from(classifier.decide(features.view()));
    debug!(%prediction, non_zero = features.nnz(), "Prediction complete");
    prediction
}

#[must_use]
pub fn predict_batch<V, C, T>(vectorizer: &V, classifier: &C, texts: &[T]) -> Vec<Prediction>
where
    V: Vectorizer + ?Sized,
    C: Classifier + ?Sized,
    T: AsRef<str> + Sync,
{
    let cleaned: Vec<String> = if texts.len() >= MIN_TEXTS_FOR_PARALLEL {
        texts.par_iter().map(|t| clean_text(t.as_ref())).collect()
    } else {
        texts.iter().map(|t| clean_text(t.as_ref())).collect()
    };
    let cleaned_refs: Vec<&str> = cleaned.iter().map(String::as_str).collect();

    let matrix = vectorizer.transform(&cleaned_refs);
    debug!(
        num_texts = texts.len(),
        non_zero = matrix.nnz(),
        "Batch vectorized"
    );
    matrix
        .outer_iterator()
        .map(|row| Prediction::from(classifier.decide(row)))
        .collect()
}
