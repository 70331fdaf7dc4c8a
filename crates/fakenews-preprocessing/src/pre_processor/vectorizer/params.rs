use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::VectorizerError;

/// Row normalization applied after IDF weighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    /// Divide by the sum of absolute values.
    L1,
    /// Divide by the Euclidean length.
    L2,
}

/// Inference-time settings of a fitted TF-IDF vectorizer.
///
/// These travel inside the vectorizer artifact so the features produced here
/// match the ones the classifier was trained on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerParams {
    /// Smallest and largest word n-gram length, both inclusive.
    ngram_range: (usize, usize),
    /// Lowercase tokens before looking them up.
    lowercase: bool,
    /// Apply sublinear tf scaling: replace term frequency `tf` with `1 + ln(tf)`.
    sublinear_tf: bool,
    /// Row normalization, `None` leaves the weighted counts as they are.
    norm: Option<Norm>,
}

impl VectorizerParams {
    pub fn new(
        ngram_range: impl Into<RangeInclusive<usize>>,
        lowercase: bool,
        sublinear_tf: bool,
        norm: Option<Norm>,
    ) -> Self {
        let range = ngram_range.into();
        let (min, max) = (*range.start(), *range.end());
        assert!(
            min >= 1 && min <= max,
            "ngram_range must satisfy 1 <= min <= max"
        );
        Self {
            ngram_range: (min, max),
            lowercase,
            sublinear_tf,
            norm,
        }
    }

    /// Check settings that arrived through deserialization.
    pub(crate) fn validate(&self) -> Result<(), VectorizerError> {
        let (min, max) = self.ngram_range;
        if min == 0 || min > max {
            return Err(VectorizerError::NgramRange { min, max });
        }
        Ok(())
    }

    #[must_use]
    pub fn ngram_range(&self) -> (usize, usize) {
        self.ngram_range
    }

    #[must_use]
    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    #[must_use]
    pub fn sublinear_tf(&self) -> bool {
        self.sublinear_tf
    }

    #[must_use]
    pub fn norm(&self) -> Option<Norm> {
        self.norm
    }
}

impl Default for VectorizerParams {
    fn default() -> Self {
        Self {
            ngram_range: (1, 1),
            lowercase: true,
            sublinear_tf: false,
            norm: Some(Norm::L2),
        }
    }
}

impl From<((usize, usize), bool, bool, Option<Norm>)> for VectorizerParams {
    fn from(value: ((usize, usize), bool, bool, Option<Norm>)) -> Self {
        Self::new(value.0.0..=value.0.1, value.1, value.2, value.3)
    }
}
