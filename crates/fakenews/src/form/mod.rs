//! The classification form, independent of how it is displayed.
//!
//! A form holds the article text, can be filled from [`SAMPLE_NEWS`], and
//! produces a [`Report`] when submitted.

mod samples;

use core::fmt;

use fakenews_preprocessing::Vectorizer;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

pub use samples::SAMPLE_NEWS;

use crate::{Prediction, Predictor, TextStats, model::Classifier};

/// Description shown next to the form.
pub const ABOUT: &str = "\
Detects whether a news article or headline is Real or Fake.

The article is reduced to lowercase letters, English stop words are removed,
and the rest is turned into TF-IDF features. A linear classifier trained on a
labelled corpus of real and fake news scores those features.

The confidence score is the classifier's decision score passed through the
logistic function. It ranks how sure the model is; it is not a calibrated
probability.

Usage:
  1. Paste news text or a headline, or pick a sample.
  2. Classify.
  3. Read the prediction, its confidence and the text statistics.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter some text to classify.")]
    EmptyText,

    #[error("no sample article {index}, choose 0..{available}")]
    UnknownSample { index: usize, available: usize },
}

/// Input state of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyForm {
    text: String,
}

impl ClassifyForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Replace the text with one of the sample articles.
    pub fn use_sample(&mut self, index: usize) -> Result<(), FormError> {
        let sample = SAMPLE_NEWS.get(index).ok_or(FormError::UnknownSample {
            index,
            available: SAMPLE_NEWS.len(),
        })?;
        self.text = (*sample).to_owned();
        Ok(())
    }

    /// Check that the text is worth classifying. Empty and whitespace-only
    /// text is rejected.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.text.trim().is_empty() {
            warn!("Rejected empty submission");
            return Err(FormError::EmptyText);
        }
        Ok(())
    }

    /// Classify the current text.
    ///
    /// Blank text is rejected with [`FormError::EmptyText`] and never reaches
    /// the predictor.
    pub fn submit<V, C>(&self, predictor: &Predictor<V, C>) -> Result<Report, FormError>
    where
        V: Vectorizer,
        C: Classifier,
    {
        self.validate()?;
        Ok(Report {
            prediction: predictor.predict(&self.text),
            stats: TextStats::from_text(&self.text),
        })
    }
}

/// Everything displayed after a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    pub prediction: Prediction,
    pub stats: TextStats,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let classification = self.prediction.classification();
        let mark = if classification.is_real() { "✅" } else { "❌" };
        writeln!(f, "Prediction: {mark} {classification}")?;
        writeln!(
            f,
            "Confidence Score: {:.2}%",
            self.prediction.confidence() * 100.0
        )?;
        write!(f, "{}", self.stats)
    }
}

#[cfg(test)]
mod tests {
    use fakenews_preprocessing::{TfidfVectorizer, VectorizerParams};

    use super::*;
    use crate::model::LinearClassifier;

    fn predictor() -> Predictor {
        let vectorizer = TfidfVectorizer::new(
            [("reuters".to_owned(), 0), ("watch".to_owned(), 1)],
            vec![1.0, 1.0],
            VectorizerParams::default(),
        )
        .unwrap();
        let classifier = LinearClassifier::new(vec![2.0, -2.0], 0.0, [0, 1]).unwrap();
        Predictor::new(vectorizer, classifier).unwrap()
    }

    #[test]
    fn test_empty_submission_is_rejected() {
        let predictor = predictor();
        assert_eq!(
            ClassifyForm::new().submit(&predictor),
            Err(FormError::EmptyText)
        );
        assert_eq!(
            ClassifyForm::with_text("  \n\t").submit(&predictor),
            Err(FormError::EmptyText)
        );
        assert_eq!(
            FormError::EmptyText.to_string(),
            "Please enter some text to classify."
        );
    }

    #[test]
    fn test_validate_matches_submit() {
        assert_eq!(ClassifyForm::new().validate(), Err(FormError::EmptyText));
        assert_eq!(
            ClassifyForm::with_text(" \r\n").validate(),
            Err(FormError::EmptyText)
        );
        assert_eq!(ClassifyForm::with_text("the").validate(), Ok(()));
    }

    #[test]
    fn test_stop_word_only_text_is_still_classified() {
        let report = ClassifyForm::with_text("the of and")
            .submit(&predictor())
            .unwrap();
        assert_eq!(report.stats.word_count, 3);
        assert!((report.prediction.score()).abs() < 1e-12);
    }

    #[test]
    fn test_every_sample_can_be_selected_and_classified() {
        let predictor = predictor();
        let mut form = ClassifyForm::new();
        assert_eq!(SAMPLE_NEWS.len(), 8);
        for (index, sample) in SAMPLE_NEWS.iter().enumerate() {
            form.use_sample(index).unwrap();
            assert_eq!(form.text(), *sample);
            let report = form.submit(&predictor).unwrap();
            assert!(report.stats.word_count > 0);
        }
    }

    #[test]
    fn test_unknown_sample_keeps_text() {
        let mut form = ClassifyForm::with_text("draft");
        assert_eq!(
            form.use_sample(99),
            Err(FormError::UnknownSample {
                index: 99,
                available: 8
            })
        );
        assert_eq!(form.text(), "draft");
    }

    #[test]
    fn test_report_rendering() {
        let predictor = predictor();
        let real = ClassifyForm::with_text("Reuters Reuters")
            .submit(&predictor)
            .unwrap();
        let rendered = real.to_string();
        assert!(rendered.starts_with("Prediction: ✅ Real News\nConfidence Score: "));
        assert!(
            rendered
                .ends_with("Word Count: 2\nCharacter Count: 15\nEstimated Reading Time: 0.01 min")
        );

        let fake = ClassifyForm::with_text("WATCH").submit(&predictor).unwrap();
        assert!(fake.to_string().starts_with("Prediction: ❌ Fake News"));
    }

    #[test]
    fn test_confidence_percentage_has_two_decimals() {
        let report = ClassifyForm::with_text("watch").submit(&predictor()).unwrap();
        // score -2.0 squashes to 0.119202...
        assert!(report.to_string().contains("Confidence Score: 11.92%"));
    }
}
