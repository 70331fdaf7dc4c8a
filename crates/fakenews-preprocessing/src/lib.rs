//! Text pre-processing for the fakenews classifier.
//!
//! Two stages run before an article reaches the classifier:
//!
//! 1. [`clean_text`] strips everything but ASCII letters, lowercases and drops
//!    English stop words.
//! 2. [`TfidfVectorizer`] turns cleaned text into a sparse TF-IDF feature
//!    vector using a vocabulary fitted elsewhere.

mod error;
pub mod normalizer;
pub mod pre_processor;

pub use error::VectorizerError;
pub use normalizer::{STOP_WORDS, clean_text, is_stop_word};
pub use pre_processor::{FeatureVector, Norm, TfidfVectorizer, Vectorizer, VectorizerParams};
