//! Feature extraction from cleaned text.

mod vectorizer;

pub use vectorizer::{FeatureVector, Norm, TfidfVectorizer, Vectorizer, VectorizerParams};
