use thiserror::Error;

/// Errors raised while decoding or validating a vectorizer artifact.
#[derive(Debug, Error)]
pub enum VectorizerError {
    #[error("failed to decode vectorizer from bincode")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("failed to encode vectorizer as bincode")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("failed to read vectorizer from JSON")]
    Json(#[from] serde_json::Error),

    #[error("idf has {idf} entries but the vocabulary has {vocabulary} terms")]
    IdfLength { idf: usize, vocabulary: usize },

    #[error("term {term:?} has feature index {index}, outside 0..{num_features}")]
    IndexOutOfRange {
        term: String,
        index: usize,
        num_features: usize,
    },

    #[error("feature index {0} is assigned to more than one term")]
    DuplicateIndex(usize),

    #[error("idf value for feature {index} is not a finite number")]
    NonFiniteIdf { index: usize },

    #[error("invalid ngram range ({min}, {max}): need 1 <= min <= max")]
    NgramRange { min: usize, max: usize },
}
