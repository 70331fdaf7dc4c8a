use ahash::HashMap;
use sprs::CsMat;
use tracing::debug;

use super::{ngrams, params::VectorizerParams, tokenizer};
use crate::VectorizerError;

/// Term counting against a fixed vocabulary.
#[derive(Clone, Debug)]
pub struct CountVectorizer {
    params: VectorizerParams,
    /// Vocabulary mapping n-gram text to feature index
    vocab: HashMap<String, usize>,
}

impl CountVectorizer {
    /// Build from an already fitted vocabulary.
    ///
    /// Feature indices must be exactly `0..vocab.len()`, each used once.
    pub fn new(
        vocab: HashMap<String, usize>,
        params: VectorizerParams,
    ) -> Result<Self, VectorizerError> {
        params.validate()?;

        let num_features = vocab.len();
        let mut seen = vec![false; num_features];
        for (term, &index) in &vocab {
            let slot = seen
                .get_mut(index)
                .ok_or_else(|| VectorizerError::IndexOutOfRange {
                    term: term.clone(),
                    index,
                    num_features,
                })?;
            if *slot {
                return Err(VectorizerError::DuplicateIndex(index));
            }
            *slot = true;
        }

        debug!(vocab_size = num_features, "CountVectorizer vocabulary loaded");
        Ok(Self { params, vocab })
    }

    pub fn transform<T: AsRef<str> + Sync>(&self, texts: &[T]) -> CsMat<f64> {
        debug!(
            num_texts = texts.len(),
            "Transforming texts using CountVectorizer"
        );
        let tokenized_texts = tokenizer::tokenize(texts, self.params.lowercase());

        // Build CSR format directly
        let mut indptr = Vec::with_capacity(texts.len() + 1);
        let mut indices = Vec::new();
        let mut data = Vec::new();

        indptr.push(0);

        for tokens in &tokenized_texts {
            let ngrams = ngrams::count_ngrams(tokens, self.params.ngram_range());
            let mut row_entries = ngrams
                .iter()
                .filter_map(|(ngram, &count)| {
                    self.vocab
                        .get(ngram)
                        .map(|&col_idx| (col_idx, count as f64))
                })
                .collect::<Vec<_>>();

            row_entries.sort_by_key(|(col_idx, _)| *col_idx);
            for (col_idx, count) in row_entries {
                indices.push(col_idx);
                data.push(count);
            }
            indptr.push(indices.len());
        }

        debug!(
            non_zero_entries = data.len(),
            "Text transformation complete"
        );
        CsMat::new((texts.len(), self.num_features()), indptr, indices, data)
    }

    pub fn num_features(&self) -> usize {
        self.vocab.len()
    }

    /// The vocabulary as a mapping of n-gram text to feature index.
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocab
    }

    pub fn params(&self) -> &VectorizerParams {
        &self.params
    }
}
