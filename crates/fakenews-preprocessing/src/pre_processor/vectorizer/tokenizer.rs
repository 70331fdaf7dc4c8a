use std::sync::LazyLock;

use rayon::prelude::*;
use regex::Regex;
use tracing::debug;

/// Minimum number of texts to consider parallelization
const MIN_TEXTS_FOR_PARALLEL: usize = 100;

/// Minimum total character count to consider parallelization
const MIN_CHARS_FOR_PARALLEL: usize = 10_000;

/// Words of two or more word characters, the default token pattern the
/// vocabulary was fitted with.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("valid token pattern"));

fn tokenize_one(text: &str, lowercase: bool) -> Vec<String> {
    let find_tokens = |text: &str| {
        TOKEN_PATTERN
            .find_iter(text)
            .map(|m| m.as_str().to_owned())
            .collect::<Vec<_>>()
    };
    if lowercase {
        find_tokens(&text.to_lowercase())
    } else {
        find_tokens(text)
    }
}

fn tokenize_texts_par<T: AsRef<str> + Sync>(texts: &[T], lowercase: bool) -> Vec<Vec<String>> {
    debug!(num_texts = texts.len(), "Using parallel tokenization");
    texts
        .par_iter()
        .map(|text| tokenize_one(text.as_ref(), lowercase))
        .collect()
}

fn tokenize_texts<T: AsRef<str>>(texts: &[T], lowercase: bool) -> Vec<Vec<String>> {
    debug!(num_texts = texts.len(), "Using sequential tokenization");
    texts
        .iter()
        .map(|text| tokenize_one(text.as_ref(), lowercase))
        .collect()
}

/// Determine if parallel processing should be used based on workload characteristics.
///
/// Parallelization is beneficial when:
/// - There are many texts (>= 100), OR
/// - The total character count is large (>= 10,000 chars)
#[inline]
pub(crate) fn should_use_parallel<T: AsRef<str>>(texts: &[T]) -> bool {
    let num_texts = texts.len();

    if num_texts >= MIN_TEXTS_FOR_PARALLEL {
        return true;
    }

    // Estimate from the first 20 texts when there are more than that
    let total_chars: usize = if num_texts > 20 {
        let sample_chars: usize = texts.iter().take(20).map(|s| s.as_ref().len()).sum();
        (sample_chars * num_texts) / 20
    } else {
        texts.iter().map(|s| s.as_ref().len()).sum()
    };

    total_chars >= MIN_CHARS_FOR_PARALLEL
}

pub fn tokenize<T: AsRef<str> + Sync>(texts: &[T], lowercase: bool) -> Vec<Vec<String>> {
    if should_use_parallel(texts) {
        tokenize_texts_par(texts, lowercase)
    } else {
        tokenize_texts(texts, lowercase)
    }
}
