use ahash::AHashMap as HashMap;

/// Count word n-grams of every length in `ngram_range` (inclusive).
///
/// Multi-word n-grams are keyed by their words joined with a single space,
/// the same keys the fitted vocabulary uses.
pub fn count_ngrams(tokens: &[String], ngram_range: (usize, usize)) -> HashMap<String, usize> {
    let (min_n, max_n) = ngram_range;
    let mut ngram_counter = HashMap::new();

    for n in min_n..=max_n {
        for window in tokens.windows(n) {
            *ngram_counter.entry(window.join(" ")).or_insert(0) += 1;
        }
    }
    ngram_counter
}
