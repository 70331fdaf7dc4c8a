//! Deterministic article cleaning.
//!
//! The output of [`clean_text`] contains only lowercase ASCII letters grouped
//! into tokens separated by single spaces. Running it twice gives the same
//! result as running it once.

use std::sync::LazyLock;

use ahash::AHashSet;
use regex::Regex;

/// English stop words removed before vectorization.
///
/// This is the NLTK English list the vectorizer vocabulary was fitted
/// against. Entries with apostrophes can never survive cleaning but are kept
/// so the list matches the one used at training time.
pub const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

static STOP_WORD_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

static NON_ALPHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z]").expect("valid non-alphabetic pattern"));

/// Returns true if `word` is in the English stop-word list.
///
/// The lookup is exact, so callers must lowercase first.
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Clean raw article text for vectorization.
///
/// Every character outside `[A-Za-z]` becomes a space, the result is
/// lowercased and split on whitespace, stop words are dropped, and the
/// surviving words are joined with single spaces. The output is empty when
/// the input has no non-stop alphabetic content.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let letters_only = NON_ALPHA.replace_all(text, " ").to_ascii_lowercase();
    letters_only
        .split_whitespace()
        .filter(|word| !is_stop_word(word))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_proper_noun_is_lowercased() {
        assert_eq!(clean_text("Trump Trump Trump"), "trump trump trump");
    }

    #[test]
    fn test_stop_words_are_removed() {
        assert_eq!(
            clean_text("The White House said on Friday"),
            "white house said friday"
        );
    }

    #[test]
    fn test_punctuation_and_digits_become_separators() {
        assert_eq!(
            clean_text("WASHINGTON (Reuters) - $81 billion, 2018's budget!"),
            "washington reuters billion budget"
        );
    }

    #[test]
    fn test_contraction_fragments_are_dropped() {
        // "don't" splits into "don" and "t", both of which are stop words
        assert_eq!(clean_text("Don't panic"), "panic");
    }

    #[test]
    fn test_non_ascii_letters_are_separators() {
        assert_eq!(clean_text("Trumpâ€™s café"), "trump caf");
    }

    #[test]
    fn test_empty_and_stop_word_only_input() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \n\t "), "");
        assert_eq!(clean_text("it is what it is"), "");
        assert_eq!(clean_text("12345 !!! ---"), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "",
            "Trump Trump Trump",
            "It s gotta be hard these days to be John McCain.",
            "JAKARTA/TIMIKA, Indonesia (Reuters) - Armed separatists have occupied five villages",
            "pic.twitter.com/u7NYkkBGHf  Kyle Griffin (@kylegriffin1) October 23, 2017",
        ];
        for input in inputs {
            let once = clean_text(input);
            assert_eq!(clean_text(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_output_is_lowercase_alphabetic_with_single_spaces() {
        let cleaned = clean_text(
            "  WATCH: Mike Pence’s Photo Op With Puerto Rico Survivors Just Went TERRIBLY Wrong (VIDEO)",
        );
        assert!(
            cleaned
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == ' ')
        );
        assert!(!cleaned.contains("  "));
        assert!(!cleaned.starts_with(' '));
        assert!(!cleaned.ends_with(' '));
        assert_eq!(
            cleaned,
            "watch mike pence photo op puerto rico survivors went terribly wrong video"
        );
    }

    #[test]
    fn test_stop_word_lookup() {
        assert_eq!(STOP_WORDS.len(), 179);
        assert!(is_stop_word("the"));
        assert!(is_stop_word("wouldn"));
        assert!(!is_stop_word("The"));
        assert!(!is_stop_word("news"));
    }
}
