use core::fmt;

use serde::{Deserialize, Serialize};

/// Average adult reading speed used for the reading-time estimate.
pub const WORDS_PER_MINUTE: f64 = 200.0;

/// Basic statistics of the raw submitted text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    pub word_count: usize,
    /// Unicode scalar values, not bytes.
    pub char_count: usize,
    pub reading_time_minutes: f64,
}

impl TextStats {
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let word_count = text.split_whitespace().count();
        Self {
            word_count,
            char_count: text.chars().count(),
            reading_time_minutes: word_count as f64 / WORDS_PER_MINUTE,
        }
    }
}

impl fmt::Display for TextStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Word Count: {}", self.word_count)?;
        writeln!(f, "Character Count: {}", self.char_count)?;
        write!(
            f,
            "Estimated Reading Time: {:.2} min",
            self.reading_time_minutes
        )
    }
}
