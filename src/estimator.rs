/// Approximate token counter used to size chunks.
///
/// Implementations are advisory: nothing downstream relies on the count
/// matching a real tokenizer, only on it being deterministic and never
/// shrinking as words are appended.
pub trait TokenEstimator: Send + Sync {
    /// Estimated token count for `text`. Blank text must estimate to 0.
    fn estimate(&self, text: &str) -> usize;
}

impl<T: TokenEstimator + ?Sized> TokenEstimator for Box<T> {
    fn estimate(&self, text: &str) -> usize {
        (**self).estimate(text)
    }
}

/// Default estimator: `ceil(words * 1.3)`
#[derive(Debug, Clone, Copy, Default)]
pub struct WordCountEstimator;

impl TokenEstimator for WordCountEstimator {
    fn estimate(&self, text: &str) -> usize {
        let words = text.split_whitespace().count();
        (words * 13).div_ceil(10)
    }
}

/// Byte-length heuristic: roughly one token per `chars_per_token` bytes
#[derive(Debug, Clone, Copy)]
pub struct CharRatioEstimator {
    pub chars_per_token: usize,
}

impl CharRatioEstimator {
    pub fn new(chars_per_token: usize) -> Self {
        Self {
            chars_per_token: chars_per_token.max(1),
        }
    }
}

impl Default for CharRatioEstimator {
    fn default() -> Self {
        // Average token is ~4 characters for English text
        Self::new(4)
    }
}

impl TokenEstimator for CharRatioEstimator {
    fn estimate(&self, text: &str) -> usize {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return 0;
        }
        (trimmed.len() / self.chars_per_token).max(1)
    }
}
