use tracing::trace;

use super::Chunk;
use crate::estimator::TokenEstimator;
use crate::units::{split_words, UnitKind};

/// Cut `text` into word windows sized by `estimator`.
///
/// Each window grows while its estimate stays within `target` (at least one
/// word). The next window starts with the longest tail of the previous one
/// that estimates within `overlap` and still leaves room for one more word.
/// The start always advances by at least one word.
pub(crate) fn word_windows(
    text: &str,
    target: usize,
    overlap: usize,
    estimator: &dyn TokenEstimator,
) -> Vec<Chunk> {
    let words: Vec<&str> = split_words(text).into_iter().map(|u| u.text).collect();
    if words.is_empty() {
        return vec![];
    }

    let fits = |from: usize, to: usize, budget: usize| {
        estimator.estimate(&words[from..to].join(" ")) <= budget
    };

    trace!(words = words.len(), target, overlap, "splitting into word windows");

    let mut chunks = Vec::new();
    let mut start = 0;
    let mut end = 0;
    let mut prev_end = 0;

    loop {
        // a window never ends before the previous one did
        end = end.max(start + 1);
        while end < words.len() && fits(start, end + 1, target) {
            end += 1;
        }

        let text = words[start..end].join(" ");

        // words[start..prev_end] repeat the tail of the previous window
        let overlap_bytes = if start < prev_end {
            words[start..prev_end].iter().map(|w| w.len() + 1).sum()
        } else {
            0
        };

        chunks.push(Chunk {
            token_estimate: estimator.estimate(&text),
            text,
            origin: UnitKind::Word,
            overlap_bytes,
        });

        if end >= words.len() {
            break;
        }
        prev_end = end;

        let mut next = if overlap == 0 { end } else { start + 1 };
        while next < end && !(fits(next, end, overlap) && fits(next, end + 1, target)) {
            next += 1;
        }
        start = next;
    }

    chunks
}
