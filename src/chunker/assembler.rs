use std::ops::Range;

use tracing::trace;

use super::{word_windows, Chunk};
use crate::estimator::TokenEstimator;
use crate::units::{join_units, split_sentences, NaturalUnit};

/// What to do with a unit that alone exceeds the target size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Overflow {
    /// Emit it as a single over-budget chunk
    Emit,
    /// Force-split into word windows
    WordWindows,
    /// Sentence-pack it, word-windowing any sentence that still overflows
    Sentences,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Accumulating,
    Flush,
    OverflowSplit,
    Done,
}

/// Units currently held for the next chunk.
///
/// Always a contiguous run `first..end`; `first..fresh` is the overlap prefix
/// carried over from the previous chunk.
#[derive(Debug, Clone, Copy)]
struct Pending {
    first: usize,
    fresh: usize,
    end: usize,
    tokens: usize,
}

impl Pending {
    fn empty_at(index: usize) -> Self {
        Self {
            first: index,
            fresh: index,
            end: index,
            tokens: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.first == self.end
    }

    fn has_fresh(&self) -> bool {
        self.fresh < self.end
    }
}

/// Packs natural units into chunks under a token budget
pub(crate) struct Assembler<'e> {
    pub estimator: &'e dyn TokenEstimator,
    pub target: usize,
    /// Overlap applied between whole units
    pub overlap: usize,
    /// Overlap applied inside overflow splits
    pub fallback_overlap: usize,
    pub joiner: &'static str,
    pub overflow: Overflow,
}

impl Assembler<'_> {
    pub fn assemble(&self, units: &[NaturalUnit<'_>]) -> Vec<Chunk> {
        let costs: Vec<usize> = units.iter().map(|u| self.estimator.estimate(u.text)).collect();

        let mut chunks = Vec::new();
        let mut pending = Pending::empty_at(0);
        let mut next = 0;
        let mut state = State::Accumulating;

        while state != State::Done {
            state = match state {
                State::Accumulating => match costs.get(next) {
                    None => {
                        if pending.has_fresh() {
                            chunks.push(self.build_chunk(units, &pending));
                        }
                        State::Done
                    }
                    Some(&cost)
                        if pending.tokens + cost <= self.target
                            && self.measure(units, pending.first..next + 1) <= self.target =>
                    {
                        pending.end = next + 1;
                        pending.tokens += cost;
                        next += 1;
                        State::Accumulating
                    }
                    Some(_) if !pending.is_empty() => State::Flush,
                    Some(_) => State::OverflowSplit,
                },
                State::Flush => {
                    if pending.has_fresh() {
                        chunks.push(self.build_chunk(units, &pending));
                    }
                    pending = self.seed_overlap(units, &costs, &pending, costs[next]);
                    trace!(
                        chunk = chunks.len(),
                        carried = pending.end - pending.first,
                        "flushed chunk"
                    );
                    State::Accumulating
                }
                State::OverflowSplit => {
                    trace!(unit = next, tokens = costs[next], "unit exceeds target");
                    chunks.extend(self.split_oversized(units[next]));
                    next += 1;
                    pending = Pending::empty_at(next);
                    State::Accumulating
                }
                State::Done => State::Done,
            };
        }

        chunks
    }

    /// Start the next chunk with a suffix of the previous chunk's fresh units.
    ///
    /// Whole units are taken backwards while the carried estimate stays within
    /// `overlap` and still leaves room for the unit that triggered the flush.
    fn seed_overlap(
        &self,
        units: &[NaturalUnit<'_>],
        costs: &[usize],
        prev: &Pending,
        trigger_cost: usize,
    ) -> Pending {
        let mut first = prev.end;
        let mut tokens = 0;

        while self.overlap > 0 && first > prev.fresh {
            let cost = costs[first - 1];
            if tokens + cost > self.overlap
                || tokens + cost + trigger_cost > self.target
                || self.measure(units, first - 1..prev.end) > self.overlap
            {
                break;
            }
            tokens += cost;
            first -= 1;
        }

        Pending {
            first,
            fresh: prev.end,
            end: prev.end,
            tokens,
        }
    }

    /// Estimate of `units[range]` as they would be joined into a chunk.
    ///
    /// Summed unit costs can undercount the joined text for estimators that
    /// are not additive across words, so packing checks both.
    fn measure(&self, units: &[NaturalUnit<'_>], range: Range<usize>) -> usize {
        self.estimator.estimate(&join_units(&units[range], self.joiner))
    }

    fn build_chunk(&self, units: &[NaturalUnit<'_>], pending: &Pending) -> Chunk {
        let text = join_units(&units[pending.first..pending.end], self.joiner);
        let overlap_bytes = overlap_len(units, pending.first..pending.fresh, self.joiner);

        Chunk {
            token_estimate: self.estimator.estimate(&text),
            text,
            origin: units[pending.fresh].kind,
            overlap_bytes,
        }
    }

    fn split_oversized(&self, unit: NaturalUnit<'_>) -> Vec<Chunk> {
        match self.overflow {
            Overflow::Emit => vec![Chunk {
                text: unit.text.to_string(),
                token_estimate: self.estimator.estimate(unit.text),
                origin: unit.kind,
                overlap_bytes: 0,
            }],
            Overflow::WordWindows => word_windows(
                unit.text,
                self.target,
                self.fallback_overlap,
                self.estimator,
            ),
            Overflow::Sentences => {
                let sentences = split_sentences(unit.text);
                Assembler {
                    estimator: self.estimator,
                    target: self.target,
                    overlap: self.fallback_overlap,
                    fallback_overlap: self.fallback_overlap,
                    joiner: " ",
                    overflow: Overflow::WordWindows,
                }
                .assemble(&sentences)
            }
        }
    }
}

/// Byte length of the overlap units plus the joiner that follows them
fn overlap_len(units: &[NaturalUnit<'_>], overlap: Range<usize>, joiner: &str) -> usize {
    if overlap.is_empty() {
        return 0;
    }
    units[overlap].iter().map(|u| u.text.len() + joiner.len()).sum()
}
