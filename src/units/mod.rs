use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// One or more blank lines
static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("paragraph break pattern is valid"));

/// Terminal punctuation followed by whitespace
static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("sentence break pattern is valid"));

/// A line opening with `<digits>. `
static NUMBERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*\d+\.\s").expect("numbered item pattern is valid"));

/// A candidate break span borrowed from the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaturalUnit<'a> {
    /// Trimmed, never empty
    pub text: &'a str,
    pub kind: UnitKind,
}

/// Granularity a unit was split at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitKind {
    /// Blank-line separated block
    Paragraph,
    /// Terminal-punctuation separated span
    Sentence,
    /// Whitespace separated token
    Word,
    /// One item of a numbered list
    Section,
}

impl<'a> NaturalUnit<'a> {
    fn new(text: &'a str, kind: UnitKind) -> Option<Self> {
        let text = text.trim();
        (!text.is_empty()).then_some(Self { text, kind })
    }
}

/// Split on blank lines, dropping empty pieces
pub fn split_paragraphs(text: &str) -> Vec<NaturalUnit<'_>> {
    PARAGRAPH_BREAK
        .split(text)
        .filter_map(|p| NaturalUnit::new(p, UnitKind::Paragraph))
        .collect()
}

/// Split after `.`, `!` or `?` when followed by whitespace.
///
/// The punctuation stays with the preceding sentence; a trailing span without
/// terminal punctuation is kept as its own sentence. Blank lines always end a
/// sentence.
pub fn split_sentences(text: &str) -> Vec<NaturalUnit<'_>> {
    PARAGRAPH_BREAK.split(text).flat_map(sentences_in).collect()
}

fn sentences_in(block: &str) -> Vec<NaturalUnit<'_>> {
    let mut units = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK.find_iter(block) {
        // punctuation is a single ASCII byte
        let end = m.start() + 1;
        if is_list_marker(&block[start..end]) {
            continue;
        }
        units.extend(NaturalUnit::new(&block[start..end], UnitKind::Sentence));
        start = m.end();
    }
    units.extend(NaturalUnit::new(&block[start..], UnitKind::Sentence));

    units
}

/// `12.` on its own is a list marker, not a sentence
fn is_list_marker(span: &str) -> bool {
    span.trim()
        .strip_suffix('.')
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

/// Split on whitespace runs
pub fn split_words(text: &str) -> Vec<NaturalUnit<'_>> {
    text.split_whitespace()
        .map(|w| NaturalUnit {
            text: w,
            kind: UnitKind::Word,
        })
        .collect()
}

/// Whether a paragraph opens with a numbered list item like `1. `
pub fn is_numbered_list(paragraph: &str) -> bool {
    NUMBERED_ITEM
        .find(paragraph.trim_start())
        .is_some_and(|m| m.start() == 0)
}

/// Explode a numbered list into one section per item.
///
/// Returns `None` when the paragraph does not open with a numbered item.
pub fn split_numbered_sections(paragraph: &str) -> Option<Vec<NaturalUnit<'_>>> {
    let paragraph = paragraph.trim();
    if !is_numbered_list(paragraph) {
        return None;
    }

    let starts: Vec<usize> = NUMBERED_ITEM.find_iter(paragraph).map(|m| m.start()).collect();
    let sections = starts
        .iter()
        .enumerate()
        .filter_map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(paragraph.len());
            NaturalUnit::new(&paragraph[start..end], UnitKind::Section)
        })
        .collect();

    Some(sections)
}

/// Join units back into text with `joiner` between them
pub(crate) fn join_units(units: &[NaturalUnit<'_>], joiner: &str) -> String {
    units.iter().map(|u| u.text).collect::<Vec<_>>().join(joiner)
}
