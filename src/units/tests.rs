use super::*;

fn texts<'a>(units: &[NaturalUnit<'a>]) -> Vec<&'a str> {
    units.iter().map(|u| u.text).collect()
}

// ========================================================================
// Paragraphs
// ========================================================================

#[test]
fn test_paragraphs_split_on_blank_lines() {
    let text = "First para\nstill first.\n\nSecond para.\n\n\n\nThird.";
    let units = split_paragraphs(text);

    assert_eq!(
        texts(&units),
        vec!["First para\nstill first.", "Second para.", "Third."]
    );
    assert!(units.iter().all(|u| u.kind == UnitKind::Paragraph));
}

#[test]
fn test_paragraphs_blank_lines_with_spaces_and_crlf() {
    let text = "one\r\n  \r\ntwo\n \t \nthree";
    assert_eq!(texts(&split_paragraphs(text)), vec!["one", "two", "three"]);
}

#[test]
fn test_paragraphs_drop_empty_pieces() {
    assert!(split_paragraphs("").is_empty());
    assert!(split_paragraphs("\n\n\n   \n\n").is_empty());
    assert_eq!(texts(&split_paragraphs("\n\nonly\n\n")), vec!["only"]);
}

// ========================================================================
// Sentences
// ========================================================================

#[test]
fn test_sentences_keep_terminal_punctuation() {
    let units = split_sentences("Hello there. How are you? Great!");
    assert_eq!(texts(&units), vec!["Hello there.", "How are you?", "Great!"]);
    assert!(units.iter().all(|u| u.kind == UnitKind::Sentence));
}

#[test]
fn test_sentences_keep_unterminated_tail() {
    let units = split_sentences("Done. And then some trailing words");
    assert_eq!(texts(&units), vec!["Done.", "And then some trailing words"]);
}

#[test]
fn test_sentences_need_whitespace_after_punctuation() {
    // decimals and abbreviations without a following space stay intact
    let units = split_sentences("Pi is 3.14 roughly. e.g.this stays");
    assert_eq!(texts(&units), vec!["Pi is 3.14 roughly.", "e.g.this stays"]);
}

#[test]
fn test_sentences_span_newlines() {
    let units = split_sentences("Line one.\nLine two.\n\nLine three.");
    assert_eq!(texts(&units), vec!["Line one.", "Line two.", "Line three."]);
}

#[test]
fn test_sentences_keep_list_markers_attached() {
    let units = split_sentences("1. First step. 2. Second step. Version 2. Done.");
    assert_eq!(
        texts(&units),
        vec!["1. First step.", "2. Second step.", "Version 2.", "Done."]
    );
}

#[test]
fn test_sentences_end_at_blank_lines() {
    let units = split_sentences("no stop here\n\nNext para. Last");
    assert_eq!(texts(&units), vec!["no stop here", "Next para.", "Last"]);
}

#[test]
fn test_sentences_empty_input() {
    assert!(split_sentences("").is_empty());
    assert!(split_sentences("   ").is_empty());
}

// ========================================================================
// Words
// ========================================================================

#[test]
fn test_words_split_on_whitespace_runs() {
    let units = split_words("  alpha\tbeta\n\ngamma  ");
    assert_eq!(texts(&units), vec!["alpha", "beta", "gamma"]);
    assert!(units.iter().all(|u| u.kind == UnitKind::Word));
    assert!(split_words(" \n ").is_empty());
}

// ========================================================================
// Numbered sections
// ========================================================================

#[test]
fn test_numbered_list_detection() {
    assert!(is_numbered_list("1. Install the tool"));
    assert!(is_numbered_list("  12. Twelfth step"));
    assert!(!is_numbered_list("Intro line\n1. Step"));
    assert!(!is_numbered_list("1.5 is a number"));
    assert!(!is_numbered_list("A. lettered"));
}

#[test]
fn test_numbered_sections_explode_per_item() {
    let para = "1. Scope of work.\nCovers the basics.\n2. Payment terms.\n3. Termination.";
    let sections = split_numbered_sections(para).unwrap();

    assert_eq!(
        texts(&sections),
        vec![
            "1. Scope of work.\nCovers the basics.",
            "2. Payment terms.",
            "3. Termination."
        ]
    );
    assert!(sections.iter().all(|u| u.kind == UnitKind::Section));
}

#[test]
fn test_numbered_sections_reject_plain_paragraph() {
    assert!(split_numbered_sections("Just a paragraph.").is_none());
    assert!(split_numbered_sections("").is_none());
}

#[test]
fn test_join_units() {
    let units = split_sentences("A. B. C.");
    assert_eq!(join_units(&units, " "), "A. B. C.");
    assert_eq!(join_units(&[], " "), "");
}
