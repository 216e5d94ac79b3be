//! Document segmentation: cutting a source text into ordered translation units.
//!
//! Two granularities are supported. Paragraph mode splits on blank-line
//! boundaries; sentence mode splits on sentence-terminal punctuation, covering
//! both Latin marks and their Arabic-script counterparts. Fragments below the
//! per-mode minimum length are discarded. Output order and content are a pure
//! function of the input, so re-segmenting the same document always yields the
//! same sequence.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// One unit per sentence.
pub const GRANULARITY_SENTENCE: &str = "sentence";

/// One unit per paragraph.
pub const GRANULARITY_PARAGRAPH: &str = "paragraph";

/// All valid unit granularity values.
pub const VALID_GRANULARITIES: &[&str] = &[GRANULARITY_SENTENCE, GRANULARITY_PARAGRAPH];

/// A sentence fragment must exceed this many characters (after trimming) to
/// become a work item.
pub const MIN_SENTENCE_CHARS: usize = 10;

/// A paragraph fragment must exceed this many characters (after trimming) to
/// become a work item.
pub const MIN_PARAGRAPH_CHARS: usize = 20;

/// Blank-line paragraph boundary: a newline, optional whitespace, and at
/// least one more newline.
static PARAGRAPH_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("paragraph boundary pattern is valid"));

/// Sentence-terminal punctuation: Latin `.` `!` `?` `…` plus the Arabic
/// question mark `؟` and the Urdu full stop `۔`.
static SENTENCE_TERMINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?…؟۔]+").expect("sentence terminal pattern is valid"));

/// List/clause separators stripped from fragment tails in sentence mode,
/// covering both Latin and Arabic comma/semicolon forms.
const TRAILING_SEPARATORS: &[char] = &[',', '،', ';', '؛', ':', '-'];

/// Validate that a granularity string is one of the accepted values.
pub fn validate_granularity(granularity: &str) -> Result<(), CoreError> {
    if VALID_GRANULARITIES.contains(&granularity) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid unit granularity '{granularity}'. Must be one of: {}",
            VALID_GRANULARITIES.join(", ")
        )))
    }
}

/// Split a source document into ordered, trimmed translation fragments.
///
/// A document producing zero qualifying fragments yields an empty vec;
/// packet creation treats that as a failure rather than silently accepting
/// zero work.
pub fn segment(text: &str, granularity: &str) -> Result<Vec<String>, CoreError> {
    validate_granularity(granularity)?;

    let fragments = match granularity {
        GRANULARITY_PARAGRAPH => split_paragraphs(text),
        _ => split_sentences(text),
    };

    Ok(fragments)
}

/// Split on blank-line boundaries, keeping fragments whose trimmed length
/// exceeds [`MIN_PARAGRAPH_CHARS`].
fn split_paragraphs(text: &str) -> Vec<String> {
    PARAGRAPH_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|p| p.chars().count() > MIN_PARAGRAPH_CHARS)
        .map(str::to_string)
        .collect()
}

/// Split on sentence-terminal punctuation, strip trailing separators, and
/// keep fragments whose trimmed length exceeds [`MIN_SENTENCE_CHARS`].
fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_TERMINAL
        .split(text)
        .map(|s| s.trim().trim_end_matches(TRAILING_SEPARATORS).trim())
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- granularity validation ---------------------------------------------

    #[test]
    fn test_valid_granularities_accepted() {
        assert!(validate_granularity(GRANULARITY_SENTENCE).is_ok());
        assert!(validate_granularity(GRANULARITY_PARAGRAPH).is_ok());
    }

    #[test]
    fn test_invalid_granularity_rejected() {
        let result = segment("some text", "word");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid unit granularity"));
    }

    // -- paragraph mode -----------------------------------------------------

    #[test]
    fn test_paragraph_mode_splits_on_blank_lines() {
        let text = "First paragraph with enough text to qualify.\n\n\
                    Second paragraph, also long enough to keep.";
        let fragments = segment(text, GRANULARITY_PARAGRAPH).unwrap();
        assert_eq!(fragments.len(), 2);
        assert_eq!(
            fragments[0],
            "First paragraph with enough text to qualify."
        );
    }

    #[test]
    fn test_paragraph_mode_drops_short_fragments() {
        let text = "Hello there. This is long enough.\n\nShort";
        let fragments = segment(text, GRANULARITY_PARAGRAPH).unwrap();
        assert_eq!(fragments, vec!["Hello there. This is long enough."]);
    }

    #[test]
    fn test_paragraph_mode_handles_multiple_blank_lines() {
        let text = "Paragraph one has plenty of words.\n\n\n\nParagraph two has plenty of words.";
        let fragments = segment(text, GRANULARITY_PARAGRAPH).unwrap();
        assert_eq!(fragments.len(), 2);
    }

    #[test]
    fn test_paragraph_boundary_at_exact_minimum_is_dropped() {
        // Exactly 20 chars must NOT qualify; the threshold is strict.
        let text = "12345678901234567890";
        assert_eq!(text.chars().count(), MIN_PARAGRAPH_CHARS);
        let fragments = segment(text, GRANULARITY_PARAGRAPH).unwrap();
        assert!(fragments.is_empty());
    }

    // -- sentence mode ------------------------------------------------------

    #[test]
    fn test_sentence_mode_splits_on_latin_terminals() {
        let text = "This is the first sentence. This is the second sentence! Is this the third?";
        let fragments = segment(text, GRANULARITY_SENTENCE).unwrap();
        assert_eq!(
            fragments,
            vec![
                "This is the first sentence",
                "This is the second sentence",
                "Is this the third",
            ]
        );
    }

    #[test]
    fn test_sentence_mode_splits_on_arabic_terminals() {
        let text = "هل تتكلم اللغة العربية؟ نعم أتكلمها بطلاقة كاملة۔";
        let fragments = segment(text, GRANULARITY_SENTENCE).unwrap();
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0], "هل تتكلم اللغة العربية");
    }

    #[test]
    fn test_sentence_mode_strips_trailing_separators() {
        let text = "A sentence ending in a comma,. Another long enough sentence؛.";
        let fragments = segment(text, GRANULARITY_SENTENCE).unwrap();
        assert_eq!(
            fragments,
            vec![
                "A sentence ending in a comma",
                "Another long enough sentence",
            ]
        );
    }

    #[test]
    fn test_sentence_mode_drops_short_fragments() {
        let text = "Tiny. This sentence is long enough to survive the cut.";
        let fragments = segment(text, GRANULARITY_SENTENCE).unwrap();
        assert_eq!(
            fragments,
            vec!["This sentence is long enough to survive the cut"]
        );
    }

    #[test]
    fn test_sentence_mode_collapses_repeated_terminals() {
        let text = "What is going on here?! Something quite strange indeed...";
        let fragments = segment(text, GRANULARITY_SENTENCE).unwrap();
        assert_eq!(fragments.len(), 2);
    }

    // -- determinism and empty input ----------------------------------------

    #[test]
    fn test_segmentation_is_deterministic() {
        let text = "First sentence of the document. Second sentence of the document. \
                    Third one؟ And a fourth sentence to finish!";
        let first = segment(text, GRANULARITY_SENTENCE).unwrap();
        let second = segment(text, GRANULARITY_SENTENCE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_document_yields_empty_sequence() {
        assert!(segment("", GRANULARITY_SENTENCE).unwrap().is_empty());
        assert!(segment("", GRANULARITY_PARAGRAPH).unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_only_document_yields_empty_sequence() {
        assert!(segment("  \n\n  \n ", GRANULARITY_PARAGRAPH).unwrap().is_empty());
    }
}
