//! Unit tests for answer normalization and matching.

use lingoquest::lessons::session::{normalize_answer, speaking_matches, translation_matches};

#[test]
fn test_normalize_strips_punctuation_and_case() {
    assert_eq!(normalize_answer("Où est la gare?"), "où est la gare");
    assert_eq!(normalize_answer("  Ja, bitte!  "), "ja bitte");
    assert_eq!(normalize_answer("..."), "");
}

#[test]
fn test_speaking_accepts_containing_utterance() {
    assert!(speaking_matches("Guten Morgen", "guten morgen."));
    assert!(speaking_matches("ähm guten morgen zusammen", "Guten Morgen"));
    assert!(!speaking_matches("guten abend", "guten morgen"));
}

#[test]
fn test_speaking_rejects_silence() {
    assert!(!speaking_matches("   ", "hola"));
    assert!(!speaking_matches("?!", "hola"));
}

#[test]
fn test_translation_requires_full_match() {
    assert!(translation_matches("the cat is black.", "The cat is black"));
    assert!(!translation_matches("the cat is very black", "The cat is black"));
    assert!(!translation_matches("cat", "The cat is black"));
}
