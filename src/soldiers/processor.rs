//! Document processor soldier ("Master of Shadow")
//!
//! Consumes one queued document per tick and tokenizes it into entities.
//! Splitting on whitespace is the entire parsing step; tokens of one or two
//! characters are dropped as noise.

use crate::entity::Entity;

/// Power assigned to every entity minted from a document token
pub const DOCUMENT_ENTITY_POWER: f64 = 0.8;

/// Characters shown when logging a document preview
pub const PREVIEW_CHARS: usize = 30;

/// Tokenize one document into entities
///
/// Each whitespace token longer than 2 characters becomes an entity of type
/// `processed_doc` with fixed power 0.8 and one activation (the ingestion
/// touch counts as its first activity).
pub fn tokenize_document(document: &str) -> Vec<Entity> {
    document
        .split_whitespace()
        .filter(|token| token.chars().count() > 2)
        .map(|token| Entity::new(token, DOCUMENT_ENTITY_POWER, "processed_doc", 1))
        .collect()
}

/// Truncated preview of a document for log lines
///
/// Truncation is by character, never mid-codepoint; an ellipsis marks cut
/// documents.
pub fn preview(document: &str, max_chars: usize) -> String {
    let mut chars = document.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_tokens_are_dropped() {
        // lengths 3, 2, 5: only "abc" and "fghij" survive
        let entities = tokenize_document("abc de fghij");

        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].content, "abc");
        assert_eq!(entities[1].content, "fghij");
        for entity in &entities {
            assert!((entity.power - DOCUMENT_ENTITY_POWER).abs() < f64::EPSILON);
            assert_eq!(entity.entity_type, "processed_doc");
            assert_eq!(entity.activation_count, 1);
        }
    }

    #[test]
    fn test_empty_and_whitespace_documents_yield_nothing() {
        assert!(tokenize_document("").is_empty());
        assert!(tokenize_document("   \t\n  ").is_empty());
        assert!(tokenize_document("a b cc").is_empty());
    }

    #[test]
    fn test_token_length_counts_characters_not_bytes() {
        // Two characters, six bytes: still too short.
        assert!(tokenize_document("ظل").is_empty());
        // Four characters: kept.
        assert_eq!(tokenize_document("ظلال").len(), 1);
    }

    #[test]
    fn test_preview_truncates_long_documents() {
        let long = "x".repeat(40);
        let shown = preview(&long, PREVIEW_CHARS);
        assert_eq!(shown, format!("{}...", "x".repeat(30)));
    }

    #[test]
    fn test_preview_keeps_short_documents_whole() {
        assert_eq!(preview("short text", PREVIEW_CHARS), "short text");
        assert_eq!(preview("", PREVIEW_CHARS), "");
    }

    #[test]
    fn test_preview_is_char_boundary_safe() {
        let arabic = "الفوضى الخلاقة تبدأ من العدم المطلق دائما";
        let shown = preview(arabic, 10);
        assert_eq!(shown.chars().count(), 13); // 10 chars + "..."
    }
}
