//! Full-document interchange: the save/load and import/export contract.

use crate::interchange::InterchangeError;
use crate::model::document::Document;

/// Serializes the document as pretty-printed interchange JSON.
pub fn serialize_document(document: &Document) -> Result<String, InterchangeError> {
    serde_json::to_string_pretty(document).map_err(InterchangeError::Serialize)
}

/// Parses interchange JSON into a document.
///
/// Structural failures (missing `frontmatter`/`sections`, wrong shapes)
/// surface as one human-readable error; nothing is partially applied.
pub fn parse_document(json: &str) -> Result<Document, InterchangeError> {
    serde_json::from_str(json).map_err(|err| {
        InterchangeError::InvalidStructure(format!("invalid digest draft: {err}"))
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_document, serialize_document};
    use crate::model::document::Document;

    #[test]
    fn empty_document_round_trips() {
        let document = Document::default();
        let json = serialize_document(&document).unwrap();
        let parsed = parse_document(&json).unwrap();
        assert_eq!(parsed, document);
    }

    #[test]
    fn missing_sections_key_is_a_structural_error() {
        let err = parse_document(r#"{"frontmatter": {}}"#).unwrap_err();
        assert!(err.to_string().contains("invalid digest draft"));
    }
}
