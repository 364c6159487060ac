use crate::blocks::Block;
use crate::page::Page;
use crate::richtext::RichTextContent;
use thiserror::Error;

/// Failure to turn raw JSON into the typed content model.
///
/// This is the engine's only fallible surface. Once a document has parsed,
/// rendering cannot fail; malformed content inside a parsed document
/// degrades per block instead.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to parse {what}: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a page document (a `Pages` collection projection).
pub fn parse_page(json: &str) -> Result<Page, InputError> {
    serde_json::from_str(json).map_err(|source| InputError::Json {
        what: "page document",
        source,
    })
}

/// Parse a bare block sequence.
pub fn parse_blocks(json: &str) -> Result<Vec<Block>, InputError> {
    serde_json::from_str(json).map_err(|source| InputError::Json {
        what: "block list",
        source,
    })
}

/// Parse a bare rich-text field value.
pub fn parse_rich_text(json: &str) -> Result<RichTextContent, InputError> {
    serde_json::from_str(json).map_err(|source| InputError::Json {
        what: "rich text content",
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_json_reports_what_was_being_parsed() {
        let err = parse_page("{not json").unwrap_err();
        assert!(err.to_string().contains("page document"));
    }

    #[test]
    fn block_list_round_trips_through_the_parser() {
        let blocks = parse_blocks(
            r#"[{ "blockType": "heading", "isActive": true, "heading": { "text": "T" } }]"#,
        )
        .unwrap();
        assert_eq!(blocks.len(), 1);
    }
}
