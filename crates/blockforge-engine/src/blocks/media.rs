use crate::blocks::RecordId;
use serde::Deserialize;

/// A relationship to a media record.
///
/// The content store returns either a bare record id (when the relationship
/// was not populated by the upstream query) or the full media object.
/// Rendering requires the resolved form; an unresolved reference renders
/// nothing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MediaRef {
    Unresolved(RecordId),
    Resolved(Media),
}

impl MediaRef {
    pub fn resolved(&self) -> Option<&Media> {
        match self {
            Self::Resolved(media) => Some(media),
            Self::Unresolved(_) => None,
        }
    }
}

/// A populated media record, as projected by the content store.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Media {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}
