//! Note list filtering.

use serde::{Deserialize, Serialize};

use crate::ids::{FolderId, TagId, parse_id};
use crate::validate::ValidationError;

/// Raw query parameters accepted by `GET /api/notes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteListParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<String>,
}

/// A validated note filter. All present criteria must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    /// Case-insensitive substring of the title or the content.
    pub search_term: Option<String>,
    pub folder_id: Option<FolderId>,
    pub tag_id: Option<TagId>,
}

impl NoteFilter {
    /// Filter matching every note of the owner.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.search_term.is_none() && self.folder_id.is_none() && self.tag_id.is_none()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl TryFrom<NoteListParams> for NoteFilter {
    type Error = ValidationError;

    fn try_from(params: NoteListParams) -> Result<Self, Self::Error> {
        let folder_id = non_empty(params.folder_id)
            .map(|raw| parse_id(&raw, "folderId").map(FolderId::from_uuid))
            .transpose()?;
        let tag_id = non_empty(params.tag_id)
            .map(|raw| parse_id(&raw, "tagId").map(TagId::from_uuid))
            .transpose()?;

        Ok(Self {
            search_term: non_empty(params.search_term),
            folder_id,
            tag_id,
        })
    }
}
