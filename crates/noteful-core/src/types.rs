//! API-facing record types.
//!
//! These are the JSON documents the server returns and the CLI reads back.
//! Field names are camelCase on the wire. The stored password hash has no
//! counterpart here and therefore can never be serialized.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{FolderId, NoteId, TagId, UserId};

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub full_name: Option<String>,
}

/// A folder owned by a user. Names are unique per owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A tag owned by a user. Names are unique per owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A note, optionally filed in one folder and labelled with any number of tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: Option<String>,
    pub folder_id: Option<FolderId>,
    #[serde(default)]
    pub tags: Vec<TagId>,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_camel_case_without_password() {
        let user = User {
            id: UserId::new(),
            username: "bobuser".to_string(),
            full_name: Some("Bob User".to_string()),
        };
        let json = serde_json::to_value(&user).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(json["fullName"], "Bob User");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn note_without_folder_serializes_null() {
        let now = Utc::now();
        let note = Note {
            id: NoteId::new(),
            title: "Cats".to_string(),
            content: None,
            folder_id: None,
            tags: vec![],
            user_id: UserId::new(),
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&note).unwrap();
        assert!(json["folderId"].is_null());
        assert!(json["content"].is_null());
        assert_eq!(json["tags"], serde_json::json!([]));
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }
}
