//! Database models for the storage layer.
//!
//! Row types map directly onto table columns for sqlx. They convert into the
//! API types of noteful-core; the conversion is where the password hash is
//! left behind.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use noteful_core::{Folder, FolderId, Note, NoteId, Tag, TagId, User, UserId};

/// Database row for the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub full_name: Option<String>,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::from_uuid(row.id),
            username: row.username,
            full_name: row.full_name,
        }
    }
}

/// Database row for the `folders` table.
#[derive(Debug, Clone, FromRow)]
pub struct FolderRow {
    pub id: Uuid,
    pub name: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FolderRow> for Folder {
    fn from(row: FolderRow) -> Self {
        Self {
            id: FolderId::from_uuid(row.id),
            name: row.name,
            user_id: UserId::from_uuid(row.user_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Database row for the `tags` table.
#[derive(Debug, Clone, FromRow)]
pub struct TagRow {
    pub id: Uuid,
    pub name: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TagRow> for Tag {
    fn from(row: TagRow) -> Self {
        Self {
            id: TagId::from_uuid(row.id),
            name: row.name,
            user_id: UserId::from_uuid(row.user_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// A `notes` row joined with its tag ids (aggregated from `note_tags`).
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub title: String,
    pub content: Option<String>,
    pub folder_id: Option<Uuid>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Tag ids in the order they were attached.
    pub tags: Vec<Uuid>,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Self {
            id: NoteId::from_uuid(row.id),
            title: row.title,
            content: row.content,
            folder_id: row.folder_id.map(FolderId::from_uuid),
            tags: row.tags.into_iter().map(TagId::from_uuid).collect(),
            user_id: UserId::from_uuid(row.user_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Input for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: UserId,
    pub username: String,
    pub full_name: Option<String>,
    pub password_hash: String,
}

impl NewUser {
    /// Create a new user input with a random id.
    pub fn new(
        username: impl Into<String>,
        full_name: Option<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::new(),
            username: username.into(),
            full_name,
            password_hash: password_hash.into(),
        }
    }
}

/// Input for creating a new folder.
#[derive(Debug, Clone)]
pub struct NewFolder {
    pub id: FolderId,
    pub name: String,
    pub user_id: UserId,
}

impl NewFolder {
    /// Create a new folder input with a random id.
    pub fn new(name: impl Into<String>, owner: UserId) -> Self {
        Self {
            id: FolderId::new(),
            name: name.into(),
            user_id: owner,
        }
    }
}

/// Input for creating a new tag.
#[derive(Debug, Clone)]
pub struct NewTag {
    pub id: TagId,
    pub name: String,
    pub user_id: UserId,
}

impl NewTag {
    /// Create a new tag input with a random id.
    pub fn new(name: impl Into<String>, owner: UserId) -> Self {
        Self {
            id: TagId::new(),
            name: name.into(),
            user_id: owner,
        }
    }
}

/// Input for creating a new note.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub id: NoteId,
    pub user_id: UserId,
    pub title: String,
    pub content: Option<String>,
    pub folder_id: Option<FolderId>,
    pub tags: Vec<TagId>,
}

impl NewNote {
    /// Build a note input from a validated draft.
    pub fn from_draft(draft: noteful_core::NoteDraft, owner: UserId) -> Self {
        Self {
            id: NoteId::new(),
            user_id: owner,
            title: draft.title,
            content: draft.content,
            folder_id: draft.folder_id,
            tags: draft.tags,
        }
    }
}

/// Unwrap typed ids into the UUIDs sqlx binds.
pub(crate) fn tag_uuids(tags: &[TagId]) -> Vec<Uuid> {
    tags.iter().map(|t| t.0).collect()
}
