//! Error types for the storage layer.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection or query error.
    #[error("database error: {0}")]
    Connection(#[from] sqlx::Error),

    /// User not found.
    #[error("user not found: {0}")]
    UserNotFound(Uuid),

    /// Folder not found (or owned by another user).
    #[error("folder not found: {0}")]
    FolderNotFound(Uuid),

    /// Note not found (or owned by another user).
    #[error("note not found: {0}")]
    NoteNotFound(Uuid),

    /// Tag not found (or owned by another user).
    #[error("tag not found: {0}")]
    TagNotFound(Uuid),

    /// Username already taken.
    #[error("duplicate username: {0}")]
    DuplicateUsername(String),

    /// The owner already has a folder with this name.
    #[error("duplicate folder name: {0}")]
    DuplicateFolderName(String),

    /// The owner already has a tag with this name.
    #[error("duplicate tag name: {0}")]
    DuplicateTagName(String),

    /// A note referenced a folder the owner does not have.
    #[error("invalid folder reference: {0}")]
    InvalidFolder(Uuid),

    /// A note referenced a tag the owner does not have.
    #[error("invalid tag reference: {0}")]
    InvalidTag(Uuid),

    /// Schema bootstrap error.
    #[error("schema error: {0}")]
    SchemaError(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl StoreError {
    /// True for lookups that found nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::FolderNotFound(_)
                | Self::NoteNotFound(_)
                | Self::TagNotFound(_)
        )
    }
}

/// Whether a database error is a unique-constraint violation.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_variants() {
        assert!(StoreError::NoteNotFound(Uuid::nil()).is_not_found());
        assert!(StoreError::FolderNotFound(Uuid::nil()).is_not_found());
        assert!(!StoreError::DuplicateTagName("x".into()).is_not_found());
        assert!(!StoreError::InvalidTag(Uuid::nil()).is_not_found());
    }

    #[test]
    fn row_not_found_is_not_a_unique_violation() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
    }

    #[test]
    fn error_messages() {
        let err = StoreError::DuplicateFolderName("Work".to_string());
        assert_eq!(err.to_string(), "duplicate folder name: Work");
    }
}
