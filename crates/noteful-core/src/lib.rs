//! noteful-core: Core types for the Noteful note-taking API
//!
//! This crate provides:
//! - Typed identifiers for users, folders, notes, and tags
//! - The JSON shapes of every record returned by the API
//! - Request-body validation rules shared by the server and tests
//! - The note list filter built from query parameters
//!
//! Nothing in this crate performs I/O.

pub mod ids;
pub mod query;
pub mod types;
pub mod validate;

pub use ids::{FolderId, NoteId, TagId, UserId, parse_id};
pub use query::{NoteFilter, NoteListParams};
pub use types::{Folder, Note, Tag, User};
pub use validate::{
    LoginRequest, NameInput, NoteDraft, NotePatch, UserRegistration, ValidationError,
    ValidationKind,
};
