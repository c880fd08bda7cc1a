//! noteful-store: Storage layer for the Noteful API
//!
//! This crate provides:
//! - PostgreSQL storage for users, folders, notes and tags
//! - Owner-scoped CRUD: every folder, note and tag query is filtered by the
//!   owning user, so records of other users read as "not found"
//! - Schema bootstrap and database seeding
//!
//! # Usage
//!
//! ```rust,ignore
//! use noteful_store::{NewFolder, Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! let folder = store.insert_folder(&NewFolder::new("Work", owner)).await?;
//! let notes = store.list_notes(owner, &NoteFilter::all()).await?;
//! ```

pub mod error;
pub mod models;
pub mod queries;
pub mod schema;
pub mod seed;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::*;
pub use seed::{SeedData, SeedFolder, SeedNote, SeedTag, SeedUser};
pub use store::{Store, StoreConfig};

// Re-export noteful-core for downstream crates
pub use noteful_core;
