//! Typed identifiers for persisted records.
//!
//! Every record carries a UUID v4. The newtypes keep a folder id from being
//! passed where a tag id is expected; on the wire they are plain UUID strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::validate::ValidationError;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random id using UUID v4.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wraps an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

record_id!(
    /// Identifier of a registered user.
    UserId
);
record_id!(
    /// Identifier of a folder.
    FolderId
);
record_id!(
    /// Identifier of a note.
    NoteId
);
record_id!(
    /// Identifier of a tag.
    TagId
);

/// Parse an identifier supplied by a client (path segment, query parameter or
/// body field).
///
/// Only the canonical hyphenated UUID form is accepted. `field` names the
/// offending input in the error message, e.g. ``The `folderId` is not valid``.
pub fn parse_id(raw: &str, field: &str) -> Result<Uuid, ValidationError> {
    if raw.len() != 36 {
        return Err(ValidationError::invalid_id(field));
    }
    Uuid::parse_str(raw).map_err(|_| ValidationError::invalid_id(field))
}
