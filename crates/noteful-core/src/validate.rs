//! Request-body validation.
//!
//! Bodies are inspected as raw JSON so that wrong types, missing fields and
//! malformed identifiers each produce the specific message clients rely on,
//! rather than a generic deserialization failure.

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::ids::{FolderId, TagId, parse_id};

/// Minimum username length, counted in characters.
pub const USERNAME_MIN_LEN: usize = 1;
/// Minimum password length, counted in characters.
pub const PASSWORD_MIN_LEN: usize = 8;
/// Maximum password length. Longer inputs are rejected rather than truncated.
pub const PASSWORD_MAX_LEN: usize = 72;

/// Which HTTP status class a validation failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// Malformed request (400).
    BadRequest,
    /// Well-formed JSON that breaks a field rule (422).
    Unprocessable,
}

/// A rejected request body or parameter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: ValidationKind,
    pub message: String,
    /// The offending field, when one can be named.
    pub location: Option<String>,
}

impl ValidationError {
    /// A 400 error tied to a field.
    pub fn bad_request(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            kind: ValidationKind::BadRequest,
            message: message.into(),
            location: Some(location.into()),
        }
    }

    /// A 422 error tied to a field.
    pub fn unprocessable(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            kind: ValidationKind::Unprocessable,
            message: message.into(),
            location: Some(location.into()),
        }
    }

    /// ``The `field` is not valid``.
    pub fn invalid_id(field: &str) -> Self {
        Self::bad_request(format!("The `{}` is not valid", field), field)
    }

    /// Machine-readable reason reported alongside the message.
    pub fn reason(&self) -> &'static str {
        "ValidationError"
    }
}

fn as_object(body: &Value) -> Option<&Map<String, Value>> {
    body.as_object()
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        _ => false,
    }
}

// ============================================================================
// Users
// ============================================================================

/// A validated sign-up request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRegistration {
    pub username: String,
    pub password: String,
    /// Trimmed full name; `None` when absent or blank.
    pub full_name: Option<String>,
}

impl UserRegistration {
    /// Validate a `POST /api/users` body.
    ///
    /// Checks run in a fixed order and the first failure wins: required
    /// fields, string types, surrounding whitespace, then length bounds.
    /// Every failure is a 422.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let empty = Map::new();
        let fields = as_object(body).unwrap_or(&empty);

        for field in ["username", "password"] {
            if !fields.contains_key(field) {
                return Err(ValidationError::unprocessable("Missing field", field));
            }
        }

        for field in ["username", "password", "fullName"] {
            if let Some(value) = fields.get(field)
                && !value.is_string()
            {
                return Err(ValidationError::unprocessable(
                    "Incorrect field type: expected string",
                    field,
                ));
            }
        }

        let username = fields["username"].as_str().unwrap_or_default();
        let password = fields["password"].as_str().unwrap_or_default();

        for (field, value) in [("username", username), ("password", password)] {
            if value.trim() != value {
                return Err(ValidationError::unprocessable(
                    "Cannot start or end with whitespace",
                    field,
                ));
            }
        }

        let sized = [
            ("username", username, USERNAME_MIN_LEN, None),
            ("password", password, PASSWORD_MIN_LEN, Some(PASSWORD_MAX_LEN)),
        ];

        if let Some((field, _, min, _)) = sized
            .iter()
            .find(|(_, value, min, _)| value.chars().count() < *min)
        {
            return Err(ValidationError::unprocessable(
                format!("Must be at least {} characters long", min),
                *field,
            ));
        }

        if let Some((field, _, _, Some(max))) = sized
            .iter()
            .find(|(_, value, _, max)| max.is_some_and(|max| value.chars().count() > max))
        {
            return Err(ValidationError::unprocessable(
                format!("Must be at most {} characters long", max),
                *field,
            ));
        }

        let full_name = fields
            .get("fullName")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
            full_name,
        })
    }
}

/// Credentials posted to the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    /// Both fields must be non-empty strings; anything else is a 400.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let field = |name: &str| {
            body.get(name)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .ok_or_else(|| ValidationError::bad_request("Missing credentials", name))
        };

        Ok(Self {
            username: field("username")?,
            password: field("password")?,
        })
    }
}

// ============================================================================
// Folders and tags
// ============================================================================

/// The body of a folder or tag create/rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameInput {
    pub name: String,
}

impl NameInput {
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let name = body
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ValidationError::bad_request("The `name` is not valid", "name"))?;

        Ok(Self {
            name: name.to_string(),
        })
    }
}

/// Reject an update whose body names a different record than the path.
pub fn check_body_id(body: &Value, path_id: Uuid) -> Result<(), ValidationError> {
    match body.get("id") {
        None | Some(Value::Null) => Ok(()),
        Some(Value::String(raw)) if parse_id(raw, "id").ok() == Some(path_id) => Ok(()),
        Some(_) => Err(ValidationError::bad_request(
            "Request path `id` and request body `id` do not match",
            "id",
        )),
    }
}

// ============================================================================
// Notes
// ============================================================================

fn parse_title(value: Option<&Value>) -> Result<String, ValidationError> {
    value
        .and_then(Value::as_str)
        .filter(|title| !title.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| ValidationError::bad_request("Missing `title` in request body", "title"))
}

fn parse_content(value: &Value) -> Result<Option<String>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(ValidationError::bad_request(
            "The `content` is not valid",
            "content",
        )),
    }
}

fn parse_folder(value: &Value) -> Result<Option<FolderId>, ValidationError> {
    if is_blank(Some(value)) {
        return Ok(None);
    }
    let raw = value
        .as_str()
        .ok_or_else(|| ValidationError::invalid_id("folderId"))?;
    Ok(Some(FolderId::from_uuid(parse_id(raw, "folderId")?)))
}

fn parse_tags(value: &Value) -> Result<Vec<TagId>, ValidationError> {
    let items = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        _ => {
            return Err(ValidationError::bad_request(
                "The `tags` property must be an array",
                "tags",
            ));
        }
    };

    let mut tags: Vec<TagId> = Vec::with_capacity(items.len());
    for item in items {
        let id = item
            .as_str()
            .and_then(|raw| parse_id(raw, "tags").ok())
            .ok_or_else(|| {
                ValidationError::bad_request("The `tags` array contains an invalid `id`", "tags")
            })?;
        let id = TagId::from_uuid(id);
        if !tags.contains(&id) {
            tags.push(id);
        }
    }
    Ok(tags)
}

/// A validated note creation body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: Option<String>,
    pub folder_id: Option<FolderId>,
    /// Distinct tag ids in the order given.
    pub tags: Vec<TagId>,
}

impl NoteDraft {
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let title = parse_title(body.get("title"))?;
        let content = match body.get("content") {
            Some(value) => parse_content(value)?,
            None => None,
        };
        let folder_id = match body.get("folderId") {
            Some(value) => parse_folder(value)?,
            None => None,
        };
        let tags = match body.get("tags") {
            Some(value) => parse_tags(value)?,
            None => Vec::new(),
        };

        Ok(Self {
            title,
            content,
            folder_id,
            tags,
        })
    }
}

/// A validated note update body. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    /// `Some(None)` clears the content.
    pub content: Option<Option<String>>,
    /// `Some(None)` detaches the note from its folder.
    pub folder_id: Option<Option<FolderId>>,
    /// Replaces the whole tag set when present.
    pub tags: Option<Vec<TagId>>,
}

impl NotePatch {
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let title = match body.get("title") {
            Some(value) => Some(parse_title(Some(value))?),
            None => None,
        };
        let content = body.get("content").map(parse_content).transpose()?;
        let folder_id = body.get("folderId").map(parse_folder).transpose()?;
        let tags = body.get("tags").map(parse_tags).transpose()?;

        Ok(Self {
            title,
            content,
            folder_id,
            tags,
        })
    }

    /// True when the body changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.folder_id.is_none()
            && self.tags.is_none()
    }
}
