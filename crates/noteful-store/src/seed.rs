//! Loading fixture data into an empty database.
//!
//! A seed file is JSON with four arrays (`users`, `folders`, `tags`, `notes`)
//! carrying explicit ids so records can reference each other. Users carry
//! either a plaintext `password` (hashed by the caller before seeding) or a
//! ready `passwordHash`.

use serde::{Deserialize, Serialize};

use noteful_core::{FolderId, NoteId, TagId, UserId};

use crate::error::{StoreError, StoreResult};
use crate::store::{Store, replace_note_tags};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<SeedUser>,
    #[serde(default)]
    pub folders: Vec<SeedFolder>,
    #[serde(default)]
    pub tags: Vec<SeedTag>,
    #[serde(default)]
    pub notes: Vec<SeedNote>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedUser {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedFolder {
    pub id: FolderId,
    pub name: String,
    pub user_id: UserId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedTag {
    pub id: TagId,
    pub name: String,
    pub user_id: UserId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedNote {
    pub id: NoteId,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub folder_id: Option<FolderId>,
    #[serde(default)]
    pub tags: Vec<TagId>,
    pub user_id: UserId,
}

impl SeedData {
    /// Parse seed data from JSON text.
    pub fn from_json(text: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Usernames of seed users that still lack a password hash.
    pub fn unhashed_users(&self) -> Vec<&str> {
        self.users
            .iter()
            .filter(|u| u.password_hash.is_none())
            .map(|u| u.username.as_str())
            .collect()
    }
}

impl Store {
    /// Wipe every table and load `data`, all in one transaction.
    ///
    /// Every user must already carry a `password_hash`.
    pub async fn reset_and_seed(&self, data: &SeedData) -> StoreResult<()> {
        if let Some(username) = data.unhashed_users().first() {
            return Err(StoreError::ConfigError(format!(
                "seed user '{username}' has no password hash"
            )));
        }

        let mut tx = self.pool().begin().await?;

        sqlx::query("TRUNCATE note_tags, notes, tags, folders, users")
            .execute(&mut *tx)
            .await?;

        for user in &data.users {
            sqlx::query(
                r#"
                INSERT INTO users (id, username, full_name, password_hash)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(user.id.0)
            .bind(&user.username)
            .bind(&user.full_name)
            .bind(&user.password_hash)
            .execute(&mut *tx)
            .await?;
        }

        for folder in &data.folders {
            sqlx::query(r#"INSERT INTO folders (id, name, user_id) VALUES ($1, $2, $3)"#)
                .bind(folder.id.0)
                .bind(&folder.name)
                .bind(folder.user_id.0)
                .execute(&mut *tx)
                .await?;
        }

        for tag in &data.tags {
            sqlx::query(r#"INSERT INTO tags (id, name, user_id) VALUES ($1, $2, $3)"#)
                .bind(tag.id.0)
                .bind(&tag.name)
                .bind(tag.user_id.0)
                .execute(&mut *tx)
                .await?;
        }

        for note in &data.notes {
            sqlx::query(
                r#"
                INSERT INTO notes (id, title, content, folder_id, user_id)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(note.id.0)
            .bind(&note.title)
            .bind(&note.content)
            .bind(note.folder_id.map(|f| f.0))
            .bind(note.user_id.0)
            .execute(&mut *tx)
            .await?;

            replace_note_tags(&mut tx, note.id, &note.tags).await?;
        }

        tx.commit().await?;

        tracing::info!(
            users = data.users.len(),
            folders = data.folders.len(),
            tags = data.tags.len(),
            notes = data.notes.len(),
            "Database seeded"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "users": [
            {"id": "333333333333333333333300", "username": "x", "password": "p"}
        ]
    }"#;

    #[test]
    fn rejects_non_uuid_ids() {
        assert!(SeedData::from_json(SAMPLE).is_err());
    }

    #[test]
    fn parses_full_seed() {
        let text = r#"{
            "users": [{
                "id": "5b7c2f6e-8d4a-4e1b-9c3f-000000000001",
                "username": "bobuser",
                "fullName": "Bob User",
                "password": "password"
            }],
            "folders": [{
                "id": "5b7c2f6e-8d4a-4e1b-9c3f-000000000101",
                "name": "Archive",
                "userId": "5b7c2f6e-8d4a-4e1b-9c3f-000000000001"
            }],
            "tags": [{
                "id": "5b7c2f6e-8d4a-4e1b-9c3f-000000000201",
                "name": "breed",
                "userId": "5b7c2f6e-8d4a-4e1b-9c3f-000000000001"
            }],
            "notes": [{
                "id": "5b7c2f6e-8d4a-4e1b-9c3f-000000000301",
                "title": "5 life lessons learned from cats",
                "folderId": "5b7c2f6e-8d4a-4e1b-9c3f-000000000101",
                "tags": ["5b7c2f6e-8d4a-4e1b-9c3f-000000000201"],
                "userId": "5b7c2f6e-8d4a-4e1b-9c3f-000000000001"
            }]
        }"#;
        let data = SeedData::from_json(text).unwrap();
        assert_eq!(data.users[0].full_name.as_deref(), Some("Bob User"));
        assert_eq!(data.unhashed_users(), vec!["bobuser"]);
        assert_eq!(data.notes[0].content, None);
        assert_eq!(data.notes[0].tags[0], data.tags[0].id);
        assert_eq!(data.notes[0].folder_id, Some(data.folders[0].id));
    }

    #[test]
    fn bundled_seed_file_parses() {
        let data = SeedData::from_json(include_str!("../../../db/seed/data.json")).unwrap();
        assert_eq!(data.users.len(), 2);
        for note in &data.notes {
            assert!(data.users.iter().any(|u| u.id == note.user_id));
            for tag in &note.tags {
                let owner = data.tags.iter().find(|t| t.id == *tag).map(|t| t.user_id);
                assert_eq!(owner, Some(note.user_id));
            }
        }
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let data = SeedData::from_json("{}").unwrap();
        assert!(data.users.is_empty());
        assert!(data.notes.is_empty());
    }
}
