//! Schema bootstrap.
//!
//! The whole schema lives in one idempotent SQL script that is executed on
//! connect. There is no versioned migration history.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// Embedded schema SQL (001_schema.sql).
pub const SCHEMA_SQL: &str = include_str!("../../../migrations/001_schema.sql");

/// Tables in dependency order (children last).
pub const TABLES: &[&str] = &["users", "folders", "tags", "notes", "note_tags"];

/// Create any missing tables and indexes.
pub async fn ensure_schema(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("Ensuring database schema...");

    sqlx::raw_sql(SCHEMA_SQL)
        .execute(pool)
        .await
        .map_err(|e| StoreError::SchemaError(format!("Schema bootstrap failed: {}", e)))?;

    tracing::info!("Database schema ready");
    Ok(())
}

/// Check if the schema has been initialized.
///
/// Returns true when every table exists.
pub async fn is_schema_initialized(pool: &PgPool) -> StoreResult<bool> {
    let (count,): (i64,) = sqlx::query_as(
        r#"
        SELECT COUNT(*)::bigint
        FROM information_schema.tables
        WHERE table_schema = 'public'
        AND table_name::text = ANY($1)
        "#,
    )
    .bind(TABLES.iter().map(|t| t.to_string()).collect::<Vec<_>>())
    .fetch_one(pool)
    .await?;

    Ok(count as usize == TABLES.len())
}
