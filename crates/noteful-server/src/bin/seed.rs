//! Reset the database and load a seed file.
//!
//! Usage: `noteful-seed [path/to/data.json]` (default `db/seed/data.json`).
//! Plaintext `password` fields are hashed before insert.

use noteful_server::{LogFormat, auth, init_tracing};
use noteful_store::{SeedData, Store, StoreConfig};

const DEFAULT_SEED_FILE: &str = "db/seed/data.json";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    init_tracing(&log_level, LogFormat::Pretty);

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SEED_FILE.to_string());
    let text = std::fs::read_to_string(&path)
        .map_err(|e| format!("cannot read seed file {path}: {e}"))?;
    let mut data = SeedData::from_json(&text)?;

    for user in &mut data.users {
        if let Some(password) = user.password.take() {
            user.password_hash = Some(auth::hash_password(&password)?);
        }
    }

    let store = Store::connect(StoreConfig::from_env()?).await?;
    store.reset_and_seed(&data).await?;

    tracing::info!(%path, "Seed complete");
    Ok(())
}
