//! FOLDERS commands - list, show, create, rename and delete folders.

use anyhow::Result;
use clap::Subcommand;
use noteful_core::Folder;
use serde_json::json;
use uuid::Uuid;

use super::{Deleted, make_empty_request, make_request, output};

#[derive(Subcommand)]
pub enum FolderCommand {
    /// List your folders by name
    List,

    /// Show one folder
    Show { id: Uuid },

    /// Create a folder
    Create { name: String },

    /// Rename a folder
    Rename { id: Uuid, name: String },

    /// Delete a folder; its notes are kept without a folder
    Delete { id: Uuid },
}

/// Execute a folder command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    command: FolderCommand,
) -> Result<()> {
    let collection = format!("{}/api/folders", base_url);

    match command {
        FolderCommand::List => {
            let folders: Vec<Folder> = make_request(client.get(&collection)).await?;
            output(&folders, human)
        }
        FolderCommand::Show { id } => {
            let folder: Folder = make_request(client.get(format!("{collection}/{id}"))).await?;
            output(&folder, human)
        }
        FolderCommand::Create { name } => {
            let folder: Folder =
                make_request(client.post(&collection).json(&json!({ "name": name }))).await?;
            output(&folder, human)
        }
        FolderCommand::Rename { id, name } => {
            let body = json!({ "id": id, "name": name });
            let folder: Folder =
                make_request(client.put(format!("{collection}/{id}")).json(&body)).await?;
            output(&folder, human)
        }
        FolderCommand::Delete { id } => {
            make_empty_request(client.delete(format!("{collection}/{id}"))).await?;
            output(
                &Deleted {
                    kind: "Folder",
                    id,
                    deleted: true,
                },
                human,
            )
        }
    }
}
