//! TAGS commands - list, show, create, rename and delete tags.

use anyhow::Result;
use clap::Subcommand;
use noteful_core::Tag;
use serde_json::json;
use uuid::Uuid;

use super::{Deleted, make_empty_request, make_request, output};

#[derive(Subcommand)]
pub enum TagCommand {
    /// List your tags by name
    List,

    /// Show one tag
    Show { id: Uuid },

    /// Create a tag
    Create { name: String },

    /// Rename a tag
    Rename { id: Uuid, name: String },

    /// Delete a tag and remove it from every note
    Delete { id: Uuid },
}

/// Execute a tag command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    command: TagCommand,
) -> Result<()> {
    let collection = format!("{}/api/tags", base_url);

    match command {
        TagCommand::List => {
            let tags: Vec<Tag> = make_request(client.get(&collection)).await?;
            output(&tags, human)
        }
        TagCommand::Show { id } => {
            let tag: Tag = make_request(client.get(format!("{collection}/{id}"))).await?;
            output(&tag, human)
        }
        TagCommand::Create { name } => {
            let tag: Tag =
                make_request(client.post(&collection).json(&json!({ "name": name }))).await?;
            output(&tag, human)
        }
        TagCommand::Rename { id, name } => {
            let body = json!({ "id": id, "name": name });
            let tag: Tag =
                make_request(client.put(format!("{collection}/{id}")).json(&body)).await?;
            output(&tag, human)
        }
        TagCommand::Delete { id } => {
            make_empty_request(client.delete(format!("{collection}/{id}"))).await?;
            output(
                &Deleted {
                    kind: "Tag",
                    id,
                    deleted: true,
                },
                human,
            )
        }
    }
}
