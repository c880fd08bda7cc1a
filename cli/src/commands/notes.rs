//! NOTES commands - search, read and edit notes.

use anyhow::Result;
use clap::{Args, Subcommand};
use noteful_core::{Note, NoteListParams};
use serde_json::{Map, Value, json};
use uuid::Uuid;

use super::{Deleted, make_empty_request, make_request, output};

#[derive(Subcommand)]
pub enum NoteCommand {
    /// List notes, most recently updated first
    List(ListArgs),

    /// Show one note
    Show { id: Uuid },

    /// Create a note
    Create(CreateArgs),

    /// Change fields of a note
    Update(UpdateArgs),

    /// Delete a note
    Delete { id: Uuid },
}

/// Filters for the list command. All given filters must match.
#[derive(Args)]
pub struct ListArgs {
    /// Case-insensitive text to find in the title or content
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Only notes in this folder
    #[arg(long)]
    pub folder: Option<Uuid>,

    /// Only notes carrying this tag
    #[arg(long)]
    pub tag: Option<Uuid>,
}

impl ListArgs {
    fn params(&self) -> NoteListParams {
        NoteListParams {
            search_term: self.search.clone(),
            folder_id: self.folder.map(|id| id.to_string()),
            tag_id: self.tag.map(|id| id.to_string()),
        }
    }
}

#[derive(Args)]
pub struct CreateArgs {
    #[arg(long, short = 't')]
    pub title: String,

    #[arg(long, short = 'c')]
    pub content: Option<String>,

    #[arg(long)]
    pub folder: Option<Uuid>,

    /// Tag id; repeat for several tags
    #[arg(long = "tag")]
    pub tags: Vec<Uuid>,
}

impl CreateArgs {
    fn body(&self) -> Value {
        json!({
            "title": self.title,
            "content": self.content,
            "folderId": self.folder,
            "tags": self.tags,
        })
    }
}

#[derive(Args)]
pub struct UpdateArgs {
    pub id: Uuid,

    #[arg(long, short = 't')]
    pub title: Option<String>,

    #[arg(long, short = 'c', conflicts_with = "clear_content")]
    pub content: Option<String>,

    /// Remove the note's content
    #[arg(long)]
    pub clear_content: bool,

    #[arg(long, conflicts_with = "no_folder")]
    pub folder: Option<Uuid>,

    /// Take the note out of its folder
    #[arg(long)]
    pub no_folder: bool,

    /// Replace the note's tags; repeat for several tags
    #[arg(long = "tag", conflicts_with = "clear_tags")]
    pub tags: Vec<Uuid>,

    /// Remove every tag from the note
    #[arg(long)]
    pub clear_tags: bool,
}

impl UpdateArgs {
    /// Only the fields asked for are sent, so the rest stay unchanged.
    fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert("id".to_string(), json!(self.id));
        if let Some(title) = &self.title {
            body.insert("title".to_string(), json!(title));
        }
        if let Some(content) = &self.content {
            body.insert("content".to_string(), json!(content));
        } else if self.clear_content {
            body.insert("content".to_string(), Value::Null);
        }
        if let Some(folder) = self.folder {
            body.insert("folderId".to_string(), json!(folder));
        } else if self.no_folder {
            body.insert("folderId".to_string(), Value::Null);
        }
        if !self.tags.is_empty() || self.clear_tags {
            body.insert("tags".to_string(), json!(self.tags));
        }
        Value::Object(body)
    }
}

/// Execute a note command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    command: NoteCommand,
) -> Result<()> {
    let collection = format!("{}/api/notes", base_url);

    match command {
        NoteCommand::List(args) => {
            let notes: Vec<Note> =
                make_request(client.get(&collection).query(&args.params())).await?;
            output(&notes, human)
        }
        NoteCommand::Show { id } => {
            let note: Note = make_request(client.get(format!("{collection}/{id}"))).await?;
            output(&note, human)
        }
        NoteCommand::Create(args) => {
            let note: Note = make_request(client.post(&collection).json(&args.body())).await?;
            output(&note, human)
        }
        NoteCommand::Update(args) => {
            let url = format!("{collection}/{}", args.id);
            let note: Note = make_request(client.put(url).json(&args.body())).await?;
            output(&note, human)
        }
        NoteCommand::Delete { id } => {
            make_empty_request(client.delete(format!("{collection}/{id}"))).await?;
            output(
                &Deleted {
                    kind: "Note",
                    id,
                    deleted: true,
                },
                human,
            )
        }
    }
}
