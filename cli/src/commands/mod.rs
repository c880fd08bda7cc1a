//! Command implementations for the noteful CLI.
//!
//! Each command module provides:
//! - Args struct for clap argument parsing
//! - execute() function that performs the command
//! - Human-readable and JSON output formatting

pub mod account;
pub mod folders;
pub mod notes;
pub mod tags;

use anyhow::Result;
use colored::Colorize;
use noteful_core::{Folder, Note, Tag, User};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;

/// Common error type for HTTP requests.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Build an HTTP client, optionally configured with a Bearer token.
pub fn build_client(token: Option<&str>) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();

    if let Some(token) = token {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| anyhow::anyhow!("Invalid token value: {}", e))?;
        headers.insert(AUTHORIZATION, value);
        builder = builder.default_headers(headers);
    }

    Ok(builder.build()?)
}

/// Print output in JSON or human-readable format.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Send a request and decode the JSON response body.
pub async fn make_request<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, CliError> {
    let response = check_status(request.send().await?).await?;
    Ok(response.json::<T>().await?)
}

/// Send a request whose success response has no body (204).
pub async fn make_empty_request(request: reqwest::RequestBuilder) -> Result<(), CliError> {
    check_status(request.send().await?).await?;
    Ok(())
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, CliError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(CliError::Server {
        status: status.as_u16(),
        message: server_message(&body),
    })
}

/// Pull `error.message` out of an API error body, falling back to the raw text.
fn server_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            let error = json.get("error")?;
            let message = error.get("message")?.as_str()?.to_string();
            Some(match error.get("location").and_then(|l| l.as_str()) {
                Some(location) => format!("{message} ({location})"),
                None => message,
            })
        })
        .unwrap_or_else(|| body.to_string())
}

/// Format a timestamp for human display.
pub fn format_timestamp(ts: &chrono::DateTime<chrono::Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Truncate a string for display, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Confirmation outcome printed after a delete.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub kind: &'static str,
    pub id: uuid::Uuid,
    pub deleted: bool,
}

impl HumanReadable for Deleted {
    fn print_human(&self) {
        println!("{} {} deleted", self.kind.green().bold(), self.id);
    }
}

impl HumanReadable for User {
    fn print_human(&self) {
        println!("  {} {}", "ID:".cyan(), self.id);
        println!("  {} {}", "Username:".cyan(), self.username.bold());
        if let Some(name) = &self.full_name {
            println!("  {} {}", "Full name:".cyan(), name);
        }
    }
}

fn print_named(
    kind: &str,
    id: &dyn std::fmt::Display,
    name: &str,
    updated: &chrono::DateTime<chrono::Utc>,
) {
    println!("  {} {}", name.bold(), format!("[{kind}]").dimmed());
    println!("    {} {}", "ID:".cyan(), id);
    println!("    {} {}", "Updated:".cyan(), format_timestamp(updated));
}

impl HumanReadable for Folder {
    fn print_human(&self) {
        print_named("folder", &self.id, &self.name, &self.updated_at);
    }
}

impl HumanReadable for Tag {
    fn print_human(&self) {
        print_named("tag", &self.id, &self.name, &self.updated_at);
    }
}

impl HumanReadable for Note {
    fn print_human(&self) {
        println!("  {}", self.title.bold());
        println!("    {} {}", "ID:".cyan(), self.id);
        if let Some(folder) = &self.folder_id {
            println!("    {} {}", "Folder:".cyan(), folder);
        }
        if !self.tags.is_empty() {
            let tags: Vec<String> = self.tags.iter().map(ToString::to_string).collect();
            println!("    {} {}", "Tags:".cyan(), tags.join(", "));
        }
        println!("    {} {}", "Updated:".cyan(), format_timestamp(&self.updated_at));
        if let Some(content) = &self.content {
            println!("    {}", truncate(content, 72).dimmed());
        }
    }
}

impl<T: HumanReadable> HumanReadable for Vec<T> {
    fn print_human(&self) {
        if self.is_empty() {
            println!("  {}", "(none)".dimmed());
            return;
        }
        for item in self {
            item.print_human();
            println!();
        }
        println!("  {} {}", "Total:".cyan(), self.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_from_error_body() {
        let body = r#"{"error":{"code":"BAD_REQUEST","message":"The `name` is not valid"}}"#;
        assert_eq!(server_message(body), "The `name` is not valid");

        let body = r#"{"error":{"code":"UNPROCESSABLE_ENTITY","message":"Missing field","location":"password"}}"#;
        assert_eq!(server_message(body), "Missing field (password)");

        assert_eq!(server_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer sentence", 10), "a longe...");
        assert_eq!(truncate("a longer sentence", 10).chars().count(), 10);
        assert_eq!(truncate("ééééééééééé", 5), "éé...");
    }

    #[test]
    fn test_build_client_rejects_bad_token() {
        assert!(build_client(Some("ok-token")).is_ok());
        assert!(build_client(Some("bad\ntoken")).is_err());
        assert!(build_client(None).is_ok());
    }
}
