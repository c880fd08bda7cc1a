//! Account commands: sign up, log in, refresh a token.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use noteful_core::User;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{HumanReadable, make_request, output};

/// Arguments for the signup command.
#[derive(Args)]
pub struct SignupArgs {
    /// Username for the new account
    pub username: String,

    /// Password (8 to 72 characters)
    #[arg(long, env = "NOTEFUL_PASSWORD")]
    pub password: String,

    /// Optional display name
    #[arg(long)]
    pub full_name: Option<String>,
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    pub username: String,

    #[arg(long, env = "NOTEFUL_PASSWORD")]
    pub password: String,
}

/// Token returned by login and refresh.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub auth_token: String,
}

impl HumanReadable for TokenResponse {
    fn print_human(&self) {
        println!("{}", "Authenticated.".green().bold());
        println!();
        println!("  export NOTEFUL_TOKEN={}", self.auth_token);
    }
}

#[derive(Serialize)]
#[serde(transparent)]
struct Registered(User);

impl HumanReadable for Registered {
    fn print_human(&self) {
        println!("{}", "Account created!".green().bold());
        println!();
        self.0.print_human();
    }
}

/// Execute the signup command.
pub async fn signup(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: SignupArgs,
) -> Result<()> {
    let url = format!("{}/api/users", base_url);
    let mut body = json!({ "username": args.username, "password": args.password });
    if let Some(full_name) = args.full_name {
        body["fullName"] = json!(full_name);
    }

    let user: User = make_request(client.post(&url).json(&body)).await?;
    output(&Registered(user), human)
}

/// Execute the login command.
pub async fn login(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: LoginArgs,
) -> Result<()> {
    let url = format!("{}/api/login", base_url);
    let body = json!({ "username": args.username, "password": args.password });

    let response: TokenResponse = make_request(client.post(&url).json(&body)).await?;
    output(&response, human)
}

/// Execute the refresh command.
pub async fn refresh(client: &reqwest::Client, base_url: &str, human: bool) -> Result<()> {
    let url = format!("{}/api/refresh", base_url);
    let response: TokenResponse = make_request(client.post(&url)).await?;
    output(&response, human)
}
