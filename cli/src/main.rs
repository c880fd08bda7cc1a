//! Command-line client for the Noteful API.
//!
//! Commands:
//! - signup / login / refresh: manage your account and token
//! - folders, tags: list, show, create, rename, delete
//! - notes: list (with search and filters), show, create, update, delete
//!
//! Configuration via environment:
//! - NOTEFUL_URL: Base URL of the server (default: http://localhost:8080)
//! - NOTEFUL_TOKEN: Bearer token printed by `noteful login`

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    account::{LoginArgs, SignupArgs},
    folders::FolderCommand,
    notes::NoteCommand,
    tags::TagCommand,
};

/// Noteful CLI
///
/// JSON output by default; --human for formatted output.
#[derive(Parser)]
#[command(name = "noteful")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Noteful server URL
    #[arg(
        long,
        env = "NOTEFUL_URL",
        default_value = "http://localhost:8080",
        global = true
    )]
    url: String,

    /// Bearer token for authentication
    #[arg(long, env = "NOTEFUL_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account
    Signup(SignupArgs),

    /// Exchange username and password for a token
    Login(LoginArgs),

    /// Get a fresh token for the current one
    Refresh,

    /// Work with folders
    #[command(subcommand)]
    Folders(FolderCommand),

    /// Work with tags
    #[command(subcommand)]
    Tags(TagCommand),

    /// Work with notes
    #[command(subcommand)]
    Notes(NoteCommand),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client(cli.token.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let url = cli.url.trim_end_matches('/');

    let result = match cli.command {
        Commands::Signup(args) => commands::account::signup(&client, url, cli.human, args).await,
        Commands::Login(args) => commands::account::login(&client, url, cli.human, args).await,
        Commands::Refresh => commands::account::refresh(&client, url, cli.human).await,
        Commands::Folders(command) => {
            commands::folders::execute(&client, url, cli.human, command).await
        }
        Commands::Tags(command) => commands::tags::execute(&client, url, cli.human, command).await,
        Commands::Notes(command) => {
            commands::notes::execute(&client, url, cli.human, command).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
