use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

mod config;
use config::{Config, StorageKind};

mod error;
pub(crate) use error::{ApiError, ApiResult};

mod models;
mod storage;
use storage::{AnyStorage, MemoryStorage, MongoStorage};

mod validate;

mod words;
use words::WordLists;

mod commands {
    pub mod get;
    pub mod put;
    pub mod serve;
}

mod controllers {
    pub mod paste;
}

#[derive(Debug, Parser)]
#[command(author, version, about = "A small pastebin for plain text")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server.
    Serve,
    /// Store standard input as a paste and print its slug.
    Put,
    /// Print the paste stored under a slug.
    Get { slug: String },
}

/// Everything a request needs, shared by all handlers.
#[derive(Clone)]
pub struct App {
    pub config: Config,
    pub word_lists: Arc<WordLists>,
    pub storage: AnyStorage,
}

impl App {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let word_lists = match (&config.adjectives_file, &config.nouns_file) {
            (Some(adjectives), Some(nouns)) => WordLists::load(adjectives, nouns).await?,
            (None, None) => WordLists::builtin(),
            _ => anyhow::bail!("adjectives_file and nouns_file must be set together"),
        };

        let storage: AnyStorage = match config.storage {
            StorageKind::Mongo => MongoStorage::new(
                config.mongodb_connection.clone(),
                &config.database_name,
                &config.collection_name,
            )
            .into(),
            StorageKind::Memory => MemoryStorage::new().into(),
        };

        Ok(App {
            config,
            word_lists: Arc::new(word_lists),
            storage,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // try to load .env, ignoring any errors
    _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = Config::load().context("failed to read config")?;
    let app = App::new(config).await?;

    match cli.command {
        Command::Serve => commands::serve::run(app).await,
        Command::Put => commands::put::run(app).await,
        Command::Get { slug } => commands::get::run(app, &slug).await,
    }
}
