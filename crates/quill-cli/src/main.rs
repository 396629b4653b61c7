//! Quill CLI
//!
//! Command-line interface for Quill - article writing and
//! management. All state is session-local: the store is created at
//! startup (seeded with the showcase articles unless configured
//! off), driven by one command, and dropped at exit.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

use quill_core::{Config, ContentStore, SharedStore, Viewer};

mod commands;
mod editor;
mod output;

use commands::article::ListArgs;
use commands::titles::Answers;
use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "quill")]
#[command(about = "Quill - session-local article writing and management")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List articles (filtered, paginated)
    List {
        /// Only articles carrying this exact tag
        #[arg(long)]
        tag: Option<String>,
        /// Case-insensitive search over title, content, and tags
        #[arg(long, short)]
        search: Option<String>,
        /// Page number (1-indexed)
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Articles per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<usize>,
        /// Only bookmarked articles
        #[arg(long, conflicts_with_all = ["featured", "mine"])]
        bookmarked: bool,
        /// Only the featured strip (first three)
        #[arg(long, conflicts_with = "mine")]
        featured: bool,
        /// Your own articles
        #[arg(long)]
        mine: bool,
    },
    /// Show one article in full (records a view)
    Show {
        /// Article ID or unique prefix
        id: String,
    },
    /// Publish a new article from arguments
    New {
        /// Article title
        #[arg(long)]
        title: String,
        /// Article body
        #[arg(long)]
        content: String,
        /// Listing excerpt (derived from content when omitted)
        #[arg(long)]
        excerpt: Option<String>,
        /// Tags, repeatable
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Cover image URL
        #[arg(long)]
        cover: Option<String>,
    },
    /// Write a new article in $EDITOR (autosaves drafts while open)
    Write {
        /// Seed the editor with this title
        #[arg(long)]
        title: Option<String>,
    },
    /// Rework an existing article in $EDITOR
    Edit {
        /// Article ID or unique prefix
        id: String,
    },
    /// Delete an article
    Delete {
        /// Article ID or unique prefix
        id: String,
    },
    /// Toggle the like on an article
    Like {
        /// Article ID or unique prefix
        id: String,
    },
    /// Toggle the bookmark on an article
    Bookmark {
        /// Article ID or unique prefix
        id: String,
    },
    /// List named drafts
    Drafts,
    /// Save (upsert) a draft from arguments
    Draft {
        /// Draft ID to merge into (a new one is assigned when omitted)
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        /// Tags, repeatable
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// List all tags with usage counts
    Tags,
    /// Generate title suggestions from four answers
    Titles {
        /// What the post is about
        #[arg(long)]
        topic: String,
        /// Who it is for
        #[arg(long)]
        audience: String,
        /// The tone to convey
        #[arg(long)]
        tone: String,
        /// The content format
        #[arg(long)]
        format: String,
        /// Seed a draft from one of the suggestions
        #[arg(long)]
        start: bool,
        /// Which suggestion to start from (1-indexed)
        #[arg(long, default_value_t = 1)]
        pick: usize,
    },
    /// Show session status
    Status,
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (author_name, page_size, autosave_secs, ...)
        key: String,
        /// Configuration value
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config commands don't need the store
    if let Commands::Config { command } = &cli.command {
        return handle_config_command(command.clone(), &output);
    }

    // A store handle must exist before any operation can run; failing
    // to build one is fatal here at the boundary.
    let config = Config::load().context("Failed to load configuration")?;
    let viewer = Viewer::from_config(&config);
    let store: SharedStore = Arc::new(Mutex::new(if config.seed_samples {
        ContentStore::with_sample_articles()
    } else {
        ContentStore::new()
    }));

    match cli.command {
        Commands::List {
            tag,
            search,
            page,
            page_size,
            bookmarked,
            featured,
            mine,
        } => {
            commands::article::list(
                &store,
                &config,
                ListArgs {
                    tag,
                    search,
                    page,
                    page_size,
                    bookmarked,
                    featured,
                    mine,
                },
                &output,
            )
            .await
        }
        Commands::Show { id } => commands::article::show(&store, id, &output).await,
        Commands::New {
            title,
            content,
            excerpt,
            tags,
            cover,
        } => {
            commands::article::create(
                &store, &viewer, title, content, excerpt, tags, cover, &output,
            )
            .await
        }
        Commands::Write { title } => {
            commands::article::compose(&store, &config, &viewer, None, title, &output).await
        }
        Commands::Edit { id } => {
            commands::article::compose(&store, &config, &viewer, Some(id), None, &output).await
        }
        Commands::Delete { id } => commands::article::delete(&store, id, &output).await,
        Commands::Like { id } => commands::article::like(&store, id, &output).await,
        Commands::Bookmark { id } => commands::article::bookmark(&store, id, &output).await,
        Commands::Drafts => commands::draft::list(&store, &output).await,
        Commands::Draft {
            id,
            title,
            content,
            tags,
        } => commands::draft::save(&store, &viewer, id, title, content, tags, &output).await,
        Commands::Tags => commands::tag::list(&store, &output).await,
        Commands::Titles {
            topic,
            audience,
            tone,
            format,
            start,
            pick,
        } => {
            commands::titles::run(
                &store,
                &viewer,
                Answers {
                    topic,
                    audience,
                    tone,
                    format,
                },
                start,
                pick,
                &output,
            )
            .await
        }
        Commands::Status => commands::status::show(&store, &viewer, &output).await,
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

fn handle_config_command(command: Option<ConfigCommands>, output: &Output) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(output),
        Some(ConfigCommands::Set { key, value }) => commands::config::set(key, value, output),
    }
}
