//! # Document Memory CLI (`doctool`)
//!
//! The `doctool` binary is the primary interface for the document memory
//! store. It provides commands for index initialization, document ingestion,
//! full-text search, direct entry insertion, and index statistics.
//!
//! ## Usage
//!
//! ```bash
//! doctool --config ./config/doctool.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `doctool init` | Create the SQLite index and schema |
//! | `doctool ingest <path>` | Chunk and index one document |
//! | `doctool ingest-all` | Chunk and index every document under the docs root |
//! | `doctool search "<query>"` | Full-text search over indexed chunks |
//! | `doctool add "<content>"` | Insert a synthetic entry, bypassing chunking |
//! | `doctool stats` | Show index statistics |

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use doc_memory::{config, ingest, migrate, search, stats, store};

/// Document memory store CLI — heading-aware chunking, content-hash dedup,
/// and full-text search over a local docs tree.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file; built-in defaults apply when the file does not exist.
#[derive(Parser)]
#[command(
    name = "doctool",
    about = "Local document memory store with heading-aware chunking and full-text search",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/doctool.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Initialize the index database.
    ///
    /// Creates the SQLite file, the chunk_meta table, and the chunks_fts
    /// full-text index. Idempotent — running it multiple times is safe.
    Init,

    /// Ingest a single document, path relative to the docs root.
    ///
    /// The document is chunked on heading boundaries, tagged (explicitly or
    /// by path inference), and dedup-inserted. A missing document is a
    /// silent no-op, reported as zero chunks.
    Ingest {
        /// Document path, relative to the configured docs root.
        path: String,

        /// Explicit tags; overrides path-based inference when given.
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Genre label, validated against the configured genre vocabulary
        /// and stored as an additional tag.
        #[arg(long)]
        genre: Option<String>,
    },

    /// Ingest every matching document under the docs root.
    ///
    /// Walks the tree for files matching the configured include globs and
    /// ingests each in sorted order. Missing or too-short files are skipped,
    /// never fatal; an aggregate count is reported.
    IngestAll,

    /// Search indexed chunks.
    ///
    /// Runs a full-text query over content, source, section, and tags, and
    /// prints ranked matches with age and provenance.
    Search {
        /// The search query string.
        query: String,

        /// Maximum number of results to return.
        #[arg(long)]
        limit: Option<i64>,

        /// Emit results as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Insert a synthetic entry directly, bypassing the chunker.
    ///
    /// Used for entries that are not backed by a document, such as task
    /// snapshots or session notes.
    Add {
        /// The entry content.
        content: String,

        /// Logical source label for the entry.
        #[arg(long)]
        source: String,

        /// Provenance type ("doc", "decision", "session", ...).
        #[arg(long = "type", default_value = "doc")]
        chunk_type: String,

        /// Tags for the entry; defaults to "general" when omitted.
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Show index statistics.
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Init => {
            migrate::run_init(&cfg).await?;
            println!("Index initialized at {}.", cfg.db.path.display());
        }
        Commands::Ingest { path, tags, genre } => {
            ingest::run_ingest(&cfg, &path, &tags, genre.as_deref()).await?;
        }
        Commands::IngestAll => {
            ingest::run_ingest_all(&cfg).await?;
        }
        Commands::Search { query, limit, json } => {
            search::run_search(&cfg, &query, limit, json).await?;
        }
        Commands::Add {
            content,
            source,
            chunk_type,
            tags,
        } => {
            let pool = doc_memory::db::connect(&cfg).await?;
            let outcome = store::add_entry(&pool, &content, &tags, &source, &chunk_type).await?;
            pool.close().await;
            if outcome.is_inserted() {
                println!("added ({})", chunk_type);
            } else {
                println!("duplicate, nothing added");
            }
        }
        Commands::Stats => {
            stats::run_stats(&cfg).await?;
        }
    }

    Ok(())
}
