//! Ingestion pipeline orchestration.
//!
//! Coordinates the flow for one document: read → chunk → tag → dedup-insert.
//! Missing files and duplicate content are absorbed into outcomes rather than
//! raised, so re-running ingestion over a moving document set is idempotent.
//! Batch ingestion walks the docs root and never aborts on a single bad file.

use anyhow::{bail, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use sqlx::SqlitePool;
use walkdir::WalkDir;

use crate::chunk::chunk_document;
use crate::config::Config;
use crate::db;
use crate::models::{IngestOutcome, IngestSummary};
use crate::store;
use crate::tags::infer_tags;

/// Ingest a single document, root-relative `path`, into the store.
///
/// Chunks are inserted in document order (top to bottom) so re-ingestion is
/// order-stable. `explicit_tags` overrides path inference when non-empty.
pub async fn ingest_document(
    pool: &SqlitePool,
    config: &Config,
    path: &str,
    explicit_tags: &[String],
) -> Result<IngestOutcome> {
    let full_path = config.docs.root.join(path);
    if !full_path.exists() {
        return Ok(IngestOutcome::SourceNotFound);
    }

    let content = match std::fs::read_to_string(&full_path) {
        Ok(content) => content,
        Err(_) => return Ok(IngestOutcome::Unreadable),
    };
    let chunks = chunk_document(&content, path);

    if chunks.is_empty() {
        return Ok(IngestOutcome::NoChunks);
    }

    let tags = if explicit_tags.is_empty() {
        infer_tags(path, &config.vocab.tag_hints)
    } else {
        explicit_tags.to_vec()
    };
    let (tags_csv, tags_str) = store::join_tags(&tags);

    let total_chunks = chunks.len();
    let mut new_chunks = 0;

    for chunk in &chunks {
        let outcome = store::insert_chunk(
            pool,
            &chunk.content,
            &chunk.source,
            &chunk.section,
            &tags_csv,
            &tags_str,
            "doc",
        )
        .await?;

        if outcome.is_inserted() {
            new_chunks += 1;
        }
    }

    Ok(IngestOutcome::Ingested {
        new_chunks,
        total_chunks,
    })
}

/// Ingest every document under the docs root matching the include globs.
///
/// Files are visited in sorted path order for deterministic runs. A missing
/// or too-short file counts as skipped; the batch always completes.
pub async fn ingest_all(pool: &SqlitePool, config: &Config) -> Result<IngestSummary> {
    let root = &config.docs.root;
    if !root.exists() {
        bail!("Docs root does not exist: {}", root.display());
    }

    let include_set = build_globset(&config.docs.include_globs)?;

    let mut summary = IngestSummary::default();

    let mut paths: Vec<String> = Vec::new();
    for entry in WalkDir::new(root) {
        // An unreadable directory entry must not abort the batch.
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => {
                summary.skipped += 1;
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let rel_str = relative.to_string_lossy().to_string();

        if include_set.is_match(&rel_str) {
            paths.push(rel_str);
        }
    }

    // Sort for deterministic ordering
    paths.sort();

    for path in &paths {
        // Store errors still propagate and terminate the run; per-file
        // conditions are absorbed as skips.
        match ingest_document(pool, config, path, &[]).await? {
            IngestOutcome::Ingested { new_chunks, .. } => {
                summary.documents += 1;
                summary.new_chunks += new_chunks;
            }
            IngestOutcome::SourceNotFound
            | IngestOutcome::NoChunks
            | IngestOutcome::Unreadable => {
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

/// Tags for one `ingest` invocation.
///
/// Explicit tags win over path inference, and a validated genre label is
/// appended to whichever set applies. The genre never suppresses inference:
/// with no explicit tags, inferred tags are computed here so the genre can
/// ride along with them.
fn ingest_tags(
    config: &Config,
    path: &str,
    explicit_tags: &[String],
    genre: Option<&str>,
) -> Result<Vec<String>> {
    let mut tags = explicit_tags.to_vec();

    if let Some(genre) = genre {
        if !config.is_valid_genre(genre) {
            bail!(
                "Unknown genre: '{}'. Valid genres: {}",
                genre,
                config.vocab.genres.join(", ")
            );
        }
        if tags.is_empty() {
            tags = infer_tags(path, &config.vocab.tag_hints);
        }
        if !tags.iter().any(|t| t == genre) {
            tags.push(genre.to_string());
        }
    }

    Ok(tags)
}

/// Run the `ingest` command: ingest one document and print the outcome.
pub async fn run_ingest(
    config: &Config,
    path: &str,
    tags: &[String],
    genre: Option<&str>,
) -> Result<()> {
    let tags = ingest_tags(config, path, tags, genre)?;

    let pool = db::connect(config).await?;
    let outcome = ingest_document(&pool, config, path, &tags).await?;
    pool.close().await;

    match outcome {
        IngestOutcome::SourceNotFound => {
            println!("ingest {}", path);
            println!("  document not found, nothing ingested");
        }
        IngestOutcome::NoChunks => {
            println!("ingest {}", path);
            println!("  no chunks (empty or below length floor)");
        }
        IngestOutcome::Unreadable => {
            println!("ingest {}", path);
            println!("  not readable as UTF-8 text, nothing ingested");
        }
        IngestOutcome::Ingested {
            new_chunks,
            total_chunks,
        } => {
            println!("ingest {}", path);
            println!("  chunks: {}", total_chunks);
            println!("  new: {}", new_chunks);
        }
    }
    println!("ok");

    Ok(())
}

/// Run the `ingest-all` command: batch-ingest the docs root.
pub async fn run_ingest_all(config: &Config) -> Result<()> {
    let pool = db::connect(config).await?;
    let summary = ingest_all(&pool, config).await?;
    pool.close().await;

    println!("ingest-all {}", config.docs.root.display());
    println!("  documents: {}", summary.documents);
    println!("  skipped: {}", summary.skipped);
    println!("  new chunks: {}", summary.new_chunks);
    println!("ok");

    Ok(())
}
