//! Dedup-aware chunk store over SQLite.
//!
//! Two tables back the store: `chunk_meta` holds one row of metadata per
//! chunk, and `chunks_fts` is an FTS5 index over content, source, section,
//! and tags, keyed by the same rowid. Both rows are written in a single
//! transaction so a chunk is either fully indexed or absent.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};

use crate::hash::hash_content;
use crate::models::{InsertOutcome, SearchMatch};
use crate::tags::FALLBACK_TAG;

/// Render a tag list into its stored forms: (comma-joined, space-joined).
///
/// The comma form lives in `chunk_meta` for structured retrieval; the space
/// form lives in `chunks_fts` so individual tags are full-text matchable.
pub fn join_tags(tags: &[String]) -> (String, String) {
    (tags.join(","), tags.join(" "))
}

/// Insert one chunk into `chunk_meta` + `chunks_fts`, with dedup.
///
/// The metadata insert is an atomic upsert-if-absent on `content_hash`, so
/// two concurrent ingestors racing on the same content cannot both write it.
/// Returns [`InsertOutcome::Duplicate`] without touching the index when the
/// hash already exists.
pub async fn insert_chunk(
    pool: &SqlitePool,
    content: &str,
    source: &str,
    section: &str,
    tags_csv: &str,
    tags_str: &str,
    chunk_type: &str,
) -> Result<InsertOutcome> {
    let content_hash = hash_content(content);
    let created_at = Utc::now().to_rfc3339();

    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        INSERT INTO chunk_meta (source, section, tags, chunk_type, created_at, content_hash)
        VALUES (?, ?, ?, ?, ?, ?)
        ON CONFLICT(content_hash) DO NOTHING
        "#,
    )
    .bind(source)
    .bind(section)
    .bind(tags_csv)
    .bind(chunk_type)
    .bind(&created_at)
    .bind(&content_hash)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(InsertOutcome::Duplicate);
    }

    sqlx::query(
        r#"
        INSERT INTO chunks_fts (rowid, content, source, section, tags)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(result.last_insert_rowid())
    .bind(content)
    .bind(source)
    .bind(section)
    .bind(tags_str)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(InsertOutcome::Inserted)
}

/// Direct insert bypassing the chunker, for synthetic entries such as task
/// snapshots. Empty tag lists fall back to `["general"]`.
pub async fn add_entry(
    pool: &SqlitePool,
    content: &str,
    tags: &[String],
    source: &str,
    chunk_type: &str,
) -> Result<InsertOutcome> {
    let tags = if tags.is_empty() {
        vec![FALLBACK_TAG.to_string()]
    } else {
        tags.to_vec()
    };
    let (tags_csv, tags_str) = join_tags(&tags);

    insert_chunk(pool, content, source, "Memory", &tags_csv, &tags_str, chunk_type).await
}

/// Lexical search over the chunk index.
///
/// Ranking is delegated to FTS5 (bm25); ties break on rowid so result order
/// is deterministic for identical inputs. An empty query returns no matches
/// rather than an FTS syntax error.
pub async fn search_chunks(pool: &SqlitePool, query: &str, limit: i64) -> Result<Vec<SearchMatch>> {
    if query.trim().is_empty() {
        return Ok(Vec::new());
    }

    let rows = sqlx::query(
        r#"
        SELECT chunks_fts.content AS content,
               m.source, m.section, m.tags, m.chunk_type, m.created_at,
               chunks_fts.rank AS rank
        FROM chunks_fts
        JOIN chunk_meta m ON m.id = chunks_fts.rowid
        WHERE chunks_fts MATCH ?
        ORDER BY chunks_fts.rank, m.id
        LIMIT ?
        "#,
    )
    .bind(query)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    let now = Utc::now();
    let matches = rows
        .iter()
        .map(|row| {
            let created_at: String = row.get("created_at");
            let rank: f64 = row.get("rank");
            SearchMatch {
                content: row.get("content"),
                source: row.get("source"),
                section: row.get("section"),
                tags: row.get("tags"),
                chunk_type: row.get("chunk_type"),
                age_days: age_days(&created_at, now),
                score: -rank, // negate so higher = better
            }
        })
        .collect();

    Ok(matches)
}

/// Whole days between an RFC 3339 timestamp and `now`. Unparseable or
/// future timestamps count as zero days old.
fn age_days(created_at: &str, now: DateTime<Utc>) -> i64 {
    DateTime::parse_from_rfc3339(created_at)
        .map(|dt| (now - dt.with_timezone(&Utc)).num_days().max(0))
        .unwrap_or(0)
}
