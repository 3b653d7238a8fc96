//! Index statistics overview.
//!
//! Provides a quick summary of what's stored: chunk counts, per-type and
//! per-source breakdowns, and the newest entry. Used by `doctool stats` to
//! give confidence that ingestion is working as expected.

use anyhow::Result;
use sqlx::Row;

use crate::config::Config;
use crate::db;

/// Run the stats command: query the index and print a summary.
pub async fn run_stats(config: &Config) -> Result<()> {
    let pool = db::connect(config).await?;

    let total_chunks: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chunk_meta")
        .fetch_one(&pool)
        .await?;

    let db_size = std::fs::metadata(&config.db.path)
        .map(|m| m.len())
        .unwrap_or(0);

    println!("Document Memory — Index Stats");
    println!("=============================");
    println!();
    println!("  Database:  {}", config.db.path.display());
    println!("  Size:      {}", format_bytes(db_size));
    println!("  Chunks:    {}", total_chunks);

    let type_rows = sqlx::query(
        r#"
        SELECT chunk_type, COUNT(*) AS chunk_count
        FROM chunk_meta
        GROUP BY chunk_type
        ORDER BY chunk_count DESC, chunk_type
        "#,
    )
    .fetch_all(&pool)
    .await?;

    if !type_rows.is_empty() {
        println!();
        println!("  By type:");
        for row in &type_rows {
            let chunk_type: String = row.get("chunk_type");
            let count: i64 = row.get("chunk_count");
            println!("  {:<12} {:>6}", chunk_type, count);
        }
    }

    let source_rows = sqlx::query(
        r#"
        SELECT source, COUNT(*) AS chunk_count
        FROM chunk_meta
        GROUP BY source
        ORDER BY chunk_count DESC, source
        LIMIT 10
        "#,
    )
    .fetch_all(&pool)
    .await?;

    if !source_rows.is_empty() {
        println!();
        println!("  Top sources:");
        for row in &source_rows {
            let source: String = row.get("source");
            let count: i64 = row.get("chunk_count");
            println!("  {:<40} {:>6}", source, count);
        }
    }

    let newest: Option<String> = sqlx::query_scalar("SELECT MAX(created_at) FROM chunk_meta")
        .fetch_one(&pool)
        .await?;
    if let Some(ts) = newest {
        println!();
        println!("  Newest entry: {}", ts);
    }

    println!();

    pool.close().await;
    Ok(())
}

/// Format a byte count as a human-readable string.
fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
