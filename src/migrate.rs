use anyhow::Result;
use sqlx::SqlitePool;

use crate::config::Config;
use crate::db;

/// Create the database file and run all schema migrations.
pub async fn run_init(config: &Config) -> Result<()> {
    let pool = db::create(config).await?;
    run_migrations(&pool).await?;
    pool.close().await;
    Ok(())
}

/// Apply the chunk store schema to an open pool. Idempotent.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    // One metadata row per stored chunk. The unique index on content_hash is
    // the dedup invariant; inserts rely on it for the atomic if-absent check.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS chunk_meta (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            source TEXT NOT NULL,
            section TEXT NOT NULL,
            tags TEXT NOT NULL,
            chunk_type TEXT NOT NULL DEFAULT 'doc',
            created_at TEXT NOT NULL,
            content_hash TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_chunk_meta_source ON chunk_meta(source)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_chunk_meta_type ON chunk_meta(chunk_type)")
        .execute(pool)
        .await?;

    // FTS5 virtual table keyed by chunk_meta.id via rowid.
    // FTS5 CREATE is not idempotent natively, so we check first.
    let fts_exists: bool = sqlx::query_scalar(
        "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='chunks_fts'",
    )
    .fetch_one(pool)
    .await?;

    if !fts_exists {
        sqlx::query(
            r#"
            CREATE VIRTUAL TABLE chunks_fts USING fts5(
                content,
                source,
                section,
                tags
            )
            "#,
        )
        .execute(pool)
        .await?;
    }

    Ok(())
}
