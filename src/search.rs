use anyhow::Result;

use crate::config::Config;
use crate::db;
use crate::store;

const DEFAULT_LIMIT: i64 = 10;

/// Run the `search` command: query the index and print ranked matches.
pub async fn run_search(
    config: &Config,
    query: &str,
    limit: Option<i64>,
    json: bool,
) -> Result<()> {
    let pool = db::connect(config).await?;
    let matches = store::search_chunks(&pool, query, limit.unwrap_or(DEFAULT_LIMIT)).await?;
    pool.close().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("No results.");
        return Ok(());
    }

    for (i, m) in matches.iter().enumerate() {
        println!(
            "{}. [{:.2}] {} — {} ({}d ago)",
            i + 1,
            m.score,
            m.source,
            m.section,
            m.age_days
        );
        println!("    tags: {}", m.tags);
        println!("    type: {}", m.chunk_type);
        println!("    excerpt: \"{}\"", excerpt(&m.content, 240));
        println!();
    }

    Ok(())
}

/// First `max` characters of `content`, flattened to one line.
fn excerpt(content: &str, max: usize) -> String {
    let flat = content.replace('\n', " ");
    let flat = flat.trim();
    if flat.len() <= max {
        return flat.to_string();
    }
    let mut cut = max;
    while !flat.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &flat[..cut])
}
