use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default database location, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "_docs/.doc-index.db";

/// Default document root, relative to the working directory.
pub const DEFAULT_DOCS_ROOT: &str = "_docs";

/// Ordered hint vocabulary for path-based tag inference.
pub const DEFAULT_TAG_HINTS: &[&str] = &[
    "infra", "agents", "apps", "shared", "pipelines", "ecs", "lambda",
];

/// Controlled vocabulary of document genre labels.
pub const DEFAULT_GENRES: &[&str] = &[
    "overview",
    "gotchas",
    "architecture",
    "deep-dive",
    "adr",
    "runbook",
    "rfc",
    "guide",
    "reference",
];

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub db: DbConfig,
    #[serde(default)]
    pub docs: DocsConfig,
    #[serde(default)]
    pub vocab: VocabConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DbConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DocsConfig {
    #[serde(default = "default_docs_root")]
    pub root: PathBuf,
    #[serde(default = "default_include_globs")]
    pub include_globs: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct VocabConfig {
    #[serde(default = "default_tag_hints")]
    pub tag_hints: Vec<String>,
    #[serde(default = "default_genres")]
    pub genres: Vec<String>,
}

fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_PATH)
}

fn default_docs_root() -> PathBuf {
    PathBuf::from(DEFAULT_DOCS_ROOT)
}

fn default_include_globs() -> Vec<String> {
    vec!["**/*.md".to_string()]
}

fn default_tag_hints() -> Vec<String> {
    DEFAULT_TAG_HINTS.iter().map(|s| s.to_string()).collect()
}

fn default_genres() -> Vec<String> {
    DEFAULT_GENRES.iter().map(|s| s.to_string()).collect()
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            root: default_docs_root(),
            include_globs: default_include_globs(),
        }
    }
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            tag_hints: default_tag_hints(),
            genres: default_genres(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db: DbConfig::default(),
            docs: DocsConfig::default(),
            vocab: VocabConfig::default(),
        }
    }
}

impl Config {
    pub fn is_valid_genre(&self, genre: &str) -> bool {
        self.vocab.genres.iter().any(|g| g == genre)
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.docs.include_globs.is_empty() {
        anyhow::bail!("docs.include_globs must not be empty");
    }

    if config.vocab.genres.is_empty() {
        anyhow::bail!("vocab.genres must not be empty");
    }

    Ok(config)
}

/// Load `path` if it exists, otherwise fall back to the built-in defaults.
///
/// The defaults are the named constants above, supplied here at the call
/// boundary rather than read from process-wide state.
pub fn load_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(Config::default())
    }
}
