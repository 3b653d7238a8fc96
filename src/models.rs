//! Core data models used throughout the document memory store.
//!
//! These types represent the chunk candidates, stored rows, and search
//! results that flow through the ingestion and retrieval pipeline.

use serde::Serialize;

/// A section produced by the chunker, before hashing and storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkCandidate {
    pub content: String,
    pub section: String,
    pub source: String,
}

/// Result of a dedup-aware insert into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new row was written to both `chunk_meta` and `chunks_fts`.
    Inserted,
    /// The content hash already exists; nothing was written.
    Duplicate,
}

impl InsertOutcome {
    pub fn is_inserted(self) -> bool {
        matches!(self, InsertOutcome::Inserted)
    }
}

/// Result of ingesting a single document.
///
/// Callers that only care about counts can use [`IngestOutcome::inserted`];
/// the variants let them distinguish "nothing new" from "nothing happened".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// The resolved path does not exist. Not an error: re-ingestion of a
    /// moving document set treats this as zero chunks.
    SourceNotFound,
    /// The document produced no chunks (empty or below the length floor).
    NoChunks,
    /// The document exists but could not be read as UTF-8 text. Treated as
    /// zero chunks so a batch run is never aborted by one bad file.
    Unreadable,
    /// The document was chunked; `new_chunks` of `total_chunks` were new.
    Ingested {
        new_chunks: usize,
        total_chunks: usize,
    },
}

impl IngestOutcome {
    /// Number of newly inserted chunks, zero for the no-op variants.
    pub fn inserted(&self) -> usize {
        match self {
            IngestOutcome::Ingested { new_chunks, .. } => *new_chunks,
            _ => 0,
        }
    }
}

/// A ranked match returned from the full-text index.
#[derive(Debug, Clone, Serialize)]
pub struct SearchMatch {
    pub content: String,
    pub source: String,
    pub section: String,
    /// Comma-joined tag list, as stored in `chunk_meta`.
    pub tags: String,
    #[serde(rename = "type")]
    pub chunk_type: String,
    /// Whole days since the chunk was inserted.
    pub age_days: i64,
    /// Relevance score (negated FTS5 rank, higher is better).
    #[serde(skip)]
    pub score: f64,
}

/// Aggregate result of a batch ingestion run.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngestSummary {
    /// Documents that produced at least one chunk candidate.
    pub documents: usize,
    /// Documents skipped as missing or too short to chunk.
    pub skipped: usize,
    /// Newly inserted chunks across the whole run.
    pub new_chunks: usize,
}
