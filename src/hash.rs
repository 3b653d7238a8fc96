//! Content fingerprinting for deduplication.
//!
//! Every chunk is identified by the SHA-256 digest of its exact text. The
//! digest is both the dedup key checked on insert and a stored column, so it
//! must be stable across processes and byte-sensitive to the input.

use sha2::{Digest, Sha256};

/// SHA-256 hex digest of `content`.
pub fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
