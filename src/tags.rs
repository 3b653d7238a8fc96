//! Path-based tag inference.
//!
//! Documents are classified by testing their path against a fixed, ordered
//! vocabulary of hint substrings. Matches are reported in vocabulary order,
//! not path order, so inference is deterministic for a given configuration.

/// Tag applied when no hint matches the path.
pub const FALLBACK_TAG: &str = "general";

/// Infer tags for a document path from the configured hint vocabulary.
///
/// Matching is case-insensitive over the whole path. The result is never
/// empty: with no matches it is `["general"]`.
pub fn infer_tags(path: &str, hints: &[String]) -> Vec<String> {
    let path_lower = path.to_lowercase();

    let tags: Vec<String> = hints
        .iter()
        .filter(|hint| path_lower.contains(hint.as_str()))
        .cloned()
        .collect();

    if tags.is_empty() {
        vec![FALLBACK_TAG.to_string()]
    } else {
        tags
    }
}
