//! Heading-aware markdown chunker.
//!
//! Splits a document into sections on heading boundaries while tracking the
//! heading hierarchy, so every chunk carries a breadcrumb label such as
//! `"Setup > Prerequisites"`. Content before the first heading is labeled
//! `"Introduction"`; a document with no headings at all yields a single
//! `"Content"` chunk. Sections at or below the length floor are dropped.

use crate::models::ChunkCandidate;

/// Sections must exceed this many characters (after trimming) to be kept.
pub const MIN_SECTION_CHARS: usize = 50;

/// Separator used to join the heading stack into a breadcrumb.
const BREADCRUMB_SEP: &str = " > ";

/// Split `content` into heading-delimited chunk candidates for `source`.
///
/// Heading lines belong to the section they introduce, so a heading's text
/// appears both in the breadcrumb and in the body of its own chunk.
/// Downstream search relies on that duplication.
pub fn chunk_document(content: &str, source: &str) -> Vec<ChunkCandidate> {
    let mut chunks = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    let mut headings: Vec<String> = Vec::new();

    for line in content.split('\n') {
        if line.starts_with('#') {
            flush_section(&mut chunks, &buffer, &headings, source, "Introduction");
            buffer.clear();

            let level = line.chars().take_while(|&c| c == '#').count();
            let heading_text = line.trim_start_matches('#').trim().to_string();

            // A heading at level N discards deeper entries but keeps ancestors.
            headings.truncate(level.saturating_sub(1));
            headings.push(heading_text);
        }

        buffer.push(line);
    }

    flush_section(&mut chunks, &buffer, &headings, source, "Content");

    chunks
}

/// Emit the buffered lines as a candidate if they clear the length floor.
///
/// `fallback` labels the section when no heading has been seen: the leading
/// section of a headed document is "Introduction", the trailing (and only)
/// section of an unheaded document is "Content".
fn flush_section(
    chunks: &mut Vec<ChunkCandidate>,
    buffer: &[&str],
    headings: &[String],
    source: &str,
    fallback: &str,
) {
    if buffer.is_empty() {
        return;
    }

    let section_content = buffer.join("\n").trim().to_string();
    if section_content.is_empty() || section_content.chars().count() <= MIN_SECTION_CHARS {
        return;
    }

    let section = if headings.is_empty() {
        fallback.to_string()
    } else {
        headings.join(BREADCRUMB_SEP)
    };

    chunks.push(ChunkCandidate {
        content: section_content,
        section,
        source: source.to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(chunks: &[ChunkCandidate]) -> Vec<&str> {
        chunks.iter().map(|c| c.section.as_str()).collect()
    }

    #[test]
    fn test_empty_document() {
        assert!(chunk_document("", "notes.md").is_empty());
    }

    #[test]
    fn test_short_document_dropped() {
        let chunks = chunk_document("too short to keep", "notes.md");
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_no_headings_single_content_chunk() {
        let text = "This document has no headings at all but it is certainly long enough to keep.";
        let chunks = chunk_document(text, "notes.md");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].section, "Content");
        assert_eq!(chunks[0].content, text);
        assert_eq!(chunks[0].source, "notes.md");
    }

    #[test]
    fn test_prose_before_first_heading_is_introduction() {
        let text = "Some opening prose that sits before any heading and runs past the floor.\n\
                    \n\
                    # First Heading\n\
                    \n\
                    Body of the first real section, also long enough to survive the floor.";
        let chunks = chunk_document(text, "notes.md");
        assert_eq!(sections(&chunks), vec!["Introduction", "First Heading"]);
    }

    #[test]
    fn test_two_level_breadcrumb_example() {
        let text = "# Setup\n\nInstall deps and configure the environment before running anything else.\n\n## Prerequisites\n\nYou need a recent toolchain and a functioning network connection to proceed.";
        let chunks = chunk_document(text, "setup.md");
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].section, "Setup");
        assert!(chunks[0].content.contains("Install deps"));
        assert_eq!(chunks[1].section, "Setup > Prerequisites");
        assert!(chunks[1].content.contains("recent toolchain"));
    }

    #[test]
    fn test_heading_stack_truncation() {
        // Levels 1, 2, 3, then back to 2: the second level-2 heading must
        // replace both H2a and H3 in the breadcrumb.
        let text = "# H1\n\nTop-level body text that is long enough to pass the length floor here.\n\
                    ## H2a\n\nSecond-level body text that is long enough to pass the length floor.\n\
                    ### H3\n\nThird-level body text that is long enough to pass the length floor.\n\
                    ## H2b\n\nReplacement second-level body, long enough to pass the length floor.";
        let chunks = chunk_document(text, "deep.md");
        assert_eq!(
            sections(&chunks),
            vec!["H1", "H1 > H2a", "H1 > H2a > H3", "H1 > H2b"]
        );
    }

    #[test]
    fn test_heading_line_included_in_own_section() {
        let text = "# Heading Text\n\nThe body of this section is long enough to clear the floor easily.";
        let chunks = chunk_document(text, "doc.md");
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].content.starts_with("# Heading Text"));
    }

    #[test]
    fn test_short_sections_dropped_midstream_and_at_end() {
        let text = "# Keep\n\nThis section body is comfortably longer than fifty characters, so it stays.\n\
                    # Drop\n\nshort";
        let chunks = chunk_document(text, "doc.md");
        assert_eq!(sections(&chunks), vec!["Keep"]);
    }

    #[test]
    fn test_exactly_fifty_chars_dropped() {
        // The floor is strict: content must be longer than 50 chars.
        let body = "x".repeat(50);
        assert_eq!(body.len(), MIN_SECTION_CHARS);
        assert!(chunk_document(&body, "edge.md").is_empty());

        let body = "x".repeat(51);
        assert_eq!(chunk_document(&body, "edge.md").len(), 1);
    }

    #[test]
    fn test_non_markdown_text_is_permissive() {
        let text = "{ \"json\": true, \"reason\": \"any text chunks to a single Content section\" }";
        let chunks = chunk_document(text, "blob.txt");
        assert_eq!(sections(&chunks), vec!["Content"]);
    }

    #[test]
    fn test_deterministic() {
        let text = "# A\n\nFirst section body, long enough to pass the fifty character floor.\n\n## B\n\nSecond section body, long enough to pass the fifty character floor.";
        let a = chunk_document(text, "doc.md");
        let b = chunk_document(text, "doc.md");
        assert_eq!(a, b);
    }
}
