//! Vocabulary entry parsing.
//!
//! A note holds any number of entry blocks.  Each block starts on a line
//! beginning with the [`SENTINEL`] and carries labelled lines:
//!
//! ```text
//! EN-Words
//! Vocabulary: ephemeral
//! Part of Speech: adjective
//! Pronunciation: /ɪˈfem(ə)rəl/
//! Definition: lasting for a very short time
//! Example: fashions are ephemeral
//! Audio: ![[ephemeral.mp3]]
//! ```
//!
//! Labels are searched anywhere in the block, not per line, and only the
//! first match of each label counts.  A block without a `Vocabulary` value is
//! not an entry and is skipped.

use std::sync::LazyLock;

use regex::Regex;

/// Token that opens every entry block.
pub const SENTINEL: &str = "EN-Words";

// ---------------------------------------------------------------------------
// VocabularyEntry
// ---------------------------------------------------------------------------

/// One parsed entry.  Only `vocabulary` is guaranteed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub vocabulary: String,
    pub pronunciation: Option<String>,
    pub definition: Option<String>,
    pub example: Option<String>,
    /// Wiki embed such as `![[word.mp3]]`.
    pub audio: Option<String>,
    pub part_of_speech: Option<String>,
}

impl VocabularyEntry {
    pub fn new(vocabulary: impl Into<String>) -> Self {
        Self {
            vocabulary: vocabulary.into(),
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Field patterns
// ---------------------------------------------------------------------------

struct FieldPatterns {
    vocabulary: Regex,
    pronunciation: Regex,
    definition: Regex,
    example: Regex,
    audio: Regex,
    part_of_speech: Regex,
}

static PATTERNS: LazyLock<FieldPatterns> = LazyLock::new(|| FieldPatterns {
    vocabulary: Regex::new(r"Vocabulary:\s*(.+)").expect("valid regex"),
    pronunciation: Regex::new(r"Pronunciation:\s*(.+)").expect("valid regex"),
    definition: Regex::new(r"Definition:\s*(.+)").expect("valid regex"),
    example: Regex::new(r"Example:\s*(.+)").expect("valid regex"),
    audio: Regex::new(r"Audio:\s*(!?\[\[.+?\]\])").expect("valid regex"),
    part_of_speech: Regex::new(r"Part of Speech:\s*(.+)").expect("valid regex"),
});

/// First capture of `pattern` in `block`, trimmed; `None` when absent or
/// blank.
fn capture(pattern: &Regex, block: &str) -> Option<String> {
    pattern
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Split `text` into candidate blocks.
///
/// A boundary is a newline directly followed by the sentinel; the newline is
/// dropped and the sentinel stays at the start of the following block.
/// Whitespace-only blocks are discarded.
pub fn split_blocks(text: &str) -> Vec<&str> {
    let boundary = format!("\n{SENTINEL}");
    let mut blocks = Vec::new();
    let mut start = 0;

    for (idx, _) in text.match_indices(&boundary) {
        blocks.push(&text[start..idx]);
        start = idx + 1;
    }
    blocks.push(&text[start..]);

    blocks.retain(|block| !block.trim().is_empty());
    blocks
}

/// Extract an entry from one block, or `None` when it has no vocabulary.
pub fn parse_block(block: &str) -> Option<VocabularyEntry> {
    let patterns = &*PATTERNS;
    let vocabulary = capture(&patterns.vocabulary, block)?;

    Some(VocabularyEntry {
        vocabulary,
        pronunciation: capture(&patterns.pronunciation, block),
        definition: capture(&patterns.definition, block),
        example: capture(&patterns.example, block),
        audio: capture(&patterns.audio, block),
        part_of_speech: capture(&patterns.part_of_speech, block),
    })
}

/// Parse every valid entry in `text`, in document order.
pub fn parse_entries(text: &str) -> Vec<VocabularyEntry> {
    let blocks = split_blocks(text);
    let entries: Vec<VocabularyEntry> = blocks.iter().filter_map(|b| parse_block(b)).collect();
    log::debug!(
        "vocab: {} block(s), {} entr{}",
        blocks.len(),
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" }
    );
    entries
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
