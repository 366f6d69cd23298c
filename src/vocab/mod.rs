//! Vocabulary notes → markdown table.
//!
//! * [`parser`]: splits a note into entry blocks and extracts fields.
//! * [`table`]: renders entries as a markdown table with a summary header.
//! * [`EntryBatch`]: accumulates entries across files in processing order.
//!
//! ```
//! use note_processor::vocab::EntryBatch;
//!
//! let mut batch = EntryBatch::new();
//! batch.add_file("EN-Words\nVocabulary: brisk\nPart of Speech: adjective\n");
//! let report = batch.render();
//! assert!(report.contains("| brisk | adj. |"));
//! ```

pub mod parser;
pub mod table;

pub use parser::{parse_block, parse_entries, split_blocks, VocabularyEntry, SENTINEL};
pub use table::{render_summary, render_table};

/// File the folder-level conversion writes its report to.
pub const OUTPUT_FILE_NAME: &str = "vocabulary_table.md";

/// Entries from several files, concatenated in the order the files were
/// added.
#[derive(Debug, Clone, Default)]
pub struct EntryBatch {
    files_processed: usize,
    entries: Vec<VocabularyEntry>,
}

impl EntryBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one file's text and append its entries.  Returns how many
    /// entries the file contributed.
    pub fn add_file(&mut self, text: &str) -> usize {
        let entries = parse_entries(text);
        let added = entries.len();
        self.entries.extend(entries);
        self.files_processed += 1;
        added
    }

    pub fn files_processed(&self) -> usize {
        self.files_processed
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    /// Summary header followed by the table.
    pub fn render(&self) -> String {
        let mut report = render_summary(self.files_processed, self.entries.len());
        report.push_str(&render_table(&self.entries));
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILE_A: &str = "EN-Words\n\
Vocabulary: candid\n\
Part of Speech: adjective\n\
Definition: truthful and straightforward\n\
EN-Words\n\
Definition: stray block with no word\n";

    const FILE_B: &str = "EN-Words\n\
Pronunciation: /nope/\n\
EN-Words\n\
Vocabulary: quell\n\
Part of Speech: Verb, transitive\n\
Audio: ![[quell.mp3]]\n";

    #[test]
    fn two_files_with_one_valid_block_each() {
        let mut batch = EntryBatch::new();
        assert_eq!(batch.add_file(FILE_A), 1);
        assert_eq!(batch.add_file(FILE_B), 1);

        let report = batch.render();

        assert!(report.contains("**Files processed:** 2\n"));
        assert!(report.contains("**Total entries:** 2\n"));

        let rows: Vec<&str> = report
            .lines()
            .skip_while(|line| !line.starts_with("|------"))
            .skip(1)
            .collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            "| candid | adj. | truthful and straightforward |  |  |  |"
        );
        assert_eq!(rows[1], "| quell | v. |  |  | ![[quell.mp3]] |  |");
    }

    #[test]
    fn file_without_entries_still_counts_as_processed() {
        let mut batch = EntryBatch::new();
        assert_eq!(batch.add_file("just some prose"), 0);

        assert_eq!(batch.files_processed(), 1);
        assert!(batch.entries().is_empty());
        assert!(batch.render().contains("**Total entries:** 0"));
    }

    #[test]
    fn report_starts_with_summary_then_rule_then_table() {
        let mut batch = EntryBatch::new();
        batch.add_file("Vocabulary: x");
        let report = batch.render();

        assert!(report.starts_with("# Vocabulary Table\n\n"));
        let rule = report.find("\n---\n\n").expect("horizontal rule");
        let header = report.find(table::TABLE_HEADER).expect("table header");
        assert!(rule < header);
    }
}
