//! Deterministic folder utilities that need no provider.
//!
//! Each operation works on the direct children of one folder and returns a
//! count for the caller to report.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::vault;
use crate::vocab::{EntryBatch, OUTPUT_FILE_NAME};

/// File `extract_names` writes to.
pub const NAMES_FILE_NAME: &str = "extracted_names.txt";

static ID_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^<!--ID: .+-->\s*$").expect("valid regex"));

/// Filesystem failure, tagged with the path involved.
#[derive(Debug, Error)]
#[error("{}: {error}", .path.display())]
pub struct UtilityError {
    pub path: PathBuf,
    pub error: std::io::Error,
}

impl UtilityError {
    fn at(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |error| Self {
            path: path.to_path_buf(),
            error,
        }
    }
}

pub type UtilityResult<T> = Result<T, UtilityError>;

/// Result of [`vocabulary_table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularySummary {
    pub files_processed: usize,
    pub total_entries: usize,
    pub output: PathBuf,
}

/// Write the basenames of every file in `folder`, one per line, to
/// `extracted_names.txt`.  Returns how many names were written.
pub fn extract_names(folder: &Path) -> UtilityResult<usize> {
    let output = folder.join(NAMES_FILE_NAME);
    let files: Vec<PathBuf> = vault::list_files(folder, None)
        .map_err(UtilityError::at(folder))?
        .into_iter()
        .filter(|path| *path != output)
        .collect();

    let names: Vec<String> = files.iter().map(|path| vault::basename(path)).collect();
    std::fs::write(&output, names.join("\n")).map_err(UtilityError::at(&output))?;

    log::info!("extracted {} file name(s) to {}", names.len(), output.display());
    Ok(names.len())
}

/// Truncate every markdown file in `folder`.  Returns how many were cleared.
pub fn clear_markdown(folder: &Path) -> UtilityResult<usize> {
    let files = vault::list_files(folder, Some("md")).map_err(UtilityError::at(folder))?;
    for path in &files {
        std::fs::write(path, "").map_err(UtilityError::at(path))?;
    }
    log::info!("cleared {} markdown file(s) in {}", files.len(), folder.display());
    Ok(files.len())
}

/// Blank out every `<!--ID: ...-->` line in `text`.
///
/// The matched line is replaced by nothing, which leaves its line break in
/// place unless trailing whitespace after the comment absorbs it.
///
/// ```
/// use note_processor::utilities::strip_id_lines;
///
/// assert_eq!(strip_id_lines("Q\n<!--ID: 1700000000-->\nA"), "Q\n\nA");
/// ```
pub fn strip_id_lines(text: &str) -> String {
    ID_LINE.replace_all(text, "").into_owned()
}

/// Strip ID lines from every markdown file in `folder`, rewriting only the
/// files that changed.  Returns how many files changed.
pub fn remove_id_lines(folder: &Path) -> UtilityResult<usize> {
    let files = vault::list_files(folder, Some("md")).map_err(UtilityError::at(folder))?;
    let mut changed = 0;
    for path in &files {
        let content = std::fs::read_to_string(path).map_err(UtilityError::at(path))?;
        let stripped = strip_id_lines(&content);
        if stripped != content {
            std::fs::write(path, stripped).map_err(UtilityError::at(path))?;
            changed += 1;
        }
    }
    log::info!("removed ID lines from {changed} file(s) in {}", folder.display());
    Ok(changed)
}

/// Create an empty `<name>.md` for every `<name>.txt` in `folder` that has
/// no markdown counterpart yet.  Returns how many files were created.
pub fn create_markdown_from_text(folder: &Path) -> UtilityResult<usize> {
    let files = vault::list_files(folder, Some("txt")).map_err(UtilityError::at(folder))?;
    let mut created = 0;
    for path in &files {
        let target = folder.join(format!("{}.md", vault::basename(path)));
        if target.exists() {
            continue;
        }
        vault::create_new(&target, "").map_err(UtilityError::at(&target))?;
        created += 1;
    }
    log::info!("created {created} markdown file(s) in {}", folder.display());
    Ok(created)
}

/// Parse every markdown note in `folder` and write the combined table to
/// `vocabulary_table.md`, replacing any previous report.
pub fn vocabulary_table(folder: &Path) -> UtilityResult<VocabularySummary> {
    let output = folder.join(OUTPUT_FILE_NAME);
    let files: Vec<PathBuf> = vault::list_files(folder, Some("md"))
        .map_err(UtilityError::at(folder))?
        .into_iter()
        .filter(|path| *path != output)
        .collect();

    let mut batch = EntryBatch::new();
    for path in &files {
        let content = std::fs::read_to_string(path).map_err(UtilityError::at(path))?;
        let added = batch.add_file(&content);
        log::debug!("vocab: {} entr(ies) from {}", added, path.display());
    }

    std::fs::write(&output, batch.render()).map_err(UtilityError::at(&output))?;

    let summary = VocabularySummary {
        files_processed: batch.files_processed(),
        total_entries: batch.entries().len(),
        output,
    };
    log::info!(
        "vocabulary table: {} entr(ies) from {} file(s)",
        summary.total_entries,
        summary.files_processed
    );
    Ok(summary)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
