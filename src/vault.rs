//! Filesystem access for a notes folder.
//!
//! Only direct children of a folder are considered; subfolders are never
//! descended into.  Listings are sorted by file name so batch order is
//! reproducible.

use std::ffi::OsStr;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Suffix appended to a note's basename for convert-mode output.
pub const PROCESSED_SUFFIX: &str = "_processed";

/// Files directly inside `folder`, optionally restricted to one extension
/// (compared case-insensitively, without the dot).
pub fn list_files(folder: &Path, extension: Option<&str>) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        if let Some(wanted) = extension {
            let matches = path
                .extension()
                .and_then(OsStr::to_str)
                .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted));
            if !matches {
                continue;
            }
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

/// File name without its extension.
pub fn basename(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `<dir>/<basename>_processed.md` for a note at `path`.
pub fn processed_path(path: &Path) -> PathBuf {
    let name = format!("{}{PROCESSED_SUFFIX}.md", basename(path));
    match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

/// Write `contents` to a file that must not exist yet.
pub fn create_new(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}
