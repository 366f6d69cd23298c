//! Batch processing modes.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// What a batch does with each file and where the answer goes.
///
/// | Mode              | Sent to the provider      | Result written to              |
/// |-------------------|---------------------------|--------------------------------|
/// | `ConvertMarkdown` | file content              | new `<name>_processed.md`      |
/// | `ConvertText`     | file content              | new `<name>_processed.md`      |
/// | `Append`          | file content              | same file, after a blank line  |
/// | `Filename`        | `Tên file: <name>`        | same file, replacing it        |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchMode {
    ConvertMarkdown,
    ConvertText,
    Append,
    Filename,
}

impl BatchMode {
    pub const ALL: [BatchMode; 4] = [
        BatchMode::ConvertMarkdown,
        BatchMode::ConvertText,
        BatchMode::Append,
        BatchMode::Filename,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BatchMode::ConvertMarkdown => "convert-md",
            BatchMode::ConvertText => "convert-txt",
            BatchMode::Append => "append",
            BatchMode::Filename => "filename",
        }
    }

    /// Extension of the files this mode picks up from a folder.
    pub fn source_extension(self) -> &'static str {
        match self {
            BatchMode::ConvertText => "txt",
            _ => "md",
        }
    }

    /// `true` when the mode rewrites its input files instead of creating
    /// new ones.
    pub fn modifies_in_place(self) -> bool {
        matches!(self, BatchMode::Append | BatchMode::Filename)
    }
}

impl fmt::Display for BatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode `{0}` (expected one of: convert-md, convert-txt, append, filename)")]
pub struct UnknownMode(pub String);

impl FromStr for BatchMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BatchMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s.trim())
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for mode in BatchMode::ALL {
            assert_eq!(mode.to_string().parse::<BatchMode>(), Ok(mode));
        }
        assert!("classify".parse::<BatchMode>().is_err());
    }

    #[test]
    fn only_text_conversion_reads_txt() {
        assert_eq!(BatchMode::ConvertText.source_extension(), "txt");
        assert_eq!(BatchMode::ConvertMarkdown.source_extension(), "md");
        assert_eq!(BatchMode::Filename.source_extension(), "md");
    }

    #[test]
    fn in_place_modes() {
        assert!(BatchMode::Append.modifies_in_place());
        assert!(BatchMode::Filename.modifies_in_place());
        assert!(!BatchMode::ConvertMarkdown.modifies_in_place());
    }
}
