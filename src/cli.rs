//! Command-line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use note_processor::batch::BatchMode;
use note_processor::llm::ProviderId;

/// Process a folder of notes with an LLM provider, or run one of the note
/// utilities.
#[derive(Debug, Parser)]
#[command(name = "note-processor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send files to a provider and write the results
    Process(ProcessArgs),

    /// Build vocabulary_table.md from the vocabulary notes in a folder
    VocabTable(FolderArgs),

    /// Write the names of a folder's files to extracted_names.txt
    ExtractNames(FolderArgs),

    /// Empty every markdown file in a folder
    ClearMarkdown(FolderArgs),

    /// Remove <!--ID: ...--> lines from a folder's markdown files
    RemoveIds(FolderArgs),

    /// Create an empty .md for every .txt in a folder
    CreateMd(FolderArgs),

    /// Inspect or create the settings file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// convert-md, convert-txt, append or filename
    #[arg(short, long, default_value = "convert-md")]
    pub mode: BatchMode,

    /// Provider id; defaults to the configured provider
    #[arg(short, long)]
    pub provider: Option<ProviderId>,

    /// Instruction placed before each file's content; defaults to the
    /// configured prompt
    #[arg(long)]
    pub prompt: Option<String>,

    /// Process every matching file in this folder
    #[arg(short, long, conflicts_with = "files")]
    pub folder: Option<PathBuf>,

    /// Files to process, in order
    #[arg(required_unless_present = "folder")]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Args)]
pub struct FolderArgs {
    pub folder: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the settings file location
    Path,
    /// Print the effective settings (keys masked)
    Show,
    /// Write a default settings file if none exists
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_process_with_folder() {
        let cli = Cli::parse_from([
            "note-processor",
            "process",
            "--mode",
            "append",
            "--provider",
            "perplexity",
            "--folder",
            "notes",
        ]);
        match cli.command {
            Command::Process(args) => {
                assert_eq!(args.mode, BatchMode::Append);
                assert_eq!(args.provider, Some(ProviderId::Perplexity));
                assert_eq!(args.folder, Some(PathBuf::from("notes")));
                assert!(args.files.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn process_needs_files_or_folder() {
        assert!(Cli::try_parse_from(["note-processor", "process"]).is_err());
    }

    #[test]
    fn rejects_unknown_provider() {
        let result =
            Cli::try_parse_from(["note-processor", "process", "--provider", "gpt", "a.md"]);
        assert!(result.is_err());
    }
}
