//! Application entry point for the note processor CLI.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Parse the command line.
//! 3. Load [`AppConfig`] from disk (returns default when missing).
//! 4. For `process`, build a current-thread [`tokio`] runtime and run the
//!    batch; every other command is synchronous.

mod cli;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use note_processor::{
    batch::{BatchJob, BatchRunner},
    config::{AppConfig, AppPaths},
    llm::{Dispatcher, ProviderId},
    utilities, vault,
};

use cli::{Cli, Command, ConfigCommand, ProcessArgs};

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

async fn process(args: ProcessArgs, config: &AppConfig) -> Result<()> {
    let files = match &args.folder {
        Some(folder) => vault::list_files(folder, Some(args.mode.source_extension()))
            .with_context(|| format!("failed to list {}", folder.display()))?,
        None => args.files,
    };

    let job = BatchJob {
        mode: args.mode,
        provider: args.provider.unwrap_or(config.default_provider),
        prompt: args.prompt.unwrap_or_else(|| config.default_prompt.clone()),
    };

    if job.mode.modifies_in_place() {
        log::warn!("{} mode rewrites the selected files in place", job.mode);
    }

    let runner = BatchRunner::new(Dispatcher::from_config(config));
    let summary = runner.run(&files, &job).await?;

    println!("Successfully processed {} files", summary.processed);
    for output in &summary.outputs {
        println!("  {}", output.display());
    }
    Ok(())
}

fn config_command(command: ConfigCommand, settings_file: &Path) -> Result<()> {
    match command {
        ConfigCommand::Path => println!("{}", settings_file.display()),
        ConfigCommand::Show => {
            let config = AppConfig::load_from(settings_file)?;
            print!("{}", toml::to_string_pretty(&masked(&config))?);
        }
        ConfigCommand::Init => {
            if settings_file.exists() {
                println!("{} already exists", settings_file.display());
            } else {
                AppConfig::default().save_to(settings_file)?;
                println!("Wrote default settings to {}", settings_file.display());
            }
        }
    }
    Ok(())
}

/// Copy of `config` with every configured key replaced by a placeholder.
fn masked(config: &AppConfig) -> AppConfig {
    let mut shown = config.clone();
    for id in ProviderId::ALL {
        if shown.api_keys.key_for(id).is_some() {
            shown.api_keys.set(id, "********");
        }
    }
    shown
}

fn load_config(settings_file: &Path) -> AppConfig {
    AppConfig::load_from(settings_file).unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    })
}

fn run(cli: Cli) -> Result<()> {
    let settings_file = cli
        .config
        .unwrap_or_else(|| AppPaths::new().settings_file);

    match cli.command {
        Command::Process(args) => {
            let config = load_config(&settings_file);

            // Files are processed one at a time; a single-threaded runtime
            // is all the batch needs.
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("failed to create tokio runtime")?;

            rt.block_on(process(args, &config))
        }
        Command::VocabTable(args) => {
            let summary = utilities::vocabulary_table(&args.folder)?;
            println!(
                "Created vocabulary table with {} entries from {} files: {}",
                summary.total_entries,
                summary.files_processed,
                summary.output.display()
            );
            Ok(())
        }
        Command::ExtractNames(args) => {
            let count = utilities::extract_names(&args.folder)?;
            println!("Extracted {count} file names");
            Ok(())
        }
        Command::ClearMarkdown(args) => {
            let count = utilities::clear_markdown(&args.folder)?;
            println!("Cleared {count} markdown files");
            Ok(())
        }
        Command::RemoveIds(args) => {
            let count = utilities::remove_id_lines(&args.folder)?;
            println!("Removed ID lines from {count} files");
            Ok(())
        }
        Command::CreateMd(args) => {
            let count = utilities::create_markdown_from_text(&args.folder)?;
            println!("Created {count} markdown files");
            Ok(())
        }
        Command::Config(command) => config_command(command, &settings_file),
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
