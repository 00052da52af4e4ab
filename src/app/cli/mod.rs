//! CLI Adapter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::app::commands::sync::SyncOptions;
use crate::app::config::DEFAULT_CONFIG_PATH;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "gitsource-sync")]
#[command(version)]
#[command(
    about = "Register GitHub repositories as Secure git sources",
    long_about = None
)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List repositories and register each one (default)
    #[clap(visible_alias = "s")]
    Sync {
        /// Print request bodies instead of sending them
        #[arg(long)]
        dry_run: bool,
    },
    /// List the repositories that would be registered
    #[clap(visible_alias = "ls")]
    List,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Sync { dry_run: false }) {
        Commands::Sync { dry_run } => run_sync(&cli.config, dry_run),
        Commands::List => run_list(&cli.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_sync(config: &Path, dry_run: bool) -> Result<(), AppError> {
    let report = crate::sync(config, SyncOptions { dry_run })?;

    if report.outcomes.is_empty() {
        println!("No repositories to register");
    } else if dry_run {
        println!("✅ Prepared {} payloads (dry run, nothing sent)", report.outcomes.len());
    } else if report.failed() == 0 {
        println!("✅ Registered {} of {} repositories", report.added(), report.outcomes.len());
    } else {
        println!(
            "⚠️  Registered {} of {} repositories; failed: {}",
            report.added(),
            report.outcomes.len(),
            report.failed_repositories().join(", ")
        );
    }
    Ok(())
}

fn run_list(config: &Path) -> Result<(), AppError> {
    let repositories = crate::list_repositories(config)?;
    for repository in &repositories {
        println!("{}", repository);
    }
    Ok(())
}
