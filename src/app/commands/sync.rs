//! Register every repository of the configured account as a git source.
//!
//! Listing failures abort the run. Registration failures are reported per
//! repository and the loop moves on; nothing is retried.

use crate::app::AppContext;
use crate::app::commands::list;
use crate::domain::{AppError, GitSource, SyncConfig};
use crate::ports::{RepositoryLister, SourceRegistry};

/// Options for a sync run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Print payloads instead of sending them.
    pub dry_run: bool,
}

/// Result of registering one repository.
#[derive(Debug)]
pub enum RegistrationStatus {
    Added,
    Failed(AppError),
}

/// Per-repository record of a sync run.
#[derive(Debug)]
pub struct RegistrationOutcome {
    pub repository: String,
    pub source_name: String,
    pub status: RegistrationStatus,
}

impl RegistrationOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self.status, RegistrationStatus::Added)
    }
}

/// Outcomes of a sync run, in listing order.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub outcomes: Vec<RegistrationOutcome>,
}

impl SyncReport {
    pub fn added(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_added()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.added()
    }

    /// Repositories that could not be registered.
    pub fn failed_repositories(&self) -> Vec<&str> {
        self.outcomes.iter().filter(|o| !o.is_added()).map(|o| o.repository.as_str()).collect()
    }
}

/// Execute the sync: list once, then register each repository in order.
pub fn execute<L: RepositoryLister, R: SourceRegistry>(
    ctx: &AppContext<L, R>,
    config: &SyncConfig,
    options: SyncOptions,
) -> Result<SyncReport, AppError> {
    let kind = list::account_kind(config)?;
    let repositories = ctx.lister().list_repositories(kind, &config.account_name)?;
    println!(
        "Found {} repositories for {} account '{}'",
        repositories.len(),
        kind,
        config.account_name
    );

    let mut report = SyncReport::default();
    for repository in repositories {
        let source = GitSource::for_repository(&repository, config);

        let status = match ctx.registry().register(&source) {
            Ok(()) => {
                if options.dry_run {
                    println!("✅ Prepared {} (dry run)", repository);
                } else {
                    println!("✅ Successfully added {}", repository);
                }
                RegistrationStatus::Added
            }
            Err(err) => {
                eprintln!("❌ Failed to add {}: {}", repository, err);
                RegistrationStatus::Failed(err)
            }
        };

        report.outcomes.push(RegistrationOutcome { repository, source_name: source.name, status });
    }

    Ok(report)
}
