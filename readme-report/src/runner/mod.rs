//! Orchestrates repository listing, README extraction and report output.

mod config;
mod error;

pub use config::{RunnerConfig, DEFAULT_CONCURRENCY};
pub use error::RunnerError;

use crate::extract::{extract_tech_stack, extract_use_case};
use crate::github::{GitHubClient, ListedRepository};
use crate::report::{write_report, RepositoryRecord};
use crate::summary::{ProcessingResult, RunSummary};
use futures::stream::{self, StreamExt};
use std::fs::File;
use std::io::{self, BufWriter};
use tracing::{debug, info};

/// Generates a README-derived report for one GitHub user.
pub struct Runner {
    config: RunnerConfig,
    client: GitHubClient,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Client`] if the GitHub client cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let client = GitHubClient::new(config.client())?;
        Ok(Self { config, client })
    }

    /// Executes the full flow and writes the report.
    ///
    /// Nothing is written, and no output file is created, unless the
    /// repository listing succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Listing`] if the repositories cannot be listed,
    /// or an output error if the report cannot be written.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let results = self.collect_results().await?;

        let mut summary = RunSummary::new(self.config.format());
        for result in &results {
            summary.record_result(result);
        }

        let records: Vec<RepositoryRecord> = results
            .into_iter()
            .map(ProcessingResult::into_record)
            .collect();
        self.write_output(&records)?;

        Ok(summary)
    }

    /// Lists the user's repositories and derives one result per repository,
    /// in listing order.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Listing`] if the repositories cannot be listed.
    /// README failures never fail the run.
    pub async fn collect_results(&self) -> Result<Vec<ProcessingResult>, RunnerError> {
        let username = self.config.username();

        let repositories = self
            .client
            .list_repositories(username)
            .await
            .map_err(RunnerError::Listing)?;

        // `buffered` yields in input order, so rows keep the listing order.
        let results = stream::iter(repositories)
            .map(|repo| async move { process_repository(&self.client, username, repo).await })
            .buffered(self.config.concurrency())
            .collect::<Vec<_>>()
            .await;

        Ok(results)
    }

    fn write_output(&self, records: &[RepositoryRecord]) -> Result<(), RunnerError> {
        let format = self.config.format();

        match self.config.output() {
            Some(path) => {
                let file = File::create(path).map_err(|source| RunnerError::Output {
                    path: path.display().to_string(),
                    source,
                })?;
                write_report(format, records, BufWriter::new(file))?;
                info!(path = %path.display(), %format, rows = records.len(), "Report written");
            }
            None => {
                let stdout = io::stdout();
                write_report(format, records, BufWriter::new(stdout.lock()))?;
            }
        }

        Ok(())
    }
}

async fn process_repository(
    client: &GitHubClient,
    username: &str,
    repository: ListedRepository,
) -> ProcessingResult {
    let owner = repository.owner_login(username);
    debug!(
        repo = %repository.name,
        owner,
        description = repository.description.as_deref().unwrap_or_default(),
        "Processing repository"
    );

    let readme = client.get_readme(owner, &repository.name).await;
    let record = RepositoryRecord::new(
        repository.name.as_str(),
        extract_tech_stack(readme.as_deref()),
        extract_use_case(readme.as_deref()),
        repository.html_url.unwrap_or_default(),
    );

    match readme {
        Some(_) => ProcessingResult::Described { record },
        None => ProcessingResult::MissingReadme { record },
    }
}
