//! Runner configuration.

use crate::github::ClientConfig;
use crate::report::OutputFormat;
use std::path::{Path, PathBuf};

/// Default number of README fetches kept in flight.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Configuration for generating a repository report.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// GitHub user whose repositories are listed.
    username: String,
    /// Report format.
    format: OutputFormat,
    /// Output file; standard output when absent.
    output: Option<PathBuf>,
    /// GitHub client settings.
    client: ClientConfig,
    /// Maximum concurrent README fetches.
    concurrency: usize,
}

impl RunnerConfig {
    /// Creates a configuration that writes a Markdown table to standard output.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            format: OutputFormat::default(),
            output: None,
            client: ClientConfig::default(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Sets the report format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the output file path.
    #[must_use]
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    /// Sets the GitHub client settings.
    #[must_use]
    pub fn with_client(mut self, client: ClientConfig) -> Self {
        self.client = client;
        self
    }

    /// Sets the maximum number of concurrent README fetches (at least 1).
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Returns the GitHub username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the report format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Returns the output file path, if any.
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// Returns the GitHub client settings.
    pub fn client(&self) -> &ClientConfig {
        &self.client
    }

    /// Returns the maximum concurrent README fetches.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }
}
