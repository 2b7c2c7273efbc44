//! CLI for readme-report.
//!
//! Lists a GitHub user's repositories and writes a table of README-derived
//! tech stacks and use cases as Markdown or CSV.

use clap::{Parser, ValueEnum};
use readme_report::{ClientConfig, OutputFormat, RunSummary, Runner, RunnerConfig, RunnerError};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the GitHub token.
const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Report formats accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Markdown table.
    Md,
    /// Comma-separated values.
    Csv,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Md => OutputFormat::Markdown,
            Format::Csv => OutputFormat::Csv,
        }
    }
}

/// Fetch GitHub repos + README-derived metadata.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub username.
    #[arg(short, long, default_value = "AyyanYe")]
    username: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Md)]
    format: Format,

    /// Output file path (default stdout).
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// GitHub Personal Access Token.
    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    token: Option<String>,

    /// Maximum concurrent README fetches.
    #[arg(long, default_value_t = readme_report::runner::DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// Timeout in seconds for each API request.
    #[arg(long, default_value_t = readme_report::github::DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// GitHub API base URL (e.g. for GitHub Enterprise).
    #[arg(long)]
    api_url: Option<String>,
}

impl Args {
    fn into_config(self) -> RunnerConfig {
        let mut client = ClientConfig::new()
            .with_token(self.token)
            .with_timeout(Duration::from_secs(self.timeout_secs));
        if let Some(api_url) = self.api_url {
            client = client.with_base_uri(api_url);
        }

        RunnerConfig::new(self.username)
            .with_format(self.format.into())
            .with_output(self.out)
            .with_client(client)
            .with_concurrency(self.concurrency)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            log_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Logs are written to stderr so that stdout carries only the report.
/// The level defaults to "info" and can be changed with `RUST_LOG`.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let runner = Runner::new(args.into_config())?;
    runner.run().await
}

fn log_summary(summary: &RunSummary) {
    info!(
        repositories = summary.repositories_listed,
        readmes_found = summary.readmes_found,
        readmes_missing = summary.readmes_missing,
        format = %summary.format,
        "Report complete"
    );
}
