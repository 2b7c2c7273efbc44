#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod extract;
pub mod github;
pub mod report;
pub mod runner;
pub mod summary;

pub use extract::{
    extract_tech_stack, extract_tech_stack_with, extract_use_case, TechStackRules,
    TECH_STACK_NOT_FOUND, USE_CASE_NOT_DESCRIBED,
};
pub use github::{
    decode_content, ClientConfig, FetchError, GitHubClient, ListedRepository, RepositoryOwner,
};
pub use report::{
    write_csv, write_markdown_table, write_report, OutputFormat, ReportError, RepositoryRecord,
};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::{ProcessingResult, RunSummary};
