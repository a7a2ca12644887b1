// errors.rs
use crate::config::ConfigError;
use crate::fetcher::FetchError;
use crate::report::ReportError;
use crate::snapshot::SnapshotError;
use std::process::ExitCode;
use thiserror::Error;

/// Every way a command can fail. `main` is the only place these become
/// process exit codes.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl AppError {
    /// All fatal paths share one code.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(1)
    }
}
