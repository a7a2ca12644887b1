use crate::config::{Config, Strategy};
use crate::errors::AppError;
use crate::fetcher::RentcastClient;
use crate::report::{render_report, ListingFilter, SortOrder};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod domain;
mod errors;
mod fetcher;
mod pipeline;
mod report;
mod snapshot;
mod templates;

#[cfg(test)]
mod tests;

const DEFAULT_SNAPSHOT: &str = "data/properties.json";
const DEFAULT_PAGE: &str = "data/index.html";

#[derive(Parser)]
#[command(name = "property_snapshot")]
#[command(about = "Fetch active sale listings and save a JSON snapshot")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch listings and overwrite the snapshot file (default)
    Fetch {
        /// City/state match or radius around the metro center
        #[arg(long, value_enum, default_value_t = Strategy::City)]
        strategy: Strategy,

        /// Snapshot path [default: data/properties.json under the crate root]
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Render a static HTML page from a saved snapshot
    Render {
        /// Snapshot to read [default: data/properties.json under the crate root]
        #[arg(long)]
        input: Option<PathBuf>,

        /// Page to write [default: data/index.html under the crate root]
        #[arg(long)]
        output: Option<PathBuf>,

        #[arg(long)]
        max_price: Option<f64>,

        #[arg(long)]
        min_beds: Option<f64>,

        #[arg(long, value_enum, default_value_t = SortOrder::DateDesc)]
        sort: SortOrder,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(false)
                .with_level(false)
                .without_time(),
        )
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Fetch {
        strategy: Strategy::default(),
        output: None,
    });

    match run(command) {
        Ok(()) => {
            tracing::info!("Done!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_error(&err);
            err.exit_code()
        }
    }
}

fn run(command: Commands) -> Result<(), AppError> {
    match command {
        Commands::Fetch { strategy, output } => {
            let output = output.unwrap_or_else(|| installed_path(DEFAULT_SNAPSHOT));
            pipeline::run(
                || Config::from_env(strategy),
                |config| RentcastClient::new(&config.base_url),
                &output,
            )?;
            Ok(())
        }
        Commands::Render {
            input,
            output,
            max_price,
            min_beds,
            sort,
        } => {
            let input = input.unwrap_or_else(|| installed_path(DEFAULT_SNAPSHOT));
            let output = output.unwrap_or_else(|| installed_path(DEFAULT_PAGE));
            let filter = ListingFilter {
                max_price,
                min_beds,
            };
            render_report(&input, &output, &filter, sort)?;
            Ok(())
        }
    }
}

fn report_error(err: &AppError) {
    match err {
        AppError::Config(e) => tracing::error!("Error: {e}"),
        AppError::Fetch(e) => {
            tracing::error!("{e}");
            if let Some(body) = e.response_body() {
                tracing::error!("Response: {body}");
            }
        }
        AppError::Snapshot(e) => tracing::error!("Failed to save snapshot: {e}"),
        AppError::Report(e) => tracing::error!("{e}"),
    }
}

/// Paths are relative to the crate root, not the working directory.
fn installed_path(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}
