// pipeline.rs
use crate::config::Config;
use crate::config::ConfigError;
use crate::domain::normalize;
use crate::errors::AppError;
use crate::fetcher::{FetchError, ListingSource};
use crate::snapshot::{write_snapshot, Snapshot};
use chrono::{DateTime, Utc};
use std::path::Path;

/// Resolve config, connect, then fetch-transform-save once.
///
/// `connect` only runs once configuration (credential included) has
/// resolved, so a missing key never reaches the network.
pub fn run<R, C, S>(resolve: R, connect: C, output: &Path) -> Result<Snapshot, AppError>
where
    R: FnOnce() -> Result<Config, ConfigError>,
    C: FnOnce(&Config) -> Result<S, FetchError>,
    S: ListingSource,
{
    let config = resolve()?;
    let source = connect(&config)?;
    fetch_and_save(&config, &source, output, Utc::now())
}

pub fn fetch_and_save<S>(
    config: &Config,
    source: &S,
    output: &Path,
    generated_at: DateTime<Utc>,
) -> Result<Snapshot, AppError>
where
    S: ListingSource + ?Sized,
{
    tracing::info!("Fetching listings for {}...", config.search.area);
    let raw = source.fetch(&config.search, &config.api_key)?;

    let properties = raw
        .iter()
        .map(|listing| normalize(listing, &config.region))
        .collect();

    let snapshot = Snapshot::new(&config.region, properties, generated_at);
    write_snapshot(output, &snapshot)?;

    Ok(snapshot)
}
