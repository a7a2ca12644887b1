mod filter;
mod format;
mod report_error;

pub use filter::{select_listings, ListingFilter, SortOrder, Summary};
pub use format::{
    format_address, format_count, format_listed_date, format_phone, format_price, format_rooms,
};
pub use report_error::ReportError;

use crate::snapshot::read_snapshot;
use crate::templates::pages::listings_page;
use std::fs;
use std::path::Path;

/// Renders the static listings page for a saved snapshot.
pub fn render_report(
    input: &Path,
    output: &Path,
    filter: &ListingFilter,
    sort: SortOrder,
) -> Result<Summary, ReportError> {
    let snapshot = read_snapshot(input)?;
    let selected = select_listings(&snapshot.properties, filter, sort);
    let summary = Summary::of(&selected);

    let page = listings_page(&snapshot, &selected, &summary);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ReportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(output, page.into_string()).map_err(|source| ReportError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!(
        "✅ Rendered {} of {} properties to {}",
        summary.total,
        snapshot.total_count,
        output.display()
    );
    Ok(summary)
}
