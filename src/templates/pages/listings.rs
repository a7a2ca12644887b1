// templates/pages/listings.rs

use crate::domain::NormalizedListing;
use crate::report::Summary;
use crate::snapshot::Snapshot;
use crate::templates::{desktop_layout, property_card, stats_bar};
use maud::{html, Markup};

pub fn listings_page(
    snapshot: &Snapshot,
    listings: &[&NormalizedListing],
    summary: &Summary,
) -> Markup {
    let title = format!("{} Properties", snapshot.city);
    let last_updated = snapshot
        .last_updated_at()
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| snapshot.last_updated.clone());

    desktop_layout(
        &title,
        &last_updated,
        html! {
            (stats_bar(summary))

            @if listings.is_empty() {
                div class="no-results" {
                    p { "No properties match your filters." }
                    p { "Try adjusting your search criteria." }
                }
            } @else {
                section id="properties" class="properties" {
                    @for listing in listings {
                        (property_card(listing))
                    }
                }
            }
        },
    )
}
