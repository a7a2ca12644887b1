// src/report/filter.rs

use crate::domain::NormalizedListing;
use crate::report::format::parse_listed_date;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use std::cmp::Ordering;

/// Upper price bound and lower bedroom bound. A listing with no usable
/// number is compared as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ListingFilter {
    pub max_price: Option<f64>,
    pub min_beds: Option<f64>,
}

impl ListingFilter {
    pub fn matches(&self, listing: &NormalizedListing) -> bool {
        let price_ok = self
            .max_price
            .map_or(true, |max| listing.price().unwrap_or(0.0) <= max);
        let beds_ok = self
            .min_beds
            .map_or(true, |min| listing.bedrooms().unwrap_or(0.0) >= min);
        price_ok && beds_ok
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    PriceAsc,
    PriceDesc,
    DateAsc,
    /// Newest first.
    #[default]
    DateDesc,
}

impl SortOrder {
    pub fn compare(&self, a: &NormalizedListing, b: &NormalizedListing) -> Ordering {
        match self {
            SortOrder::PriceAsc => price_of(a).total_cmp(&price_of(b)),
            SortOrder::PriceDesc => price_of(b).total_cmp(&price_of(a)),
            SortOrder::DateAsc => compare_dates(listed_at(a), listed_at(b), false),
            SortOrder::DateDesc => compare_dates(listed_at(a), listed_at(b), true),
        }
    }
}

fn price_of(listing: &NormalizedListing) -> f64 {
    listing.price().unwrap_or(0.0)
}

fn listed_at(listing: &NormalizedListing) -> Option<DateTime<Utc>> {
    listing.text("listedDate").and_then(parse_listed_date)
}

// Undated listings go last whichever way we sort.
fn compare_dates(
    first: Option<DateTime<Utc>>,
    second: Option<DateTime<Utc>>,
    descending: bool,
) -> Ordering {
    match (first, second) {
        (Some(a), Some(b)) if descending => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Filtered and sorted view over a snapshot's listings. The sort is stable,
/// so ties keep snapshot order.
pub fn select_listings<'a>(
    listings: &'a [NormalizedListing],
    filter: &ListingFilter,
    sort: SortOrder,
) -> Vec<&'a NormalizedListing> {
    let mut selected: Vec<_> = listings.iter().filter(|l| filter.matches(l)).collect();
    selected.sort_by(|a, b| sort.compare(a, b));
    selected
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub total: usize,
    /// `None` when nothing is selected. Missing prices count as 0.
    pub average_price: Option<f64>,
}

impl Summary {
    pub fn of(listings: &[&NormalizedListing]) -> Self {
        let total = listings.len();
        let average_price = (total > 0).then(|| {
            let sum: f64 = listings.iter().map(|l| price_of(l)).sum();
            sum / total as f64
        });

        Self {
            total,
            average_price,
        }
    }
}
