// src/report/format.rs

use crate::domain::NormalizedListing;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

/// Whole-dollar price, e.g. `$1,250,000`. Missing or zero reads `Price N/A`.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p != 0.0 && p.is_finite() => {
            let rounded = p.round();
            let sign = if rounded < 0.0 { "-" } else { "" };
            format!("{sign}${}", group_thousands(rounded.abs() as u64))
        }
        _ => "Price N/A".to_string(),
    }
}

/// Thousands-separated count with up to three decimals, or `--`.
pub fn format_count(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 && v.is_finite() => {
            let sign = if v < 0.0 { "-" } else { "" };
            let v = v.abs();
            let whole = v.trunc();
            let fraction = format!("{:.3}", v - whole);
            // "0.250" -> "25"; "1.000" means the fraction rounded up.
            let (whole, fraction) = if fraction.starts_with('1') {
                (whole + 1.0, String::new())
            } else {
                (whole, fraction[2..].trim_end_matches('0').to_string())
            };

            let mut out = format!("{sign}{}", group_thousands(whole as u64));
            if !fraction.is_empty() {
                out.push('.');
                out.push_str(&fraction);
            }
            out
        }
        _ => "--".to_string(),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `(608) 555-0134` for ten-digit numbers, anything else verbatim.
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        phone.to_string()
    }
}

pub fn format_address(listing: &NormalizedListing) -> String {
    let parts: Vec<&str> = ["addressLine1", "city", "state", "zipCode"]
        .iter()
        .filter_map(|key| listing.text(key))
        .filter(|s| !s.is_empty())
        .collect();

    if parts.is_empty() {
        "Address not available".to_string()
    } else {
        parts.join(", ")
    }
}

pub fn format_listed_date(listing: &NormalizedListing) -> String {
    listing
        .text("listedDate")
        .and_then(parse_listed_date)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// RFC 3339 timestamp, or a bare `YYYY-MM-DD` taken as midnight UTC.
pub fn parse_listed_date(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}

/// Bedroom/bathroom count as listed, `--` when missing or zero.
pub fn format_rooms(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(n)) => format_count(n.as_f64()),
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => "--".to_string(),
    }
}
