// src/domain/transform.rs

use crate::config::Region;
use crate::domain::fields::{FieldRule, RegionField, Source, LISTING_FIELDS};
use crate::domain::listing::{NormalizedListing, RawListing};
use serde_json::{Map, Value};

/// Reshapes one raw listing into the snapshot schema.
///
/// Total and pure: every rule in [`LISTING_FIELDS`] yields a value, so any
/// input (including `{}` or a record of the wrong types) produces a complete
/// record.
pub fn normalize(raw: &RawListing, region: &Region) -> NormalizedListing {
    NormalizedListing::from_map(apply_rules(LISTING_FIELDS, Some(raw.as_map()), region))
}

fn apply_rules(
    rules: &[FieldRule],
    input: Option<&Map<String, Value>>,
    region: &Region,
) -> Map<String, Value> {
    let get = |key: &str| input.and_then(|m| m.get(key));

    rules
        .iter()
        .map(|rule| {
            let value = match rule.source {
                Source::Field(key) => get(key).cloned().unwrap_or(Value::Null),
                Source::FieldOr(key, fallback) => match get(key) {
                    Some(v) => v.clone(),
                    None => Value::String(region_value(region, fallback).to_string()),
                },
                Source::FirstTruthy(primary, secondary) => match get(primary) {
                    Some(v) if is_truthy(v) => v.clone(),
                    _ => get(secondary).cloned().unwrap_or(Value::Null),
                },
                Source::Nested(parent, sub_rules) => {
                    let nested = get(parent)
                        .filter(|v| is_truthy(v))
                        .and_then(Value::as_object);
                    Value::Object(apply_rules(sub_rules, nested, region))
                }
            };
            (rule.key.to_string(), value)
        })
        .collect()
}

fn region_value(region: &Region, field: RegionField) -> &str {
    match field {
        RegionField::City => &region.city,
        RegionField::State => &region.state,
    }
}

/// `null`, `false`, zero, and empty strings/arrays/objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
