// src/domain/listing.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One listing exactly as the upstream API returned it. Nothing about its
/// shape is trusted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawListing(Map<String, Value>);

impl RawListing {
    /// Anything other than a JSON object is treated as an empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// A listing reshaped into the snapshot schema. Every key is always present;
/// values are carried through from the raw record untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedListing(Map<String, Value>);

impl NormalizedListing {
    pub(crate) fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[cfg(test)]
    pub fn as_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    pub fn price(&self) -> Option<f64> {
        self.number("price")
    }

    pub fn bedrooms(&self) -> Option<f64> {
        self.number("bedrooms")
    }

    /// Sub-field of the embedded `agent` / `office` record.
    pub fn contact(&self, record: &str, field: &str) -> Option<&str> {
        self.get(record)
            .and_then(|r| r.get(field))
            .and_then(Value::as_str)
    }
}
