// config.rs
use clap::ValueEnum;
use dotenvy::dotenv;
use std::env;
use std::fmt;
use thiserror::Error;
use url::Url;

pub const API_KEY_VAR: &str = "RENTCAST_API_KEY";
pub const BASE_URL_VAR: &str = "RENTCAST_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "https://api.rentcast.io/v1";

// Madison, WI area
const CITY: &str = "Madison";
const STATE: &str = "WI";
const CENTER_LATITUDE: f64 = 43.0731;
const CENTER_LONGITUDE: f64 = -89.4012;
const RADIUS_MILES: u32 = 10;

const STATUS_ACTIVE: &str = "Active";
const DAYS_OLD: u32 = 7;
const LIMIT: u32 = 50;
// Floors that filter out land/lots.
const CITY_PRICE_MIN: u64 = 300_000;
const RADIUS_PRICE_MIN: u64 = 200_000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("RENTCAST_API_KEY environment variable not set")]
    MissingCredential,
    #[error("RENTCAST_BASE_URL is not a valid URL ({value}): {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}

/// How the listings search is scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Strategy {
    /// Exact city/state match.
    #[default]
    City,
    /// Geographic radius around the metro center.
    Radius,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchArea {
    City { city: String, state: String },
    Radius {
        latitude: f64,
        longitude: f64,
        radius_miles: u32,
    },
}

impl fmt::Display for SearchArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchArea::City { city, state } => write!(f, "{city}, {state}"),
            SearchArea::Radius {
                latitude,
                longitude,
                radius_miles,
            } => write!(f, "{radius_miles} mi around ({latitude}, {longitude})"),
        }
    }
}

/// Label for the searched metro area. Also the fallback city/state for
/// listings that omit them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub city: String,
    pub state: String,
}

impl Region {
    pub fn madison() -> Self {
        Self {
            city: CITY.to_string(),
            state: STATE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchParameters {
    pub area: SearchArea,
    pub status: String,
    pub days_old: u32,
    pub price_min: u64,
    pub limit: u32,
}

impl SearchParameters {
    pub fn for_strategy(strategy: Strategy) -> Self {
        let (area, price_min) = match strategy {
            Strategy::City => (
                SearchArea::City {
                    city: CITY.to_string(),
                    state: STATE.to_string(),
                },
                CITY_PRICE_MIN,
            ),
            Strategy::Radius => (
                SearchArea::Radius {
                    latitude: CENTER_LATITUDE,
                    longitude: CENTER_LONGITUDE,
                    radius_miles: RADIUS_MILES,
                },
                RADIUS_PRICE_MIN,
            ),
        };

        Self {
            area,
            status: STATUS_ACTIVE.to_string(),
            days_old: DAYS_OLD,
            price_min,
            limit: LIMIT,
        }
    }

    /// Query string pairs in the order the API documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = match &self.area {
            SearchArea::City { city, state } => {
                vec![("city", city.clone()), ("state", state.clone())]
            }
            SearchArea::Radius {
                latitude,
                longitude,
                radius_miles,
            } => vec![
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("radius", radius_miles.to_string()),
            ],
        };

        pairs.push(("status", self.status.clone()));
        pairs.push(("daysOld", self.days_old.to_string()));
        pairs.push(("priceMin", self.price_min.to_string()));
        pairs.push(("limit", self.limit.to_string()));
        pairs
    }
}

/// API credential. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: ApiKey,
    pub base_url: Url,
    pub search: SearchParameters,
    pub region: Region,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env(strategy: Strategy) -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(strategy, |name| env::var(name).ok())
    }

    pub fn from_lookup<F>(strategy: Strategy, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .map(ApiKey::new)
            .ok_or(ConfigError::MissingCredential)?;

        let raw_base = lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_base).map_err(|e| ConfigError::InvalidBaseUrl {
            value: raw_base.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            api_key,
            base_url,
            search: SearchParameters::for_strategy(strategy),
            region: Region::madison(),
        })
    }
}
