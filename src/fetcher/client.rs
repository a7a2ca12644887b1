// client.rs
use crate::config::{ApiKey, SearchParameters};
use crate::domain::RawListing;
use crate::fetcher::FetchError;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use serde_json::Value;
use std::time::Duration;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const SALE_LISTINGS_PATH: &str = "listings/sale";
const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");

/// Anything that can answer a sale-listings search.
pub trait ListingSource {
    fn fetch(
        &self,
        params: &SearchParameters,
        api_key: &ApiKey,
    ) -> Result<Vec<RawListing>, FetchError>;
}

impl<T: ListingSource + ?Sized> ListingSource for &T {
    fn fetch(
        &self,
        params: &SearchParameters,
        api_key: &ApiKey,
    ) -> Result<Vec<RawListing>, FetchError> {
        (**self).fetch(params, api_key)
    }
}

pub struct RentcastClient {
    client: Client,
    endpoint: Url,
}

impl RentcastClient {
    pub fn new(base_url: &Url) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint_url(base_url)?,
        })
    }
}

impl ListingSource for RentcastClient {
    fn fetch(
        &self,
        params: &SearchParameters,
        api_key: &ApiKey,
    ) -> Result<Vec<RawListing>, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let key = HeaderValue::from_str(api_key.expose())
            .map_err(|_| FetchError::Transport("API key is not a valid header value".into()))?;
        headers.insert(API_KEY_HEADER, key);

        let resp = self
            .client
            .get(self.endpoint.clone())
            .headers(headers)
            .query(&params.query_pairs())
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body: text });
        }

        let listings = parse_listings(&text)?;
        tracing::info!("Received {} listings", listings.len());

        Ok(listings)
    }
}

/// `<base>/listings/sale`, keeping any path prefix the base already has.
pub fn endpoint_url(base_url: &Url) -> Result<Url, FetchError> {
    let mut base = base_url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(SALE_LISTINGS_PATH)
        .map_err(|e| FetchError::Endpoint(e.to_string()))
}

fn parse_listings(text: &str) -> Result<Vec<RawListing>, FetchError> {
    let data: Value = serde_json::from_str(text).map_err(|e| FetchError::Decode(e.to_string()))?;

    match data {
        Value::Array(items) => Ok(items.into_iter().map(RawListing::from_value).collect()),
        other => Err(FetchError::Decode(format!(
            "expected a JSON array of listings, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
