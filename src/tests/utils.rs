use crate::config::{ApiKey, Config, SearchParameters, Strategy};
use crate::domain::RawListing;
use crate::fetcher::{FetchError, ListingSource};
use astra::{Body, Request, Response, ResponseBuilder, Server};
use http::header::CONTENT_TYPE;
use http::Method;
use serde_json::Value;
use std::cell::Cell;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use url::Url;

/// Unique scratch path under the system temp dir.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "property_snapshot_{}_{}_{}",
        std::process::id(),
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        name
    ))
}

pub fn test_config(strategy: Strategy, base_url: &Url) -> Config {
    let base = base_url.to_string();
    Config::from_lookup(strategy, |name| match name {
        "RENTCAST_API_KEY" => Some("test-key".to_string()),
        "RENTCAST_BASE_URL" => Some(base.clone()),
        _ => None,
    })
    .expect("test config should resolve")
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub api_key: Option<String>,
    pub accept: Option<String>,
}

/// Local stand-in for the listings API answering every request with one
/// canned response.
pub struct MockApi {
    pub base_url: Url,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockApi {
    pub fn start(status: u16, body: &str) -> MockApi {
        let addr: SocketAddr = format!("127.0.0.1:{}", free_port()).parse().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);
        let body = body.to_string();

        std::thread::spawn(move || {
            let server = Server::bind(&addr).max_workers(2);
            let _ = server.serve(move |req: Request, _info| {
                seen.lock().unwrap().push(record(&req));
                canned(status, &body)
            });
        });

        wait_until_listening(addr);

        MockApi {
            base_url: Url::parse(&format!("http://{addr}/v1")).unwrap(),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn record(req: &Request) -> RecordedRequest {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    RecordedRequest {
        method: req.method().clone(),
        path: req.uri().path().to_string(),
        query: url::form_urlencoded::parse(req.uri().query().unwrap_or("").as_bytes())
            .into_owned()
            .collect(),
        api_key: header("x-api-key"),
        accept: header("accept"),
    }
}

fn canned(status: u16, body: &str) -> Response {
    ResponseBuilder::new()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// A port nothing is listening on (right now).
pub fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .and_then(|l| l.local_addr())
        .map(|a| a.port())
        .unwrap()
}

fn wait_until_listening(addr: SocketAddr) {
    for _ in 0..200 {
        if TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    panic!("mock API never started on {addr}");
}

/// In-memory source that counts how often it is asked.
pub struct CountingSource {
    calls: Cell<usize>,
    listings: Vec<Value>,
}

impl CountingSource {
    pub fn new(listings: Vec<Value>) -> Self {
        Self {
            calls: Cell::new(0),
            listings,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ListingSource for CountingSource {
    fn fetch(
        &self,
        _params: &SearchParameters,
        _api_key: &ApiKey,
    ) -> Result<Vec<RawListing>, FetchError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self
            .listings
            .iter()
            .cloned()
            .map(RawListing::from_value)
            .collect())
    }
}
