//! Transports carrying fragment requests
//!
//! - **`HttpTransport`** — reqwest-backed, for real servers.
//! - **`MemoryTransport`** — in-process canned responses with a request log.
//!   Ideal for tests, examples and offline use.

use async_trait::async_trait;
use reqwest::Client;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

use super::FragmentPattern;
use crate::config::ClientConfig;
use crate::error::{TpfError, TpfResult};

/// Fetches a URL and returns the response body as text.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &str, headers: &[(&str, &str)]) -> TpfResult<String>;
}

/// HTTP transport backed by a shared reqwest client
pub struct HttpTransport {
    http_client: Client,
}

impl HttpTransport {
    /// Create a transport with no timeouts
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
        }
    }

    /// Create a transport honouring the config's optional timeouts
    pub fn from_config(config: &ClientConfig) -> TpfResult<Self> {
        let mut builder = Client::builder();
        if let Some(ms) = config.connect_timeout_ms {
            builder = builder.connect_timeout(Duration::from_millis(ms));
        }
        if let Some(ms) = config.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }

        let http_client = builder
            .build()
            .map_err(|e| TpfError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str, headers: &[(&str, &str)]) -> TpfResult<String> {
        let mut request = self.http_client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TpfError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

/// In-process transport serving canned fragment pages.
///
/// Pages are registered per pattern and page number; unregistered requests
/// answer with an empty body, as a TPF server does for a pattern with no
/// matches. Every request URL is logged in order.
pub struct MemoryTransport {
    endpoint: String,
    pages: Mutex<HashMap<String, String>>,
    failing: Mutex<HashSet<String>>,
    requests: Mutex<Vec<String>>,
}

impl MemoryTransport {
    /// Create an empty transport answering for `endpoint`
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            pages: Mutex::new(HashMap::new()),
            failing: Mutex::new(HashSet::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Serve `body` for one page of `pattern`
    pub fn insert_page(&self, pattern: &FragmentPattern, page: usize, body: impl Into<String>) {
        let url = pattern.url(&self.endpoint, page);
        lock(&self.pages).insert(url, body.into());
    }

    /// Serve `body` as page 1 of everything about `subject`
    pub fn insert_subject(&self, subject: &str, body: impl Into<String>) {
        self.insert_page(&FragmentPattern::subject(subject), 1, body);
    }

    /// Make one page of `pattern` fail with a 500 status
    pub fn fail_page(&self, pattern: &FragmentPattern, page: usize) {
        let url = pattern.url(&self.endpoint, page);
        lock(&self.failing).insert(url);
    }

    /// URLs requested so far, in request order
    pub fn requests(&self) -> Vec<String> {
        lock(&self.requests).clone()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn fetch(&self, url: &str, _headers: &[(&str, &str)]) -> TpfResult<String> {
        lock(&self.requests).push(url.to_string());
        debug!("Memory transport request: {}", url);

        if lock(&self.failing).contains(url) {
            return Err(TpfError::Status {
                url: url.to_string(),
                status: 500,
            });
        }

        Ok(lock(&self.pages).get(url).cloned().unwrap_or_default())
    }
}

// Poisoning is ignored: the guarded maps hold no cross-field invariants.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
