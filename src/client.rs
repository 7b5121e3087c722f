//! TpfClient — the entry point for querying one TPF endpoint
//!
//! A client owns its configuration, fragment fetcher, namespace registry and
//! resource cache. Cloning is cheap and clones share the cache, so a client
//! is typically created once per endpoint and handed to every query.

use std::fmt;
use std::sync::Arc;
use tracing::info;

use crate::cache::{Clock, ResourceCache, SystemClock};
use crate::config::ClientConfig;
use crate::error::TpfResult;
use crate::fragment::{FragmentFetcher, FragmentPattern, HttpTransport, Transport};
use crate::path::PathQuery;
use crate::rdf::{to_reference, NamespaceManager, Triple};

/// Client for a Triple Pattern Fragments server.
///
/// Offers a fluent path API through [`TpfClient::entity`] and
/// [`TpfClient::list`], and raw pattern queries through
/// [`TpfClient::query`].
#[derive(Clone)]
pub struct TpfClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    config: ClientConfig,
    fetcher: FragmentFetcher,
    cache: ResourceCache,
    namespaces: NamespaceManager,
}

impl TpfClient {
    /// Create an HTTP client for `endpoint` with default settings
    ///
    /// # Example
    /// ```no_run
    /// # use tpf_client::TpfClient;
    /// let client = TpfClient::new("https://vivo.metabolomics.info/tpf/core").unwrap();
    /// ```
    pub fn new(endpoint: &str) -> TpfResult<Self> {
        Self::from_config(ClientConfig::new(endpoint))
    }

    /// Create an HTTP client from a config
    pub fn from_config(config: ClientConfig) -> TpfResult<Self> {
        Self::builder(config).build()
    }

    pub fn builder(config: ClientConfig) -> ClientBuilder {
        ClientBuilder {
            config,
            transport: None,
            clock: None,
            namespaces: None,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.inner.config.endpoint
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn namespaces(&self) -> &NamespaceManager {
        &self.inner.namespaces
    }

    pub fn cache(&self) -> &ResourceCache {
        &self.inner.cache
    }

    /// Start a path query at one resource. Bare IRIs are bracketed.
    pub fn entity(&self, iri: &str) -> PathQuery {
        PathQuery::new(self.clone(), vec![to_reference(iri)])
    }

    /// Start a path query at a compact name such as `ex:alice`
    pub fn entity_compact(&self, name: &str) -> TpfResult<PathQuery> {
        let iri = self.inner.namespaces.reference(name)?;
        Ok(PathQuery::new(self.clone(), vec![iri]))
    }

    /// Start a path query at every resource of `type_iri`
    pub fn list(&self, type_iri: &str) -> PathQuery {
        PathQuery::new(self.clone(), Vec::new()).list(type_iri)
    }

    /// All triples matching `pattern`, every page, control triples removed
    pub async fn query(&self, pattern: &FragmentPattern) -> TpfResult<Vec<Triple>> {
        self.inner.fetcher.query(pattern).await
    }

    /// One page of `pattern`; a page below 1 means all pages
    pub async fn query_page(&self, pattern: &FragmentPattern, page: usize) -> TpfResult<Vec<Triple>> {
        self.inner.fetcher.query_page(pattern, page).await
    }

    /// Triples about `iri`, served from the cache while valid
    pub async fn lookup(&self, iri: &str) -> TpfResult<Arc<Vec<Triple>>> {
        self.inner.cache.lookup(&self.inner.fetcher, iri).await
    }
}

impl fmt::Debug for TpfClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TpfClient")
            .field("endpoint", &self.inner.config.endpoint)
            .field("cache_ttl_ms", &self.inner.config.cache_ttl_ms)
            .finish()
    }
}

/// Builder for a `TpfClient` with a custom transport, clock or prefixes
pub struct ClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
    clock: Option<Arc<dyn Clock>>,
    namespaces: Option<NamespaceManager>,
}

impl ClientBuilder {
    /// Use `transport` instead of HTTP
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use `clock` for cache validity instead of the system clock
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn namespaces(mut self, namespaces: NamespaceManager) -> Self {
        self.namespaces = Some(namespaces);
        self
    }

    pub fn build(self) -> TpfResult<TpfClient> {
        self.config.validate()?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::from_config(&self.config)?),
        };
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        let fetcher = FragmentFetcher::new(
            self.config.endpoint.clone(),
            transport,
            self.config.max_pages,
        );
        let cache = ResourceCache::new(self.config.cache_ttl(), clock);
        info!(
            "TPF client for {} (cache ttl {}ms)",
            self.config.endpoint, self.config.cache_ttl_ms
        );

        Ok(TpfClient {
            inner: Arc::new(ClientInner {
                config: self.config,
                fetcher,
                cache,
                namespaces: self.namespaces.unwrap_or_default(),
            }),
        })
    }
}
