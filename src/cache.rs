//! Per-resource triple cache
//!
//! Each entry holds the complete, filtered triple set of one subject and the
//! wall-clock time it was fetched. An entry is valid while
//! `now - fetched_at < ttl`; an expired entry is replaced as a whole on the
//! next lookup. Concurrent misses on the same subject are not coalesced:
//! each fetches, and the last write wins.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::TpfResult;
use crate::fragment::{FragmentFetcher, FragmentPattern};
use crate::rdf::Triple;

/// Source of wall-clock time for cache validity checks
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The system clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        let delta = chrono::Duration::from_std(by).unwrap_or(chrono::Duration::MAX);
        let mut now = self.now.lock().unwrap_or_else(|p| p.into_inner());
        let next = now.checked_add_signed(delta).unwrap_or(DateTime::<Utc>::MAX_UTC);
        *now = next;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|p| p.into_inner())
    }
}

/// Cached triples of one subject
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub triples: Arc<Vec<Triple>>,
    pub fetched_at: DateTime<Utc>,
}

/// Subject IRI → triples cache with a fixed validity window
pub struct ResourceCache {
    entries: RwLock<FxHashMap<String, CacheEntry>>,
    ttl: chrono::Duration,
    clock: Arc<dyn Clock>,
}

impl ResourceCache {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
            ttl: chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX),
            clock,
        }
    }

    /// Triples about `iri`, from cache when still valid, otherwise fetched
    /// through `fetcher` and stored.
    pub async fn lookup(&self, fetcher: &FragmentFetcher, iri: &str) -> TpfResult<Arc<Vec<Triple>>> {
        if let Some(triples) = self.get_valid(iri).await {
            debug!("Cache hit: {}", iri);
            return Ok(triples);
        }

        debug!("Cache miss: {}", iri);
        let triples = Arc::new(fetcher.query(&FragmentPattern::subject(iri)).await?);

        let entry = CacheEntry {
            triples: triples.clone(),
            fetched_at: self.clock.now(),
        };
        self.entries.write().await.insert(iri.to_string(), entry);

        Ok(triples)
    }

    async fn get_valid(&self, iri: &str) -> Option<Arc<Vec<Triple>>> {
        let entries = self.entries.read().await;
        let entry = entries.get(iri)?;

        if self.clock.now().signed_duration_since(entry.fetched_at) < self.ttl {
            Some(entry.triples.clone())
        } else {
            debug!("Cache entry expired: {}", iri);
            None
        }
    }

    /// Snapshot of the entry for `iri`, valid or not
    pub async fn entry(&self, iri: &str) -> Option<CacheEntry> {
        self.entries.read().await.get(iri).cloned()
    }

    /// Number of stored entries, including expired ones
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drop every entry
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}
