//! Paginated fragment fetching
//!
//! One logical query walks pages 1, 2, ... until a page no longer carries
//! a `hydra:nextPage` control triple. Pages are concatenated in order and
//! control/metadata triples are stripped only after the walk, so each page's
//! next-page marker is seen before it is discarded.

use std::sync::Arc;
use tracing::debug;

use super::transport::Transport;
use super::{FragmentPattern, NTRIPLES_ACCEPT};
use crate::error::{TpfError, TpfResult};
use crate::rdf::{has_next_page, is_control_triple, parse_triples, Triple};

/// Issues fragment requests against one endpoint
#[derive(Clone)]
pub struct FragmentFetcher {
    endpoint: String,
    transport: Arc<dyn Transport>,
    max_pages: usize,
}

impl FragmentFetcher {
    pub fn new(endpoint: impl Into<String>, transport: Arc<dyn Transport>, max_pages: usize) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
            max_pages,
        }
    }

    /// Fetch and parse a single page, unfiltered
    pub async fn fetch_page(&self, pattern: &FragmentPattern, page: usize) -> TpfResult<Vec<Triple>> {
        let url = pattern.url(&self.endpoint, page);
        debug!("Fetching fragment page {}: {}", page, url);

        let body = self
            .transport
            .fetch(&url, &[("Accept", NTRIPLES_ACCEPT)])
            .await?;

        Ok(parse_triples(&body))
    }

    /// Fetch every page of `pattern` and return the filtered union in
    /// page order.
    pub async fn query(&self, pattern: &FragmentPattern) -> TpfResult<Vec<Triple>> {
        let mut all = Vec::new();
        let mut page = 1;

        loop {
            let triples = self.fetch_page(pattern, page).await?;
            let more = has_next_page(&triples);
            all.extend(triples);

            if !more {
                break;
            }
            if page >= self.max_pages {
                return Err(TpfError::PageLimit {
                    url: pattern.url(&self.endpoint, 1),
                    pages: self.max_pages,
                });
            }
            page += 1;
        }

        let useful = strip_controls(all);
        debug!("Fragment complete: {} triples over {} page(s)", useful.len(), page);
        Ok(useful)
    }

    /// Fetch one page of `pattern`, filtered. A page below 1 fetches all
    /// pages like `query`.
    pub async fn query_page(&self, pattern: &FragmentPattern, page: usize) -> TpfResult<Vec<Triple>> {
        if page < 1 {
            return self.query(pattern).await;
        }
        let triples = self.fetch_page(pattern, page).await?;
        Ok(strip_controls(triples))
    }
}

fn strip_controls(triples: Vec<Triple>) -> Vec<Triple> {
    triples.into_iter().filter(|t| !is_control_triple(t)).collect()
}
