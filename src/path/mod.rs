//! Path query engine
//!
//! A `PathQuery` holds a frontier (the resources currently under
//! consideration) and a FIFO queue of deferred `Step`s. Builder calls only
//! enqueue; a terminal call drains the queue one step at a time, each step
//! reading the frontier the previous one produced, then decodes the final
//! frontier.
//!
//! ```rust,no_run
//! use tpf_client::TpfClient;
//! use tpf_client::rdf::namespace::{OBO, VCARD};
//!
//! # async fn run() -> tpf_client::TpfResult<()> {
//! let client = TpfClient::new("https://vivo.metabolomics.info/tpf/core")?;
//! let emails = client
//!     .entity("https://vivo.metabolomics.info/individual/n007")
//!     .link(OBO, "ARG_2000028")
//!     .link(VCARD, "hasEmail")
//!     .link(VCARD, "email")
//!     .results()
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod step;

pub use step::Step;

use futures::future::try_join_all;
use indexmap::IndexMap;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::client::TpfClient;
use crate::error::TpfResult;
use crate::fragment::FragmentPattern;
use crate::rdf::{decode_literal, is_literal, Triple, RDF_TYPE};

/// Fluent, deferred traversal over a TPF dataset
pub struct PathQuery {
    client: TpfClient,
    frontier: Vec<String>,
    steps: VecDeque<Step>,
}

impl PathQuery {
    pub(crate) fn new(client: TpfClient, frontier: Vec<String>) -> Self {
        Self {
            client,
            frontier,
            steps: VecDeque::new(),
        }
    }

    /// Enqueue an arbitrary step
    pub fn then(mut self, step: Step) -> Self {
        self.steps.push_back(step);
        self
    }

    /// Replace the frontier with every resource of `type_iri`
    pub fn list(self, type_iri: &str) -> Self {
        self.then(Step::list(type_iri))
    }

    /// Follow the `namespace + fragment` predicate from every resource
    pub fn link(self, namespace: &str, fragment: &str) -> Self {
        self.then(Step::expand(namespace, fragment))
    }

    /// Keep only resources declared `rdf:type` `namespace + fragment`
    pub fn of_type(self, namespace: &str, fragment: &str) -> Self {
        self.then(Step::filter_type(namespace, fragment))
    }

    /// `link` with a compact name such as `rdfs:label`
    pub fn link_compact(self, name: &str) -> TpfResult<Self> {
        let (namespace, fragment) = self.client.namespaces().resolve(name)?;
        Ok(self.link(&namespace, &fragment))
    }

    /// `of_type` with a compact name such as `bibo:Document`
    pub fn type_compact(self, name: &str) -> TpfResult<Self> {
        let (namespace, fragment) = self.client.namespaces().resolve(name)?;
        Ok(self.of_type(&namespace, &fragment))
    }

    /// Steps not yet executed, in execution order
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }

    /// Current frontier, undecoded
    pub fn frontier(&self) -> &[String] {
        &self.frontier
    }

    /// Run queued steps strictly in order
    async fn drain(&mut self) -> TpfResult<()> {
        while let Some(step) = self.steps.pop_front() {
            let before = self.frontier.len();
            self.frontier = evaluate(&self.client, &self.frontier, &step).await?;
            debug!("Step '{}': frontier {} -> {}", step, before, self.frontier.len());
        }
        Ok(())
    }

    /// Execute the query and return every decoded result, in order,
    /// duplicates included.
    ///
    /// The query can be extended and run again afterwards; executed steps
    /// are not repeated.
    pub async fn results(&mut self) -> TpfResult<Vec<String>> {
        self.drain().await?;
        Ok(self.frontier.iter().map(|term| decode_literal(term)).collect())
    }

    /// Execute the query and return the first result, or `""` when there
    /// is none.
    pub async fn single(&mut self) -> TpfResult<String> {
        Ok(self.results().await?.into_iter().next().unwrap_or_default())
    }

    /// Execute the query and call `callback` once per result, in order
    pub async fn for_each<F>(&mut self, mut callback: F) -> TpfResult<()>
    where
        F: FnMut(String),
    {
        for value in self.results().await? {
            callback(value);
        }
        Ok(())
    }

    /// Run the query in the background and hand the results to `callback`.
    ///
    /// Failures skip the callback; they are logged and returned through
    /// the join handle.
    pub fn spawn_results<F>(mut self, callback: F) -> JoinHandle<TpfResult<()>>
    where
        F: FnOnce(Vec<String>) + Send + 'static,
    {
        tokio::spawn(async move {
            match self.results().await {
                Ok(values) => {
                    callback(values);
                    Ok(())
                }
                Err(e) => {
                    warn!("Path query failed: {}", e);
                    Err(e)
                }
            }
        })
    }
}

/// Apply one step to a frontier, producing the next frontier.
pub async fn evaluate(client: &TpfClient, frontier: &[String], step: &Step) -> TpfResult<Vec<String>> {
    match step {
        Step::ListSeed { type_iri } => {
            let pattern = FragmentPattern::predicate_object(RDF_TYPE, type_iri);
            let instances = client.query(&pattern).await?;
            Ok(instances.into_iter().map(|t| t.subject).collect())
        }
        Step::Expand { predicate } => {
            let resources = lookup_all(client, frontier).await?;
            Ok(frontier
                .iter()
                .filter_map(|id| resources.get(id.as_str()))
                .flat_map(|triples| triples.iter())
                .filter(|t| &t.predicate == predicate)
                .map(|t| t.object.clone())
                .collect())
        }
        Step::FilterType { type_iri } => {
            let resources = lookup_all(client, frontier).await?;
            Ok(frontier
                .iter()
                .filter(|id| {
                    resources.get(id.as_str()).is_some_and(|triples| {
                        triples
                            .iter()
                            .any(|t| t.predicate == RDF_TYPE && &t.object == type_iri)
                    })
                })
                .cloned()
                .collect())
        }
    }
}

/// Look up every distinct resource of the frontier concurrently.
///
/// Literals have no outgoing triples and are never looked up.
async fn lookup_all<'a>(
    client: &TpfClient,
    frontier: &'a [String],
) -> TpfResult<IndexMap<&'a str, Arc<Vec<Triple>>>> {
    let mut distinct: IndexMap<&'a str, ()> = IndexMap::new();
    for id in frontier.iter().filter(|id| !is_literal(id)) {
        distinct.insert(id.as_str(), ());
    }

    let lookups = distinct.keys().map(|id| client.lookup(id));
    let results = try_join_all(lookups).await?;

    Ok(distinct.into_keys().zip(results).collect())
}
