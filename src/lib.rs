//! TPF Client — path queries over Triple Pattern Fragments servers
//!
//! A client for paginated, triple-based Linked Data endpoints serving
//! n-triples. Start from a resource (or every resource of a type), follow
//! predicates, narrow by `rdf:type`, and collect decoded values.
//!
//! # Architecture
//!
//! - `rdf` — lenient N-Triples codec, literal decoding, vocabularies
//! - `fragment` — transport abstraction and paginated fragment fetching
//! - `cache` — per-resource triple cache with a validity window
//! - `path` — deferred step queue and its evaluator
//! - `client` — `TpfClient`, tying the above together per endpoint
//! - `entity` — person profile accessors built on path queries
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use tpf_client::{ClientConfig, FragmentPattern, MemoryTransport, TpfClient};
//! use tpf_client::rdf::namespace::{FOAF, RDFS};
//!
//! #[tokio::main]
//! async fn main() {
//!     let endpoint = "http://localhost/tpf/core";
//!     let transport = Arc::new(MemoryTransport::new(endpoint));
//!     transport.insert_page(
//!         &FragmentPattern::predicate_object(
//!             "<http://www.w3.org/1999/02/22-rdf-syntax-ns#type>",
//!             "<http://xmlns.com/foaf/0.1/Person>",
//!         ),
//!         1,
//!         "<http://x/alice> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://xmlns.com/foaf/0.1/Person> .\n",
//!     );
//!     transport.insert_subject(
//!         "<http://x/alice>",
//!         "<http://x/alice> <http://www.w3.org/2000/01/rdf-schema#label> \"Alice\"@en .\n",
//!     );
//!
//!     let client = TpfClient::builder(ClientConfig::new(endpoint))
//!         .transport(transport)
//!         .build()
//!         .unwrap();
//!
//!     let names = client
//!         .list(&format!("{}Person", FOAF))
//!         .link(RDFS, "label")
//!         .results()
//!         .await
//!         .unwrap();
//!     assert_eq!(names, vec!["Alice"]);
//! }
//! ```

#![warn(clippy::all)]

pub mod cache;
pub mod client;
pub mod config;
pub mod entity;
pub mod error;
pub mod fragment;
pub mod path;
pub mod rdf;

pub use cache::{Clock, ManualClock, ResourceCache, SystemClock};
pub use client::{ClientBuilder, TpfClient};
pub use config::ClientConfig;
pub use error::{TpfError, TpfResult};
pub use fragment::{FragmentFetcher, FragmentPattern, HttpTransport, MemoryTransport, Transport};
pub use path::{PathQuery, Step};
pub use rdf::{decode_literal, iri_reference, parse_triples, Triple};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
