//! RDF support for the TPF client
//!
//! - Triples in n-triples lexical form
//! - Lenient N-Triples parsing and literal decoding
//! - Control/metadata triple detection
//! - Vocabulary namespaces and compact names
//!
//! # Example
//!
//! ```rust
//! use tpf_client::rdf::{parse_triples, decode_literal};
//!
//! let triples = parse_triples("<http://x/a> <http://x/name> \"Alice\"@en .\n");
//! assert_eq!(triples.len(), 1);
//! assert_eq!(decode_literal(&triples[0].object), "Alice");
//! ```

mod types;
mod ntriples;
pub mod namespace;

pub use types::{Triple, iri_reference, is_literal, to_reference};

pub use ntriples::{
    parse_triples, decode_literal,
    is_control_triple, has_next_page,
};

pub use namespace::{NamespaceManager, RDF_TYPE, HYDRA_NEXT_PAGE};
