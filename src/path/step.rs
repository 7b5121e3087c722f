//! Deferred traversal steps

use std::fmt;

use crate::rdf::{iri_reference, to_reference};

/// One unit of deferred traversal work.
///
/// Steps are plain data; `evaluate` in the parent module interprets them
/// against a frontier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Replace the frontier with every subject typed `type_iri`
    ListSeed { type_iri: String },
    /// Replace the frontier with the objects of `predicate`
    Expand { predicate: String },
    /// Keep only frontier members typed `type_iri`
    FilterType { type_iri: String },
}

impl Step {
    /// `type_iri` may be bare (`http://...`) or bracketed (`<http://...>`)
    pub fn list(type_iri: &str) -> Self {
        Step::ListSeed {
            type_iri: to_reference(type_iri),
        }
    }

    pub fn expand(namespace: &str, fragment: &str) -> Self {
        Step::Expand {
            predicate: iri_reference(namespace, fragment),
        }
    }

    pub fn filter_type(namespace: &str, fragment: &str) -> Self {
        Step::FilterType {
            type_iri: iri_reference(namespace, fragment),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::ListSeed { type_iri } => write!(f, "list {}", type_iri),
            Step::Expand { predicate } => write!(f, "link {}", predicate),
            Step::FilterType { type_iri } => write!(f, "type {}", type_iri),
        }
    }
}
