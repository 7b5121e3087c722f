//! RDF type definitions
//!
//! Terms are kept in their n-triples lexical form: IRIs as bracketed
//! references (`<http://...>`), literals with their quotes and any language
//! tag or datatype suffix. Two terms are equal iff their strings are equal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// RDF triple (subject-predicate-object) as returned by a fragment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    /// Subject IRI reference
    pub subject: String,
    /// Predicate IRI reference
    pub predicate: String,
    /// Object IRI reference or literal
    pub object: String,
}

impl Triple {
    /// Create a new triple
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Check if the object is a literal rather than an IRI reference
    pub fn has_literal_object(&self) -> bool {
        is_literal(&self.object)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

/// Creates an IRI reference of the form `<http://example.com/x>`.
pub fn iri_reference(namespace: &str, fragment: &str) -> String {
    format!("<{}{}>", namespace, fragment)
}

/// Bracket a bare IRI; references and literals pass through unchanged.
pub fn to_reference(term: &str) -> String {
    if (term.starts_with('<') && term.ends_with('>')) || is_literal(term) {
        term.to_string()
    } else {
        format!("<{}>", term)
    }
}

/// Whether a term is written as a quoted literal.
pub fn is_literal(term: &str) -> bool {
    term.starts_with('"')
}
