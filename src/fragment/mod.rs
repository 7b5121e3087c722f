//! Triple Pattern Fragments protocol
//!
//! A fragment request selects triples by an optional subject, predicate and
//! object, one page at a time:
//!
//! ```text
//! GET {endpoint}?subject=<enc>&predicate=<enc>&object=<enc>&page=<n>
//! Accept: application/n-triples; charset=utf-8
//! ```
//!
//! An empty parameter leaves that position unconstrained.

pub mod fetcher;
pub mod transport;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

pub use fetcher::FragmentFetcher;
pub use transport::{HttpTransport, MemoryTransport, Transport};

/// Media type requested from the server
pub const NTRIPLES_ACCEPT: &str = "application/n-triples; charset=utf-8";

/// Characters escaped in query components (`encodeURIComponent` set)
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Triple pattern with optional positions (None = wildcard)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FragmentPattern {
    pub subject: Option<String>,
    pub predicate: Option<String>,
    pub object: Option<String>,
}

impl FragmentPattern {
    /// Create a new pattern
    pub fn new(subject: Option<&str>, predicate: Option<&str>, object: Option<&str>) -> Self {
        Self {
            subject: subject.map(str::to_string),
            predicate: predicate.map(str::to_string),
            object: object.map(str::to_string),
        }
    }

    /// All triples about `subject`
    pub fn subject(subject: &str) -> Self {
        Self::new(Some(subject), None, None)
    }

    /// All triples with `predicate` and `object`
    pub fn predicate_object(predicate: &str, object: &str) -> Self {
        Self::new(None, Some(predicate), Some(object))
    }

    /// Query string for one page, including the leading `?`
    pub fn query_string(&self, page: usize) -> String {
        let page = page.to_string();
        let parts = [
            ("subject", self.subject.as_deref().unwrap_or("")),
            ("predicate", self.predicate.as_deref().unwrap_or("")),
            ("object", self.object.as_deref().unwrap_or("")),
            ("page", page.as_str()),
        ];

        let encoded: Vec<String> = parts
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(key, COMPONENT),
                    utf8_percent_encode(value, COMPONENT)
                )
            })
            .collect();

        format!("?{}", encoded.join("&"))
    }

    /// Full request URL for one page against `endpoint`
    pub fn url(&self, endpoint: &str, page: usize) -> String {
        let query = self.query_string(page);
        if endpoint.contains('?') {
            format!("{}&{}", endpoint, &query[1..])
        } else {
            format!("{}{}", endpoint, query)
        }
    }
}
