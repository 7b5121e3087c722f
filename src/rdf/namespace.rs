//! Vocabulary namespaces and compact-name handling
//!
//! Path queries name predicates and types as `(namespace, fragment)` pairs.
//! `NamespaceManager` turns compact names such as `rdfs:label` into those
//! pairs.

use std::collections::HashMap;

use crate::error::{TpfError, TpfResult};
use super::types::iri_reference;

pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";
pub const DCTERMS: &str = "http://purl.org/dc/terms/";
pub const BIBO: &str = "http://purl.org/ontology/bibo/";
pub const OBO: &str = "http://purl.obolibrary.org/obo/";
pub const VCARD: &str = "http://www.w3.org/2006/vcard/ns#";
pub const VITRO: &str = "http://vitro.mannlib.cornell.edu/ns/vitro/public#";
pub const VIVO: &str = "http://vivoweb.org/ontology/core#";
/// Metabolomics consortium ontology
pub const M3C: &str = "http://www.metabolomics.info/ontologies/2019/metabolomics-consortium#";

/// Hypermedia controls namespace (prefix match, no trailing `#`)
pub const HYDRA_NS: &str = "http://www.w3.org/ns/hydra/core";
/// Dataset metadata namespace (prefix match, no trailing `#`)
pub const VOID_NS: &str = "http://rdfs.org/ns/void";

/// `rdf:type` as an IRI reference
pub const RDF_TYPE: &str = "<http://www.w3.org/1999/02/22-rdf-syntax-ns#type>";
/// Control predicate announcing another page of the same fragment
pub const HYDRA_NEXT_PAGE: &str = "<http://www.w3.org/ns/hydra/core#nextPage>";

/// Prefix → namespace IRI registry with the vocabularies the client uses
#[derive(Debug, Clone)]
pub struct NamespaceManager {
    prefixes: HashMap<String, String>,
}

impl NamespaceManager {
    /// Create a new namespace manager with common prefixes
    pub fn new() -> Self {
        let mut mgr = Self {
            prefixes: HashMap::new(),
        };

        mgr.add_prefix("rdf", RDF);
        mgr.add_prefix("rdfs", RDFS);
        mgr.add_prefix("xsd", XSD);
        mgr.add_prefix("owl", OWL);
        mgr.add_prefix("foaf", FOAF);
        mgr.add_prefix("dcterms", DCTERMS);
        mgr.add_prefix("bibo", BIBO);
        mgr.add_prefix("obo", OBO);
        mgr.add_prefix("vcard", VCARD);
        mgr.add_prefix("vitro", VITRO);
        mgr.add_prefix("vivo", VIVO);
        mgr.add_prefix("m3c", M3C);

        mgr
    }

    /// Add a prefix, replacing any previous mapping
    pub fn add_prefix(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        self.prefixes.insert(prefix.into(), iri.into());
    }

    /// Get the namespace IRI for a prefix
    pub fn get_iri(&self, prefix: &str) -> TpfResult<&str> {
        self.prefixes
            .get(prefix)
            .map(|s| s.as_str())
            .ok_or_else(|| TpfError::Prefix(prefix.to_string()))
    }

    /// Split a compact name (`prefix:local`) into `(namespace, fragment)`
    pub fn resolve(&self, compact: &str) -> TpfResult<(String, String)> {
        let (prefix, local) = compact
            .split_once(':')
            .ok_or_else(|| TpfError::Prefix(compact.to_string()))?;
        let namespace = self.get_iri(prefix)?;
        Ok((namespace.to_string(), local.to_string()))
    }

    /// Expand a compact name into a bracketed IRI reference.
    ///
    /// Input that is already bracketed is returned as is.
    pub fn reference(&self, name: &str) -> TpfResult<String> {
        if name.starts_with('<') && name.ends_with('>') {
            return Ok(name.to_string());
        }
        let (namespace, fragment) = self.resolve(name)?;
        Ok(iri_reference(&namespace, &fragment))
    }

    /// Compact a bracketed or bare IRI using the longest matching namespace
    pub fn compact(&self, iri: &str) -> Option<String> {
        let bare = iri
            .strip_prefix('<')
            .and_then(|s| s.strip_suffix('>'))
            .unwrap_or(iri);

        self.prefixes
            .iter()
            .filter(|(_, ns)| bare.starts_with(ns.as_str()))
            .max_by_key(|(_, ns)| ns.len())
            .map(|(prefix, ns)| format!("{}:{}", prefix, &bare[ns.len()..]))
    }
}

impl Default for NamespaceManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_prefixes() {
        let mgr = NamespaceManager::new();
        assert_eq!(mgr.get_iri("rdf").unwrap(), RDF);
        assert_eq!(mgr.get_iri("vcard").unwrap(), VCARD);
        assert!(matches!(mgr.get_iri("nope"), Err(TpfError::Prefix(_))));
    }

    #[test]
    fn test_resolve() {
        let mgr = NamespaceManager::new();
        let (ns, frag) = mgr.resolve("obo:ARG_2000028").unwrap();
        assert_eq!(ns, OBO);
        assert_eq!(frag, "ARG_2000028");
        assert!(mgr.resolve("label").is_err());
    }

    #[test]
    fn test_reference() {
        let mgr = NamespaceManager::new();
        assert_eq!(mgr.reference("rdf:type").unwrap(), RDF_TYPE);
        assert_eq!(mgr.reference("<http://x/y>").unwrap(), "<http://x/y>");
    }

    #[test]
    fn test_compact() {
        let mut mgr = NamespaceManager::new();
        assert_eq!(mgr.compact("<http://xmlns.com/foaf/0.1/Person>"), Some("foaf:Person".to_string()));

        mgr.add_prefix("ex", "http://example.org/");
        mgr.add_prefix("exp", "http://example.org/people/");
        assert_eq!(mgr.compact("http://example.org/people/bob"), Some("exp:bob".to_string()));
        assert_eq!(mgr.compact("urn:isbn:123"), None);
    }
}
