//! Entity models over the M3C (Metabolomics Consortium) VIVO ontology
//!
//! `Person` and `Project` wrap an IRI; `people` and `projects` list them.
//! Each accessor is a short path query from the entity's IRI. Single-valued
//! fields return `""` when the dataset has nothing for them.

use crate::client::TpfClient;
use crate::error::TpfResult;
use crate::rdf::iri_reference;
use crate::rdf::namespace::{BIBO, FOAF, M3C, OBO, RDFS, VCARD, VITRO, VIVO};

/// Fetch the `rdfs:label` of any entity
pub async fn name(client: &TpfClient, iri: &str) -> TpfResult<String> {
    client.entity(iri).link(RDFS, "label").single().await
}

/// IRIs of every `foaf:Person`, in server order
pub async fn people(client: &TpfClient) -> TpfResult<Vec<String>> {
    client.list(&iri_reference(FOAF, "Person")).results().await
}

/// IRIs of every M3C project, in server order
pub async fn projects(client: &TpfClient) -> TpfResult<Vec<String>> {
    client.list(&iri_reference(M3C, "Project")).results().await
}

/// A person profile
#[derive(Debug, Clone)]
pub struct Person {
    client: TpfClient,
    iri: String,
}

impl Person {
    pub fn new(client: &TpfClient, iri: &str) -> Self {
        Self {
            client: client.clone(),
            iri: iri.to_string(),
        }
    }

    pub fn iri(&self) -> &str {
        &self.iri
    }

    pub async fn name(&self) -> TpfResult<String> {
        name(&self.client, &self.iri).await
    }

    pub async fn emails(&self) -> TpfResult<Vec<String>> {
        self.client
            .entity(&self.iri)
            .link(OBO, "ARG_2000028")
            .link(VCARD, "hasEmail")
            .link(VCARD, "email")
            .results()
            .await
    }

    pub async fn phones(&self) -> TpfResult<Vec<String>> {
        self.client
            .entity(&self.iri)
            .link(OBO, "ARG_2000028")
            .link(VCARD, "hasTelephone")
            .link(VCARD, "telephone")
            .results()
            .await
    }

    /// Download location of the main image
    pub async fn photo(&self) -> TpfResult<String> {
        self.client
            .entity(&self.iri)
            .link(VITRO, "mainImage")
            .link(VITRO, "downloadLocation")
            .single()
            .await
    }

    /// IRI of the associated organization
    pub async fn organization(&self) -> TpfResult<String> {
        self.client
            .entity(&self.iri)
            .link(M3C, "associatedWith")
            .single()
            .await
    }

    /// Label of the associated organization
    pub async fn organization_name(&self) -> TpfResult<String> {
        self.client
            .entity(&self.iri)
            .link(M3C, "associatedWith")
            .link(RDFS, "label")
            .single()
            .await
    }

    pub async fn projects(&self) -> TpfResult<Vec<String>> {
        self.linked(M3C, "isPIFor").await
    }

    pub async fn studies(&self) -> TpfResult<Vec<String>> {
        self.linked(M3C, "runnerOf").await
    }

    pub async fn tools(&self) -> TpfResult<Vec<String>> {
        self.linked(M3C, "developerOf").await
    }

    pub async fn datasets(&self) -> TpfResult<Vec<String>> {
        self.client
            .entity(&self.iri)
            .link(M3C, "runnerOf")
            .link(M3C, "developedFrom")
            .results()
            .await
    }

    /// People running studies of this person's projects, followed by PIs
    /// of projects whose studies this person runs.
    pub async fn collaborators(&self) -> TpfResult<Vec<String>> {
        let mut runners = self
            .client
            .entity(&self.iri)
            .link(M3C, "isPIFor")
            .link(M3C, "collectionFor")
            .link(M3C, "runBy");
        let mut investigators = self
            .client
            .entity(&self.iri)
            .link(M3C, "runnerOf")
            .link(M3C, "collectedBy")
            .link(M3C, "hasPI");

        let (mut runners, investigators) =
            futures::try_join!(runners.results(), investigators.results())?;
        runners.extend(investigators);
        Ok(runners)
    }

    /// Documents this person authored
    pub async fn publications(&self) -> TpfResult<Vec<String>> {
        self.client
            .entity(&self.iri)
            .link(VIVO, "relatedBy")
            .of_type(VIVO, "Authorship")
            .link(VIVO, "relates")
            .of_type(BIBO, "Document")
            .results()
            .await
    }

    async fn linked(&self, namespace: &str, fragment: &str) -> TpfResult<Vec<String>> {
        self.client
            .entity(&self.iri)
            .link(namespace, fragment)
            .results()
            .await
    }
}

/// A project profile
#[derive(Debug, Clone)]
pub struct Project {
    client: TpfClient,
    iri: String,
}

impl Project {
    pub fn new(client: &TpfClient, iri: &str) -> Self {
        Self {
            client: client.clone(),
            iri: iri.to_string(),
        }
    }

    pub fn iri(&self) -> &str {
        &self.iri
    }

    pub async fn name(&self) -> TpfResult<String> {
        name(&self.client, &self.iri).await
    }

    /// Consortium project identifier, e.g. `PR000001`
    pub async fn project_id(&self) -> TpfResult<String> {
        self.client
            .entity(&self.iri)
            .link(M3C, "projectId")
            .single()
            .await
    }

    pub async fn summary(&self) -> TpfResult<String> {
        self.client
            .entity(&self.iri)
            .link(M3C, "summary")
            .single()
            .await
    }

    /// Principal investigators
    pub async fn investigators(&self) -> TpfResult<Vec<String>> {
        self.linked(M3C, "hasPI").await
    }

    pub async fn studies(&self) -> TpfResult<Vec<String>> {
        self.linked(M3C, "collectionFor").await
    }

    /// Datasets developed from the project's studies
    pub async fn datasets(&self) -> TpfResult<Vec<String>> {
        self.client
            .entity(&self.iri)
            .link(M3C, "collectionFor")
            .link(M3C, "developedFrom")
            .results()
            .await
    }

    pub async fn publications(&self) -> TpfResult<Vec<String>> {
        self.linked(M3C, "produced").await
    }

    async fn linked(&self, namespace: &str, fragment: &str) -> TpfResult<Vec<String>> {
        self.client
            .entity(&self.iri)
            .link(namespace, fragment)
            .results()
            .await
    }
}
