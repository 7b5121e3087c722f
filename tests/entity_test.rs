use std::sync::Arc;
use tpf_client::entity::{self, Person, Project};
use tpf_client::{ClientConfig, FragmentPattern, MemoryTransport, TpfClient};

const ENDPOINT: &str = "http://vivo.example.org/tpf/core";
const M3C: &str = "http://www.metabolomics.info/ontologies/2019/metabolomics-consortium#";
const RDF_TYPE: &str = "<http://www.w3.org/1999/02/22-rdf-syntax-ns#type>";

fn fixture() -> (Arc<MemoryTransport>, TpfClient) {
    let transport = Arc::new(MemoryTransport::new(ENDPOINT));

    transport.insert_subject(
        "<http://x/n007>",
        format!(
            "<http://x/n007> <http://www.w3.org/2000/01/rdf-schema#label> \"Bond, James\"@en-UK .\n\
             <http://x/n007> <http://purl.obolibrary.org/obo/ARG_2000028> <http://x/vcard> .\n\
             <http://x/n007> <{m}associatedWith> <http://x/mi6> .\n\
             <http://x/n007> <{m}isPIFor> <http://x/project1> .\n\
             <http://x/n007> <{m}runnerOf> <http://x/study1> .\n",
            m = M3C
        ),
    );
    transport.insert_subject(
        "<http://x/vcard>",
        "<http://x/vcard> <http://www.w3.org/2006/vcard/ns#hasEmail> <http://x/email> .\n",
    );
    transport.insert_subject(
        "<http://x/email>",
        "<http://x/email> <http://www.w3.org/2006/vcard/ns#email> \"007@mi6.gov.uk\" .\n",
    );
    transport.insert_subject(
        "<http://x/mi6>",
        "<http://x/mi6> <http://www.w3.org/2000/01/rdf-schema#label> \"MI6\" .\n",
    );
    transport.insert_subject(
        "<http://x/project1>",
        format!(
            "<http://x/project1> <http://www.w3.org/2000/01/rdf-schema#label> \"Skyfall\" .\n\
             <http://x/project1> <{m}projectId> \"PR000007\" .\n\
             <http://x/project1> <{m}summary> \"Metabolite profiling of agents in the field\"@en .\n\
             <http://x/project1> <{m}hasPI> <http://x/n007> .\n\
             <http://x/project1> <{m}hasPI> <http://x/m> .\n\
             <http://x/project1> <{m}collectionFor> <http://x/study2> .\n\
             <http://x/project1> <{m}produced> <http://x/paper1> .\n",
            m = M3C
        ),
    );
    transport.insert_subject(
        "<http://x/study2>",
        format!(
            "<http://x/study2> <{m}runBy> <http://x/q> .\n\
             <http://x/study2> <{m}developedFrom> <http://x/dataset2> .\n",
            m = M3C
        ),
    );
    transport.insert_subject(
        "<http://x/study1>",
        format!(
            "<http://x/study1> <{m}collectedBy> <http://x/project2> .\n\
             <http://x/study1> <{m}developedFrom> <http://x/dataset1> .\n",
            m = M3C
        ),
    );
    transport.insert_subject(
        "<http://x/project2>",
        format!("<http://x/project2> <{}hasPI> <http://x/m> .\n", M3C),
    );

    let client = TpfClient::builder(ClientConfig::new(ENDPOINT))
        .transport(transport.clone())
        .build()
        .unwrap();
    (transport, client)
}

#[tokio::test]
async fn test_person_fields() {
    let (_transport, client) = fixture();
    let person = Person::new(&client, "http://x/n007");

    assert_eq!(person.name().await.unwrap(), "Bond, James");
    assert_eq!(person.emails().await.unwrap(), vec!["007@mi6.gov.uk"]);
    assert!(person.phones().await.unwrap().is_empty());
    assert_eq!(person.photo().await.unwrap(), "");
    assert_eq!(person.organization().await.unwrap(), "<http://x/mi6>");
    assert_eq!(person.organization_name().await.unwrap(), "MI6");
    assert_eq!(person.projects().await.unwrap(), vec!["<http://x/project1>"]);
    assert_eq!(person.studies().await.unwrap(), vec!["<http://x/study1>"]);
    assert_eq!(person.datasets().await.unwrap(), vec!["<http://x/dataset1>"]);
    assert!(person.tools().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_collaborators_lists_runners_then_investigators() {
    let (_transport, client) = fixture();
    let person = Person::new(&client, "http://x/n007");

    assert_eq!(
        person.collaborators().await.unwrap(),
        vec!["<http://x/q>", "<http://x/m>"]
    );
}

#[tokio::test]
async fn test_fields_share_the_cache() {
    let (transport, client) = fixture();
    let person = Person::new(&client, "http://x/n007");

    person.name().await.unwrap();
    person.organization().await.unwrap();
    person.projects().await.unwrap();
    assert_eq!(transport.request_count(), 1);

    assert_eq!(entity::name(&client, "http://x/mi6").await.unwrap(), "MI6");
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test]
async fn test_project_fields() {
    let (_transport, client) = fixture();
    let project = Project::new(&client, "http://x/project1");

    assert_eq!(project.name().await.unwrap(), "Skyfall");
    assert_eq!(project.project_id().await.unwrap(), "PR000007");
    assert_eq!(
        project.summary().await.unwrap(),
        "Metabolite profiling of agents in the field"
    );
    assert_eq!(
        project.investigators().await.unwrap(),
        vec!["<http://x/n007>", "<http://x/m>"]
    );
    assert_eq!(project.studies().await.unwrap(), vec!["<http://x/study2>"]);
    assert_eq!(project.datasets().await.unwrap(), vec!["<http://x/dataset2>"]);
    assert_eq!(project.publications().await.unwrap(), vec!["<http://x/paper1>"]);
}

#[tokio::test]
async fn test_unknown_project_is_empty() {
    let (_transport, client) = fixture();
    let project = Project::new(&client, "http://x/nothing");

    assert_eq!(project.name().await.unwrap(), "");
    assert_eq!(project.project_id().await.unwrap(), "");
    assert!(project.investigators().await.unwrap().is_empty());
    assert!(project.datasets().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_listing_people_and_projects() {
    let (transport, client) = fixture();
    let people = FragmentPattern::predicate_object(RDF_TYPE, "<http://xmlns.com/foaf/0.1/Person>");
    transport.insert_page(
        &people,
        1,
        format!(
            "<http://x/n007> {t} <http://xmlns.com/foaf/0.1/Person> .\n\
             <http://x/q> {t} <http://xmlns.com/foaf/0.1/Person> .\n",
            t = RDF_TYPE
        ),
    );
    let projects = FragmentPattern::predicate_object(RDF_TYPE, &format!("<{}Project>", M3C));
    transport.insert_page(
        &projects,
        1,
        format!("<http://x/project1> {} <{}Project> .\n", RDF_TYPE, M3C),
    );

    assert_eq!(
        entity::people(&client).await.unwrap(),
        vec!["<http://x/n007>", "<http://x/q>"]
    );
    assert_eq!(
        entity::projects(&client).await.unwrap(),
        vec!["<http://x/project1>"]
    );
    assert!(transport.requests().contains(&people.url(ENDPOINT, 1)));
    assert!(transport.requests().contains(&projects.url(ENDPOINT, 1)));
}
