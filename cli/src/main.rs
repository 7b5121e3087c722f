//! TPF CLI — command-line interface for Triple Pattern Fragments servers
//!
//! Uses the tpf-client path query engine against a live endpoint.

use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use std::str::FromStr;
use tpf_client::entity::{Person, Project};
use tpf_client::rdf::NamespaceManager;
use tpf_client::{ClientConfig, FragmentPattern, PathQuery, TpfClient, Triple};

#[derive(Parser)]
#[command(name = "tpf", version, about = "Triple Pattern Fragments path query CLI")]
struct Cli {
    /// TPF endpoint URL
    #[arg(long, global = true, env = "TPF_ENDPOINT")]
    endpoint: Option<String>,

    /// Server base URL; the endpoint becomes <host>/tpf/core
    #[arg(long, global = true)]
    host: Option<String>,

    /// YAML config file
    #[arg(long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Plain,
}

#[derive(Subcommand)]
enum Commands {
    /// Follow a path from one resource
    Path {
        /// Starting resource IRI
        iri: String,

        /// Step to apply, in order: link=prefix:name or type=prefix:name
        #[arg(long = "step")]
        steps: Vec<StepArg>,

        /// Print only the first result
        #[arg(long)]
        single: bool,
    },
    /// Follow a path from every resource of a type
    List {
        /// Type IRI or compact name (foaf:Person)
        type_name: String,

        /// Step to apply, in order: link=prefix:name or type=prefix:name
        #[arg(long = "step")]
        steps: Vec<StepArg>,
    },
    /// Fetch raw triples matching a pattern
    Query {
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        predicate: Option<String>,
        #[arg(long)]
        object: Option<String>,
        /// Single page to fetch; all pages when omitted
        #[arg(long)]
        page: Option<usize>,
    },
    /// Show a person profile
    Person {
        /// Person IRI
        iri: String,
    },
    /// Show a project profile
    Project {
        /// Project IRI
        iri: String,
    },
    /// Start an interactive REPL
    Shell,
}

#[derive(Clone, Debug)]
enum StepArg {
    Link(String),
    Type(String),
}

impl FromStr for StepArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some(("link", name)) => Ok(StepArg::Link(name.to_string())),
            Some(("type", name)) => Ok(StepArg::Type(name.to_string())),
            _ => Err(format!("expected link=prefix:name or type=prefix:name, got '{}'", s)),
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let client = match build_client(&cli) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Path { iri, steps, single } => {
            run_path(client.entity(&iri), &steps, single, &cli.format).await
        }
        Commands::List { type_name, steps } => {
            match client.namespaces().reference(&type_name) {
                Ok(type_iri) => run_path(client.list(&type_iri), &steps, false, &cli.format).await,
                Err(e) => Err(e.into()),
            }
        }
        Commands::Query { subject, predicate, object, page } => {
            let pattern = FragmentPattern::new(subject.as_deref(), predicate.as_deref(), object.as_deref());
            run_query(&client, &pattern, page, &cli.format).await
        }
        Commands::Person { iri } => run_person(&client, &iri, &cli.format).await,
        Commands::Project { iri } => run_project(&client, &iri, &cli.format).await,
        Commands::Shell => run_shell(&client, &cli.format).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn build_client(cli: &Cli) -> Result<TpfClient, Box<dyn std::error::Error>> {
    let mut config = match (&cli.config, &cli.endpoint, &cli.host) {
        (Some(path), _, _) => ClientConfig::from_yaml_file(path)?.with_env_overrides()?,
        (None, Some(endpoint), _) => ClientConfig::new(endpoint.as_str()),
        (None, None, Some(host)) => ClientConfig::for_host(host),
        (None, None, None) => {
            return Err("no endpoint given (use --endpoint, --host, --config or TPF_ENDPOINT)".into())
        }
    };
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    } else if let Some(host) = &cli.host {
        config.endpoint = ClientConfig::for_host(host).endpoint;
    }

    Ok(TpfClient::from_config(config)?)
}

fn apply_steps(mut query: PathQuery, steps: &[StepArg]) -> Result<PathQuery, Box<dyn std::error::Error>> {
    for step in steps {
        query = match step {
            StepArg::Link(name) => query.link_compact(name)?,
            StepArg::Type(name) => query.type_compact(name)?,
        };
    }
    Ok(query)
}

async fn run_path(
    query: PathQuery,
    steps: &[StepArg],
    single: bool,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut query = apply_steps(query, steps)?;

    let values = if single {
        vec![query.single().await?]
    } else {
        query.results().await?
    };

    print_values(&values, format)
}

fn print_values(values: &[String], format: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(values)?);
        }
        OutputFormat::Plain => {
            for value in values {
                println!("{}", value);
            }
        }
        OutputFormat::Table => {
            if values.is_empty() {
                println!("(no results)");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["#", "value"]);
            for (i, value) in values.iter().enumerate() {
                table.add_row(vec![(i + 1).to_string(), value.clone()]);
            }

            println!("{}", table);
            println!("{} result(s)", values.len());
        }
    }

    Ok(())
}

async fn run_query(
    client: &TpfClient,
    pattern: &FragmentPattern,
    page: Option<usize>,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let triples = match page {
        Some(page) => client.query_page(pattern, page).await?,
        None => client.query(pattern).await?,
    };

    print_triples(&triples, client.namespaces(), format)
}

fn print_triples(
    triples: &[Triple],
    namespaces: &NamespaceManager,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(triples)?);
        }
        OutputFormat::Plain => {
            for triple in triples {
                println!("{}", triple);
            }
        }
        OutputFormat::Table => {
            if triples.is_empty() {
                println!("(no triples)");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["subject", "predicate", "object"]);
            for t in triples {
                let predicate = namespaces.compact(&t.predicate).unwrap_or_else(|| t.predicate.clone());
                table.add_row(vec![t.subject.clone(), predicate, t.object.clone()]);
            }

            println!("{}", table);
            println!("{} triple(s)", triples.len());
        }
    }

    Ok(())
}

async fn run_person(
    client: &TpfClient,
    iri: &str,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let person = Person::new(client, iri);

    let fields: Vec<(&str, Vec<String>)> = vec![
        ("name", vec![person.name().await?]),
        ("organization", vec![person.organization_name().await?]),
        ("photo", vec![person.photo().await?]),
        ("emails", person.emails().await?),
        ("phones", person.phones().await?),
        ("projects", person.projects().await?),
        ("studies", person.studies().await?),
        ("publications", person.publications().await?),
    ];

    print_fields(fields, format)
}

async fn run_project(
    client: &TpfClient,
    iri: &str,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let project = Project::new(client, iri);

    let fields: Vec<(&str, Vec<String>)> = vec![
        ("name", vec![project.name().await?]),
        ("id", vec![project.project_id().await?]),
        ("summary", vec![project.summary().await?]),
        ("investigators", project.investigators().await?),
        ("studies", project.studies().await?),
        ("datasets", project.datasets().await?),
        ("publications", project.publications().await?),
    ];

    print_fields(fields, format)
}

fn print_fields(
    fields: Vec<(&str, Vec<String>)>,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), serde_json::json!(v)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&map)?);
        }
        OutputFormat::Plain => {
            for (field, values) in fields {
                println!("{}: {}", field, values.join(", "));
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["field", "value"]);
            for (field, values) in fields {
                table.add_row(vec![field.to_string(), values.join("\n")]);
            }
            println!("{}", table);
        }
    }

    Ok(())
}

/// Parse a shell line: `entity <iri> [link|type <name>]...` or
/// `list <type> [link|type <name>]...`
fn parse_expression(client: &TpfClient, line: &str) -> Result<PathQuery, Box<dyn std::error::Error>> {
    let mut tokens = line.split_whitespace();

    let query = match (tokens.next(), tokens.next()) {
        (Some("entity"), Some(iri)) => client.entity(iri),
        (Some("list"), Some(type_name)) => client.list(&client.namespaces().reference(type_name)?),
        _ => return Err("expected 'entity <iri>' or 'list <type>'".into()),
    };

    let mut steps = Vec::new();
    while let Some(kind) = tokens.next() {
        let name = tokens.next().ok_or_else(|| format!("missing name after '{}'", kind))?;
        steps.push(StepArg::from_str(&format!("{}={}", kind, name))?);
    }

    apply_steps(query, &steps)
}

fn shell_banner(client: &TpfClient) -> String {
    let config = client.config();
    format!(
        "{}, cache {}ms, up to {} pages per pattern",
        config.endpoint, config.cache_ttl_ms, config.max_pages
    )
}

async fn run_shell(client: &TpfClient, format: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    println!("TPF Interactive Shell ({})", shell_banner(client));
    println!("Type path expressions, or :help for commands. :quit to exit.\n");

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        eprint!("tpf> ");

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match trimmed {
            ":quit" | ":exit" | ":q" => break,
            ":help" | ":h" => {
                println!("Commands:");
                println!("  :clear                         — Drop cached resources");
                println!("  :quit                          — Exit shell");
                println!("  entity <iri> [link|type <name>]...");
                println!("  list <type> [link|type <name>]...");
                println!("Example: entity http://x.org/n007 link rdfs:label");
            }
            ":clear" => client.cache().clear().await,
            expression => {
                let outcome = match parse_expression(client, expression) {
                    Ok(mut query) => match query.results().await {
                        Ok(values) => print_values(&values, format),
                        Err(e) => Err(e.into()),
                    },
                    Err(e) => Err(e),
                };
                if let Err(e) = outcome {
                    eprintln!("Error: {}", e);
                }
            }
        }
    }

    println!("Bye!");
    Ok(())
}
