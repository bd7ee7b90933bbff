//! Discovery Client CLI
//!
//! Command-line interface for inspecting Google Discovery Documents.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use discovery_client::{DiscoveryClient, Lookup, Resource};
use discovery_client_common::DiscoveryError;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "discovery-client")]
#[command(version, about = "Inspect Google Discovery Documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the resource and method tree of a discovery document
    #[command(after_help = "EXAMPLES:\n  \
        # List the Cloud Storage API tree\n  \
        discovery-client list --spec storage-v1.json\n\n  \
        # List with up-front document validation\n  \
        discovery-client list --spec storage-v1.json --validate")]
    List {
        /// Path to the discovery document
        #[arg(short, long)]
        spec: PathBuf,

        /// Validate the document before listing
        #[arg(long)]
        validate: bool,
    },

    /// Describe one method or resource addressed by dotted path
    #[command(after_help = "EXAMPLES:\n  \
        # Describe a method\n  \
        discovery-client describe --spec storage-v1.json buckets.get\n\n  \
        # Describe a nested resource\n  \
        discovery-client describe --spec drive-v3.json files.permissions")]
    Describe {
        /// Path to the discovery document
        #[arg(short, long)]
        spec: PathBuf,

        /// Dotted path through the resource tree (e.g., "buckets.get")
        path: String,

        /// Validate the document before resolving
        #[arg(long)]
        validate: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { spec, validate } => {
            let client = load_client(&spec, validate)?;
            cmd_list(&client, cli.verbose)
        }
        Commands::Describe {
            spec,
            path,
            validate,
        } => {
            let client = load_client(&spec, validate)?;
            cmd_describe(&client, &path)
        }
    }
}

fn load_client(spec: &PathBuf, validate: bool) -> Result<DiscoveryClient> {
    DiscoveryClient::from_file(spec, validate).map_err(|err| {
        let what = describe_load_failure(&err);
        anyhow::Error::new(err)
            .context(format!("Discovery document {} {}", spec.display(), what))
    })
}

/// Short phrase for the error summary line, by failure kind
fn describe_load_failure(err: &DiscoveryError) -> &'static str {
    match err {
        DiscoveryError::Validation(_) => "failed validation",
        DiscoveryError::Parse(_) | DiscoveryError::Json(_) => "could not be parsed",
        _ => "could not be loaded",
    }
}

fn cmd_list(client: &DiscoveryClient, verbose: bool) -> Result<()> {
    let title = match (client.name(), client.version()) {
        (Some(name), Some(version)) => format!("{} {}", name, version),
        (Some(name), None) => name.to_string(),
        _ => "unnamed API".to_string(),
    };
    println!("{} ({})", title.bold(), client.base_url());

    let mut names = client.methods();
    names.sort_unstable();
    for name in names {
        print_method_line(name, 1);
    }

    let resources = client.resources();
    let mut resource_names = resources.names();
    resource_names.sort_unstable();
    for name in resource_names {
        let resource = resources
            .get(name)
            .with_context(|| format!("Failed to open resource {}", name))?;
        print_resource(&resource, 1, verbose)?;
    }
    Ok(())
}

fn print_resource(resource: &Resource, depth: usize, verbose: bool) -> Result<()> {
    let indent = "  ".repeat(depth);
    println!("{}{}", indent, resource.name().blue().bold());

    let mut method_names = resource.methods();
    method_names.sort_unstable();
    for name in method_names {
        if verbose {
            let method = resource.method(name)?;
            println!(
                "{}  {} {} {}",
                indent,
                name.green(),
                method.http_method().yellow(),
                method.full_path()
            );
        } else {
            print_method_line(name, depth + 1);
        }
    }

    let mut nested_names = resource.resources();
    nested_names.sort_unstable();
    for name in nested_names {
        let nested = resource.resource(name)?;
        print_resource(&nested, depth + 1, verbose)?;
    }
    Ok(())
}

fn print_method_line(name: &str, depth: usize) {
    println!("{}{}", "  ".repeat(depth), name.green());
}

fn cmd_describe(client: &DiscoveryClient, path: &str) -> Result<()> {
    let lookup = client
        .resolve_path(path)
        .with_context(|| format!("Failed to resolve `{}`", path))?;

    match lookup {
        Lookup::Resource(resource) => {
            println!("{}", resource.to_string().bold());
            let mut nested = resource.resources();
            nested.sort_unstable();
            println!("  {} {}", "resources:".blue(), nested.join(", "));
            let mut methods = resource.methods();
            methods.sort_unstable();
            println!("  {} {}", "methods:".green(), methods.join(", "));
        }
        Lookup::Method(method) => {
            println!("{}", method.id().bold());
            if let Some(description) = method.description() {
                println!("  {}", description);
            }
            println!(
                "  {} {}",
                method.http_method().yellow(),
                method.full_path()
            );
            let required = method.required_parameters();
            if !required.is_empty() {
                println!("  {} {}", "required:".red(), required.join(", "));
            }
            let path_params = method.path_parameters();
            if !path_params.is_empty() {
                println!("  {} {}", "path params:".blue(), path_params.join(", "));
            }
            let query_params = method.query_parameters();
            if !query_params.is_empty() {
                println!("  {} {}", "query params:".blue(), query_params.join(", "));
            }
            if !method.scopes().is_empty() {
                println!("  {} {}", "scopes:".cyan(), method.scopes().join(", "));
            }
            if let Some(schema) = method.request_schema() {
                println!(
                    "  {} {}",
                    "request:".magenta(),
                    schema.id.as_deref().unwrap_or("(inline)")
                );
            }
            if let Some(schema) = method.response_schema() {
                println!(
                    "  {} {}",
                    "response:".magenta(),
                    schema.id.as_deref().unwrap_or("(inline)")
                );
            }
        }
    }
    Ok(())
}
