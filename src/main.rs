//! openapi-mcp-generator CLI entrypoint
//! Parses command-line arguments and runs one generation.
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use openapi_mcp_generator::application::generate_mcp_server;
use openapi_mcp_generator::core::{ApiSettings, AuthType, GeneratorConfig};

/// Generate an MCP server from an OpenAPI specification.
#[derive(Parser, Debug)]
#[command(name = "openapi-mcp-generator")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the OpenAPI YAML or JSON file
    openapi_file: PathBuf,
    /// Output directory for the generated project
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
    /// Base URL for the API; defaults to the first server in the document
    #[arg(long, default_value = "")]
    api_url: String,
    /// Authentication type
    #[arg(long, value_enum, default_value_t = AuthType::Bearer)]
    auth_type: AuthType,
    /// API token for authentication
    #[arg(long, default_value = "")]
    api_token: String,
    /// Username for basic authentication
    #[arg(long, default_value = "")]
    api_username: String,
    /// Password for basic authentication
    #[arg(long, default_value = "")]
    api_password: String,
    /// Custom template directory replacing the built-in templates
    #[arg(long)]
    template_dir: Option<PathBuf>,
}

impl From<Cli> for GeneratorConfig {
    fn from(cli: Cli) -> Self {
        GeneratorConfig {
            openapi_file: cli.openapi_file,
            output_dir: cli.output_dir,
            api: ApiSettings {
                api_url: cli.api_url,
                auth_type: cli.auth_type,
                api_token: cli.api_token,
                api_username: cli.api_username,
                api_password: cli.api_password,
            },
            template_dir: cli.template_dir,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let config = GeneratorConfig::from(Cli::parse());
    info!(
        openapi_file = %config.openapi_file.display(),
        output_dir = %config.output_dir.display(),
        auth_type = %config.api.auth_type,
        "Generating MCP server"
    );

    let project_dir = generate_mcp_server(&config)
        .await
        .context("Failed to generate MCP server")?;

    println!("MCP server generated successfully in: {}", project_dir.display());
    println!("To build and run the Docker container:");
    println!("  cd {}", project_dir.display());
    println!("  ./docker.sh build");
    println!("  ./docker.sh start --transport=sse");

    Ok(())
}
