//! mcpx - MCP server configuration resolver
//!
//! Usage:
//!   mcpx                  # List resolved servers
//!   mcpx list --format json
//!   mcpx list --config ./custom-mcp.json

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mcpx_core::mcp::{CommandSpec, ServerDefinition, SourceKind};
use mcpx_core::prelude::{LoadOptions, load_server_definitions};

#[derive(Parser)]
#[command(name = "mcpx")]
#[command(about = "MCP server configuration resolver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve and list the configured MCP servers
    List {
        /// Explicit config file (a missing file here is an error)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Project root to search for mcp.json (defaults to the current directory)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mcpx=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List {
            config,
            root,
            format,
        }) => run_list(config, root, format),
        None => run_list(None, None, OutputFormat::Table),
    }
}

fn run_list(
    config: Option<PathBuf>,
    root: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let mut options = LoadOptions::new();
    if let Some(config) = config {
        options = options.with_config_path(config);
    }
    if let Some(root) = root {
        options = options.with_root_dir(root);
    }

    let servers = load_server_definitions(&options)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&servers)?);
        }
        OutputFormat::Table => print_table(&servers),
    }

    Ok(())
}

fn print_table(servers: &[ServerDefinition]) {
    if servers.is_empty() {
        println!("{}", style("No MCP servers configured.").dim());
        return;
    }

    for server in servers {
        let (transport, endpoint) = match &server.command {
            CommandSpec::Http { url, .. } => ("http", url.to_string()),
            CommandSpec::Stdio { command, args, .. } => {
                let mut line = command.clone();
                for arg in args {
                    line.push(' ');
                    line.push_str(arg);
                }
                ("stdio", line)
            }
        };
        let origin = match server.source.kind {
            SourceKind::Local => "local",
            SourceKind::Import => "import",
        };

        println!(
            "{}  {}  {}  {} {}",
            style(&server.name).bold(),
            style(transport).cyan(),
            endpoint,
            style(origin).dim(),
            style(server.source.path.display()).dim(),
        );
        if let Some(description) = &server.description {
            println!("    {}", style(description).dim());
        }
    }
}
