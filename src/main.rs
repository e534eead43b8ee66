mod discovery;
mod launch;
mod ports;

use clap::{Parser, Subcommand};
use discovery::{DiscoveryConfig, ExecutableResolver, SearchResult};
use launch::{LaunchConfig, LaunchProfile, PortLauncher, TokioLauncher, ToolId};
use ports::{PortInfo, StaticPorts, port_menu};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{Level, error, info};
use tracing_subscriber::fmt;

/// Locate serial terminal tools and open them on a port
#[derive(Debug, Parser)]
#[command(name = "portpilot")]
#[command(about = "Open PuTTY or RealTerm on a serial port")]
struct Args {
    /// Config file (default: <config_dir>/portpilot/portpilot.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Locate an executable (putty, realterm, or any filename)
    Find {
        /// Tool id or exact filename
        target: String,

        /// Extra root searched before the catalog (repeatable)
        #[arg(long = "root")]
        roots: Vec<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the argument string a tool would receive
    Args { tool: ToolId, port: String },

    /// Launch a tool on a port
    Open { tool: ToolId, port: String },

    /// Show the port menu (PORT or PORT=DESCRIPTION)
    Ports { ports: Vec<String> },
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match LaunchConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    let resolver = ExecutableResolver::from_env(DiscoveryConfig::default());

    match args.command {
        Command::Find {
            target,
            roots,
            json,
        } => {
            let mut search_roots = roots;
            let name = match target.parse::<ToolId>() {
                Ok(tool) => {
                    let profile = LaunchProfile::for_tool(tool);
                    search_roots.extend(profile.install_roots());
                    profile.executable_name.to_string()
                }
                Err(_) => target,
            };

            let result = resolver.resolve(&name, &search_roots);
            if json {
                match serde_json::to_string(&result) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        error!(error = %e, "failed to encode result");
                        return ExitCode::FAILURE;
                    }
                }
            }
            match result {
                SearchResult::Found(path) => {
                    if !json {
                        println!("{}", path.display());
                    }
                    ExitCode::SUCCESS
                }
                SearchResult::NotFound => {
                    if !json {
                        println!("{}: not found", name);
                    }
                    ExitCode::FAILURE
                }
            }
        }

        Command::Args { tool, port } => {
            println!("{}", LaunchProfile::for_tool(tool).args(&port, config.baud_rate));
            ExitCode::SUCCESS
        }

        Command::Open { tool, port } => {
            let launcher = PortLauncher::new(&config, resolver, Arc::new(TokioLauncher));
            match launcher.launch(tool, &port).await {
                Ok(launched) => {
                    info!(tool = %launched.tool, pid = ?launched.pid, "terminal opened");
                    ExitCode::SUCCESS
                }
                Err(e) if e.is_discovery_miss() => {
                    error!(error = %e, "discovery miss");
                    ExitCode::from(2)
                }
                Err(e) => {
                    error!(error = %e, "launch failed");
                    ExitCode::FAILURE
                }
            }
        }

        Command::Ports { ports } => {
            let parsed = ports.iter().map(String::as_str).map(PortInfo::parse);
            let source = StaticPorts::new(parsed.collect());
            for port in port_menu(&source) {
                println!("{}", port.label());
            }
            ExitCode::SUCCESS
        }
    }
}
