//! Mergington - extracurricular activity registry
//!
//! Main entry point for the Mergington CLI and server.

mod cli;
mod logging;

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};

use mergington_api::{ApiServer, AppState};
use mergington_config::{Config, ConfigLoader, ConfigValidator};

use crate::cli::{Cli, Commands};
use crate::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (mut config, found) = ConfigLoader::load_or_default(&cli.config)?;
    init_tracing(&config.logging)?;

    if !found {
        warn!(
            "Config file {} not found, using built-in defaults",
            cli.config.display()
        );
    }

    match cli.command {
        None => run_server(config).await,
        Some(Commands::Run {
            host,
            port,
            static_dir,
        }) => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dir) = static_dir {
                config.static_files.dir = dir;
            }
            run_server(config).await
        }
        Some(Commands::Check) => check_config(&cli.config, &config),
    }
}

/// Validate, log any warnings, and fail on the first error.
fn validate(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let warnings = ConfigValidator::validate(config).into_result()?;
    for warning in warnings {
        warn!("{}: {}", warning.path, warning.message);
    }
    Ok(())
}

/// Run the server in foreground.
async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    validate(&config)?;

    info!("Starting Mergington activities v{}", env!("CARGO_PKG_VERSION"));

    let state = Arc::new(AppState::from_seeds(config.activities, &config.static_files));
    info!("Registry seeded with {} activities", state.registry.len());

    let server = ApiServer::new(config.server, state.clone());

    info!("Mergington ready:");
    info!("  Landing page:  http://{}{}", server.addr(), state.index_url);
    info!("  Static files:  {} -> {}", state.static_mount, state.static_dir.display());
    info!("");
    info!("API Endpoints:");
    info!("  GET  /activities                           - List activities");
    info!("  POST /activities/{{name}}/signup?email=      - Sign up");
    info!("  POST /activities/{{name}}/unregister?email=  - Unregister");

    server.run().await?;

    info!("Shutting down...");
    Ok(())
}

/// Validate the configuration and print a summary of the seed data.
fn check_config(path: &Path, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let result = ConfigValidator::validate(config);

    println!("Config: {}", path.display());
    println!("Server: {}:{}", config.server.host, config.server.port);
    println!(
        "Static: {} -> {}",
        config.static_files.mount,
        config.static_files.dir.display()
    );
    println!();
    println!("{:<24} {:>5} {:>9}", "ACTIVITY", "SPOTS", "ENROLLED");
    for activity in &config.activities {
        println!(
            "{:<24} {:>5} {:>9}",
            activity.name,
            activity.max_participants,
            activity.participants.len()
        );
    }
    println!();

    for warning in &result.warnings {
        println!("warning: {}: {}", warning.path, warning.message);
    }
    for error in &result.errors {
        println!("error: {}: {}", error.path, error.message);
    }

    result.into_result()?;
    println!("Configuration OK");
    Ok(())
}
