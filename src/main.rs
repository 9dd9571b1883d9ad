mod domain;
mod error;
mod config;
mod store;
mod messages;
mod clients;
mod actors;
mod console;

mod app_system;

#[cfg(test)]
mod mock_framework;

use clap::Parser;
use tokio::io::BufReader;
use tracing::{error, info};

use crate::app_system::{setup_tracing, InventorySystem};
use crate::config::{AppConfig, CliArgs};
use crate::console::Console;
use crate::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = AppConfig::from_args(CliArgs::parse())?;

    // Setup tracing once for the entire application
    setup_tracing(&config.log_filter);

    info!(?config, "Starting inventory tracker");

    let system = InventorySystem::new(&config);

    let mut console = Console::new(
        system.inventory_client.clone(),
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        config.currency.clone(),
    );
    let session = console.run().await;
    drop(console);

    if let Err(e) = &session {
        error!(error = %e, "Console session aborted");
    }

    // Shutdown system gracefully
    system.shutdown().await?;
    session?;

    info!("Inventory tracker exited");
    Ok(())
}
