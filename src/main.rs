use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use doc_store::tracing::setup_tracing;
use eshop::config::{AppConfig, Overrides};
use eshop::console::Console;
use eshop::lifecycle::EshopSystem;
use tracing::info;

/// E-Shop order management console
#[derive(Parser)]
#[command(name = "eshop")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file path (default: ./eshop.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding products.json and orders.json
    #[arg(long, conflicts_with = "in_memory")]
    data_dir: Option<PathBuf>,

    /// Keep all data in memory; nothing is written to disk
    #[arg(long)]
    in_memory: bool,

    /// Log filter, e.g. "info" or "doc_store=debug" (RUST_LOG wins)
    #[arg(long)]
    log: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::discover(cli.config.as_deref())?.with_overrides(Overrides {
        data_dir: cli.data_dir,
        in_memory: cli.in_memory,
        log: cli.log,
    });

    // Setup tracing once for the entire application
    setup_tracing(&config.log.filter);
    info!(?config, "Starting eshop");

    let system = EshopSystem::open(&config.store).context("Failed to open the store")?;

    let console = Console::new(
        tokio::io::BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
        system.product_client.clone(),
        system.order_client.clone(),
    );
    let session = console.run().await;

    system.shutdown().await.map_err(anyhow::Error::msg)?;
    session.context("Console session failed")?;

    info!("Application completed successfully");
    Ok(())
}
