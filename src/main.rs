//! crate-scout - Main Entry Point
//!
//! Parses the command line, loads (or fetches) the catalog cache, and
//! starts the requested navigation session.

use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate_scout::cli::{list, search, Cli, Commands};
use crate_scout::store;

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let cache = PathBuf::from(store::DEFAULT_CACHE_PATH);

    match cli.command {
        Commands::List { categories } => {
            let catalog = store::init(&cache).await?;
            list::run(&catalog, categories)?;
        }
        Commands::Search => {
            let catalog = store::init(&cache).await?;
            search::run(&catalog)?;
        }
        Commands::Refresh => {
            let catalog = store::refresh(&cache).await?;
            println!(
                "Catalog refreshed: {} packages across {} categories.",
                catalog.entries.len(),
                catalog.categories.len()
            );
        }
    }

    Ok(())
}
