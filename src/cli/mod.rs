//! Command Line Interface Module
//!
//! Subcommand surface of the tool and the builders that turn a parsed
//! catalog into navigable prompt graphs.
//!
//! ## Module Structure
//!
//! - `list` - category and flat browsing sessions
//! - `search` - incremental search session
//! - `install` - the cargo install action attached to leaf options

pub mod install;
pub mod list;
pub mod search;

use clap::{Parser, Subcommand};

use crate::store::{Category, Entry};

/// Browse and install crates from the awesome-rust catalog.
#[derive(Debug, Parser)]
#[command(name = "crate-scout", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Display the catalog as a navigable list
    List {
        /// Group entries by category
        #[arg(short, long)]
        categories: bool,
    },
    /// Search the catalog by package name, filtering as you type
    Search,
    /// Re-download the catalog and rewrite the local cache
    Refresh,
}

/// Payload carried by options in the catalog prompt graphs.
#[derive(Debug, Clone)]
pub enum CatalogItem {
    Category(Category),
    Entry(Entry),
}

// Re-export main types for convenience
pub use install::InstallAction;
