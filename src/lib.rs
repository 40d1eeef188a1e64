//! crate-scout - terminal browser for the awesome-rust catalog
//!
//! This library provides an interactive, keyboard-driven navigation engine
//! over a catalog of packages parsed from the awesome-rust README, with an
//! incremental prefix-search mode and a cargo install action on leaf
//! entries.
//!
//! # Features
//!
//! - **Prompt Graph**: arena of menu screens with fixed-capacity pagination
//! - **Plain Navigation**: arrow/key-driven browsing of the category tree
//! - **Incremental Search**: live prefix filtering backed by a trie index
//! - **Catalog Store**: HTTP fetch, markdown parse and JSON cache
//! - **Install Action**: shells out to cargo for a selected entry
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use crate_scout::cli::list::build_category_graph;
//! use crate_scout::interaction::Navigator;
//! use crate_scout::store::Catalog;
//!
//! # fn open(catalog: &Catalog) -> std::io::Result<()> {
//! let (mut graph, root) = build_category_graph(catalog);
//! if let Some(option) = Navigator::new(&mut graph, root).open()? {
//!     println!("selected {}", graph.option(option).title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod interaction;
pub mod store;

// Re-export commonly used types for convenience
pub use interaction::{Interaction, Navigator, PrefixIndex, SearchSession};
pub use store::{Catalog, Category, Entry};
