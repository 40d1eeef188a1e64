//! Search Command Module
//!
//! Builds the incremental-search session: one flat root prompt holding
//! every catalog entry, each entry indexed in the prefix index and linked
//! to a detail screen with the install option.

use std::io;

use super::{CatalogItem, InstallAction};
use crate::interaction::{Interaction, PrefixIndex, SearchSession};
use crate::store::Catalog;

const SEARCH_ROOT_TITLE: &str = "Search for a package!";

/// Open the search session for the catalog.
pub fn run(catalog: &Catalog) -> io::Result<()> {
    build_search_session(catalog).open()
}

/// Assemble the graph, index every entry title, and wrap both in a session.
pub fn build_search_session(catalog: &Catalog) -> SearchSession<CatalogItem> {
    let mut graph: Interaction<CatalogItem> = Interaction::new();
    let mut index = PrefixIndex::new();
    let root = graph.create_prompt(SEARCH_ROOT_TITLE, "", true);

    for entry in &catalog.entries {
        if entry.name.len() < 2 {
            continue;
        }

        let option = graph.add_option(
            root,
            &entry.name,
            &entry.description,
            CatalogItem::Entry(entry.clone()),
        );
        index.insert(option, &entry.name);

        let detail = graph.create_prompt(&entry.name, &entry.description, false);
        graph.attach_parent(detail, root);
        graph.attach_child_prompt(option, detail);

        let action = InstallAction::new(&entry.name, &entry.link);
        let install_option = graph.add_option(
            detail,
            "Install via cargo",
            &action.describe(),
            CatalogItem::Entry(entry.clone()),
        );
        graph.attach_action(install_option, Box::new(action));
    }

    SearchSession::new(graph, index, root)
}
