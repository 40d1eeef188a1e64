//! List Command Module
//!
//! Builds the browsing prompt graphs from a parsed catalog and opens the
//! plain navigation controller over them. With `--categories` the graph is
//! three levels deep (categories, their entries, a detail screen per
//! entry); without it, every entry sits on one flat paginated root.

use std::io;

use log::debug;

use super::{CatalogItem, InstallAction};
use crate::interaction::{Interaction, Navigator, PromptId};
use crate::store::{Catalog, Entry};

const BROWSE_HELP: &str = "[n] Next | [b] Last | [esc] Exit | [enter] Select | [u] Up";

/// Open the browsing session for the catalog.
pub fn run(catalog: &Catalog, categories: bool) -> io::Result<()> {
    let (mut graph, root) = if categories {
        build_category_graph(catalog)
    } else {
        build_flat_graph(catalog)
    };

    let selected = Navigator::new(&mut graph, root).open()?;
    if let Some(option) = selected {
        debug!("session ended on option {:?}", graph.option(option).title);
    }
    Ok(())
}

/// Root -> category -> entry -> detail graph, categories sorted by name.
pub fn build_category_graph(catalog: &Catalog) -> (Interaction<CatalogItem>, PromptId) {
    let mut graph: Interaction<CatalogItem> = Interaction::new();
    let root = graph.create_prompt("Available packages by category:", BROWSE_HELP, true);

    let mut categories = catalog.categories.clone();
    categories.sort_by(|a, b| a.name.cmp(&b.name));

    for category in &categories {
        // The parse leaves behind header sections with no packages.
        if category.name.is_empty() || category.entries.is_empty() {
            continue;
        }

        let option = graph.add_option(
            root,
            &category.name,
            &category.description,
            CatalogItem::Category(category.clone()),
        );

        let title = format!("{} - Packages ({})", category.name, category.description);
        let category_prompt = graph.create_prompt(&title, BROWSE_HELP, true);
        graph.attach_parent(category_prompt, root);
        graph.attach_child_prompt(option, category_prompt);

        for entry in &category.entries {
            add_entry_screens(&mut graph, category_prompt, entry);
        }
    }

    (graph, root)
}

/// A single paginated root holding every catalog entry.
pub fn build_flat_graph(catalog: &Catalog) -> (Interaction<CatalogItem>, PromptId) {
    let mut graph: Interaction<CatalogItem> = Interaction::new();
    let root = graph.create_prompt("Available packages:", BROWSE_HELP, true);

    for entry in &catalog.entries {
        add_entry_screens(&mut graph, root, entry);
    }

    (graph, root)
}

/// Wire one entry into `parent`: an option linking to a detail prompt that
/// carries the install option.
fn add_entry_screens(graph: &mut Interaction<CatalogItem>, parent: PromptId, entry: &Entry) {
    if entry.name.len() < 2 {
        return;
    }

    let option = graph.add_option(
        parent,
        &entry.name,
        &entry.description,
        CatalogItem::Entry(entry.clone()),
    );

    let detail = graph.create_prompt(&entry.name, &entry.description, false);
    graph.attach_parent(detail, parent);
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
