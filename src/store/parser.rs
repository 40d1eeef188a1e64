//! Catalog Parser Module
//!
//! Line-oriented scan of an "awesome list" README. Headings open
//! categories, an italicized line directly below a heading is its
//! description, and link bullets become entries. A heading whose first
//! following content is a deeper heading is a super-section and is skipped;
//! its subsections become the categories.

use std::sync::OnceLock;

use regex::Regex;

use super::{Category, Entry};

/// Matches `- [name](http…link)` with an optional ` - description` tail.
fn entry_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[-*]\s*\[([^\]]+)\]\((https?://[^)\s]+)\)(?:\s*[-—–:]\s*(.*))?").unwrap()
    })
}

/// Parse a README body into the category tree and the flat entry list.
pub fn parse_catalog(body: &str) -> (Vec<Category>, Vec<Entry>) {
    let lines: Vec<&str> = body.lines().collect();
    let mut categories = Vec::new();
    let mut all_entries = Vec::new();
    let mut current: Option<Category> = None;

    let mut idx = 0;
    while idx < lines.len() {
        let line = lines[idx].trim_end();

        if let Some(level) = heading_level(line) {
            // A heading followed by a deeper heading is a super-section;
            // only leaf headings become categories.
            if next_content(&lines, idx + 1)
                .and_then(|next| heading_level(next))
                .is_some_and(|next_level| next_level > level)
            {
                idx += 1;
                continue;
            }

            if let Some(done) = current.take() {
                categories.push(done);
            }

            let mut category = Category {
                name: heading_title(line),
                description: String::new(),
                entries: Vec::new(),
            };
            if let Some(next) = next_content(&lines, idx + 1) {
                if is_description(next) {
                    category.description = next.trim().to_string();
                }
            }
            current = Some(category);
            idx += 1;
            continue;
        }

        if let Some(entry) = parse_entry_line(line.trim_start(), &current) {
            all_entries.push(entry.clone());
            if let Some(category) = current.as_mut() {
                category.entries.push(entry);
            }
            idx += 1;
            continue;
        }

        idx += 1;
    }

    if let Some(done) = current.take() {
        categories.push(done);
    }

    (categories, all_entries)
}

fn parse_entry_line(line: &str, current: &Option<Category>) -> Option<Entry> {
    let caps = entry_pattern().captures(line)?;
    let category = current.as_ref().map(|c| c.name.clone()).unwrap_or_default();
    Some(Entry {
        category,
        name: caps[1].to_string(),
        link: caps[2].to_string(),
        description: caps
            .get(3)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
    })
}

/// Number of leading `#` characters, if the line is a heading.
fn heading_level(line: &str) -> Option<usize> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if hashes == 0 || !line[hashes..].starts_with(' ') {
        return None;
    }
    Some(hashes)
}

fn heading_title(line: &str) -> String {
    line.trim_start_matches('#').trim().to_string()
}

/// First non-empty line at or after `from`.
fn next_content<'a>(lines: &[&'a str], from: usize) -> Option<&'a str> {
    lines[from.min(lines.len())..]
        .iter()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
}

/// Category descriptions in the source document are italicized sentences,
/// e.g. `*Audio and music libraries.*`.
fn is_description(line: &str) -> bool {
    let line = line.trim();
    (line.starts_with('*') && line.ends_with('*') && !line.starts_with("* "))
        || (line.starts_with('_') && line.ends_with('_'))
}
