//! Search Navigation Controller
//!
//! The incremental-search variant of the navigator. The same screen accepts
//! both free-text query characters and single-key navigation commands; a
//! focus flag decides which alphabet is active. Every query mutation swaps
//! the root prompt's pages for the prefix index entry bound to the exact
//! query string, so filtering is a lookup, not a scan.

use std::io;

use super::graph::{Interaction, OptionId, PromptId};
use super::input::{self, Key};
use super::render::{self, CursorGuard};
use super::trie::PrefixIndex;

const SEARCH_HELP_FOCUSED: &str = "[=] Select Results | [esc] Exit (Spaces are excluded)";
const SEARCH_HELP_RESULTS: &str =
    "[+] Select Search | [n] Next Page | [b] Last Page | [enter] Select Package | [esc] Exit";

/// Outcome of feeding one key to the search state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Idle,
    Redraw,
    Exit,
    /// Entered a child prompt whose option also carries an action.
    NavigatedWithAction(OptionId),
    /// Action on an option without a child; invoke it and keep the session
    /// going.
    Act(OptionId),
}

/// Blocking search-and-browse session over a prompt graph.
///
/// Owns the graph, the prefix index and a snapshot of the root prompt's
/// unfiltered pages; clearing the query restores that snapshot exactly.
pub struct SearchSession<P> {
    graph: Interaction<P>,
    index: PrefixIndex,
    root: PromptId,
    stored_root_pages: Vec<Vec<OptionId>>,
    placeholder: Option<OptionId>,
    current: PromptId,
    cursor: usize,
    query: String,
    search_focused: bool,
}

impl<P> SearchSession<P> {
    /// Wrap a fully built graph and index. The snapshot of the root
    /// prompt's pages is taken here, so build the graph completely first.
    pub fn new(graph: Interaction<P>, index: PrefixIndex, root: PromptId) -> Self {
        let stored_root_pages = graph.prompt(root).pages().to_vec();
        Self {
            graph,
            index,
            root,
            stored_root_pages,
            placeholder: None,
            current: root,
            cursor: 0,
            query: String::new(),
            search_focused: true,
        }
    }

    /// Open the session: hide the cursor, paint the root prompt and block
    /// on the key loop until the user exits.
    pub fn open(&mut self) -> io::Result<()> {
        let _cursor = CursorGuard::hide()?;
        self.render()?;

        loop {
            let key = input::read_key()?;
            match self.handle_key(key) {
                Step::Idle => {}
                Step::Redraw => self.render()?,
                Step::Exit => return Ok(()),
                Step::NavigatedWithAction(option) => {
                    self.render()?;
                    self.run_action(option)?;
                }
                Step::Act(option) => self.run_action(option)?,
            }
        }
    }

    /// Apply one key to the session state. The focus flag selects which of
    /// the two key alphabets is active.
    pub(crate) fn handle_key(&mut self, key: Key) -> Step {
        if self.search_focused {
            self.handle_search_key(key)
        } else {
            self.handle_results_key(key)
        }
    }

    fn handle_search_key(&mut self, key: Key) -> Step {
        match key {
            Key::Escape => Step::Exit,
            Key::Char('=') => {
                self.search_focused = false;
                Step::Redraw
            }
            Key::Backspace => {
                if self.query.pop().is_some() {
                    self.update_on_search();
                    Step::Redraw
                } else {
                    Step::Idle
                }
            }
            // Spaces are excluded from queries; no indexed title has one.
            Key::Char(' ') => Step::Idle,
            Key::Char(c) => {
                self.query.push(c);
                self.update_on_search();
                Step::Redraw
            }
            _ => Step::Idle,
        }
    }

    fn handle_results_key(&mut self, key: Key) -> Step {
        let page_len = self.graph.prompt(self.current).current_page().len();

        match key {
            Key::Escape => Step::Exit,
            Key::Char('+') if self.current == self.root => {
                self.search_focused = true;
                Step::Redraw
            }
            Key::Down => {
                if self.cursor + 1 < page_len {
                    self.cursor += 1;
                    Step::Redraw
                } else {
                    Step::Idle
                }
            }
            Key::Up => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    Step::Redraw
                } else {
                    Step::Idle
                }
            }
            Key::Char('n') => {
                if self.graph.prompt_mut(self.current).next_page() {
                    self.cursor = 0;
                    Step::Redraw
                } else {
                    Step::Idle
                }
            }
            Key::Char('b') => {
                if self.graph.prompt_mut(self.current).prev_page() {
                    self.cursor = 0;
                    Step::Redraw
                } else {
                    Step::Idle
                }
            }
            Key::Char('u') => match self.graph.prompt(self.current).parent {
                Some(parent) => {
                    self.goto(parent);
                    Step::Redraw
                }
                None => Step::Idle,
            },
            Key::Enter => {
                if page_len == 0 {
                    return Step::Idle;
                }
                let option_id = self.graph.prompt(self.current).current_page()[self.cursor];
                let option = self.graph.option(option_id);
                match (option.child_prompt, option.has_action()) {
                    (Some(child), has_action) => {
                        self.goto(child);
                        if has_action {
                            Step::NavigatedWithAction(option_id)
                        } else {
                            Step::Redraw
                        }
                    }
                    (None, true) => Step::Act(option_id),
                    (None, false) => Step::Idle,
                }
            }
            _ => Step::Idle,
        }
    }

    /// Recompute the root prompt's pages from the current query.
    ///
    /// Empty query restores the unfiltered snapshot; a query with no index
    /// entry installs a single synthetic "no results" option; otherwise the
    /// page list bound to the exact prefix is installed. The page index and
    /// cursor reset either way.
    fn update_on_search(&mut self) {
        let pages = if self.query.is_empty() {
            self.stored_root_pages.clone()
        } else {
            match self.index.lookup(&self.query) {
                Some(pages) => pages.clone(),
                None => vec![vec![self.placeholder_option()]],
            }
        };
        self.graph.prompt_mut(self.root).replace_pages(pages);
        self.cursor = 0;
    }

    /// The synthetic "no results" option, created on first use.
    fn placeholder_option(&mut self) -> OptionId {
        match self.placeholder {
            Some(id) => id,
            None => {
                let id = self
                    .graph
                    .add_detached_option("No Search results!", "Try another search term");
                self.placeholder = Some(id);
                id
            }
        }
    }

    fn goto(&mut self, target: PromptId) {
        self.current = target;
        self.cursor = 0;
        self.graph.prompt_mut(target).reset_page();
    }

    fn run_action(&self, option: OptionId) -> io::Result<()> {
        if let Some(action) = self.graph.option(option).action() {
            let outcome = action.invoke();
            let mut out = io::stdout();
            render::draw_outcome(&mut out, &outcome.message, outcome.error.as_deref())?;
        }
        Ok(())
    }

    fn render(&self) -> io::Result<()> {
        let mut out = io::stdout();
        render::clear_screen(&mut out)?;

        let prompt = self.graph.prompt(self.current);
        if self.current == self.root {
            let help = if self.search_focused {
                SEARCH_HELP_FOCUSED
            } else {
                SEARCH_HELP_RESULTS
            };
            render::draw_header(&mut out, &prompt.title, help)?;
            render::draw_search_bar(&mut out, &self.query, self.search_focused)?;
        } else {
            render::draw_header(&mut out, &prompt.title, &prompt.description)?;
        }

        let rows = super::navigator::page_rows(&self.graph, self.current);
        let cursor = if self.search_focused && self.current == self.root {
            None
        } else {
            Some(self.cursor)
        };
        render::draw_options(&mut out, &rows, cursor)
    }

    pub fn graph(&self) -> &Interaction<P> {
        &self.graph
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> (PromptId, usize, usize) {
        (
            self.current,
            self.cursor,
            self.graph.prompt(self.current).page_idx(),
        )
    }

    #[cfg(test)]
    fn root_page_titles(&self) -> Vec<String> {
        self.graph
            .prompt(self.root)
            .pages()
            .iter()
            .flatten()
            .map(|&id| self.graph.option(id).title.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::graph::{Action, ActionOutcome};
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingAction {
        hits: Rc<Cell<usize>>,
    }

    impl Action for CountingAction {
        fn invoke(&self) -> ActionOutcome {
            self.hits.set(self.hits.get() + 1);
            ActionOutcome::success("done")
        }
    }

    fn session_with(titles: &[&str]) -> SearchSession<u32> {
        let mut graph: Interaction<u32> = Interaction::new();
        let mut index = PrefixIndex::new();
        let root = graph.create_prompt("Search for a package!", "", true);
        for (n, title) in titles.iter().enumerate() {
            let opt = graph.add_option(root, title, "", n as u32);
            index.insert(opt, title);
        }
        SearchSession::new(graph, index, root)
    }

    fn type_query(session: &mut SearchSession<u32>, text: &str) {
        for c in text.chars() {
            session.handle_key(Key::Char(c));
        }
    }

    #[test]
    fn test_query_filters_root_pages() {
        let mut session = session_with(&["redis", "redistore", "ripgrep"]);
        type_query(&mut session, "redis");
        assert_eq!(session.root_page_titles(), vec!["redis", "redistore"]);

        type_query(&mut session, "to");
        assert_eq!(session.root_page_titles(), vec!["redistore"]);
    }

    #[test]
    fn test_unindexed_query_installs_placeholder() {
        let mut session = session_with(&["redis"]);
        type_query(&mut session, "zzz");
        assert_eq!(session.root_page_titles(), vec!["No Search results!"]);
    }

    #[test]
    fn test_clearing_query_restores_original_pages() {
        let mut session = session_with(&["redis", "redistore", "ripgrep"]);
        let original = session.root_page_titles();

        type_query(&mut session, "zzz");
        for _ in 0.."zzz".len() {
            session.handle_key(Key::Backspace);
        }
        assert_eq!(session.root_page_titles(), original);
    }

    #[test]
    fn test_backspace_on_empty_query_is_ignored() {
        let mut session = session_with(&["redis"]);
        assert_eq!(session.handle_key(Key::Backspace), Step::Idle);
        assert!(session.query.is_empty());
    }

    #[test]
    fn test_space_is_excluded_from_queries() {
        let mut session = session_with(&["redis"]);
        type_query(&mut session, "re");
        assert_eq!(session.handle_key(Key::Char(' ')), Step::Idle);
        assert_eq!(session.query, "re");
    }

    #[test]
    fn test_focus_toggle_switches_alphabets() {
        let mut session = session_with(&["alpha", "beta", "gamma"]);

        // Focused: navigation keys do nothing, characters edit the query.
        assert_eq!(session.handle_key(Key::Down), Step::Idle);
        assert_eq!(session.handle_key(Key::Char('=')), Step::Redraw);
        assert!(!session.search_focused);

        // Results mode: 'n'/'b'/arrows navigate instead of typing.
        assert_eq!(session.handle_key(Key::Down), Step::Redraw);
        assert_eq!(session.state().1, 1);
        assert!(session.query.is_empty());

        assert_eq!(session.handle_key(Key::Char('+')), Step::Redraw);
        assert!(session.search_focused);
    }

    #[test]
    fn test_results_pagination_resets_cursor() {
        let titles: Vec<String> = (0..25).map(|n| format!("pkg{}", n)).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let mut session = session_with(&refs);
        session.handle_key(Key::Char('='));
        session.handle_key(Key::Down);
        session.handle_key(Key::Down);
        assert_eq!(session.state().1, 2);

        assert_eq!(session.handle_key(Key::Char('n')), Step::Redraw);
        assert_eq!(session.state(), (0, 0, 1));
        assert_eq!(session.handle_key(Key::Char('b')), Step::Redraw);
        assert_eq!(session.state(), (0, 0, 0));
    }

    #[test]
    fn test_enter_descends_and_u_returns() {
        let mut graph: Interaction<u32> = Interaction::new();
        let mut index = PrefixIndex::new();
        let root = graph.create_prompt("Search for a package!", "", true);
        let detail = graph.create_prompt("redis", "details", false);
        graph.attach_parent(detail, root);
        let opt = graph.add_option(root, "redis", "", 1);
        index.insert(opt, "redis");
        graph.attach_child_prompt(opt, detail);

        let mut session = SearchSession::new(graph, index, root);
        session.handle_key(Key::Char('='));
        assert_eq!(session.handle_key(Key::Enter), Step::Redraw);
        assert_eq!(session.state(), (detail, 0, 0));

        assert_eq!(session.handle_key(Key::Char('u')), Step::Redraw);
        assert_eq!(session.state(), (root, 0, 0));
    }

    #[test]
    fn test_action_fires_without_ending_session() {
        let hits = Rc::new(Cell::new(0));
        let mut graph: Interaction<u32> = Interaction::new();
        let mut index = PrefixIndex::new();
        let root = graph.create_prompt("Search for a package!", "", true);
        let opt = graph.add_option(root, "redis", "", 1);
        index.insert(opt, "redis");
        graph.attach_action(opt, Box::new(CountingAction { hits: hits.clone() }));

        let mut session = SearchSession::new(graph, index, root);
        session.handle_key(Key::Char('='));
        let step = session.handle_key(Key::Enter);
        assert_eq!(step, Step::Act(opt));
        session.run_action(opt).unwrap();
        assert_eq!(hits.get(), 1);
        // Still on the root, still browsable.
        assert_eq!(session.state().0, root);
    }

    #[test]
    fn test_filtered_pages_paginate() {
        let titles: Vec<String> = (0..25).map(|n| format!("pkg{}", n)).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let mut session = session_with(&refs);

        type_query(&mut session, "pkg");
        let root = session.root;
        assert_eq!(session.graph.prompt(root).page_count(), 3);
        assert_eq!(session.graph.prompt(root).page_idx(), 0);
    }
}
