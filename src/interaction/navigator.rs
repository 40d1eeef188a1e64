//! Plain Navigation Controller
//!
//! Owns the mutable session state (current prompt, cursor) and the
//! read-decode-transition-render loop for category-style browsing. Key
//! transitions are pure state changes in `handle_key`; the blocking loop in
//! `open` only reads keys, repaints and runs actions, so the state machine
//! is testable without a terminal.

use std::io;

use super::graph::{Interaction, OptionId, PromptId};
use super::input::{self, Key};
use super::render::{self, CursorGuard};

/// Outcome of feeding one key to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Guard miss or unmapped key; no state change, no repaint.
    Idle,
    /// State changed; repaint.
    Redraw,
    /// User exited without selecting.
    Exit,
    /// Entered a child prompt whose option also carries an action; repaint,
    /// then run the action, then keep going.
    NavigatedWithAction(OptionId),
    /// Terminal selection; run the action if any and end the session.
    Selected(OptionId),
}

/// Blocking keyboard-driven navigator over a prompt graph.
pub struct Navigator<'a, P> {
    graph: &'a mut Interaction<P>,
    current: PromptId,
    cursor: usize,
}

impl<'a, P> Navigator<'a, P> {
    pub fn new(graph: &'a mut Interaction<P>, root: PromptId) -> Self {
        Self {
            graph,
            current: root,
            cursor: 0,
        }
    }

    /// Open the session: hide the cursor, paint the root prompt and block
    /// on the key loop until the user exits (`None`) or lands a terminal
    /// selection (`Some(option)`).
    pub fn open(&mut self) -> io::Result<Option<OptionId>> {
        let _cursor = CursorGuard::hide()?;
        self.render()?;

        loop {
            let key = input::read_key()?;
            match self.handle_key(key) {
                Step::Idle => {}
                Step::Redraw => self.render()?,
                Step::Exit => return Ok(None),
                Step::NavigatedWithAction(option) => {
                    self.render()?;
                    self.run_action(option)?;
                }
                Step::Selected(option) => {
                    self.run_action(option)?;
                    return Ok(Some(option));
                }
            }
        }
    }

    /// Apply one key to the session state. Guards are evaluated against the
    /// current prompt's page on every call.
    pub(crate) fn handle_key(&mut self, key: Key) -> Step {
        let page_len = self.graph.prompt(self.current).current_page().len();

        match key {
            Key::Escape => Step::Exit,
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
                match option.child_prompt {
                    Some(child) => {
                        // Navigation first; the action (if any) runs after.
                        let has_action = option.has_action();
                        self.goto(child);
                        if has_action {
                            Step::NavigatedWithAction(option_id)
                        } else {
                            Step::Redraw
                        }
                    }
                    None => Step::Selected(option_id),
                }
            }
            _ => Step::Idle,
        }
    }

    /// Move to another prompt, resetting the cursor and that prompt's page.
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
        render::draw_header(&mut out, &prompt.title, &prompt.description)?;
        let rows = page_rows(self.graph, self.current);
        render::draw_options(&mut out, &rows, Some(self.cursor))
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> (PromptId, usize, usize) {
        (
            self.current,
            self.cursor,
            self.graph.prompt(self.current).page_idx(),
        )
    }
}

/// Title/description pairs for a prompt's current page.
pub(crate) fn page_rows<P>(graph: &Interaction<P>, prompt: PromptId) -> Vec<(String, String)> {
    graph
        .prompt(prompt)
        .current_page()
        .iter()
        .map(|&id| {
            let option = graph.option(id);
            (option.title.clone(), option.description.clone())
        })
        .collect()
}
