//! Renderer Module
//!
//! Full-repaint terminal drawing for the navigation controllers: clear the
//! screen, write the current prompt's header, optionally the search bar,
//! then the visible option page with the cursor row highlighted. Every
//! option line is right-padded to a fixed width so a shorter label fully
//! overwrites a longer one from the previous frame.

use std::io::{self, Write};

use crossterm::cursor;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};

/// Width option lines are padded to. Labels longer than this are printed
/// in full.
pub(crate) const LINE_WIDTH: usize = 79;

/// Hides the terminal cursor for the lifetime of a session; the cursor is
/// restored on drop, which covers Escape-triggered exits and panics alike.
pub(crate) struct CursorGuard;

impl CursorGuard {
    pub(crate) fn hide() -> io::Result<Self> {
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show);
    }
}

/// Clear the whole screen and park the cursor at the origin.
pub(crate) fn clear_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))
}

/// Write the prompt header: emphasized title, then the description/help
/// line.
pub(crate) fn draw_header(out: &mut impl Write, title: &str, description: &str) -> io::Result<()> {
    writeln!(out, "{}", title.to_string().bold().cyan())?;
    writeln!(out, "{}", description.to_string().magenta())
}

/// Write the search input bar with a marker showing whether the search
/// field or the results list has input focus.
pub(crate) fn draw_search_bar(out: &mut impl Write, query: &str, focused: bool) -> io::Result<()> {
    let divider = "-".repeat(LINE_WIDTH);
    writeln!(out, "{}", divider)?;
    if focused {
        let bar = pad_line(&format!("> Search: {}", query));
        writeln!(out, " {}", bar.bold().cyan())?;
    } else {
        let bar = pad_line(&format!("Search >> {}", query));
        writeln!(out, " {}", bar.bold())?;
    }
    writeln!(out, "{}", divider)
}

/// Write one page of options, highlighting the row at `cursor`. Passing
/// `None` draws every row unhighlighted (search field focused).
pub(crate) fn draw_options(
    out: &mut impl Write,
    rows: &[(String, String)],
    cursor: Option<usize>,
) -> io::Result<()> {
    for (idx, (title, description)) in rows.iter().enumerate() {
        let line = pad_line(&format!("{} ({})", title, description));
        if Some(idx) == cursor {
            writeln!(out, "{}{}", ">  ".bold().yellow(), line.bold().yellow())?;
        } else {
            writeln!(out, "   {}", line)?;
        }
    }
    out.flush()
}

/// Surface an action outcome below the menu, both halves verbatim.
pub(crate) fn draw_outcome(
    out: &mut impl Write,
    message: &str,
    error: Option<&str>,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", message)?;
    if let Some(error) = error {
        writeln!(out, "{}", error.to_string().red())?;
    }
    out.flush()
}

/// Right-pad a line with spaces to [`LINE_WIDTH`] so repaints leave no
/// residue from longer previous content.
fn pad_line(text: &str) -> String {
    let width = text.chars().count();
    if width >= LINE_WIDTH {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(LINE_WIDTH - width))
    }
}
