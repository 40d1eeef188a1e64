//! Raw Input Module
//!
//! Single-key reads for the navigation controllers. The terminal is put
//! into raw (unbuffered, unechoed) mode for the duration of one read and
//! restored before anything else touches standard output; restoration is
//! tied to a guard's `Drop` so it also happens on panic and early-return
//! paths.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// One decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Escape,
    Backspace,
    Char(char),
    /// Anything outside the session's input alphabet. Controllers ignore it.
    Other,
}

/// Holds the terminal in raw mode; restores the prior mode on drop.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Block until the user presses a key and return it decoded.
///
/// There is no timeout and no cancellation; the only way to unblock is a
/// keystroke. Failing to switch the terminal into raw mode is returned as
/// an error and treated as fatal by the caller, since the engine cannot
/// function without its input device.
pub fn read_key() -> io::Result<Key> {
    let _raw = RawModeGuard::acquire()?;

    loop {
        if let Event::Key(key) = event::read()? {
            // Repeat/release events would double every keystroke on
            // platforms that report them.
            if key.kind != KeyEventKind::Press {
                continue;
            }
            return Ok(decode(key));
        }
    }
}

/// Map a terminal key event onto the session's input alphabet.
///
/// Ctrl+C is decoded as Escape: raw mode suppresses the interrupt signal,
/// and the session must stay exitable.
pub(crate) fn decode(event: KeyEvent) -> Key {
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') => Key::Escape,
            _ => Key::Other,
        };
    }

    match event.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_arrows_and_controls() {
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);

        assert_eq!(decode(up), Key::Up);
        assert_eq!(decode(down), Key::Down);
        assert_eq!(decode(enter), Key::Enter);
        assert_eq!(decode(esc), Key::Escape);
    }

    #[test]
    fn test_decode_printable_characters() {
        let n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE);
        let shifted = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);

        assert_eq!(decode(n), Key::Char('n'));
        assert_eq!(decode(shifted), Key::Char('R'));
    }

    #[test]
    fn test_decode_ctrl_c_as_escape() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(decode(ctrl_c), Key::Escape);

        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(decode(ctrl_x), Key::Other);
    }

    #[test]
    fn test_decode_unmapped_keys_are_other() {
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        let f1 = KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE);

        assert_eq!(decode(tab), Key::Other);
        assert_eq!(decode(f1), Key::Other);
    }
}
