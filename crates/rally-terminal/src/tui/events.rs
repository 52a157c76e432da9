//! # Terminal Events
//!
//! Toolkit-independent event model consumed by the state machine. The
//! iocraft adapter converts real terminal input into these values; tests
//! construct them directly via the [`events`] helpers.

/// A discrete terminal input event
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A key press
    Key(KeyEvent),
    /// Terminal resized
    Resize {
        /// New width in columns
        width: u16,
        /// New height in rows
        height: u16,
    },
}

/// A key press
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// Which key was pressed
    pub code: KeyCode,
}

/// Key identifiers the TUI reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCode {
    /// A printable character
    Char(char),
    /// Enter / Return
    Enter,
    /// Escape
    Esc,
    /// Tab
    Tab,
    /// Shift-Tab
    BackTab,
    /// Backspace
    Backspace,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Any key the TUI does not react to
    Null,
}

/// Constructors for use in tests and headless drivers
pub mod events {
    use super::{KeyCode, KeyEvent, TerminalEvent};

    /// A character key press
    pub fn char(c: char) -> TerminalEvent {
        key(KeyCode::Char(c))
    }

    /// Enter key press
    pub fn enter() -> TerminalEvent {
        key(KeyCode::Enter)
    }

    /// Escape key press
    pub fn escape() -> TerminalEvent {
        key(KeyCode::Esc)
    }

    /// Tab key press
    pub fn tab() -> TerminalEvent {
        key(KeyCode::Tab)
    }

    /// Shift-Tab key press
    pub fn back_tab() -> TerminalEvent {
        key(KeyCode::BackTab)
    }

    /// Backspace key press
    pub fn backspace() -> TerminalEvent {
        key(KeyCode::Backspace)
    }

    /// Arrow-up key press
    pub fn up() -> TerminalEvent {
        key(KeyCode::Up)
    }

    /// Arrow-down key press
    pub fn down() -> TerminalEvent {
        key(KeyCode::Down)
    }

    /// A resize event
    pub fn resize(width: u16, height: u16) -> TerminalEvent {
        TerminalEvent::Resize { width, height }
    }

    fn key(code: KeyCode) -> TerminalEvent {
        TerminalEvent::Key(KeyEvent { code })
    }
}
