//! # Iocraft Terminal Adapter
//!
//! Converts iocraft terminal events into the toolkit-independent event
//! model the state machine consumes. The production TUI feeds events through
//! this conversion; tests construct events directly and skip it.

use iocraft::prelude::{KeyCode, KeyEventKind};

use crate::tui::events::{KeyCode as RallyKeyCode, KeyEvent, TerminalEvent};

/// Convert an iocraft event into the state machine's event model. Returns
/// `None` for events the TUI does not react to (mouse, paste, key releases).
pub fn convert_iocraft_event(event: iocraft::prelude::TerminalEvent) -> Option<TerminalEvent> {
    match event {
        iocraft::prelude::TerminalEvent::Key(key_event) => {
            // Only process Press events - Release and Repeat would double up
            // keystrokes on terminals that report them
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            Some(TerminalEvent::Key(KeyEvent {
                code: convert_key_code(key_event.code),
            }))
        }
        iocraft::prelude::TerminalEvent::Resize(width, height) => {
            Some(TerminalEvent::Resize { width, height })
        }
        _ => None,
    }
}

/// Convert iocraft KeyCode to our KeyCode
fn convert_key_code(code: KeyCode) -> RallyKeyCode {
    match code {
        KeyCode::Char(c) => RallyKeyCode::Char(c),
        KeyCode::Enter => RallyKeyCode::Enter,
        KeyCode::Esc => RallyKeyCode::Esc,
        KeyCode::Tab => RallyKeyCode::Tab,
        KeyCode::BackTab => RallyKeyCode::BackTab,
        KeyCode::Backspace => RallyKeyCode::Backspace,
        KeyCode::Up => RallyKeyCode::Up,
        KeyCode::Down => RallyKeyCode::Down,
        _ => RallyKeyCode::Null,
    }
}
