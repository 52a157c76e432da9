//! # Rally TUI - Terminal User Interface
//!
//! Terminal rendition of the Rally finance study, built with iocraft for
//! declarative, React-like UI components.
//!
//! ## Module Organization
//!
//! - **screens**: Full-screen views (Overview, Accounts, Bills, SingleAccount)
//!   and the app shell that dispatches between them
//! - **components**: Reusable UI widgets (RallyTabRow, KeyHintsBar)
//! - **theme**: Centralized color and style constants
//! - **types**: Display types and formatting helpers
//! - **events**: Toolkit-independent event model
//! - **state_machine**: Pure state machine for deterministic testing
//! - **iocraft_adapter**: Bridge between iocraft events and the event model
//!
//! ## Testing Architecture
//!
//! All navigation flows through a pure state machine:
//!
//! ```text
//! TuiState × TerminalEvent → (TuiState, Vec<TuiCommand>)
//! ```
//!
//! The iocraft shell holds a `TuiState` and applies `transition` to every
//! converted terminal event; tests drive the same function directly, so the
//! behavior they pin down is the behavior the terminal shows. See
//! `tests/tui_deterministic.rs`.

pub mod components;
pub mod events;
pub mod iocraft_adapter;
pub mod screens;
pub mod state_machine;
pub mod theme;
pub mod types;

pub use components::{EmptyState, KeyHintsBar, RallyTabRow};
pub use events::{KeyCode, KeyEvent, TerminalEvent};
pub use iocraft_adapter::convert_iocraft_event;
pub use screens::{
    resolve_account, run_app, AccountsScreen, BillsScreen, OverviewScreen, RallyApp,
    SingleAccountScreen,
};
pub use state_machine::{transition, TuiCommand, TuiState};
pub use theme::{Spacing, Theme};
pub use types::{format_usd, KeyHint};
