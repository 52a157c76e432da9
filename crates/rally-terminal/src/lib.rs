//! # Rally Terminal - User Interface
//!
//! Terminal frontend (CLI + TUI) for the Rally finance demo.
//!
//! ## Architecture
//!
//! `rally-app` is pure; this crate renders it:
//!
//! ```text
//! ┌─────────────────────────┐
//! │     rally-terminal      │  ← THIS CRATE
//! │                         │
//! │  CLI parsers/handlers   │
//! │  TUI screens/components │
//! └───────────┬─────────────┘
//!             │
//!             ↓ imports from
//! ┌───────────────────────────┐
//! │        rally-app          │
//! │   (headless app core)     │
//! │                           │
//! │  Route, Navigator,        │
//! │  Destination, UserData    │
//! └───────────────────────────┘
//! ```
//!
//! ## What Belongs Here
//!
//! - CLI command definitions and argument parsing
//! - TUI screens, components, and layout
//! - Terminal-specific rendering and input handling
//!
//! ## What Does NOT Belong Here
//!
//! - Navigation policy or route resolution (lives in rally-app)

pub mod cli;
pub mod handlers;
pub mod tui;

pub use cli::{cli_parser, Commands, GlobalArgs, RoutesArgs, TuiArgs};
pub use handlers::{handle_routes, handle_tui, handle_version, parse_open_target};
pub use tui::{transition, TuiCommand, TuiState};
