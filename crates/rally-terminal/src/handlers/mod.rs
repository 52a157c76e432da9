//! CLI command implementations.
//!
//! `cli/` parses arguments; the handlers here do the work.

pub mod routes;
pub mod tui;
pub mod version;

pub use routes::handle_routes;
pub use tui::{handle_tui, parse_open_target};
pub use version::handle_version;
