//! CLI argument parsing.
//!
//! This module defines bpaf parsers only; implementation logic lives in
//! `handlers/`.

pub mod commands;
pub mod tui;

pub use commands::{cli_parser, Commands, GlobalArgs, RoutesArgs};
pub use tui::TuiArgs;
