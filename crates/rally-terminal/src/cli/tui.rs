//! TUI launch arguments.

use bpaf::{construct, long, Parser};

/// Arguments for the interactive terminal interface
#[derive(Debug, Clone)]
pub struct TuiArgs {
    /// Route path or `rally://` deep link to open on startup
    pub open: Option<String>,
}

/// Parser for [`TuiArgs`]
pub fn tui_parser() -> impl Parser<TuiArgs> {
    let open = long("open")
        .help("Open a route path or rally:// deep link on startup")
        .argument::<String>("ROUTE")
        .optional();
    construct!(TuiArgs { open })
}
