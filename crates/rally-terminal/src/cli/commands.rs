//! Top-level CLI commands.

use bpaf::{command, construct, long, pure, short, Parser};

use crate::cli::tui::{tui_parser, TuiArgs};

/// Top-level CLI commands exposed to the terminal.
#[derive(Debug, Clone)]
pub enum Commands {
    /// Launch the interactive TUI
    Tui(TuiArgs),
    /// Print the static route table
    Routes(RoutesArgs),
    /// Show version information
    Version,
}

/// Arguments for the `routes` command
#[derive(Debug, Clone)]
pub struct RoutesArgs {
    /// Emit the table as JSON
    pub json: bool,
}

fn tui_command() -> impl Parser<Commands> {
    command(
        "tui",
        tui_parser().map(Commands::Tui).to_options(),
    )
    .help("Interactive terminal user interface")
}

fn routes_parser() -> impl Parser<RoutesArgs> {
    let json = long("json").help("Emit the route table as JSON").switch();
    construct!(RoutesArgs { json })
}

fn routes_command() -> impl Parser<Commands> {
    command(
        "routes",
        routes_parser().map(Commands::Routes).to_options(),
    )
    .help("Print the static route table")
}

fn version_command() -> impl Parser<Commands> {
    command("version", pure(Commands::Version).to_options()).help("Show version information")
}

fn commands_parser() -> impl Parser<Commands> {
    construct!([tui_command(), routes_command(), version_command()])
}

/// Global CLI arguments
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose logging
    pub verbose: bool,
    /// The command to run
    pub command: Commands,
}

/// Top-level parser
pub fn cli_parser() -> impl Parser<GlobalArgs> {
    let verbose = short('v')
        .long("verbose")
        .help("Enable verbose logging")
        .switch();
    let command = commands_parser();
    construct!(GlobalArgs { verbose, command })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bpaf::Args;

    #[test]
    fn parses_tui_command() {
        let parser = commands_parser();
        let args = Args::from(&["tui", "--open", "rally://single_account/Checking"]);
        let parsed = parser.to_options().run_inner(args).unwrap();
        match parsed {
            Commands::Tui(tui) => assert_eq!(
                tui.open.as_deref(),
                Some("rally://single_account/Checking")
            ),
            _ => panic!("expected Tui"),
        }
    }

    #[test]
    fn parses_tui_without_open() {
        let parser = commands_parser();
        let parsed = parser.to_options().run_inner(Args::from(&["tui"])).unwrap();
        match parsed {
            Commands::Tui(tui) => assert!(tui.open.is_none()),
            _ => panic!("expected Tui"),
        }
    }

    #[test]
    fn parses_routes_command() {
        let parser = commands_parser();
        let parsed = parser
            .to_options()
            .run_inner(Args::from(&["routes", "--json"]))
            .unwrap();
        match parsed {
            Commands::Routes(routes) => assert!(routes.json),
            _ => panic!("expected Routes"),
        }
    }

    #[test]
    fn parses_verbose_flag() {
        let parsed = cli_parser()
            .to_options()
            .run_inner(Args::from(&["--verbose", "version"]))
            .unwrap();
        assert!(parsed.verbose);
        assert!(matches!(parsed.command, Commands::Version));
    }
}
