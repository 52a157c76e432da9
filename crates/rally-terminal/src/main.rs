//! Rally Terminal Main Entry Point
//! Uses bpaf for CLI parsing and delegates execution to handlers.

use anyhow::Result;
use bpaf::{Args, Parser};
use rally_terminal::cli::{cli_parser, Commands};
use rally_terminal::handlers::{handle_routes, handle_tui, handle_version};

/// Print a friendly usage message when no command is provided
fn print_usage() {
    eprintln!(
        "usage: rally [-v] COMMAND [OPTIONS]

commands:
    tui         Interactive terminal user interface
    routes      Print the static route table
    version     Show version information

run 'rally COMMAND --help' for command-specific options"
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (just "rally" with no command)
    let raw_args: Vec<String> = std::env::args().collect();
    if raw_args.len() == 1 {
        print_usage();
        std::process::exit(0);
    }

    // Parse arguments, showing usage on parse failure
    let args = match cli_parser().to_options().run_inner(Args::current_args()) {
        Ok(args) => args,
        Err(e) => {
            // Help requests exit with code 0
            let exit_code = e.clone().exit_code();
            if exit_code == 0 {
                print!("{:?}", e);
                std::process::exit(0);
            }
            print_usage();
            std::process::exit(1);
        }
    };

    match args.command {
        Commands::Tui(tui) => handle_tui(&tui, args.verbose).await,
        Commands::Routes(routes) => handle_routes(&routes),
        Commands::Version => handle_version(),
    }
}
