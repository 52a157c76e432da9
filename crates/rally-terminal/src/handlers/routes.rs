//! # Routes Handler
//!
//! Prints the static route table, for inspection and tooling.

use anyhow::Result;
use rally_app::route_table;

use crate::cli::RoutesArgs;

/// Print the route table to stdout
pub fn handle_routes(args: &RoutesArgs) -> Result<()> {
    let table = route_table();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    println!("{:<16} {:<32} {:<14} DEEP LINK", "ROUTE", "TEMPLATE", "ARGS");
    for entry in table {
        println!(
            "{:<16} {:<32} {:<14} {}",
            entry.route,
            entry.template,
            entry.argument.unwrap_or("-"),
            entry.deep_link.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}
