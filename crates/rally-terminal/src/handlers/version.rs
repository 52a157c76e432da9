//! # Version Handler

use anyhow::Result;

/// Print version information
pub fn handle_version() -> Result<()> {
    println!("rally {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
