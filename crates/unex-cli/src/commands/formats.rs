//! Formats command
//!
//! List the export formats the engine supports.

use anyhow::Result;
use unex_core::ExportRouter;

/// Execute the formats command
pub fn execute() -> Result<()> {
    use colored::Colorize;

    let router = ExportRouter::default();

    println!("{}", "Available formats:".bold().underline());
    println!();
    for format in router.available_formats() {
        println!(
            "  {} .{:<5} {}",
            format!("{:<10}", format.as_str()).cyan(),
            format.extension(),
            format.mime_type().dimmed()
        );
    }

    Ok(())
}
