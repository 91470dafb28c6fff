//! Terminal presentation helpers.

use console::style;

/// Prints a fatal error message to stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}
