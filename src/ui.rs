//! Styled status output for the CLI.
//!
//! Pure formatting, no prompts: every command here is one-shot and
//! non-interactive (CI is the primary caller).

use console::style;

use crate::warning::Warning;

/// Print an error message in red to stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print a non-fatal warning to stderr.
pub fn display_warning(warning: &Warning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Print a command line that would run in dry-run mode.
pub fn display_dry_run(command: &str) {
    println!("{} {}", style("[dry-run]").cyan(), command);
}
