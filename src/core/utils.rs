//! Utilities module - Operator-facing status lines

use colored::*;
use std::path::Path;

/// Print a step message
pub fn print_step(message: &str) {
    println!("   {} {}", "→".bright_blue(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("   {} {}", "✓".bright_green(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("   {} {}", "✗".bright_red(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("   {} {}", "⚠".bright_yellow(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("   {} {}", "ℹ".bright_cyan(), message);
}

/// Print a written file, indented under the current step
pub fn print_file(path: &Path) {
    println!(
        "     {} {}",
        "-".bright_black(),
        path.display().to_string().bright_cyan()
    );
}

/// Print a `label: path` line with an existence marker
pub fn print_path(label: &str, path: &Path) {
    let marker = if path.exists() {
        "✓".bright_green()
    } else {
        "✗".bright_black()
    };
    println!(
        "   {} {:<14} {}",
        marker,
        label,
        path.display().to_string().bright_cyan()
    );
}
