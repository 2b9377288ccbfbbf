//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success
//! - Red: errors
//! - Yellow: warnings, codes
//! - Cyan: entry names, ids
//! - Bold: headers
//! - Dimmed: secondary info

use colored::Colorize;
use std::fmt::Display;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", "✓".green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✗".red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", "⚠".yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", msg.dimmed());
    } else {
        println!("{}", msg);
    }
}

/// Print a key-value pair (label dimmed, value bold).
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("  {}  {}", label.dimmed(), value.to_string().bold());
    } else {
        println!("  {}  {}", label, value);
    }
}

/// Format an entry name in cyan.
pub fn name(n: &str) -> String {
    if colors_enabled() {
        n.cyan().to_string()
    } else {
        n.to_string()
    }
}

/// Format a generated code in bold yellow.
pub fn code(c: &str) -> String {
    if colors_enabled() {
        c.yellow().bold().to_string()
    } else {
        c.to_string()
    }
}
