//! Operator-facing text for CLI commands.

use std::fmt::Display;
use std::io::{self, Write};

use crate::domain::Entry;

const RULE_WIDTH: usize = 64;
const LABEL_WIDTH: usize = 18;

/// Print a blank line, a section title and a rule under it.
pub fn section(title: &str) {
    println!();
    println!("{title}");
    println!("{}", "─".repeat(RULE_WIDTH));
}

/// Print a label padded to a fixed column, then its value.
pub fn key_value(label: &str, value: impl Display) {
    println!("{label:<LABEL_WIDTH$} {value}");
}

/// Print one leaderboard row, e.g. `  #1    0xabc…  1,000 ETH`.
pub fn entry(entry: &Entry) {
    println!("  #{:<4} {}  {}", entry.rank, entry.identity, entry.display);
}

/// Print a check that passed.
pub fn ok(message: &str) {
    println!("✓ {message}");
}

/// Print a condition worth attention that does not fail the command.
pub fn warn(message: &str) {
    println!("⚠ {message}");
}

/// Print a failure to stderr.
pub fn error(message: &str) {
    eprintln!("✗ {message}");
}

/// Start a progress line in the format `Label... `, flushed so it shows
/// before the awaited work completes.
pub fn progress(label: &str) {
    print!("{label}... ");
    let _ = io::stdout().flush();
}

/// Finish a line started by [`progress`] with `ok` or `failed`.
pub fn progress_done(success: bool) {
    println!("{}", if success { "ok" } else { "failed" });
}
