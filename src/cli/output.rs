//! Terminal output with colors
//!
//! Data goes to stdout, diagnostics to stderr. `colored` honors NO_COLOR and
//! CLICOLOR_FORCE.

use std::fmt::Display;
use std::path::Path;

use colored::Colorize;

pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub fn warning(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "warning".yellow(), msg);
}

/// `input => output`, e.g. `1.3.6.1.1.0 => status.ok`.
pub fn translation(input: &str, output: &(impl Display + ?Sized)) {
    println!("{} => {}", input, output.to_string().green());
}

/// `key: value` line, key highlighted.
pub fn field(key: &str, value: &(impl Display + ?Sized)) {
    println!("{}: {}", key.cyan(), value);
}

/// Section title with an entry count.
pub fn section(title: &str, count: usize) {
    println!("{} ({})", title.cyan().bold(), count);
}

/// Indented path entry of a listing; dimmed when `inactive`.
pub fn file_entry(path: &Path, inactive: bool) {
    let shown = path.display().to_string();
    if inactive {
        println!("  {}", shown.dimmed());
    } else {
        println!("  {}", shown);
    }
}

/// Indented free text under a previous line.
pub fn note(msg: &(impl Display + ?Sized)) {
    println!("    {}", msg.to_string().italic());
}

/// Uncolored data (trees, TOML).
pub fn plain(msg: &(impl Display + ?Sized)) {
    println!("{}", msg);
}
