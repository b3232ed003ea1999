//! Colored terminal output.
//!
//! Colors are switched off globally with `colored::control::set_override`.

use colored::Colorize;
use std::fmt::Display;

const PROGRAM: &str = "ppm:";

/// Prints a status message to stdout.
pub fn message(text: &str) {
    println!("{} {}", PROGRAM.blue(), text.green());
}

/// Prints an error to stderr.
pub fn error<E: Display + ?Sized>(err: &E) {
    eprintln!("{} {}", PROGRAM.blue(), err.to_string().red());
}

/// Prints one `key => value` line.
pub fn entry(key: &str, value: &str) {
    println!("{}", format_entry(key, value));
}

fn format_entry(key: &str, value: &str) -> String {
    format!("{} {} {}", key.white(), "=>".green(), value.blue())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_layout_without_color() {
        colored::control::set_override(false);
        assert_eq!(format_entry("github", "pw1"), "github => pw1");
        colored::control::unset_override();
    }
}
