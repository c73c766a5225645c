//! Terminal output formatting for the strike-assets CLI.
//!
//! Cargo-style status lines with right-aligned coloured verbs. Progress is
//! part of the normal output of a generation run, so it goes to stdout.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Colour is enabled when stdout is a terminal. A quiet printer drops
/// per-item `status` and `info` lines but still prints summaries,
/// warnings and errors.
#[derive(Debug, Clone)]
pub struct Printer {
    color: bool,
    quiet: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stdout().is_terminal(),
            quiet: false,
        }
    }

    /// Suppress per-item lines.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Print a progress line with a green bold verb.
    /// e.g. "  Generating Effects/Explosions/explosion_small_0 (32x32)"
    pub fn status(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_line(GREEN, verb, message);
        }
    }

    /// Print a completion line with a green bold verb. Never suppressed.
    pub fn success(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print an informational line with a cyan bold verb.
    pub fn info(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_line(CYAN, verb, message);
        }
    }

    /// Print a warning line with a yellow bold verb.
    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    /// Print an error line with a red bold verb.
    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    /// Format a string as dim/grey.
    pub fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Format a diagnostic severity label with colour.
    pub fn severity(&self, label: &str, is_error: bool) -> String {
        let color = if is_error { RED } else { YELLOW };
        if self.color {
            format!("{BOLD}{color}{label}{RESET}")
        } else {
            label.to_string()
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stdout = io::stdout().lock();
        let _ = if self.color {
            writeln!(stdout, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}")
        } else {
            writeln!(stdout, "{verb:>VERB_WIDTH$} {message}")
        };
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pluralize a count: `plural(1, "sprite", "sprites")` → "1 sprite".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "file", "files"), "1 file");
        assert_eq!(plural(0, "file", "files"), "0 files");
        assert_eq!(plural(3, "sprite", "sprites"), "3 sprites");
    }

    #[test]
    fn test_display_path_absolute() {
        let p = Path::new("/nonexistent/Assets/UI");
        assert_eq!(display_path(p), "/nonexistent/Assets/UI");
    }

    #[test]
    fn test_plain_formatting_without_colour() {
        let printer = Printer { color: false, quiet: true };
        assert_eq!(printer.dim("x"), "x");
        assert_eq!(printer.severity("error", true), "error");
    }
}
