//! Diagnostic types for output verification.

use std::fmt;
use std::path::{Path, PathBuf};

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single verification finding about one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Machine-readable code (e.g. "strike::verify::missing-variant").
    pub code: String,
    pub message: String,
    /// File the finding is about.
    pub path: PathBuf,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(code: impl Into<String>, path: &Path, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: code.into(),
            message: message.into(),
            path: path.to_path_buf(),
            help: None,
        }
    }

    pub fn warning(code: impl Into<String>, path: &Path, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.into(),
            message: message.into(),
            path: path.to_path_buf(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Everything a verification pass found.
#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
    diagnostics: Vec<Diagnostic>,
    /// Complete sprites seen (base plus both variants, all correct).
    pub sprites: usize,
}

impl VerifyReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn merge(&mut self, other: VerifyReport) {
        self.diagnostics.extend(other.diagnostics);
        self.sprites += other.sprites;
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Codes in report order, for assertions.
    pub fn codes(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.code.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = VerifyReport::new();
        assert!(report.is_ok());
        assert!(!report.has_errors());
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.warning_count(), 0);
    }

    #[test]
    fn test_merge_counts() {
        let mut a = VerifyReport::new();
        a.push(Diagnostic::error("strike::a", Path::new("a.png"), "bad"));
        a.sprites = 2;

        let mut b = VerifyReport::new();
        b.push(Diagnostic::warning("strike::b", Path::new("b.png.tmp"), "stale"));
        b.sprites = 3;

        a.merge(b);
        assert_eq!(a.error_count(), 1);
        assert_eq!(a.warning_count(), 1);
        assert_eq!(a.sprites, 5);
        assert_eq!(a.codes(), vec!["strike::a", "strike::b"]);
    }

    #[test]
    fn test_diagnostic_with_help() {
        let d = Diagnostic::error("strike::test", Path::new("x.png"), "missing")
            .with_help("Re-run `strike-assets generate`");
        assert_eq!(d.help.as_deref(), Some("Re-run `strike-assets generate`"));
    }
}
