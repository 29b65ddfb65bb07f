//! Diagnostic reporting infrastructure shared by every compilation phase.
//!
//! A [`Diagnostic`] pairs a [`Level`] with a message and a source line. A
//! [`Handler`] collects diagnostics as they are produced so the driver can
//! decide, after a phase finishes, whether to continue or report failure.
//!
//! # Examples
//!
//! ```
//! use loxc_util::diagnostic::{Handler, Level};
//!
//! let handler = Handler::new();
//! handler.report(Level::Error, "unexpected character '@'", 3);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

mod level;

pub use level::Level;

use std::cell::RefCell;

/// A single diagnostic message tied to a source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity of this diagnostic.
    pub level: Level,
    /// Human-readable message, already formatted for display.
    pub message: String,
    /// 1-based source line the diagnostic refers to.
    pub line: u32,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(level: Level, message: impl Into<String>, line: u32) -> Self {
        Self {
            level,
            message: message.into(),
            line,
        }
    }

    /// Creates an error-level diagnostic.
    pub fn error(message: impl Into<String>, line: u32) -> Self {
        Self::new(Level::Error, message, line)
    }

    /// Creates a warning-level diagnostic.
    pub fn warning(message: impl Into<String>, line: u32) -> Self {
        Self::new(Level::Warning, message, line)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] {}: {}", self.line, self.level, self.message)
    }
}

/// Collects diagnostics produced while lexing, parsing, or evaluating a
/// single source.
///
/// The interpreter drives one `Handler` per `run()` call (see the `loxc-drv`
/// crate); a REPL session creates a fresh one per line so that one bad line
/// doesn't poison the ones that follow.
#[derive(Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Creates an empty handler.
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Records a diagnostic at the given level and line.
    pub fn report(&self, level: Level, message: impl Into<String>, line: u32) {
        self.diagnostics
            .borrow_mut()
            .push(Diagnostic::new(level, message, line));
    }

    /// Records a pre-built diagnostic.
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// True if any diagnostic at [`Level::Error`] has been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Number of error-level diagnostics recorded so far.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Returns a snapshot of every diagnostic recorded so far, in order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Clears all recorded diagnostics.
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_starts_empty() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn report_tracks_errors_not_warnings() {
        let handler = Handler::new();
        handler.report(Level::Warning, "unused variable 'x'", 1);
        assert!(!handler.has_errors());

        handler.report(Level::Error, "unexpected token", 2);
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.diagnostics().len(), 2);
    }

    #[test]
    fn clear_resets_state() {
        let handler = Handler::new();
        handler.emit(Diagnostic::error("boom", 1));
        handler.clear();
        assert!(!handler.has_errors());
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn display_format() {
        let diag = Diagnostic::error("unexpected '+'", 4);
        assert_eq!(format!("{}", diag), "[line 4] error: unexpected '+'");
    }
}
