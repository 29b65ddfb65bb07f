//! Diagnostic severity levels.
//!
//! # Examples
//!
//! ```
//! use loxc_util::diagnostic::Level;
//!
//! assert_eq!(format!("{}", Level::Error), "error");
//! assert_eq!(format!("{}", Level::Warning), "warning");
//! ```

use std::fmt;

/// Diagnostic severity level.
///
/// Only `Error` is emitted by any phase today; `Warning` is kept because the
/// diagnostic model is shared by lexer, parser, and evaluator, and a future
/// lint (e.g. "unused variable") has somewhere to report through without a
/// new type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// An error severe enough to abort the current phase.
    Error,
    /// A non-fatal diagnostic.
    Warning,
}

impl Level {
    /// Returns true if this level represents an error.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Returns the canonical lowercase name for this level.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
