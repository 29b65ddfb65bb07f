//! Shared error helpers.
//!
//! Each phase crate (`loxc-lex`, `loxc-par`, `loxc-eval`) defines its own
//! `thiserror`-derived error enum local to that phase; this module only
//! holds the bits genuinely common to all of them.

use std::fmt;

/// A source line paired with a message, the shape every phase error reduces
/// to when the driver prints it.
///
/// `LexError`, `ParseError`, and `RuntimeError` each implement `Into<LineError>`
/// so `loxc-drv` can report any of them uniformly without depending on all
/// three crates' concrete error types directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineError {
    pub line: u32,
    pub message: String,
}

impl LineError {
    pub fn new(line: u32, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

impl std::error::Error for LineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_lox_convention() {
        let err = LineError::new(12, "Unexpected character '@'.");
        assert_eq!(format!("{}", err), "[line 12] Error: Unexpected character '@'.");
    }
}
