//! Lex-phase errors.

use loxc_util::LineError;

/// The two lex-time failures this scanner can raise: an unrecognized
/// character, or a string literal that runs off the end of input before its
/// closing quote. Neither aborts lexing; the lexer collects these and keeps
/// going.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("Unexpected character '{character}'.")]
    UnexpectedCharacter { character: char, line: u32 },

    #[error("Unterminated string.")]
    UnterminatedString { line: u32 },
}

impl LexError {
    /// The source line this error was reported on.
    pub fn line(&self) -> u32 {
        match self {
            LexError::UnexpectedCharacter { line, .. } => *line,
            LexError::UnterminatedString { line, .. } => *line,
        }
    }
}

impl From<LexError> for LineError {
    fn from(err: LexError) -> Self {
        let line = err.line();
        LineError::new(line, err.to_string())
    }
}
