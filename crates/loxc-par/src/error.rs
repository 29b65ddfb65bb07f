//! Parse-phase errors.

use loxc_util::LineError;

/// The two parse-time failures names: a required token that
/// never showed up, and an assignment whose left side isn't a variable.
/// Neither aborts parsing; [`crate::Parser::synchronize`] recovers to the
/// next statement boundary and parsing continues.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("{message}")]
    MissingToken { message: String, line: u32 },

    #[error("Invalid assignment target.")]
    InvalidAssignmentTarget { line: u32 },
}

impl ParseError {
    /// The source line this error was reported on.
    pub fn line(&self) -> u32 {
        match self {
            ParseError::MissingToken { line, .. } => *line,
            ParseError::InvalidAssignmentTarget { line } => *line,
        }
    }
}

impl From<ParseError> for LineError {
    fn from(err: ParseError) -> Self {
        let line = err.line();
        LineError::new(line, err.to_string())
    }
}
