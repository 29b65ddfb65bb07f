//! Runtime-phase errors.

use loxc_util::LineError;

/// Every failure the evaluator can raise while walking a statement list.
/// Unlike lex and parse errors, a runtime error is not locally recovered:
/// it aborts the current `interpret` call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    #[error("Varname {name} is never assigned")]
    UndefinedVariable { name: String, line: u32 },

    #[error("Operand must be a number.")]
    OperandMustBeNumber { line: u32 },

    #[error("Operands must be numbers.")]
    OperandsMustBeNumbers { line: u32 },

    #[error("Wrong types for addition")]
    WrongTypesForAddition { line: u32 },

    #[error("Cannot divide by zero")]
    DivisionByZero { line: u32 },

    #[error("Can only call functions.")]
    NotCallable { line: u32 },

    #[error("Expected {expected} arguments but got {got}.")]
    ArityMismatch {
        expected: usize,
        got: usize,
        line: u32,
    },
}

impl RuntimeError {
    /// The source line this error was reported on.
    pub fn line(&self) -> u32 {
        match self {
            RuntimeError::UndefinedVariable { line, .. } => *line,
            RuntimeError::OperandMustBeNumber { line } => *line,
            RuntimeError::OperandsMustBeNumbers { line } => *line,
            RuntimeError::WrongTypesForAddition { line } => *line,
            RuntimeError::DivisionByZero { line } => *line,
            RuntimeError::NotCallable { line } => *line,
            RuntimeError::ArityMismatch { line, .. } => *line,
        }
    }
}

impl From<RuntimeError> for LineError {
    fn from(err: RuntimeError) -> Self {
        let line = err.line();
        LineError::new(line, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_line_error_with_matching_line() {
        let err = RuntimeError::DivisionByZero { line: 9 };
        let line_err: LineError = err.into();
        assert_eq!(line_err.line, 9);
        assert_eq!(line_err.message, "Cannot divide by zero");
    }
}
