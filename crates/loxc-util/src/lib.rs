//! Shared span, diagnostic, and error types used by every phase of the
//! loxc interpreter (lexer, parser, evaluator, and driver).
//!
//! Nothing in this crate knows about tokens, grammar, or values; it exists
//! so those concerns don't each reinvent source-location tracking and
//! error reporting.

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use error::LineError;
pub use span::Span;
