//! Lexer for the loxc tree-walking interpreter.
//!
//! [`Lexer::tokenize`] turns a complete source string into a [`Token`]
//! stream terminated by exactly one [`TokenKind::Eof`]. Lex errors
//! (unexpected characters, unterminated strings) are reported to a
//! [`loxc_util::Handler`] rather than raised, so one bad character never
//! prevents the rest of the source from lexing.

pub mod cursor;
pub mod error;
mod lexer;
pub mod token;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::{keyword, Literal, Token, TokenKind};
