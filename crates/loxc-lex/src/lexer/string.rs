//! String literal scanning.

use loxc_util::Level;

use super::core::Lexer;
use crate::error::LexError;
use crate::token::{Literal, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Scans to the closing `"`, tracking embedded newlines. Reports an
    /// unterminated-string error and emits no token if end of input is
    /// reached first.
    pub(super) fn scan_string(&mut self, start: usize, line: u32) -> Option<Token> {
        while self.cursor().current() != '"' && !self.cursor().is_at_end() {
            self.cursor().advance();
        }

        if self.cursor().is_at_end() {
            let err = LexError::UnterminatedString { line };
            self.handler().report(Level::Error, err.to_string(), line);
            return None;
        }

        // Closing quote.
        self.cursor().advance();

        let lexeme = self.cursor().slice_from(start).to_string();
        let contents = lexeme[1..lexeme.len() - 1].to_string();
        Some(Lexer::token(
            TokenKind::String,
            &lexeme,
            Some(Literal::Str(contents)),
            line,
        ))
    }
}
