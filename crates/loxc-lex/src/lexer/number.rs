//! Numeric literal scanning.

use super::core::Lexer;
use crate::token::{Literal, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Scans an integer part, then an optional `.` followed by at least one
    /// digit, then any remaining digits. A `.` not followed by a digit is
    /// left unconsumed so it lexes as its own DOT token.
    pub(super) fn scan_number(&mut self, start: usize, line: u32) -> Token {
        while self.cursor().current().is_ascii_digit() {
            self.cursor().advance();
        }

        if self.cursor().current() == '.' && self.cursor().peek(1).is_ascii_digit() {
            self.cursor().advance(); // consume '.'
            while self.cursor().current().is_ascii_digit() {
                self.cursor().advance();
            }
        }

        let lexeme = self.cursor().slice_from(start).to_string();
        let value = match lexeme.parse::<f64>() {
            Ok(value) => value,
            Err(_) => 0.0,
        };
        Lexer::token(TokenKind::Number, &lexeme, Some(Literal::Number(value)), line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loxc_util::Handler;

    fn lex(source: &str) -> Vec<Token> {
        let handler = Handler::new();
        Lexer::new(source, &handler).tokenize()
    }

    #[test]
    fn integer_literal() {
        let tokens = lex("42");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].literal, Some(Literal::Number(42.0)));
    }

    #[test]
    fn decimal_literal() {
        let tokens = lex("3.14");
        assert_eq!(tokens[0].literal, Some(Literal::Number(3.14)));
        assert_eq!(tokens.len(), 2); // number + eof, no stray DOT
    }

    #[test]
    fn trailing_dot_is_not_part_of_the_number() {
        let tokens = lex("42.");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].literal, Some(Literal::Number(42.0)));
        assert_eq!(tokens[1].kind, TokenKind::Dot);
    }

    #[test]
    fn method_call_style_dot_after_number_is_a_separate_token() {
        // "1.method" style text: '.' followed by a letter, not a digit.
        let tokens = lex("1.x");
        assert_eq!(tokens[0].literal, Some(Literal::Number(1.0)));
        assert_eq!(tokens[1].kind, TokenKind::Dot);
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
    }
}
