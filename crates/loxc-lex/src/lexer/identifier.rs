//! Identifier and keyword scanning.

use super::core::Lexer;
use crate::token::{keyword, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Scans a maximal run of alphanumerics starting at an already-consumed
    /// alphabetic character, then classifies it as a keyword or a plain
    /// IDENTIFIER.
    pub(super) fn scan_identifier(&mut self, start: usize, line: u32) -> Token {
        while self.cursor().current().is_ascii_alphanumeric() {
            self.cursor().advance();
        }

        let lexeme = self.cursor().slice_from(start).to_string();
        let kind = keyword(&lexeme).unwrap_or(TokenKind::Identifier);
        Lexer::token(kind, &lexeme, None, line)
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
    fn plain_identifier() {
        let tokens = lex("myVar");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "myVar");
    }

    #[test]
    fn keyword_lexemes_get_keyword_kinds() {
        let tokens = lex("var fun if else while for class return this super and or true false nil print");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Var,
                TokenKind::Fun,
                TokenKind::If,
                TokenKind::Else,
                TokenKind::While,
                TokenKind::For,
                TokenKind::Class,
                TokenKind::Return,
                TokenKind::This,
                TokenKind::Super,
                TokenKind::And,
                TokenKind::Or,
                TokenKind::True,
                TokenKind::False,
                TokenKind::Nil,
                TokenKind::Print,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn identifier_that_merely_starts_with_a_keyword_is_not_a_keyword() {
        let tokens = lex("printer");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "printer");
    }

    #[test]
    fn alphanumeric_continuation() {
        let tokens = lex("a1b2c3");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "a1b2c3");
    }
}
