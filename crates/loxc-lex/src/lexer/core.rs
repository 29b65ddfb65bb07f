//! Core lexer: whitespace/comment skipping and per-character dispatch.

use loxc_util::{Handler, Level};

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Literal, Token, TokenKind};

/// Lexes a complete source string into a token stream.
///
/// Lex errors (unexpected character, unterminated string) are reported to
/// the [`Handler`] and do not stop lexing: the offending
/// construct simply emits no token and scanning resumes at the next
/// character.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    handler: &'a Handler,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
        }
    }

    /// Scans the entire source and returns its token stream, always
    /// terminated by exactly one [`TokenKind::Eof`].
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            match self.next_token() {
                Some(token) => {
                    let is_eof = token.kind == TokenKind::Eof;
                    tokens.push(token);
                    if is_eof {
                        break;
                    }
                }
                None => continue,
            }
        }
        tokens
    }

    /// Scans one token starting at the cursor, or `None` if the construct
    /// at the cursor produced a lex error and no token.
    fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace_and_comments();

        let start = self.cursor.position();
        let line = self.cursor.line();

        if self.cursor.is_at_end() {
            return Some(Token::eof(line));
        }

        let c = self.cursor.advance();
        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '+' => TokenKind::Plus,
            ';' => TokenKind::Semicolon,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '!' => {
                if self.cursor.advance_if('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                }
            }
            '=' => {
                if self.cursor.advance_if('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                }
            }
            '<' => {
                if self.cursor.advance_if('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                }
            }
            '>' => {
                if self.cursor.advance_if('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                }
            }
            '"' => return self.scan_string(start, line),
            c if c.is_ascii_digit() => return Some(self.scan_number(start, line)),
            c if c.is_ascii_alphabetic() => return Some(self.scan_identifier(start, line)),
            other => {
                let err = LexError::UnexpectedCharacter { character: other, line };
                self.handler.report(Level::Error, err.to_string(), line);
                return None;
            }
        };

        let lexeme = self.cursor.slice_from(start).to_string();
        Some(Token::new(kind, lexeme, None, line))
    }

    /// Discards whitespace, line comments (`//`), and nested block comments
    /// (`/* ... */`) until the cursor rests on the next real token or end of
    /// input.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.current() {
                ' ' | '\t' | '\r' | '\n' => {
                    self.cursor.advance();
                }
                '/' if self.cursor.peek(1) == '/' => {
                    while !self.cursor.is_at_end() && self.cursor.current() != '\n' {
                        self.cursor.advance();
                    }
                }
                '/' if self.cursor.peek(1) == '*' => {
                    self.skip_block_comment();
                }
                _ => break,
            }
        }
    }

    pub(crate) fn cursor(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    pub(crate) fn handler(&self) -> &'a Handler {
        self.handler
    }

    pub(crate) fn token(kind: TokenKind, lexeme: &str, literal: Option<Literal>, line: u32) -> Token {
        Token::new(kind, lexeme, literal, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> (Vec<Token>, Handler) {
        let handler = Handler::new();
        let tokens = Lexer::new(source, &handler).tokenize();
        (tokens, handler)
    }

    #[test]
    fn empty_source_yields_only_eof() {
        let (tokens, handler) = lex("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert!(!handler.has_errors());
    }

    #[test]
    fn single_and_double_char_operators() {
        let (tokens, _) = lex("! != = == < <= > >=");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Bang,
                TokenKind::BangEqual,
                TokenKind::Equal,
                TokenKind::EqualEqual,
                TokenKind::Less,
                TokenKind::LessEqual,
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn line_comment_is_discarded() {
        let (tokens, _) = lex("print 1; // trailing comment\nprint 2;");
        assert!(tokens.iter().all(|t| t.lexeme != "trailing"));
        assert_eq!(tokens.last().unwrap().line, 2);
    }

    #[test]
    fn unexpected_character_reports_error_and_is_skipped() {
        let (tokens, handler) = lex("var x = @;");
        assert!(handler.has_errors());
        // every other token around the bad character still lexes
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Var));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Semicolon));
    }

    #[test]
    fn newlines_increment_line_and_lines_are_monotonic() {
        let (tokens, _) = lex("1\n2\n3");
        let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();
        assert!(lines.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*lines.last().unwrap(), 3);
    }
}
