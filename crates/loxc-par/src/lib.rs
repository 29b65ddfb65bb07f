//! Recursive-descent parser for the loxc tree-walking interpreter.
//!
//! [`Parser::parse`] consumes a complete [`loxc_lex::Token`] stream and
//! produces a list of [`Stmt`] nodes, precedence-climbing through the
//! expression grammar and desugaring `for` into `while` as it goes. A parse
//! error never aborts the whole run: [`Parser::synchronize`] discards the
//! offending declaration and resumes at the next statement boundary.
//!
//! Grammar productions are split by concern: [`expr`] for the expression
//! grammar (`assignment` down to `primary`), [`stmt`] for the statement
//! grammar (`declaration` down to `exprStmt`), [`ast`] for the node types
//! they build.

pub mod ast;
pub mod error;
mod expr;
mod stmt;

pub use ast::{Expr, LitValue, Stmt};
pub use error::ParseError;

use loxc_lex::{Token, TokenKind};
use loxc_util::{Handler, Level};

/// Consumes a token stream and builds the statement list it represents.
///
/// Holds no copy of the source text; every diagnostic carries only the
/// token's line number.
pub struct Parser<'a> {
    tokens: Vec<Token>,
    current: usize,
    handler: &'a Handler,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, handler: &'a Handler) -> Self {
        Self {
            tokens,
            current: 0,
            handler,
        }
    }

    /// Parses every top-level declaration, synchronizing past errors so one
    /// bad statement never prevents the rest of the program from parsing.
    /// Always returns at least an empty list.
    pub fn parse(mut self) -> Vec<Stmt> {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        statements
    }

    // ---- token stream helpers ----

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// If the current token matches any of `kinds`, consumes it and returns
    /// true; otherwise leaves the cursor untouched.
    pub(crate) fn match_token(&mut self, kinds: &[TokenKind]) -> bool {
        for &kind in kinds {
            if self.check(kind) {
                self.advance();
                return true;
            }
        }
        false
    }

    pub(crate) fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    pub(crate) fn peek(&self) -> Token {
        self.tokens[self.current].clone()
    }

    pub(crate) fn previous(&self) -> Token {
        self.tokens[self.current - 1].clone()
    }

    /// Consumes the current token if it has kind `kind`, else reports and
    /// returns a [`ParseError`].
    pub(crate) fn consume(&mut self, kind: TokenKind, message: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error(message))
        }
    }

    /// Builds (and reports to the [`Handler`]) a [`ParseError`] at the
    /// current token's line.
    pub(crate) fn error(&self, message: impl Into<String>) -> ParseError {
        let message = message.into();
        let line = self.peek().line;
        self.handler.report(Level::Error, message.clone(), line);
        ParseError::MissingToken { message, line }
    }

    /// Reports "Invalid assignment target." at a specific line, used where the offending token is the
    /// `=` already consumed rather than the current one.
    pub(crate) fn report_invalid_assignment_target(&self, line: u32) {
        self.handler
            .report(Level::Error, "Invalid assignment target.", line);
    }

    /// Advances to the next statement boundary after a parse error: one
    /// token forward unconditionally, then until the previous token was `;`
    /// or the next one starts a new statement.
    pub(crate) fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }

            match self.peek().kind {
                TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Var
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return => return,
                _ => {}
            }

            self.advance();
        }
    }
}
