//! Nested block comment scanning.
//!
//! Tracks nesting depth with a plain counter rather than recursing, so
//! pathologically nested comments can't grow the call stack.

use super::core::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes a `/* ... */` block comment, tracking nesting to arbitrary
    /// depth and counting embedded newlines. Called with the cursor sitting
    /// on the opening `/`. An unterminated block comment runs quietly to
    /// end of input — no separate diagnostic for this case; the source
    /// simply ends mid-comment.
    pub(super) fn skip_block_comment(&mut self) {
        self.cursor().advance(); // '/'
        self.cursor().advance(); // '*'
        let mut depth: u32 = 1;

        while depth > 0 && !self.cursor().is_at_end() {
            if self.cursor().current() == '/' && self.cursor().peek(1) == '*' {
                self.cursor().advance();
                self.cursor().advance();
                depth += 1;
            } else if self.cursor().current() == '*' && self.cursor().peek(1) == '/' {
                self.cursor().advance();
                self.cursor().advance();
                depth -= 1;
            } else {
                self.cursor().advance();
            }
        }
    }
}
