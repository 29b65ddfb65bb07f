//! Expression grammar productions, precedence climbing from lowest (`assignment`) to highest
//! (`primary`).

use loxc_lex::{Literal as TokenLiteral, TokenKind};

use crate::ast::{Expr, LitValue};
use crate::error::ParseError;
use crate::Parser;

impl<'a> Parser<'a> {
    /// `expression := assignment`
    pub(crate) fn expression(&mut self) -> Result<Expr, ParseError> {
        self.assignment()
    }

    /// `assignment := IDENT "=" assignment | logicOr`
    ///
    /// Parses the left side as an ordinary expression first; only if it
    /// turns out to be a [`Expr::Variable`] does an `=` that follows become
    /// an assignment. Anything else
    /// on the left of `=` is an "Invalid assignment target" error that does
    /// not consume further tokens, since the left side already parsed fine
    /// as an expression in its own right.
    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.or_expr()?;

        if self.match_token(&[TokenKind::Equal]) {
            let equals_line = self.previous().line;
            let value = self.assignment()?;

            if let Expr::Variable(name) = expr {
                return Ok(Expr::Assign {
                    name,
                    value: Box::new(value),
                });
            }

            self.report_invalid_assignment_target(equals_line);
            return Err(ParseError::InvalidAssignmentTarget { line: equals_line });
        }

        Ok(expr)
    }

    /// `logicOr := logicAnd ( "or" logicAnd )*`
    fn or_expr(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.and_expr()?;

        while self.match_token(&[TokenKind::Or]) {
            let operator = self.previous();
            let right = self.and_expr()?;
            expr = Expr::Logical {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// `logicAnd := equality ( "and" equality )*`
    fn and_expr(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.equality()?;

        while self.match_token(&[TokenKind::And]) {
            let operator = self.previous();
            let right = self.equality()?;
            expr = Expr::Logical {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// `equality := comparison ( ("!="|"==") comparison )*`
    fn equality(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.comparison()?;

        while self.match_token(&[TokenKind::BangEqual, TokenKind::EqualEqual]) {
            let operator = self.previous();
            let right = self.comparison()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// `comparison := addition ( ("<"|"<="|">"|">=") addition )*`
    fn comparison(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.addition()?;

        while self.match_token(&[
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ]) {
            let operator = self.previous();
            let right = self.addition()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// `addition := multiplication ( ("+"|"-") multiplication )*`
    fn addition(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.multiplication()?;

        while self.match_token(&[TokenKind::Plus, TokenKind::Minus]) {
            let operator = self.previous();
            let right = self.multiplication()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// `multiplication := unary ( ("*"|"/") unary )*`
    fn multiplication(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.unary()?;

        while self.match_token(&[TokenKind::Star, TokenKind::Slash]) {
            let operator = self.previous();
            let right = self.unary()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// `unary := ("!"|"-") unary | call`
    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.match_token(&[TokenKind::Bang, TokenKind::Minus]) {
            let operator = self.previous();
            let operand = self.unary()?;
            return Ok(Expr::Unary {
                operator,
                operand: Box::new(operand),
            });
        }

        self.call()
    }

    /// `call := primary ( "(" arguments? ")" )*`
    fn call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;

        loop {
            if self.match_token(&[TokenKind::LeftParen]) {
                expr = self.finish_call(expr)?;
            } else {
                break;
            }
        }

        Ok(expr)
    }

    /// `arguments := expression ( "," expression )*`
    fn finish_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let mut arguments = Vec::new();

        if !self.check(TokenKind::RightParen) {
            arguments.push(self.expression()?);
            while self.match_token(&[TokenKind::Comma]) {
                arguments.push(self.expression()?);
            }
        }

        let paren = self.consume(TokenKind::RightParen, "Expect ')' after arguments.")?;

        Ok(Expr::Call {
            callee: Box::new(callee),
            paren,
            arguments,
        })
    }

    /// `primary := "true" | "false" | "nil" | NUMBER | STRING | IDENT
    ///           | "(" expression ")"`
    fn primary(&mut self) -> Result<Expr, ParseError> {
        if self.match_token(&[TokenKind::False]) {
            return Ok(Expr::Literal(LitValue::Bool(false)));
        }
        if self.match_token(&[TokenKind::True]) {
            return Ok(Expr::Literal(LitValue::Bool(true)));
        }
        if self.match_token(&[TokenKind::Nil]) {
            return Ok(Expr::Literal(LitValue::Nil));
        }
        if self.match_token(&[TokenKind::Number]) {
            let value = match self.previous().literal {
                Some(TokenLiteral::Number(n)) => n,
                _ => unreachable!("NUMBER token always carries a Literal::Number"),
            };
            return Ok(Expr::Literal(LitValue::Number(value)));
        }
        if self.match_token(&[TokenKind::String]) {
            let value = match self.previous().literal {
                Some(TokenLiteral::Str(s)) => s,
                _ => unreachable!("STRING token always carries a Literal::Str"),
            };
            return Ok(Expr::Literal(LitValue::Str(value)));
        }
        if self.match_token(&[TokenKind::Identifier]) {
            return Ok(Expr::Variable(self.previous()));
        }
        if self.match_token(&[TokenKind::LeftParen]) {
            let expr = self.expression()?;
            self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
            return Ok(Expr::Grouping(Box::new(expr)));
        }

        Err(self.error("Expect expression."))
    }
}
