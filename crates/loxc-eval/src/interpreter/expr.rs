//! Expression evaluation.

use std::rc::Rc;

use loxc_lex::TokenKind;
use loxc_par::{Expr, LitValue};

use super::Interpreter;
use crate::error::RuntimeError;
use crate::value::Value;

impl Interpreter {
    pub(crate) fn evaluate(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(lit) => Ok(literal_value(lit)),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Variable(name) => self
                .environment
                .borrow()
                .get(&name.lexeme)
                .ok_or_else(|| RuntimeError::UndefinedVariable {
                    name: name.lexeme.clone(),
                    line: name.line,
                }),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                let assigned = self.environment.borrow_mut().assign(&name.lexeme, value.clone());
                if assigned {
                    Ok(value)
                } else {
                    Err(RuntimeError::UndefinedVariable {
                        name: name.lexeme.clone(),
                        line: name.line,
                    })
                }
            }
            Expr::Unary { operator, operand } => self.eval_unary(operator, operand),
            Expr::Binary { left, operator, right } => self.eval_binary(left, operator, right),
            Expr::Logical { left, operator, right } => self.eval_logical(left, operator, right),
            Expr::Call {
                callee,
                paren,
                arguments,
            } => self.eval_call(callee, paren, arguments),
        }
    }

    /// `!v` and `-v`.
    fn eval_unary(
        &mut self,
        operator: &loxc_lex::Token,
        operand: &Expr,
    ) -> Result<Value, RuntimeError> {
        let right = self.evaluate(operand)?;

        match operator.kind {
            TokenKind::Bang => Ok(Value::Bool(!right.is_truthy())),
            TokenKind::Minus => match right {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::OperandMustBeNumber { line: operator.line }),
            },
            other => unreachable!("Unary operator is always BANG or MINUS, got {other:?}"),
        }
    }

    /// Evaluates both sides left-to-right, then dispatches on operator kind.
    fn eval_binary(
        &mut self,
        left: &Expr,
        operator: &loxc_lex::Token,
        right: &Expr,
    ) -> Result<Value, RuntimeError> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;
        let line = operator.line;

        match operator.kind {
            TokenKind::BangEqual => Ok(Value::Bool(!left.equals(&right))),
            TokenKind::EqualEqual => Ok(Value::Bool(left.equals(&right))),
            TokenKind::Greater => numeric_cmp(&left, &right, line, |a, b| a > b),
            TokenKind::GreaterEqual => numeric_cmp(&left, &right, line, |a, b| a >= b),
            TokenKind::Less => numeric_cmp(&left, &right, line, |a, b| a < b),
            TokenKind::LessEqual => numeric_cmp(&left, &right, line, |a, b| a <= b),
            TokenKind::Minus => numeric_op(&left, &right, line, |a, b| a - b),
            TokenKind::Star => numeric_op(&left, &right, line, |a, b| a * b),
            TokenKind::Slash => {
                let (a, b) = as_numbers(&left, &right, line)?;
                if b == 0.0 {
                    Err(RuntimeError::DivisionByZero { line })
                } else {
                    Ok(Value::Number(a / b))
                }
            }
            TokenKind::Plus => match (&left, &right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::Str(a), Value::Str(b)) => {
                    Ok(Value::Str(Rc::from(format!("{a}{b}"))))
                }
                _ => Err(RuntimeError::WrongTypesForAddition { line }),
            },
            other => unreachable!("Binary operator is always a comparison/equality/arithmetic kind, got {other:?}"),
        }
    }

    /// Short-circuiting `or`/`and`.
    fn eval_logical(
        &mut self,
        left: &Expr,
        operator: &loxc_lex::Token,
        right: &Expr,
    ) -> Result<Value, RuntimeError> {
        let left = self.evaluate(left)?;

        match operator.kind {
            TokenKind::Or => {
                if left.is_truthy() {
                    Ok(left)
                } else {
                    self.evaluate(right)
                }
            }
            TokenKind::And => {
                if !left.is_truthy() {
                    Ok(left)
                } else {
                    self.evaluate(right)
                }
            }
            other => unreachable!("Logical operator is always AND or OR, got {other:?}"),
        }
    }

    /// Evaluates the callee then arguments left-to-right, checks callability
    /// and arity, then invokes.
    fn eval_call(
        &mut self,
        callee: &Expr,
        paren: &loxc_lex::Token,
        arguments: &[Expr],
    ) -> Result<Value, RuntimeError> {
        let callee = self.evaluate(callee)?;

        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.evaluate(argument)?);
        }

        let Value::Callable(callable) = callee else {
            return Err(RuntimeError::NotCallable { line: paren.line });
        };

        if args.len() != callable.arity() {
            return Err(RuntimeError::ArityMismatch {
                expected: callable.arity(),
                got: args.len(),
                line: paren.line,
            });
        }

        callable.call(self, args)
    }
}

fn literal_value(lit: &LitValue) -> Value {
    match lit {
        LitValue::Nil => Value::Nil,
        LitValue::Bool(b) => Value::Bool(*b),
        LitValue::Number(n) => Value::Number(*n),
        LitValue::Str(s) => Value::Str(Rc::from(s.as_str())),
    }
}

fn as_numbers(left: &Value, right: &Value, line: u32) -> Result<(f64, f64), RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(RuntimeError::OperandsMustBeNumbers { line }),
    }
}

fn numeric_op(
    left: &Value,
    right: &Value,
    line: u32,
    op: impl FnOnce(f64, f64) -> f64,
) -> Result<Value, RuntimeError> {
    let (a, b) = as_numbers(left, right, line)?;
    Ok(Value::Number(op(a, b)))
}

fn numeric_cmp(
    left: &Value,
    right: &Value,
    line: u32,
    op: impl FnOnce(f64, f64) -> bool,
) -> Result<Value, RuntimeError> {
    let (a, b) = as_numbers(left, right, line)?;
    Ok(Value::Bool(op(a, b)))
}
