//! Tree-walking evaluator.
//!
//! [`Interpreter::interpret`] walks a statement list in order against a
//! lexically scoped environment chain, dispatching on AST node variant.
//! A single [`Interpreter`] persists across REPL lines so top-level
//! bindings survive between `interpret` calls; a runtime error aborts only
//! the current call.

mod expr;
mod stmt;

use std::cell::RefCell;
use std::rc::Rc;

use loxc_par::Stmt;

use crate::callable::Clock;
use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::value::Value;

pub struct Interpreter {
    /// The outermost scope, preseeded with `clock` and never replaced.
    globals: Rc<RefCell<Environment>>,
    /// The scope currently in effect; swapped for a fresh child scope on
    /// block entry and restored on block exit.
    environment: Rc<RefCell<Environment>>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Builds a fresh interpreter with `clock` bound in its global
    /// environment.
    pub fn new() -> Self {
        let globals = Environment::new(None);
        globals
            .borrow_mut()
            .define("clock", Value::Callable(Rc::new(Clock)));

        Self {
            environment: Rc::clone(&globals),
            globals,
        }
    }

    /// Evaluates every statement in order, stopping at the first runtime
    /// error. Bindings made
    /// before the failing statement remain visible to subsequent calls.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            self.execute(statement)?;
        }
        Ok(())
    }

    /// Runs `statements` in a fresh child scope, restoring the previous
    /// scope on every exit path — normal completion or a propagated runtime
    /// error.
    fn execute_block(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        let previous = Rc::clone(&self.environment);
        self.environment = Environment::new(Some(Rc::clone(&previous)));

        let result = (|| {
            for statement in statements {
                self.execute(statement)?;
            }
            Ok(())
        })();

        self.environment = previous;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loxc_lex::Lexer;
    use loxc_par::Parser;
    use loxc_util::Handler;

    fn run(source: &str) -> Result<(), RuntimeError> {
        let handler = Handler::new();
        let tokens = Lexer::new(source, &handler).tokenize();
        let stmts = Parser::new(tokens, &handler).parse();
        Interpreter::new().interpret(&stmts)
    }

    #[test]
    fn clock_is_preseeded_and_callable() {
        assert!(run("print clock() >= 0;").is_ok());
    }

    #[test]
    fn bindings_persist_across_separate_interpret_calls() {
        let handler = Handler::new();
        let mut interp = Interpreter::new();

        let tokens = Lexer::new("var x = 1;", &handler).tokenize();
        let stmts = Parser::new(tokens, &handler).parse();
        interp.interpret(&stmts).unwrap();

        let tokens = Lexer::new("print x;", &handler).tokenize();
        let stmts = Parser::new(tokens, &handler).parse();
        assert!(interp.interpret(&stmts).is_ok());
    }
}
