//! Statement evaluation.

use loxc_par::Stmt;

use super::Interpreter;
use crate::error::RuntimeError;
use crate::value::Value;

impl Interpreter {
    pub(crate) fn execute(&mut self, stmt: &Stmt) -> Result<(), RuntimeError> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(())
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                println!("{value}");
                Ok(())
            }
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.environment.borrow_mut().define(name.lexeme.clone(), value);
                Ok(())
            }
            Stmt::Block(statements) => self.execute_block(statements),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(())
                }
            }
            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    self.execute(body)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loxc_lex::Lexer;
    use loxc_par::Parser;
    use loxc_util::Handler;

    fn run(source: &str) -> Result<Interpreter, RuntimeError> {
        let handler = Handler::new();
        let tokens = Lexer::new(source, &handler).tokenize();
        let stmts = Parser::new(tokens, &handler).parse();
        let mut interp = Interpreter::new();
        interp.interpret(&stmts)?;
        Ok(interp)
    }

    fn lookup(interp: &Interpreter, name: &str) -> Option<Value> {
        interp.environment.borrow().get(name)
    }

    #[test]
    fn block_scoping_does_not_leak_outward() {
        let interp = run(
            r#"
            var a = 1;
            { var a = 2; }
            "#,
        )
        .unwrap();
        assert!(matches!(lookup(&interp, "a"), Some(Value::Number(n)) if n == 1.0));
    }

    #[test]
    fn while_loop_increments_until_condition_fails() {
        let interp = run("var i = 0; while (i < 3) { i = i + 1; }").unwrap();
        assert!(matches!(lookup(&interp, "i"), Some(Value::Number(n)) if n == 3.0));
    }

    #[test]
    fn var_without_initializer_binds_nil() {
        let interp = run("var x;").unwrap();
        assert!(matches!(lookup(&interp, "x"), Some(Value::Nil)));
    }

    #[test]
    fn redefining_a_name_in_the_same_scope_overwrites() {
        let interp = run("var x = 1; var x = 2;").unwrap();
        assert!(matches!(lookup(&interp, "x"), Some(Value::Number(n)) if n == 2.0));
    }

    #[test]
    fn if_without_else_skips_silently_when_false() {
        assert!(run("if (false) print 1;").is_ok());
    }

    #[test]
    fn block_restores_environment_even_after_a_runtime_error() {
        let handler = Handler::new();
        let tokens = Lexer::new("var a = 1; { var a = 2; a = 1 / 0; }", &handler).tokenize();
        let stmts = Parser::new(tokens, &handler).parse();
        let mut interp = Interpreter::new();
        assert!(interp.interpret(&stmts).is_err());
        // Outer `a` must be untouched and the outer scope restored, not left
        // pointing at the dead inner scope.
        assert!(matches!(lookup(&interp, "a"), Some(Value::Number(n)) if n == 1.0));
    }
}
