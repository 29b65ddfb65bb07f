//! Lexically nested variable bindings.
//!
//! Presence is tested by key membership rather than by whether the stored
//! value is falsy, so `var x;` followed by `print x;` finds `x` bound to
//! nil rather than reporting it undefined.
//!
//! An environment chain is built at block entry and torn down at block
//! exit. The enclosing link is shared (`Rc<RefCell<Environment>>`) rather
//! than borrowed: a tree-walker that must keep evaluating — and unwinding
//! through — nested blocks can't express "parent outlives child" with a
//! plain `&` borrow once an inner block can error partway through, so
//! shared ownership with checked borrows stands in for a compile-time-proven
//! non-aliasing guarantee.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::value::Value;

/// A single scope: its own bindings plus an optional link to the scope it
/// is nested inside.
pub struct Environment {
    values: HashMap<String, Value>,
    enclosing: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// Creates a fresh, empty scope, optionally nested inside `enclosing`.
    /// Pass `None` for the global environment.
    pub fn new(enclosing: Option<Rc<RefCell<Environment>>>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            values: HashMap::new(),
            enclosing,
        }))
    }

    /// `define(name, value)`: unconditionally sets the binding in this
    /// scope. Re-defining an existing name in the same scope overwrites it.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// `get(name)`: the value bound to `name` in the nearest enclosing scope
    /// that defines it, or `None` if no scope in the chain does. Tests key membership, not truthiness, so a binding to `nil` is
    /// found and returned as `nil` rather than treated as absent.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.values.get(name) {
            return Some(value.clone());
        }

        self.enclosing
            .as_ref()
            .and_then(|parent| parent.borrow().get(name))
    }

    /// `assign(name, value)`: updates the binding in the nearest enclosing
    /// scope that already defines `name`. Returns `false` (no scope in the
    /// chain defines it) rather than erroring itself; the caller turns that
    /// into a [`crate::error::RuntimeError`] with its own line info.
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        if self.values.contains_key(name) {
            self.values.insert(name.to_string(), value);
            return true;
        }

        match &self.enclosing {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_then_get_in_same_scope() {
        let env = Environment::new(None);
        env.borrow_mut().define("x", Value::Number(1.0));
        assert!(matches!(env.borrow().get("x"), Some(Value::Number(n)) if n == 1.0));
    }

    #[test]
    fn get_walks_up_the_enclosing_chain() {
        let global = Environment::new(None);
        global.borrow_mut().define("x", Value::Number(1.0));
        let inner = Environment::new(Some(Rc::clone(&global)));
        assert!(matches!(inner.borrow().get("x"), Some(Value::Number(n)) if n == 1.0));
    }

    #[test]
    fn get_returns_none_past_the_global_scope() {
        let global = Environment::new(None);
        assert!(global.borrow().get("nope").is_none());
    }

    #[test]
    fn binding_to_nil_is_present_not_absent() {
        let env = Environment::new(None);
        env.borrow_mut().define("x", Value::Nil);
        assert!(matches!(env.borrow().get("x"), Some(Value::Nil)));
    }

    #[test]
    fn inner_scope_shadows_outer_without_mutating_it() {
        let outer = Environment::new(None);
        outer.borrow_mut().define("a", Value::Number(1.0));
        let inner = Environment::new(Some(Rc::clone(&outer)));
        inner.borrow_mut().define("a", Value::Number(2.0));

        assert!(matches!(inner.borrow().get("a"), Some(Value::Number(n)) if n == 2.0));
        assert!(matches!(outer.borrow().get("a"), Some(Value::Number(n)) if n == 1.0));
    }

    #[test]
    fn assign_updates_nearest_defining_scope() {
        let outer = Environment::new(None);
        outer.borrow_mut().define("a", Value::Number(1.0));
        let inner = Environment::new(Some(Rc::clone(&outer)));

        assert!(inner.borrow_mut().assign("a", Value::Number(9.0)));
        assert!(matches!(outer.borrow().get("a"), Some(Value::Number(n)) if n == 9.0));
    }

    #[test]
    fn assign_to_undefined_name_fails() {
        let env = Environment::new(None);
        assert!(!env.borrow_mut().assign("nope", Value::Number(1.0)));
    }
}
