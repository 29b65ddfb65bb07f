//! Tree-walking evaluator for the loxc interpreter.
//!
//! [`Interpreter`] walks a [`loxc_par::Stmt`] list against a lexically
//! scoped [`environment::Environment`] chain. [`value::Value`] is the
//! runtime tagged union; [`callable::Callable`] is the
//! arity+call abstraction for function values, with `clock` as its only
//! built-in instance.

pub mod callable;
pub mod environment;
pub mod error;
mod interpreter;
pub mod value;

pub use callable::{Callable, Clock};
pub use environment::Environment;
pub use error::RuntimeError;
pub use interpreter::Interpreter;
pub use value::Value;
