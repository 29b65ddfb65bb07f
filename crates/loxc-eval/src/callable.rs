//! The callable abstraction and its sole built-in instance, `clock`.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::RuntimeError;
use crate::interpreter::Interpreter;
use crate::value::Value;

/// An object exposing an arity and a call operation. No user-defined
/// function extends this today; only [`Clock`] does.
pub trait Callable {
    /// Number of arguments this callable accepts.
    fn arity(&self) -> usize;

    /// Invokes the callable. `arguments` has already been checked against
    /// [`Callable::arity`] by the caller.
    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Value>) -> Result<Value, RuntimeError>;

    /// A short name for error messages and `--debug`/`print` output.
    fn name(&self) -> &str;
}

/// The only built-in callable: arity 0,
/// returns a monotonically non-decreasing number of seconds since an
/// unspecified epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock;

impl Callable for Clock {
    fn arity(&self) -> usize {
        0
    }

    fn call(&self, _interpreter: &mut Interpreter, _arguments: Vec<Value>) -> Result<Value, RuntimeError> {
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs_f64();
        Ok(Value::Number(seconds))
    }

    fn name(&self) -> &str {
        "clock"
    }
}
