use std::collections::HashMap;

use crate::{ast::Expr, error::RuntimeError, interpreter::value::Value};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the interpreter's variable bindings.
///
/// This struct holds the mutable name-to-value table consulted by variable
/// references and updated by assignments.
///
/// ## Usage
///
/// `Environment` is created once by whatever hosts the interpreter loop and
/// passed by reference into
/// [`evaluate_line`](crate::evaluate_line) for every line. It is mutated
/// only by a successful assignment; a failed parse or evaluation leaves it
/// untouched.
pub struct Environment {
    variables: HashMap<String, Value>,
}

#[allow(clippy::new_without_default)]
impl Environment {
    /// Creates a new environment with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new() }
    }

    /// Looks up the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn is_bound(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator dispatches based on expression variant: literals evaluate
    /// to themselves, variable references are looked up, assignments resolve
    /// their right-hand side fully before committing the binding, and
    /// operator applications are routed into the operator library.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] for references to unbound variables,
    /// operand shape mismatches, or overflow.
    ///
    /// # Example
    /// ```
    /// use aplet::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Environment, value::Value},
    /// };
    ///
    /// let mut env = Environment::new();
    /// let expr = Expr::Assignment { name:  "x".to_string(),
    ///                               value: Box::new(Expr::Literal { value: Value::Int(5) }), };
    ///
    /// assert_eq!(env.eval(&expr).unwrap(), Value::Int(5));
    /// assert_eq!(env.get("x"), Some(&Value::Int(5)));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(value.clone()),
            Expr::Variable { name } => {
                self.get(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone() })
            },
            Expr::Assignment { name, value } => {
                let value = self.eval(value)?;
                self.define(name.clone(), value.clone());
                Ok(value)
            },
            Expr::Unary { op, operand } => {
                let operand = self.eval(operand)?;
                Self::eval_fold(*op, &operand)
            },
            Expr::Binary { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right)
            },
        }
    }
}
