use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        value::Value,
    },
};

impl Environment {
    /// Evaluates a binary operation between two values.
    ///
    /// If both operands are scalars the operator applies directly. If both
    /// are vectors of equal length it applies element-wise, producing a
    /// vector of the same length. A scalar mixed with a vector, or two
    /// vectors of different lengths, is an error; operands are never
    /// coerced.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use aplet::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Environment, value::Value},
    /// };
    ///
    /// let left = Value::Vector(vec![1, 2, 3]);
    /// let right = Value::Vector(vec![10, 20, 30]);
    ///
    /// let result = Environment::eval_binary(BinaryOperator::Add, &left, &right);
    /// assert_eq!(result.unwrap(), Value::Vector(vec![11, 22, 33]));
    /// ```
    ///
    /// # Errors
    /// - `RuntimeError::LengthMismatch` for vectors of different lengths.
    /// - `RuntimeError::MixedOperands` for a scalar/vector combination.
    /// - `RuntimeError::Overflow` if the arithmetic overflows `i64`.
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        match (left, right) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(scalar_op(op, *a, *b)?)),

            (Value::Vector(a), Value::Vector(b)) => {
                if a.len() != b.len() {
                    return Err(RuntimeError::LengthMismatch { op,
                                                              left:  a.len(),
                                                              right: b.len(), });
                }

                let elements = a.iter()
                                .zip(b.iter())
                                .map(|(&x, &y)| scalar_op(op, x, y))
                                .collect::<EvalResult<Vec<i64>>>()?;
                Ok(Value::Vector(elements))
            },

            _ => Err(RuntimeError::MixedOperands { op }),
        }
    }
}

/// Applies `op` to two scalars.
fn scalar_op(op: BinaryOperator, a: i64, b: i64) -> EvalResult<i64> {
    match op {
        BinaryOperator::Add => a.checked_add(b).ok_or(RuntimeError::Overflow),
        BinaryOperator::Sub => a.checked_sub(b).ok_or(RuntimeError::Overflow),
        BinaryOperator::Mul => a.checked_mul(b).ok_or(RuntimeError::Overflow),
        BinaryOperator::Pow => Ok(pow(a, b)),
        BinaryOperator::Min => Ok(a.min(b)),
        BinaryOperator::Max => Ok(a.max(b)),
    }
}

/// `**` goes through floating-point exponentiation and truncates back to an
/// integer, precision loss for large operands included.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn pow(a: i64, b: i64) -> i64 {
    (a as f64).powf(b as f64) as i64
}
