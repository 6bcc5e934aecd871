use crate::{
    ast::FoldOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        value::Value,
    },
};

impl Environment {
    /// Evaluates a reduce or scan operation on a value.
    ///
    /// Supported operators:
    /// - `SumReduce` (`+/`): left fold of `+` over the elements, starting
    ///   from `0`.
    /// - `ProductReduce` (`*/`): left fold of `*`, starting from `1`.
    /// - `SumScan` (`+\`): vector of running totals, same length as the
    ///   operand.
    /// - `ProductScan` (`*\`): vector of running products.
    ///
    /// Every fold is the identity function on a scalar operand.
    ///
    /// # Parameters
    /// - `op`: Fold operator.
    /// - `value`: Input value.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use aplet::{
    ///     ast::FoldOperator,
    ///     interpreter::{evaluator::core::Environment, value::Value},
    /// };
    ///
    /// let v = Value::Vector(vec![1, 2, 3, 4]);
    ///
    /// let total = Environment::eval_fold(FoldOperator::SumReduce, &v).unwrap();
    /// assert_eq!(total, Value::Int(10));
    ///
    /// let running = Environment::eval_fold(FoldOperator::SumScan, &v).unwrap();
    /// assert_eq!(running, Value::Vector(vec![1, 3, 6, 10]));
    /// ```
    ///
    /// # Errors
    /// Returns `RuntimeError::Overflow` if the fold overflows `i64`.
    pub fn eval_fold(op: FoldOperator, value: &Value) -> EvalResult<Value> {
        let Value::Vector(elements) = value else {
            return Ok(value.clone());
        };

        match op {
            FoldOperator::SumReduce => reduce(elements, 0, i64::checked_add).map(Value::Int),
            FoldOperator::ProductReduce => reduce(elements, 1, i64::checked_mul).map(Value::Int),
            FoldOperator::SumScan => scan(elements, 0, i64::checked_add).map(Value::Vector),
            FoldOperator::ProductScan => scan(elements, 1, i64::checked_mul).map(Value::Vector),
        }
    }
}

/// Left-folds `op` over `elements` starting from `identity`.
fn reduce(elements: &[i64], identity: i64, op: fn(i64, i64) -> Option<i64>) -> EvalResult<i64> {
    let mut acc = identity;
    for &element in elements {
        acc = op(acc, element).ok_or(RuntimeError::Overflow)?;
    }

    Ok(acc)
}

/// Like [`reduce`], but collects the accumulator after every element.
fn scan(elements: &[i64],
        identity: i64,
        op: fn(i64, i64) -> Option<i64>)
        -> EvalResult<Vec<i64>> {
    let mut acc = identity;
    let mut running = Vec::with_capacity(elements.len());

    for &element in elements {
        acc = op(acc, element).ok_or(RuntimeError::Overflow)?;
        running.push(acc);
    }

    Ok(running)
}
