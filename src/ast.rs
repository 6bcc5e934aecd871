use crate::interpreter::value::Value;

/// An abstract syntax tree (AST) node representing one parsed line.
///
/// `Expr` covers every construct the grammar can produce: resolved literals,
/// variable references, assignments, reduce/scan applications, and binary
/// operator applications. Left-associative operator chains are represented as
/// left-leaning `Binary` trees built incrementally by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A resolved literal value (scalar or vector).
    Literal {
        /// The constant value.
        value: Value,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A variable assignment binding a name to an expression.
    ///
    /// Evaluating an assignment resolves the right-hand side fully, commits
    /// the binding, and yields the stored value. A failing right-hand side
    /// leaves the environment untouched.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Box<Self>,
    },
    /// A reduce or scan application (e.g. `+/ 1 2 3`).
    Unary {
        /// The fold operator to apply.
        op:      FoldOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operation (addition, subtraction, etc.).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

/// Represents a binary operator.
///
/// All binary operators bind with equal, left-to-right precedence and apply
/// element-wise when both operands are vectors of equal length.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Exponentiation (`**`)
    Pow,
    /// Minimum (`min`)
    Min,
    /// Maximum (`max`)
    Max,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Pow => "**",
            Self::Min => "min",
            Self::Max => "max",
        };
        write!(f, "{operator}")
    }
}

/// Represents a reduce or scan ("fold"/"running-fold") operator.
///
/// Fold operators are unary: a reduce collapses a vector to a scalar by
/// left-folding from the operator's identity, a scan produces the vector of
/// running folds. Applied to a scalar, every fold is the identity function.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FoldOperator {
    /// Sum reduction (`+/`)
    SumReduce,
    /// Running-sum scan (`+\`)
    SumScan,
    /// Product reduction (`*/`)
    ProductReduce,
    /// Running-product scan (`*\`)
    ProductScan,
}

impl std::fmt::Display for FoldOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::SumReduce => "+/",
            Self::SumScan => "+\\",
            Self::ProductReduce => "*/",
            Self::ProductScan => "*\\",
        };
        write!(f, "{operator}")
    }
}
