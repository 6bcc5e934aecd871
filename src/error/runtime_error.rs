use crate::ast::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// A binary operator was applied to vectors of different lengths.
    LengthMismatch {
        /// The operator being applied.
        op:    BinaryOperator,
        /// Length of the left operand.
        left:  usize,
        /// Length of the right operand.
        right: usize,
    },
    /// A binary operator was applied to a scalar and a vector.
    MixedOperands {
        /// The operator being applied.
        op: BinaryOperator,
    },
    /// Arithmetic operation overflowed.
    Overflow,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => {
                write!(f, "Unknown variable '{name}'.")
            },

            Self::LengthMismatch { op, left, right } => write!(f,
                                                               "Cannot apply '{op}' to vectors of length {left} and {right}."),

            Self::MixedOperands { op } => {
                write!(f, "Cannot apply '{op}' to a scalar and a vector.")
            },

            Self::Overflow => write!(f,
                                     "Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
