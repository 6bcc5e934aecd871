#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer could not classify part of the input.
    UnrecognizedToken {
        /// The offending slice of the input.
        token: String,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput,
    /// A `-` in literal position was not immediately followed by a digit.
    DanglingMinus,
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
    },
    /// An operator was recognized by the lexer but has no semantics.
    UnsupportedOperator {
        /// The operator symbol.
        token: String,
    },
    /// Tried to retract more tokens than the cursor's buffer holds.
    RetractionExhausted,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedToken { token } => {
                write!(f, "Unrecognized token: {token}.")
            },

            Self::UnexpectedToken { token } => {
                write!(f, "Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),

            Self::DanglingMinus => {
                write!(f, "Expected a digit immediately after '-'.")
            },

            Self::UnexpectedTrailingTokens { token } => {
                write!(f, "Extra tokens after expression. Check your input: {token}")
            },

            Self::UnsupportedOperator { token } => {
                write!(f, "Operator '{token}' is not supported.")
            },

            Self::RetractionExhausted => {
                write!(f, "Token retraction buffer exhausted.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
