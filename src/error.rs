/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// input line. Parse errors include unrecognized characters, unexpected
/// tokens, a dangling minus sign, trailing tokens after a complete
/// expression, and exhaustion of the token retraction buffer.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: references
/// to unbound variables, operators applied to incompatible operand shapes,
/// and integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The error type returned by [`evaluate_line`](crate::evaluate_line).
///
/// Wraps the two failure classes of the pipeline so callers can match on
/// where an input line went wrong: before evaluation (`Parse`) or during it
/// (`Runtime`).
#[derive(Debug)]
pub enum Error {
    /// The line could not be tokenized or parsed.
    Parse(ParseError),
    /// The line parsed, but evaluation failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
