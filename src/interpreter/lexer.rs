use logos::Logos;

use crate::ast::{BinaryOperator, FoldOperator};

/// Represents a lexical token in the input line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// `min`, a reserved word classified as an operator.
    #[token("min")]
    Min,
    /// `max`, a reserved word classified as an operator.
    #[token("max")]
    Max,
    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `=`
    #[token("=")]
    Assign,
    /// `+/`, the sum-reduce operator.
    #[token("+/")]
    SumReduce,
    /// `+\`, the running-sum scan operator.
    #[token(r"+\")]
    SumScan,
    /// `*/`, the product-reduce operator.
    #[token("*/")]
    ProductReduce,
    /// `*\`, the running-product scan operator.
    #[token(r"*\")]
    ProductScan,
    /// `**`
    #[token("**")]
    StarStar,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// A contiguous run of spaces, tabs, and newlines.
    ///
    /// Whitespace is a real token: the parser needs its absence to
    /// distinguish a negative literal (`-1`) from a dangling minus (`- 1`).
    #[regex(r"[ \t\r\n]+")]
    Space,

    /// An unclassifiable slice of input. Never produced by the lexer rules;
    /// the cursor synthesizes it from a lexer error, carrying the offending
    /// text.
    Error(String),
    /// End of input. Synthesized by the cursor once the lexer is exhausted.
    Eof,
}

impl Token {
    /// Returns the binary operator this token denotes, if any.
    #[must_use]
    pub const fn binary_op(&self) -> Option<BinaryOperator> {
        match self {
            Self::Plus => Some(BinaryOperator::Add),
            Self::Minus => Some(BinaryOperator::Sub),
            Self::Star => Some(BinaryOperator::Mul),
            Self::StarStar => Some(BinaryOperator::Pow),
            Self::Min => Some(BinaryOperator::Min),
            Self::Max => Some(BinaryOperator::Max),
            _ => None,
        }
    }

    /// Returns the reduce/scan operator this token denotes, if any.
    #[must_use]
    pub const fn fold_op(&self) -> Option<FoldOperator> {
        match self {
            Self::SumReduce => Some(FoldOperator::SumReduce),
            Self::SumScan => Some(FoldOperator::SumScan),
            Self::ProductReduce => Some(FoldOperator::ProductReduce),
            Self::ProductScan => Some(FoldOperator::ProductScan),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Min => write!(f, "min"),
            Self::Max => write!(f, "max"),
            Self::Assign => write!(f, "="),
            Self::SumReduce => write!(f, "+/"),
            Self::SumScan => write!(f, "+\\"),
            Self::ProductReduce => write!(f, "*/"),
            Self::ProductScan => write!(f, "*\\"),
            Self::StarStar => write!(f, "**"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Space => write!(f, "whitespace"),
            Self::Error(text) => write!(f, "{text}"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits.
/// - `None`: If the digit run overflows `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
