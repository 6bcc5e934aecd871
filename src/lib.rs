//! # aplet
//!
//! aplet is a line-oriented interpreter for a small APL-inspired array
//! language. It scans, parses, and evaluates one line at a time: scalar and
//! vector integer literals, element-wise binary operators over equal-length
//! vectors, reduce/scan operators, variable assignment, and variable lookup.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{evaluator::core::Environment, parser::Parser, value::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the operator enums that
/// represent the syntactic structure of one input line as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression nodes for literals, variable references,
///   assignments, and operator applications.
/// - Defines the closed binary and fold operator sets, so no unrecognized
///   operator can reach evaluation.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating a line. It standardizes error reporting and carries
/// detailed information about failures.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Provides the umbrella [`Error`](error::Error) returned by
///   [`evaluate_line`].
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of line evaluation.
///
/// This module ties together lexing, token cursoring, parsing, evaluation,
/// value representation, and error handling to provide a complete runtime
/// for one-line programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, cursor, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates one line of input against `env` and returns the resulting
/// value.
///
/// This is the single entry point a line-oriented shell calls repeatedly:
/// the raw line is tokenized, parsed into an expression tree, and evaluated.
/// A successful assignment mutates `env`; any failure leaves it untouched.
///
/// # Errors
/// Returns an error if the line cannot be tokenized or parsed, if it
/// references an unbound variable, or if evaluation fails (operand shape
/// mismatch, overflow).
///
/// # Examples
/// ```
/// use aplet::{evaluate_line, interpreter::evaluator::core::Environment};
///
/// let mut env = Environment::new();
///
/// evaluate_line("x = 5", &mut env).unwrap();
/// let value = evaluate_line("x + x", &mut env).unwrap();
/// assert_eq!(value.to_string(), "10");
///
/// let value = evaluate_line("+\\ 1 2 3 4", &mut env).unwrap();
/// assert_eq!(value.to_string(), "1 3 6 10");
///
/// // 'y' was never assigned.
/// assert!(evaluate_line("y", &mut env).is_err());
/// ```
pub fn evaluate_line(line: &str, env: &mut Environment) -> Result<Value, Error> {
    let expr = Parser::new(line, env).parse()?;
    env.eval(&expr).map_err(Error::from)
}
