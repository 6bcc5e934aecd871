/// The lexer module tokenizes an input line for further parsing.
///
/// The lexer reads the raw line text and produces a stream of tokens, each
/// corresponding to a meaningful language element such as numbers,
/// identifiers, operators, assignment, and whitespace runs. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into classified tokens.
/// - Recognizes the two-character reduce/scan and power operators.
/// - Distinguishes the reserved words `min` and `max` from identifiers.
/// - Surfaces unrecognized characters as error tokens.
pub mod lexer;
/// The cursor module wraps the lexer with a bounded retraction buffer.
///
/// The parser consumes tokens through the cursor, which keeps a fixed-size
/// history of scanned tokens so that lookahead decisions can be undone by
/// retracting up to that many tokens.
///
/// # Responsibilities
/// - Replays retracted tokens in original stream order.
/// - Reports retraction past the buffer capacity as an explicit error.
/// - Provides a whitespace-skipping scan for the grammar proper.
pub mod cursor;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST node that represents one line of input: a vector
/// literal, a variable reference, an assignment, or a left-associative
/// operator chain.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates correct grammar and syntax, reporting descriptive errors.
/// - Fails fast on references to unbound variables.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum used during evaluation: scalar integers and
/// flat vectors of integers. Vectors never nest, and a vector of length one
/// collapses to a scalar at construction.
pub mod value;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, applies the element-wise binary
/// operators and the reduce/scan folds, and manages variable state through
/// the environment. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Commits assignments atomically to the environment.
/// - Reports runtime errors such as shape mismatches or overflow.
pub mod evaluator;
