use crate::{
    ast::Expr,
    error::{Error, ParseError, RuntimeError},
    interpreter::{cursor::TokenCursor, evaluator::core::Environment, lexer::Token, value::Value},
};

/// Result type used by the parser.
///
/// Parsing can fail either with a grammar violation (`ParseError`) or, for
/// references to unbound variables, with a `RuntimeError`; both are carried
/// by the umbrella [`Error`].
pub type ParseResult<T> = Result<T, Error>;

/// Parses one line of input into an [`Expr`].
///
/// The parser consumes tokens through a [`TokenCursor`] and holds a shared
/// reference to the [`Environment`] so that references to unbound variables
/// fail at parse time rather than during evaluation. It never mutates the
/// environment: assignments are committed by the evaluator, atomically.
pub struct Parser<'a> {
    cursor: TokenCursor<'a>,
    env:    &'a Environment,
}

impl<'a> Parser<'a> {
    /// Creates a parser for `source`, resolving variable names against `env`.
    #[must_use]
    pub fn new(source: &'a str, env: &'a Environment) -> Self {
        Self { cursor: TokenCursor::new(source),
               env }
    }

    /// Parses exactly one line's worth of tokens into one expression.
    ///
    /// The first token decides the shape: an identifier opens either an
    /// assignment or an operator chain starting from a variable term;
    /// anything else must open a term (vector literal, negative literal, or
    /// reduce/scan application), possibly continued by an operator chain.
    /// After the expression, only end-of-input may follow.
    ///
    /// # Errors
    /// Returns an [`Error`] for any lexical error, grammar violation, or
    /// reference to an unbound variable.
    pub fn parse(&mut self) -> ParseResult<Expr> {
        let expr = match self.cursor.scan_skip_space() {
            Token::Identifier(name) => self.parse_identifier_line(name)?,
            Token::Eof => return Err(ParseError::UnexpectedEndOfInput.into()),
            token => {
                let first = self.parse_term_from(token)?;
                self.parse_chain(first)?
            },
        };

        match self.cursor.scan_skip_space() {
            Token::Eof => Ok(expr),
            token => {
                Err(ParseError::UnexpectedTrailingTokens { token: token.to_string() }.into())
            },
        }
    }

    /// Parses a line that begins with an identifier: either an assignment
    /// (`x = 5`, `x = y`) or an operator chain whose first term is a
    /// variable reference.
    fn parse_identifier_line(&mut self, name: String) -> ParseResult<Expr> {
        match self.cursor.scan_skip_space() {
            Token::Assign => self.parse_assignment(name),
            _ => {
                self.cursor.unscan()?;
                let first = self.lookup_variable(name)?;
                self.parse_chain(first)
            },
        }
    }

    /// Parses the right-hand side of an assignment.
    ///
    /// The right-hand side must be a single number or a single identifier;
    /// no further chaining is permitted. An identifier must already be bound
    /// in the environment. The commit itself happens when the resulting
    /// [`Expr::Assignment`] is evaluated, so a later failure cannot leave a
    /// partial write behind.
    fn parse_assignment(&mut self, name: String) -> ParseResult<Expr> {
        let value = match self.cursor.scan_skip_space() {
            Token::Number(n) => Expr::Literal { value: Value::Int(n) },
            Token::Identifier(rhs) => self.lookup_variable(rhs)?,
            Token::Eof => return Err(ParseError::UnexpectedEndOfInput.into()),
            token => {
                return Err(ParseError::UnexpectedToken { token: token.to_string() }.into());
            },
        };

        Ok(Expr::Assignment { name,
                              value: Box::new(value) })
    }

    /// Folds an operator chain left-to-right starting from `first`.
    ///
    /// Each binary operator consumes one further term and nests the
    /// accumulated expression as its left operand, giving every operator
    /// equal, left-associative precedence. A reduce/scan operator appearing
    /// mid-chain wraps the accumulated left operand instead of consuming a
    /// term. Lookahead that is not an operator is retracted and ends the
    /// chain.
    fn parse_chain(&mut self, first: Expr) -> ParseResult<Expr> {
        let mut expr = first;

        loop {
            let token = self.cursor.scan_skip_space();

            if let Some(op) = token.fold_op() {
                expr = Expr::Unary { op,
                                     operand: Box::new(expr) };
                continue;
            }
            if let Some(op) = token.binary_op() {
                let right = self.parse_term()?;
                expr = Expr::Binary { left: Box::new(expr),
                                      op,
                                      right: Box::new(right) };
                continue;
            }
            if token == Token::Slash {
                return Err(ParseError::UnsupportedOperator { token: token.to_string() }.into());
            }

            self.cursor.unscan()?;
            return Ok(expr);
        }
    }

    /// Parses one term: a vector literal, a bound variable reference, or a
    /// nested reduce/scan application.
    fn parse_term(&mut self) -> ParseResult<Expr> {
        match self.cursor.scan_skip_space() {
            Token::Identifier(name) => self.lookup_variable(name),
            token => self.parse_term_from(token),
        }
    }

    /// Parses a term whose first token has already been consumed.
    fn parse_term_from(&mut self, token: Token) -> ParseResult<Expr> {
        if let Some(op) = token.fold_op() {
            let operand = self.parse_term()?;
            return Ok(Expr::Unary { op,
                                    operand: Box::new(operand) });
        }

        match token {
            Token::Number(value) => self.parse_vector_literal(value),
            Token::Minus => {
                let value = self.adjacent_number()?;
                self.parse_vector_literal(-value)
            },
            Token::Error(token) => Err(ParseError::UnrecognizedToken { token }.into()),
            Token::Eof => Err(ParseError::UnexpectedEndOfInput.into()),
            token => Err(ParseError::UnexpectedToken { token: token.to_string() }.into()),
        }
    }

    /// Collects a run of adjacent signed numbers into a vector literal.
    ///
    /// A `-` continues the literal only when a number follows with no space
    /// in between (`1 -2` is the vector `1 -2`; `1 - 2` is a subtraction).
    /// A length-1 run collapses to a scalar.
    fn parse_vector_literal(&mut self, first: i64) -> ParseResult<Expr> {
        let mut elements = vec![first];

        loop {
            match self.cursor.scan_skip_space() {
                Token::Number(value) => elements.push(value),
                Token::Minus => match self.cursor.scan() {
                    Token::Number(value) => elements.push(-value),
                    _ => {
                        // Not a negative element; hand `-` back to the chain.
                        self.cursor.unscan()?;
                        self.cursor.unscan()?;
                        break;
                    },
                },
                _ => {
                    self.cursor.unscan()?;
                    break;
                },
            }
        }

        Ok(Expr::Literal { value: Value::from_elements(elements) })
    }

    /// Expects a number token immediately adjacent to a just-consumed `-`.
    ///
    /// Scans raw, without space skipping: whitespace between the sign and
    /// the digits makes the minus dangling.
    fn adjacent_number(&mut self) -> ParseResult<i64> {
        match self.cursor.scan() {
            Token::Number(value) => Ok(value),
            _ => Err(ParseError::DanglingMinus.into()),
        }
    }

    /// Resolves `name` to a variable reference, failing fast when it is not
    /// bound in the environment.
    fn lookup_variable(&self, name: String) -> ParseResult<Expr> {
        if self.env.is_bound(&name) {
            Ok(Expr::Variable { name })
        } else {
            Err(RuntimeError::UnknownVariable { name }.into())
        }
    }
}
