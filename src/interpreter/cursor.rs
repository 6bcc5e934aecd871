use std::collections::VecDeque;

use logos::{Lexer, Logos};

use crate::{error::ParseError, interpreter::lexer::Token};

/// How many already-scanned tokens the cursor can replay.
pub const RETRACT_CAPACITY: usize = 10;

/// A token cursor over one input line.
///
/// Wraps the lexer with a fixed-capacity history of scanned tokens so the
/// parser can look ahead and retract. Retracted tokens are replayed in
/// original stream order before new tokens are pulled from the lexer.
///
/// Lexical errors and the end of the input are surfaced as ordinary tokens
/// ([`Token::Error`] and [`Token::Eof`]), so `scan` itself cannot fail.
pub struct TokenCursor<'src> {
    lexer:    Lexer<'src, Token>,
    history:  VecDeque<Token>,
    replayed: usize,
}

impl<'src> TokenCursor<'src> {
    /// Creates a cursor over `source` with an empty history.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:    Token::lexer(source),
               history:  VecDeque::with_capacity(RETRACT_CAPACITY),
               replayed: 0, }
    }

    /// Returns the next token.
    ///
    /// If a retracted token is pending it is replayed; otherwise one token is
    /// pulled from the lexer and recorded in the history ring, evicting the
    /// oldest entry once the ring is full.
    pub fn scan(&mut self) -> Token {
        if self.replayed > 0 {
            let token = self.history[self.history.len() - self.replayed].clone();
            self.replayed -= 1;
            return token;
        }

        let token = match self.lexer.next() {
            Some(Ok(token)) => token,
            Some(Err(())) => Token::Error(self.lexer.slice().to_string()),
            None => Token::Eof,
        };

        if self.history.len() == RETRACT_CAPACITY {
            self.history.pop_front();
        }
        self.history.push_back(token.clone());

        token
    }

    /// Marks the most recently returned token to be replayed by the next
    /// [`scan`](Self::scan).
    ///
    /// # Errors
    /// Returns `ParseError::RetractionExhausted` when every token still held
    /// in the history is already marked for replay. Callers must treat this
    /// as a hard failure; nothing is retracted in that case.
    pub fn unscan(&mut self) -> Result<(), ParseError> {
        if self.replayed == self.history.len() {
            return Err(ParseError::RetractionExhausted);
        }

        self.replayed += 1;
        Ok(())
    }

    /// Returns the next non-whitespace token.
    ///
    /// Whitespace runs lex as a single [`Token::Space`], so at most one token
    /// is skipped. The grammar never sees whitespace beyond this point.
    pub fn scan_skip_space(&mut self) -> Token {
        let token = self.scan();
        if token == Token::Space { self.scan() } else { token }
    }
}
