use alloc::vec::{self, Vec};
use core::iter::Peekable;

use super::{Token, TokenRead};
use crate::FormatError;

/// A [`TokenRead`] over an already recorded list of tokens.
///
/// Tapes are built from tokens directly, from any `serde` deserializer with
/// [`TokenTape::record`], or from JSON text with [`TokenTape::from_json`].
/// Recording keeps the input's property order and duplicate keys.
///
/// # Example
///
/// ```
/// use ss_decode::token::{Token, TokenRead, TokenTape};
///
/// let mut tape = TokenTape::new(vec![Token::StartObject, Token::EndObject]);
///
/// assert_eq!(tape.peek_token().unwrap(), Some(&Token::StartObject));
/// assert_eq!(tape.next_token().unwrap(), Some(Token::StartObject));
/// assert_eq!(tape.position(), 1);
/// assert_eq!(tape.remaining(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TokenTape {
    tokens: Peekable<vec::IntoIter<Token>>,
    position: usize,
}

impl TokenTape {
    /// Creates a tape that yields `tokens` in order.
    #[inline]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter().peekable(),
            position: 0,
        }
    }

    /// The number of tokens already read.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The number of tokens left.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if every token has been read.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

impl From<Vec<Token>> for TokenTape {
    #[inline]
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

impl FromIterator<Token> for TokenTape {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl TokenRead for TokenTape {
    #[inline]
    fn next_token(&mut self) -> Result<Option<Token>, FormatError> {
        let token = self.tokens.next();
        if token.is_some() {
            self.position += 1;
        }
        Ok(token)
    }

    #[inline]
    fn peek_token(&mut self) -> Result<Option<&Token>, FormatError> {
        Ok(self.tokens.peek())
    }
}
