use super::{Token, TokenKind};
use crate::FormatError;

/// A forward-only cursor over [`Token`]s.
///
/// A decode call borrows the cursor mutably for its whole duration, so one
/// stream is never read by two decoders at once.
///
/// `Ok(None)` marks the end of the stream, errors are reserved for input the
/// cursor itself cannot tokenize.
pub trait TokenRead {
    /// Advances the cursor and returns the token it moved past.
    fn next_token(&mut self) -> Result<Option<Token>, FormatError>;

    /// Returns the next token without advancing.
    fn peek_token(&mut self) -> Result<Option<&Token>, FormatError>;

    /// Skips one complete value: a scalar, or a whole object/array including
    /// everything nested inside it.
    fn skip_value(&mut self) -> Result<(), FormatError> {
        let mut depth = 0_usize;
        loop {
            match self.next_token()? {
                Some(Token::StartObject | Token::StartArray) => depth += 1,
                Some(Token::EndObject | Token::EndArray) if depth > 0 => depth -= 1,
                Some(Token::PropertyName(_)) if depth > 0 => continue,
                Some(
                    token @ (Token::EndObject | Token::EndArray | Token::PropertyName(_)),
                ) => {
                    return Err(FormatError::UnexpectedToken {
                        expected: "a value",
                        found: token.kind(),
                    });
                }
                Some(_) => {}
                None => {
                    return Err(FormatError::UnexpectedToken {
                        expected: "a value",
                        found: TokenKind::EndOfStream,
                    });
                }
            }

            if depth == 0 {
                return Ok(());
            }
        }
    }
}

impl<R: TokenRead + ?Sized> TokenRead for &mut R {
    #[inline]
    fn next_token(&mut self) -> Result<Option<Token>, FormatError> {
        (**self).next_token()
    }

    #[inline]
    fn peek_token(&mut self) -> Result<Option<&Token>, FormatError> {
        (**self).peek_token()
    }

    #[inline]
    fn skip_value(&mut self) -> Result<(), FormatError> {
        (**self).skip_value()
    }
}

// -----------------------------------------------------------------------------
// Tests
