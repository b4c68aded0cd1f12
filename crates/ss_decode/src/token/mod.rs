//! The token model decoders read.
//!
//! ## Menu
//!
//! - [`Token`]: one lexical unit of the wire format.
//! - [`TokenKind`]: the kind of a token, used in error messages.
//! - [`Number`]: a numeric scalar as the wire format carried it.
//! - [`TokenRead`]: a forward-only cursor over tokens.
//! - [`TokenTape`]: a [`TokenRead`] over a recorded list of tokens.
//!
//! Object decoding depends on [`Token::StartObject`], [`Token::EndObject`] and
//! [`Token::PropertyName`]; enum decoding depends on [`Token::String`].

// -----------------------------------------------------------------------------
// Modules

mod read;
mod record;
mod tape;

// -----------------------------------------------------------------------------
// Exports

pub use read::TokenRead;
pub use tape::TokenTape;

use alloc::string::String;
use core::fmt;

// -----------------------------------------------------------------------------
// Token

/// A typed lexical unit of a structured text format.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    StartObject,
    EndObject,
    StartArray,
    EndArray,
    /// The name of the property whose value follows.
    PropertyName(String),
    String(String),
    Number(Number),
    Bool(bool),
    Null,
}

impl Token {
    /// Returns the kind of this token.
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::StartObject => TokenKind::StartObject,
            Self::EndObject => TokenKind::EndObject,
            Self::StartArray => TokenKind::StartArray,
            Self::EndArray => TokenKind::EndArray,
            Self::PropertyName(_) => TokenKind::PropertyName,
            Self::String(_) => TokenKind::String,
            Self::Number(_) => TokenKind::Number,
            Self::Bool(_) => TokenKind::Bool,
            Self::Null => TokenKind::Null,
        }
    }
}

impl From<&str> for Token {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<bool> for Token {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Number> for Token {
    #[inline]
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

// -----------------------------------------------------------------------------
// TokenKind

/// The kind of a [`Token`], or the end of the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    StartObject,
    EndObject,
    StartArray,
    EndArray,
    PropertyName,
    String,
    Number,
    Bool,
    Null,
    /// The stream has no more tokens.
    EndOfStream,
}

impl TokenKind {
    /// The kind of an optional token, `None` being the end of the stream.
    #[inline]
    pub fn of(token: Option<&Token>) -> Self {
        token.map_or(Self::EndOfStream, Token::kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StartObject => "start of object",
            Self::EndObject => "end of object",
            Self::StartArray => "start of array",
            Self::EndArray => "end of array",
            Self::PropertyName => "property name",
            Self::String => "string",
            Self::Number => "number",
            Self::Bool => "boolean",
            Self::Null => "null",
            Self::EndOfStream => "end of stream",
        })
    }
}

// -----------------------------------------------------------------------------
// Number

/// A numeric scalar.
///
/// Integers keep their sign class so that `u64::MAX` and `i64::MIN` both
/// survive recording without going through a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

impl Number {
    /// Converts to an integer of type `T` if the value is integral and in range.
    pub fn to_integer<T>(self) -> Option<T>
    where
        T: TryFrom<u64> + TryFrom<i64>,
    {
        match self {
            Self::PosInt(v) => <T as TryFrom<u64>>::try_from(v).ok(),
            Self::NegInt(v) => <T as TryFrom<i64>>::try_from(v).ok(),
            Self::Float(_) => None,
        }
    }

    /// Converts to `f64`, losing precision for large integers.
    #[inline]
    pub fn to_f64(self) -> f64 {
        match self {
            Self::PosInt(v) => v as f64,
            Self::NegInt(v) => v as f64,
            Self::Float(v) => v,
        }
    }
}

impl From<u64> for Number {
    #[inline]
    fn from(value: u64) -> Self {
        Self::PosInt(value)
    }
}

impl From<i64> for Number {
    #[inline]
    fn from(value: i64) -> Self {
        if value < 0 {
            Self::NegInt(value)
        } else {
            Self::PosInt(value as u64)
        }
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PosInt(v) => fmt::Display::fmt(v, f),
            Self::NegInt(v) => fmt::Display::fmt(v, f),
            Self::Float(v) => fmt::Display::fmt(v, f),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Number, Token, TokenKind};

    #[test]
    fn integer_conversion() {
        assert_eq!(Number::from(200_i64).to_integer::<u8>(), Some(200_u8));
        assert_eq!(Number::from(300_i64).to_integer::<u8>(), None);
        assert_eq!(Number::from(-1_i64).to_integer::<u32>(), None);
        assert_eq!(Number::from(-1_i64).to_integer::<i8>(), Some(-1_i8));
        assert_eq!(Number::from(u64::MAX).to_integer::<u64>(), Some(u64::MAX));
        assert_eq!(Number::from(1.0_f64).to_integer::<i32>(), None);
    }

    #[test]
    fn kinds() {
        assert_eq!(TokenKind::of(None), TokenKind::EndOfStream);
        assert_eq!(TokenKind::of(Some(&Token::from("a"))), TokenKind::String);
        assert_eq!(TokenKind::StartObject.to_string(), "start of object");
        assert_eq!(Number::from(-3_i64), Number::NegInt(-3));
        assert_eq!(Number::from(3_i64), Number::PosInt(3));
    }
}
