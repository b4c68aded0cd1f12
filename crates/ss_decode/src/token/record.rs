use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use serde_core::Deserializer;
use serde_core::de::{DeserializeSeed, Error, MapAccess, SeqAccess, Visitor};

use super::{Number, Token, TokenTape};

impl TokenTape {
    /// Records every token of one value produced by a `serde` deserializer.
    ///
    /// Maps become objects with their keys in input order, duplicates
    /// included. Non-string keys are stored as their text. `None` and `()`
    /// become [`Token::Null`], `Some(v)` records `v`.
    ///
    /// The deserializer must be self-describing, since recording goes through
    /// `deserialize_any`.
    pub fn record<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut tokens = Vec::new();
        TokenRecorder {
            tokens: &mut tokens,
        }
        .deserialize(deserializer)?;
        Ok(Self::new(tokens))
    }

    /// Records the JSON text `source` into a tape.
    ///
    /// Fails with [`FormatError::Syntax`](crate::FormatError::Syntax) if the
    /// text is not a single well-formed JSON value.
    #[cfg(feature = "json")]
    pub fn from_json(source: &str) -> Result<Self, crate::FormatError> {
        let mut de = serde_json::Deserializer::from_str(source);
        let tape = Self::record(&mut de).map_err(|e| crate::FormatError::Syntax(e.to_string()))?;
        de.end().map_err(|e| crate::FormatError::Syntax(e.to_string()))?;
        Ok(tape)
    }
}

// -----------------------------------------------------------------------------
// TokenRecorder

/// Appends the tokens of one value.
struct TokenRecorder<'a> {
    tokens: &'a mut Vec<Token>,
}

impl<'de> DeserializeSeed<'de> for TokenRecorder<'_> {
    type Value = ();

    #[inline]
    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for TokenRecorder<'_> {
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any self-describing value")
    }

    fn visit_bool<E: Error>(self, v: bool) -> Result<(), E> {
        self.tokens.push(Token::Bool(v));
        Ok(())
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<(), E> {
        self.tokens.push(Token::Number(Number::from(v)));
        Ok(())
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<(), E> {
        self.tokens.push(Token::Number(Number::from(v)));
        Ok(())
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<(), E> {
        self.tokens.push(Token::Number(Number::from(v)));
        Ok(())
    }

    fn visit_char<E: Error>(self, v: char) -> Result<(), E> {
        self.tokens.push(Token::String(v.to_string()));
        Ok(())
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<(), E> {
        self.tokens.push(Token::String(v.into()));
        Ok(())
    }

    fn visit_string<E: Error>(self, v: String) -> Result<(), E> {
        self.tokens.push(Token::String(v));
        Ok(())
    }

    fn visit_unit<E: Error>(self) -> Result<(), E> {
        self.tokens.push(Token::Null);
        Ok(())
    }

    fn visit_none<E: Error>(self) -> Result<(), E> {
        self.tokens.push(Token::Null);
        Ok(())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        self.deserialize(deserializer)
    }

    fn visit_newtype_struct<D>(self, deserializer: D) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        self.deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<(), A::Error>
    where
        A: SeqAccess<'de>,
    {
        self.tokens.push(Token::StartArray);
        while seq
            .next_element_seed(TokenRecorder {
                tokens: &mut *self.tokens,
            })?
            .is_some()
        {}
        self.tokens.push(Token::EndArray);
        Ok(())
    }

    fn visit_map<A>(self, mut map: A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        self.tokens.push(Token::StartObject);
        while let Some(key) = map.next_key_seed(KeyRecorder)? {
            self.tokens.push(Token::PropertyName(key));
            map.next_value_seed(TokenRecorder {
                tokens: &mut *self.tokens,
            })?;
        }
        self.tokens.push(Token::EndObject);
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// KeyRecorder

/// Reads a map key as text.
struct KeyRecorder;

impl<'de> DeserializeSeed<'de> for KeyRecorder {
    type Value = String;

    #[inline]
    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for KeyRecorder {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string, number, char or bool map key")
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<String, E> {
        Ok(v.into())
    }

    fn visit_string<E: Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_char<E: Error>(self, v: char) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_bool<E: Error>(self, v: bool) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }
}

// -----------------------------------------------------------------------------
// Tests
