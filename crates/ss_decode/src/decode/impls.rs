use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::token::{Token, TokenKind, TokenRead};
use crate::{Decode, FormatError};

#[inline]
fn unexpected(expected: &'static str, found: Option<&Token>) -> FormatError {
    FormatError::UnexpectedToken {
        expected,
        found: TokenKind::of(found),
    }
}

// -----------------------------------------------------------------------------
// Numbers

macro_rules! impl_decode_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl Decode for $ty {
            fn decode(reader: &mut dyn TokenRead) -> Result<Self, FormatError> {
                match reader.next_token()? {
                    Some(Token::Number(number)) => {
                        number.to_integer().ok_or(FormatError::NumberOutOfRange {
                            number,
                            target: stringify!($ty),
                        })
                    }
                    token => Err(unexpected("a number", token.as_ref())),
                }
            }
        }
    )*};
}

impl_decode_integer!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize,
);

impl Decode for f64 {
    fn decode(reader: &mut dyn TokenRead) -> Result<Self, FormatError> {
        match reader.next_token()? {
            Some(Token::Number(number)) => Ok(number.to_f64()),
            token => Err(unexpected("a number", token.as_ref())),
        }
    }
}

impl Decode for f32 {
    #[inline]
    fn decode(reader: &mut dyn TokenRead) -> Result<Self, FormatError> {
        f64::decode(reader).map(|v| v as f32)
    }
}

// -----------------------------------------------------------------------------
// Scalars

impl Decode for bool {
    fn decode(reader: &mut dyn TokenRead) -> Result<Self, FormatError> {
        match reader.next_token()? {
            Some(Token::Bool(v)) => Ok(v),
            token => Err(unexpected("a boolean", token.as_ref())),
        }
    }
}

impl Decode for String {
    fn decode(reader: &mut dyn TokenRead) -> Result<Self, FormatError> {
        match reader.next_token()? {
            Some(Token::String(v)) => Ok(v),
            token => Err(unexpected("a string", token.as_ref())),
        }
    }
}

impl Decode for char {
    fn decode(reader: &mut dyn TokenRead) -> Result<Self, FormatError> {
        let s = String::decode(reader)?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(FormatError::InvalidChar(s)),
        }
    }
}

impl Decode for () {
    fn decode(reader: &mut dyn TokenRead) -> Result<Self, FormatError> {
        match reader.next_token()? {
            Some(Token::Null) => Ok(()),
            token => Err(unexpected("null", token.as_ref())),
        }
    }
}

// -----------------------------------------------------------------------------
// Containers

impl<T: Decode> Decode for Option<T> {
    fn decode(reader: &mut dyn TokenRead) -> Result<Self, FormatError> {
        if matches!(reader.peek_token()?, Some(Token::Null)) {
            reader.next_token()?;
            return Ok(None);
        }
        T::decode(reader).map(Some)
    }
}

impl<T: Decode> Decode for Box<T> {
    #[inline]
    fn decode(reader: &mut dyn TokenRead) -> Result<Self, FormatError> {
        T::decode(reader).map(Box::new)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(reader: &mut dyn TokenRead) -> Result<Self, FormatError> {
        match reader.next_token()? {
            Some(Token::StartArray) => {}
            token => return Err(unexpected("start of array", token.as_ref())),
        }

        let mut items = Vec::new();
        loop {
            match reader.peek_token()?.map(Token::kind) {
                Some(TokenKind::EndArray) => break,
                None => return Err(unexpected("end of array", None)),
                Some(_) => items.push(T::decode(reader)?),
            }
        }
        reader.next_token()?;
        Ok(items)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::token::{Number, Token, TokenKind, TokenTape};
    use crate::{Decode, FormatError, from_tape};

    fn tape(tokens: Vec<Token>) -> TokenTape {
        TokenTape::new(tokens)
    }

    #[test]
    fn integers() {
        let mut t = tape(vec![Token::from(Number::from(-5_i64))]);
        assert_eq!(i16::decode(&mut t), Ok(-5));

        let mut t = tape(vec![Token::from(Number::from(256_u64))]);
        assert_eq!(
            u8::decode(&mut t),
            Err(FormatError::NumberOutOfRange {
                number: Number::PosInt(256),
                target: "u8",
            })
        );

        let mut t = tape(vec![Token::from("5")]);
        assert_eq!(
            u32::decode(&mut t),
            Err(FormatError::UnexpectedToken {
                expected: "a number",
                found: TokenKind::String,
            })
        );
    }

    #[test]
    fn floats() {
        let mut t = tape(vec![Token::from(Number::from(2_u64)), Token::from(Number::from(0.5))]);
        assert_eq!(f64::decode(&mut t), Ok(2.0));
        assert_eq!(f32::decode(&mut t), Ok(0.5));
    }

    #[test]
    fn scalars() {
        let mut t = tape(vec![
            Token::from(false),
            Token::from("text"),
            Token::from("é"),
            Token::from("ab"),
            Token::Null,
        ]);
        assert_eq!(bool::decode(&mut t), Ok(false));
        assert_eq!(String::decode(&mut t), Ok(String::from("text")));
        assert_eq!(char::decode(&mut t), Ok('é'));
        assert_eq!(char::decode(&mut t), Err(FormatError::InvalidChar("ab".into())));
        assert_eq!(<()>::decode(&mut t), Ok(()));
        assert_eq!(
            bool::decode(&mut t),
            Err(FormatError::UnexpectedToken {
                expected: "a boolean",
                found: TokenKind::EndOfStream,
            })
        );
    }

    #[test]
    fn containers() {
        let t = tape(vec![
            Token::StartArray,
            Token::from(Number::from(1_u64)),
            Token::Null,
            Token::EndArray,
        ]);
        assert_eq!(from_tape::<Vec<Option<u8>>>(t), Ok(vec![Some(1), None]));

        let t = tape(vec![Token::StartArray, Token::from(true)]);
        assert!(from_tape::<Vec<bool>>(t).is_err());

        let t = tape(vec![Token::from(true), Token::Null]);
        assert_eq!(
            from_tape::<Box<bool>>(t),
            Err(FormatError::TrailingTokens { count: 1 })
        );
    }
}
