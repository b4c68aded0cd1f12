use alloc::string::String;

use thiserror::Error;

use crate::token::{Number, TokenKind};

// -----------------------------------------------------------------------------
// Error

/// An error raised while decoding a token stream.
///
/// Type paths are the full paths of the types being decoded, as recorded in
/// their [`TypeInfo`](crate::info::TypeInfo).
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum FormatError {
    #[error("expected start of object for `{type_path}`, found {found}")]
    ExpectedStartObject {
        type_path: &'static str,
        found: TokenKind,
    },

    #[error("expected a string label for `{type_path}`, found {found}")]
    ExpectedString {
        type_path: &'static str,
        found: TokenKind,
    },

    #[error("unknown label {label:?} for `{type_path}`")]
    UnknownLabel {
        type_path: &'static str,
        label: String,
    },

    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
    },

    #[error("number {number} does not fit in `{target}`")]
    NumberOutOfRange {
        number: Number,
        target: &'static str,
    },

    #[error("expected a single character, found {0:?}")]
    InvalidChar(String),

    #[error("{count} token(s) left after the decoded value")]
    TrailingTokens { count: usize },

    #[error("malformed input: {0}")]
    Syntax(String),

    #[error("no decoder registered for `{0}`")]
    NotRegistered(String),
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::FormatError;
    use crate::token::{Number, TokenKind};

    #[test]
    fn messages() {
        let err = FormatError::ExpectedStartObject {
            type_path: "app::Point",
            found: TokenKind::Number,
        };
        assert_eq!(
            err.to_string(),
            "expected start of object for `app::Point`, found number"
        );

        let err = FormatError::UnknownLabel {
            type_path: "app::Color",
            label: "purple".into(),
        };
        assert_eq!(err.to_string(), "unknown label \"purple\" for `app::Color`");

        let err = FormatError::NumberOutOfRange {
            number: Number::PosInt(300),
            target: "u8",
        };
        assert_eq!(err.to_string(), "number 300 does not fit in `u8`");
    }
}
