//! Items used by the code `#[derive(Decode)]` generates. Not public API.

// -----------------------------------------------------------------------------
// Modules

#[cfg(feature = "auto_register")]
pub mod auto_register;

// -----------------------------------------------------------------------------
// macro_utils

pub mod macro_utils {
    pub use ::core::default::Default;
    pub use ::core::option::Option;
    pub use ::core::result::Result;
    pub use ::core::stringify;

    pub use super::{expect_label, expect_start_object, ignore_token, labels_match};
    pub use super::{skip_property, unknown_label};
}

use alloc::string::String;

use crate::FormatError;
use crate::token::{Token, TokenKind, TokenRead};

/// Compares two labels under Unicode lowercase folding.
pub fn labels_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Consumes the start of an object.
pub fn expect_start_object(
    reader: &mut dyn TokenRead,
    type_path: &'static str,
) -> Result<(), FormatError> {
    match reader.next_token()? {
        Some(Token::StartObject) => Ok(()),
        token => Err(FormatError::ExpectedStartObject {
            type_path,
            found: TokenKind::of(token.as_ref()),
        }),
    }
}

/// Consumes a string label.
pub fn expect_label(
    reader: &mut dyn TokenRead,
    type_path: &'static str,
) -> Result<String, FormatError> {
    match reader.next_token()? {
        Some(Token::String(label)) => Ok(label),
        token => Err(FormatError::ExpectedString {
            type_path,
            found: TokenKind::of(token.as_ref()),
        }),
    }
}

#[cold]
pub fn unknown_label(type_path: &'static str, label: String) -> FormatError {
    FormatError::UnknownLabel { type_path, label }
}

/// Skips the value of a property no member is read from.
pub fn skip_property(
    reader: &mut dyn TokenRead,
    type_path: &'static str,
    name: &str,
) -> Result<(), FormatError> {
    #[cfg(all(debug_assertions, feature = "debug"))]
    log::trace!("skipping unknown property `{name}` of `{type_path}`");
    #[cfg(not(all(debug_assertions, feature = "debug")))]
    let _ = (type_path, name);

    reader.skip_value()
}

/// Notes a token that has no meaning inside an object body.
#[inline]
pub fn ignore_token(type_path: &'static str, token: &Token) {
    #[cfg(all(debug_assertions, feature = "debug"))]
    log::trace!("ignoring {} in the body of `{type_path}`", token.kind());
    #[cfg(not(all(debug_assertions, feature = "debug")))]
    let _ = (type_path, token);
}

// -----------------------------------------------------------------------------
// Tests
