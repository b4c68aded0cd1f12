#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate as `::ss_decode`, which must also resolve
// inside the crate itself (unit tests derive on local types).
extern crate self as ss_decode;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod decode;
mod error;

pub mod info;
pub mod registry;
pub mod token;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use decode::{Decodable, Decode, Decoder, from_tape};
pub use error::FormatError;

#[cfg(feature = "json")]
pub use decode::from_json;

pub use ss_decode_derive as derive;
pub use ss_decode_derive::Decode;
