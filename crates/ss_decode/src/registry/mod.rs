//! A runtime index of the derived decoders.
//!
//! ## Menu
//!
//! - [`DecoderMeta`]: the decoder singleton, [`TypeInfo`] and a type-erased
//!   decode function of one derived type.
//! - [`DecoderRegistry`]: [`DecoderMeta`]s by `TypeId`, full type path and
//!   short type name.
//!
//! ## auto_register
//!
//! See [`DecoderRegistry::auto_register`].
//!
//! With the `auto_register` feature every non-generic `#[derive(Decode)]`
//! submits itself through the [`inventory`] crate. Not all platforms support
//! it (although major platforms do); on the others `auto_register` does
//! nothing and returns `false`.
//!
//! [`TypeInfo`]: crate::info::TypeInfo
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod decoder_meta;
mod decoder_registry;

// -----------------------------------------------------------------------------
// Exports

pub use decoder_meta::DecoderMeta;
pub use decoder_registry::DecoderRegistry;
