use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::TypeInfo;
use crate::token::TokenRead;
use crate::{Decodable, FormatError};

// -----------------------------------------------------------------------------
// DecoderMeta

/// Runtime entry of one derived type, stored in the
/// [`DecoderRegistry`](crate::registry::DecoderRegistry).
///
/// # Example
///
/// ```
/// use ss_decode::{Decode, registry::DecoderMeta};
/// use ss_decode::token::TokenTape;
///
/// #[derive(Decode, Debug, PartialEq)]
/// enum Axis {
///     X,
///     Y,
/// }
///
/// let meta = DecoderMeta::of::<Axis>();
/// assert_eq!(meta.type_info().ident(), "Axis");
///
/// let mut tape = TokenTape::from_json(r#""y""#).unwrap();
/// let value = meta.decode(&mut tape).unwrap();
/// assert_eq!(value.downcast_ref::<Axis>(), Some(&Axis::Y));
/// ```
#[derive(Clone, Copy)]
pub struct DecoderMeta {
    type_id: TypeId,
    type_info: &'static TypeInfo,
    decoder: &'static (dyn Any + Send + Sync),
    decode_fn: fn(&mut dyn TokenRead) -> Result<Box<dyn Any>, FormatError>,
}

fn decode_boxed<T: Decodable>(reader: &mut dyn TokenRead) -> Result<Box<dyn Any>, FormatError> {
    match T::decode(reader) {
        Ok(value) => Ok(Box::new(value)),
        Err(e) => Err(e),
    }
}

impl DecoderMeta {
    /// Creates the entry of the derived type `T`.
    #[inline]
    pub fn of<T: Decodable>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_info: T::type_info(),
            decoder: T::decoder(),
            decode_fn: decode_boxed::<T>,
        }
    }

    /// Returns the `TypeId` of the decoded type.
    #[inline(always)]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the [`TypeInfo`] of the decoded type.
    #[inline(always)]
    pub const fn type_info(&self) -> &'static TypeInfo {
        self.type_info
    }

    /// Returns the decoder singleton if `T` is the decoded type.
    #[inline]
    pub fn decoder<T: Decodable>(&self) -> Option<&'static T::Decoder> {
        let decoder: &'static (dyn Any + Send + Sync) = self.decoder;
        decoder.downcast_ref::<T::Decoder>()
    }

    /// Decodes one value of the decoded type.
    #[inline]
    pub fn decode(&self, reader: &mut dyn TokenRead) -> Result<Box<dyn Any>, FormatError> {
        (self.decode_fn)(reader)
    }
}

impl fmt::Debug for DecoderMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoderMeta")
            .field("type_path", &self.type_info.type_path())
            .finish_non_exhaustive()
    }
}
