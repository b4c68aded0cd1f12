// -----------------------------------------------------------------------------
// Modules

mod match_decode;

mod enum_decoder;
mod struct_decoder;

mod artifact;
mod auto_register;
mod trait_described;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use match_decode::match_decode_impls;

use artifact::impl_decoder_artifact;
use auto_register::get_auto_register_impl;
use enum_decoder::impl_enum_decoder;
use struct_decoder::impl_struct_decoder;
use trait_described::impl_trait_described;
