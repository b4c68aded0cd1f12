use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive_data::{DescriptorKind, TypeDescriptor};

/// Provided for `#[derive(Decode)]`.
///
/// The decoder type is declared next to the derived type so that it can be
/// named by users, every impl goes into an anonymous const.
pub(crate) fn match_decode_impls(ast: &DeriveInput, ss_decode_path: &syn::Path) -> TokenStream {
    // Parse type kind, attributes and members, and check the schema.
    let descriptor = match TypeDescriptor::from_input(ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error(),
    };

    let decode_body = match &descriptor.kind {
        DescriptorKind::Struct { .. } => super::impl_struct_decoder(&descriptor, ss_decode_path),
        DescriptorKind::Enum(_) => super::impl_enum_decoder(&descriptor, ss_decode_path),
    };

    let (decoder_type, decoder_impls) =
        super::impl_decoder_artifact(&descriptor, decode_body, ss_decode_path);
    let described_tokens = super::impl_trait_described(&descriptor, ss_decode_path);
    let auto_register_tokens = super::get_auto_register_impl(&descriptor, ss_decode_path);

    quote! {
        #decoder_type

        const _: () = {
            #decoder_impls

            #described_tokens

            #auto_register_tokens
        };
    }
}

// -----------------------------------------------------------------------------
// Tests
