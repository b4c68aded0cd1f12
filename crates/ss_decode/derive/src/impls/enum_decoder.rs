use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{DescriptorKind, TypeDescriptor};
use crate::render::Render;

/// The body of `Decoder::decode` for a label enum.
///
/// Reads one string and returns the first case whose label matches it
/// ignoring case.
pub(crate) fn impl_enum_decoder(
    descriptor: &TypeDescriptor,
    ss_decode_path: &syn::Path,
) -> TokenStream {
    let DescriptorKind::Enum(labels) = &descriptor.kind else {
        return crate::utils::empty();
    };

    let macro_utils_ = crate::path::macro_utils_(ss_decode_path);
    let reader = crate::utils::reader_ident();
    let type_path = descriptor.type_path_tokens();
    let ident = descriptor.ident;

    let cases = labels.iter().map(|label| {
        let wire_label = descriptor.render.wire_label(label);
        let variant = label.ident;
        quote! {
            if #macro_utils_::labels_match(&__label, #wire_label) {
                return #macro_utils_::Result::Ok(#ident::#variant);
            }
        }
    });

    quote! {
        const TYPE_PATH: &str = #type_path;

        let __label = #macro_utils_::expect_label(#reader, TYPE_PATH)?;

        #(#cases)*

        #macro_utils_::Result::Err(#macro_utils_::unknown_label(TYPE_PATH, __label))
    }
}
