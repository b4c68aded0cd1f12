use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{Constructor, DescriptorKind, TypeDescriptor};
use crate::render::Render;

/// The body of `Decoder::decode` for a struct.
///
/// Slots start at their initial value, properties overwrite them in input
/// order, then the constructor is called with every slot. The object ends at
/// its `EndObject` or at the end of the stream.
pub(crate) fn impl_struct_decoder(
    descriptor: &TypeDescriptor,
    ss_decode_path: &syn::Path,
) -> TokenStream {
    let DescriptorKind::Struct {
        constructor,
        members,
    } = &descriptor.kind
    else {
        return crate::utils::empty();
    };

    let macro_utils_ = crate::path::macro_utils_(ss_decode_path);
    let token_ = crate::path::token_(ss_decode_path);
    let token_read_ = crate::path::token_read_(ss_decode_path);
    let reader = crate::utils::reader_ident();
    let type_path = descriptor.type_path_tokens();
    let ident = descriptor.ident;

    let slots = members.iter().map(|field| field.slot()).collect::<Vec<_>>();

    let slot_decls = members.iter().zip(&slots).map(|(field, slot)| {
        let ty = &field.ty;
        let init = field.initial_value(&macro_utils_);
        quote! {
            #[allow(unused_mut)]
            let mut #slot: #ty = #init;
        }
    });

    let arms = members
        .iter()
        .zip(&slots)
        .filter(|(field, _)| descriptor.render.renders(field))
        .map(|(field, slot)| {
            descriptor
                .render
                .render_deserialization(field, slot, ss_decode_path)
        });

    let construct = match constructor {
        Constructor::Literal { named: true } => {
            let names = members.iter().map(|field| &field.member);
            quote!(#ident { #(#names: #slots),* })
        }
        Constructor::Literal { named: false } => quote!(#ident(#(#slots),*)),
        Constructor::Call(func) => quote!(#func(#(#slots),*)),
    };

    quote! {
        const TYPE_PATH: &str = #type_path;

        #macro_utils_::expect_start_object(#reader, TYPE_PATH)?;

        #(#slot_decls)*

        loop {
            match #token_read_::next_token(#reader)? {
                #macro_utils_::Option::None
                | #macro_utils_::Option::Some(#token_::EndObject) => break,
                #macro_utils_::Option::Some(#token_::PropertyName(__name)) => {
                    match __name.as_str() {
                        #(#arms)*
                        _ => #macro_utils_::skip_property(#reader, TYPE_PATH, &__name)?,
                    }
                }
                #macro_utils_::Option::Some(__token) => {
                    #macro_utils_::ignore_token(TYPE_PATH, &__token);
                }
            }
        }

        #macro_utils_::Result::Ok(#construct)
    }
}

// -----------------------------------------------------------------------------
// Tests
