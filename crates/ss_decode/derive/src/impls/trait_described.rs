use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{DescriptorKind, TypeDescriptor};
use crate::render::Render;

/// Implements `Described` with a static `TypeInfo`.
pub(crate) fn impl_trait_described(
    descriptor: &TypeDescriptor,
    ss_decode_path: &syn::Path,
) -> TokenStream {
    let macro_utils_ = crate::path::macro_utils_(ss_decode_path);
    let described_ = crate::path::described_(ss_decode_path);
    let type_info_ = crate::path::type_info_(ss_decode_path);
    let type_kind_ = crate::path::type_kind_(ss_decode_path);

    let ident = descriptor.ident;
    let type_ident = descriptor.type_ident();
    let module_path = descriptor.module_path_tokens();
    let type_path = descriptor.type_path_tokens();

    let (items_ty, items, kind) = match &descriptor.kind {
        DescriptorKind::Struct { members, .. } => {
            let field_info_ = crate::path::field_info_(ss_decode_path);
            let items = members
                .iter()
                .map(|field| {
                    let name = field.name();
                    let ty = &field.ty;
                    if descriptor.render.renders(field) {
                        let wire_key = descriptor.render.wire_key(field);
                        quote! {
                            #field_info_::new(#name, #macro_utils_::stringify!(#ty), #wire_key)
                        }
                    } else {
                        quote! {
                            #field_info_::hidden(#name, #macro_utils_::stringify!(#ty))
                        }
                    }
                })
                .collect::<Vec<_>>();
            (field_info_, items, quote!(#type_kind_::Struct(&ITEMS)))
        }
        DescriptorKind::Enum(labels) => {
            let label_info_ = crate::path::label_info_(ss_decode_path);
            let items = labels
                .iter()
                .map(|label| {
                    let name = crate::utils::unraw(label.ident);
                    let wire_label = descriptor.render.wire_label(label);
                    quote!(#label_info_::new(#name, #wire_label))
                })
                .collect::<Vec<_>>();
            (label_info_, items, quote!(#type_kind_::Enum(&ITEMS)))
        }
    };
    let len = items.len();

    quote! {
        impl #described_ for #ident {
            fn type_info() -> &'static #type_info_ {
                static ITEMS: [#items_ty; #len] = [#(#items),*];
                static INFO: #type_info_ =
                    #type_info_::new(#type_ident, #module_path, #type_path, #kind);
                &INFO
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
