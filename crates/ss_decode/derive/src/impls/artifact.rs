use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::derive_data::TypeDescriptor;

/// The decoder type, and the impls tying it to the derived type.
///
/// Returns `(declaration, impls)`: the declaration must be nameable from the
/// derive's module, the impls are placed in an anonymous const.
pub(crate) fn impl_decoder_artifact(
    descriptor: &TypeDescriptor,
    decode_body: TokenStream,
    ss_decode_path: &syn::Path,
) -> (TokenStream, TokenStream) {
    let macro_utils_ = crate::path::macro_utils_(ss_decode_path);
    let decode_ = crate::path::decode_(ss_decode_path);
    let decoder_ = crate::path::decoder_(ss_decode_path);
    let decodable_ = crate::path::decodable_(ss_decode_path);
    let format_error_ = crate::path::format_error_(ss_decode_path);
    let token_read_ = crate::path::token_read_(ss_decode_path);
    let reader = crate::utils::reader_ident();

    let ident = descriptor.ident;
    let vis = descriptor.vis;
    let decoder_ident = format_ident!("{}Decoder", ident);
    let doc = format!(" The decoder of [`{ident}`], generated by `#[derive(Decode)]`.");

    let declaration = quote! {
        #[doc = #doc]
        #vis struct #decoder_ident {
            _private: (),
        }
    };

    let impls = quote! {
        impl #decoder_ident {
            /// Returns the singleton instance.
            #[inline]
            pub fn instance() -> &'static #decoder_ident {
                static INSTANCE: #decoder_ident = #decoder_ident { _private: () };
                &INSTANCE
            }
        }

        impl #decoder_<#ident> for #decoder_ident {
            fn decode(
                &self,
                #reader: &mut dyn #token_read_,
            ) -> #macro_utils_::Result<#ident, #format_error_> {
                #decode_body
            }
        }

        impl #decode_ for #ident {
            #[inline]
            fn decode(
                reader: &mut dyn #token_read_,
            ) -> #macro_utils_::Result<Self, #format_error_> {
                <#decoder_ident as #decoder_<#ident>>::decode(#decoder_ident::instance(), reader)
            }
        }

        impl #decodable_ for #ident {
            type Decoder = #decoder_ident;

            #[inline]
            fn decoder() -> &'static #decoder_ident {
                #decoder_ident::instance()
            }
        }
    };

    (declaration, impls)
}
