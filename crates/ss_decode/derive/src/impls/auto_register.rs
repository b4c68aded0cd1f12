use proc_macro2::TokenStream;

use crate::derive_data::TypeDescriptor;

/// Submits the type to `DecoderRegistry::auto_register`.
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(
    descriptor: &TypeDescriptor,
    ss_decode_path: &syn::Path,
) -> TokenStream {
    let auto_register_ = crate::path::auto_register_(ss_decode_path);
    let ident = descriptor.ident;

    quote::quote_spanned! { ident.span() =>
        #auto_register_::inventory::submit!{
            #auto_register_::__AutoRegisterFunc(
                <#ident as #auto_register_::__RegisterType>::__register
            )
        }
    }
}

/// Submits the type to `DecoderRegistry::auto_register`.
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &TypeDescriptor, _: &syn::Path) -> TokenStream {
    crate::utils::empty()
}
