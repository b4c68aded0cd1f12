//! This independent module is used to provide the required path.
//! So as to minimize changes when the `ss_decode` structure is modified.
//!
//! The only special feature is the path of ss_decode itself,
//! See [`ss_decode`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `ss_decode` crate.
///
/// Not all crates can access the runtime crate through `ss_decode`,
/// we have to scan the builder's `cargo.toml`.
///
/// 1. For crates that depend on `ss_decode`, `::ss_decode` is returned here.
/// 2. For crates that depend on `structser`, `::structser::decode` is returned here.
/// 3. For crates that depend on `ss_core`, `::ss_core::decode` is returned here.
/// 4. For crates that depend on `ss`, `::ss::decode` is returned here.
/// 5. For other situations, `::ss_decode` is returned here, but this may be incorrect.
///
/// The cost of this function is relatively high (accessing files, obtaining read-write lock permissions, querying content...),
/// so the crate path is obtained once per derive and passed around.
pub(crate) fn ss_decode() -> syn::Path {
    ss_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("ss_decode"))
}

// -----------------------------------------------------------------------------
// Paths

#[inline(always)]
pub(crate) fn macro_utils_(ss_decode_path: &syn::Path) -> TokenStream {
    quote! {
        #ss_decode_path::__macro_exports::macro_utils
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(ss_decode_path: &syn::Path) -> TokenStream {
    quote! {
        #ss_decode_path::__macro_exports::auto_register
    }
}

#[inline(always)]
pub(crate) fn decode_(ss_decode_path: &syn::Path) -> TokenStream {
    quote! {
        #ss_decode_path::Decode
    }
}

#[inline(always)]
pub(crate) fn decoder_(ss_decode_path: &syn::Path) -> TokenStream {
    quote! {
        #ss_decode_path::Decoder
    }
}

#[inline(always)]
pub(crate) fn decodable_(ss_decode_path: &syn::Path) -> TokenStream {
    quote! {
        #ss_decode_path::Decodable
    }
}

#[inline(always)]
pub(crate) fn format_error_(ss_decode_path: &syn::Path) -> TokenStream {
    quote! {
        #ss_decode_path::FormatError
    }
}

#[inline(always)]
pub(crate) fn token_(ss_decode_path: &syn::Path) -> TokenStream {
    quote! {
        #ss_decode_path::token::Token
    }
}

#[inline(always)]
pub(crate) fn token_read_(ss_decode_path: &syn::Path) -> TokenStream {
    quote! {
        #ss_decode_path::token::TokenRead
    }
}

#[inline(always)]
pub(crate) fn described_(ss_decode_path: &syn::Path) -> TokenStream {
    quote! {
        #ss_decode_path::info::Described
    }
}

#[inline(always)]
pub(crate) fn type_info_(ss_decode_path: &syn::Path) -> TokenStream {
    quote! {
        #ss_decode_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn type_kind_(ss_decode_path: &syn::Path) -> TokenStream {
    quote! {
        #ss_decode_path::info::TypeKind
    }
}

#[inline(always)]
pub(crate) fn field_info_(ss_decode_path: &syn::Path) -> TokenStream {
    quote! {
        #ss_decode_path::info::FieldInfo
    }
}

#[inline(always)]
pub(crate) fn label_info_(ss_decode_path: &syn::Path) -> TokenStream {
    quote! {
        #ss_decode_path::info::LabelInfo
    }
}
