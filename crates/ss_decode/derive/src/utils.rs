use proc_macro2::TokenStream;

/// An empty token stream.
#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}

/// Strips the `r#` prefix of a raw identifier.
pub(crate) fn unraw(ident: &syn::Ident) -> String {
    let name = ident.to_string();
    match name.strip_prefix("r#") {
        Some(stripped) => stripped.to_owned(),
        None => name,
    }
}

/// The parameter holding the token stream in generated decode routines.
#[inline]
pub(crate) fn reader_ident() -> syn::Ident {
    syn::Ident::new("__reader", proc_macro2::Span::call_site())
}
