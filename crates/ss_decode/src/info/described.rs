use crate::info::TypeInfo;

/// A type with a static [`TypeInfo`].
///
/// Implemented by `#[derive(Decode)]`.
///
/// # Example
///
/// ```
/// use ss_decode::{Decode, info::Described};
///
/// #[derive(Decode)]
/// struct Foo {
///     #[decode(rename = "A")]
///     a: u32,
/// }
///
/// let info = Foo::type_info();
/// assert_eq!(info.ident(), "Foo");
/// assert_eq!(info.fields().unwrap()[0].wire_key(), Some("A"));
/// ```
pub trait Described {
    /// Returns the compile-time description of `Self`.
    fn type_info() -> &'static TypeInfo;
}
