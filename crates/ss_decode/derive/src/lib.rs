//! See following macros:
//!
//! - [`Decode`](derive_decode)
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static DECODE_ATTRIBUTE_NAME: &str = "decode";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod render;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Derived Decoder
///
/// `#[derive(Decode)]` generates a dedicated decoder for a struct or a label
/// enum, named `<TypeName>Decoder`, and implements:
///
/// - `Decoder<T>` for the decoder
/// - `Decode`
/// - `Decodable`
/// - `Described`
///
/// The decoder is a zero-sized type with one static instance, reached
/// through `<TypeName>Decoder::instance()`. It has the visibility of the
/// type.
///
/// Generic types are not supported, since a decoder is a single instance per
/// type.
///
/// ## Structs
///
/// A struct is read from an object. Every constructor member starts at
/// `Default::default()`, properties are matched to members by name in any
/// order, unknown properties are skipped whole, and absent members keep
/// their default. If a property appears twice the last one wins.
///
/// Member types must therefore implement `Default`, unless the member has a
/// `default = path` option.
///
/// ```rust, ignore
/// #[derive(Decode)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// // {"y": 2, "x": 1} -> Point { x: 1, y: 2 }
/// // {"x": 1}         -> Point { x: 1, y: 0 }
/// ```
///
/// Tuple structs are read from an object too, their properties are named by
/// index (`"0"`, `"1"`, ...) unless renamed.
///
/// ### Constructors
///
/// By default the value is built with the struct literal over all fields.
/// A different constructor is declared with the arguments it takes, named by
/// field:
///
/// ```rust, ignore
/// #[derive(Decode)]
/// #[decode(constructor = Self::new(name))]
/// #[decode(constructor = Self::with_id(name, id))]
/// struct User {
///     name: String,
///     id: u64,
///     cache: Vec<u8>,
/// }
/// ```
///
/// Each argument is decoded as the type of its field. When several
/// constructors are declared, the one with the most arguments is used; ties
/// go to the first declared.
///
/// A struct without fields and without a declared constructor (`struct A;`)
/// has nothing to build from and is rejected.
///
/// ## Enums
///
/// An enum with unit variants only is read from a string label. Labels are
/// compared ignoring case, an unknown label is an error. Two labels that only
/// differ by case are rejected, as is an enum without variants.
///
/// ```rust, ignore
/// #[derive(Decode)]
/// enum Color {
///     Red,
///     Green,
///     Blue,
/// }
///
/// // "green" -> Color::Green
/// ```
///
/// ## Naming
///
/// The property name of a field (and the label of a variant) is its Rust
/// name, adjusted by:
///
/// - `#[decode(rename_all = "...")]` on the type, one of `lowercase`,
///   `UPPERCASE`, `PascalCase`, `camelCase`, `snake_case`,
///   `SCREAMING_SNAKE_CASE`, `kebab-case` and `SCREAMING-KEBAB-CASE`.
/// - `#[decode(rename = "...")]` on the field or variant, which wins over
///   `rename_all`.
///
/// Two members with the same property name are rejected.
///
/// ## Field options
///
/// - `#[decode(skip)]`: the field is never read and keeps its initial value.
///   `PhantomData` fields are skipped as well.
/// - `#[decode(default = path)]`: the initial value is `path()` instead of
///   `Default::default()`.
/// - `#[decode(with = path)]`: the value is read by
///   `path(reader: &mut dyn TokenRead) -> Result<FieldType, FormatError>`
///   instead of `FieldType::decode`.
///
/// ## Type path
///
/// The type path defaults to `module_path!()::TypeName`. It names the type in
/// errors and registry lookups, and can be replaced:
///
/// ```rust, ignore
/// #[derive(Decode)]
/// #[decode(type_path = "shapes::Circle")]
/// struct Circle {
///     radius: f32,
/// }
/// ```
///
/// A custom path must contain a namespace: `"Circle"` alone is rejected.
///
/// ## Auto Registration
///
/// With the `auto_register` feature, every type deriving `Decode` is
/// submitted to `DecoderRegistry::auto_register`.
#[proc_macro_derive(Decode, attributes(decode))]
pub fn derive_decode(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_decode_impls(&ast, &path::ss_decode()).into()
}
