//! Static descriptions of derived types.
//!
//! ## Menu
//!
//! - [`TypeInfo`]: identity of a derived type and the shape of its wire form.
//!     - [`type_path`](TypeInfo::type_path): full path, unique among registered types.
//!     - [`ident`](TypeInfo::ident): the name without module path, may be duplicated.
//!     - [`module_path`](TypeInfo::module_path): the namespace.
//! - [`TypeKind`]: `Struct` with its [`FieldInfo`]s, or `Enum` with its [`LabelInfo`]s.
//! - [`FieldInfo`]: one constructor member and the property name it is read from.
//! - [`LabelInfo`]: one enum case and its wire label.
//! - [`Described`]: a trait for obtaining the `TypeInfo` of a type.
//!
//! Every `#[derive(Decode)]` emits one `static` [`TypeInfo`], so the
//! references returned here live for the whole program.

// -----------------------------------------------------------------------------
// Modules

mod described;
mod field_info;
mod type_info;

// -----------------------------------------------------------------------------
// Exports

pub use described::Described;
pub use field_info::{FieldInfo, LabelInfo};
pub use type_info::{TypeInfo, TypeKind};
