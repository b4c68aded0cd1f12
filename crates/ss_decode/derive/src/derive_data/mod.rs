//! Provide some tools for parsing token stream.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod type_descriptor;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{ConstructorAttr, FieldAttributes, TypeAttributes, VariantAttributes};
pub(crate) use type_descriptor::{Constructor, DescriptorKind};
pub(crate) use type_descriptor::{FieldDescriptor, LabelDescriptor, TypeDescriptor};
