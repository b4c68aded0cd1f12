//! The naming policy: which members are read and under which names.
//!
//! A [`Render`] decides per field whether it participates in decoding,
//! the property name it is read from, and emits the `match` arm that reads
//! it. [`RenderPolicy`] selects the render of a type's wire format.

// -----------------------------------------------------------------------------
// Modules

mod json;
mod rename_rule;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use json::JsonRender;
pub(crate) use rename_rule::RenameRule;

use proc_macro2::TokenStream;
use syn::Ident;

use crate::derive_data::{FieldDescriptor, LabelDescriptor};

/// A naming policy of one wire format.
pub(crate) trait Render {
    /// Whether `field` is read from the token stream.
    fn renders(&self, field: &FieldDescriptor) -> bool;

    /// The property name `field` is read from.
    fn wire_key(&self, field: &FieldDescriptor) -> String;

    /// The label `label` is written as.
    fn wire_label(&self, label: &LabelDescriptor) -> String;

    /// A `match` arm over the current property name: when it equals the wire
    /// key of `field`, the following value is decoded into `slot`.
    fn render_deserialization(
        &self,
        field: &FieldDescriptor,
        slot: &Ident,
        ss_decode_path: &syn::Path,
    ) -> TokenStream;
}

/// The render of each supported wire format.
pub(crate) enum RenderPolicy {
    Json(JsonRender),
}

impl Render for RenderPolicy {
    #[inline]
    fn renders(&self, field: &FieldDescriptor) -> bool {
        match self {
            Self::Json(render) => render.renders(field),
        }
    }

    #[inline]
    fn wire_key(&self, field: &FieldDescriptor) -> String {
        match self {
            Self::Json(render) => render.wire_key(field),
        }
    }

    #[inline]
    fn wire_label(&self, label: &LabelDescriptor) -> String {
        match self {
            Self::Json(render) => render.wire_label(label),
        }
    }

    #[inline]
    fn render_deserialization(
        &self,
        field: &FieldDescriptor,
        slot: &Ident,
        ss_decode_path: &syn::Path,
    ) -> TokenStream {
        match self {
            Self::Json(render) => render.render_deserialization(field, slot, ss_decode_path),
        }
    }
}
