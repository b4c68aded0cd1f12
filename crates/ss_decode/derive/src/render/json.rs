use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use super::{Render, RenameRule};
use crate::derive_data::{FieldDescriptor, LabelDescriptor};

/// Names for JSON-like object formats.
///
/// Properties are matched by exact name: the `rename` of the member if any,
/// else its Rust name under the type's `rename_all` rule.
pub(crate) struct JsonRender {
    rename_all: RenameRule,
}

impl JsonRender {
    #[inline]
    pub fn new(rename_all: RenameRule) -> Self {
        Self { rename_all }
    }
}

impl Render for JsonRender {
    fn renders(&self, field: &FieldDescriptor) -> bool {
        field.attrs.skip.is_none() && !field.is_phantom()
    }

    fn wire_key(&self, field: &FieldDescriptor) -> String {
        match &field.attrs.rename {
            Some(rename) => rename.value(),
            None => self.rename_all.apply_to_field(&field.name()),
        }
    }

    fn wire_label(&self, label: &LabelDescriptor) -> String {
        match &label.attrs.rename {
            Some(rename) => rename.value(),
            None => self
                .rename_all
                .apply_to_variant(&crate::utils::unraw(label.ident)),
        }
    }

    fn render_deserialization(
        &self,
        field: &FieldDescriptor,
        slot: &Ident,
        ss_decode_path: &syn::Path,
    ) -> TokenStream {
        let key = self.wire_key(field);
        let reader = crate::utils::reader_ident();

        let value = match &field.attrs.with {
            Some(with) => quote!(#with(#reader)),
            None => {
                let ty = &field.ty;
                let decode_ = crate::path::decode_(ss_decode_path);
                quote!(<#ty as #decode_>::decode(#reader))
            }
        };

        quote! {
            #key => {
                #slot = #value?;
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use syn::{DeriveInput, parse_quote};

    use crate::derive_data::{DescriptorKind, TypeDescriptor};
    use crate::render::Render;

    #[test]
    fn names_and_arms() {
        let ast: DeriveInput = parse_quote! {
            #[decode(rename_all = "camelCase")]
            struct Track {
                track_title: String,
                #[decode(rename = "BPM", with = read_bpm)]
                beats: u16,
                r#type: u8,
            }
        };
        let descriptor = TypeDescriptor::from_input(&ast).unwrap();
        let DescriptorKind::Struct { members, .. } = &descriptor.kind else {
            panic!("expected a struct descriptor");
        };
        let render = &descriptor.render;

        assert_eq!(render.wire_key(&members[0]), "trackTitle");
        assert_eq!(render.wire_key(&members[1]), "BPM");
        assert_eq!(render.wire_key(&members[2]), "type");

        let ss_decode: syn::Path = parse_quote!(::ss_decode);
        let arm = render.render_deserialization(&members[0], &members[0].slot(), &ss_decode);
        assert_eq!(
            arm.to_string(),
            quote::quote! {
                "trackTitle" => {
                    __field_track_title = <String as ::ss_decode::Decode>::decode(__reader)?;
                }
            }
            .to_string()
        );

        let arm = render.render_deserialization(&members[1], &members[1].slot(), &ss_decode);
        assert!(arm.to_string().contains("read_bpm (__reader) ?"));
    }

    #[test]
    fn labels() {
        let ast: DeriveInput = parse_quote! {
            #[decode(rename_all = "SCREAMING_SNAKE_CASE")]
            enum Mode {
                DarkMode,
                #[decode(rename = "light")]
                LightMode,
            }
        };
        let descriptor = TypeDescriptor::from_input(&ast).unwrap();
        let DescriptorKind::Enum(labels) = &descriptor.kind else {
            panic!("expected an enum descriptor");
        };

        assert_eq!(descriptor.render.wire_label(&labels[0]), "DARK_MODE");
        assert_eq!(descriptor.render.wire_label(&labels[1]), "light");
    }
}
