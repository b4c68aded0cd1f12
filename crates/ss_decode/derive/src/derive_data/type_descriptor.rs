use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::spanned::Spanned;
use syn::visit_mut::{self, VisitMut};
use syn::{Data, DataEnum, DataStruct, DeriveInput, Fields, Ident, LitStr, Member, Path, Type};

use super::{ConstructorAttr, FieldAttributes, TypeAttributes, VariantAttributes};
use crate::render::{JsonRender, Render, RenderPolicy};

// -----------------------------------------------------------------------------
// Define

/// Everything the builders need to know about a type deriving `Decode`.
pub(crate) struct TypeDescriptor<'a> {
    pub ident: &'a Ident,
    pub vis: &'a syn::Visibility,
    pub namespace: Namespace,
    pub render: RenderPolicy,
    pub kind: DescriptorKind<'a>,
}

/// Where the type lives, used to build its type path.
pub(crate) enum Namespace {
    /// The module of the derive, `module_path!()`.
    Module,
    /// The namespace part of `#[decode(type_path = "...")]`.
    Custom { namespace: String, ident: String },
}

pub(crate) enum DescriptorKind<'a> {
    Struct {
        constructor: Constructor,
        /// The constructor members, in argument order.
        members: Vec<FieldDescriptor>,
    },
    Enum(Vec<LabelDescriptor<'a>>),
}

/// How the decoded value is assembled from the member slots.
pub(crate) enum Constructor {
    /// `Self { a, b }` for named fields, `Self(a, b)` for tuple fields.
    Literal { named: bool },
    /// A declared function, called with the slots in member order.
    Call(Path),
}

/// A struct field that is a constructor member.
///
/// `Self` in `ty` and in the `default`/`with` paths is already replaced by
/// the type name.
pub(crate) struct FieldDescriptor {
    pub member: Member,
    pub ty: Type,
    pub attrs: FieldAttributes,
}

/// A unit enum variant.
pub(crate) struct LabelDescriptor<'a> {
    pub ident: &'a Ident,
    pub attrs: VariantAttributes,
}

// -----------------------------------------------------------------------------
// FieldDescriptor Implementation

impl FieldDescriptor {
    /// The field name as written, tuple fields by index.
    pub fn name(&self) -> String {
        match &self.member {
            Member::Named(ident) => crate::utils::unraw(ident),
            Member::Unnamed(index) => index.index.to_string(),
        }
    }

    /// Whether the declared type is `PhantomData<_>`, which has no wire shape.
    pub fn is_phantom(&self) -> bool {
        match &self.ty {
            Type::Path(type_path) => type_path
                .path
                .segments
                .last()
                .is_some_and(|segment| segment.ident == "PhantomData"),
            _ => false,
        }
    }

    /// The identifier of the local slot holding this member.
    pub fn slot(&self) -> Ident {
        Ident::new(&format!("__field_{}", self.name()), self.member.span())
    }

    /// The initial value of the slot.
    pub fn initial_value(&self, macro_utils: &TokenStream) -> TokenStream {
        let ty = &self.ty;
        match &self.attrs.default {
            Some(default) => quote!(#default()),
            None => quote!(<#ty as #macro_utils::Default>::default()),
        }
    }
}

// -----------------------------------------------------------------------------
// TypeDescriptor Implementation

impl<'a> TypeDescriptor<'a> {
    /// Parses the derive input and checks it can be decoded.
    pub fn from_input(ast: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;
        let ident = &ast.ident;

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new(
                ast.generics.span(),
                format!("`{ident}` is generic, a decoder is a single instance per type"),
            ));
        }

        let namespace = match &attrs.type_path {
            Some(lit) => Namespace::parse(lit)?,
            None => Namespace::Module,
        };

        let render = RenderPolicy::Json(JsonRender::new(attrs.rename_all.unwrap_or_default()));

        let kind = match &ast.data {
            Data::Struct(data) => Self::parse_struct(ident, data, &attrs.constructors)?,
            Data::Enum(data) => {
                if !attrs.constructors.is_empty() {
                    return Err(syn::Error::new(
                        attrs.constructors[0].span,
                        "`constructor` is only supported on structs",
                    ));
                }
                Self::parse_enum(ident, data)?
            }
            Data::Union(_) => {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("`{ident}` is a union, only structs and enums can derive `Decode`"),
                ));
            }
        };

        let descriptor = Self {
            ident,
            vis: &ast.vis,
            namespace,
            render,
            kind,
        };
        descriptor.check_wire_names()?;
        Ok(descriptor)
    }

    fn parse_struct(
        ident: &Ident,
        data: &'a DataStruct,
        constructors: &[ConstructorAttr],
    ) -> syn::Result<DescriptorKind<'a>> {
        let mut fields = Vec::with_capacity(data.fields.len());
        for (index, field) in data.fields.iter().enumerate() {
            let member = match &field.ident {
                Some(ident) => Member::Named(ident.clone()),
                None => Member::Unnamed(syn::Index {
                    index: index as u32,
                    span: field.ty.span(),
                }),
            };
            let mut attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            attrs.default = attrs.default.map(|path| SelfToIdent::path(ident, path));
            attrs.with = attrs.with.map(|path| SelfToIdent::path(ident, path));

            fields.push(FieldDescriptor {
                member,
                ty: SelfToIdent::ty(ident, field.ty.clone()),
                attrs,
            });
        }

        if constructors.is_empty() {
            if fields.is_empty() {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("no constructor for `{ident}`"),
                ));
            }
            return Ok(DescriptorKind::Struct {
                constructor: Constructor::Literal {
                    named: matches!(data.fields, Fields::Named(_)),
                },
                members: fields,
            });
        }

        for constructor in constructors {
            Self::check_constructor(ident, constructor, &fields)?;
        }

        // The constructor with the most parameters wins, the first declared on ties.
        let mut selected = &constructors[0];
        for constructor in &constructors[1..] {
            if constructor.args.len() > selected.args.len() {
                selected = constructor;
            }
        }

        let mut fields = fields.into_iter().map(Some).collect::<Vec<_>>();
        let members = selected
            .args
            .iter()
            .filter_map(|arg| {
                let position = fields
                    .iter()
                    .position(|field| field.as_ref().is_some_and(|f| f.member == *arg))?;
                fields[position].take()
            })
            .collect();

        Ok(DescriptorKind::Struct {
            constructor: Constructor::Call(SelfToIdent::path(ident, selected.func.clone())),
            members,
        })
    }

    fn check_constructor(
        ident: &Ident,
        constructor: &ConstructorAttr,
        fields: &[FieldDescriptor],
    ) -> syn::Result<()> {
        for (i, arg) in constructor.args.iter().enumerate() {
            if !fields.iter().any(|field| field.member == *arg) {
                return Err(syn::Error::new(
                    arg.span(),
                    format!(
                        "`{}` is not a field of `{ident}`",
                        arg.to_token_stream()
                    ),
                ));
            }
            if constructor.args[..i].contains(arg) {
                return Err(syn::Error::new(
                    arg.span(),
                    format!(
                        "`{}` is passed twice to the constructor",
                        arg.to_token_stream()
                    ),
                ));
            }
        }
        Ok(())
    }

    fn parse_enum(ident: &Ident, data: &'a DataEnum) -> syn::Result<DescriptorKind<'a>> {
        if data.variants.is_empty() {
            return Err(syn::Error::new(
                ident.span(),
                format!("no labels for `{ident}`"),
            ));
        }

        let mut labels = Vec::with_capacity(data.variants.len());
        for variant in &data.variants {
            if !matches!(variant.fields, Fields::Unit) {
                return Err(syn::Error::new(
                    variant.span(),
                    format!(
                        "variant `{}` of `{ident}` carries data, only unit variants can be read from a label",
                        variant.ident
                    ),
                ));
            }
            labels.push(LabelDescriptor {
                ident: &variant.ident,
                attrs: VariantAttributes::parse_attrs(&variant.attrs)?,
            });
        }

        Ok(DescriptorKind::Enum(labels))
    }

    /// Rejects members sharing a wire key, and labels equal up to case.
    fn check_wire_names(&self) -> syn::Result<()> {
        match &self.kind {
            DescriptorKind::Struct { members, .. } => {
                let mut seen: Vec<String> = Vec::with_capacity(members.len());
                for field in members.iter().filter(|f| self.render.renders(f)) {
                    let key = self.render.wire_key(field);
                    if seen.contains(&key) {
                        return Err(syn::Error::new(
                            field.member.span(),
                            format!("duplicate property name \"{key}\" in `{}`", self.ident),
                        ));
                    }
                    seen.push(key);
                }
            }
            DescriptorKind::Enum(labels) => {
                let mut seen: Vec<String> = Vec::with_capacity(labels.len());
                for label in labels {
                    let folded = fold_case(&self.render.wire_label(label));
                    if seen.contains(&folded) {
                        return Err(syn::Error::new(
                            label.ident.span(),
                            format!(
                                "label \"{}\" of `{}` collides with another label when case is ignored",
                                self.render.wire_label(label),
                                self.ident
                            ),
                        ));
                    }
                    seen.push(folded);
                }
            }
        }
        Ok(())
    }

    /// The type path as a `&'static str` expression.
    pub fn type_path_tokens(&self) -> TokenStream {
        match &self.namespace {
            Namespace::Module => {
                let ident = self.ident.to_string();
                quote!(::core::concat!(::core::module_path!(), "::", #ident))
            }
            Namespace::Custom { namespace, ident } => {
                let type_path = format!("{namespace}::{ident}");
                quote!(#type_path)
            }
        }
    }

    /// The namespace as a `&'static str` expression.
    pub fn module_path_tokens(&self) -> TokenStream {
        match &self.namespace {
            Namespace::Module => quote!(::core::module_path!()),
            Namespace::Custom { namespace, .. } => quote!(#namespace),
        }
    }

    /// The short type name.
    pub fn type_ident(&self) -> String {
        match &self.namespace {
            Namespace::Module => self.ident.to_string(),
            Namespace::Custom { ident, .. } => ident.clone(),
        }
    }
}

/// Unicode lowercase folding, as labels are compared when decoding.
fn fold_case(label: &str) -> String {
    label.chars().flat_map(char::to_lowercase).collect()
}

// -----------------------------------------------------------------------------
// SelfToIdent

/// Rewrites `Self` into the type name in every path of a node.
///
/// Generated code runs inside `impl Decoder<T> for TDecoder`, where `Self`
/// is the decoder.
struct SelfToIdent<'a> {
    ident: &'a Ident,
}

impl SelfToIdent<'_> {
    fn path(ident: &Ident, mut path: Path) -> Path {
        SelfToIdent { ident }.visit_path_mut(&mut path);
        path
    }

    fn ty(ident: &Ident, mut ty: Type) -> Type {
        SelfToIdent { ident }.visit_type_mut(&mut ty);
        ty
    }
}

impl VisitMut for SelfToIdent<'_> {
    fn visit_path_mut(&mut self, path: &mut Path) {
        if path.leading_colon.is_none()
            && let Some(first) = path.segments.first_mut()
            && first.ident == "Self"
        {
            first.ident = Ident::new(&self.ident.to_string(), first.ident.span());
        }
        visit_mut::visit_path_mut(self, path);
    }
}

// -----------------------------------------------------------------------------
// Namespace Implementation

impl Namespace {
    /// Splits `"a::b::Name"` into its namespace and name.
    fn parse(lit: &LitStr) -> syn::Result<Self> {
        let path: Path = lit.parse()?;
        if path.leading_colon.is_some() {
            return Err(syn::Error::new(
                lit.span(),
                "did not expect a leading double colon (`::`)",
            ));
        }
        if let Some(segment) = path.segments.iter().find(|s| !s.arguments.is_none()) {
            return Err(syn::Error::new(
                lit.span(),
                format!("unexpected generic arguments on `{}`", segment.ident),
            ));
        }

        let mut segments = path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect::<Vec<_>>();

        let ident = segments.pop().unwrap_or_default();
        if segments.is_empty() {
            return Err(syn::Error::new(
                lit.span(),
                format!("no namespace for `{ident}`"),
            ));
        }

        Ok(Self::Custom {
            namespace: segments.join("::"),
            ident,
        })
    }
}

// -----------------------------------------------------------------------------
// Tests
