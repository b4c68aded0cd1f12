//! Parsing of `#[decode(...)]` attributes.

use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, Expr, ExprLit, ExprPath, Index, Lit, LitStr, Member, Path};

use crate::DECODE_ATTRIBUTE_NAME;
use crate::render::RenameRule;

/// Calls `parse` for every item of every `#[decode(...)]` attribute.
fn parse_decode_attrs(
    attrs: &[Attribute],
    mut parse: impl FnMut(ParseNestedMeta) -> syn::Result<()>,
) -> syn::Result<()> {
    for attr in attrs {
        if attr.path().is_ident(DECODE_ATTRIBUTE_NAME) {
            attr.parse_nested_meta(&mut parse)?;
        }
    }
    Ok(())
}

fn set_once<T>(slot: &mut Option<T>, value: T, meta: &ParseNestedMeta) -> syn::Result<()> {
    if slot.replace(value).is_some() {
        let name = meta
            .path
            .get_ident()
            .map(ToString::to_string)
            .unwrap_or_default();
        return Err(meta.error(format!("duplicate `{name}` attribute")));
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// ConstructorAttr

/// `constructor = path(member, ...)`
#[derive(Debug, Clone)]
pub(crate) struct ConstructorAttr {
    pub func: Path,
    pub args: Vec<Member>,
    pub span: Span,
}

impl ConstructorAttr {
    fn parse_value(meta: &ParseNestedMeta) -> syn::Result<Self> {
        let expr: Expr = meta.value()?.parse()?;
        let span = expr.span();

        let Expr::Call(call) = expr else {
            return Err(syn::Error::new(
                span,
                "expected a call naming the fields passed, e.g. `Self::new(a, b)`",
            ));
        };
        let Expr::Path(ExprPath { path: func, .. }) = *call.func else {
            return Err(syn::Error::new(span, "expected the path of a function"));
        };

        let args = call
            .args
            .iter()
            .map(Self::parse_arg)
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self { func, args, span })
    }

    /// A field name, or a field index for tuple structs.
    fn parse_arg(arg: &Expr) -> syn::Result<Member> {
        if let Expr::Path(ExprPath { path, .. }) = arg
            && let Some(ident) = path.get_ident()
        {
            return Ok(Member::Named(ident.clone()));
        }

        match arg {
            Expr::Lit(ExprLit {
                lit: Lit::Int(int), ..
            }) => Ok(Member::Unnamed(Index {
                index: int.base10_parse()?,
                span: int.span(),
            })),
            _ => Err(syn::Error::new(
                arg.span(),
                "constructor arguments must be field names or tuple indices",
            )),
        }
    }
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// Attributes on the type itself.
///
/// - `#[decode(rename_all = "camelCase")]`
/// - `#[decode(type_path = "a::b::Name")]`
/// - `#[decode(constructor = Self::new(a, b))]`, repeatable
#[derive(Debug, Default)]
pub(crate) struct TypeAttributes {
    pub rename_all: Option<RenameRule>,
    pub type_path: Option<LitStr>,
    pub constructors: Vec<ConstructorAttr>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        parse_decode_attrs(attrs, |meta| this.parse_meta(meta))?;
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("rename_all") {
            let lit: LitStr = meta.value()?.parse()?;
            let Some(rule) = RenameRule::parse(&lit.value()) else {
                let names = RenameRule::names().collect::<Vec<_>>().join("`, `");
                return Err(syn::Error::new(
                    lit.span(),
                    format!("unknown rename rule, expected one of `{names}`"),
                ));
            };
            set_once(&mut self.rename_all, rule, &meta)
        } else if meta.path.is_ident("type_path") {
            let lit: LitStr = meta.value()?.parse()?;
            set_once(&mut self.type_path, lit, &meta)
        } else if meta.path.is_ident("constructor") {
            let constructor = ConstructorAttr::parse_value(&meta)?;
            self.constructors.push(constructor);
            Ok(())
        } else {
            Err(meta.error(
                "unsupported `decode` attribute, expected `rename_all`, `type_path` or `constructor`",
            ))
        }
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Attributes on a struct field.
///
/// - `#[decode(rename = "name")]`
/// - `#[decode(skip)]`
/// - `#[decode(default = path)]`
/// - `#[decode(with = path)]`
#[derive(Debug, Default)]
pub(crate) struct FieldAttributes {
    pub rename: Option<LitStr>,
    pub skip: Option<Span>,
    pub default: Option<Path>,
    pub with: Option<Path>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        parse_decode_attrs(attrs, |meta| this.parse_meta(meta))?;
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("rename") {
            let lit: LitStr = meta.value()?.parse()?;
            set_once(&mut self.rename, lit, &meta)
        } else if meta.path.is_ident("skip") {
            let span = meta.path.require_ident()?.span();
            set_once(&mut self.skip, span, &meta)
        } else if meta.path.is_ident("default") {
            let path: Path = meta.value()?.parse()?;
            set_once(&mut self.default, path, &meta)
        } else if meta.path.is_ident("with") {
            let path: Path = meta.value()?.parse()?;
            set_once(&mut self.with, path, &meta)
        } else {
            Err(meta.error(
                "unsupported `decode` field attribute, expected `rename`, `skip`, `default` or `with`",
            ))
        }
    }
}

// -----------------------------------------------------------------------------
// VariantAttributes

/// Attributes on an enum variant.
///
/// - `#[decode(rename = "label")]`
#[derive(Debug, Default)]
pub(crate) struct VariantAttributes {
    pub rename: Option<LitStr>,
}

impl VariantAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        parse_decode_attrs(attrs, |meta| {
            if meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                set_once(&mut this.rename, lit, &meta)
            } else {
                Err(meta.error("unsupported `decode` variant attribute, expected `rename`"))
            }
        })?;
        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use quote::ToTokens;
    use syn::{Attribute, parse_quote};

    use super::{FieldAttributes, TypeAttributes};
    use crate::render::RenameRule;

    #[test]
    fn type_attributes() {
        let attrs: Vec<Attribute> = vec![
            parse_quote!(#[decode(rename_all = "camelCase", type_path = "a::B")]),
            parse_quote!(#[decode(constructor = Self::new(x, y))]),
            parse_quote!(#[decode(constructor = make(0))]),
            parse_quote!(#[derive(Debug)]),
        ];
        let parsed = TypeAttributes::parse_attrs(&attrs).unwrap();

        assert_eq!(parsed.rename_all, Some(RenameRule::CamelCase));
        assert_eq!(parsed.type_path.unwrap().value(), "a::B");
        assert_eq!(parsed.constructors.len(), 2);
        assert_eq!(parsed.constructors[0].args.len(), 2);
        assert_eq!(
            parsed.constructors[1].func.to_token_stream().to_string(),
            "make"
        );
        assert!(matches!(parsed.constructors[1].args[0], syn::Member::Unnamed(_)));
    }

    #[test]
    fn type_attribute_errors() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[decode(rename_all = "Title Case")])];
        let err = TypeAttributes::parse_attrs(&attrs).unwrap_err();
        assert!(err.to_string().starts_with("unknown rename rule"));

        let attrs: Vec<Attribute> = vec![
            parse_quote!(#[decode(type_path = "a::B")]),
            parse_quote!(#[decode(type_path = "a::C")]),
        ];
        let err = TypeAttributes::parse_attrs(&attrs).unwrap_err();
        assert_eq!(err.to_string(), "duplicate `type_path` attribute");

        let attrs: Vec<Attribute> = vec![parse_quote!(#[decode(transparent)])];
        assert!(TypeAttributes::parse_attrs(&attrs).is_err());
    }

    #[test]
    fn field_attributes() {
        let attrs: Vec<Attribute> = vec![parse_quote!(
            #[decode(rename = "ID", default = make_id, with = read_id)]
        )];
        let parsed = FieldAttributes::parse_attrs(&attrs).unwrap();
        assert_eq!(parsed.rename.unwrap().value(), "ID");
        assert!(parsed.skip.is_none());
        assert!(parsed.default.is_some());
        assert!(parsed.with.is_some());

        let attrs: Vec<Attribute> = vec![parse_quote!(#[decode(skip)])];
        assert!(FieldAttributes::parse_attrs(&attrs).unwrap().skip.is_some());

        let attrs: Vec<Attribute> = vec![parse_quote!(#[decode(flatten)])];
        assert!(FieldAttributes::parse_attrs(&attrs).is_err());
    }
}
