use crate::info::{FieldInfo, LabelInfo};

// -----------------------------------------------------------------------------
// TypeKind

/// The decoded shape of a derived type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// An object, members in constructor order.
    Struct(&'static [FieldInfo]),
    /// A string label, cases in declaration order.
    Enum(&'static [LabelInfo]),
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time description of a derived type.
///
/// # Example
///
/// ```
/// use ss_decode::{Decode, info::{Described, TypeKind}};
///
/// #[derive(Decode)]
/// #[decode(type_path = "shapes::Shape")]
/// enum Shape {
///     Circle,
///     Square,
/// }
///
/// let info = Shape::type_info();
/// assert_eq!(info.type_path(), "shapes::Shape");
/// assert_eq!(info.module_path(), "shapes");
/// assert!(matches!(info.kind(), TypeKind::Enum(labels) if labels.len() == 2));
/// assert_eq!(info.label("SQUARE").unwrap().name(), "Square");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfo {
    ident: &'static str,
    module_path: &'static str,
    type_path: &'static str,
    kind: TypeKind,
}

impl TypeInfo {
    /// Creates a new [`TypeInfo`].
    ///
    /// `type_path` is expected to be `module_path::ident`.
    #[inline]
    pub const fn new(
        ident: &'static str,
        module_path: &'static str,
        type_path: &'static str,
        kind: TypeKind,
    ) -> Self {
        Self {
            ident,
            module_path,
            type_path,
            kind,
        }
    }

    /// Returns the type name without module path.
    #[inline]
    pub const fn ident(&self) -> &'static str {
        self.ident
    }

    /// Returns the namespace of the type.
    #[inline]
    pub const fn module_path(&self) -> &'static str {
        self.module_path
    }

    /// Returns the full path of the type.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the decoded shape.
    #[inline]
    pub const fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Returns the members if this is a struct.
    #[inline]
    pub const fn fields(&self) -> Option<&'static [FieldInfo]> {
        match self.kind {
            TypeKind::Struct(fields) => Some(fields),
            TypeKind::Enum(_) => None,
        }
    }

    /// Returns the cases if this is an enum.
    #[inline]
    pub const fn labels(&self) -> Option<&'static [LabelInfo]> {
        match self.kind {
            TypeKind::Enum(labels) => Some(labels),
            TypeKind::Struct(_) => None,
        }
    }

    /// Returns the struct member read from the property `key`.
    pub fn field(&self, key: &str) -> Option<&'static FieldInfo> {
        self.fields()?
            .iter()
            .find(|field| field.wire_key() == Some(key))
    }

    /// Returns the enum case spelled `label`, ignoring case.
    pub fn label(&self, label: &str) -> Option<&'static LabelInfo> {
        self.labels()?.iter().find(|info| info.matches(label))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::info::{FieldInfo, LabelInfo, TypeInfo, TypeKind};

    static FIELDS: [FieldInfo; 2] = [
        FieldInfo::new("x", "i32", "x"),
        FieldInfo::hidden("cache", "Vec<u8>"),
    ];

    static LABELS: [LabelInfo; 1] = [LabelInfo::new("Red", "Red")];

    #[test]
    fn lookups() {
        let info = TypeInfo::new("Point", "app", "app::Point", TypeKind::Struct(&FIELDS));
        assert_eq!(info.field("x").unwrap().type_name(), "i32");
        assert!(info.field("cache").is_none());
        assert!(!FIELDS[1].is_rendered());
        assert!(info.labels().is_none());

        let info = TypeInfo::new("Color", "app", "app::Color", TypeKind::Enum(&LABELS));
        assert_eq!(info.label("rED").unwrap().name(), "Red");
        assert!(info.label("blue").is_none());
        assert!(info.field("x").is_none());
    }
}
