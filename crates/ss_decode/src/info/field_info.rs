// -----------------------------------------------------------------------------
// FieldInfo

/// One constructor member of a derived struct.
///
/// Tuple fields are named by their index, e.g. `"0"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    name: &'static str,
    type_name: &'static str,
    wire_key: Option<&'static str>,
}

impl FieldInfo {
    /// Creates a field that is read from the property `wire_key`.
    #[inline]
    pub const fn new(name: &'static str, type_name: &'static str, wire_key: &'static str) -> Self {
        Self {
            name,
            type_name,
            wire_key: Some(wire_key),
        }
    }

    /// Creates a field that keeps its default value, it has no wire key.
    #[inline]
    pub const fn hidden(name: &'static str, type_name: &'static str) -> Self {
        Self {
            name,
            type_name,
            wire_key: None,
        }
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared type as written in the source.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the property name this field is read from, if any.
    #[inline]
    pub const fn wire_key(&self) -> Option<&'static str> {
        self.wire_key
    }

    /// Returns `true` if the field is read from the token stream.
    #[inline]
    pub const fn is_rendered(&self) -> bool {
        self.wire_key.is_some()
    }
}

// -----------------------------------------------------------------------------
// LabelInfo

/// One case of a derived label enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelInfo {
    name: &'static str,
    wire_label: &'static str,
}

impl LabelInfo {
    /// Creates the info of the variant `name`, written as `wire_label`.
    #[inline]
    pub const fn new(name: &'static str, wire_label: &'static str) -> Self {
        Self { name, wire_label }
    }

    /// Returns the variant name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the label as written on the wire.
    #[inline]
    pub const fn wire_label(&self) -> &'static str {
        self.wire_label
    }

    /// Returns `true` if `label` spells this case, ignoring case.
    #[inline]
    pub fn matches(&self, label: &str) -> bool {
        crate::__macro_exports::labels_match(self.wire_label, label)
    }
}
