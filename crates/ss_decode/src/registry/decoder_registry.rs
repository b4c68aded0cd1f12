use alloc::boxed::Box;
use core::any::{Any, TypeId};
use std::sync::OnceLock;

use foldhash::fast::FixedState;
use hashbrown::{HashMap, HashSet};

use crate::info::TypeInfo;
use crate::registry::DecoderMeta;
use crate::token::TokenRead;
use crate::{Decodable, FormatError};

type Map<K, V> = HashMap<K, V, FixedState>;
type Set<K> = HashSet<K, FixedState>;

// -----------------------------------------------------------------------------
// DecoderRegistry

/// A registry of derived decoders.
///
/// [Registering] a type stores its [`DecoderMeta`] under the type's
/// `TypeId`, full type path and short type name.
///
/// # Example
///
/// ```
/// use ss_decode::{Decode, info::Described, registry::DecoderRegistry};
/// use ss_decode::token::TokenTape;
///
/// #[derive(Decode, Debug, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let mut registry = DecoderRegistry::empty();
/// assert!(registry.register::<Point>());
/// assert!(!registry.register::<Point>());
///
/// let mut tape = TokenTape::from_json(r#"{"x": 1}"#).unwrap();
/// let point = registry
///     .decode_by_path(Point::type_info().type_path(), &mut tape)
///     .unwrap();
///
/// assert_eq!(*point.downcast::<Point>().unwrap(), Point { x: 1, y: 0 });
/// ```
///
/// [Registering]: DecoderRegistry::register
pub struct DecoderRegistry {
    metas: Map<TypeId, DecoderMeta>,
    type_path_to_id: Map<&'static str, TypeId>,
    type_name_to_id: Map<&'static str, TypeId>,
    ambiguous_names: Set<&'static str>,
}

impl Default for DecoderRegistry {
    /// See [`DecoderRegistry::empty`] .
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl DecoderRegistry {
    /// Create a empty [`DecoderRegistry`].
    #[inline]
    pub const fn empty() -> Self {
        Self {
            metas: HashMap::with_hasher(FixedState::with_seed(0)),
            type_path_to_id: HashMap::with_hasher(FixedState::with_seed(0)),
            type_name_to_id: HashMap::with_hasher(FixedState::with_seed(0)),
            ambiguous_names: HashSet::with_hasher(FixedState::with_seed(0)),
        }
    }

    /// The process-wide registry.
    ///
    /// Built on first use from every auto-registered type, then shared
    /// read-only. Without the `auto_register` feature, or on platforms the
    /// [`inventory`](https://docs.rs/inventory) crate does not support, it
    /// stays empty.
    pub fn global() -> &'static DecoderRegistry {
        static GLOBAL: OnceLock<DecoderRegistry> = OnceLock::new();

        GLOBAL.get_or_init(|| {
            let mut registry = Self::empty();
            let available = registry.auto_register();
            log::debug!(
                "built the global decoder registry with {} types (auto_register available: {available})",
                registry.len(),
            );
            registry
        })
    }

    // # Validity
    // The type must **not** already exist.
    fn add_new_type_indices(&mut self, meta: &DecoderMeta) {
        let info = meta.type_info();
        let type_name = info.ident();

        if !self.ambiguous_names.contains(type_name) {
            if self.type_name_to_id.contains_key(type_name) {
                self.type_name_to_id.remove(type_name);
                self.ambiguous_names.insert(type_name);
            } else {
                self.type_name_to_id.insert(type_name, meta.type_id());
            }
        }

        if self
            .type_path_to_id
            .insert(info.type_path(), meta.type_id())
            .is_some()
        {
            log::warn!(
                "type path `{}` is claimed by two decoders, lookups by path now resolve to the later one",
                info.type_path(),
            );
        }
    }

    /// Try add or do nothing.
    ///
    /// - If the `TypeId` of `meta` is already registered, does nothing and returns `false`.
    /// - Otherwise inserts `meta` and returns `true`.
    pub fn insert(&mut self, meta: DecoderMeta) -> bool {
        if self.metas.contains_key(&meta.type_id()) {
            log::debug!("`{}` is already registered", meta.type_info().type_path());
            return false;
        }
        self.add_new_type_indices(&meta);
        self.metas.insert(meta.type_id(), meta);
        true
    }

    /// Registers the derived type `T` if it is not registered yet.
    ///
    /// Returns `true` if the type was inserted.
    #[inline]
    pub fn register<T: Decodable>(&mut self) -> bool {
        self.insert(DecoderMeta::of::<T>())
    }

    /// Registers every non-generic type deriving `Decode` in the program.
    ///
    /// Equivalent to calling [`register`](Self::register) for each of them.
    /// Repeated calls are cheap and will not insert duplicates.
    ///
    /// ## Return Value
    ///
    /// Returns `true` if automatic registration works on the current
    /// platform, `false` otherwise.
    ///
    /// ## Feature Dependency
    ///
    /// Requires the `auto_register` feature. When disabled, it does nothing
    /// and returns `false`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use core::any::TypeId;
    /// # use ss_decode::{Decode, registry::DecoderRegistry};
    /// #[derive(Decode)]
    /// struct Foo {
    ///     value: i32,
    /// }
    ///
    /// let mut registry = DecoderRegistry::empty();
    /// assert!(registry.auto_register());
    /// assert!(registry.contains(TypeId::of::<Foo>()));
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            use crate::__macro_exports::auto_register;
            // Reduce the cost of duplicate registrations.
            if self.contains(TypeId::of::<auto_register::__AvailFlag>()) {
                return true;
            }
            auto_register::__register_types(self);
            self.contains(TypeId::of::<auto_register::__AvailFlag>())
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    /// Whether the type with given `TypeId` has been registered.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.metas.contains_key(&type_id)
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.metas.len()
    }

    /// Returns the decoder singleton of `T`, if `T` is registered.
    pub fn get<T: Decodable>(&self) -> Option<&'static T::Decoder> {
        match self.metas.get(&TypeId::of::<T>()) {
            Some(meta) => meta.decoder::<T>(),
            None => None,
        }
    }

    /// Returns the [`DecoderMeta`] of the type with the given `TypeId`.
    #[inline]
    pub fn get_meta(&self, type_id: TypeId) -> Option<&DecoderMeta> {
        self.metas.get(&type_id)
    }

    /// Returns the [`DecoderMeta`] of the type with the given full path.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&DecoderMeta> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get_meta(*id),
            None => None,
        }
    }

    /// Returns the [`DecoderMeta`] of the type with the given short name.
    ///
    /// Returns `None` if the name is ambiguous or unknown.
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&DecoderMeta> {
        match self.type_name_to_id.get(type_name) {
            Some(id) => self.get_meta(*id),
            None => None,
        }
    }

    /// Returns `true` if the given short name matches multiple registered types.
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Returns the [`TypeInfo`] of the type with the given `TypeId`.
    pub fn get_type_info(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.get_meta(type_id).map(DecoderMeta::type_info)
    }

    /// Decodes one value of the type registered under `type_path`.
    ///
    /// # Errors
    ///
    /// [`FormatError::NotRegistered`] if no type has this path, otherwise
    /// any error of its decoder.
    pub fn decode_by_path(
        &self,
        type_path: &str,
        reader: &mut dyn TokenRead,
    ) -> Result<Box<dyn Any>, FormatError> {
        match self.get_with_type_path(type_path) {
            Some(meta) => meta.decode(reader),
            None => Err(FormatError::NotRegistered(type_path.into())),
        }
    }

    /// Returns an iterator over the registered [`DecoderMeta`]s.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &DecoderMeta> {
        self.metas.values()
    }
}

impl core::fmt::Debug for DecoderRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.type_path_to_id.keys()).finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use core::any::TypeId;

    use crate::token::TokenTape;
    use crate::{Decodable, Decode, Decoder, FormatError};

    use super::DecoderRegistry;

    mod first {
        #[derive(crate::Decode, Debug, PartialEq)]
        pub struct Sample {
            pub id: u32,
        }
    }

    mod second {
        #[derive(crate::Decode, Debug, PartialEq)]
        pub enum Sample {
            On,
            Off,
        }
    }

    #[derive(Decode, Debug, PartialEq)]
    #[decode(type_path = "custom::Unique")]
    struct Unique {
        name: String,
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = DecoderRegistry::empty();
        assert!(registry.register::<first::Sample>());
        assert!(!registry.register::<first::Sample>());
        assert!(registry.register::<Unique>());
        assert_eq!(registry.len(), 2);

        assert!(registry.contains(TypeId::of::<Unique>()));
        assert!(registry.get::<second::Sample>().is_none());

        let decoder = registry.get::<Unique>().unwrap();
        assert!(core::ptr::eq(decoder, Unique::decoder()));

        let mut tape = TokenTape::from_json(r#"{"name": "u"}"#).unwrap();
        assert_eq!(
            decoder.decode(&mut tape),
            Ok(Unique { name: "u".into() })
        );

        let meta = registry.get_with_type_path("custom::Unique").unwrap();
        assert_eq!(meta.type_id(), TypeId::of::<Unique>());
        assert_eq!(
            registry.get_with_type_name("Sample").unwrap().type_id(),
            TypeId::of::<first::Sample>()
        );
    }

    #[test]
    fn ambiguous_names() {
        let mut registry = DecoderRegistry::empty();
        registry.register::<first::Sample>();
        registry.register::<second::Sample>();

        assert!(registry.is_ambiguous("Sample"));
        assert!(registry.get_with_type_name("Sample").is_none());

        let path = <second::Sample as crate::info::Described>::type_info().type_path();
        assert!(path.ends_with("second::Sample"));
        assert!(registry.get_with_type_path(path).is_some());
    }

    #[test]
    fn decode_by_path() {
        let mut registry = DecoderRegistry::empty();
        registry.register::<Unique>();

        let mut tape = TokenTape::from_json(r#"{"name": "n", "extra": [1, {"a": 2}]}"#).unwrap();
        let value = registry.decode_by_path("custom::Unique", &mut tape).unwrap();
        assert_eq!(value.downcast_ref::<Unique>(), Some(&Unique { name: "n".into() }));

        let mut tape = TokenTape::from_json("{}").unwrap();
        assert_eq!(
            registry.decode_by_path("custom::Missing", &mut tape).err(),
            Some(FormatError::NotRegistered("custom::Missing".into()))
        );
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn global_registry() {
        let registry = DecoderRegistry::global();
        assert!(core::ptr::eq(registry, DecoderRegistry::global()));

        if registry.contains(TypeId::of::<crate::__macro_exports::auto_register::__AvailFlag>()) {
            assert!(registry.contains(TypeId::of::<Unique>()));
            assert!(registry.get::<first::Sample>().is_some());
            assert!(registry.is_ambiguous("Sample"));
        }
    }
}
