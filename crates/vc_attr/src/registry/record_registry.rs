use core::any::TypeId;
use core::fmt;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::info::RecordInfo;
use crate::record::RecordType;

// -----------------------------------------------------------------------------
// RecordRegistry

/// A registry of record types.
///
/// Maps each registered type to its `&'static` [`RecordInfo`], reachable by
/// [`TypeId`], by full type path and by type identifier. An identifier
/// shared by several registered types is ambiguous and only reachable
/// through its full path.
///
/// # Examples
///
/// ```
/// use vc_attr::{derive::Record, registry::RecordRegistry};
///
/// #[derive(Record)]
/// #[record(type_path = "app::model::User")]
/// struct User {
///     pub name: String,
/// }
///
/// let mut registry = RecordRegistry::new();
/// registry.register::<User>();
///
/// let info = registry.get_with_type_name("User").unwrap();
/// assert_eq!(info.type_path(), "app::model::User");
/// assert!(registry.get_with_type_path("app::model::User").is_some());
/// ```
#[derive(Default)]
pub struct RecordRegistry {
    infos: HashMap<TypeId, &'static RecordInfo>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
    #[cfg(feature = "auto_register")]
    auto_registered: bool,
}

impl RecordRegistry {
    /// Creates an empty registry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    // # Validity
    // The type must **not** already exist.
    fn add_new_type_indices(&mut self, info: &'static RecordInfo) {
        let type_name = info.type_ident();

        if !self.ambiguous_names.contains(type_name) {
            if self.type_name_to_id.remove(type_name).is_some() {
                log::warn!(
                    "record name `{type_name}` is ambiguous, look up `{}` by its type path",
                    info.type_path(),
                );
                self.ambiguous_names.insert(type_name);
            } else {
                self.type_name_to_id.insert(type_name, info.ty_id());
            }
        }

        self.type_path_to_id.insert(info.type_path(), info.ty_id());
    }

    /// Adds `info` unless its type is already registered.
    ///
    /// Returns `true` if it was inserted.
    pub fn insert(&mut self, info: &'static RecordInfo) -> bool {
        if self.infos.contains_key(&info.ty_id()) {
            return false;
        }
        self.add_new_type_indices(info);
        self.infos.insert(info.ty_id(), info);
        true
    }

    /// Registers the record `T` if it is not registered yet.
    ///
    /// Returns `true` if it was inserted.
    #[inline]
    pub fn register<T: RecordType>(&mut self) -> bool {
        self.insert(T::info())
    }

    /// Registers the type of `value`; see [`register`](Self::register).
    #[inline]
    pub fn register_by_val<T: RecordType>(&mut self, _: &T) -> bool {
        self.register::<T>()
    }

    /// Registers every non-generic record declared with
    /// `#[record(auto_register)]`.
    ///
    /// Repeated calls are cheap and insert nothing new.
    ///
    /// ## Return Value
    ///
    /// Returns `true` if automatic registration works on the current
    /// platform. Without the `auto_register` feature this always does
    /// nothing and returns `false`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use core::any::TypeId;
    /// use vc_attr::{derive::Record, registry::RecordRegistry};
    ///
    /// #[derive(Record)]
    /// #[record(auto_register)]
    /// struct Settings {
    ///     pub verbose: bool,
    /// }
    ///
    /// let mut registry = RecordRegistry::new();
    /// assert!(registry.auto_register());
    /// assert!(registry.contains(TypeId::of::<Settings>()));
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            if !self.auto_registered {
                crate::__macro_exports::auto_register::register_types(self);
            }
            self.auto_registered
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    #[cfg(feature = "auto_register")]
    #[inline]
    pub(crate) fn mark_auto_registered(&mut self) {
        self.auto_registered = true;
    }

    /// Returns `true` if the type with the given [`TypeId`] is registered.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.infos.contains_key(&type_id)
    }

    /// Returns the info of the type with the given [`TypeId`].
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&'static RecordInfo> {
        self.infos.get(&type_id).copied()
    }

    /// Returns the info of the type with the given full type path.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&'static RecordInfo> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns the info of the type with the given identifier.
    ///
    /// Returns `None` if the identifier is ambiguous.
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&'static RecordInfo> {
        match self.type_name_to_id.get(type_name) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns `true` if several registered types share this identifier.
    #[inline]
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Returns an iterator over the registered infos, in no particular order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'static RecordInfo> + '_ {
        self.infos.values().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.infos.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }
}

impl fmt::Debug for RecordRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.type_path_to_id.keys()).finish()
    }
}

// -----------------------------------------------------------------------------
// RecordRegistryArc

/// A [`RecordRegistry`] shared between threads.
#[derive(Clone, Default)]
pub struct RecordRegistryArc {
    pub internal: Arc<RwLock<RecordRegistry>>,
}

impl RecordRegistryArc {
    /// Takes a read lock on the underlying [`RecordRegistry`].
    pub fn read(&self) -> RwLockReadGuard<'_, RecordRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes a write lock on the underlying [`RecordRegistry`].
    pub fn write(&self) -> RwLockWriteGuard<'_, RecordRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for RecordRegistryArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.read(), f)
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::{RecordRegistry, RecordRegistryArc};
    use crate::derive::Record;
    use crate::record::RecordType;

    mod foo {
        use crate::derive::Record;

        #[derive(Record)]
        pub struct Item {
            pub id: u32,
        }
    }

    mod bar {
        use crate::derive::Record;

        #[derive(Record)]
        pub struct Item {
            pub id: u64,
        }
    }

    #[derive(Record)]
    struct Wrapper<T> {
        pub inner: T,
    }

    #[test]
    fn register_once() {
        let mut registry = RecordRegistry::new();

        assert!(registry.register::<foo::Item>());
        assert!(!registry.register::<foo::Item>());
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(TypeId::of::<foo::Item>()));
        assert!(!registry.contains(TypeId::of::<bar::Item>()));
    }

    #[test]
    fn ambiguous_names() {
        let mut registry = RecordRegistry::new();
        registry.register::<foo::Item>();
        registry.register::<bar::Item>();

        assert!(registry.is_ambiguous("Item"));
        assert!(registry.get_with_type_name("Item").is_none());

        let foo_path = foo::Item::info().type_path();
        let bar_path = bar::Item::info().type_path();
        assert_ne!(foo_path, bar_path);
        assert!(registry.get_with_type_path(foo_path).unwrap().type_is::<foo::Item>());
        assert!(registry.get_with_type_path(bar_path).unwrap().type_is::<bar::Item>());
    }

    #[test]
    fn generic_instantiations() {
        let mut registry = RecordRegistry::new();
        registry.register::<Wrapper<u8>>();
        registry.register::<Wrapper<String>>();

        assert_eq!(registry.len(), 2);
        assert!(registry.is_ambiguous("Wrapper"));
        let info = registry.get(TypeId::of::<Wrapper<String>>()).unwrap();
        assert!(info.field("inner").unwrap().type_is::<String>());
    }

    #[test]
    fn shared_registry() {
        let shared = RecordRegistryArc::default();
        shared.write().register::<foo::Item>();

        let clone = shared.clone();
        assert!(clone.read().contains(TypeId::of::<foo::Item>()));
    }
}
