use core::any::{Any, TypeId};
use core::fmt;

use crate::field::{Kind, Typed};

// -----------------------------------------------------------------------------
// Visibility

/// Whether a field is accessible from outside its declaring module.
///
/// Derived from the Rust declaration: a plain `pub` field is
/// [`Visible`](Visibility::Visible); private and restricted (`pub(crate)`,
/// `pub(super)`, `pub(in ..)`) fields are [`Hidden`](Visibility::Hidden).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    #[inline]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visible => f.pad("visible"),
            Self::Hidden => f.pad("hidden"),
        }
    }
}

// -----------------------------------------------------------------------------
// FieldInfo

/// Declaration-time description of one record field.
///
/// Built once per record type by [`#[derive(Record)]`](crate::derive::Record)
/// and shared as `&'static`; it never holds field values.
///
/// # Examples
///
/// ```
/// use vc_attr::{derive::Record, info::Visibility, record::RecordType};
///
/// #[derive(Record)]
/// struct User {
///     #[tag(json = "username", db = "uname")]
///     pub username: String,
///     password: String,
/// }
///
/// let info = User::info();
/// let username = info.field("username").unwrap();
///
/// assert!(username.type_is::<String>());
/// assert_eq!(username.tag("json"), "username");
/// assert_eq!(username.tag("yaml"), "");
/// assert_eq!(info.field("password").unwrap().visibility(), Visibility::Hidden);
/// ```
#[derive(Clone, Copy)]
pub struct FieldInfo {
    name: &'static str,
    ty_id: TypeId,
    type_name: &'static str,
    kind: Kind,
    visibility: Visibility,
    tags: &'static [(&'static str, &'static str)],
}

impl FieldInfo {
    /// Creates a [`FieldInfo`] for a field `name` of type `T`.
    #[inline]
    pub fn new<T: Typed>(name: &'static str, visibility: Visibility) -> Self {
        Self {
            name,
            ty_id: TypeId::of::<T>(),
            type_name: core::any::type_name::<T>(),
            kind: T::KIND,
            visibility,
            tags: &[],
        }
    }

    /// Attaches tags (`key`, `value`) in declaration order.
    ///
    /// Used by the proc-macro crate.
    #[inline]
    pub const fn with_tags(self, tags: &'static [(&'static str, &'static str)]) -> Self {
        Self { tags, ..self }
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the `TypeId` of the declared type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Returns `true` if the declared type is exactly `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the full name of the declared type.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the [`Kind`] of the declared type.
    #[inline]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub const fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    /// Returns the value of tag `key`, or `""` if the field has no such tag.
    ///
    /// If a key is declared twice, the last declaration wins.
    pub fn tag(&self, key: &str) -> &'static str {
        self.tags
            .iter()
            .rev()
            .find_map(|&(k, v)| (k == key).then_some(v))
            .unwrap_or("")
    }

    /// Returns `true` if tag `key` is declared, even with an empty value.
    pub fn has_tag(&self, key: &str) -> bool {
        self.tags.iter().any(|&(k, _)| k == key)
    }

    /// Returns all declared tags in declaration order.
    #[inline]
    pub const fn tags(&self) -> &'static [(&'static str, &'static str)] {
        self.tags
    }
}

impl fmt::Debug for FieldInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldInfo")
            .field("name", &self.name)
            .field("type", &self.type_name)
            .field("kind", &self.kind)
            .field("visibility", &self.visibility)
            .field("tags", &self.tags)
            .finish()
    }
}
