use alloc::boxed::Box;
use core::any::{Any, TypeId};

use crate::info::FieldInfo;
use crate::record::RecordType;

/// Declaration-time description of a record type.
///
/// Holds the ordered field declarations of the type; the order is the
/// declaration order in source and never changes.
///
/// # Examples
///
/// ```
/// use vc_attr::{derive::Record, record::RecordType};
///
/// #[derive(Record)]
/// struct Point {
///     pub x: f32,
///     pub y: f32,
///     cache: u64,
/// }
///
/// let info = Point::info();
///
/// assert_eq!(info.type_ident(), "Point");
/// assert_eq!(info.field_len(), 3);
/// assert_eq!(info.index_of("y"), Some(1));
/// assert_eq!(info.visible_names().collect::<Vec<_>>(), ["x", "y"]);
/// ```
#[derive(Debug)]
pub struct RecordInfo {
    ty_id: TypeId,
    type_path: &'static str,
    type_ident: &'static str,
    fields: Box<[FieldInfo]>,
}

impl RecordInfo {
    /// Creates a new [`RecordInfo`] for the record `T`.
    ///
    /// `type_path` is the full path (`module::Ident<Params>`) and `type_ident`
    /// the bare identifier. Fields are kept in the given order.
    ///
    /// # Panics
    ///
    /// With the `debug` feature in a debug build, panics if two fields share
    /// a name. Derived records never do, so this only guards hand-written
    /// calls.
    pub fn new<T: RecordType>(
        type_path: &'static str,
        type_ident: &'static str,
        fields: &[FieldInfo],
    ) -> Self {
        #[cfg(all(debug_assertions, feature = "debug"))]
        for (index, field) in fields.iter().enumerate() {
            assert!(
                fields[..index].iter().all(|prev| prev.name() != field.name()),
                "duplicate field `{}` in record `{type_path}`",
                field.name(),
            );
        }

        Self {
            ty_id: TypeId::of::<T>(),
            type_path,
            type_ident,
            fields: fields.into(),
        }
    }

    /// Returns the `TypeId` of the record.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Returns `true` if this describes the type `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the full type path, e.g. `my_crate::model::User`.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the type identifier, e.g. `User`.
    #[inline]
    pub const fn type_ident(&self) -> &'static str {
        self.type_ident
    }

    /// Returns the index of the field named `name`, if declared.
    ///
    /// The match is exact and case-sensitive. This is O(N) complexity.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name() == name)
    }

    /// Returns the [`FieldInfo`] named `name`, if declared.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Returns the [`FieldInfo`] at `index`, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldInfo> {
        self.fields.get(index)
    }

    /// Returns the number of declared fields, hidden ones included.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns an iterator over all fields in **declaration order**.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &FieldInfo> {
        self.fields.iter()
    }

    /// Returns an iterator over `(index, field)` of the visible fields,
    /// in declaration order.
    pub fn iter_visible(&self) -> impl Iterator<Item = (usize, &FieldInfo)> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.is_visible())
    }

    /// Returns an iterator over the names of the visible fields.
    pub fn visible_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter_visible().map(|(_, field)| field.name())
    }
}

#[cfg(test)]
mod tests {
    use super::RecordInfo;
    use crate::derive::Record;
    use crate::info::{FieldInfo, Visibility};

    #[derive(Record)]
    struct Pair {
        pub left: u8,
        pub right: u8,
    }

    #[test]
    fn hand_written_info() {
        let info = RecordInfo::new::<Pair>(
            "tests::Pair",
            "Pair",
            &[
                FieldInfo::new::<u8>("left", Visibility::Visible),
                FieldInfo::new::<u8>("right", Visibility::Hidden),
            ],
        );

        assert!(info.type_is::<Pair>());
        assert_eq!(info.visible_names().collect::<Vec<_>>(), ["left"]);
        assert_eq!(info.index_of("right"), Some(1));
        assert_eq!(Pair { left: 1, right: 2 }.right, 2);
    }

    #[cfg(all(debug_assertions, feature = "debug"))]
    #[test]
    #[should_panic(expected = "duplicate field `left`")]
    fn hand_written_duplicate_names() {
        RecordInfo::new::<Pair>(
            "tests::Pair",
            "Pair",
            &[
                FieldInfo::new::<u8>("left", Visibility::Visible),
                FieldInfo::new::<u8>("left", Visibility::Visible),
            ],
        );
    }
}
