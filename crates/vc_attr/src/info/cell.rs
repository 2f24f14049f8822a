//! Containers for static storage of record information.
//!
//! Used by [`#[derive(Record)]`](crate::derive::Record) to implement
//! [`RecordType::info`](crate::record::RecordType::info).
//!
//! - [`NonGenericInfoCell`]: a [`OnceLock`] for concrete record types.
//! - [`GenericInfoCell`]: a `static` inside a generic function is shared by
//!   every instantiation, so this keeps one entry per [`TypeId`].

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::info::RecordInfo;

/// Static storage of [`RecordInfo`] for a non-generic record.
///
/// ## Example
///
/// ```ignore
/// impl RecordType for Point {
///     fn info() -> &'static RecordInfo {
///         static CELL: NonGenericInfoCell = NonGenericInfoCell::new();
///         CELL.get_or_init(|| RecordInfo::new::<Point>(
///             "geo::Point",
///             "Point",
///             &[FieldInfo::new::<f32>("x", Visibility::Visible)],
///         ))
///     }
/// }
/// ```
pub struct NonGenericInfoCell(OnceLock<RecordInfo>);

impl NonGenericInfoCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored info, building it with `f` on first access.
    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> RecordInfo) -> &RecordInfo {
        self.0.get_or_init(f)
    }
}

/// Static storage of [`RecordInfo`] for generic records.
///
/// ## Example
///
/// ```ignore
/// impl<T: Typed> RecordType for Wrapper<T> {
///     fn info() -> &'static RecordInfo {
///         static CELL: GenericInfoCell = GenericInfoCell::new();
///         CELL.get_or_insert::<Self>(|| RecordInfo::new::<Self>(
///             core::any::type_name::<Self>(),
///             "Wrapper",
///             &[FieldInfo::new::<T>("inner", Visibility::Visible)],
///         ))
///     }
/// }
/// ```
pub struct GenericInfoCell(RwLock<Option<HashMap<TypeId, &'static RecordInfo>>>);

impl GenericInfoCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(None))
    }

    /// Returns the info stored for `G`, building it with `f` on first access.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> RecordInfo) -> &RecordInfo {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn get_or_insert_by_type_id(
        &self,
        type_id: TypeId,
        f: impl FnOnce() -> RecordInfo,
    ) -> &RecordInfo {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static RecordInfo> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()?
            .get(&type_id)
            .copied()
    }

    // Another thread may have raced us here; its entry wins and `value` is dropped.
    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: RecordInfo) -> &'static RecordInfo {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert_with(HashMap::new)
            .entry(type_id)
            .or_insert_with(|| Box::leak(Box::new(value)))
    }
}
