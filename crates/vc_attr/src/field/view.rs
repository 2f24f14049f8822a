use alloc::boxed::Box;

use crate::field::Field;
use crate::record::Record;

// -----------------------------------------------------------------------------
// FieldRef

/// An immutable structural view of a field value.
///
/// Obtained from [`Field::field_ref`]. Serialization and the record
/// normalizer walk values through this view instead of downcasting.
pub enum FieldRef<'a> {
    /// A leaf value that serializes itself.
    Scalar(&'a dyn erased_serde::Serialize),
    /// Ordered elements of a `Vec`, `VecDeque` or array.
    Sequence(Box<dyn ExactSizeIterator<Item = &'a dyn Field> + 'a>),
    /// Key-value entries of a map.
    Map(Box<dyn ExactSizeIterator<Item = (&'a dyn Field, &'a dyn Field)> + 'a>),
    /// An `Option`, `None` or the contained value.
    Option(Option<&'a dyn Field>),
    /// The value behind a single owning pointer.
    Reference(&'a dyn Field),
    /// A record.
    Record(&'a dyn Record),
}

impl<'a> FieldRef<'a> {
    /// Returns the record, if this view is one.
    #[inline]
    pub fn as_record(&self) -> Option<&'a dyn Record> {
        match self {
            Self::Record(record) => Some(*record),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// FieldMut

/// A mutable structural view of a field value.
///
/// Only the shapes the accessor can write through are distinguished.
pub enum FieldMut<'a> {
    /// The value behind a single owning pointer.
    Reference(&'a mut dyn Field),
    /// A record.
    Record(&'a mut dyn Record),
    /// Any other value.
    Other,
}
