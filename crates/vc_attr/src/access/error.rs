use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// The failure of an [`access`](crate::access) operation.
///
/// Every operation either succeeds completely or fails with one of these
/// and leaves the target untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrError {
    /// The target is not a record, nor a single `Box` around one.
    #[error("target is not a record or a pointer to a record")]
    NotARecord,

    /// A write was attempted through a shared borrow.
    #[error("record is not addressable, pass it by mutable reference to modify it")]
    NotAddressable,

    /// The record declares no field with the requested name.
    #[error("no such field in record")]
    NoSuchField,

    /// The field exists but is not public.
    #[error("field is not visible")]
    Hidden,

    /// The value's type is not exactly the field's declared type.
    #[error("value type does not match the declared field type")]
    TypeMismatch,

    /// No registered record has the requested type path or name.
    #[error("no registered record with this name")]
    UnknownRecord,
}
