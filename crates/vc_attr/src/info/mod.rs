//! Declaration-time metadata of records and their fields.
//!
//! A [`RecordInfo`] is built once per record type and holds one
//! [`FieldInfo`] per declared field, in declaration order.

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod field_info;
mod record_info;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericInfoCell, NonGenericInfoCell};
pub use field_info::{FieldInfo, Visibility};
pub use record_info::RecordInfo;
