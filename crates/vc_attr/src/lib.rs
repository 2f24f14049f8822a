#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// The derive resolves paths through `vc_attr`, in doctests and inside this
// crate alike, so the crate must be reachable under its own name.
extern crate self as vc_attr;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod impls;

pub mod access;
pub mod field;
pub mod info;
pub mod record;
pub mod registry;
pub mod serde;

#[doc(hidden)]
pub mod __macro_exports;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use vc_attr_derive as derive;

/// The most common items, for glob import.
pub mod prelude {
    pub use crate::access::{AttrError, FieldMap, Target};
    pub use crate::derive::Record;
    pub use crate::field::{Field, Kind, Typed};
    pub use crate::record::{Record, RecordType};
}
