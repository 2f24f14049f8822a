//! A registry of record types, for lookups by type id, path or name.
//!
//! ## auto_register
//!
//! See [`RecordRegistry::auto_register`].
//!
//! Records declared with `#[record(auto_register)]` are collected with the
//! [`inventory`] crate. Not every platform supports it (the major ones do);
//! where it is unsupported, `auto_register` returns `false` and registers
//! nothing.
//!
//! Generic records cannot be auto registered, register each
//! instantiation with [`RecordRegistry::register`].

// -----------------------------------------------------------------------------
// Modules

mod record_registry;

// -----------------------------------------------------------------------------
// Exports

pub use record_registry::{RecordRegistry, RecordRegistryArc};
