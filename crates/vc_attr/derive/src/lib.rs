//! See the [`Record`] derive macro.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static RECORD_ATTRIBUTE_NAME: &str = "record";
static TAG_ATTRIBUTE_NAME: &str = "tag";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Record Derivation
///
/// `#[derive(Record)]` implements the following traits:
///
/// - `Typed` (and through it `Field`)
/// - `Record`
/// - `RecordType`
///
/// It accepts structs with named fields, including empty and unit structs.
/// Tuple structs, enums and unions are rejected.
///
/// The record itself needs no `Clone`, `PartialEq` or `Debug`: every field
/// type must implement `Typed` instead.
///
/// ## Visibility
///
/// A field declared `pub` is visible. Private and restricted (`pub(crate)`,
/// `pub(super)`, `pub(in ..)`) fields are hidden: they are declared in the
/// record metadata, but their values cannot be read or written by name.
///
/// `#[record(hidden)]` hides a `pub` field.
///
/// ```rust, ignore
/// #[derive(Record)]
/// struct User {
///     pub name: String,
///     #[record(hidden)]
///     pub session: u64,
///     password: String,
/// }
/// ```
///
/// ## Skipped Fields
///
/// `#[record(skip)]` leaves a field out of the record entirely. The field
/// type needs `Default` (used when the record is cloned) but not `Typed`.
///
/// ```rust, ignore
/// #[derive(Record)]
/// struct Cache {
///     pub key: String,
///     #[record(skip)]
///     handle: Option<std::fs::File>,
/// }
/// ```
///
/// ## Tags
///
/// `#[tag(key = "value", ...)]` attaches string tags to a field. The
/// attribute may be repeated; for a repeated key the last value wins.
///
/// ```rust, ignore
/// #[derive(Record)]
/// struct User {
///     #[tag(json = "username", db = "uname")]
///     pub username: String,
/// }
/// ```
///
/// ## Type Path
///
/// The type path defaults to `module_path!()::Ident`. It can be overridden
/// for non-generic records:
///
/// ```rust, ignore
/// #[derive(Record)]
/// #[record(type_path = "app::model::User")]
/// struct User { /* ... */ }
/// ```
///
/// For generic records the path is the full type name of each
/// instantiation, e.g. `app::Wrapper<u32>`.
///
/// ## Auto Registration
///
/// `#[record(auto_register)]` submits the type to
/// `RecordRegistry::auto_register`. This requires the `auto_register`
/// feature and has no effect on generic types.
///
/// ```rust, ignore
/// #[derive(Record)]
/// #[record(auto_register)]
/// struct Settings { /* ... */ }
/// ```
#[proc_macro_derive(Record, attributes(record, tag))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::RecordDerive::from_input(&ast) {
        Ok(derive) => impls::impl_record(&derive).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
