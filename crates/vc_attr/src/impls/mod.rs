//! [`Typed`](crate::field::Typed) implementations for std types.
//!
//! ## Implemented Menu
//!
//! - scalar:
//!     - `bool`, `char`
//!     - `i8`-`i128`, `isize`, `u8`-`u128`, `usize`, `f32`, `f64`
//!     - `String`, `&'static str`
//! - opaque:
//!     - `core::time::Duration`
//!     - anything passed to [`impl_opaque_field!`](crate::impl_opaque_field)
//! - sequence: `Vec<T>`, `VecDeque<T>`, `[T; N]`
//! - map: `BTreeMap<K, V>`, `HashMap<K, V, S>`
//! - `Option<T>`
//! - `Box<T>` (the one pointer the accessor follows)

// -----------------------------------------------------------------------------
// Modules

mod boxed;
mod map;
mod option;
mod scalar;
mod sequence;
