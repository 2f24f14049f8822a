//! Runtime field access by name.
//!
//! Every operation takes a [`Target`], built from a borrow of the caller's
//! value:
//!
//! - `&record` passes the record by value; it can be read but writes fail
//!   with [`AttrError::NotAddressable`].
//! - `&mut record` passes it by reference and allows writes.
//! - A `Box` around a record is looked through, once.
//!
//! Only public fields are reachable through values, tags and kinds;
//! [`has_field`] reports every declared field.
//!
//! The operations keep no state of their own. The metadata of a concrete
//! record is read from a `OnceLock` without locking. A generic record
//! stores one entry per instantiation in a [`GenericInfoCell`], so every
//! operation on it takes a shared read lock on that cell.
//!
//! Records registered in a [`RecordRegistry`] can be described without a
//! value through [`record_info`].
//!
//! [`GenericInfoCell`]: crate::info::GenericInfoCell
//! [`RecordRegistry`]: crate::registry::RecordRegistry
//!
//! # Examples
//!
//! ```
//! use vc_attr::access::{self, AttrError};
//! use vc_attr::derive::Record;
//!
//! #[derive(Record)]
//! struct User {
//!     #[tag(json = "username", db = "uname")]
//!     pub username: String,
//!     #[tag(meta = "important")]
//!     pub age: i32,
//!     password: String,
//! }
//!
//! let mut user = User {
//!     username: "srathi".into(),
//!     age: 30,
//!     password: "secret".into(),
//! };
//!
//! assert_eq!(access::field_names(&user).unwrap(), ["username", "age"]);
//! assert_eq!(access::field_tag(&user, "username", "db").unwrap(), "uname");
//!
//! access::set_field(&mut user, "age", 40).unwrap();
//! assert_eq!(access::get_field_as::<i32>(&user, "age").unwrap(), &40);
//!
//! assert_eq!(access::set_field(&mut user, "age", 40.5).err(), Some(AttrError::TypeMismatch));
//! assert_eq!(access::get_field(&user, "password").err(), Some(AttrError::Hidden));
//! # assert_eq!(user.password, "secret");
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::Any;

// -----------------------------------------------------------------------------
// Modules

mod assign;
mod enumerate;
mod error;
mod map;
mod resolve;
mod target;

// -----------------------------------------------------------------------------
// Exports

pub use assign::assign;
pub use error::AttrError;
pub use map::{FieldMap, SerializeFields};
pub use resolve::{resolve, resolve_visible};
pub use target::{RecordHandle, Target, normalize};

use crate::field::{Field, Kind, Typed};
use crate::info::{FieldInfo, RecordInfo};
use crate::registry::RecordRegistry;
use resolve::{locate, locate_visible};

// -----------------------------------------------------------------------------
// Single field

/// Returns the value of the public field `name`.
///
/// Fails with [`AttrError::NoSuchField`] or [`AttrError::Hidden`] after the
/// target is normalized.
pub fn get_field<'a>(target: impl Into<Target<'a>>, name: &str) -> Result<&'a dyn Field, AttrError> {
    let record = normalize(target.into())?.into_shared();
    let (index, _) = locate_visible(record.record_info(), name)?;
    record.field_at(index).ok_or(AttrError::NoSuchField)
}

/// Like [`get_field`], downcast to `T`.
///
/// Fails with [`AttrError::TypeMismatch`] if the field is not exactly a `T`.
///
/// # Examples
///
/// ```
/// use vc_attr::{access, derive::Record};
///
/// #[derive(Record)]
/// struct Limits {
///     pub max: u64,
/// }
///
/// let limits = Box::new(Limits { max: 10 });
///
/// assert_eq!(access::get_field_as::<u64>(&limits, "max"), Ok(&10));
/// assert!(access::get_field_as::<u32>(&limits, "max").is_err());
/// ```
pub fn get_field_as<'a, T: Any>(
    target: impl Into<Target<'a>>,
    name: &str,
) -> Result<&'a T, AttrError> {
    get_field(target, name)?
        .downcast_ref::<T>()
        .ok_or(AttrError::TypeMismatch)
}

/// Returns `true` if the record declares a field `name`, public or not.
///
/// A target that is not a record fails with [`AttrError::NotARecord`].
pub fn has_field<'a>(target: impl Into<Target<'a>>, name: &str) -> Result<bool, AttrError> {
    let handle = normalize(target.into())?;
    Ok(handle.info().index_of(name).is_some())
}

/// Replaces the value of the public field `name` with `value`.
///
/// `T` must be exactly the declared type; see [`assign`] for the order of
/// the checks.
///
/// # Examples
///
/// ```
/// use vc_attr::access::{self, AttrError};
/// use vc_attr::derive::Record;
///
/// #[derive(Record)]
/// struct Counter {
///     pub hits: u32,
/// }
///
/// let mut counter = Counter { hits: 0 };
///
/// access::set_field(&mut counter, "hits", 5_u32).unwrap();
/// assert_eq!(counter.hits, 5);
///
/// assert_eq!(access::set_field(&mut counter, "hits", 6_u64), Err(AttrError::TypeMismatch));
/// assert_eq!(access::set_field(&counter, "hits", 6_u32), Err(AttrError::NotAddressable));
/// assert_eq!(counter.hits, 5);
/// ```
pub fn set_field<'a, T: Typed>(
    target: impl Into<Target<'a>>,
    name: &str,
    value: T,
) -> Result<(), AttrError> {
    set_field_boxed(target, name, Box::new(value))
}

/// Like [`set_field`], for a value whose type is only known at runtime.
pub fn set_field_boxed<'a>(
    target: impl Into<Target<'a>>,
    name: &str,
    value: Box<dyn Field>,
) -> Result<(), AttrError> {
    let handle = normalize(target.into())?;
    assign(handle, name, value)
}

/// Returns the tag `key` of the public field `name`, or `""` if the field
/// has no such tag.
pub fn field_tag<'a>(
    target: impl Into<Target<'a>>,
    name: &str,
    key: &str,
) -> Result<&'static str, AttrError> {
    let handle = normalize(target.into())?;
    let (_, field) = locate_visible(handle.info(), name)?;
    Ok(field.tag(key))
}

/// Returns the [`Kind`] of the public field `name`.
pub fn field_kind<'a>(target: impl Into<Target<'a>>, name: &str) -> Result<Kind, AttrError> {
    let handle = normalize(target.into())?;
    let (_, field) = locate_visible(handle.info(), name)?;
    Ok(field.kind())
}

/// Returns the declaration of the field `name`, public or not.
pub fn field_info<'a>(
    target: impl Into<Target<'a>>,
    name: &str,
) -> Result<&'static FieldInfo, AttrError> {
    let handle = normalize(target.into())?;
    locate(handle.info(), name).map(|(_, field)| field)
}

// -----------------------------------------------------------------------------
// Whole record

/// Returns the names of the public fields, in declaration order.
pub fn field_names<'a>(target: impl Into<Target<'a>>) -> Result<Vec<&'static str>, AttrError> {
    let record = normalize(target.into())?.into_shared();
    Ok(enumerate::names(record))
}

/// Returns a copy of every public field value, in declaration order.
///
/// The copies are independent of the record: later writes to the record
/// do not show through.
pub fn field_values<'a>(
    target: impl Into<Target<'a>>,
) -> Result<FieldMap<Box<dyn Field>>, AttrError> {
    let record = normalize(target.into())?.into_shared();
    Ok(enumerate::values(record))
}

/// Returns the tag `key` of every public field, `""` where it is missing.
pub fn field_tags<'a>(
    target: impl Into<Target<'a>>,
    key: &str,
) -> Result<FieldMap<&'static str>, AttrError> {
    let record = normalize(target.into())?.into_shared();
    Ok(enumerate::tags(record, key))
}

/// Returns the [`Kind`] of every public field.
pub fn field_kinds<'a>(target: impl Into<Target<'a>>) -> Result<FieldMap<Kind>, AttrError> {
    let record = normalize(target.into())?.into_shared();
    Ok(enumerate::kinds(record))
}

// -----------------------------------------------------------------------------
// Registered records

/// Returns the metadata of a registered record, looked up by full type path
/// or by type identifier.
///
/// A type path wins over an identifier. An identifier shared by several
/// registered records only resolves through the full path. Fails with
/// [`AttrError::UnknownRecord`] when nothing matches.
///
/// # Examples
///
/// ```
/// use vc_attr::access::{self, AttrError};
/// use vc_attr::derive::Record;
/// use vc_attr::registry::RecordRegistry;
///
/// #[derive(Record)]
/// #[record(type_path = "app::Order")]
/// struct Order {
///     #[tag(json = "id")]
///     pub id: u64,
///     note: String,
/// }
///
/// let mut registry = RecordRegistry::new();
/// registry.register::<Order>();
///
/// let info = access::record_info(&registry, "Order").unwrap();
/// assert_eq!(info.visible_names().collect::<Vec<_>>(), ["id"]);
/// assert!(access::record_info(&registry, "app::Order").is_ok());
/// assert_eq!(access::record_info(&registry, "Invoice").err(), Some(AttrError::UnknownRecord));
/// # let _ = Order { id: 1, note: String::new() }.note;
/// ```
pub fn record_info(registry: &RecordRegistry, name: &str) -> Result<&'static RecordInfo, AttrError> {
    registry
        .get_with_type_path(name)
        .or_else(|| registry.get_with_type_name(name))
        .ok_or(AttrError::UnknownRecord)
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use super::*;
    use crate::derive::Record;
    use crate::field::Field;

    #[derive(Record)]
    struct User {
        #[tag(json = "username", db = "uname")]
        pub username: String,
        #[tag(meta = "important")]
        pub age: i32,
        password: String,
    }

    fn user() -> User {
        User {
            username: String::from("srathi"),
            age: 30,
            password: String::from("secret"),
        }
    }

    #[test]
    fn names_and_values() {
        let user = user();

        assert_eq!(field_names(&user).unwrap(), ["username", "age"]);

        let values = field_values(&user).unwrap();
        assert_eq!(values.len(), 2);
        let username = values.get("username").unwrap();
        assert_eq!(username.downcast_ref::<String>().map(String::as_str), Some("srathi"));
        assert_eq!(values.get("age").unwrap().downcast_ref::<i32>(), Some(&30));
        assert!(values.get("password").is_none());
    }

    #[test]
    fn tags_and_kinds() {
        let user = user();

        let json = field_tags(&user, "json").unwrap();
        assert_eq!(json.iter().collect::<Vec<_>>(), [("username", &"username"), ("age", &"")]);
        assert_eq!(field_tag(&user, "age", "meta"), Ok("important"));
        assert_eq!(field_tag(&user, "age", "json"), Ok(""));
        assert_eq!(field_tag(&user, "password", "json"), Err(AttrError::Hidden));

        assert_eq!(field_kind(&user, "username"), Ok(Kind::String));
        assert_eq!(field_kind(&user, "age"), Ok(Kind::Integer));
        assert_eq!(field_kind(&user, "nope"), Err(AttrError::NoSuchField));
        assert_eq!(field_kinds(&user).unwrap().len(), 2);
    }

    #[test]
    fn exact_type_on_write() {
        let mut user = user();

        assert_eq!(set_field(&mut user, "age", 40.5), Err(AttrError::TypeMismatch));
        assert_eq!(set_field(&mut user, "age", 40_i64), Err(AttrError::TypeMismatch));
        assert_eq!(user.age, 30);

        assert_eq!(set_field(&mut user, "age", 40), Ok(()));
        assert_eq!(get_field_as::<i32>(&user, "age"), Ok(&40));
        assert_eq!(get_field_as::<i64>(&user, "age"), Err(AttrError::TypeMismatch));
    }

    #[test]
    fn pass_by_value_is_read_only() {
        let user = user();

        assert_eq!(set_field(&user, "age", 40), Err(AttrError::NotAddressable));
        assert_eq!(set_field(&user, "nope", 40), Err(AttrError::NotAddressable));
        assert_eq!(user.age, 30);
    }

    #[test]
    fn hidden_fields_exist() {
        let mut user = user();

        assert_eq!(has_field(&user, "password"), Ok(true));
        assert_eq!(has_field(&user, "Password"), Ok(false));
        assert_eq!(get_field(&user, "password").err(), Some(AttrError::Hidden));
        assert_eq!(
            set_field(&mut user, "password", String::from("x")),
            Err(AttrError::Hidden),
        );
        assert!(!field_info(&user, "password").unwrap().is_visible());
        assert_eq!(user.password, "secret");
    }

    #[test]
    fn boxed_record() {
        let mut boxed = Box::new(user());

        set_field(&mut boxed, "username", String::from("rust")).unwrap();
        assert_eq!(boxed.username, "rust");
        assert_eq!(field_names(&boxed).unwrap(), ["username", "age"]);
        assert_eq!(set_field(&boxed, "age", 1), Err(AttrError::NotAddressable));
    }

    #[test]
    fn not_a_record() {
        let mut number = 5_i32;
        let nested = Box::new(Box::new(user()));

        assert_eq!(get_field(&number, "age").err(), Some(AttrError::NotARecord));
        assert_eq!(set_field(&mut number, "age", 1), Err(AttrError::NotARecord));
        assert_eq!(has_field(&nested, "age"), Err(AttrError::NotARecord));
        assert_eq!(field_names(&nested).err(), Some(AttrError::NotARecord));
        assert_eq!(field_tags(&number, "json").err(), Some(AttrError::NotARecord));
    }

    #[derive(Record)]
    struct Limits {
        pub max: u32,
    }

    #[derive(Record)]
    struct Quota {
        pub inner: Limits,
        pub boxed: Box<Limits>,
        pub value: u32,
    }

    #[test]
    fn nested_kinds() {
        let quota = Quota {
            inner: Limits { max: 1 },
            boxed: Box::new(Limits { max: 2 }),
            value: 3,
        };

        let kinds = field_kinds(&quota).unwrap();
        assert_eq!(
            kinds.iter().collect::<Vec<_>>(),
            [
                ("inner", &Kind::Record),
                ("boxed", &Kind::Reference),
                ("value", &Kind::Unsigned),
            ],
        );
        assert_eq!(field_kind(&quota, "inner"), Ok(Kind::Record));
        assert_eq!(field_kind(&quota, "boxed"), Ok(Kind::Reference));

        let boxed = get_field(&quota, "boxed").unwrap();
        assert_eq!(get_field_as::<u32>(Target::value(boxed), "max"), Ok(&2));
    }

    #[derive(Record)]
    struct Slot<T> {
        pub value: T,
    }

    #[test]
    fn generic_instantiations_are_distinct() {
        let mut text = Slot { value: String::from("a") };
        let mut number = Slot { value: 1_u8 };

        assert_eq!(field_kind(&text, "value"), Ok(Kind::String));
        assert_eq!(field_kind(&number, "value"), Ok(Kind::Unsigned));

        assert_eq!(set_field(&mut text, "value", 2_u8), Err(AttrError::TypeMismatch));
        set_field(&mut number, "value", 2_u8).unwrap();
        set_field(&mut text, "value", String::from("b")).unwrap();
        assert_eq!((text.value.as_str(), number.value), ("b", 2));
    }

    #[test]
    fn registered_records() {
        let mut registry = RecordRegistry::new();
        assert_eq!(record_info(&registry, "User").err(), Some(AttrError::UnknownRecord));

        registry.register::<User>();
        registry.register::<Quota>();

        let info = record_info(&registry, "User").unwrap();
        assert!(info.type_is::<User>());
        assert_eq!(info.field("username").unwrap().tag("db"), "uname");

        let path = record_info(&registry, "Quota").unwrap().type_path();
        assert!(record_info(&registry, path).unwrap().type_is::<Quota>());
        assert_eq!(record_info(&registry, "quota").err(), Some(AttrError::UnknownRecord));
    }

    #[derive(Record)]
    #[record(auto_register)]
    struct Settings {
        pub verbose: bool,
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn auto_registered_records() {
        let mut registry = RecordRegistry::new();
        assert!(registry.auto_register());

        let info = record_info(&registry, "Settings").unwrap();
        assert!(info.type_is::<Settings>());
        assert_eq!(info.field("verbose").unwrap().kind(), Kind::Boolean);

        let len = registry.len();
        assert!(registry.auto_register());
        assert_eq!(registry.len(), len);
    }

    #[test]
    fn erased_values() {
        let mut user = user();
        let value: Box<dyn Field> = Box::new(41_i32);

        set_field_boxed(Target::reference(&mut user), "age", value).unwrap();
        let age = get_field(Target::value(&user), "age").unwrap();
        assert_eq!(age.downcast_ref::<i32>(), Some(&41));
    }
}
