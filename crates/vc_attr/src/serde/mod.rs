//! Serialization of field values through their structure.
//!
//! [`FieldSerializer`] serializes any `&dyn Field` without the concrete
//! type: leaves go through their own `serde` implementation, containers
//! element by element, and records as a struct of their public fields.

use serde_core::ser::{SerializeMap, SerializeSeq, SerializeStruct};
use serde_core::{Serialize, Serializer};

use crate::field::{Field, FieldRef};
use crate::record::Record;

// -----------------------------------------------------------------------------
// FieldSerializer

/// A [`Serialize`] adapter for a type-erased field value.
///
/// # Examples
///
/// ```
/// use vc_attr::{derive::Record, serde::FieldSerializer};
///
/// #[derive(Record)]
/// struct User {
///     pub username: String,
///     pub langs: Vec<&'static str>,
///     pub manager: Option<Box<User>>,
///     password: String,
/// }
///
/// let user = User {
///     username: "srathi".into(),
///     langs: vec!["go", "rust"],
///     manager: None,
///     password: "secret".into(),
/// };
///
/// let json = serde_json::to_string(&FieldSerializer::new(&user)).unwrap();
/// assert_eq!(json, r#"{"username":"srathi","langs":["go","rust"],"manager":null}"#);
/// # assert_eq!(user.password, "secret");
/// ```
#[derive(Clone, Copy)]
pub struct FieldSerializer<'a>(&'a dyn Field);

impl<'a> FieldSerializer<'a> {
    #[inline]
    pub fn new(value: &'a dyn Field) -> Self {
        Self(value)
    }
}

impl Serialize for FieldSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.field_ref() {
            FieldRef::Scalar(value) => erased_serde::serialize(value, serializer),
            FieldRef::Sequence(items) => {
                let mut state = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    state.serialize_element(&FieldSerializer(item))?;
                }
                state.end()
            }
            FieldRef::Map(entries) => {
                let mut state = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    state.serialize_entry(&FieldSerializer(key), &FieldSerializer(value))?;
                }
                state.end()
            }
            FieldRef::Option(None) => serializer.serialize_none(),
            FieldRef::Option(Some(value)) => serializer.serialize_some(&FieldSerializer(value)),
            FieldRef::Reference(value) => FieldSerializer(value).serialize(serializer),
            FieldRef::Record(record) => RecordSerializer(record).serialize(serializer),
        }
    }
}

/// Serializes the public fields of a record, in declaration order.
struct RecordSerializer<'a>(&'a dyn Record);

impl Serialize for RecordSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let info = self.0.record_info();
        let len = info.iter_visible().count();

        let mut state = serializer.serialize_struct(info.type_ident(), len)?;
        for (index, field) in info.iter_visible() {
            match self.0.field_at(index) {
                Some(value) => state.serialize_field(field.name(), &FieldSerializer(value))?,
                None => state.skip_field(field.name())?,
            }
        }
        state.end()
    }
}
