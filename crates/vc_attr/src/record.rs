//! The [`Record`] and [`RecordType`] traits.
//!
//! Both are implemented by [`#[derive(Record)]`](crate::derive::Record);
//! implementing them by hand is possible but rarely useful.

use core::fmt;

use crate::field::{Field, Typed};
use crate::info::{FieldInfo, RecordInfo};

// -----------------------------------------------------------------------------
// Record

/// A record value with named fields.
///
/// Fields are addressed by their declaration index; names are resolved
/// through [`RecordInfo`]. Fields excluded with `#[record(skip)]` have no
/// index and are invisible to this trait.
///
/// # Examples
///
/// ```
/// use vc_attr::{derive::Record, record::Record};
///
/// #[derive(Record)]
/// struct Point {
///     pub x: f32,
///     pub y: f32,
/// }
///
/// let mut point = Point { x: 1.0, y: 2.0 };
/// let record: &mut dyn Record = &mut point;
///
/// assert_eq!(record.field_len(), 2);
/// assert_eq!(record.field_by_name("y").unwrap().downcast_ref::<f32>(), Some(&2.0));
///
/// *record.field_by_name_mut("x").unwrap().downcast_mut::<f32>().unwrap() = 4.0;
/// assert_eq!(point.x, 4.0);
/// ```
pub trait Record: Field {
    /// Returns the metadata of the concrete record type.
    fn record_info(&self) -> &'static RecordInfo;

    /// Returns the field at `index` in declaration order.
    fn field_at(&self, index: usize) -> Option<&dyn Field>;

    /// Returns the field at `index` in declaration order, mutably.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Field>;

    /// Returns the number of declared fields.
    #[inline]
    fn field_len(&self) -> usize {
        self.record_info().field_len()
    }
}

impl dyn Record {
    /// Returns the field named `name`, regardless of its visibility.
    #[inline]
    pub fn field_by_name(&self, name: &str) -> Option<&dyn Field> {
        let index = self.record_info().index_of(name)?;
        self.field_at(index)
    }

    /// Returns the field named `name` mutably, regardless of its visibility.
    #[inline]
    pub fn field_by_name_mut(&mut self, name: &str) -> Option<&mut dyn Field> {
        let index = self.record_info().index_of(name)?;
        self.field_at_mut(index)
    }

    /// Returns an iterator over `(declaration, value)` of all fields,
    /// in declaration order.
    pub fn iter_fields(&self) -> impl Iterator<Item = (&'static FieldInfo, &dyn Field)> {
        self.record_info()
            .iter()
            .enumerate()
            .filter_map(|(index, info)| Some((info, self.field_at(index)?)))
    }
}

impl fmt::Debug for dyn Record {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.field_debug(f)
    }
}

// -----------------------------------------------------------------------------
// RecordType

/// Static access to the metadata of a record type.
///
/// The metadata is built on first access and lives for the rest of the
/// process.
///
/// # Examples
///
/// ```
/// use vc_attr::{derive::Record, record::RecordType};
///
/// #[derive(Record)]
/// struct Empty;
///
/// assert_eq!(Empty::info().type_ident(), "Empty");
/// assert_eq!(Empty::info().field_len(), 0);
/// ```
pub trait RecordType: Record + Typed {
    /// Returns the metadata of this record type.
    fn info() -> &'static RecordInfo;
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::derive::Record;
    use crate::field::Field;
    use crate::record::{Record, RecordType};

    #[derive(Record)]
    struct Account {
        pub login: String,
        pub(crate) quota: u32,
        #[record(skip)]
        cache: Vec<u8>,
    }

    #[test]
    fn fields_by_index_and_name() {
        let account = Account {
            login: String::from("srathi"),
            quota: 7,
            cache: Vec::new(),
        };
        let record: &dyn Record = &account;

        assert_eq!(record.field_len(), 2);
        assert!(record.field_at(2).is_none());
        assert!(record.field_by_name("cache").is_none());
        assert_eq!(record.field_by_name("quota").unwrap().downcast_ref::<u32>(), Some(&7));
        assert!(account.cache.is_empty());
    }

    #[test]
    fn mutable_lookup_by_name() {
        let mut account = Account {
            login: String::from("srathi"),
            quota: 7,
            cache: Vec::new(),
        };
        let record: &mut dyn Record = &mut account;

        *record
            .field_by_name_mut("quota")
            .unwrap()
            .downcast_mut::<u32>()
            .unwrap() = 9;
        assert!(record.field_by_name_mut("cache").is_none());
        assert!(record.field_by_name_mut("Quota").is_none());
        assert_eq!(account.quota, 9);
    }

    #[test]
    fn iter_fields_in_order() {
        let account = Account {
            login: String::from("srathi"),
            quota: 7,
            cache: Vec::new(),
        };
        let record: &dyn Record = &account;
        let names = record
            .iter_fields()
            .map(|(info, _)| info.name())
            .collect::<Vec<_>>();

        assert_eq!(names, ["login", "quota"]);
        assert!(core::ptr::eq(record.record_info(), Account::info()));
    }

    #[test]
    fn derived_value_semantics() {
        let account = Account {
            login: String::from("srathi"),
            quota: 7,
            cache: Vec::from([1, 2, 3]),
        };
        let copy: Box<dyn Field> = account.clone_field();
        let copy = copy.downcast_ref::<Account>().unwrap();

        assert!(copy.cache.is_empty());
        assert!(account.field_eq(copy));
        assert_eq!(
            format!("{:?}", &account as &dyn Field),
            "Account { login: \"srathi\", quota: 7 }",
        );
    }
}
