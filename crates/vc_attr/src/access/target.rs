use crate::access::AttrError;
use crate::field::{Field, FieldMut, FieldRef};
use crate::info::RecordInfo;
use crate::record::Record;

// -----------------------------------------------------------------------------
// Target

/// A caller value handed to an [`access`](crate::access) operation.
///
/// A shared borrow passes the record by value: it can be read but not
/// modified. An exclusive borrow passes it by reference and allows writes.
///
/// Usually built implicitly from `&T` or `&mut T`; trait objects go
/// through [`Target::value`] and [`Target::reference`].
pub enum Target<'a> {
    Value(&'a dyn Field),
    Reference(&'a mut dyn Field),
}

impl<'a> Target<'a> {
    /// Wraps a shared borrow of any field value.
    #[inline]
    pub fn value(value: &'a dyn Field) -> Self {
        Self::Value(value)
    }

    /// Wraps an exclusive borrow of any field value.
    #[inline]
    pub fn reference(value: &'a mut dyn Field) -> Self {
        Self::Reference(value)
    }
}

impl<'a, T: Field> From<&'a T> for Target<'a> {
    #[inline]
    fn from(value: &'a T) -> Self {
        Self::Value(value)
    }
}

impl<'a, T: Field> From<&'a mut T> for Target<'a> {
    #[inline]
    fn from(value: &'a mut T) -> Self {
        Self::Reference(value)
    }
}

// -----------------------------------------------------------------------------
// RecordHandle

/// A canonical borrow of a record, produced by [`normalize`].
pub enum RecordHandle<'a> {
    /// Read-only access.
    Shared(&'a dyn Record),
    /// Read-write access.
    Exclusive(&'a mut dyn Record),
}

impl<'a> RecordHandle<'a> {
    /// Returns the metadata of the record type.
    #[inline]
    pub fn info(&self) -> &'static RecordInfo {
        self.as_record().record_info()
    }

    /// Borrows the record read-only, whichever kind of handle this is.
    #[inline]
    pub fn as_record(&self) -> &dyn Record {
        match self {
            Self::Shared(record) => *record,
            Self::Exclusive(record) => &**record,
        }
    }

    /// Returns `true` if the record can be written through this handle.
    #[inline]
    pub fn is_addressable(&self) -> bool {
        matches!(self, Self::Exclusive(_))
    }

    /// Converts into a read-only borrow for the full lifetime.
    #[inline]
    pub fn into_shared(self) -> &'a dyn Record {
        match self {
            Self::Shared(record) => record,
            Self::Exclusive(record) => record,
        }
    }

    /// Converts into a read-write borrow, or fails with
    /// [`AttrError::NotAddressable`].
    #[inline]
    pub fn into_exclusive(self) -> Result<&'a mut dyn Record, AttrError> {
        match self {
            Self::Shared(_) => Err(AttrError::NotAddressable),
            Self::Exclusive(record) => Ok(record),
        }
    }
}

// -----------------------------------------------------------------------------
// normalize

/// Turns a caller value into a [`RecordHandle`].
///
/// A record is accepted directly, and so is a `Box` holding a record: exactly
/// one pointer is looked through, keeping the mutability of the borrow. Any
/// other value fails with [`AttrError::NotARecord`].
///
/// # Examples
///
/// ```
/// use vc_attr::access::{normalize, AttrError, Target};
/// use vc_attr::derive::Record;
///
/// #[derive(Record)]
/// struct Config {
///     pub port: u16,
/// }
///
/// let mut boxed = Box::new(Config { port: 80 });
/// assert!(normalize(Target::from(&mut boxed)).unwrap().is_addressable());
/// assert!(!normalize(Target::from(&boxed)).unwrap().is_addressable());
///
/// let nested = Box::new(Box::new(Config { port: 80 }));
/// assert_eq!(normalize(Target::from(&nested)).err(), Some(AttrError::NotARecord));
/// assert_eq!(normalize(Target::from(&42_u16)).err(), Some(AttrError::NotARecord));
/// ```
pub fn normalize(target: Target<'_>) -> Result<RecordHandle<'_>, AttrError> {
    match target {
        Target::Value(value) => match value.field_ref() {
            FieldRef::Record(record) => Ok(RecordHandle::Shared(record)),
            FieldRef::Reference(inner) => inner
                .field_ref()
                .as_record()
                .map(RecordHandle::Shared)
                .ok_or(AttrError::NotARecord),
            _ => Err(AttrError::NotARecord),
        },
        Target::Reference(value) => match value.field_mut() {
            FieldMut::Record(record) => Ok(RecordHandle::Exclusive(record)),
            FieldMut::Reference(inner) => match inner.field_mut() {
                FieldMut::Record(record) => Ok(RecordHandle::Exclusive(record)),
                _ => Err(AttrError::NotARecord),
            },
            FieldMut::Other => Err(AttrError::NotARecord),
        },
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::vec::Vec;

    use super::{RecordHandle, Target, normalize};
    use crate::access::AttrError;
    use crate::derive::Record;
    use crate::field::Field;

    #[derive(Record)]
    struct Sample {
        pub id: u32,
    }

    #[test]
    fn direct_record() {
        let mut sample = Sample { id: 1 };

        let handle = normalize(Target::from(&sample)).unwrap();
        assert!(matches!(handle, RecordHandle::Shared(_)));
        assert_eq!(handle.info().type_ident(), "Sample");

        let handle = normalize(Target::from(&mut sample)).unwrap();
        assert!(handle.is_addressable());
        let id = handle.as_record().field_by_name("id").unwrap();
        assert_eq!(id.downcast_ref::<u32>(), Some(&1));
        assert!(handle.into_exclusive().is_ok());
    }

    #[test]
    fn one_hop_keeps_mutability() {
        let mut boxed = Box::new(Sample { id: 1 });

        let handle = normalize(Target::from(&boxed)).unwrap();
        assert_eq!(handle.into_exclusive().err(), Some(AttrError::NotAddressable));

        let record = normalize(Target::from(&mut boxed))
            .unwrap()
            .into_exclusive()
            .unwrap();
        record.field_by_name_mut("id").unwrap().set(Box::new(2_u32)).unwrap();
        assert_eq!(boxed.id, 2);
    }

    #[test]
    fn rejects_non_records() {
        let mut nested = Box::new(Box::new(Sample { id: 1 }));
        let mut boxed_scalar = Box::new(1_u32);
        let mut list = Vec::from([Sample { id: 1 }]);
        let mut some = Some(Sample { id: 1 });

        assert_eq!(normalize(Target::from(&mut nested)).err(), Some(AttrError::NotARecord));
        assert_eq!(normalize(Target::from(&mut boxed_scalar)).err(), Some(AttrError::NotARecord));
        assert_eq!(normalize(Target::from(&mut list)).err(), Some(AttrError::NotARecord));
        assert_eq!(normalize(Target::from(&mut some)).err(), Some(AttrError::NotARecord));
        assert_eq!(normalize(Target::from(&"text")).err(), Some(AttrError::NotARecord));
    }

    #[test]
    fn trait_objects() {
        let sample = Sample { id: 1 };
        let erased: Box<dyn Field> = Box::new(Sample { id: 3 });

        assert!(normalize(Target::value(&sample)).is_ok());
        let record = normalize(Target::value(&*erased)).unwrap().into_shared();
        assert_eq!(record.field_by_name("id").unwrap().downcast_ref::<u32>(), Some(&3));
    }
}
