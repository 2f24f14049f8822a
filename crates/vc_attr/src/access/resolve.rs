use crate::access::{AttrError, RecordHandle};
use crate::info::{FieldInfo, RecordInfo};

/// Finds the declaration of `name` and its index, regardless of visibility.
#[inline]
pub(crate) fn locate(info: &'static RecordInfo, name: &str) -> Result<(usize, &'static FieldInfo), AttrError> {
    let index = info.index_of(name).ok_or(AttrError::NoSuchField)?;
    let field = info.field_at(index).ok_or(AttrError::NoSuchField)?;
    Ok((index, field))
}

/// Like [`locate`], but hidden fields fail with [`AttrError::Hidden`].
#[inline]
pub(crate) fn locate_visible(
    info: &'static RecordInfo,
    name: &str,
) -> Result<(usize, &'static FieldInfo), AttrError> {
    let (index, field) = locate(info, name)?;
    if field.is_visible() {
        Ok((index, field))
    } else {
        Err(AttrError::Hidden)
    }
}

/// Maps a field name to its declaration.
///
/// The lookup is exact and case-sensitive, and does not look at visibility.
/// Fails with [`AttrError::NoSuchField`] when the record declares no such
/// field.
#[inline]
pub fn resolve(handle: &RecordHandle<'_>, name: &str) -> Result<&'static FieldInfo, AttrError> {
    locate(handle.info(), name).map(|(_, field)| field)
}

/// Maps a field name to the declaration of a visible field.
///
/// Fails like [`resolve`], and with [`AttrError::Hidden`] for a field that
/// is declared but not public.
#[inline]
pub fn resolve_visible(
    handle: &RecordHandle<'_>,
    name: &str,
) -> Result<&'static FieldInfo, AttrError> {
    locate_visible(handle.info(), name).map(|(_, field)| field)
}

#[cfg(test)]
mod tests {
    use super::{resolve, resolve_visible};
    use crate::access::{AttrError, Target, normalize};
    use crate::derive::Record;

    #[derive(Record)]
    struct Login {
        pub user: &'static str,
        #[record(hidden)]
        pub token: u64,
        secret: u64,
    }

    #[test]
    fn exact_names_only() {
        let login = Login { user: "srathi", token: 1, secret: 2 };
        let handle = normalize(Target::from(&login)).unwrap();

        assert_eq!(resolve(&handle, "user").unwrap().name(), "user");
        assert_eq!(resolve(&handle, "User").err(), Some(AttrError::NoSuchField));
        assert_eq!(resolve(&handle, "").err(), Some(AttrError::NoSuchField));
        assert_eq!(login.secret, 2);
    }

    #[test]
    fn visibility_applies_to_values_only() {
        let login = Login { user: "srathi", token: 1, secret: 2 };
        let handle = normalize(Target::from(&login)).unwrap();

        assert!(resolve(&handle, "token").is_ok());
        assert!(resolve(&handle, "secret").is_ok());
        assert_eq!(resolve_visible(&handle, "token").err(), Some(AttrError::Hidden));
        assert_eq!(resolve_visible(&handle, "secret").err(), Some(AttrError::Hidden));
        assert_eq!(resolve_visible(&handle, "nope").err(), Some(AttrError::NoSuchField));
    }
}
