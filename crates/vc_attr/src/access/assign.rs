use alloc::boxed::Box;

use crate::access::resolve::locate_visible;
use crate::access::{AttrError, RecordHandle};
use crate::field::Field;

/// Writes `value` into the field `name` of the record behind `handle`.
///
/// The checks run in this order, and the first failure is returned with the
/// record left unchanged:
///
/// 1. the handle is exclusive, else [`AttrError::NotAddressable`];
/// 2. the field exists, else [`AttrError::NoSuchField`];
/// 3. the field is visible, else [`AttrError::Hidden`];
/// 4. the value's type is exactly the declared type, else
///    [`AttrError::TypeMismatch`].
///
/// No numeric widening or other conversion takes place.
pub fn assign(handle: RecordHandle<'_>, name: &str, value: Box<dyn Field>) -> Result<(), AttrError> {
    let info = handle.info();
    let result = write(handle, name, value);

    match &result {
        Ok(()) => log::trace!("set field `{name}` of `{}`", info.type_path()),
        Err(err) => log::debug!("refused to set field `{name}` of `{}`: {err}", info.type_path()),
    }

    result
}

fn write(handle: RecordHandle<'_>, name: &str, value: Box<dyn Field>) -> Result<(), AttrError> {
    let record = handle.into_exclusive()?;
    let (index, field) = locate_visible(record.record_info(), name)?;

    if value.ty_id() != field.ty_id() {
        return Err(AttrError::TypeMismatch);
    }

    let slot = record.field_at_mut(index).ok_or(AttrError::NoSuchField)?;
    slot.set(value).map_err(|_| AttrError::TypeMismatch)
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use super::assign;
    use crate::access::{AttrError, Target, normalize};
    use crate::derive::Record;

    #[derive(Record)]
    struct Server {
        pub host: String,
        pub port: u16,
        pub(crate) retries: u8,
    }

    fn server() -> Server {
        Server {
            host: String::from("localhost"),
            port: 80,
            retries: 3,
        }
    }

    #[test]
    fn check_order() {
        let mut server = server();

        let shared = normalize(Target::from(&server)).unwrap();
        assert_eq!(
            assign(shared, "missing", Box::new(1_u8)).err(),
            Some(AttrError::NotAddressable),
        );

        let handle = normalize(Target::from(&mut server)).unwrap();
        assert_eq!(
            assign(handle, "missing", Box::new(1_u8)).err(),
            Some(AttrError::NoSuchField),
        );

        let handle = normalize(Target::from(&mut server)).unwrap();
        assert_eq!(
            assign(handle, "retries", Box::new(1_u16)).err(),
            Some(AttrError::Hidden),
        );

        let handle = normalize(Target::from(&mut server)).unwrap();
        assert_eq!(
            assign(handle, "port", Box::new(8080_u32)).err(),
            Some(AttrError::TypeMismatch),
        );

        assert_eq!(server.port, 80);
        assert_eq!(server.retries, 3);
    }

    #[test]
    fn writes_in_place() {
        let mut server = server();

        let handle = normalize(Target::from(&mut server)).unwrap();
        assign(handle, "port", Box::new(8080_u16)).unwrap();

        assert_eq!(server.port, 8080);
        assert_eq!(server.host, "localhost");
    }

    #[test]
    fn assigning_current_value_is_idempotent() {
        let mut server = server();

        for _ in 0..2 {
            let handle = normalize(Target::from(&mut server)).unwrap();
            assign(handle, "host", Box::new(String::from("localhost"))).unwrap();
        }
        assert_eq!(server.host, "localhost");
        assert_eq!(server.port, 80);
    }
}
