use alloc::string::String;
use core::time::Duration;

use crate::field::Kind;

macro_rules! impl_scalar_field {
    ($kind:ident: $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::field::Typed for $ty {
                const KIND: Kind = Kind::$kind;

                #[inline]
                fn clone_value(&self) -> Self {
                    ::core::clone::Clone::clone(self)
                }

                #[inline]
                fn value_eq(&self, other: &Self) -> bool {
                    ::core::cmp::PartialEq::eq(self, other)
                }

                #[inline]
                fn value_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    ::core::fmt::Debug::fmt(self, f)
                }

                #[inline]
                fn value_ref(&self) -> $crate::field::FieldRef<'_> {
                    $crate::field::FieldRef::Scalar(self)
                }
            }
        )+
    };
}

impl_scalar_field!(Boolean: bool);
impl_scalar_field!(Char: char);
impl_scalar_field!(Integer: i8, i16, i32, i64, i128, isize);
impl_scalar_field!(Unsigned: u8, u16, u32, u64, u128, usize);
impl_scalar_field!(Float: f32, f64);
impl_scalar_field!(String: String, &'static str);
impl_scalar_field!(Opaque: Duration);

/// Implements [`Typed`](crate::field::Typed) for leaf types with
/// [`Kind::Opaque`](crate::field::Kind::Opaque).
///
/// The type must implement `Clone`, `PartialEq`, `Debug` and
/// `serde::Serialize`, and be `Send + Sync + 'static`.
///
/// # Examples
///
/// ```
/// use vc_attr::field::{Kind, Typed};
///
/// #[derive(Clone, PartialEq, Debug, serde::Serialize)]
/// struct Rgb(u8, u8, u8);
///
/// vc_attr::impl_opaque_field!(Rgb);
///
/// assert_eq!(<Rgb as Typed>::KIND, Kind::Opaque);
/// ```
#[macro_export]
macro_rules! impl_opaque_field {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::field::Typed for $ty {
                const KIND: $crate::field::Kind = $crate::field::Kind::Opaque;

                #[inline]
                fn clone_value(&self) -> Self {
                    ::core::clone::Clone::clone(self)
                }

                #[inline]
                fn value_eq(&self, other: &Self) -> bool {
                    ::core::cmp::PartialEq::eq(self, other)
                }

                #[inline]
                fn value_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    ::core::fmt::Debug::fmt(self, f)
                }

                #[inline]
                fn value_ref(&self) -> $crate::field::FieldRef<'_> {
                    $crate::field::FieldRef::Scalar(self)
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use crate::field::{Field, FieldMut, FieldRef, Kind};

    #[test]
    fn scalar_kinds() {
        assert_eq!(true.kind(), Kind::Boolean);
        assert_eq!('x'.kind(), Kind::Char);
        assert_eq!((-3_i8).kind(), Kind::Integer);
        assert_eq!(3_usize.kind(), Kind::Unsigned);
        assert_eq!(0.5_f32.kind(), Kind::Float);
        assert_eq!("srathi".kind(), Kind::String);
        assert_eq!(Duration::from_secs(1).kind(), Kind::Opaque);
    }

    #[test]
    fn scalars_are_leaves() {
        let mut value = 30_i32;
        assert!(matches!(value.field_ref(), FieldRef::Scalar(_)));
        assert!(matches!(value.field_mut(), FieldMut::Other));
    }
}
