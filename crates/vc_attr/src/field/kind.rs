use core::fmt;

use serde_core::{Serialize, Serializer};

// -----------------------------------------------------------------------------
// Kind

/// Coarse category of a field's declared type.
///
/// A kind ignores bit widths and generic parameters: `i8` and `i64` are both
/// [`Kind::Integer`], `Vec<u8>` and `[String; 4]` are both [`Kind::Sequence`].
///
/// The [`Display`](fmt::Display) form is the lowercase tag returned by the
/// kind queries of [`access`](crate::access).
///
/// # Examples
///
/// ```
/// use vc_attr::field::{Kind, Typed};
///
/// assert_eq!(<u16 as Typed>::KIND, Kind::Unsigned);
/// assert_eq!(<Vec<String> as Typed>::KIND, Kind::Sequence);
/// assert_eq!(Kind::Record.to_string(), "record");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Boolean,
    Integer,
    Unsigned,
    Float,
    Char,
    String,
    Sequence,
    Map,
    Option,
    Reference,
    Record,
    Opaque,
}

impl Kind {
    /// Returns the lowercase tag of this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Unsigned => "unsigned",
            Self::Float => "float",
            Self::Char => "char",
            Self::String => "string",
            Self::Sequence => "sequence",
            Self::Map => "map",
            Self::Option => "option",
            Self::Reference => "reference",
            Self::Record => "record",
            Self::Opaque => "opaque",
        }
    }

    /// Returns `true` for kinds whose values are numbers.
    #[inline]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Unsigned | Self::Float)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for Kind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
