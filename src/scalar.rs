//! The closed set of values a [`Value`](crate::Value) can carry.

use serde::ser::{Error as _, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

use crate::complex::Complex;
use crate::duration::format_duration;
use crate::TypeName;

/// A typed scalar. Every variant maps to exactly one canonical [`TypeName`].
///
/// JSON numbers are decoded through `f64`, so integers of magnitude above 2^53 in
/// the 64-bit and pointer-sized variants come back rounded to the nearest `f64`, and
/// values rounding to 2^63 or 2^64 are rejected as out of range.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Scalar {
    #[default]
    Nil,
    Int(isize),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    /// Exact through JSON only up to 2^53 in magnitude.
    Int64(i64),
    UInt(usize),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    /// Exact through JSON only up to 2^53.
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    String(String),
    Bool(bool),
    Time(OffsetDateTime),
    Duration(Duration),
    Complex64(Complex<f32>),
    Complex128(Complex<f64>),
}

impl Scalar {
    /// Canonical type name of the variant.
    pub fn type_name(&self) -> TypeName {
        match self {
            Scalar::Nil => TypeName::NIL,
            Scalar::Int(_) => TypeName::INT,
            Scalar::Int8(_) => TypeName::INT8,
            Scalar::Int16(_) => TypeName::INT16,
            Scalar::Int32(_) => TypeName::INT32,
            Scalar::Int64(_) => TypeName::INT64,
            Scalar::UInt(_) => TypeName::UINT,
            Scalar::UInt8(_) => TypeName::UINT8,
            Scalar::UInt16(_) => TypeName::UINT16,
            Scalar::UInt32(_) => TypeName::UINT32,
            Scalar::UInt64(_) => TypeName::UINT64,
            Scalar::Float32(_) => TypeName::FLOAT32,
            Scalar::Float64(_) => TypeName::FLOAT64,
            Scalar::String(_) => TypeName::STRING,
            Scalar::Bool(_) => TypeName::BOOL,
            Scalar::Time(_) => TypeName::TIME,
            Scalar::Duration(_) => TypeName::DURATION,
            Scalar::Complex64(_) => TypeName::COMPLEX64,
            Scalar::Complex128(_) => TypeName::COMPLEX128,
        }
    }

    /// Whether this is [`Scalar::Nil`].
    pub fn is_nil(&self) -> bool {
        matches!(self, Scalar::Nil)
    }

    /// The string payload, if this is [`Scalar::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    isize => Int,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    usize => UInt,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
    String => String,
    bool => Bool,
    OffsetDateTime => Time,
    Duration => Duration,
    Complex<f32> => Complex64,
    Complex<f64> => Complex128,
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<()> for Scalar {
    fn from(_: ()) -> Self {
        Scalar::Nil
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Scalar::Nil, Into::into)
    }
}

/// Writes the JSON form a built-in decoder reads back.
///
/// Non-finite floats, instants outside the RFC 3339 range and durations beyond the
/// signed 64-bit nanosecond range have no JSON form and fail with a serializer error.
impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Nil => serializer.serialize_unit(),
            Scalar::Int(v) => serializer.serialize_i64(*v as i64),
            Scalar::Int8(v) => serializer.serialize_i8(*v),
            Scalar::Int16(v) => serializer.serialize_i16(*v),
            Scalar::Int32(v) => serializer.serialize_i32(*v),
            Scalar::Int64(v) => serializer.serialize_i64(*v),
            Scalar::UInt(v) => serializer.serialize_u64(*v as u64),
            Scalar::UInt8(v) => serializer.serialize_u8(*v),
            Scalar::UInt16(v) => serializer.serialize_u16(*v),
            Scalar::UInt32(v) => serializer.serialize_u32(*v),
            Scalar::UInt64(v) => serializer.serialize_u64(*v),
            Scalar::Float32(v) if v.is_finite() => serializer.serialize_f32(*v),
            Scalar::Float64(v) if v.is_finite() => serializer.serialize_f64(*v),
            Scalar::Float32(v) => Err(S::Error::custom(format!("unsupported value: {v}"))),
            Scalar::Float64(v) => Err(S::Error::custom(format!("unsupported value: {v}"))),
            Scalar::String(v) => serializer.serialize_str(v),
            Scalar::Bool(v) => serializer.serialize_bool(*v),
            Scalar::Time(v) => {
                let text = v
                    .format(&Rfc3339)
                    .map_err(|err| S::Error::custom(format!("unsupported time value: {err}")))?;
                serializer.serialize_str(&text)
            }
            Scalar::Duration(v) if i64::try_from(v.whole_nanoseconds()).is_ok() => {
                serializer.serialize_str(&format_duration(*v))
            }
            Scalar::Duration(v) => Err(S::Error::custom(format!(
                "unsupported duration value: {v} exceeds 64-bit nanoseconds"
            ))),
            Scalar::Complex64(v) => serializer.collect_str(v),
            Scalar::Complex128(v) => serializer.collect_str(v),
        }
    }
}
