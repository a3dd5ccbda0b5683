//! Built-in decoders turning generic JSON values into typed scalars.
//!
//! Every decoder follows the same contract: a JSON value of the wrong shape fails with
//! [`ErrorKind::InvalidType`](crate::ErrorKind::InvalidType), and every message starts
//! with the decoder's own name so a failure points at the function that produced it.
//!
//! Numbers are read as `f64`, exactly as a schema-less JSON parse would see them, and
//! are then narrowed to the target width. Narrowing never rounds: a fractional value
//! is rejected for integer targets and a value outside the target range is rejected
//! for every target.

use serde_json::Value as Json;
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

use crate::complex::{parse_complex, Complex};
use crate::duration::parse_duration;
use crate::{Error, Result, TypeName};

/// Name of the JSON shape a value has, as reported in `InvalidType` messages.
pub(crate) fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "nil",
        Json::Bool(_) => "bool",
        Json::Number(_) => "float64",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

pub(crate) fn require_number(decoder: &str, value: &Json) -> Result<f64> {
    match value {
        Json::Number(n) => n.as_f64().ok_or_else(|| {
            Error::invalid_type(format!("{decoder}: requires float64 value got {n}"))
        }),
        other => Err(Error::invalid_type(format!(
            "{decoder}: requires float64 value got {}",
            json_kind(other)
        ))),
    }
}

pub(crate) fn require_string<'a>(decoder: &str, value: &'a Json) -> Result<&'a str> {
    match value {
        Json::String(s) => Ok(s),
        other => Err(Error::invalid_type(format!(
            "{decoder}: requires string value got {}",
            json_kind(other)
        ))),
    }
}

// -------------------------------------------------------------------------------------------------
// Integer narrowing
// -------------------------------------------------------------------------------------------------

/// Fixed-width integer a JSON number can be narrowed into.
///
/// The bounds are powers of two, so they are exact in `f64` and `LOWER <= f < UPPER`
/// admits exactly the representable integers, including at the edge of 64-bit types.
pub trait Narrow: Sized {
    /// Target type name used in error messages.
    const TARGET: &'static str;
    /// Inclusive lower bound.
    const LOWER: f64;
    /// Exclusive upper bound.
    const UPPER: f64;

    /// Converts an integral `f64` already known to be in range.
    fn from_f64(value: f64) -> Self;
}

macro_rules! narrow {
    ($($ty:ty => $target:literal),* $(,)?) => {
        $(
            impl Narrow for $ty {
                const TARGET: &'static str = $target;
                const LOWER: f64 = if <$ty>::MIN == 0 {
                    0.0
                } else {
                    -((1u128 << (<$ty>::BITS - 1)) as f64)
                };
                const UPPER: f64 = if <$ty>::MIN == 0 {
                    (1u128 << <$ty>::BITS) as f64
                } else {
                    (1u128 << (<$ty>::BITS - 1)) as f64
                };

                fn from_f64(value: f64) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

narrow! {
    isize => "int",
    i8 => "int8",
    i16 => "int16",
    i32 => "int32",
    i64 => "int64",
    usize => "uint",
    u8 => "uint8",
    u16 => "uint16",
    u32 => "uint32",
    u64 => "uint64",
}

/// Narrows a JSON number into `T`, reporting failures under `decoder`'s name.
pub fn narrow_integer<T: Narrow>(decoder: &str, value: &Json) -> Result<T> {
    let f = require_number(decoder, value)?;
    if f != f.trunc() {
        return Err(Error::invalid_value(format!(
            "{decoder}: requires non-fractional value"
        )));
    }
    if f < T::LOWER || f >= T::UPPER {
        return Err(Error::invalid_range(format!(
            "{decoder}: requires float64 value in range of {}",
            T::TARGET
        )));
    }
    Ok(T::from_f64(f))
}

/// Narrows to `int` (`isize`).
pub fn decode_int(value: &Json) -> Result<isize> {
    narrow_integer("decode_int", value)
}

/// Narrows to `int8`.
pub fn decode_int8(value: &Json) -> Result<i8> {
    narrow_integer("decode_int8", value)
}

/// Narrows to `int16`.
pub fn decode_int16(value: &Json) -> Result<i16> {
    narrow_integer("decode_int16", value)
}

/// Narrows to `int32`.
pub fn decode_int32(value: &Json) -> Result<i32> {
    narrow_integer("decode_int32", value)
}

/// Same as [`decode_int32`], reporting under its own name.
pub fn decode_rune(value: &Json) -> Result<i32> {
    narrow_integer("decode_rune", value)
}

/// Narrows to `int64`. Values rounding to 2^63 are out of range.
pub fn decode_int64(value: &Json) -> Result<i64> {
    narrow_integer("decode_int64", value)
}

/// Narrows to `uint` (`usize`).
pub fn decode_uint(value: &Json) -> Result<usize> {
    narrow_integer("decode_uint", value)
}

/// Narrows to `uint8`.
pub fn decode_uint8(value: &Json) -> Result<u8> {
    narrow_integer("decode_uint8", value)
}

/// Same as [`decode_uint8`], reporting under its own name.
pub fn decode_byte(value: &Json) -> Result<u8> {
    narrow_integer("decode_byte", value)
}

/// Narrows to `uint16`.
pub fn decode_uint16(value: &Json) -> Result<u16> {
    narrow_integer("decode_uint16", value)
}

/// Narrows to `uint32`.
pub fn decode_uint32(value: &Json) -> Result<u32> {
    narrow_integer("decode_uint32", value)
}

/// Narrows to `uint64`. Values rounding to 2^64 are out of range.
pub fn decode_uint64(value: &Json) -> Result<u64> {
    narrow_integer("decode_uint64", value)
}

// -------------------------------------------------------------------------------------------------
// Floats
// -------------------------------------------------------------------------------------------------

/// Accepts any number that rounds to a finite `f32`, rounding to the nearest one.
///
/// The shortest text of `f32::MAX` reads back as an `f64` slightly above it, so the
/// bound is checked after rounding rather than against `f64::from(f32::MAX)`.
pub fn decode_float32(value: &Json) -> Result<f32> {
    let f = require_number("decode_float32", value)?;
    let narrowed = f as f32;
    if narrowed.is_infinite() {
        return Err(Error::invalid_range(
            "decode_float32: requires float64 value in range of float32",
        ));
    }
    Ok(narrowed)
}

/// Accepts any JSON number.
pub fn decode_float64(value: &Json) -> Result<f64> {
    require_number("decode_float64", value)
}

// -------------------------------------------------------------------------------------------------
// Strings and parsed strings
// -------------------------------------------------------------------------------------------------

/// Accepts any JSON string.
pub fn decode_string(value: &Json) -> Result<String> {
    require_string("decode_string", value).map(str::to_string)
}

/// Accepts `true` or `false`.
pub fn decode_bool(value: &Json) -> Result<bool> {
    match value {
        Json::Bool(b) => Ok(*b),
        other => Err(Error::invalid_type(format!(
            "decode_bool: requires boolean value got {}",
            json_kind(other)
        ))),
    }
}

/// Parses an RFC 3339 timestamp, fractional seconds optional.
pub fn decode_time(value: &Json) -> Result<OffsetDateTime> {
    let text = require_string("decode_time", value)?;
    OffsetDateTime::parse(text, &Rfc3339).map_err(|_| {
        Error::invalid_format("decode_time: parsing RFC3339 string value to time.Time")
    })
}

/// Parses unit-suffixed duration text such as `"1h2m3.5s"`.
pub fn decode_duration(value: &Json) -> Result<Duration> {
    let text = require_string("decode_duration", value)?;
    parse_duration(text).ok_or_else(|| {
        Error::invalid_format("decode_duration: parsing string value to time.Duration")
    })
}

/// Parses `"(re+imi)"` text into a `complex64`; finite parts must fit in `f32`.
pub fn decode_complex64(value: &Json) -> Result<Complex<f32>> {
    let text = require_string("decode_complex64", value)?;
    // Explicit infinities and NaN are accepted; finite parts must fit in f32.
    let fits = |part: f64| !part.is_finite() || part.abs() <= f64::from(f32::MAX);
    parse_complex(text)
        .filter(|c| fits(c.re) && fits(c.im))
        .map(|c| Complex::new(c.re as f32, c.im as f32))
        .ok_or_else(|| {
            Error::invalid_format("decode_complex64: parsing string value to complex64")
        })
}

/// Parses `"(re+imi)"` text into a `complex128`.
pub fn decode_complex128(value: &Json) -> Result<Complex<f64>> {
    let text = require_string("decode_complex128", value)?;
    parse_complex(text).ok_or_else(|| {
        Error::invalid_format("decode_complex128: parsing string value to complex128")
    })
}

/// Accepts only JSON `null`.
pub fn decode_nil(value: &Json) -> Result<()> {
    if value.is_null() {
        Ok(())
    } else {
        Err(Error::invalid_type("decode_nil: requires nil value"))
    }
}

/// Every built-in type name paired with its decoder, in registration order.
pub(crate) fn builtins() -> Vec<(TypeName, crate::Decoder)> {
    use crate::adapters::decoder_fn;

    vec![
        (TypeName::INT, decoder_fn(decode_int)),
        (TypeName::INT8, decoder_fn(decode_int8)),
        (TypeName::INT16, decoder_fn(decode_int16)),
        (TypeName::INT32, decoder_fn(decode_int32)),
        (TypeName::RUNE, decoder_fn(decode_rune)),
        (TypeName::INT64, decoder_fn(decode_int64)),
        (TypeName::UINT, decoder_fn(decode_uint)),
        (TypeName::UINT8, decoder_fn(decode_uint8)),
        (TypeName::BYTE, decoder_fn(decode_byte)),
        (TypeName::UINT16, decoder_fn(decode_uint16)),
        (TypeName::UINT32, decoder_fn(decode_uint32)),
        (TypeName::UINT64, decoder_fn(decode_uint64)),
        (TypeName::FLOAT32, decoder_fn(decode_float32)),
        (TypeName::FLOAT64, decoder_fn(decode_float64)),
        (TypeName::STRING, decoder_fn(decode_string)),
        (TypeName::BOOL, decoder_fn(decode_bool)),
        (TypeName::TIME, decoder_fn(decode_time)),
        (TypeName::DURATION, decoder_fn(decode_duration)),
        (TypeName::COMPLEX64, decoder_fn(decode_complex64)),
        (TypeName::COMPLEX128, decoder_fn(decode_complex128)),
        (TypeName::NIL, decoder_fn(decode_nil)),
    ]
}
