//! Adapters bridging differently-shaped conversion functions into [`Decoder`]s.

use std::sync::Arc;

use serde_json::Value as Json;

use crate::decoders::{require_number, require_string};
use crate::{Error, Result, Scalar};

/// Function decoding a generic JSON value into a typed [`Scalar`].
///
/// Decoders must not panic and must report every rejection as a classified
/// [`Error`].
pub type Decoder = Arc<dyn Fn(&Json) -> Result<Scalar> + Send + Sync + 'static>;

/// Wraps a function returning any `Into<Scalar>` type as a [`Decoder`].
///
/// Errors convert through `Into<Error>`; a [`serde_json::Error`] raised by the
/// function is reported as `InvalidFormat`, so decoder failures are always classified.
///
/// # Examples
///
/// ```
/// use jsontype::{decoder_fn, decoders::decode_uint8, Scalar};
/// use serde_json::json;
///
/// let decoder = decoder_fn(decode_uint8);
/// assert_eq!(decoder(&json!(42)).unwrap(), Scalar::UInt8(42));
/// ```
pub fn decoder_fn<T, E, F>(f: F) -> Decoder
where
    F: Fn(&Json) -> Result<T, E> + Send + Sync + 'static,
    T: Into<Scalar>,
    E: Into<Error>,
{
    Arc::new(move |value: &Json| f(value).map(Into::into).map_err(|err| classify(err.into())))
}

/// Reports JSON errors raised inside a decoder as `InvalidFormat`.
fn classify(err: Error) -> Error {
    match err {
        Error::Json(err) => Error::invalid_format(err.to_string()),
        err => err,
    }
}

/// Adapts a conversion from `f64` into a [`Decoder`] accepting JSON numbers.
///
/// Non-number input is rejected with `InvalidType` under `name` before `f` runs.
///
/// # Examples
///
/// ```
/// use jsontype::{number_decoder, Scalar};
/// use serde_json::json;
/// use time::Duration;
///
/// let seconds = number_decoder("decode_seconds", |secs| Ok(Duration::seconds_f64(secs)));
/// assert_eq!(seconds(&json!(42)).unwrap(), Scalar::Duration(Duration::seconds(42)));
/// ```
pub fn number_decoder<T, F>(name: &'static str, f: F) -> Decoder
where
    F: Fn(f64) -> Result<T> + Send + Sync + 'static,
    T: Into<Scalar>,
{
    Arc::new(move |value: &Json| f(require_number(name, value)?).map(Into::into))
}

/// Adapts a conversion from `&str` into a [`Decoder`] accepting JSON strings.
///
/// Non-string input is rejected with `InvalidType` under `name` before `f` runs.
pub fn string_decoder<T, F>(name: &'static str, f: F) -> Decoder
where
    F: Fn(&str) -> Result<T> + Send + Sync + 'static,
    T: Into<Scalar>,
{
    Arc::new(move |value: &Json| f(require_string(name, value)?).map(Into::into))
}
