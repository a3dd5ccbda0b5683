//! # jsontype
//!
//! Type-preserving JSON encoding for scalar values.
//!
//! A [`Value`] pairs a [`Scalar`] with the name of its type and serializes as
//! `{"type": <name>, "value": <json>}`. Decoding looks the name up in a thread-safe
//! [`Registry`] and runs the registered decoder, which narrows the generic JSON value
//! back into the original type or rejects it with a classified [`Error`].
//!
//! ## Quick Start
//!
//! ```rust
//! use jsontype::{Scalar, Value};
//!
//! // Encode
//! let json = Value::new(42u8).to_json_string().unwrap();
//! assert_eq!(json, r#"{"type":"uint8","value":42}"#);
//!
//! // Decode
//! let value = Value::from_json(json).unwrap();
//! assert_eq!(value.data(), &Scalar::UInt8(42));
//!
//! // Values that do not fit are rejected rather than truncated
//! let err = Value::from_json(r#"{"type":"uint8","value":99999}"#).unwrap_err();
//! assert!(err.is(jsontype::ErrorKind::InvalidRange));
//! ```
//!
//! ## Features
//!
//! - **Lossless**: numbers are narrowed only when exact and in range
//! - **Extensible**: register custom decoders globally or in isolated registries
//! - **Thread-safe**: registries allow concurrent lookups alongside registration
//! - **Tracing support**: per-registry callbacks plus `tracing` events
//!
//! ## Main Items
//!
//! - [`Value`] - the tagged value, with JSON and map forms
//! - [`Registry`] - type name to decoder mapping; [`Registry::global`] holds the built-ins
//! - [`register`] / [`decoder`] - register and look up decoders in the global registry
//! - [`decoder_fn`], [`number_decoder`], [`string_decoder`] - build decoders from functions
//! - [`define_registry!`] - module-scoped isolated registries

mod adapters;
mod complex;
pub mod decoders;
mod duration;
mod error;
mod macros;
mod options;
mod registry;
mod registry_event;
mod scalar;
mod type_name;
mod value;

// Re-export the main public API
pub use adapters::{decoder_fn, number_decoder, string_decoder, Decoder};
pub use complex::{parse_complex, Complex};
pub use duration::{format_duration, parse_duration};
pub use error::{Error, ErrorKind, Result};
pub use options::Options;
pub use registry::{Registry, TraceCallback};
pub use registry_event::RegistryEvent;
pub use scalar::Scalar;
pub use type_name::TypeName;
pub use value::{Value, ValueMap};

/// Registers `decoder` under `name` in the global registry, returning the decoder it
/// replaced. Passing `None` is a no-op.
///
/// # Examples
///
/// ```
/// use jsontype::{number_decoder, Value, Scalar};
/// use time::Duration;
///
/// jsontype::register("seconds", number_decoder("decode_seconds", |s| Ok(Duration::seconds_f64(s))));
///
/// let value = Value::from_json(r#"{"type": "seconds", "value": 42}"#).unwrap();
/// assert_eq!(value.data(), &Scalar::Duration(Duration::seconds(42)));
/// ```
pub fn register(name: impl Into<TypeName>, decoder: impl Into<Option<Decoder>>) -> Option<Decoder> {
    Registry::global().register(name, decoder)
}

/// Returns the decoder registered under `name` in the global registry.
pub fn decoder(name: &str) -> Option<Decoder> {
    Registry::global().decoder(name)
}
