//! Integration tests for registering custom decoders.
//!
//! Shows the three ways of building a decoder: wrapping a plain function with
//! `decoder_fn`, and the `number_decoder` / `string_decoder` adapters that check the
//! JSON kind before the conversion runs.
//!
//! NOTE: Tests registering into the global registry use distinct type names so they
//! can run in parallel with everything else.

use jsontype::{
    decoder_fn, decoders, number_decoder, string_decoder, Error, ErrorKind, Registry, Result,
    Scalar, Value,
};
use serde_json::{json, Value as Json};
use std::sync::Arc;
use time::Duration;

#[test]
fn test_seconds_decoder_in_global_registry() {
    jsontype::register(
        "custom_seconds",
        number_decoder("decode_seconds", |s| Ok(Duration::seconds_f64(s))),
    );

    let value = Value::from_json(r#"{"type": "custom_seconds", "value": 42}"#).unwrap();
    assert_eq!(value.type_name(), "custom_seconds");
    assert_eq!(value.data(), &Scalar::Duration(Duration::seconds(42)));
    assert!(jsontype::decoder("custom_seconds").is_some());
}

#[test]
fn test_number_decoder_rejects_other_kinds() {
    let registry = Registry::new();
    registry.register("seconds", number_decoder("decode_seconds", |s| Ok(Duration::seconds_f64(s))));

    let err = registry.decode("seconds", &json!("42")).unwrap_err();
    assert!(err.is(ErrorKind::InvalidType));
    assert_eq!(
        err.to_string(),
        "decode_seconds: requires float64 value got string: invalid type"
    );
}

#[test]
fn test_string_decoder_with_own_errors() {
    let registry = Registry::new();
    registry.register(
        "hex_color",
        string_decoder("decode_hex_color", |s| {
            let digits = s
                .strip_prefix('#')
                .filter(|d| d.len() == 6)
                .ok_or_else(|| Error::invalid_format("decode_hex_color: expected #rrggbb"))?;
            u32::from_str_radix(digits, 16)
                .map_err(|_| Error::invalid_format("decode_hex_color: bad digits"))
        }),
    );

    assert_eq!(registry.decode("hex_color", &json!("#ff8000")).unwrap(), Scalar::UInt32(0xff8000));

    let err = registry.decode("hex_color", &json!("ff8000")).unwrap_err();
    assert!(err.is(ErrorKind::InvalidFormat));
    assert_eq!(err.to_string(), "decode_hex_color: expected #rrggbb: invalid format");
}

#[test]
fn test_decoder_fn_with_plain_function() {
    fn decode_percent(value: &Json) -> Result<f64> {
        let whole = decoders::narrow_integer::<u8>("decode_percent", value)?;
        if whole > 100 {
            return Err(Error::invalid_range("decode_percent: above 100"));
        }
        Ok(f64::from(whole) / 100.0)
    }

    let registry = Arc::new(Registry::new());
    registry.register("percent", decoder_fn(decode_percent));
    let opts = jsontype::Options::default().with_registry(registry);

    let value = Value::from_json_with(r#"{"type":"percent","value":25}"#, &opts).unwrap();
    assert_eq!(value.data(), &Scalar::Float64(0.25));

    let err = Value::from_json_with(r#"{"type":"percent","value":101}"#, &opts).unwrap_err();
    assert!(err.is(ErrorKind::InvalidRange));
    assert_eq!(err.to_string(), "jsontype: decode_percent: above 100: invalid range");
}

#[test]
fn test_decoder_fn_with_foreign_error() {
    let registry = Registry::new();
    registry.register(
        "embedded",
        decoder_fn(|value: &Json| -> std::result::Result<String, serde_json::Error> {
            let text = value.as_str().unwrap_or_default();
            let inner: Json = serde_json::from_str(text)?;
            Ok(inner.to_string())
        }),
    );

    let ok = registry.decode("embedded", &json!("[1, 2]")).unwrap();
    assert_eq!(ok, Scalar::String("[1,2]".into()));

    let err = registry.decode("embedded", &json!("[1,")).unwrap_err();
    assert!(err.is(ErrorKind::InvalidFormat));
}

#[test]
fn test_builtin_decoders_reusable() {
    let registry = Registry::new();
    registry.register("port", decoder_fn(decoders::decode_uint16));

    assert_eq!(registry.decode("port", &json!(8080)).unwrap(), Scalar::UInt16(8080));
    let err = registry.decode("port", &json!(70000)).unwrap_err();
    assert!(err.is(ErrorKind::InvalidRange));
}

#[test]
fn test_custom_type_requires_matching_builtin_for_try_new() {
    let registry = Arc::new(Registry::new());
    registry.register("port", decoder_fn(decoders::decode_uint16));
    let opts = jsontype::Options::default().with_registry(registry);

    // try_new checks the data's own type name, not the custom alias.
    let err = Value::try_new_with(8080u16, &opts).unwrap_err();
    assert!(err.is(ErrorKind::UnknownType));
    assert_eq!(err.to_string(), "unknown type: uint16");
}

#[test]
fn test_custom_type_map_round_trip() {
    let registry = Arc::new(Registry::with_builtins());
    registry.register(
        "seconds",
        number_decoder("decode_seconds", |s| Ok(Duration::seconds_f64(s))),
    );
    let opts = jsontype::Options::default().with_registry(registry);

    let value = Value::from_json_with(r#"{"type":"seconds","value":42}"#, &opts).unwrap();
    let map = value.to_map();
    assert_eq!(map["type"], Scalar::from("seconds"));

    let back = Value::from_map_with(&map, &opts).unwrap();
    assert_eq!(back, value);
    assert_eq!(back.to_map(), map);

    // Same tag, data the decoder never produces.
    let mut wrong = map.clone();
    wrong.insert("value".to_string(), Scalar::Bool(true));
    let err = Value::from_map_with(&wrong, &opts).unwrap_err();
    assert!(err.is(ErrorKind::InvalidValue));
}
