//! Integration tests for registry isolation and multiple registries.
//!
//! Custom decoders registered in one registry must never be visible through another,
//! and every registry built with the built-ins decodes the standard type names.

use jsontype::{
    define_registry, number_decoder, string_decoder, ErrorKind, Options, Registry, Scalar, Value,
};
use std::sync::Arc;

#[test]
fn test_multiple_isolated_registries() {
    define_registry!(celsius);
    define_registry!(fahrenheit);

    celsius::register("temperature", number_decoder("decode_celsius", Ok));
    fahrenheit::register(
        "temperature",
        number_decoder("decode_fahrenheit", |f| Ok((f - 32.0) * 5.0 / 9.0)),
    );

    let json = r#"{"type":"temperature","value":212}"#;
    let c = celsius::from_json(json).unwrap();
    let f = fahrenheit::from_json(json).unwrap();

    assert_eq!(c.data(), &Scalar::Float64(212.0));
    assert_eq!(f.data(), &Scalar::Float64(100.0));
    assert!(!jsontype::Registry::global().contains("temperature"));
}

#[test]
fn test_builtins_available_in_every_registry() {
    define_registry!(first);
    define_registry!(second);

    for name in ["int", "uint8", "byte", "rune", "string", "time.Time", "nil"] {
        assert!(first::contains(name), "{name} missing in first");
        assert!(second::contains(name), "{name} missing in second");
    }
}

#[test]
fn test_unknown_in_one_registry_only() {
    define_registry!(shapes);

    shapes::register("shape", string_decoder("decode_shape", |s| Ok(s.to_string())));

    let json = r#"{"type":"shape","value":"circle"}"#;
    assert!(shapes::from_json(json).is_ok());

    let err = Value::from_json(json).unwrap_err();
    assert!(err.is(ErrorKind::UnknownType));
    assert_eq!(err.to_string(), "unknown type: shape");
}

#[test]
fn test_options_with_sandbox_registry() {
    let sandbox = Arc::new(Registry::with_builtins());
    sandbox.register("percent", number_decoder("decode_percent", |p| Ok(p / 100.0)));
    let opts = Options::default().with_registry(sandbox.clone());

    let value = Value::from_json_with(r#"{"type":"percent","value":50}"#, &opts).unwrap();
    assert_eq!(value.data(), &Scalar::Float64(0.5));
    assert_eq!(value.type_name(), "percent");

    assert!(Value::from_json(r#"{"type":"percent","value":50}"#).is_err());
}

#[test]
fn test_empty_registry_rejects_everything() {
    let opts = Options::default().with_registry(Arc::new(Registry::new()));

    let err = Value::from_json_with(r#"{"type":"int","value":1}"#, &opts).unwrap_err();
    assert!(err.is(ErrorKind::UnknownType));

    let err = Value::try_new_with(1i64, &opts).unwrap_err();
    assert!(err.is(ErrorKind::UnknownType));
    assert_eq!(err.to_string(), "unknown type: int64");
}

#[test]
fn test_override_builtin_in_isolated_registry() {
    define_registry!(lenient);

    // Rounds instead of rejecting fractions.
    let previous = lenient::register(
        "int64",
        number_decoder("decode_lenient_int64", |f| Ok(f.round() as i64)),
    );
    assert!(previous.is_some());

    let value = lenient::from_json(r#"{"type":"int64","value":2.6}"#).unwrap();
    assert_eq!(value.data(), &Scalar::Int64(3));

    let err = Value::from_json(r#"{"type":"int64","value":2.6}"#).unwrap_err();
    assert!(err.is(ErrorKind::InvalidValue));
}

#[test]
fn test_concurrent_access_across_registries() {
    use std::thread;

    define_registry!(concurrent_a);
    define_registry!(concurrent_b);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                for j in 0..50 {
                    let name = format!("custom_{i}_{j}");
                    concurrent_a::register(name.clone(), number_decoder("decode_custom", Ok));
                    assert!(concurrent_a::contains(&name));
                    assert!(!concurrent_b::contains(&name));
                    assert!(concurrent_b::from_json(r#"{"type":"int","value":1}"#).is_ok());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(concurrent_a::registry().len(), 21 + 4 * 50);
    assert_eq!(concurrent_b::registry().len(), 21);
}
