//! Custom decoder example for jsontype.
//!
//! Demonstrates:
//! - Registering a decoder for a new type name in the global registry
//! - Keeping custom decoders out of the global registry with `define_registry!`
//! - Watching registry activity with a trace callback
//!
//! Run with: `cargo run --example custom_decoder`

use jsontype::{define_registry, number_decoder, string_decoder, Error, Value};
use time::Duration;
use tracing_subscriber::EnvFilter;

// Create an isolated registry for this example
define_registry!(units);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("=== jsontype: Custom Decoders ===\n");

    // -------------------------------------------------------------------------
    // 1. Global registration
    // -------------------------------------------------------------------------
    println!("1. Registering \"seconds\" globally...");

    jsontype::register(
        "seconds",
        number_decoder("decode_seconds", |s| Ok(Duration::seconds_f64(s))),
    );

    match Value::from_json(r#"{"type": "seconds", "value": 42}"#) {
        Ok(value) => println!("   decoded: {:?}", value.data()),
        Err(err) => println!("   error: {err}"),
    }

    // -------------------------------------------------------------------------
    // 2. Isolated registry
    // -------------------------------------------------------------------------
    println!("\n2. Registering \"version\" in the units registry only...");

    units::set_trace_callback(|event| println!("   [trace] {event}"));

    units::register(
        "version",
        string_decoder("decode_version", |s| {
            let parts: Vec<&str> = s.split('.').collect();
            if parts.len() != 3 || parts.iter().any(|p| p.parse::<u32>().is_err()) {
                return Err(Error::invalid_format("decode_version: expected major.minor.patch"));
            }
            Ok(s.to_string())
        }),
    );

    let json = r#"{"type": "version", "value": "1.4.2"}"#;
    match units::from_json(json) {
        Ok(value) => println!("   units:  {:?}", value.data()),
        Err(err) => println!("   error: {err}"),
    }
    match Value::from_json(json) {
        Ok(value) => println!("   global: {:?}", value.data()),
        Err(err) => println!("   global: {err}"),
    }

    if let Err(err) = units::from_json(r#"{"type": "version", "value": "1.4"}"#) {
        println!("   bad version: {err}");
    }

    units::clear_trace_callback();

    println!("\n=== Example completed successfully! ===");
}
