//! Basic usage example for jsontype.
//!
//! Demonstrates:
//! - Encoding scalars as tagged JSON with `Value::new` and `to_json_string()`
//! - Decoding them back with `Value::from_json` (the type survives)
//! - How out-of-range and fractional numbers are rejected
//! - The map form via `to_map()` / `from_map()`
//!
//! Run with: `RUST_LOG=jsontype=trace cargo run --example basic_usage`

use jsontype::{Complex, Scalar, Value};
use time::macros::datetime;
use time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("=== jsontype: Basic Usage ===\n");

    // -------------------------------------------------------------------------
    // 1. Encode scalars
    // -------------------------------------------------------------------------
    println!("1. Encoding scalars...");

    let values = [
        Value::new(42u8),
        Value::new(-7i64),
        Value::new(2.5f32),
        Value::new("hello"),
        Value::new(true),
        Value::new(Duration::milliseconds(1500)),
        Value::new(datetime!(2024-05-01 12:00:00 UTC)),
        Value::new(Complex::new(1.0f64, -2.0)),
        Value::nil(),
    ];

    let mut encoded = Vec::new();
    for value in &values {
        match value.to_json_string() {
            Ok(json) => {
                println!("   {json}");
                encoded.push(json);
            }
            Err(err) => println!("   error: {err}"),
        }
    }

    // -------------------------------------------------------------------------
    // 2. Decode them back
    // -------------------------------------------------------------------------
    println!("\n2. Decoding...");

    for json in &encoded {
        match Value::from_json(json) {
            Ok(value) => println!("   {:<14} {:?}", value.type_name().to_string(), value.data()),
            Err(err) => println!("   error: {err}"),
        }
    }

    // -------------------------------------------------------------------------
    // 3. Rejected input
    // -------------------------------------------------------------------------
    println!("\n3. Rejected input...");

    for json in [
        r#"{"type":"uint8","value":99999}"#,
        r#"{"type":"int","value":1.5}"#,
        r#"{"type":"bool","value":"yes"}"#,
        r#"{"type":"bogus","value":1}"#,
    ] {
        if let Err(err) = Value::from_json(json) {
            println!("   {json}\n      -> {err} ({:?})", err.kind());
        }
    }

    // -------------------------------------------------------------------------
    // 4. Map form
    // -------------------------------------------------------------------------
    println!("\n4. Map form...");

    let map = Value::new(300u16).to_map();
    println!("   to_map:   {map:?}");
    match Value::from_map(&map) {
        Ok(value) => {
            assert_eq!(value.data(), &Scalar::UInt16(300));
            println!("   from_map: {value:?}");
        }
        Err(err) => println!("   error: {err}"),
    }

    println!("\n=== Example completed successfully! ===");
}
