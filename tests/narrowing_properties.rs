//! Property tests for numeric narrowing.
//!
//! A built-in integer decoder must accept exactly the integral numbers its target can
//! represent and classify everything else as a range or fraction failure.

use jsontype::{decoders, ErrorKind, Scalar, Value};
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #[test]
    fn prop_int8_accepts_exactly_its_range(n in -1000i64..1000) {
        let result = decoders::decode_int8(&json!(n));
        if (i64::from(i8::MIN)..=i64::from(i8::MAX)).contains(&n) {
            prop_assert_eq!(result.unwrap(), n as i8);
        } else {
            prop_assert!(result.unwrap_err().is(ErrorKind::InvalidRange));
        }
    }

    #[test]
    fn prop_uint16_accepts_exactly_its_range(n in -100_000i64..200_000) {
        let result = decoders::decode_uint16(&json!(n));
        if (0..=i64::from(u16::MAX)).contains(&n) {
            prop_assert_eq!(result.unwrap(), n as u16);
        } else {
            prop_assert!(result.unwrap_err().is(ErrorKind::InvalidRange));
        }
    }

    #[test]
    fn prop_int32_round_trips(n in any::<i32>()) {
        let json = Value::new(n).to_json().unwrap();
        let back = Value::from_json(json).unwrap();
        prop_assert_eq!(back.data(), &Scalar::Int32(n));
    }

    #[test]
    fn prop_uint32_round_trips(n in any::<u32>()) {
        let json = Value::new(n).to_json().unwrap();
        let back = Value::from_json(json).unwrap();
        prop_assert_eq!(back.data(), &Scalar::UInt32(n));
    }

    #[test]
    fn prop_fractions_rejected(whole in -1000i32..1000, frac in 0.01f64..0.99) {
        let value = f64::from(whole) + frac;
        let err = decoders::decode_int64(&json!(value)).unwrap_err();
        prop_assert!(err.is(ErrorKind::InvalidValue));
    }

    #[test]
    fn prop_float64_round_trips(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let json = Value::new(f).to_json().unwrap();
        let back = Value::from_json(json).unwrap();
        prop_assert_eq!(back.data(), &Scalar::Float64(f));
    }

    #[test]
    fn prop_float32_round_trips(f in any::<f32>().prop_filter("finite", |f| f.is_finite())) {
        let json = Value::new(f).to_json().unwrap();
        let back = Value::from_json(json).unwrap();
        prop_assert_eq!(back.data(), &Scalar::Float32(f));
    }

    #[test]
    fn prop_duration_round_trips(nanos in any::<i64>()) {
        let duration = time::Duration::nanoseconds(nanos);
        let json = Value::new(duration).to_json().unwrap();
        let back = Value::from_json(json).unwrap();
        prop_assert_eq!(back.data(), &Scalar::Duration(duration));
    }
}

#[test]
fn test_integer_boundaries() {
    assert_eq!(decoders::decode_int8(&json!(-128)).unwrap(), i8::MIN);
    assert_eq!(decoders::decode_int8(&json!(127)).unwrap(), i8::MAX);
    assert!(decoders::decode_int8(&json!(128)).is_err());
    assert!(decoders::decode_int8(&json!(-129)).is_err());

    assert_eq!(decoders::decode_uint8(&json!(0)).unwrap(), 0);
    assert!(decoders::decode_uint8(&json!(-1)).unwrap_err().is(ErrorKind::InvalidRange));

    assert_eq!(decoders::decode_uint32(&json!(4294967295u64)).unwrap(), u32::MAX);
    assert!(decoders::decode_uint32(&json!(4294967296u64)).is_err());

    // 2^63 is the first float64 beyond int64.
    assert_eq!(decoders::decode_int64(&json!(-9223372036854775808i64)).unwrap(), i64::MIN);
    assert!(decoders::decode_int64(&json!(9223372036854775808u64))
        .unwrap_err()
        .is(ErrorKind::InvalidRange));
}

#[test]
fn test_float32_boundaries() {
    let max = f64::from(f32::MAX);
    assert_eq!(decoders::decode_float32(&json!(max)).unwrap(), f32::MAX);
    assert_eq!(decoders::decode_float32(&json!(-max)).unwrap(), f32::MIN);
    assert!(decoders::decode_float32(&json!(max * 2.0))
        .unwrap_err()
        .is(ErrorKind::InvalidRange));
    assert!(decoders::decode_float32(&json!(-max * 2.0))
        .unwrap_err()
        .is(ErrorKind::InvalidRange));
}
