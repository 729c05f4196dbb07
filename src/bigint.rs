//! Big-integer normalization for decoded API responses.
//!
//! The OpenFront API encodes counters and identifiers that can overflow a
//! 64-bit float (persistent ids, gold totals, conquest counts) as decimal
//! strings. This module upgrades those strings, opt-in per call, to exact
//! arbitrary-precision [`serde_json::Number`] values so callers can compare
//! them without rounding. Requires the `arbitrary_precision` feature of
//! `serde_json`, which this crate enables.

use serde_json::{Number, Value};

/// Recursively converts digit-only strings in `value` into arbitrary-precision
/// numbers.
///
/// Arrays are mapped element-wise preserving order and length; objects are
/// mapped value-wise preserving keys; booleans, numbers and null pass through
/// unchanged. A string converts only when it is non-empty and consists solely
/// of ASCII decimal digits, so `"abc"`, `"12.3"`, `"-5"` and `""` are left
/// alone. Leading zeros are dropped in conversion (`"0001"` becomes `1`).
/// Should a digit-only string still fail to parse, the original string is
/// kept rather than failing the call.
///
/// The function is total for well-formed JSON and idempotent: converted
/// numbers are no longer strings, so a second pass is a no-op.
#[must_use]
pub fn normalize(value: Value) -> Value {
    match value {
        Value::String(s) if is_decimal_digits(&s) => {
            // The JSON number grammar forbids leading zeros.
            let digits = match s.trim_start_matches('0') {
                "" => "0",
                trimmed => trimmed,
            };
            match serde_json::from_str::<Number>(digits) {
                Ok(n) => Value::Number(n),
                Err(_) => Value::String(s),
            }
        }
        Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        Value::Object(map) => Value::Object(map.into_iter().map(|(k, v)| (k, normalize(v))).collect()),
        other => other,
    }
}

fn is_decimal_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn digit_strings_convert_exactly() {
        // 9007199254740995 is not representable as an f64; plain float parsing
        // would round it to 9007199254740996.
        let normalized = normalize(json!("9007199254740995"));

        let expected: Number = serde_json::from_str("9007199254740995").expect("number parse");
        assert_eq!(normalized, Value::Number(expected));
    }

    #[test]
    fn oversized_integers_keep_all_digits() {
        let digits = "123456789012345678901234567890";
        let normalized = normalize(json!(digits));

        match normalized {
            Value::Number(n) => assert_eq!(n.to_string(), digits),
            other => panic!("expected number, got {other:?}"),
        }
    }

    #[test]
    fn non_digit_strings_are_unchanged() {
        for s in ["abc", "12.3", "-5", "", "1e5", " 42", "42 "] {
            assert_eq!(normalize(json!(s)), json!(s), "string {s:?} must not convert");
        }
    }

    #[test]
    fn other_scalars_pass_through() {
        assert_eq!(normalize(json!(true)), json!(true));
        assert_eq!(normalize(json!(null)), json!(null));
        assert_eq!(normalize(json!(42)), json!(42));
        assert_eq!(normalize(json!(1.5)), json!(1.5));
    }

    #[test]
    fn nested_shapes_are_preserved() {
        let input = json!({
            "id": "123",
            "name": "abc",
            "stats": {
                "gold": ["1", "2", "x"],
                "flags": [true, null]
            }
        });

        let normalized = normalize(input);

        assert_eq!(
            normalized,
            json!({
                "id": 123,
                "name": "abc",
                "stats": {
                    "gold": [1, 2, "x"],
                    "flags": [true, null]
                }
            })
        );
    }

    #[test]
    fn arrays_preserve_order_and_length() {
        let normalized = normalize(json!(["3", "1", "abc", "2"]));
        assert_eq!(normalized, json!([3, 1, "abc", 2]));
    }

    #[test]
    fn normalize_is_idempotent() {
        let input = json!({
            "a": "9007199254740995",
            "b": ["7", {"c": "0001"}],
            "d": "not a number"
        });

        let once = normalize(input);
        let twice = normalize(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn leading_zeros_are_dropped() {
        assert_eq!(normalize(json!("0001")), json!(1));
        assert_eq!(normalize(json!("000")), json!(0));
        assert_eq!(normalize(json!("0")), json!(0));
    }
}
