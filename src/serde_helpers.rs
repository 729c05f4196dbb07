//! Serde helpers for flexible deserialization.
//!
//! The OpenFront API has gone through several revisions that changed field
//! types in place (ids flipping between strings and numbers, fields appearing
//! and disappearing). [`StringFromAny`] absorbs the scalar drift; with the
//! `tracing` feature enabled, [`deserialize_with_warnings`] reports unknown
//! response fields so shape changes are noticed instead of silently dropped.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// A `serde_as` type that deserializes strings or integers as `String`.
///
/// Use with `#[serde_as(as = "StringFromAny")]` for `String` fields
/// or `#[serde_as(as = "Option<StringFromAny>")]` for `Option<String>`.
///
/// Identifiers in API responses are nominally strings but decode as numbers
/// when a digit-only id went through big-integer normalization, or when an
/// older server revision emitted them numerically.
pub struct StringFromAny;

impl<'de> serde_with::DeserializeAs<'de, String> for StringFromAny {
    fn deserialize_as<D>(deserializer: D) -> std::result::Result<String, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use std::fmt;

        use serde::de::{self, Visitor};

        struct StringOrNumberVisitor;

        impl Visitor<'_> for StringOrNumberVisitor {
            type Value = String;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("string or integer")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_owned())
            }

            fn visit_string<E>(self, v: String) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v)
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_string())
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_string())
            }
        }

        deserializer.deserialize_any(StringOrNumberVisitor)
    }
}

impl serde_with::SerializeAs<String> for StringFromAny {
    fn serialize_as<S>(source: &String, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(source)
    }
}

/// Deserialize JSON with unknown field warnings.
///
/// Deserializes `value` into the target type while detecting fields the type
/// definition does not capture. Unknown fields trigger warnings but do not
/// fail deserialization; an actual type mismatch is logged with its JSON path
/// and surfaced as an error.
#[cfg(feature = "tracing")]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    use std::any::type_name;

    tracing::trace!(
        type_name = %type_name::<T>(),
        json = %value,
        "deserializing JSON"
    );

    // Clone the value so we can look up unknown field values later
    let original = value.clone();

    let mut unknown_paths: Vec<String> = Vec::new();

    let result: T = serde_ignored::deserialize(value, |path| {
        unknown_paths.push(path.to_string());
    })
    .inspect_err(|_| {
        // Re-deserialize with serde_path_to_error to get the error path
        let json_str = original.to_string();
        let jd = &mut serde_json::Deserializer::from_str(&json_str);
        let path_result: Result<T, _> = serde_path_to_error::deserialize(jd);
        if let Err(path_err) = path_result {
            let path = path_err.path().to_string();
            let inner_error = path_err.inner();
            let value_display = format_value(lookup_value(&original, &path));

            tracing::error!(
                type_name = %type_name::<T>(),
                path = %path,
                value = %value_display,
                error = %inner_error,
                "deserialization failed"
            );
        }
    })?;

    if !unknown_paths.is_empty() {
        let type_name = type_name::<T>();
        for path in unknown_paths {
            let value_display = format_value(lookup_value(&original, &path));

            tracing::warn!(
                type_name = %type_name,
                field = %path,
                value = %value_display,
                "unknown field in API response"
            );
        }
    }

    Ok(result)
}

/// Pass-through deserialization when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// Look up a value in a JSON structure by path.
///
/// Handles the path notations of both `serde_ignored` and
/// `serde_path_to_error`: `?` markers for Option wrappers are skipped, array
/// indices appear as `items.0` or `items[0]`, object fields as `foo.bar`.
/// Returns `None` when the path does not exist or traverses a scalar.
#[cfg(feature = "tracing")]
fn lookup_value<'value>(value: &'value Value, path: &str) -> Option<&'value Value> {
    let mut current = value;

    for segment in path
        .split(['.', '['])
        .map(|s| s.trim_end_matches(']'))
        .filter(|s| !s.is_empty() && *s != "?")
    {
        match current {
            Value::Object(map) => {
                current = map.get(segment)?;
            }
            Value::Array(arr) => {
                let index: usize = segment.parse().ok()?;
                current = arr.get(index)?;
            }
            _ => return None,
        }
    }

    Some(current)
}

/// Format a JSON value for logging.
#[cfg(feature = "tracing")]
fn format_value(value: Option<&Value>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "<unable to retrieve>".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::deserialize_with_warnings;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestRecord {
        tag: String,
        #[serde(default)]
        score: Option<i32>,
    }

    #[test]
    fn deserialize_known_fields_only() {
        let json = json!({ "tag": "UN", "score": 42 });

        let result: TestRecord = deserialize_with_warnings(json).expect("deserialization failed");
        assert_eq!(result.tag, "UN");
        assert_eq!(result.score, Some(42));
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let json = json!({
            "tag": "UN",
            "introduced_next_week": "surprise",
            "another_unknown": 123
        });

        let result: TestRecord = deserialize_with_warnings(json).expect("deserialization failed");
        assert_eq!(result.tag, "UN");
        assert_eq!(result.score, None);
    }

    #[test]
    fn missing_required_field_fails() {
        let json = json!({ "score": 42 });

        let result: crate::Result<TestRecord> = deserialize_with_warnings(json);
        result.expect_err("tag is required");
    }

    #[test]
    fn arrays_deserialize_directly() {
        let json = json!([1, 2, 3]);

        let result: Vec<i32> = deserialize_with_warnings(json).expect("deserialization failed");
        assert_eq!(result, vec![1, 2, 3]);
    }

    mod string_from_any {
        use serde::Deserialize;
        use serde_json::json;

        use super::super::StringFromAny;

        #[derive(Debug, Deserialize, PartialEq, serde::Serialize)]
        struct Id {
            #[serde(with = "serde_with::As::<StringFromAny>")]
            id: String,
        }

        #[derive(Debug, Deserialize, PartialEq, serde::Serialize)]
        struct OptionalId {
            #[serde(with = "serde_with::As::<Option<StringFromAny>>")]
            id: Option<String>,
        }

        #[test]
        fn accepts_strings() {
            let result: Id = serde_json::from_value(json!({ "id": "HabCsQYR" })).expect("decode");
            assert_eq!(result.id, "HabCsQYR");
        }

        #[test]
        fn accepts_integers() {
            let result: Id = serde_json::from_value(json!({ "id": 12_345 })).expect("decode");
            assert_eq!(result.id, "12345");
        }

        #[test]
        fn accepts_large_u64() {
            let result: Id = serde_json::from_value(json!({ "id": u64::MAX })).expect("decode");
            assert_eq!(result.id, u64::MAX.to_string());
        }

        #[test]
        fn serializes_back_to_string() {
            let obj = Id {
                id: "12345".to_owned(),
            };
            let json = serde_json::to_value(&obj).expect("serialize");
            assert_eq!(json, json!({ "id": "12345" }));
        }

        #[test]
        fn optional_null_is_none() {
            let result: OptionalId = serde_json::from_value(json!({ "id": null })).expect("decode");
            assert_eq!(result.id, None);
        }

        #[test]
        fn optional_integer_is_some() {
            let result: OptionalId = serde_json::from_value(json!({ "id": 7 })).expect("decode");
            assert_eq!(result.id, Some("7".to_owned()));
        }
    }

    #[cfg(feature = "tracing")]
    mod lookup {
        use serde_json::{Value, json};

        use super::super::{format_value, lookup_value};

        #[test]
        fn lookup_nested_path() {
            let json = json!({ "outer": { "inner": "value" } });

            let result = lookup_value(&json, "outer.inner");
            assert_eq!(result, Some(&Value::String("value".to_owned())));
        }

        #[test]
        fn lookup_array_index_both_notations() {
            let json = json!({ "items": ["a", "b", "c"] });

            assert_eq!(
                lookup_value(&json, "items.1"),
                Some(&Value::String("b".to_owned()))
            );
            assert_eq!(
                lookup_value(&json, "items[2]"),
                Some(&Value::String("c".to_owned()))
            );
        }

        #[test]
        fn lookup_option_marker_skipped() {
            let json = json!({ "outer": { "inner": "value" } });

            let result = lookup_value(&json, "?.outer.?.inner");
            assert_eq!(result, Some(&Value::String("value".to_owned())));
        }

        #[test]
        fn lookup_missing_or_scalar_paths_return_none() {
            let json = json!({ "foo": "bar", "items": [1] });

            assert_eq!(lookup_value(&json, "foo.baz"), None);
            assert_eq!(lookup_value(&json, "items.7"), None);
            assert_eq!(lookup_value(&json, "items.abc"), None);
        }

        #[test]
        fn lookup_empty_path_returns_root() {
            let json = json!({ "foo": "bar" });
            assert_eq!(lookup_value(&json, ""), Some(&json));
        }

        #[test]
        fn format_none_shows_placeholder() {
            assert_eq!(format_value(None), "<unable to retrieve>");
        }
    }

    /// Captures tracing output to prove unknown-field warnings are emitted.
    #[cfg(feature = "tracing")]
    #[test]
    fn warning_is_emitted_for_unknown_fields() {
        use std::sync::{Arc, Mutex};

        use tracing_subscriber::layer::SubscriberExt as _;

        let warnings: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let warnings_clone = Arc::clone(&warnings);

        let layer = tracing_subscriber::fmt::layer()
            .with_writer(move || {
                struct CaptureWriter(Arc<Mutex<Vec<String>>>);
                impl std::io::Write for CaptureWriter {
                    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                        if let Ok(s) = std::str::from_utf8(buf) {
                            self.0.lock().expect("lock").push(s.to_owned());
                        }
                        Ok(buf.len())
                    }
                    fn flush(&mut self) -> std::io::Result<()> {
                        Ok(())
                    }
                }
                CaptureWriter(Arc::clone(&warnings_clone))
            })
            .with_ansi(false);

        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            let json = json!({
                "tag": "UN",
                "introduced_next_week": "surprise"
            });

            let result: TestRecord =
                deserialize_with_warnings(json).expect("deserialization should succeed");
            assert_eq!(result.tag, "UN");
        });

        let captured = warnings.lock().expect("lock");
        let all_output = captured.join("");

        assert!(
            all_output.contains("unknown field"),
            "Expected 'unknown field' in output, got: {all_output}"
        );
        assert!(
            all_output.contains("introduced_next_week"),
            "Expected 'introduced_next_week' in output, got: {all_output}"
        );
    }
}
