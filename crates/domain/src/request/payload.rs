//! Form payload encoding
//!
//! Payloads reach the transport as loosely-typed JSON objects and are
//! flattened into `application/x-www-form-urlencoded` pairs:
//!
//! | value                     | pairs                   |
//! |---------------------------|-------------------------|
//! | scalar                    | `key=value`             |
//! | array of scalars          | `key[]=value` per item  |
//! | array of objects          | `key[i][k]=value`       |
//! | object                    | `key[k]=value`          |
//! | `null` at the top level   | nothing                 |
//!
//! Below the first bracket level values are rendered as text: arrays join
//! their items with `,` (a `null` item becomes empty) and objects become
//! `[object Object]`. The same flattening is used for query strings.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};

/// A request payload: a JSON object keyed by field name.
pub type Payload = Map<String, Value>;

/// Converts any serializable value into a [`Payload`].
///
/// `None`/unit values become an empty payload.
///
/// # Errors
/// Returns `DomainError::InvalidPayload` if the value does not serialize to
/// a JSON object.
pub fn to_payload<T: Serialize + ?Sized>(value: &T) -> DomainResult<Payload> {
    let value =
        serde_json::to_value(value).map_err(|e| DomainError::InvalidPayload(e.to_string()))?;
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Payload::new()),
        other => Err(DomainError::InvalidPayload(format!(
            "expected an object, got {}",
            kind(&other)
        ))),
    }
}

/// Flattens a payload into ordered key/value pairs.
#[must_use]
pub fn flatten(payload: &Payload) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in payload {
        flatten_value(key, value, &mut pairs);
    }
    pairs
}

/// Encodes a payload as an `application/x-www-form-urlencoded` string.
///
/// # Errors
/// Returns `DomainError::InvalidPayload` if the pairs cannot be encoded.
pub fn encode_form(payload: &Payload) -> DomainResult<String> {
    serde_urlencoded::to_string(flatten(payload))
        .map_err(|e| DomainError::InvalidPayload(e.to_string()))
}

fn flatten_value(key: &str, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                match item {
                    Value::Null => {}
                    Value::Object(_) | Value::Array(_) => {
                        push_entries(&format!("{key}[{index}]"), item, pairs);
                    }
                    scalar => pairs.push((format!("{key}[]"), stringify(scalar))),
                }
            }
        }
        Value::Object(_) => push_entries(key, value, pairs),
        scalar => pairs.push((key.to_string(), stringify(scalar))),
    }
}

/// Emits `prefix[k]=value` for each entry of an object or array.
fn push_entries(prefix: &str, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Object(entries) => {
            for (k, v) in entries {
                pairs.push((format!("{prefix}[{k}]"), stringify(v)));
            }
        }
        Value::Array(items) => {
            for (i, v) in items.iter().enumerate() {
                pairs.push((format!("{prefix}[{i}]"), stringify(v)));
            }
        }
        scalar => pairs.push((prefix.to_string(), stringify(scalar))),
    }
}

/// Text form of a value nested below the first bracket level.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| if item.is_null() { String::new() } else { stringify(item) })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        to_payload(&value).unwrap()
    }

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    fn sorted(mut pairs: Vec<(String, String)>) -> Vec<(String, String)> {
        pairs.sort();
        pairs
    }

    #[test]
    fn test_scalars_produce_one_pair_each() {
        let pairs = flatten(&payload(json!({
            "name": "web-1",
            "cpu": 2,
            "ratio": 0.5,
            "proxied": true,
        })));

        assert_eq!(
            sorted(pairs),
            vec![
                pair("cpu", "2"),
                pair("name", "web-1"),
                pair("proxied", "true"),
                pair("ratio", "0.5"),
            ]
        );
    }

    #[test]
    fn test_null_top_level_values_are_skipped() {
        let pairs = flatten(&payload(json!({"a": 1, "b": null})));
        assert_eq!(pairs, vec![pair("a", "1")]);
    }

    #[test]
    fn test_array_of_scalars_repeats_key() {
        let pairs = flatten(&payload(json!({"nameservers": ["ns1.example.com", "ns2.example.com"]})));
        assert_eq!(
            pairs,
            vec![
                pair("nameservers[]", "ns1.example.com"),
                pair("nameservers[]", "ns2.example.com"),
            ]
        );
    }

    #[test]
    fn test_array_of_objects_is_indexed() {
        let pairs = flatten(&payload(json!({"k": [{"x": 1}, {"y": 2}]})));
        assert_eq!(pairs, vec![pair("k[0][x]", "1"), pair("k[1][y]", "2")]);
    }

    #[test]
    fn test_nested_object_uses_brackets() {
        let pairs = flatten(&payload(json!({"k": {"a": 1, "b": 2}})));
        assert_eq!(sorted(pairs), vec![pair("k[a]", "1"), pair("k[b]", "2")]);
    }

    #[test]
    fn test_nested_values_are_stringified() {
        let pairs = flatten(&payload(json!({
            "health_check": {
                "enabled": false,
                "path": null,
                "expected_codes": [200, 204],
                "names": ["a", null, "b"],
                "auth": {"user": "u"},
            },
        })));
        assert_eq!(
            sorted(pairs),
            vec![
                pair("health_check[auth]", "[object Object]"),
                pair("health_check[enabled]", "false"),
                pair("health_check[expected_codes]", "200,204"),
                pair("health_check[names]", "a,,b"),
                pair("health_check[path]", "null"),
            ]
        );
    }

    #[test]
    fn test_deep_values_in_array_of_objects() {
        let pairs = flatten(&payload(json!({
            "rules": [{"ports": [80, 443], "meta": {"x": 1}}],
        })));
        assert_eq!(
            sorted(pairs),
            vec![
                pair("rules[0][meta]", "[object Object]"),
                pair("rules[0][ports]", "80,443"),
            ]
        );
    }

    #[test]
    fn test_null_array_items_are_skipped() {
        let pairs = flatten(&payload(json!({"tags": ["a", null, "b"]})));
        assert_eq!(pairs, vec![pair("tags[]", "a"), pair("tags[]", "b")]);
    }

    #[test]
    fn test_encode_form_percent_encodes() {
        let encoded = encode_form(&payload(json!({"urls": ["https://a.io/x y"]}))).unwrap();
        assert_eq!(encoded, "urls%5B%5D=https%3A%2F%2Fa.io%2Fx+y");
    }

    #[test]
    fn test_to_payload_from_struct() {
        #[derive(Serialize)]
        struct Rename<'a> {
            name: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            note: Option<&'a str>,
        }

        let payload = to_payload(&Rename { name: "db", note: None }).unwrap();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload.get("name"), Some(&json!("db")));
    }

    #[test]
    fn test_to_payload_rejects_non_objects() {
        assert!(matches!(
            to_payload(&json!([1, 2])),
            Err(DomainError::InvalidPayload(_))
        ));
        assert!(to_payload(&json!(null)).unwrap().is_empty());
    }
}
