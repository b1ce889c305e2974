/// Conversion between JSON documents and Bencode values.
///
/// JSON has kinds Bencode cannot express (floats, booleans, null); those
/// are rejected with the JSON path of the offending node rather than
/// coerced. Going the other way, byte strings that are not UTF-8, and
/// UTF-8 strings that already start with `0x`, become `"0x<hex>"`
/// strings. Distinct byte strings therefore never share a JSON string, but
/// the reverse trip is not guaranteed to reproduce the original bytes.
use std::collections::BTreeMap;
use std::fmt::Write as _;

use anyhow::{Result, bail};
use bencode_types::{ByteString, Value};
use serde_json::{Map, Number, Value as Json};

/// Convert a parsed JSON document into a Bencode value.
///
/// # Errors
///
/// Returns an error naming the JSON path (e.g. `$.info.files[2].private`)
/// of the first float, boolean or null encountered.
pub fn from_json(json: &Json) -> Result<Value> {
    convert(json, &mut String::from("$"))
}

fn convert(json: &Json, path: &mut String) -> Result<Value> {
    match json {
        Json::String(s) => Ok(Value::string(s)),
        Json::Number(n) => number(n, path),
        Json::Array(items) => {
            let mut list = Vec::with_capacity(items.len());
            for (idx, item) in items.iter().enumerate() {
                let len = path.len();
                let _ = write!(path, "[{idx}]");
                list.push(convert(item, path)?);
                path.truncate(len);
            }
            Ok(Value::List(list))
        }
        Json::Object(map) => {
            let mut dict = BTreeMap::new();
            for (key, item) in map {
                let len = path.len();
                path.push('.');
                path.push_str(key);
                let value = convert(item, path)?;
                path.truncate(len);
                dict.insert(ByteString::from(key.as_str()), value);
            }
            Ok(Value::Dict(dict))
        }
        Json::Bool(_) => bail!("unsupported JSON boolean at {path}"),
        Json::Null => bail!("unsupported JSON null at {path}"),
    }
}

fn number(n: &Number, path: &str) -> Result<Value> {
    if let Some(i) = n.as_i64() {
        Ok(Value::Integer(i))
    } else if let Some(u) = n.as_u64() {
        Ok(Value::from_u64(u))
    } else {
        bail!("unsupported JSON float {n} at {path}")
    }
}

/// Render a Bencode value as JSON.
///
/// # Errors
///
/// Returns an error naming the dictionary path if two keys render to the
/// same JSON object key.
pub fn to_json(value: &Value) -> Result<Json> {
    render(value, &mut String::from("$"))
}

fn render(value: &Value, path: &mut String) -> Result<Json> {
    match value {
        Value::Bytes(b) => Ok(Json::String(text(b))),
        Value::Integer(i) => Ok(Json::Number(Number::from(*i))),
        Value::Unsigned(u) => Ok(Json::Number(Number::from(*u))),
        Value::List(items) => {
            let mut array = Vec::with_capacity(items.len());
            for (idx, item) in items.iter().enumerate() {
                let len = path.len();
                let _ = write!(path, "[{idx}]");
                array.push(render(item, path)?);
                path.truncate(len);
            }
            Ok(Json::Array(array))
        }
        Value::Dict(entries) => {
            let mut object = Map::new();
            for (key, item) in entries {
                let key = text(key);
                let len = path.len();
                path.push('.');
                path.push_str(&key);
                let rendered = render(item, path)?;
                path.truncate(len);
                if object.contains_key(&key) {
                    bail!("dictionary at {path} has two keys rendering as {key:?}");
                }
                object.insert(key, rendered);
            }
            Ok(Json::Object(object))
        }
    }
}

/// UTF-8 content as-is, anything else as `0x<hex>`.
///
/// UTF-8 content that itself starts with `0x` is hex-encoded too, so the
/// rendering stays one-to-one.
pub fn text(bytes: &ByteString) -> String {
    match bytes.as_str() {
        Some(s) if !s.starts_with("0x") => s.to_owned(),
        _ => format!("0x{}", hex::encode(bytes)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn json_document_converts() {
        let doc = json!({
            "announce": "http://tracker.example/announce",
            "info": { "length": 1024, "files": [1, -2, 18446744073709551615u64] }
        });
        let value = from_json(&doc).unwrap();

        assert_eq!(
            value.get(b"announce").and_then(Value::as_str),
            Some("http://tracker.example/announce")
        );
        let files = value.get(b"info").and_then(|i| i.get(b"files")).unwrap();
        assert_eq!(
            files,
            &Value::List(vec![
                Value::Integer(1),
                Value::Integer(-2),
                Value::Unsigned(u64::MAX)
            ])
        );
    }

    #[test]
    fn unsupported_kinds_name_their_path() {
        let err = from_json(&json!({ "a": [1, { "b": 1.5 }] })).unwrap_err();
        assert_eq!(err.to_string(), "unsupported JSON float 1.5 at $.a[1].b");

        let err = from_json(&json!([true])).unwrap_err();
        assert_eq!(err.to_string(), "unsupported JSON boolean at $[0]");

        let err = from_json(&json!({ "x": null })).unwrap_err();
        assert_eq!(err.to_string(), "unsupported JSON null at $.x");
    }

    #[test]
    fn binary_strings_render_as_hex() {
        let value = Value::List(vec![
            Value::string("plain"),
            Value::bytes(vec![0xDEu8, 0xAD, 0xBE, 0xEF]),
        ]);
        assert_eq!(to_json(&value).unwrap(), json!(["plain", "0xdeadbeef"]));
    }

    #[test]
    fn to_json_keeps_integer_range() {
        let value = Value::List(vec![Value::Integer(i64::MIN), Value::Unsigned(u64::MAX)]);
        assert_eq!(to_json(&value).unwrap(), json!([i64::MIN, u64::MAX]));
    }

    #[test]
    fn json_roundtrip_for_text_documents() {
        let doc = json!({ "b": ["x", 1], "a": { "nested": "yes" } });
        assert_eq!(to_json(&from_json(&doc).unwrap()).unwrap(), doc);
    }

    #[test]
    fn hex_lookalike_keys_stay_distinct() {
        let mut dict = BTreeMap::new();
        dict.insert(ByteString::from(vec![0xFFu8]), Value::Integer(1));
        dict.insert(ByteString::from("0xff"), Value::Integer(2));
        dict.insert(ByteString::from("plain"), Value::Integer(3));

        let json = to_json(&Value::Dict(dict)).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["0xff"], json!(1));
        assert_eq!(object["0x30786666"], json!(2));
        assert_eq!(object["plain"], json!(3));
    }

    #[test]
    fn text_is_one_to_one() {
        assert_eq!(text(&ByteString::from("spam")), "spam");
        assert_eq!(text(&ByteString::from("0x")), "0x3078");
        assert_eq!(text(&ByteString::from("0xff")), "0x30786666");
        assert_eq!(text(&ByteString::from(vec![0xFFu8])), "0xff");
        assert_eq!(text(&ByteString::from("x0ff")), "x0ff");
    }
}
