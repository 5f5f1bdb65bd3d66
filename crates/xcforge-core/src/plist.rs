//! Pure plist derivation.
//!
//! Produces a new plist document from a source document plus two layered
//! override sets. No filesystem access happens here; callers read and write
//! the files so this stays independently testable.

use std::collections::BTreeMap;
use std::io::Cursor;

use plist::{Dictionary, Value};
use serde_json::Value as JsonValue;

use xcforge_util::errors::XcforgeError;

/// Derive a new plist from `source` with `global_keys` and `target_keys`
/// applied as overwrites, in that order.
///
/// Precedence, low to high: source < global < target. Keys absent from the
/// source are inserted, never rejected. The result is serialized in the same
/// XML plist text format as the input, with source key order preserved.
pub fn derive(
    source: &str,
    global_keys: &BTreeMap<String, JsonValue>,
    target_keys: &BTreeMap<String, JsonValue>,
) -> miette::Result<String> {
    let value =
        Value::from_reader_xml(Cursor::new(source.as_bytes())).map_err(|e| XcforgeError::Plist {
            message: format!("failed to parse source plist: {e}"),
        })?;
    let mut dict = match value {
        Value::Dictionary(dict) => dict,
        _ => {
            return Err(XcforgeError::Plist {
                message: "source plist root is not a dictionary".to_string(),
            }
            .into())
        }
    };

    for (key, value) in global_keys.iter().chain(target_keys.iter()) {
        dict.insert(key.clone(), json_to_plist(value));
    }

    let mut out = Vec::new();
    Value::Dictionary(dict)
        .to_writer_xml(&mut out)
        .map_err(|e| XcforgeError::Plist {
            message: format!("failed to serialize plist: {e}"),
        })?;
    String::from_utf8(out).map_err(|e| {
        XcforgeError::Plist {
            message: format!("derived plist is not valid UTF-8: {e}"),
        }
        .into()
    })
}

fn json_to_plist(value: &JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::String(String::new()),
        JsonValue::Bool(b) => Value::Boolean(*b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i.into()),
            None => Value::Real(n.as_f64().unwrap_or(0.0)),
        },
        JsonValue::String(s) => Value::String(s.clone()),
        JsonValue::Array(items) => Value::Array(items.iter().map(json_to_plist).collect()),
        JsonValue::Object(map) => {
            let mut dict = Dictionary::new();
            for (key, value) in map {
                dict.insert(key.clone(), json_to_plist(value));
            }
            Value::Dictionary(dict)
        }
    }
}
