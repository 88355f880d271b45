//! Structural JSON schema inference from a single example value.
//!
//! The converter only decides when to infer and how to merge; the inference
//! itself sits behind [`SchemaInference`] so a different strategy can be
//! plugged in. [`ExampleSchemaInference`] is the default.

use chrono::DateTime;
use serde_json::{json, Map as JsonMap, Value as JsonValue};

/// Infers a JSON schema describing one concrete JSON value.
pub trait SchemaInference {
    fn infer(&self, value: &JsonValue) -> JsonValue;
}

/// Schema inference driven purely by the shape of the example.
///
/// * objects become `{"type": "object", "properties": {...}}` in key order
/// * arrays become `{"type": "array", "items": ...}`; object items are
///   overlaid into one item schema, mixed item types become `oneOf`
/// * RFC 3339 strings get `"format": "date-time"`
#[derive(Debug, Clone, Copy, Default)]
pub struct ExampleSchemaInference;

impl SchemaInference for ExampleSchemaInference {
    fn infer(&self, value: &JsonValue) -> JsonValue {
        schema_for(value)
    }
}

fn schema_for(value: &JsonValue) -> JsonValue {
    match value {
        JsonValue::Null => json!({ "type": "null" }),
        JsonValue::Bool(_) => json!({ "type": "boolean" }),
        JsonValue::Number(n) if n.is_f64() => json!({ "type": "number" }),
        JsonValue::Number(_) => json!({ "type": "integer" }),
        JsonValue::String(s) if DateTime::parse_from_rfc3339(s).is_ok() => {
            json!({ "type": "string", "format": "date-time" })
        }
        JsonValue::String(_) => json!({ "type": "string" }),
        JsonValue::Array(items) => json!({ "type": "array", "items": items_schema(items) }),
        JsonValue::Object(map) => {
            let properties: JsonMap<String, JsonValue> = map
                .iter()
                .map(|(key, value)| (key.clone(), schema_for(value)))
                .collect();
            json!({ "type": "object", "properties": properties })
        }
    }
}

fn items_schema(items: &[JsonValue]) -> JsonValue {
    let mut variants: Vec<JsonValue> = Vec::new();
    for item in items {
        let schema = schema_for(item);
        let same_type = variants
            .iter()
            .position(|known| known.get("type") == schema.get("type"));
        match same_type {
            Some(index) => {
                let first = std::mem::take(&mut variants[index]);
                variants[index] = overlay(first, schema);
            }
            None => variants.push(schema),
        }
    }

    match variants.len() {
        0 => json!({}),
        1 => variants.remove(0),
        _ => json!({ "oneOf": variants }),
    }
}

/// Overlay `next` onto `first`: keys already in `first` keep their value,
/// except that new entries under `properties` are added. Non-object schemas
/// keep `first` unchanged.
pub fn overlay(first: JsonValue, next: JsonValue) -> JsonValue {
    match (first, next) {
        (JsonValue::Object(mut merged), JsonValue::Object(next)) => {
            for (key, value) in next {
                match merged.get_mut(&key) {
                    Some(JsonValue::Object(known)) if key == "properties" => {
                        if let JsonValue::Object(added) = value {
                            for (name, schema) in added {
                                known.entry(name).or_insert(schema);
                            }
                        }
                    }
                    Some(_) => {}
                    None => {
                        merged.insert(key, value);
                    }
                }
            }
            JsonValue::Object(merged)
        }
        (first, _) => first,
    }
}
