//! Body schema resolution: inline schemas or named, progressively merged
//! shared definitions.

use serde_json::{json, Value as JsonValue};

use super::schema::{overlay, SchemaInference};
use crate::swagger::SwaggerDocument;

/// Resolve the schema for one body.
///
/// Without a type name the inferred schema is returned inline and
/// `definitions` is left alone. With a type name the inferred schema is merged
/// into `definitions[type_name]` and a `$ref` to it is returned.
pub fn resolve_body_schema(
    body: &JsonValue,
    type_name: Option<&str>,
    doc: &mut SwaggerDocument,
    inferrer: &dyn SchemaInference,
) -> JsonValue {
    let inferred = inferrer.infer(body);
    let Some(name) = type_name.map(str::trim).filter(|n| !n.is_empty()) else {
        return inferred;
    };

    match doc.definitions.get_mut(name) {
        Some(existing) => {
            let previous = std::mem::take(existing);
            *existing = merge_definition(previous, inferred);
        }
        None => {
            log::debug!("New definition '{}'", name);
            doc.definitions.insert(name.to_string(), inferred);
        }
    }

    json!({ "$ref": definition_ref(name) })
}

/// Fold a newly inferred schema into the one already stored under the same
/// name.
///
/// The first-seen shape wins on every conflicting key; later observations
/// only contribute top-level keys and property names that were absent. This
/// is not a structural union: a property seen first as a string stays a
/// string even if later bodies carry numbers.
pub fn merge_definition(previous: JsonValue, inferred: JsonValue) -> JsonValue {
    overlay(previous, inferred)
}

/// `#/definitions/<name>` with the name escaped as a JSON pointer segment
fn definition_ref(name: &str) -> String {
    format!(
        "#/definitions/{}",
        name.replace('~', "~0").replace('/', "~1")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infer::ExampleSchemaInference;

    #[test]
    fn test_inline_without_hint() {
        let mut doc = SwaggerDocument::initialize(None);
        let schema =
            resolve_body_schema(&json!({"a": 1}), None, &mut doc, &ExampleSchemaInference);
        assert_eq!(
            schema,
            json!({"type": "object", "properties": {"a": {"type": "integer"}}})
        );
        assert!(doc.definitions.is_empty());
    }

    #[test]
    fn test_blank_hint_is_inline() {
        let mut doc = SwaggerDocument::initialize(None);
        let schema =
            resolve_body_schema(&json!(1), Some("  "), &mut doc, &ExampleSchemaInference);
        assert_eq!(schema, json!({"type": "integer"}));
        assert!(doc.definitions.is_empty());
    }

    #[test]
    fn test_named_definition_merges_first_wins() {
        let mut doc = SwaggerDocument::initialize(None);
        let first = resolve_body_schema(
            &json!({"a": "x"}),
            Some("Thing"),
            &mut doc,
            &ExampleSchemaInference,
        );
        let second = resolve_body_schema(
            &json!({"a": 2.5, "b": "y"}),
            Some("Thing"),
            &mut doc,
            &ExampleSchemaInference,
        );

        assert_eq!(first, json!({"$ref": "#/definitions/Thing"}));
        assert_eq!(second, first);
        assert_eq!(
            doc.definitions["Thing"],
            json!({
                "type": "object",
                "properties": {"a": {"type": "string"}, "b": {"type": "string"}}
            })
        );
    }

    #[test]
    fn test_merge_keeps_previous_on_shape_change() {
        let merged = merge_definition(
            json!({"type": "array", "items": {"type": "string"}}),
            json!({"type": "object", "properties": {"a": {"type": "string"}}}),
        );
        assert_eq!(
            merged,
            json!({
                "type": "array",
                "items": {"type": "string"},
                "properties": {"a": {"type": "string"}}
            })
        );
    }

    #[test]
    fn test_ref_escapes_pointer_characters() {
        assert_eq!(definition_ref("a/b~c"), "#/definitions/a~1b~0c");
    }
}
