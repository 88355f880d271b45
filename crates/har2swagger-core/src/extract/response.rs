//! Response extraction for one traffic record.

use crate::har::{HintHeader, TrafficRecord};
use crate::infer::{resolve_body_schema, SchemaInference};
use crate::swagger::{Response, SwaggerDocument};

/// Build the response entry for this record's status code.
///
/// Returns `None` when the response has no body; nothing is recorded for the
/// status in that case.
pub fn extract_response(
    record: &TrafficRecord,
    doc: &mut SwaggerDocument,
    inferrer: &dyn SchemaInference,
) -> crate::Result<Option<(String, Response)>> {
    let Some(body) = record.response_json()? else {
        return Ok(None);
    };
    let type_name = record.response_hint(HintHeader::BodyType);
    let schema = resolve_body_schema(&body, type_name, doc, inferrer);
    Ok(Some((
        record.response_status().to_string(),
        Response {
            description: String::new(),
            schema: Some(schema),
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::har::HarContext;
    use crate::infer::ExampleSchemaInference;
    use serde_json::json;

    fn record(response: &str) -> TrafficRecord {
        let har = format!(
            r#"{{"log": {{"entries": [{{"request": {{"method": "GET", "url": "http://h.test/x"}}, "response": {}}}]}}}}"#,
            response
        );
        HarContext::parse(&har).unwrap().into_records().remove(0)
    }

    #[test]
    fn test_response_with_named_body() {
        let record = record(
            r#"{"status": 201, "bodySize": 8,
                "headers": [{"name": "X-Swagger-Body-Type", "value": "Order"}],
                "content": {"text": "{\"id\":1}"}}"#,
        );
        let mut doc = SwaggerDocument::initialize(None);
        let (status, response) = extract_response(&record, &mut doc, &ExampleSchemaInference)
            .unwrap()
            .unwrap();
        assert_eq!(status, "201");
        assert_eq!(response.description, "");
        assert_eq!(response.schema, Some(json!({"$ref": "#/definitions/Order"})));
        assert!(doc.definitions.contains_key("Order"));
    }

    #[test]
    fn test_response_without_body() {
        let record = record(r#"{"status": 204, "bodySize": 0}"#);
        let mut doc = SwaggerDocument::initialize(None);
        assert!(extract_response(&record, &mut doc, &ExampleSchemaInference)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_response_with_invalid_json() {
        let record = record(r#"{"status": 200, "bodySize": 4, "content": {"text": "<ok>"}}"#);
        let mut doc = SwaggerDocument::initialize(None);
        let err = extract_response(&record, &mut doc, &ExampleSchemaInference).unwrap_err();
        assert!(matches!(err, crate::Error::MalformedBody { .. }));
    }
}
