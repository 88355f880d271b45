//! Conversion entry points: fold every traffic record into one document.

use indexmap::IndexMap;

use crate::config::{ConvertOptions, InfoConfig};
use crate::extract::{extract_parameters, extract_response};
use crate::har::{HarContext, HintHeader, TrafficRecord};
use crate::infer::{ExampleSchemaInference, SchemaInference};
use crate::swagger::merge::replace_operation;
use crate::swagger::{Operation, SwaggerDocument};

/// Convert HAR content into a Swagger 2.0 document using the default schema
/// inference.
///
/// ```
/// use har2swagger_core::{generate, ConvertOptions};
///
/// let har = r#"{"log": {"entries": [{
///     "request": {"method": "GET", "url": "http://api.example.com/users?active=true",
///                 "headers": [{"name": "Host", "value": "api.example.com"}], "bodySize": 0},
///     "response": {"status": 200, "headers": [], "bodySize": 0}
/// }]}}"#;
/// let doc = generate(har, None, &ConvertOptions::default()).unwrap();
/// assert_eq!(doc.host, "api.example.com");
/// assert_eq!(doc.paths["/users"]["get"].parameters[0].type_.as_deref(), Some("boolean"));
/// ```
pub fn generate(
    har_content: &str,
    info: Option<InfoConfig>,
    options: &ConvertOptions,
) -> crate::Result<SwaggerDocument> {
    let har = HarContext::parse(har_content)?;
    generate_from_records(har.records(), info, options, &ExampleSchemaInference)
}

/// Convert already parsed records. The document is only returned once every
/// record has been folded in; the first failing record aborts the run.
pub fn generate_from_records(
    records: &[TrafficRecord],
    info: Option<InfoConfig>,
    options: &ConvertOptions,
    inferrer: &dyn SchemaInference,
) -> crate::Result<SwaggerDocument> {
    let mut doc = SwaggerDocument::initialize(info);
    doc.set_host(records.first())?;

    for record in records {
        register_path(&mut doc, record, options, inferrer)?;
    }

    log::info!(
        "Generated {} paths and {} definitions from {} records",
        doc.paths.len(),
        doc.definitions.len(),
        records.len()
    );
    Ok(doc)
}

/// Register the path and operation observed in one record.
pub fn register_path(
    doc: &mut SwaggerDocument,
    record: &TrafficRecord,
    options: &ConvertOptions,
    inferrer: &dyn SchemaInference,
) -> crate::Result<()> {
    let pathname = record.pathname();
    let method = record.request_method();
    log::debug!(
        "Registering {} {} ({})",
        method,
        pathname,
        record.response_status()
    );

    doc.path_item_mut(pathname);

    let parameters = extract_parameters(record, options, doc, inferrer)?;
    let response = extract_response(record, doc, inferrer)?;

    let fresh = Operation {
        description: record
            .request_hint(HintHeader::Description)
            .unwrap_or_default()
            .to_string(),
        operation_id: record
            .request_hint(HintHeader::OperationId)
            .unwrap_or_default()
            .to_string(),
        parameters,
        responses: IndexMap::new(),
    };

    let operation = replace_operation(doc.path_item_mut(pathname), method, fresh);
    if let Some((status, response)) = response {
        operation.responses.insert(status, response);
    }
    Ok(())
}
