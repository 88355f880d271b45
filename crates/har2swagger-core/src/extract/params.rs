//! Parameter extraction for one traffic record.
//!
//! Three independent passes run in order and their results are concatenated:
//! query string, routing-template placeholders, then the request body.
//! Names are not deduplicated across passes.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use regex::Regex;

use crate::config::ConvertOptions;
use crate::har::{HintHeader, TrafficRecord};
use crate::infer::{guess_type, resolve_body_schema, GuessedType, SchemaInference};
use crate::swagger::{Parameter, ParameterLocation, SwaggerDocument};

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[^/]+\}").expect("placeholder pattern is valid"));

/// All parameters of the operation described by `record`.
pub fn extract_parameters(
    record: &TrafficRecord,
    options: &ConvertOptions,
    doc: &mut SwaggerDocument,
    inferrer: &dyn SchemaInference,
) -> crate::Result<Vec<Parameter>> {
    let mut parameters = query_parameters(record, options);
    parameters.extend(path_parameters(record, options));
    parameters.extend(body_parameter(record, doc, inferrer)?);
    Ok(parameters)
}

/// One `query` parameter per distinct key; the first occurrence of a repeated
/// key decides its type.
pub fn query_parameters(record: &TrafficRecord, options: &ConvertOptions) -> Vec<Parameter> {
    let mut seen = HashSet::new();
    record
        .request_url()
        .query_pairs()
        .filter(|(name, _)| seen.insert(name.to_string()))
        .map(|(name, value)| {
            scalar_parameter(&name, ParameterLocation::Query, Some(&*value), options)
        })
        .collect()
}

/// One `path` parameter per `{placeholder}` in the routing-template header.
///
/// The type is guessed from the value captured at the placeholder's position
/// in the request path. Placeholders that cannot be aligned with a concrete
/// segment are typed `string`.
pub fn path_parameters(record: &TrafficRecord, options: &ConvertOptions) -> Vec<Parameter> {
    let Some(template) = record.request_hint(HintHeader::RoutingTemplate) else {
        return Vec::new();
    };
    let captured = captured_segments(template, record.pathname());

    PLACEHOLDER
        .find_iter(template)
        .map(|m| {
            let placeholder = m.as_str();
            let name = &placeholder[1..placeholder.len() - 1];
            let value = captured.get(name).map(String::as_str);
            scalar_parameter(name, ParameterLocation::Path, value, options)
        })
        .collect()
}

/// The `body` parameter, when the request carries a body.
pub fn body_parameter(
    record: &TrafficRecord,
    doc: &mut SwaggerDocument,
    inferrer: &dyn SchemaInference,
) -> crate::Result<Option<Parameter>> {
    let Some(body) = record.request_json()? else {
        return Ok(None);
    };
    let type_name = record.request_hint(HintHeader::BodyType);
    let schema = resolve_body_schema(&body, type_name, doc, inferrer);
    Ok(Some(Parameter::body(schema)))
}

fn scalar_parameter(
    name: &str,
    location: ParameterLocation,
    observed: Option<&str>,
    options: &ConvertOptions,
) -> Parameter {
    let guessed = match observed {
        Some(value) if options.guess_data_type => guess_type(value),
        _ => GuessedType::string(),
    };
    Parameter::scalar(
        name,
        location,
        guessed.type_,
        guessed.format.map(String::from),
    )
}

/// Map placeholder names to the decoded path segments they stand for.
///
/// Alignment is segment by segment and only when template and path have the
/// same number of segments; a placeholder must fill its whole segment.
fn captured_segments(template: &str, path: &str) -> HashMap<String, String> {
    let template = template.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
    let template_segments: Vec<&str> = template.trim_matches('/').split('/').collect();
    let path_segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    if template_segments.len() != path_segments.len() {
        return HashMap::new();
    }

    template_segments
        .into_iter()
        .zip(path_segments)
        .filter_map(|(segment, value)| {
            let name = segment.strip_prefix('{')?.strip_suffix('}')?;
            if name.is_empty() || name.contains(|c: char| c == '{' || c == '}') {
                return None;
            }
            let decoded = percent_decode_str(value).decode_utf8_lossy().into_owned();
            Some((name.to_string(), decoded))
        })
        .collect()
}
