//! The Swagger 2.0 document being accumulated during a conversion.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::config::InfoConfig;
use crate::har::TrafficRecord;
use crate::Error;

const DEFAULT_VERSION: &str = "<your API version>";
const DEFAULT_TITLE: &str = "<your API title>";
const DEFAULT_DESCRIPTION: &str = "<your API description>";

/// Operations of one path, keyed by lowercase HTTP method
pub type PathItem = IndexMap<String, Operation>;

/// Root of a Swagger 2.0 document.
///
/// Field order matches the serialized output: `swagger`, `info`, `host`,
/// `paths`, `definitions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwaggerDocument {
    pub swagger: String,
    pub info: Info,
    pub host: String,
    pub paths: IndexMap<String, PathItem>,
    pub definitions: IndexMap<String, JsonValue>,
}

/// The `info` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    pub version: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<JsonValue>,
}

/// One (path, method) pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub description: String,
    pub operation_id: String,
    pub parameters: Vec<Parameter>,
    pub responses: IndexMap<String, Response>,
}

/// Where a parameter is carried
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Query,
    Path,
    Body,
}

/// A single operation parameter. Query and path parameters carry `type`,
/// body parameters carry `schema`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    pub description: String,
    pub required: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<JsonValue>,
}

impl Parameter {
    /// A required scalar parameter with an optional format
    pub fn scalar(
        name: impl Into<String>,
        location: ParameterLocation,
        type_: impl Into<String>,
        format: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            description: String::new(),
            required: true,
            type_: Some(type_.into()),
            format,
            schema: None,
        }
    }

    /// The required `body` parameter
    pub fn body(schema: JsonValue) -> Self {
        Self {
            name: "body".to_string(),
            location: ParameterLocation::Body,
            description: String::new(),
            required: true,
            type_: None,
            format: None,
            schema: Some(schema),
        }
    }
}

/// A response entry for one status code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<JsonValue>,
}

impl SwaggerDocument {
    /// Create an empty document, filling every absent `info` field with its
    /// placeholder default.
    pub fn initialize(info: Option<InfoConfig>) -> Self {
        let info = info.unwrap_or_default();
        Self {
            swagger: "2.0".to_string(),
            info: Info {
                version: info.version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
                title: info.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
                description: info
                    .description
                    .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
                terms_of_service: info.terms_of_service,
                contact: info.contact,
                license: info.license,
            },
            host: String::new(),
            paths: IndexMap::new(),
            definitions: IndexMap::new(),
        }
    }

    /// Take the host from the `Host` request header of the first record.
    pub fn set_host(&mut self, first: Option<&TrafficRecord>) -> crate::Result<()> {
        let host = first
            .and_then(|record| record.request_header("Host"))
            .ok_or(Error::MissingHost)?;
        self.host = host.to_string();
        Ok(())
    }

    /// Ensure a path entry exists and return it
    pub fn path_item_mut(&mut self, pathname: &str) -> &mut PathItem {
        self.paths.entry(pathname.to_string()).or_default()
    }

    pub fn operation(&self, pathname: &str, method: &str) -> Option<&Operation> {
        self.paths.get(pathname)?.get(method)
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize as YAML
    pub fn to_yaml_string(&self) -> crate::Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
