//! HAR parsing and the read-only traffic record view.
//!
//! This module turns an HTTP Archive (HAR) document into a sequence of
//! [`TrafficRecord`]s, one per captured exchange. Records are immutable and
//! carry only what the inference engine looks at: URL, method, headers, body
//! bytes and the response status.
//!
//! Only the conventional `log.entries[].request/response` shape is read;
//! unknown fields are ignored.

use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::path::Path;
use tokio::fs;
use url::Url;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::error::{BodySide, Error};

/// Top level structure for a HAR file.
#[derive(Debug, Deserialize)]
struct HarFile {
    log: HarLog,
}

#[derive(Debug, Deserialize)]
struct HarLog {
    entries: Vec<HarEntry>,
}

#[derive(Debug, Deserialize)]
struct HarEntry {
    request: HarRequest,
    response: HarResponse,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HarRequest {
    method: String,
    url: String,
    #[serde(default)]
    headers: Vec<Header>,
    #[serde(default = "unknown_body_size")]
    body_size: i64,
    #[serde(default)]
    post_data: Option<HarPostData>,
}

#[derive(Debug, Deserialize)]
struct HarPostData {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HarResponse {
    status: u16,
    #[serde(default)]
    headers: Vec<Header>,
    #[serde(default = "unknown_body_size")]
    body_size: i64,
    #[serde(default)]
    content: Option<HarContent>,
}

#[derive(Debug, Deserialize)]
struct HarContent {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    encoding: Option<String>,
}

// HAR uses -1 for "size not known".
fn unknown_body_size() -> i64 {
    -1
}

/// A single HTTP header as recorded in the HAR.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

/// Out-of-band hint headers understood by the converter.
///
/// Each hint is recognized under its `x-swagger-` name and under the legacy
/// `x-ms-` name used by older capture proxies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintHeader {
    /// Operation description
    Description,
    /// Operation id
    OperationId,
    /// URI template such as `/users/{id}`
    RoutingTemplate,
    /// Shared definition name for a body
    BodyType,
}

impl HintHeader {
    /// Header names this hint is recognized under, preferred name first
    pub fn names(self) -> [&'static str; 2] {
        match self {
            HintHeader::Description => ["x-swagger-description", "x-ms-description"],
            HintHeader::OperationId => ["x-swagger-operationId", "x-ms-operationId"],
            HintHeader::RoutingTemplate => {
                ["x-swagger-routing-template", "x-ms-routing-template"]
            }
            HintHeader::BodyType => ["x-swagger-body-type", "x-ms-body-type"],
        }
    }
}

/// Find the first header named `name`, ignoring ASCII case.
pub fn find_header<'a>(headers: &'a [Header], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case(name))
        .map(|h| h.value.as_str())
}

fn find_hint(headers: &[Header], hint: HintHeader) -> Option<&str> {
    hint.names()
        .into_iter()
        .find_map(|name| find_header(headers, name))
}

/// One captured request/response exchange.
#[derive(Debug, Clone)]
pub struct TrafficRecord {
    request_url: Url,
    request_method: String,
    request_headers: Vec<Header>,
    request_body: Option<Vec<u8>>,
    response_status: u16,
    response_headers: Vec<Header>,
    response_body: Option<Vec<u8>>,
}

impl TrafficRecord {
    fn from_entry(index: usize, entry: HarEntry) -> crate::Result<Self> {
        let HarEntry { request, response } = entry;

        let request_url = Url::parse(&request.url).map_err(|e| {
            Error::malformed_input(format!(
                "entry {}: invalid request URL '{}': {}",
                index, request.url, e
            ))
        })?;

        let request_body = if request.body_size > 0 {
            let text = request
                .post_data
                .and_then(|p| p.text)
                .ok_or_else(|| {
                    Error::malformed_body(
                        BodySide::Request,
                        request_url.as_str(),
                        format!("bodySize is {} but postData.text is missing", request.body_size),
                    )
                })?;
            Some(text.into_bytes())
        } else {
            None
        };

        let response_body = if response.body_size > 0 {
            let content = response.content.ok_or_else(|| {
                Error::malformed_body(
                    BodySide::Response,
                    request_url.as_str(),
                    "content is missing",
                )
            })?;
            Some(decode_content(content, &request_url)?)
        } else {
            None
        };

        Ok(Self {
            request_method: request.method.to_lowercase(),
            request_headers: request.headers,
            request_body,
            response_status: response.status,
            response_headers: response.headers,
            response_body,
            request_url,
        })
    }

    pub fn request_url(&self) -> &Url {
        &self.request_url
    }

    /// URL path without query, as used for the `paths` key
    pub fn pathname(&self) -> &str {
        self.request_url.path()
    }

    /// Lowercase HTTP method
    pub fn request_method(&self) -> &str {
        &self.request_method
    }

    pub fn request_headers(&self) -> &[Header] {
        &self.request_headers
    }

    pub fn response_headers(&self) -> &[Header] {
        &self.response_headers
    }

    pub fn response_status(&self) -> u16 {
        self.response_status
    }

    pub fn request_body(&self) -> Option<&[u8]> {
        self.request_body.as_deref()
    }

    pub fn response_body(&self) -> Option<&[u8]> {
        self.response_body.as_deref()
    }

    /// Case-insensitive request header lookup
    pub fn request_header(&self, name: &str) -> Option<&str> {
        find_header(&self.request_headers, name)
    }

    pub fn request_hint(&self, hint: HintHeader) -> Option<&str> {
        find_hint(&self.request_headers, hint)
    }

    pub fn response_hint(&self, hint: HintHeader) -> Option<&str> {
        find_hint(&self.response_headers, hint)
    }

    /// Parse the request body as JSON. `Ok(None)` when there is no body.
    pub fn request_json(&self) -> crate::Result<Option<JsonValue>> {
        self.parse_body(BodySide::Request, self.request_body())
    }

    /// Parse the response body as JSON. `Ok(None)` when there is no body.
    pub fn response_json(&self) -> crate::Result<Option<JsonValue>> {
        self.parse_body(BodySide::Response, self.response_body())
    }

    fn parse_body(&self, side: BodySide, body: Option<&[u8]>) -> crate::Result<Option<JsonValue>> {
        body.map(|bytes| {
            serde_json::from_slice(bytes)
                .map_err(|e| Error::malformed_body(side, self.request_url.as_str(), e))
        })
        .transpose()
    }
}

fn decode_content(content: HarContent, url: &Url) -> crate::Result<Vec<u8>> {
    let text = content.text.ok_or_else(|| {
        Error::malformed_body(BodySide::Response, url.as_str(), "content.text is missing")
    })?;
    match content.encoding.as_deref() {
        Some(enc) if enc.eq_ignore_ascii_case("base64") => BASE64
            .decode(text.trim())
            .map_err(|e| Error::malformed_body(BodySide::Response, url.as_str(), e)),
        _ => Ok(text.into_bytes()),
    }
}

/// Parsed representation of a HAR file.
#[derive(Debug)]
pub struct HarContext {
    records: Vec<TrafficRecord>,
}

impl HarContext {
    /// Parse HAR content already held in memory.
    pub fn parse(content: &str) -> crate::Result<Self> {
        let har: HarFile = serde_json::from_str(content)
            .map_err(|e| Error::malformed_input(format!("Failed to parse HAR: {}", e)))?;
        let records = har
            .log
            .entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| TrafficRecord::from_entry(index, entry))
            .collect::<crate::Result<Vec<_>>>()?;
        log::debug!("Parsed {} HAR entries", records.len());
        Ok(Self { records })
    }

    /// Load a HAR file from a local path or an HTTP(S) URL.
    pub async fn from_file_or_url<P: AsRef<str>>(location: P) -> crate::Result<Self> {
        let location = location.as_ref();

        if location.starts_with("http://") || location.starts_with("https://") {
            return Self::from_url(location).await;
        }

        Self::from_file(location).await
    }

    /// Load a HAR file from disk.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        Self::parse(&content).map_err(|e| match e {
            Error::MalformedInput(msg) => {
                Error::malformed_input(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Download a HAR file.
    pub async fn from_url(url: &str) -> crate::Result<Self> {
        let response = reqwest::get(url).await?;

        if !response.status().is_success() {
            return Err(Error::malformed_input(format!(
                "Failed to fetch HAR from {}: HTTP {}",
                url,
                response.status()
            )));
        }

        let content = response.text().await?;
        Self::parse(&content)
    }

    pub fn records(&self) -> &[TrafficRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<TrafficRecord> {
        self.records
    }
}
