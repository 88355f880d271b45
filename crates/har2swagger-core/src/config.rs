//! Configuration management for har2swagger conversions.
//!
//! This module defines the `Config` struct carrying the caller-supplied API
//! metadata (`info`) and the conversion `options`. The configuration can be
//! loaded from a YAML (or JSON) file, created programmatically, or assembled
//! from command-line arguments.
//!
//! # Examples
//!
//! ```no_run
//! use har2swagger_core::config::Config;
//!
//! # #[tokio::main]
//! # async fn main() -> har2swagger_core::Result<()> {
//! // Create a config programmatically
//! let mut config = Config::default();
//! config.info.title = Some("Pet Store".to_string());
//! config.options.guess_data_type = false;
//!
//! // Or load it from a file
//! let config = Config::from_file("har2swagger.yaml").await?;
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::Path;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tokio::fs;

/// Configuration for a HAR to Swagger conversion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Metadata copied into the document's `info` object
    #[serde(default)]
    pub info: InfoConfig,

    /// Inference switches
    #[serde(default)]
    pub options: ConvertOptions,
}

/// Caller-supplied API metadata. Every field is optional and defaulted by the
/// document builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,

    /// Swagger contact object, passed through verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<JsonValue>,

    /// Swagger license object, passed through verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<JsonValue>,
}

/// Options controlling inference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Guess query/path parameter types from observed values. When false,
    /// every scalar parameter is typed `string`.
    #[serde(default = "default_guess_data_type")]
    pub guess_data_type: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            guess_data_type: default_guess_data_type(),
        }
    }
}

impl Config {
    /// Create a new Config with the given info and default options
    pub fn new(info: InfoConfig) -> Self {
        Self {
            info,
            options: ConvertOptions::default(),
        }
    }

    /// Load configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        // JSON is a subset of YAML, so one parser covers both formats.
        serde_yaml::from_str(&content).map_err(|e| {
            crate::Error::config(format!(
                "Failed to parse configuration {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Save configuration to a file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content).await?;
        Ok(())
    }
}

fn default_guess_data_type() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_roundtrip() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("config.yaml");

        let mut config = Config::new(InfoConfig {
            title: Some("Orders".into()),
            terms_of_service: Some("https://example.com/tos".into()),
            ..Default::default()
        });
        config.options.guess_data_type = false;
        config.save(&file_path).await?;

        let loaded = Config::from_file(&file_path).await?;
        assert_eq!(loaded, config);
        assert_eq!(loaded.info.version, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_config_from_json_file_with_defaults() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("config.json");
        tokio::fs::write(
            &file_path,
            r#"{"info": {"version": "2.1", "termsOfService": "tos"}}"#,
        )
        .await?;

        let loaded = Config::from_file(&file_path).await?;
        assert_eq!(loaded.info.version.as_deref(), Some("2.1"));
        assert_eq!(loaded.info.terms_of_service.as_deref(), Some("tos"));
        assert!(loaded.options.guess_data_type);

        Ok(())
    }

    #[tokio::test]
    async fn test_config_invalid_file() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("broken.yaml");
        tokio::fs::write(&file_path, "options: [not, a, map]").await?;

        let err = Config::from_file(&file_path).await.unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));

        Ok(())
    }
}
