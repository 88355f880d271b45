//! Error handling for the har2swagger conversion library.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. It uses `thiserror` for easy
//! error handling and implements conversions from common error types.
//!
//! A conversion either produces a complete document or fails with one of these
//! errors; there is no partial output.
//!
//! # Examples
//!
//! ```
//! use har2swagger_core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::malformed_input("log.entries is missing"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use std::fmt;

use thiserror::Error;

/// Result type for har2swagger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which half of an exchange a body belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodySide {
    Request,
    Response,
}

impl fmt::Display for BodySide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodySide::Request => f.write_str("request"),
            BodySide::Response => f.write_str("response"),
        }
    }
}

/// Main error type for har2swagger operations
#[derive(Debug, Error)]
pub enum Error {
    /// The HAR document is not JSON, lacks `log.entries`, or carries an unusable entry
    #[error("Malformed HAR input: {0}")]
    MalformedInput(String),

    /// The log is empty or its first request has no `Host` header
    #[error("Cannot determine host: the first HAR entry has no Host request header")]
    MissingHost,

    /// A body with a non-zero size could not be decoded as JSON
    #[error("Malformed {side} body for {url}: {reason}")]
    MalformedBody {
        side: BodySide,
        url: String,
        reason: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP error while fetching a remote HAR
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new malformed input error
    pub fn malformed_input<S: Into<String>>(msg: S) -> Self {
        Self::MalformedInput(msg.into())
    }

    /// Create a new malformed body error
    pub fn malformed_body<U: Into<String>, R: fmt::Display>(
        side: BodySide,
        url: U,
        reason: R,
    ) -> Self {
        Self::MalformedBody {
            side,
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}
