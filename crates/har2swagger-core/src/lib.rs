//! har2swagger Core Library
//!
//! This library infers a Swagger 2.0 API description from captured HTTP
//! traffic (HAR): paths, methods, parameters and request/response body
//! schemas.

pub mod config;
pub mod error;
pub mod extract;
pub mod generate;
pub mod har;
pub mod infer;
pub mod swagger;

pub use crate::{
    config::{Config, ConvertOptions, InfoConfig},
    error::{Error, Result},
    generate::{generate, generate_from_records},
    har::{HarContext, TrafficRecord},
    infer::{ExampleSchemaInference, SchemaInference},
    swagger::SwaggerDocument,
};
