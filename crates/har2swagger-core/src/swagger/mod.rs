//! Swagger 2.0 output model and the policies that fold observations into it.

pub mod document;
pub mod merge;

pub use document::{
    Info, Operation, Parameter, ParameterLocation, PathItem, Response, SwaggerDocument,
};
