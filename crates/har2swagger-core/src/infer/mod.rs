//! Inference of parameter types and body schemas from observed values.

pub mod definitions;
pub mod schema;
pub mod type_guess;

pub use definitions::{merge_definition, resolve_body_schema};
pub use schema::{ExampleSchemaInference, SchemaInference};
pub use type_guess::{guess_type, GuessedType};
