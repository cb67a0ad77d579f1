//! Schema compilation and environment validation

pub mod checks;
pub mod rules;
pub mod validator;

pub use checks::TypeCheck;
pub use rules::{FieldRule, SchemaMap};
pub use validator::{EnvSchema, FieldFailure, ValidationReport};
