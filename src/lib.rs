//! envtag - type-tagged env file parsing and pre-start environment validation
//!
//! This library parses an annotated env file format in which a `// type`
//! comment declares the expected type of the variable on the following line,
//! and compiles those annotations into a validation schema that can check
//! real environment variables before an application starts.
//!
//! # Annotated Format
//!
//! ```text
//! // string
//! DATABASE_URL=postgres://localhost:5432/app
//!
//! // number
//! PORT=8080
//!
//! // enum:dev|staging|prod
//! APP_MODE=dev
//!
//! // optional
//! EXTRA_NOTES=
//! ```
//!
//! Blank lines and `#` comments are skipped. Recognized tags: `string`,
//! `number`, `boolean`, `email`, `date`, `enum:<v1|v2|...>` and `optional`.
//! Each tag applies to exactly the next `KEY=VALUE` line.
//!
//! # Example Usage
//!
//! ```no_run
//! use envtag::{load, LoadOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let schema = load(&LoadOptions::new().with_env_path(".env.example"))?;
//!     let report = schema.validate_process_env();
//!
//!     if !report.is_valid() {
//!         eprintln!("{}", report);
//!         std::process::exit(1);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`parser`]: line scanner and type tag grammar
//! - [`schema`]: rule descriptors, per-type checks and the compiled validator
//! - [`loader`]: file loading pipeline tying the two together
//! - [`cli`]: the `envtag` command line interface

// Public modules
pub mod cli;
pub mod loader;
pub mod options;
pub mod parser;
pub mod schema;
pub mod util;

// Re-export key types for convenient access
pub use loader::{load, load_default, load_rules, LoadError};
pub use options::LoadOptions;
pub use parser::{parse_str, ParseError, TagSpec};
pub use schema::{EnvSchema, FieldFailure, FieldRule, SchemaMap, ValidationReport};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_envtag() {
        assert_eq!(NAME, "envtag");
    }
}
