//! Annotated-env parsing
//!
//! A single pass over the file associates each `// type` tag comment with the
//! variable declared on the following line and produces a [`SchemaMap`]
//! describing every declared variable.
//!
//! [`SchemaMap`]: crate::schema::SchemaMap

pub mod scan;
pub mod tag;

pub use scan::parse_str;
pub use tag::TagSpec;

use thiserror::Error;

/// Errors produced while parsing annotated env content
///
/// Every variant carries the 1-based line number the parser stopped at.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid type tag syntax on line {line}: \"{text}\"")]
    InvalidTypeTagSyntax { line: usize, text: String },

    #[error("Invalid env variable syntax on line {line}: \"{text}\"")]
    InvalidVariableSyntax { line: usize, text: String },

    #[error("Missing type tag for env variable \"{key}\" on line {line}")]
    MissingTypeTag { line: usize, key: String },

    #[error("Unknown type tag \"{tag}\" for key \"{key}\" on line {line}")]
    UnknownTypeTag {
        line: usize,
        tag: String,
        key: String,
    },

    #[error("Enum type must have allowed values for key \"{key}\" on line {line}")]
    EnumMissingValues { line: usize, key: String },
}

impl ParseError {
    /// The 1-based line number the error occurred on
    pub fn line(&self) -> usize {
        match self {
            ParseError::InvalidTypeTagSyntax { line, .. }
            | ParseError::InvalidVariableSyntax { line, .. }
            | ParseError::MissingTypeTag { line, .. }
            | ParseError::UnknownTypeTag { line, .. }
            | ParseError::EnumMissingValues { line, .. } => *line,
        }
    }
}
