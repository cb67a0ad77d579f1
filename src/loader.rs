//! Loading pipeline from env file to compiled schema
//!
//! [`load`] is the crate entry point: it resolves the file from
//! [`LoadOptions`], reads it, parses the annotations and compiles the
//! resulting schema. [`load_rules`] stops after parsing for callers that only
//! need the rule table.

use crate::options::LoadOptions;
use crate::parser::{self, ParseError};
use crate::schema::{EnvSchema, SchemaMap};
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Env file not found at path: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read env file {path}: {source}")]
    ReadFailed { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Reads and parses the annotated env file into its rule table
pub fn load_rules(options: &LoadOptions) -> Result<SchemaMap, LoadError> {
    let path = &options.env_path;
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.clone()));
    }

    let content = fs::read_to_string(path).map_err(|source| LoadError::ReadFailed {
        path: path.clone(),
        source,
    })?;
    debug!("Read {} bytes from {}", content.len(), path.display());

    let rules = parser::parse_str(&content)?;
    Ok(rules)
}

/// Loads the annotated env file and compiles it into a validator
pub fn load(options: &LoadOptions) -> Result<EnvSchema, LoadError> {
    let rules = load_rules(options)?;
    Ok(EnvSchema::compile(rules))
}

/// Loads from the default `.env` path
pub fn load_default() -> Result<EnvSchema, LoadError> {
    load(&LoadOptions::default())
}
