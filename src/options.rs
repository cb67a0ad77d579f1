//! Loader options

use std::path::PathBuf;

/// Default env file path, relative to the working directory
pub const DEFAULT_ENV_PATH: &str = ".env";

/// Options controlling where the annotated env file is loaded from
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Path to the annotated env file
    pub env_path: PathBuf,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            env_path: PathBuf::from(DEFAULT_ENV_PATH),
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the env file path
    pub fn with_env_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_path = path.into();
        self
    }
}
