//! Error types for template graph extraction.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur while loading or scanning a template.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Template not found: {0}")]
    TemplateNotFound(PathBuf),

    #[error("Failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template parse error: no top-level `{0}:` section")]
    MissingSection(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl GraphError {
    /// Whether the template itself could not be scanned.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, GraphError::MissingSection(_))
    }

    /// Whether the error came from reading a file.
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            GraphError::TemplateNotFound(_) | GraphError::Io { .. }
        )
    }

    /// Whether the error came from a configuration file.
    pub fn is_config_error(&self) -> bool {
        matches!(self, GraphError::Config(_) | GraphError::Yaml(_))
    }
}
