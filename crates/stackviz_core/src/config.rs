//! Extraction configuration.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{GraphError, GraphResult};

/// Strategy used to find the resource that owns a reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ownership {
    /// Nearest preceding two-space-indented key line.
    #[default]
    Proximity,
    /// Byte ranges of each declaration inside the resource section.
    Block,
}

impl fmt::Display for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ownership::Proximity => write!(f, "proximity"),
            Ownership::Block => write!(f, "block"),
        }
    }
}

/// Settings for building and rendering a dependency graph.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub ownership: Ownership,
    /// Print the per-kind resource counts after the edges.
    pub show_summary: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            ownership: Ownership::default(),
            show_summary: true,
        }
    }
}

impl GraphConfig {
    pub fn with_ownership(mut self, ownership: Ownership) -> Self {
        self.ownership = ownership;
        self
    }

    pub fn with_summary(mut self, show_summary: bool) -> Self {
        self.show_summary = show_summary;
        self
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: &Path) -> GraphResult<Self> {
        debug!("Loading configuration from {:?}", path);
        let content = fs::read_to_string(path).map_err(|e| {
            GraphError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: GraphConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GraphConfig::default();
        assert_eq!(config.ownership, Ownership::Proximity);
        assert!(config.show_summary);
    }

    #[test]
    fn test_ownership_display() {
        assert_eq!(Ownership::Block.to_string(), "block");
        assert_eq!(Ownership::Proximity.to_string(), "proximity");
    }

    #[test]
    fn test_missing_config_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GraphConfig::from_file(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, GraphError::Config(ref msg) if msg.contains("absent.yaml")));
        assert!(err.is_config_error());
        assert!(!err.is_io_error());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: GraphConfig = serde_yaml::from_str("ownership: block\n").unwrap();
        assert_eq!(config.ownership, Ownership::Block);
        assert!(config.show_summary);
    }
}
