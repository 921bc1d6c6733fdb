//! Code generation configuration.
//!
//! Example `pyrs.toml`:
//! ```toml
//! on_error = "skip-and-report"
//! parallel = true
//! ```

use serde::Deserialize;
use std::path::Path;

/// What to do when a top-level construct fails to translate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Stop at the first failing construct.
    #[default]
    Abort,
    /// Omit failing constructs and report them alongside the output.
    SkipAndReport,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    pub on_error: ErrorPolicy,
    /// Translate top-level constructs on the rayon pool. Output order is
    /// unaffected.
    pub parallel: bool,
}

impl CodegenConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a file path. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }
}
