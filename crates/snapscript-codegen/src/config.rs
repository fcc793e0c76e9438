//! Translation options
//!
//! Options can be built in code or loaded from a YAML file such as:
//!
//! ```yaml
//! artifact_prefix: product
//! python: python3
//! snappy_module: esa_snappy
//! progress_messages: false
//! ```
//!
//! Every field is optional and falls back to its default.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::artifacts::DEFAULT_PREFIX;
use crate::error::{Error, Result};

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

static MODULE_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*$").unwrap());

/// Python dialect of the generated script
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PythonVersion {
    /// `print 'message'`
    #[default]
    Python2,
    /// `print('message')`
    Python3,
}

/// Options controlling the generated script
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TranslateOptions {
    /// Prefix of the generated artifact variables
    pub artifact_prefix: String,

    /// Dialect used for progress messages
    pub python: PythonVersion,

    /// Module providing `ProductIO`, `HashMap`, `GPF` and `jpy`
    pub snappy_module: String,

    /// Whether each block reports completion with a `print`
    pub progress_messages: bool,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            artifact_prefix: DEFAULT_PREFIX.to_string(),
            python: PythonVersion::default(),
            snappy_module: "snappy".to_string(),
            progress_messages: true,
        }
    }
}

impl TranslateOptions {
    /// Load options from a YAML file
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let options = TranslateOptions::load("snapscript.yaml")?;
    /// println!("Prefix: {}", options.artifact_prefix);
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let options = Self::from_yaml(&contents)?;
        tracing::debug!("Loaded translation options from {}", path.display());
        Ok(options)
    }

    /// Parse and validate options from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a map
        let options: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        options.validate()?;
        Ok(options)
    }

    /// Check that the configured names are usable in generated code
    pub fn validate(&self) -> Result<()> {
        if !IDENTIFIER.is_match(&self.artifact_prefix) {
            return Err(Error::ConfigInvalid {
                message: format!(
                    "artifact_prefix '{}' is not a valid identifier",
                    self.artifact_prefix
                ),
            });
        }
        if !MODULE_PATH.is_match(&self.snappy_module) {
            return Err(Error::ConfigInvalid {
                message: format!(
                    "snappy_module '{}' is not a valid module path",
                    self.snappy_module
                ),
            });
        }
        Ok(())
    }
}
