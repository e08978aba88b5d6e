//! Generator configuration
//!
//! Loaded from an optional YAML file. Every field is optional; command-line
//! flags and environment variables take precedence over file values.
//!
//! ```yaml
//! input: data/offerings.json
//! output: out/catalogue.jsonld
//! base_url: https://sedimark.surrey.ac.uk
//! seed: 42
//! pretty: true
//! images:
//!   - https://picsum.photos/200
//!   - ""
//! extra_providers:
//!   - https://example.org/ecosystem/Acme
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::convert::DEFAULT_BASE_URL;
use crate::error::{CatalogueError, Result};
use crate::images;

/// Default input path
pub const DEFAULT_INPUT: &str = "offerings.json";

/// Default output path
pub const DEFAULT_OUTPUT: &str = "catalogue.jsonld";

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub base_url: Option<String>,
    /// Fixed RNG seed for reproducible output
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub pretty: bool,
    /// Replaces the built-in image pool
    #[serde(default)]
    pub images: Option<Vec<String>>,
    /// Appended to the built-in provider pool
    #[serde(default)]
    pub extra_providers: Vec<String>,
}

impl GeneratorConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogueError::io(path, e))?;
        serde_yaml::from_str(&content).map_err(|source| CatalogueError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn input_path(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn image_pool(&self) -> Vec<String> {
        self.images.clone().unwrap_or_else(images::default_pool)
    }
}
