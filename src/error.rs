//! Error types for catalogue generation
//!
//! Library code returns [`CatalogueError`]; the binary wraps it in
//! `anyhow` with command-level context.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main error type for the catalogue generator
#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid base URL '{value}': {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("The {0} pool is empty, nothing to choose from")]
    EmptyPool(&'static str),

    #[error("Malformed catalogue: {0}")]
    MalformedCatalogue(String),
}

impl CatalogueError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        CatalogueError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn json(path: &Path, source: serde_json::Error) -> Self {
        CatalogueError::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, CatalogueError>;
