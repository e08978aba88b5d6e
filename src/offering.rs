//! Input offering records
//!
//! Reference: the `results` array of an offerings listing export.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{CatalogueError, Result};

/// Top-level input file wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct OfferingsFile {
    pub results: Vec<OfferingRecord>,
}

/// One offering as exported by the listing service. Extra fields are ignored.
///
/// `title` and `created_at` feed ids and dates so they must be strings.
/// Description and keyword items are copied into the graph verbatim, so any
/// JSON value (including `null`) is accepted for them.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OfferingRecord {
    pub title: String,
    pub short_description: Value,
    pub keyword: Vec<Value>,
    /// ISO-8601 timestamp, e.g. `2024-03-01T10:00:00Z`
    pub created_at: String,
}

impl OfferingRecord {
    /// Title lower-cased with spaces replaced by dashes
    pub fn slug(&self) -> String {
        self.title.to_lowercase().replace(' ', "-")
    }

    /// Date part of `created_at` (everything before the first `T`)
    pub fn created_date(&self) -> &str {
        self.created_at
            .split('T')
            .next()
            .unwrap_or(&self.created_at)
    }

    /// Whether [`Self::created_date`] is a real `YYYY-MM-DD` calendar date
    pub fn has_valid_date(&self) -> bool {
        NaiveDate::parse_from_str(self.created_date(), "%Y-%m-%d").is_ok()
    }
}

impl OfferingsFile {
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Load the offerings listing from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogueError::io(path, e))?;
        Self::from_json(&content).map_err(|e| CatalogueError::json(path, e))
    }
}
