//! Aggregated JSON-LD catalogue
//!
//! Graph layout: seed participants, provider participants, then one
//! asset/offering pair per input record in input order.

use std::path::Path;

use rand::Rng;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::convert::Converter;
use crate::error::{CatalogueError, Result};
use crate::offering::OfferingRecord;
use crate::participants::ParticipantRegistry;
use crate::vocab::{self, DATA_ASSET, OFFERING, PARTICIPANT};

/// How the catalogue is written to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    #[default]
    Compact,
    Pretty,
}

/// A JSON-LD document with a single default graph
#[derive(Debug, Clone, Serialize)]
pub struct Catalogue {
    #[serde(rename = "@graph")]
    pub graph: Vec<Value>,
    #[serde(rename = "@context")]
    pub context: Map<String, Value>,
}

/// Node counts by type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogueSummary {
    pub nodes: usize,
    pub participants: usize,
    pub assets: usize,
    pub offerings: usize,
}

impl Catalogue {
    /// Catalogue holding only the participant nodes
    pub fn with_participants(registry: &ParticipantRegistry) -> Self {
        Self {
            graph: registry.all_nodes().cloned().collect(),
            context: vocab::default_context(),
        }
    }

    /// Run every record through the converter and append the resulting nodes
    pub fn generate<R: Rng>(
        registry: &ParticipantRegistry,
        converter: &mut Converter<R>,
        records: &[OfferingRecord],
    ) -> Self {
        let mut catalogue = Self::with_participants(registry);
        for record in records {
            catalogue
                .graph
                .extend(converter.convert(record).into_nodes());
        }
        let summary = catalogue.summary();
        info!(
            records = records.len(),
            nodes = summary.nodes,
            "catalogue generated"
        );
        catalogue
    }

    pub fn summary(&self) -> CatalogueSummary {
        let count = |class: &str| {
            self.graph
                .iter()
                .filter(|node| vocab::has_type(node, class))
                .count()
        };
        CatalogueSummary {
            nodes: self.graph.len(),
            participants: count(PARTICIPANT),
            assets: count(DATA_ASSET),
            offerings: count(OFFERING),
        }
    }

    pub fn to_json(&self, style: OutputStyle) -> Result<String> {
        let out = match style {
            OutputStyle::Compact => serde_json::to_string(self)?,
            OutputStyle::Pretty => serde_json::to_string_pretty(self)?,
        };
        Ok(out)
    }

    /// Serialize to `path`, creating parent directories
    pub fn write_to(&self, path: &Path, style: OutputStyle) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| CatalogueError::io(parent, e))?;
        }
        let json = self.to_json(style)?;
        std::fs::write(path, json).map_err(|e| CatalogueError::io(path, e))?;
        info!(path = %path.display(), "catalogue written");
        Ok(())
    }

    /// Read a previously generated catalogue
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogueError::io(path, e))?;
        let value: Value =
            serde_json::from_str(&content).map_err(|e| CatalogueError::json(path, e))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut doc) = value else {
            return Err(CatalogueError::MalformedCatalogue(
                "document is not a JSON object".to_string(),
            ));
        };
        let graph = match doc.remove("@graph") {
            Some(Value::Array(nodes)) => nodes,
            Some(_) => {
                return Err(CatalogueError::MalformedCatalogue(
                    "@graph is not an array".to_string(),
                ))
            }
            None => {
                return Err(CatalogueError::MalformedCatalogue(
                    "missing @graph".to_string(),
                ))
            }
        };
        let context = match doc.remove("@context") {
            Some(Value::Object(ctx)) => ctx,
            _ => Map::new(),
        };
        Ok(Self { graph, context })
    }
}
