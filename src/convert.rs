//! Offering record → linked-data nodes
//!
//! Each record becomes a `vocab:DataAsset` node and a `sedi:Offering` node
//! that points at it. Creator/publisher and image are drawn at random.

use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::{json, Value};
use tracing::{debug, warn};
use url::Url;

use crate::error::{CatalogueError, Result};
use crate::images::{classify, ImageKind};
use crate::offering::OfferingRecord;
use crate::vocab::{self, DATA_ASSET, OFFERING};

/// Base IRI for generated nodes
pub const DEFAULT_BASE_URL: &str = "https://sedimark.surrey.ac.uk";

/// Output of converting one record
#[derive(Debug, Clone)]
pub struct ConvertedOffering {
    pub asset: Value,
    pub offering: Value,
    pub provider: String,
    pub image: String,
}

impl ConvertedOffering {
    /// Asset first, then offering
    pub fn into_nodes(self) -> [Value; 2] {
        [self.asset, self.offering]
    }
}

/// Validate a base IRI and strip trailing slashes
pub fn normalize_base_url(value: &str) -> Result<String> {
    Url::parse(value).map_err(|source| CatalogueError::InvalidBaseUrl {
        value: value.to_string(),
        source,
    })?;
    Ok(value.trim_end_matches('/').to_string())
}

/// Maps records to nodes, owning the random source
pub struct Converter<R> {
    base_url: String,
    providers: Vec<String>,
    images: Vec<String>,
    rng: R,
}

impl<R: Rng> Converter<R> {
    pub fn new(
        base_url: &str,
        providers: Vec<String>,
        images: Vec<String>,
        rng: R,
    ) -> Result<Self> {
        if providers.is_empty() {
            return Err(CatalogueError::EmptyPool("provider"));
        }
        if images.is_empty() {
            return Err(CatalogueError::EmptyPool("image"));
        }
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            providers,
            images,
            rng,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn asset_id(&self, slug: &str) -> String {
        format!("{}/asset/{}", self.base_url, slug)
    }

    pub fn offering_id(&self, slug: &str) -> String {
        format!("{}/ecosystem/{}-offering", self.base_url, slug)
    }

    /// Convert one record. Provider is drawn before image.
    pub fn convert(&mut self, record: &OfferingRecord) -> ConvertedOffering {
        // Pools are checked non-empty in `new`
        let provider = self
            .providers
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_default();
        let image = self
            .images
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_default();

        let slug = record.slug();
        let asset_id = self.asset_id(&slug);
        let offering_id = self.offering_id(&slug);
        let created = record.created_date();

        if !record.has_valid_date() {
            warn!(title = %record.title, created_at = %record.created_at, "created_at is not a calendar date");
        }
        if classify(&image) == ImageKind::Invalid {
            warn!(%asset_id, %image, "attaching invalid image reference");
        }

        let keywords: Vec<Value> = record.keyword.iter().cloned().map(vocab::lang_en).collect();

        let mut asset = json!({
            "@id": asset_id,
            "@type": vocab::typed(DATA_ASSET),
            "dct:identifier": vocab::literal(slug.as_str()),
            "dct:creator": vocab::id_ref(&provider),
            "dct:publisher": vocab::id_ref(&provider),
            "dct:title": vocab::literal(record.title.as_str()),
            "dct:description": vocab::literal(record.short_description.clone()),
            "dcat:keyword": keywords,
            "dct:created": vocab::xsd_date(created),
        });
        if !image.is_empty() {
            asset["schema:image"] = vocab::id_ref(&image);
        }

        let offering = json!({
            "@id": offering_id,
            "@type": vocab::typed(OFFERING),
            "dct:title": vocab::literal(record.title.as_str()),
            "dct:description": vocab::literal(record.short_description.clone()),
            "dct:creator": vocab::id_ref(&provider),
            "dct:publisher": vocab::id_ref(&provider),
            "sedi:hasAsset": vocab::id_ref(&asset_id),
            "dct:created": vocab::xsd_date(created),
        });

        debug!(%offering_id, %provider, image = %image, "converted offering");

        ConvertedOffering {
            asset,
            offering,
            provider,
            image,
        }
    }
}
