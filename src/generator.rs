//! End-to-end generation: load records, convert, aggregate, write

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::catalogue::{Catalogue, CatalogueSummary, OutputStyle};
use crate::config::GeneratorConfig;
use crate::convert::Converter;
use crate::error::Result;
use crate::offering::OfferingsFile;
use crate::participants::ParticipantRegistry;

/// Fully resolved settings for one generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub base_url: String,
    pub seed: Option<u64>,
    pub style: OutputStyle,
    pub images: Vec<String>,
    pub extra_providers: Vec<String>,
}

impl From<&GeneratorConfig> for GenerateOptions {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            input: config.input_path(),
            output: config.output_path(),
            base_url: config.base_url().to_string(),
            seed: config.seed,
            style: if config.pretty {
                OutputStyle::Pretty
            } else {
                OutputStyle::Compact
            },
            images: config.image_pool(),
            extra_providers: config.extra_providers.clone(),
        }
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self::from(&GeneratorConfig::default())
    }
}

/// What a run produced
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub records: usize,
    pub summary: CatalogueSummary,
}

impl GenerateOptions {
    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Build the catalogue in memory without touching the output path
    pub fn build(&self) -> Result<(Catalogue, usize)> {
        let input = OfferingsFile::from_file(&self.input)?;
        info!(
            path = %self.input.display(),
            records = input.results.len(),
            "loaded offerings"
        );

        let registry =
            ParticipantRegistry::new().with_extra_providers(self.extra_providers.iter());
        let providers = registry.provider_ids().map(str::to_string).collect();
        let mut converter =
            Converter::new(&self.base_url, providers, self.images.clone(), self.rng())?;

        let catalogue = Catalogue::generate(&registry, &mut converter, &input.results);
        Ok((catalogue, input.results.len()))
    }

    /// Build and write the catalogue
    pub fn run(&self) -> Result<GenerateReport> {
        let (catalogue, records) = self.build()?;
        catalogue.write_to(&self.output, self.style)?;
        Ok(GenerateReport {
            output: self.output.clone(),
            records,
            summary: catalogue.summary(),
        })
    }
}
