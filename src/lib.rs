//! SEDIMARK mock catalogue generator
//!
//! Reads offering records from a JSON listing, turns each into a
//! `vocab:DataAsset` / `sedi:Offering` node pair with a randomly drawn
//! provider and image, and writes everything as one JSON-LD graph next to
//! a fixed set of participant nodes.
//!
//! # Example
//!
//! ```no_run
//! use sedimark_mock_catalogue::{GenerateOptions, GeneratorConfig};
//!
//! let config = GeneratorConfig { seed: Some(7), ..Default::default() };
//! let report = GenerateOptions::from(&config).run()?;
//! println!("{} offerings", report.summary.offerings);
//! # Ok::<(), sedimark_mock_catalogue::CatalogueError>(())
//! ```

pub mod catalogue;
pub mod config;
pub mod convert;
pub mod error;
pub mod generator;
pub mod images;
pub mod listing;
pub mod logging;
pub mod offering;
pub mod participants;
pub mod vocab;

pub use catalogue::{Catalogue, CatalogueSummary, OutputStyle};
pub use config::GeneratorConfig;
pub use convert::{ConvertedOffering, Converter, DEFAULT_BASE_URL};
pub use error::{CatalogueError, Result};
pub use generator::{GenerateOptions, GenerateReport};
pub use listing::{list_offerings, OfferingEntry};
pub use offering::{OfferingRecord, OfferingsFile};
pub use participants::ParticipantRegistry;
