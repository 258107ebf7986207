//! Best-effort demographic enrichment from agify / genderize / nationalize
//! compatible HTTP services.
//!
//! [`EnrichmentClient`] exposes one method per predictor plus
//! [`EnrichmentClient::enrich`], which runs all three and never fails.

pub mod client;

pub use client::{Enrichment, EnrichmentClient, EnrichmentConfig, EnrichmentError};
