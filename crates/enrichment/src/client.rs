//! HTTP client for the age, gender and nationality predictors.
//!
//! Each predictor is queried with `GET {url}?name={name}` and answers with a
//! small JSON document. A failed lookup (network error, timeout, non-2xx
//! status, unexpected payload) is reported as an [`EnrichmentError`];
//! [`EnrichmentClient::enrich`] turns those into absent fields.

use std::time::Duration;

use persons_core::demographics::{normalize_gender, select_nationality};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Default per-request timeout for predictor calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Base URLs of the three predictors and the per-request timeout.
#[derive(Debug, Clone)]
pub struct EnrichmentConfig {
    pub agify_url: String,
    pub genderize_url: String,
    pub nationalize_url: String,
    pub timeout: Duration,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            agify_url: "https://api.agify.io".to_string(),
            genderize_url: "https://api.genderize.io".to_string(),
            nationalize_url: "https://api.nationalize.io".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Why a single predictor lookup produced no value.
#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The predictor returned a non-2xx status code.
    #[error("Predictor returned HTTP {0}")]
    HttpStatus(u16),

    /// The response body was not the expected JSON shape.
    #[error("Invalid predictor response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The predictor answered but had no prediction for the name.
    #[error("No prediction for name")]
    NoPrediction,
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct AgeResponse {
    age: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct GenderResponse {
    gender: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NationalityResponse {
    #[serde(default)]
    country: Vec<CountryCandidate>,
}

#[derive(Debug, Deserialize)]
struct CountryCandidate {
    country_id: String,
    probability: f64,
}

// ---------------------------------------------------------------------------
// Enrichment result
// ---------------------------------------------------------------------------

/// Merged predictions for one name. Each field is independently optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Enrichment {
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Client for the three predictor services. Cheap to clone.
#[derive(Debug, Clone)]
pub struct EnrichmentClient {
    client: reqwest::Client,
    config: EnrichmentConfig,
}

impl EnrichmentClient {
    /// Build a client whose requests are bounded by `config.timeout`.
    pub fn new(config: EnrichmentConfig) -> Result<Self, EnrichmentError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Predicted age for `name`.
    pub async fn predict_age(&self, name: &str) -> Result<i32, EnrichmentError> {
        let response: AgeResponse = self.lookup(&self.config.agify_url, name).await?;
        response.age.ok_or(EnrichmentError::NoPrediction)
    }

    /// Predicted gender for `name`, normalized to `male`, `female` or `other`.
    pub async fn predict_gender(&self, name: &str) -> Result<String, EnrichmentError> {
        let response: GenderResponse = self.lookup(&self.config.genderize_url, name).await?;
        Ok(normalize_gender(response.gender.as_deref()).to_string())
    }

    /// Most probable country code for `name`, or `None` if the predictor
    /// returned no candidates.
    pub async fn predict_nationality(&self, name: &str) -> Result<Option<String>, EnrichmentError> {
        let response: NationalityResponse =
            self.lookup(&self.config.nationalize_url, name).await?;
        let selected = select_nationality(
            response
                .country
                .iter()
                .map(|c| (c.country_id.as_str(), c.probability)),
        );
        Ok(selected.map(str::to_string))
    }

    /// Run all three predictors concurrently and merge what succeeded.
    ///
    /// Never fails: a failed predictor leaves its field `None` and is logged
    /// at debug level.
    pub async fn enrich(&self, name: &str) -> Enrichment {
        let (age, gender, nationality) = tokio::join!(
            self.predict_age(name),
            self.predict_gender(name),
            self.predict_nationality(name),
        );

        let age = age
            .inspect_err(|e| tracing::debug!(name, error = %e, "Age prediction failed"))
            .ok();
        let gender = gender
            .inspect_err(|e| tracing::debug!(name, error = %e, "Gender prediction failed"))
            .ok();
        let nationality = nationality
            .inspect_err(|e| tracing::debug!(name, error = %e, "Nationality prediction failed"))
            .ok()
            .flatten();

        Enrichment {
            age,
            gender,
            nationality,
        }
    }

    // ---- private helpers ----

    /// `GET {url}?name={name}` and decode the JSON body.
    async fn lookup<T: DeserializeOwned>(&self, url: &str, name: &str) -> Result<T, EnrichmentError> {
        let response = self.client.get(url).query(&[("name", name)]).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichmentError::HttpStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
