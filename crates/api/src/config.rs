use std::time::Duration;

use persons_enrichment::EnrichmentConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Postgres connection string.
    pub database_url: String,
    /// Predictor endpoints and their timeout.
    pub enrichment: EnrichmentConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                      |
    /// |---------------------------|------------------------------|
    /// | `HOST`                    | `0.0.0.0`                    |
    /// | `PORT`                    | `8080`                       |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`      |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                         |
    /// | `DATABASE_URL`            | built from `DB_*` variables  |
    /// | `API_AGIFY_URL`           | `https://api.agify.io`       |
    /// | `API_GENDERIZE_URL`       | `https://api.genderize.io`   |
    /// | `API_NATIONALIZE_URL`     | `https://api.nationalize.io` |
    /// | `ENRICHMENT_TIMEOUT_SECS` | `3`                          |
    ///
    /// Panics on malformed numeric values so misconfiguration fails at
    /// startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            database_url_from_parts(
                &env_or("DB_HOST", "localhost"),
                &env_or("DB_PORT", "5432"),
                &env_or("DB_USER", "postgres"),
                &env_or("DB_PASSWORD", "postgres"),
                &env_or("DB_NAME", "persons"),
            )
        });

        let enrichment = enrichment_from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            enrichment,
        }
    }
}

/// Predictor URLs and timeout from `API_*_URL` / `ENRICHMENT_TIMEOUT_SECS`.
fn enrichment_from_env() -> EnrichmentConfig {
    let defaults = EnrichmentConfig::default();

    let timeout_secs: u64 = std::env::var("ENRICHMENT_TIMEOUT_SECS")
        .unwrap_or_else(|_| defaults.timeout.as_secs().to_string())
        .parse()
        .expect("ENRICHMENT_TIMEOUT_SECS must be a valid u64");

    EnrichmentConfig {
        agify_url: env_or("API_AGIFY_URL", &defaults.agify_url),
        genderize_url: env_or("API_GENDERIZE_URL", &defaults.genderize_url),
        nationalize_url: env_or("API_NATIONALIZE_URL", &defaults.nationalize_url),
        timeout: Duration::from_secs(timeout_secs),
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Compose a `postgres://` URL from discrete connection settings.
pub fn database_url_from_parts(
    host: &str,
    port: &str,
    user: &str,
    password: &str,
    name: &str,
) -> String {
    format!("postgres://{user}:{password}@{host}:{port}/{name}")
}
