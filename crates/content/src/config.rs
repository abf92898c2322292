//! Content store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `LANDING_DATA_DIR` - Directory holding the store files (default: `.landing`)
//! - `LANDING_SEED_URL` - HTTP(S) URL of the seed document (takes precedence)
//! - `LANDING_SEED_PATH` - Seed file path (default: `crates/content/seed/data.json`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

use crate::seed::{AnySeed, FileSeed, HttpSeed};

const DEFAULT_DATA_DIR: &str = ".landing";
const DEFAULT_SEED_PATH: &str = "crates/content/seed/data.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Where the seed document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedLocation {
    /// A local JSON file.
    File(PathBuf),
    /// An HTTP(S) URL.
    Url(Url),
}

impl SeedLocation {
    /// Interpret `value` as a URL if it has an `http`/`https` scheme, else a path.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match Url::parse(value) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Url(url),
            _ => Self::File(PathBuf::from(value)),
        }
    }

    /// Build the matching seed source.
    #[must_use]
    pub fn into_source(self) -> AnySeed {
        match self {
            Self::File(path) => AnySeed::File(FileSeed::new(path)),
            Self::Url(url) => AnySeed::Http(HttpSeed::new(url)),
        }
    }
}

/// Content store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    /// Directory of the file-backed store
    pub data_dir: PathBuf,
    /// Seed document location
    pub seed: SeedLocation,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            seed: SeedLocation::File(PathBuf::from(DEFAULT_SEED_PATH)),
        }
    }
}

impl ContentConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `LANDING_SEED_URL` is not a valid HTTP(S) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("LANDING_DATA_DIR", DEFAULT_DATA_DIR));

        let seed = match get_optional_env("LANDING_SEED_URL") {
            Some(raw) => SeedLocation::Url(parse_seed_url(&raw)?),
            None => SeedLocation::File(PathBuf::from(get_env_or_default(
                "LANDING_SEED_PATH",
                DEFAULT_SEED_PATH,
            ))),
        };

        Ok(Self { data_dir, seed })
    }
}

fn parse_seed_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar("LANDING_SEED_URL".to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            "LANDING_SEED_URL".to_string(),
            format!("unsupported scheme: {}", url.scheme()),
        ));
    }
    Ok(url)
}

fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}
