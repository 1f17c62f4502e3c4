//! Remote API configuration.
//!
//! The defaults point at TMDB v3. The API key is baked in at build time from
//! `TMDB_API_KEY` and can be replaced by the shell in the `Startup` event.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

use crate::capabilities::{HttpError, ValidatedUrl};

pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const DEFAULT_LANGUAGE: &str = "en-US";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field}: {source}")]
    InvalidUrl {
        field: &'static str,
        #[source]
        source: HttpError,
    },

    #[error("language cannot be empty")]
    EmptyLanguage,
}

/// API key sent as the `api_key` query parameter. Redacted in `Debug`.
#[derive(Deserialize)]
#[serde(transparent)]
pub struct ApiKey(SecretString);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(SecretString::new(key.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    pub fn is_empty(&self) -> bool {
        self.expose().is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    #[serde(default = "default_language")]
    pub language: String,
    pub api_key: ApiKey,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_image_base_url() -> String {
    DEFAULT_IMAGE_BASE_URL.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
            language: default_language(),
            api_key: ApiKey::new(api_key),
        }
    }

    /// Config with the key captured from `TMDB_API_KEY` at compile time.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("TMDB_API_KEY").unwrap_or_default())
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("base_url", &self.base_url)?;
        check_url("image_base_url", &self.image_base_url)?;
        if self.language.trim().is_empty() {
            return Err(ConfigError::EmptyLanguage);
        }
        Ok(())
    }

    /// Full poster URL for a TMDB `poster_path` such as `/abc.jpg`.
    pub fn poster_url(&self, poster_path: &str) -> String {
        format!(
            "{}/{}",
            self.image_base_url.trim_end_matches('/'),
            poster_path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

fn check_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    ValidatedUrl::new(value)
        .map(|_| ())
        .map_err(|source| ConfigError::InvalidUrl { field, source })
}
