use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::config::ApiConfig;
use crate::model::{GenreId, MovieId};

pub const MAX_URL_LENGTH: usize = 2048;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidatedUrl {
    url: String,
}

impl ValidatedUrl {
    pub fn new(url: impl Into<String>) -> Result<Self, HttpError> {
        let url = url.into();
        let parsed = Self::validate(&url)?;
        Ok(Self::from_parsed(&parsed))
    }

    fn from_parsed(parsed: &Url) -> Self {
        Self {
            url: parsed.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// The URL without its query string, safe to log.
    pub fn redacted(&self) -> &str {
        self.url.split('?').next().unwrap_or_default()
    }

    fn validate(url: &str) -> Result<Url, HttpError> {
        if url.trim().is_empty() {
            return Err(HttpError::InvalidUrl {
                url: String::new(),
                reason: "URL cannot be empty".to_string(),
            });
        }

        if url.len() > MAX_URL_LENGTH {
            return Err(HttpError::InvalidUrl {
                url: Self::truncate_url(url),
                reason: format!("URL exceeds maximum length of {MAX_URL_LENGTH} bytes"),
            });
        }

        let parsed = Url::parse(url).map_err(|e| HttpError::InvalidUrl {
            url: Self::truncate_url(url),
            reason: e.to_string(),
        })?;

        let scheme = parsed.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(HttpError::InvalidUrl {
                url: Self::truncate_url(url),
                reason: format!("invalid scheme '{scheme}', only 'http' and 'https' are allowed"),
            });
        }

        if parsed.host_str().is_none() {
            return Err(HttpError::InvalidUrl {
                url: Self::truncate_url(url),
                reason: "URL must have a host".to_string(),
            });
        }

        if !parsed.username().is_empty() || parsed.password().is_some() {
            return Err(HttpError::InvalidUrl {
                url: Self::truncate_url(url),
                reason: "credentials in URL are not allowed".to_string(),
            });
        }

        Ok(parsed)
    }

    fn truncate_url(url: &str) -> String {
        let without_query = url.split('?').next().unwrap_or_default();
        if without_query.len() <= 100 {
            without_query.to_string()
        } else {
            let cut: String = without_query.chars().take(100).collect();
            format!("{cut}...")
        }
    }
}

/// The remote API operations the core consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Discover { genre: GenreId, page: u32 },
    Search { query: &'a str },
    MovieDetails { id: MovieId },
    Credits { id: MovieId },
}

impl Endpoint<'_> {
    fn path(&self) -> String {
        match self {
            Self::Discover { .. } => "discover/movie".to_string(),
            Self::Search { .. } => "search/movie".to_string(),
            Self::MovieDetails { id } => format!("movie/{id}"),
            Self::Credits { id } => format!("movie/{id}/credits"),
        }
    }

    /// Fails without building anything when `config` does not validate.
    pub fn url(&self, config: &ApiConfig) -> Result<ValidatedUrl, HttpError> {
        config.validate().map_err(|e| HttpError::InvalidConfig {
            reason: e.to_string(),
        })?;
        let base = ValidatedUrl::validate(&config.base_url)?;
        let mut url = base.join(&format!("{}/", base.path().trim_end_matches('/')))
            .and_then(|dir| dir.join(&self.path()))
            .map_err(|e| HttpError::InvalidUrl {
                url: ValidatedUrl::truncate_url(&config.base_url),
                reason: e.to_string(),
            })?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("api_key", config.api_key.expose());
            match self {
                Self::Discover { genre, page } => {
                    query.append_pair("page", &page.to_string());
                    query.append_pair("with_genres", &genre.to_string());
                }
                Self::Search { query: text } => {
                    query.append_pair("query", text);
                }
                Self::MovieDetails { .. } | Self::Credits { .. } => {}
            }
            query.append_pair("language", &config.language);
        }

        if url.as_str().len() > MAX_URL_LENGTH {
            return Err(HttpError::InvalidUrl {
                url: ValidatedUrl::truncate_url(url.as_str()),
                reason: format!("URL exceeds maximum length of {MAX_URL_LENGTH} bytes"),
            });
        }

        Ok(ValidatedUrl::from_parsed(&url))
    }
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum HttpError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid API configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP error {code}")]
    Status { code: u16 },

    #[error("response had no body")]
    EmptyBody,

    #[error("unexpected response: {reason}")]
    Schema { reason: String },
}

impl HttpError {
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { code } => Some(*code),
            _ => None,
        }
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

/// Turns a completed `crux_http` request into the decoded body. A non-2xx
/// status is an error even when the body happens to decode.
pub fn read_json<T>(result: crux_http::Result<crux_http::Response<T>>) -> HttpResult<T> {
    match result {
        Ok(mut response) => {
            let status = response.status();
            if !status.is_success() {
                return Err(HttpError::Status {
                    code: u16::from(status),
                });
            }
            response.take_body().ok_or(HttpError::EmptyBody)
        }
        Err(e) => Err(HttpError::Transport(e.to_string())),
    }
}
