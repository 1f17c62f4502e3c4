use serde::{Deserialize, Serialize};

use crate::capabilities::HttpError;

/// The user-visible operation an error belongs to. Every failure of the same
/// operation surfaces as the same message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    FetchMovies,
    SearchMovies,
    FetchMovieDetails,
}

impl Operation {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::FetchMovies => "FETCH_MOVIES_FAILED",
            Self::SearchMovies => "SEARCH_MOVIES_FAILED",
            Self::FetchMovieDetails => "FETCH_MOVIE_DETAILS_FAILED",
        }
    }

    #[must_use]
    pub const fn user_facing_message(self) -> &'static str {
        match self {
            Self::FetchMovies => "Failed to fetch movies. Please try again later.",
            Self::SearchMovies => "Failed to search movies. Please try again later.",
            Self::FetchMovieDetails => "Failed to load movie details.",
        }
    }
}

/// Error recorded in state after a failed fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppError {
    pub operation: Operation,
    /// Cause for logs; never shown to the user.
    pub internal_message: String,
    pub http_status: Option<u16>,
}

impl AppError {
    #[must_use]
    pub fn new(operation: Operation, internal: impl Into<String>) -> Self {
        Self {
            operation,
            internal_message: internal.into(),
            http_status: None,
        }
    }

    #[must_use]
    pub fn from_http(operation: Operation, error: &HttpError) -> Self {
        Self {
            operation,
            internal_message: error.to_string(),
            http_status: error.status(),
        }
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.operation.code()
    }

    #[must_use]
    pub const fn user_facing_message(&self) -> &'static str {
        self.operation.user_facing_message()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.internal_message)
    }
}

impl std::error::Error for AppError {}
