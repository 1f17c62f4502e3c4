use serde::{Deserialize, Serialize};
use std::{fmt, num::ParseIntError, str::FromStr};

use crate::config::ApiConfig;
use crate::details::MovieDetailsState;
use crate::movies::MovieListState;
use crate::search::SearchState;
use crate::theme::ThemeState;
use crate::ui::UiState;

// --- Typed IDs ---

macro_rules! numeric_id {
    ($name:ident, $repr:ty) => {
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub $repr);

        impl $name {
            #[must_use]
            pub const fn get(self) -> $repr {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

numeric_id!(MovieId, u64);
numeric_id!(GenreId, u32);

/// Action. The catalog opens on this genre.
pub const DEFAULT_GENRE: GenreId = GenreId(28);

/// Identifies one issued request. Only the newest generation of a state
/// module may write its response into that module.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

// --- Domain types ---

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

/// One entry of the discover/search endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub genre_ids: Vec<GenreId>,
}

impl MovieSummary {
    #[must_use]
    pub fn has_genre(&self, genre: GenreId) -> bool {
        self.genre_ids.contains(&genre)
    }
}

/// Full record from the movie detail endpoint. Replaced wholesale, never
/// patched field by field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: String,
}

// --- Wire schemas ---

/// Body of `/discover/movie` and `/search/movie`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoviePage {
    #[serde(default)]
    pub page: u32,
    pub results: Vec<MovieSummary>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// Body of `/movie/{id}/credits`. Crew is not consumed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credits {
    pub id: MovieId,
    pub cast: Vec<CastMember>,
}

// --- Routing ---

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    #[default]
    Home,
    MovieDetails { id: MovieId },
}

impl Route {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::MovieDetails { id } => format!("/movielist/{id}"),
        }
    }

    /// Parses the paths produced by [`Route::path`].
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        if path.is_empty() {
            return Some(Self::Home);
        }
        let id = path.strip_prefix("/movielist/")?.parse().ok()?;
        Some(Self::MovieDetails { id })
    }
}

// --- Model ---

#[derive(Debug, Default)]
pub struct Model {
    pub config: ApiConfig,
    pub route: Route,
    pub prefers_dark: bool,

    pub movies: MovieListState,
    pub details: MovieDetailsState,
    pub search: SearchState,
    pub theme: ThemeState,
    pub ui: UiState,
}
