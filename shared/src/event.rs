use serde::Deserialize;

use crate::capabilities::{HttpResult, KvResult};
use crate::config::ApiConfig;
use crate::model::{Credits, Generation, GenreId, Movie, MovieId, MoviePage, Route};

#[derive(Deserialize, Debug)]
pub enum Event {
    Noop,

    /// Sent once by the shell. `prefers_dark` is the platform's ambient
    /// colour-scheme preference.
    Startup {
        prefers_dark: bool,
        #[serde(default)]
        config: Option<Box<ApiConfig>>,
    },

    // Movie list
    FetchMovies,
    SearchMovies {
        query: String,
    },
    SetPage {
        page: u32,
    },
    SetItemsPerPage {
        items: u32,
    },
    SetGenre {
        genre: GenreId,
    },
    SelectMovie {
        movie_id: Option<MovieId>,
    },

    // Details
    FetchMovieDetails {
        movie_id: MovieId,
    },
    Navigate(Route),

    // Search bar
    SearchQueryChanged {
        query: String,
    },
    SuggestionSelected {
        movie_id: MovieId,
    },

    // Preferences
    ToggleTheme,
    ToggleSidebar,
    SetSidebarOpen {
        open: bool,
    },
    ToggleSearchOverlay,
    SetSearchOverlayOpen {
        open: bool,
    },

    // Capability responses (boxed to keep enum size small)
    #[serde(skip)]
    MoviesFetched {
        generation: Generation,
        result: Box<HttpResult<MoviePage>>,
    },
    #[serde(skip)]
    MoviesSearched {
        generation: Generation,
        result: Box<HttpResult<MoviePage>>,
    },
    #[serde(skip)]
    MovieDetailsFetched {
        generation: Generation,
        result: Box<HttpResult<Movie>>,
    },
    #[serde(skip)]
    CreditsFetched {
        generation: Generation,
        result: Box<HttpResult<Credits>>,
    },
    #[serde(skip)]
    SuggestionsFetched {
        generation: Generation,
        result: Box<HttpResult<MoviePage>>,
    },
    #[serde(skip)]
    ThemeLoaded(KvResult<Option<String>>),
    #[serde(skip)]
    ThemePersisted(KvResult<()>),
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::Startup { .. } => "startup",
            Self::FetchMovies => "fetch_movies",
            Self::SearchMovies { .. } => "search_movies",
            Self::SetPage { .. } => "set_page",
            Self::SetItemsPerPage { .. } => "set_items_per_page",
            Self::SetGenre { .. } => "set_genre",
            Self::SelectMovie { .. } => "select_movie",
            Self::FetchMovieDetails { .. } => "fetch_movie_details",
            Self::Navigate(_) => "navigate",
            Self::SearchQueryChanged { .. } => "search_query_changed",
            Self::SuggestionSelected { .. } => "suggestion_selected",
            Self::ToggleTheme => "toggle_theme",
            Self::ToggleSidebar => "toggle_sidebar",
            Self::SetSidebarOpen { .. } => "set_sidebar_open",
            Self::ToggleSearchOverlay => "toggle_search_overlay",
            Self::SetSearchOverlayOpen { .. } => "set_search_overlay_open",
            Self::MoviesFetched { .. } => "movies_fetched",
            Self::MoviesSearched { .. } => "movies_searched",
            Self::MovieDetailsFetched { .. } => "movie_details_fetched",
            Self::CreditsFetched { .. } => "credits_fetched",
            Self::SuggestionsFetched { .. } => "suggestions_fetched",
            Self::ThemeLoaded(_) => "theme_loaded",
            Self::ThemePersisted(_) => "theme_persisted",
        }
    }

    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        matches!(
            self,
            Self::FetchMovies
                | Self::SearchMovies { .. }
                | Self::SetPage { .. }
                | Self::SetItemsPerPage { .. }
                | Self::SetGenre { .. }
                | Self::SelectMovie { .. }
                | Self::FetchMovieDetails { .. }
                | Self::Navigate(_)
                | Self::SearchQueryChanged { .. }
                | Self::SuggestionSelected { .. }
                | Self::ToggleTheme
                | Self::ToggleSidebar
                | Self::SetSidebarOpen { .. }
                | Self::ToggleSearchOverlay
                | Self::SetSearchOverlayOpen { .. }
        )
    }
}

impl Default for Event {
    fn default() -> Self {
        Self::Noop
    }
}
