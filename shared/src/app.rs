use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::capabilities::{
    read_json, read_string, write_ack, Capabilities, Endpoint, HttpError, KvKey,
};
use crate::config::ApiConfig;
use crate::details::DetailsRequest;
use crate::event::Event;
use crate::model::{CastMember, Credits, Movie, MovieId, MoviePage, MovieSummary, Model, Route};
use crate::movies::{Applied, ListRequest};
use crate::search::{SuggestRequest, Suggestion};
use crate::theme::Theme;

// --- View model ---

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MovieCard {
    pub id: MovieId,
    pub title: String,
    pub overview: String,
    pub poster_url: Option<String>,
    pub release_date: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MovieDetailView {
    pub id: MovieId,
    pub title: String,
    pub overview: String,
    pub poster_url: Option<String>,
    pub release_date: String,
    pub genres: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailsView {
    pub movie: Option<MovieDetailView>,
    pub cast: Vec<CastMember>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchView {
    pub query: String,
    pub suggestions: Vec<Suggestion>,
    pub hint: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewModel {
    pub route: Route,
    pub path: String,

    pub all_movies: Vec<MovieCard>,
    pub selected_movie: Option<MovieCard>,
    pub current_page: u32,
    pub total_pages: u32,
    pub items_per_page: u32,
    pub genre: String,
    pub is_loading: bool,
    pub error: Option<String>,

    pub details: DetailsView,
    pub search: SearchView,

    pub current_theme: Theme,
    /// Whether the shell applies its dark presentation class.
    pub dark_mode: bool,
    pub is_sidebar_open: bool,
    pub is_search_overlay_open: bool,
}

#[derive(Default)]
pub struct App;

impl App {
    fn send_list_request(model: &mut Model, caps: &Capabilities, request: ListRequest) {
        let generation = request.generation();
        let endpoint = match &request {
            ListRequest::Discover { genre, page, .. } => Endpoint::Discover {
                genre: *genre,
                page: *page,
            },
            ListRequest::Search { query, .. } => Endpoint::Search { query },
        };

        let url = match endpoint.url(&model.config) {
            Ok(url) => url,
            Err(e) => {
                warn!(operation = request.operation().code(), error = %e, "cannot build request");
                match request {
                    ListRequest::Discover { .. } => model.movies.apply_discover(generation, Err(e)),
                    ListRequest::Search { .. } => model.movies.apply_search(generation, Err(e)),
                };
                return;
            }
        };

        debug!(url = url.redacted(), generation = generation.0, "requesting movie list");
        let builder = caps.http.get(url.as_str()).expect_json::<MoviePage>();
        match request {
            ListRequest::Discover { .. } => builder.send(move |result| Event::MoviesFetched {
                generation,
                result: Box::new(read_json(result)),
            }),
            ListRequest::Search { .. } => builder.send(move |result| Event::MoviesSearched {
                generation,
                result: Box::new(read_json(result)),
            }),
        }
    }

    fn start_details(model: &mut Model, caps: &Capabilities, movie_id: MovieId) {
        let request = model.details.begin(movie_id);
        let DetailsRequest {
            generation,
            movie_id,
        } = request;

        match (Endpoint::MovieDetails { id: movie_id }).url(&model.config) {
            Ok(url) => {
                debug!(url = url.redacted(), generation = generation.0, "requesting movie details");
                caps.http
                    .get(url.as_str())
                    .expect_json::<Movie>()
                    .send(move |result| Event::MovieDetailsFetched {
                        generation,
                        result: Box::new(read_json(result)),
                    });
            }
            Err(e) => {
                warn!(movie_id = movie_id.0, error = %e, "cannot build details request");
                model.details.apply_details(generation, Err(e));
            }
        }
    }

    fn send_credits(model: &mut Model, caps: &Capabilities, request: DetailsRequest) {
        let DetailsRequest {
            generation,
            movie_id,
        } = request;

        match (Endpoint::Credits { id: movie_id }).url(&model.config) {
            Ok(url) => {
                debug!(url = url.redacted(), generation = generation.0, "requesting credits");
                caps.http
                    .get(url.as_str())
                    .expect_json::<Credits>()
                    .send(move |result| Event::CreditsFetched {
                        generation,
                        result: Box::new(read_json(result)),
                    });
            }
            Err(e) => {
                warn!(movie_id = movie_id.0, error = %e, "cannot build credits request");
                model.details.apply_credits(generation, Err(e));
            }
        }
    }

    fn send_suggestions(model: &mut Model, caps: &Capabilities, request: SuggestRequest) {
        let SuggestRequest { generation, query } = request;

        match (Endpoint::Search { query: &query }).url(&model.config) {
            Ok(url) => {
                caps.http
                    .get(url.as_str())
                    .expect_json::<MoviePage>()
                    .send(move |result| Event::SuggestionsFetched {
                        generation,
                        result: Box::new(read_json(result)),
                    });
            }
            Err(e) => {
                warn!(error = %e, "cannot build suggestion request");
                model.search.apply(generation, Err(e));
            }
        }
    }

    fn load_theme(caps: &Capabilities) {
        let key = KvKey::theme();
        caps.key_value.get(key.as_str().to_string(), move |result| {
            Event::ThemeLoaded(read_string(&key, result))
        });
    }

    fn persist_theme(caps: &Capabilities, theme: Theme) {
        caps.key_value.set(
            KvKey::theme().into_string(),
            theme.as_str().as_bytes().to_vec(),
            |result| Event::ThemePersisted(write_ack(result)),
        );
    }

    fn log_applied(what: &str, applied: Applied, error: Option<&HttpError>) {
        match applied {
            Applied::Updated => info!(what, "response applied"),
            Applied::Failed => warn!(what, error = ?error, "request failed"),
            Applied::Stale => debug!(what, "discarded stale response"),
        }
    }

    fn navigate(model: &mut Model, caps: &Capabilities, route: Route) {
        model.route = route;
        if let Route::MovieDetails { id } = route {
            Self::start_details(model, caps, id);
        }
    }

    fn card(config: &ApiConfig, movie: &MovieSummary) -> MovieCard {
        MovieCard {
            id: movie.id,
            title: movie.title.clone(),
            overview: movie.overview.clone(),
            poster_url: movie.poster_path.as_deref().map(|p| config.poster_url(p)),
            release_date: movie.release_date.clone(),
        }
    }

    fn detail_view(config: &ApiConfig, movie: &Movie) -> MovieDetailView {
        MovieDetailView {
            id: movie.id,
            title: movie.title.clone(),
            overview: movie.overview.clone(),
            poster_url: movie.poster_path.as_deref().map(|p| config.poster_url(p)),
            release_date: movie.release_date.clone(),
            genres: movie.genres.iter().map(|g| g.name.clone()).collect(),
        }
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        debug!(
            event = event.name(),
            user_initiated = event.is_user_initiated(),
            "handling event"
        );

        match event {
            Event::Noop => return,

            Event::Startup {
                prefers_dark,
                config,
            } => {
                model.prefers_dark = prefers_dark;
                if let Some(config) = config {
                    model.config = *config;
                }
                if let Err(e) = model.config.validate() {
                    warn!(error = %e, "API configuration is invalid; requests will fail");
                }
                if model.config.api_key.is_empty() {
                    warn!("no API key configured");
                }
                Self::load_theme(caps);
            }

            Event::FetchMovies => {
                let request = model.movies.begin_fetch();
                Self::send_list_request(model, caps, request);
            }

            Event::SearchMovies { query } => match model.movies.begin_search(&query) {
                Some(request) => Self::send_list_request(model, caps, request),
                None => debug!("blank search, list cleared"),
            },

            Event::SetPage { page } => {
                let request = model.movies.set_page(page);
                Self::send_list_request(model, caps, request);
            }

            Event::SetItemsPerPage { items } => {
                let request = model.movies.set_items_per_page(items);
                Self::send_list_request(model, caps, request);
            }

            Event::SetGenre { genre } => {
                model.movies.set_genre(genre);
            }

            Event::SelectMovie { movie_id } => {
                if !model.movies.select_movie(movie_id) {
                    warn!(movie_id = ?movie_id, "selected movie is not in the current list");
                }
            }

            Event::FetchMovieDetails { movie_id } => {
                Self::start_details(model, caps, movie_id);
            }

            Event::Navigate(route) => {
                Self::navigate(model, caps, route);
            }

            Event::SearchQueryChanged { query } => {
                if let Some(request) = model.search.set_query(query) {
                    Self::send_suggestions(model, caps, request);
                }
            }

            Event::SuggestionSelected { movie_id } => {
                model.search.clear();
                model.ui.set_search_overlay_open(false);
                Self::navigate(model, caps, Route::MovieDetails { id: movie_id });
            }

            Event::ToggleTheme => {
                let theme = model.theme.toggle();
                info!(theme = theme.as_str(), "theme toggled");
                Self::persist_theme(caps, theme);
            }

            Event::ToggleSidebar => model.ui.toggle_sidebar(),
            Event::SetSidebarOpen { open } => model.ui.set_sidebar_open(open),
            Event::ToggleSearchOverlay => model.ui.toggle_search_overlay(),
            Event::SetSearchOverlayOpen { open } => model.ui.set_search_overlay_open(open),

            Event::MoviesFetched { generation, result } => {
                let result = *result;
                let error = result.as_ref().err().cloned();
                let applied = model.movies.apply_discover(generation, result);
                Self::log_applied("discover", applied, error.as_ref());
                if applied == Applied::Stale {
                    return;
                }
            }

            Event::MoviesSearched { generation, result } => {
                let result = *result;
                let error = result.as_ref().err().cloned();
                let applied = model.movies.apply_search(generation, result);
                Self::log_applied("search", applied, error.as_ref());
                if applied == Applied::Stale {
                    return;
                }
            }

            Event::MovieDetailsFetched { generation, result } => {
                let result = *result;
                let error = result.as_ref().err().cloned();
                let (applied, next) = model.details.apply_details(generation, result);
                Self::log_applied("details", applied, error.as_ref());
                if let Some(next) = next {
                    Self::send_credits(model, caps, next);
                }
                if applied == Applied::Stale {
                    return;
                }
            }

            Event::CreditsFetched { generation, result } => {
                let result = *result;
                let error = result.as_ref().err().cloned();
                let applied = model.details.apply_credits(generation, result);
                Self::log_applied("credits", applied, error.as_ref());
                if applied == Applied::Stale {
                    return;
                }
            }

            Event::SuggestionsFetched { generation, result } => {
                let result = *result;
                let error = result.as_ref().err().cloned();
                let applied = model.search.apply(generation, result);
                Self::log_applied("suggestions", applied, error.as_ref());
                if applied == Applied::Stale {
                    return;
                }
            }

            Event::ThemeLoaded(_) if model.theme.is_initialized() => {
                debug!(
                    theme = model.theme.theme.as_str(),
                    "theme already chosen, ignoring stored value"
                );
                return;
            }

            Event::ThemeLoaded(result) => {
                let stored = match result {
                    Ok(stored) => stored,
                    Err(e) => {
                        warn!(error = %e, "could not read stored theme");
                        None
                    }
                };
                let write_back = model.theme.initialize(stored.as_deref(), model.prefers_dark);
                info!(theme = model.theme.theme.as_str(), "theme initialized");
                if let Some(theme) = write_back {
                    Self::persist_theme(caps, theme);
                }
            }

            Event::ThemePersisted(result) => {
                if let Err(e) = result {
                    warn!(error = %e, "could not persist theme");
                }
                return;
            }
        }

        caps.render.render();
    }

    fn view(&self, model: &Model) -> ViewModel {
        let config = &model.config;
        let list = &model.movies;
        let details = &model.details;

        ViewModel {
            route: model.route,
            path: model.route.path(),

            all_movies: list.movies.iter().map(|m| Self::card(config, m)).collect(),
            selected_movie: list.selected_movie.as_ref().map(|m| Self::card(config, m)),
            current_page: list.current_page(),
            total_pages: list.total_pages,
            items_per_page: list.items_per_page(),
            genre: list.genre.to_string(),
            is_loading: list.is_loading,
            error: list.error.as_ref().map(|e| e.user_facing_message().to_string()),

            details: DetailsView {
                movie: details.movie.as_ref().map(|m| Self::detail_view(config, m)),
                cast: details.cast.clone(),
                is_loading: details.is_loading,
                error: details.error.as_ref().map(|e| e.user_facing_message().to_string()),
            },
            search: SearchView {
                query: model.search.query.clone(),
                suggestions: model.search.suggestions.clone(),
                hint: model.search.hint().map(str::to_string),
            },

            current_theme: model.theme.theme,
            dark_mode: model.theme.theme.is_dark(),
            is_sidebar_open: model.ui.is_sidebar_open,
            is_search_overlay_open: model.ui.is_search_overlay_open,
        }
    }
}
