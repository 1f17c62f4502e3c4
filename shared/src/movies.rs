//! Paged, genre-filtered movie list.
//!
//! The state only decides; [`crate::app`] turns the returned [`ListRequest`]s
//! into HTTP effects and feeds responses back through
//! [`MovieListState::apply_discover`] and [`MovieListState::apply_search`].

use crate::capabilities::HttpResult;
use crate::error::{AppError, Operation};
use crate::model::{Generation, GenreId, MovieId, MoviePage, MovieSummary, DEFAULT_GENRE};

pub const DEFAULT_ITEMS_PER_PAGE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRequest {
    Discover {
        generation: Generation,
        genre: GenreId,
        page: u32,
    },
    Search {
        generation: Generation,
        query: String,
    },
}

impl ListRequest {
    pub fn generation(&self) -> Generation {
        match self {
            Self::Discover { generation, .. } | Self::Search { generation, .. } => *generation,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Self::Discover { .. } => Operation::FetchMovies,
            Self::Search { .. } => Operation::SearchMovies,
        }
    }
}

/// What a response did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Updated,
    Failed,
    /// A newer request was issued after this one; the response was dropped.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieListState {
    pub movies: Vec<MovieSummary>,
    pub total_pages: u32,
    current_page: u32,
    pub genre: GenreId,
    items_per_page: u32,
    pub is_loading: bool,
    pub error: Option<AppError>,
    pub selected_movie: Option<MovieSummary>,

    generation: Generation,
    requested_genre: GenreId,
}

impl Default for MovieListState {
    fn default() -> Self {
        Self {
            movies: Vec::new(),
            total_pages: 0,
            current_page: 1,
            genre: DEFAULT_GENRE,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            is_loading: false,
            error: None,
            selected_movie: None,
            generation: Generation::default(),
            requested_genre: DEFAULT_GENRE,
        }
    }
}

impl MovieListState {
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    fn next_generation(&mut self) -> Generation {
        self.generation = self.generation.next();
        self.generation
    }

    /// Starts a discover request for the current page and genre.
    pub fn begin_fetch(&mut self) -> ListRequest {
        self.is_loading = true;
        self.error = None;
        self.requested_genre = self.genre;
        ListRequest::Discover {
            generation: self.next_generation(),
            genre: self.genre,
            page: self.current_page,
        }
    }

    /// Starts a text search. A blank query empties the list without a request.
    pub fn begin_search(&mut self, query: &str) -> Option<ListRequest> {
        let generation = self.next_generation();
        let query = query.trim();

        if query.is_empty() {
            self.movies.clear();
            self.total_pages = 0;
            self.is_loading = false;
            self.error = None;
            return None;
        }

        self.is_loading = true;
        self.error = None;
        self.requested_genre = self.genre;
        Some(ListRequest::Search {
            generation,
            query: query.to_string(),
        })
    }

    pub fn set_page(&mut self, page: u32) -> ListRequest {
        self.current_page = page.max(1);
        self.begin_fetch()
    }

    pub fn set_items_per_page(&mut self, items: u32) -> ListRequest {
        self.items_per_page = items.max(1);
        self.begin_fetch()
    }

    /// Changes the filter only; the caller decides when to re-fetch.
    pub fn set_genre(&mut self, genre: GenreId) {
        self.genre = genre;
    }

    /// Selects a listed movie, or clears the selection with `None`.
    /// Returns `false` when the id is not in the current list.
    pub fn select_movie(&mut self, id: Option<MovieId>) -> bool {
        match id {
            None => {
                self.selected_movie = None;
                true
            }
            Some(id) => match self.movies.iter().find(|m| m.id == id) {
                Some(movie) => {
                    self.selected_movie = Some(movie.clone());
                    true
                }
                None => false,
            },
        }
    }

    pub fn apply_discover(
        &mut self,
        generation: Generation,
        result: HttpResult<MoviePage>,
    ) -> Applied {
        self.apply(generation, Operation::FetchMovies, result)
    }

    pub fn apply_search(&mut self, generation: Generation, result: HttpResult<MoviePage>) -> Applied {
        self.apply(generation, Operation::SearchMovies, result)
    }

    fn apply(
        &mut self,
        generation: Generation,
        operation: Operation,
        result: HttpResult<MoviePage>,
    ) -> Applied {
        if generation != self.generation {
            return Applied::Stale;
        }

        self.is_loading = false;
        match result {
            Ok(page) => {
                let genre = self.requested_genre;
                let mut matches: Vec<MovieSummary> = page
                    .results
                    .into_iter()
                    .filter(|movie| movie.has_genre(genre))
                    .collect();

                self.total_pages = page_count(matches.len(), self.items_per_page);
                matches.truncate(self.items_per_page as usize);
                self.movies = matches;
                self.error = None;
                Applied::Updated
            }
            Err(e) => {
                self.error = Some(AppError::from_http(operation, &e));
                Applied::Failed
            }
        }
    }
}

fn page_count(matches: usize, items_per_page: u32) -> u32 {
    let pages = matches.div_ceil(items_per_page.max(1) as usize);
    u32::try_from(pages).unwrap_or(u32::MAX)
}
