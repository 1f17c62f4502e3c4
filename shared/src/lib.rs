//! Headless core of the movie catalog: list, filter, search and detail
//! state for TMDB data, plus theme and layout preferences.
//!
//! The shell sends [`Event`]s, performs the effects the core requests
//! through its [`Capabilities`], and renders the [`ViewModel`].

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod app;
pub mod capabilities;
pub mod config;
pub mod details;
pub mod error;
pub mod event;
pub mod model;
pub mod movies;
pub mod search;
pub mod theme;
pub mod ui;

pub use app::{App, ViewModel};
pub use capabilities::{Capabilities, Effect};
pub use config::ApiConfig;
pub use crux_core::{render::Render, App as CruxApp};
pub use error::{AppError, Operation};
pub use event::Event;
pub use model::{
    CastMember, Credits, Generation, Genre, GenreId, Model, Movie, MovieId, MoviePage,
    MovieSummary, Route, DEFAULT_GENRE,
};
pub use theme::Theme;
