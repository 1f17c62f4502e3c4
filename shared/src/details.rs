//! Selected movie plus its leading cast, fetched in two steps: details,
//! then credits once the details have arrived.

use crate::capabilities::{HttpError, HttpResult};
use crate::error::{AppError, Operation};
use crate::model::{CastMember, Credits, Generation, Movie, MovieId};
use crate::movies::Applied;

pub const MAX_CAST_MEMBERS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailsRequest {
    pub generation: Generation,
    pub movie_id: MovieId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieDetailsState {
    pub movie: Option<Movie>,
    pub cast: Vec<CastMember>,
    pub is_loading: bool,
    pub error: Option<AppError>,

    generation: Generation,
    requested: Option<MovieId>,
}

impl MovieDetailsState {
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn begin(&mut self, movie_id: MovieId) -> DetailsRequest {
        self.generation = self.generation.next();
        self.requested = Some(movie_id);
        self.is_loading = true;
        self.error = None;
        DetailsRequest {
            generation: self.generation,
            movie_id,
        }
    }

    /// Applies the first step. On success returns the credits request that
    /// continues the sequence.
    pub fn apply_details(
        &mut self,
        generation: Generation,
        result: HttpResult<Movie>,
    ) -> (Applied, Option<DetailsRequest>) {
        if generation != self.generation {
            return (Applied::Stale, None);
        }

        let result = result.and_then(|movie| match self.requested {
            Some(id) if movie.id != id => Err(HttpError::Schema {
                reason: format!("requested movie {id}, received {}", movie.id),
            }),
            _ => Ok(movie),
        });

        match result {
            Ok(movie) => {
                let movie_id = movie.id;
                self.movie = Some(movie);
                self.cast.clear();
                (
                    Applied::Updated,
                    Some(DetailsRequest {
                        generation,
                        movie_id,
                    }),
                )
            }
            Err(e) => {
                self.fail(&e);
                (Applied::Failed, None)
            }
        }
    }

    /// Applies the second step. A credits failure keeps the movie that the
    /// first step stored.
    pub fn apply_credits(&mut self, generation: Generation, result: HttpResult<Credits>) -> Applied {
        if generation != self.generation {
            return Applied::Stale;
        }

        match result {
            Ok(credits) => {
                self.cast = credits.cast.into_iter().take(MAX_CAST_MEMBERS).collect();
                self.is_loading = false;
                Applied::Updated
            }
            Err(e) => {
                self.fail(&e);
                Applied::Failed
            }
        }
    }

    fn fail(&mut self, error: &HttpError) {
        self.is_loading = false;
        self.error = Some(AppError::from_http(Operation::FetchMovieDetails, error));
    }
}
