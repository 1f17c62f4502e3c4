//! Search-as-you-type suggestions for the search bar.

use serde::{Deserialize, Serialize};

use crate::capabilities::HttpResult;
use crate::model::{Generation, MovieId, MoviePage};
use crate::movies::Applied;

/// Shown while the search box is empty.
pub const SEARCH_HINT: &str = "No ideas? Try typing \"Matrix\"!";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: MovieId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestRequest {
    pub generation: Generation,
    pub query: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub suggestions: Vec<Suggestion>,
    generation: Generation,
}

impl SearchState {
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn hint(&self) -> Option<&'static str> {
        self.query.trim().is_empty().then_some(SEARCH_HINT)
    }

    /// Records the typed query. A blank query clears the suggestions
    /// without a request.
    pub fn set_query(&mut self, query: impl Into<String>) -> Option<SuggestRequest> {
        self.query = query.into();
        self.generation = self.generation.next();

        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            self.suggestions.clear();
            return None;
        }

        Some(SuggestRequest {
            generation: self.generation,
            query: trimmed.to_string(),
        })
    }

    /// A failed lookup shows no suggestions rather than an error.
    pub fn apply(&mut self, generation: Generation, result: HttpResult<MoviePage>) -> Applied {
        if generation != self.generation {
            return Applied::Stale;
        }

        match result {
            Ok(page) => {
                self.suggestions = page
                    .results
                    .into_iter()
                    .map(|movie| Suggestion {
                        id: movie.id,
                        title: movie.title,
                    })
                    .collect();
                Applied::Updated
            }
            Err(_) => {
                self.suggestions.clear();
                Applied::Failed
            }
        }
    }

    /// Clears the box after a suggestion is picked.
    pub fn clear(&mut self) {
        self.query.clear();
        self.suggestions.clear();
        self.generation = self.generation.next();
    }
}
