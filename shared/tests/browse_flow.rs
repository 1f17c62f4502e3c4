use crux_core::testing::AppTester;
use marquee_shared::capabilities::HttpError;
use marquee_shared::{
    ApiConfig, App, CastMember, Credits, Effect, Event, Genre, GenreId, Model, Movie, MovieId,
    MoviePage, MovieSummary, Route,
};

fn model() -> Model {
    Model {
        config: ApiConfig::new("test-key"),
        ..Model::default()
    }
}

fn http_urls(effects: &[Effect]) -> Vec<String> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Http(request) => Some(request.operation.url.clone()),
            _ => None,
        })
        .collect()
}

fn renders(effects: &[Effect]) -> bool {
    effects.iter().any(|e| matches!(e, Effect::Render(_)))
}

fn summary(id: u64, genres: &[u32]) -> MovieSummary {
    MovieSummary {
        id: MovieId(id),
        title: format!("Movie {id}"),
        overview: String::new(),
        poster_path: Some(format!("/{id}.jpg")),
        release_date: "2019-04-24".into(),
        genre_ids: genres.iter().copied().map(GenreId).collect(),
    }
}

fn page(movies: Vec<MovieSummary>) -> MoviePage {
    MoviePage {
        page: 1,
        total_pages: 1,
        total_results: 0,
        results: movies,
    }
}

fn fight_club() -> Movie {
    Movie {
        id: MovieId(550),
        title: "Fight Club".into(),
        overview: String::new(),
        poster_path: None,
        release_date: "1999-10-15".into(),
        genres: vec![Genre {
            id: GenreId(18),
            name: "Drama".into(),
        }],
    }
}

#[test]
fn fetch_movies_requests_discover_and_pages_results() {
    let app = AppTester::<App, Effect>::default();
    let mut model = model();

    let update = app.update(Event::FetchMovies, &mut model);
    assert_eq!(
        http_urls(&update.effects),
        vec![
            "https://api.themoviedb.org/3/discover/movie?api_key=test-key&page=1&with_genres=28&language=en-US"
                .to_string()
        ]
    );
    assert!(app.view(&model).is_loading);

    let results = (1..=20).map(|id| summary(id, &[28])).collect();
    let update = app.update(
        Event::MoviesFetched {
            generation: model.movies.generation(),
            result: Box::new(Ok(page(results))),
        },
        &mut model,
    );
    assert!(renders(&update.effects));

    let view = app.view(&model);
    assert_eq!(view.all_movies.len(), 10);
    assert_eq!(view.total_pages, 2);
    assert!(!view.is_loading);
    assert!(view.error.is_none());
    assert_eq!(
        view.all_movies[0].poster_url.as_deref(),
        Some("https://image.tmdb.org/t/p/w500/1.jpg")
    );
}

#[test]
fn failed_fetch_keeps_previous_movies() {
    let app = AppTester::<App, Effect>::default();
    let mut model = model();

    app.update(Event::FetchMovies, &mut model);
    app.update(
        Event::MoviesFetched {
            generation: model.movies.generation(),
            result: Box::new(Ok(page(vec![summary(1, &[28]), summary(2, &[28])]))),
        },
        &mut model,
    );

    app.update(Event::SetPage { page: 2 }, &mut model);
    app.update(
        Event::MoviesFetched {
            generation: model.movies.generation(),
            result: Box::new(Err(HttpError::Status { code: 500 })),
        },
        &mut model,
    );

    let view = app.view(&model);
    assert_eq!(view.current_page, 2);
    assert_eq!(view.all_movies.len(), 2);
    assert!(!view.is_loading);
    assert_eq!(
        view.error.as_deref(),
        Some("Failed to fetch movies. Please try again later.")
    );
}

#[test]
fn blank_search_makes_no_request() {
    let app = AppTester::<App, Effect>::default();
    let mut model = model();

    let update = app.update(
        Event::SearchMovies {
            query: "   ".into(),
        },
        &mut model,
    );

    assert!(http_urls(&update.effects).is_empty());
    assert!(renders(&update.effects));
    assert!(app.view(&model).all_movies.is_empty());
}

#[test]
fn search_queries_search_endpoint() {
    let app = AppTester::<App, Effect>::default();
    let mut model = model();

    let update = app.update(
        Event::SearchMovies {
            query: "star wars".into(),
        },
        &mut model,
    );
    let urls = http_urls(&update.effects);
    assert_eq!(urls.len(), 1);
    assert!(urls[0].contains("/search/movie?"));
    assert!(urls[0].contains("query=star+wars"));

    app.update(
        Event::MoviesSearched {
            generation: model.movies.generation(),
            result: Box::new(Err(HttpError::Transport("offline".into()))),
        },
        &mut model,
    );
    assert_eq!(
        app.view(&model).error.as_deref(),
        Some("Failed to search movies. Please try again later.")
    );
}

#[test]
fn set_genre_waits_for_explicit_fetch() {
    let app = AppTester::<App, Effect>::default();
    let mut model = model();

    let update = app.update(Event::SetGenre { genre: GenreId(35) }, &mut model);
    assert!(http_urls(&update.effects).is_empty());
    assert_eq!(app.view(&model).genre, "35");

    let update = app.update(Event::FetchMovies, &mut model);
    assert!(http_urls(&update.effects)[0].contains("with_genres=35"));
}

#[test]
fn later_page_change_wins_over_slower_response() {
    let app = AppTester::<App, Effect>::default();
    let mut model = model();

    app.update(Event::SetPage { page: 2 }, &mut model);
    let page_two = model.movies.generation();
    app.update(Event::SetPage { page: 1 }, &mut model);
    let page_one = model.movies.generation();

    app.update(
        Event::MoviesFetched {
            generation: page_one,
            result: Box::new(Ok(page(vec![summary(1, &[28])]))),
        },
        &mut model,
    );
    let update = app.update(
        Event::MoviesFetched {
            generation: page_two,
            result: Box::new(Ok(page(vec![summary(2, &[28])]))),
        },
        &mut model,
    );

    assert!(!renders(&update.effects));
    let view = app.view(&model);
    assert_eq!(view.current_page, 1);
    assert_eq!(view.all_movies.len(), 1);
    assert_eq!(view.all_movies[0].id, MovieId(1));
}

#[test]
fn details_then_credits_failure_retains_movie() {
    let app = AppTester::<App, Effect>::default();
    let mut model = model();

    let update = app.update(
        Event::FetchMovieDetails {
            movie_id: MovieId(550),
        },
        &mut model,
    );
    let urls = http_urls(&update.effects);
    assert_eq!(urls.len(), 1);
    assert!(urls[0].starts_with("https://api.themoviedb.org/3/movie/550?"));

    let generation = model.details.generation();
    let update = app.update(
        Event::MovieDetailsFetched {
            generation,
            result: Box::new(Ok(fight_club())),
        },
        &mut model,
    );
    let urls = http_urls(&update.effects);
    assert_eq!(urls.len(), 1);
    assert!(urls[0].starts_with("https://api.themoviedb.org/3/movie/550/credits?"));
    assert!(app.view(&model).details.is_loading);

    app.update(
        Event::CreditsFetched {
            generation,
            result: Box::new(Err(HttpError::Status { code: 404 })),
        },
        &mut model,
    );

    let details = app.view(&model).details;
    assert!(!details.is_loading);
    assert_eq!(details.error.as_deref(), Some("Failed to load movie details."));
    assert_eq!(details.movie.map(|m| m.title), Some("Fight Club".to_string()));
    assert!(details.cast.is_empty());
}

#[test]
fn details_success_keeps_top_ten_cast() {
    let app = AppTester::<App, Effect>::default();
    let mut model = model();

    app.update(
        Event::FetchMovieDetails {
            movie_id: MovieId(550),
        },
        &mut model,
    );
    let generation = model.details.generation();
    app.update(
        Event::MovieDetailsFetched {
            generation,
            result: Box::new(Ok(fight_club())),
        },
        &mut model,
    );
    let cast = (0..15)
        .map(|i| CastMember {
            id: i,
            name: format!("Actor {i}"),
            character: format!("Role {i}"),
        })
        .collect();
    app.update(
        Event::CreditsFetched {
            generation,
            result: Box::new(Ok(Credits {
                id: MovieId(550),
                cast,
            })),
        },
        &mut model,
    );

    let details = app.view(&model).details;
    assert_eq!(details.cast.len(), 10);
    assert!(details.error.is_none());
    assert_eq!(details.movie.map(|m| m.genres), Some(vec!["Drama".to_string()]));
}

#[test]
fn picking_a_suggestion_opens_details() {
    let app = AppTester::<App, Effect>::default();
    let mut model = model();

    app.update(Event::SetSearchOverlayOpen { open: true }, &mut model);
    let update = app.update(
        Event::SearchQueryChanged {
            query: "Matr".into(),
        },
        &mut model,
    );
    assert!(http_urls(&update.effects)[0].contains("query=Matr"));

    app.update(
        Event::SuggestionsFetched {
            generation: model.search.generation(),
            result: Box::new(Ok(page(vec![summary(603, &[28, 878])]))),
        },
        &mut model,
    );
    assert_eq!(app.view(&model).search.suggestions.len(), 1);

    let update = app.update(
        Event::SuggestionSelected {
            movie_id: MovieId(603),
        },
        &mut model,
    );
    assert!(http_urls(&update.effects)[0].contains("/movie/603?"));

    let view = app.view(&model);
    assert_eq!(view.route, Route::MovieDetails { id: MovieId(603) });
    assert_eq!(view.path, "/movielist/603");
    assert!(view.search.query.is_empty());
    assert!(view.search.suggestions.is_empty());
    assert!(!view.is_search_overlay_open);
    assert!(view.details.is_loading);
}

#[test]
fn invalid_base_url_fails_without_request() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model {
        config: ApiConfig::new("test-key").with_base_url("not a url"),
        ..Model::default()
    };

    let update = app.update(Event::FetchMovies, &mut model);

    assert!(http_urls(&update.effects).is_empty());
    let view = app.view(&model);
    assert!(!view.is_loading);
    assert_eq!(
        view.error.as_deref(),
        Some("Failed to fetch movies. Please try again later.")
    );
}

#[test]
fn failed_search_leaves_listed_movies() {
    let app = AppTester::<App, Effect>::default();
    let mut model = model();

    app.update(Event::FetchMovies, &mut model);
    app.update(
        Event::MoviesFetched {
            generation: model.movies.generation(),
            result: Box::new(Ok(page(vec![summary(1, &[28]), summary(2, &[28])]))),
        },
        &mut model,
    );

    app.update(
        Event::SearchMovies {
            query: "matrix".into(),
        },
        &mut model,
    );
    app.update(
        Event::MoviesSearched {
            generation: model.movies.generation(),
            result: Box::new(Err(HttpError::Status { code: 503 })),
        },
        &mut model,
    );

    let view = app.view(&model);
    let ids: Vec<MovieId> = view.all_movies.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![MovieId(1), MovieId(2)]);
    assert!(!view.is_loading);
    assert_eq!(
        view.error.as_deref(),
        Some("Failed to search movies. Please try again later.")
    );
}

#[test]
fn items_per_page_change_refetches() {
    let app = AppTester::<App, Effect>::default();
    let mut model = model();

    let update = app.update(Event::SetItemsPerPage { items: 5 }, &mut model);

    let urls = http_urls(&update.effects);
    assert_eq!(urls.len(), 1);
    assert!(urls[0].starts_with("https://api.themoviedb.org/3/discover/movie?"));
    assert!(urls[0].contains("page=1&with_genres=28"));

    let results = (1..=12).map(|id| summary(id, &[28])).collect();
    app.update(
        Event::MoviesFetched {
            generation: model.movies.generation(),
            result: Box::new(Ok(page(results))),
        },
        &mut model,
    );

    let view = app.view(&model);
    assert_eq!(view.items_per_page, 5);
    assert_eq!(view.all_movies.len(), 5);
    assert_eq!(view.total_pages, 3);
}

#[test]
fn empty_language_fails_without_request() {
    let app = AppTester::<App, Effect>::default();
    let mut config = ApiConfig::new("test-key");
    config.language = String::new();
    let mut model = Model {
        config,
        ..Model::default()
    };

    let update = app.update(Event::FetchMovies, &mut model);
    assert!(http_urls(&update.effects).is_empty());

    let update = app.update(
        Event::FetchMovieDetails {
            movie_id: MovieId(550),
        },
        &mut model,
    );
    assert!(http_urls(&update.effects).is_empty());

    let view = app.view(&model);
    assert!(!view.is_loading);
    assert_eq!(
        view.error.as_deref(),
        Some("Failed to fetch movies. Please try again later.")
    );
    assert!(!view.details.is_loading);
    assert_eq!(view.details.error.as_deref(), Some("Failed to load movie details."));
}
