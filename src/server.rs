use axum::{
    extract::Request,
    http::{header, HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

use crate::config::Config;
use crate::error::ErrorBody;
use crate::favorites::FavoritesStore;
use crate::movies::MoviesService;
use crate::omdb::OmdbClient;
use crate::ServerError;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub movies: Arc<MoviesService>,
}

impl AppState {
    pub fn new(config: Config, movies: Arc<MoviesService>) -> Self {
        Self {
            config: Arc::new(config),
            movies,
        }
    }

    /// Wire up the OMDb client and the favorites store from `config`.
    pub fn from_config(config: Config) -> Result<Self, ServerError> {
        let omdb = OmdbClient::new(&config.omdb)
            .map_err(|e| ServerError::Server(format!("Failed to create OMDb client: {}", e)))?;
        let store = Arc::new(FavoritesStore::new(config.favorites_path()));
        let movies = MoviesService::new(Arc::new(omdb), store, config.favorites.pagesize);
        Ok(Self::new(config, Arc::new(movies)))
    }
}

pub fn build_router(state: AppState) -> Router {
    let movie_routes = Router::new()
        .route("/movies/search", get(crate::movies::search_movies))
        .route("/movies/favorites", post(crate::movies::add_favorite))
        .route("/movies/favorites/list", get(crate::movies::list_favorites))
        .route(
            "/movies/favorites/:imdb_id",
            delete(crate::movies::remove_favorite),
        );

    Router::new()
        .route("/health", get(health_handler))
        .merge(movie_routes)
        .fallback(fallback_handler)
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(cors_layer(&state.config.cors.origin))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    let origin = HeaderValue::from_str(origin).unwrap_or_else(|_| {
        warn!(origin, "invalid CORS origin, falling back to http://localhost:3000");
        HeaderValue::from_static("http://localhost:3000")
    });
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

async fn health_handler() -> &'static str {
    "ok"
}

async fn fallback_handler(req: Request) -> Response {
    let status = axum::http::StatusCode::NOT_FOUND;
    let body = ErrorBody {
        status_code: status.as_u16(),
        message: format!("Cannot {} {}", req.method(), req.uri().path()),
        error: "Not Found".to_string(),
    };
    (status, Json(body)).into_response()
}
