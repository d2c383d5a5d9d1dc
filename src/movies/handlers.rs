use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};

use super::types::*;
use crate::error::{MovieError, MovieResult};
use crate::favorites::{NewFavorite, MAX_PAGE_SIZE};
use crate::server::AppState;
use crate::util::QueryParams;

pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> MovieResult<Json<DataResponse<SearchData>>> {
    let query = params.get("q").unwrap_or_default();
    if query.trim().is_empty() {
        return Err(MovieError::validation("Search query is required"));
    }
    let page = params.page()?;

    Ok(Json(state.movies.search(query, page).await?))
}

pub async fn add_favorite(
    State(state): State<AppState>,
    body: Result<Json<NewFavorite>, JsonRejection>,
) -> MovieResult<(StatusCode, Json<DataResponse<MessageData>>)> {
    let Json(body) = body.map_err(|e| MovieError::validation(e.body_text()))?;
    let movie = body.into_record()?;

    let resp = state.movies.add_favorite(movie).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

pub async fn remove_favorite(
    State(state): State<AppState>,
    Path(imdb_id): Path<String>,
) -> MovieResult<Json<DataResponse<MessageData>>> {
    if imdb_id.trim().is_empty() {
        return Err(MovieError::validation("IMDb ID is required"));
    }
    Ok(Json(state.movies.remove_favorite(&imdb_id).await?))
}

pub async fn list_favorites(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> MovieResult<Json<DataResponse<FavoritesData>>> {
    let page = params.page()?;
    let page_size = params.positive_u32(
        "pageSize",
        state.movies.page_size(),
        &format!("Page size must be between 1 and {}", MAX_PAGE_SIZE),
    )?;

    Ok(Json(
        state.movies.list_favorites(page, Some(page_size)).await?,
    ))
}
