use serde::{Deserialize, Serialize};

use crate::favorites::FavoriteMovie;

/// Every successful response is wrapped in `{ "data": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedMovie {
    pub title: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    pub year: i32,
    pub poster: String,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchData {
    pub movies: Vec<AnnotatedMovie>,
    pub count: usize,
    pub total_results: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesData {
    pub favorites: Vec<FavoriteMovie>,
    pub count: usize,
    pub total_results: usize,
    pub current_page: u32,
    pub total_pages: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageData {
    pub message: String,
}

impl MessageData {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
