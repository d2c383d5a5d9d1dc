pub mod client;
pub mod types;

pub use client::{MovieSearch, OmdbClient, DEFAULT_BASE_URL, MAX_SEARCH_PAGE};
pub use types::{OmdbMovie, OmdbSearchResponse, SearchHit, SearchResults};
