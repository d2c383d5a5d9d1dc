use serde::Deserialize;
use serde_json::Value;

use crate::util::{normalize_poster, parse_year};

/// One entry of OMDb's `Search` array. Every field is a string upstream.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbMovie {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(default)]
    pub poster: Option<String>,
}

/// Raw body of an OMDb search call.
///
/// "No results" is not an HTTP error: OMDb answers 200 with
/// `"Response": "False"` and an `Error` text instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbSearchResponse {
    #[serde(default)]
    pub search: Option<Vec<OmdbMovie>>,
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<Value>,
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// A search result with OMDb's quirks ironed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub imdb_id: String,
    pub year: i32,
    pub poster: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub movies: Vec<SearchHit>,
    pub total_results: u64,
}

impl From<OmdbMovie> for SearchHit {
    fn from(movie: OmdbMovie) -> Self {
        SearchHit {
            year: parse_year(&movie.year),
            poster: normalize_poster(movie.poster.as_deref()),
            title: movie.title,
            imdb_id: movie.imdb_id,
        }
    }
}

impl OmdbSearchResponse {
    pub fn is_empty_result(&self) -> bool {
        self.response.eq_ignore_ascii_case("false") || self.error.is_some()
    }

    pub fn into_results(self) -> SearchResults {
        if self.is_empty_result() {
            return SearchResults::default();
        }
        let total_results = match &self.total_results {
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
            Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
            _ => 0,
        };
        SearchResults {
            movies: self
                .search
                .unwrap_or_default()
                .into_iter()
                .map(SearchHit::from)
                .collect(),
            total_results,
        }
    }
}
