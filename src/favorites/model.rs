use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{MovieError, MovieResult};
use crate::util::normalize_poster;

/// Year of the first known film. Anything earlier is rejected.
pub const MIN_YEAR: i32 = 1888;

/// A favorited movie as stored on disk and returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteMovie {
    pub title: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    pub year: i32,
    #[serde(default, deserialize_with = "deserialize_poster")]
    pub poster: String,
}

/// Stored posters may be missing, null or "N/A"; all of them read as "".
fn deserialize_poster<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let poster = Option::<String>::deserialize(deserializer)?;
    Ok(normalize_poster(poster.as_deref()))
}

impl FavoriteMovie {
    pub fn new(title: &str, imdb_id: &str, year: i32, poster: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            imdb_id: imdb_id.to_string(),
            year,
            poster: normalize_poster(poster),
        }
    }

    /// Case-insensitive identity check on the IMDb id.
    pub fn matches_id(&self, imdb_id: &str) -> bool {
        self.imdb_id.to_lowercase() == imdb_id.to_lowercase()
    }
}

/// Body of `POST /movies/favorites`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewFavorite {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    pub year: i32,
    #[serde(default)]
    pub poster: Option<String>,
}

impl NewFavorite {
    pub fn into_record(self) -> MovieResult<FavoriteMovie> {
        if self.title.trim().is_empty() || self.imdb_id.trim().is_empty() {
            return Err(MovieError::validation("Invalid movie data"));
        }
        if self.year < MIN_YEAR {
            return Err(MovieError::validation(format!(
                "year must not be less than {}",
                MIN_YEAR
            )));
        }
        Ok(FavoriteMovie::new(
            &self.title,
            &self.imdb_id,
            self.year,
            self.poster.as_deref(),
        ))
    }
}
