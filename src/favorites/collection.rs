use std::collections::HashSet;

use super::model::FavoriteMovie;
use super::pagination::{paginate, Page};
use crate::error::{MovieError, MovieResult};

/// In-memory favorites, in insertion order.
///
/// No two entries share an IMDb id under case-insensitive comparison, as long
/// as entries only arrive through [`Favorites::insert`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    movies: Vec<FavoriteMovie>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(movies: Vec<FavoriteMovie>) -> Self {
        Self { movies }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn movies(&self) -> &[FavoriteMovie] {
        &self.movies
    }

    pub fn contains(&self, imdb_id: &str) -> bool {
        self.movies.iter().any(|m| m.matches_id(imdb_id))
    }

    /// Lowercased ids, for lookups against many candidates.
    pub fn id_set(&self) -> HashSet<String> {
        self.movies.iter().map(|m| m.imdb_id.to_lowercase()).collect()
    }

    pub fn insert(&mut self, movie: FavoriteMovie) -> MovieResult<()> {
        if movie.title.trim().is_empty() || movie.imdb_id.trim().is_empty() {
            return Err(MovieError::validation("Invalid movie data"));
        }
        if self.contains(&movie.imdb_id) {
            return Err(MovieError::Conflict("Movie already in favorites".to_string()));
        }
        self.movies.push(movie);
        Ok(())
    }

    /// Removes every entry matching `imdb_id` and returns how many went.
    pub fn remove(&mut self, imdb_id: &str) -> MovieResult<usize> {
        if imdb_id.trim().is_empty() {
            return Err(MovieError::validation("Movie ID is required"));
        }
        let before = self.movies.len();
        self.movies.retain(|m| !m.matches_id(imdb_id));
        let removed = before - self.movies.len();
        if removed == 0 {
            return Err(MovieError::NotFound(
                "Movie not found in favorites".to_string(),
            ));
        }
        Ok(removed)
    }

    pub fn page(&self, page: u32, page_size: u32) -> MovieResult<Page<FavoriteMovie>> {
        paginate(&self.movies, page, page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> FavoriteMovie {
        FavoriteMovie::new("The Matrix", "tt0133093", 1999, None)
    }

    #[test]
    fn test_insert_then_page_contains_once() {
        let mut favs = Favorites::new();
        favs.insert(matrix()).unwrap();
        let page = favs.page(1, 10).unwrap();
        let hits = page
            .items
            .iter()
            .filter(|m| m.matches_id("tt0133093"))
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_insert_duplicate_differing_in_case() {
        let mut favs = Favorites::new();
        favs.insert(matrix()).unwrap();
        let upper = FavoriteMovie::new("The Matrix", "TT0133093", 1999, None);
        assert!(matches!(favs.insert(upper), Err(MovieError::Conflict(_))));
        assert_eq!(favs.len(), 1);
    }

    #[test]
    fn test_insert_requires_title_and_id() {
        let mut favs = Favorites::new();
        let no_title = FavoriteMovie::new("", "tt1", 2000, None);
        let no_id = FavoriteMovie::new("Title", " ", 2000, None);
        assert!(matches!(favs.insert(no_title), Err(MovieError::Validation(_))));
        assert!(matches!(favs.insert(no_id), Err(MovieError::Validation(_))));
        assert!(favs.is_empty());
    }

    #[test]
    fn test_remove_case_insensitive() {
        let mut favs = Favorites::new();
        favs.insert(matrix()).unwrap();
        assert_eq!(favs.remove("TT0133093").unwrap(), 1);
        assert!(!favs.contains("tt0133093"));
    }

    #[test]
    fn test_remove_unknown_leaves_collection_alone() {
        let mut favs = Favorites::new();
        favs.insert(matrix()).unwrap();
        assert!(matches!(favs.remove("tt9999999"), Err(MovieError::NotFound(_))));
        assert_eq!(favs.len(), 1);
        assert!(matches!(favs.remove("  "), Err(MovieError::Validation(_))));
    }

    #[test]
    fn test_remove_drops_all_matches() {
        // Hand-edited files may carry duplicates.
        let mut favs = Favorites::from_vec(vec![
            matrix(),
            FavoriteMovie::new("The Matrix", "TT0133093", 1999, None),
        ]);
        assert_eq!(favs.remove("tt0133093").unwrap(), 2);
        assert!(favs.is_empty());
    }

    #[test]
    fn test_id_set_is_lowercased() {
        let favs = Favorites::from_vec(vec![FavoriteMovie::new("Up", "TT1049413", 2009, None)]);
        assert!(favs.id_set().contains("tt1049413"));
    }
}
