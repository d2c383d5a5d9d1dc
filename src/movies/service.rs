use std::sync::Arc;
use tracing::info;

use super::reconcile::annotate;
use super::types::*;
use crate::error::MovieResult;
use crate::favorites::{FavoriteMovie, FavoritesStore};
use crate::omdb::MovieSearch;

/// Request-level operations behind the `/movies` endpoints.
///
/// Holds no favorites itself: each call goes back to the store, which
/// rereads the file.
pub struct MoviesService {
    search: Arc<dyn MovieSearch>,
    store: Arc<FavoritesStore>,
    page_size: u32,
}

impl MoviesService {
    pub fn new(search: Arc<dyn MovieSearch>, store: Arc<FavoritesStore>, page_size: u32) -> Self {
        Self {
            search,
            store,
            page_size,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub async fn search(&self, query: &str, page: u32) -> MovieResult<DataResponse<SearchData>> {
        let results = self.search.search(query, page).await?;

        // Favorites may have changed since the last request.
        let favorites = self.store.load().await;
        let movies = annotate(results.movies, &favorites);

        Ok(DataResponse::new(SearchData {
            count: movies.len(),
            movies,
            total_results: results.total_results,
        }))
    }

    pub async fn add_favorite(&self, movie: FavoriteMovie) -> MovieResult<DataResponse<MessageData>> {
        let imdb_id = movie.imdb_id.clone();
        self.store.add(movie).await?;
        info!(imdb_id = %imdb_id, "added favorite");
        Ok(DataResponse::new(MessageData::new("Movie added to favorites")))
    }

    pub async fn remove_favorite(&self, imdb_id: &str) -> MovieResult<DataResponse<MessageData>> {
        self.store.remove(imdb_id).await?;
        info!(imdb_id = %imdb_id, "removed favorite");
        Ok(DataResponse::new(MessageData::new(
            "Movie removed from favorites",
        )))
    }

    pub async fn list_favorites(
        &self,
        page: u32,
        page_size: Option<u32>,
    ) -> MovieResult<DataResponse<FavoritesData>> {
        let page = self
            .store
            .list(page, page_size.unwrap_or(self.page_size))
            .await?;
        Ok(DataResponse::new(FavoritesData {
            favorites: page.items,
            count: page.count,
            total_results: page.total_results,
            current_page: page.current_page,
            total_pages: page.total_pages,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MovieError;
    use crate::omdb::{SearchHit, SearchResults};
    use async_trait::async_trait;
    use tempfile::tempdir;

    struct FixedSearch(Vec<SearchHit>);

    #[async_trait]
    impl MovieSearch for FixedSearch {
        async fn search(&self, _title: &str, _page: u32) -> MovieResult<SearchResults> {
            Ok(SearchResults {
                movies: self.0.clone(),
                total_results: self.0.len() as u64,
            })
        }
    }

    struct FailingSearch;

    #[async_trait]
    impl MovieSearch for FailingSearch {
        async fn search(&self, _title: &str, _page: u32) -> MovieResult<SearchResults> {
            Err(MovieError::Authentication("Invalid API key".to_string()))
        }
    }

    fn matrix_hit() -> SearchHit {
        SearchHit {
            title: "The Matrix".to_string(),
            imdb_id: "tt0133093".to_string(),
            year: 1999,
            poster: String::new(),
        }
    }

    fn service(dir: &std::path::Path, search: Arc<dyn MovieSearch>) -> MoviesService {
        let store = Arc::new(FavoritesStore::new(dir.join("favorites.json")));
        MoviesService::new(search, store, 10)
    }

    #[tokio::test]
    async fn test_favorite_status_follows_store() {
        let dir = tempdir().unwrap();
        let svc = service(dir.path(), Arc::new(FixedSearch(vec![matrix_hit()])));

        let before = svc.search("Matrix", 1).await.unwrap();
        assert!(!before.data.movies[0].is_favorite);

        svc.add_favorite(FavoriteMovie::new("The Matrix", "tt0133093", 1999, None))
            .await
            .unwrap();
        let after_add = svc.search("Matrix", 1).await.unwrap();
        assert!(after_add.data.movies[0].is_favorite);
        assert_eq!(after_add.data.count, 1);
        assert_eq!(after_add.data.total_results, 1);

        svc.remove_favorite("tt0133093").await.unwrap();
        let after_remove = svc.search("Matrix", 1).await.unwrap();
        assert!(!after_remove.data.movies[0].is_favorite);
    }

    #[tokio::test]
    async fn test_search_errors_pass_through() {
        let dir = tempdir().unwrap();
        let svc = service(dir.path(), Arc::new(FailingSearch));
        assert!(matches!(
            svc.search("Matrix", 1).await,
            Err(MovieError::Authentication(_))
        ));
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let dir = tempdir().unwrap();
        let svc = service(dir.path(), Arc::new(FixedSearch(vec![])));
        let resp = svc.list_favorites(1, None).await.unwrap();
        assert!(resp.data.favorites.is_empty());
        assert_eq!(resp.data.count, 0);
        assert_eq!(resp.data.total_results, 0);
        assert_eq!(resp.data.total_pages, 0);
        assert_eq!(resp.data.current_page, 1);
    }

    #[tokio::test]
    async fn test_list_uses_default_page_size() {
        let dir = tempdir().unwrap();
        let svc = service(dir.path(), Arc::new(FixedSearch(vec![])));
        for i in 0..12 {
            let id = format!("tt{:07}", i);
            svc.add_favorite(FavoriteMovie::new("Movie", &id, 2001, None))
                .await
                .unwrap();
        }
        let first = svc.list_favorites(1, None).await.unwrap();
        assert_eq!(first.data.count, 10);
        assert_eq!(first.data.total_pages, 2);

        let second = svc.list_favorites(2, None).await.unwrap();
        assert_eq!(second.data.count, 2);
        assert_eq!(second.data.favorites[0].imdb_id, "tt0000010");

        let small = svc.list_favorites(1, Some(5)).await.unwrap();
        assert_eq!(small.data.total_pages, 3);
    }
}
