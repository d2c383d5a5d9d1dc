use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use super::collection::Favorites;
use super::model::FavoriteMovie;
use super::pagination::{check_page_args, Page};
use crate::error::{MovieError, MovieResult};

/// Favorites backed by a single JSON file.
///
/// Nothing is cached between calls: every operation starts by reading the
/// file again, so edits made by another request (or by hand) are always seen.
/// Mutations hold `write_lock` across load, change and save, which keeps
/// concurrent add/remove calls in this process from losing each other's
/// updates. Other processes writing the same file are not guarded against.
#[derive(Debug)]
pub struct FavoritesStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FavoritesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn data_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    async fn ensure_data_dir(&self) -> std::io::Result<()> {
        let dir = self.data_dir();
        if !tokio::fs::try_exists(dir).await.unwrap_or(false) {
            tokio::fs::create_dir_all(dir).await?;
        }
        Ok(())
    }

    /// Read the current favorites from disk.
    ///
    /// Never fails. A missing file is an empty collection; unreadable or
    /// malformed content is logged and also treated as empty.
    pub async fn load(&self) -> Favorites {
        if let Err(e) = self.ensure_data_dir().await {
            error!(path = %self.data_dir().display(), error = %e, "cannot create favorites directory");
        }

        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no favorites file yet");
                return Favorites::new();
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "cannot read favorites file, starting empty");
                return Favorites::new();
            }
        };

        decode_favorites(&self.path, &content)
    }

    /// Replace the backing file with `favorites`.
    pub async fn save(&self, favorites: &Favorites) -> MovieResult<()> {
        self.ensure_data_dir().await.map_err(MovieError::Persistence)?;

        let content = serde_json::to_string_pretty(favorites.movies())
            .map_err(|e| MovieError::Persistence(e.into()))?;

        // Write next to the target and rename over it, so readers never see
        // a half-written file.
        let tmp = self
            .data_dir()
            .join(format!(".favorites-{}.tmp", uuid::Uuid::new_v4()));
        if let Err(e) = tokio::fs::write(&tmp, content).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(MovieError::Persistence(e));
        }
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(MovieError::Persistence(e));
        }

        debug!(path = %self.path.display(), count = favorites.len(), "saved favorites");
        Ok(())
    }

    pub async fn add(&self, movie: FavoriteMovie) -> MovieResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut favorites = self.load().await;
        favorites.insert(movie)?;
        self.save(&favorites).await
    }

    pub async fn remove(&self, imdb_id: &str) -> MovieResult<()> {
        if imdb_id.trim().is_empty() {
            return Err(MovieError::validation("Movie ID is required"));
        }
        let _guard = self.write_lock.lock().await;
        let mut favorites = self.load().await;
        favorites.remove(imdb_id)?;
        self.save(&favorites).await
    }

    pub async fn list(&self, page: u32, page_size: u32) -> MovieResult<Page<FavoriteMovie>> {
        check_page_args(page, page_size)?;
        self.load().await.page(page, page_size)
    }
}

fn decode_favorites(path: &Path, content: &str) -> Favorites {
    let value: Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "favorites file is not valid JSON, starting empty");
            return Favorites::new();
        }
    };

    let Value::Array(entries) = value else {
        warn!(path = %path.display(), "favorites file does not hold a list, starting empty");
        return Favorites::new();
    };

    let mut movies = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<FavoriteMovie>(entry) {
            Ok(movie) => movies.push(movie),
            Err(e) => {
                warn!(path = %path.display(), index, error = %e, "skipping malformed favorite")
            }
        }
    }
    Favorites::from_vec(movies)
}
