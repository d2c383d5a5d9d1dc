use super::types::AnnotatedMovie;
use crate::favorites::Favorites;
use crate::omdb::SearchHit;

/// Mark each search hit that is also a favorite. Ids compare case-insensitively.
pub fn annotate(hits: Vec<SearchHit>, favorites: &Favorites) -> Vec<AnnotatedMovie> {
    let ids = favorites.id_set();
    hits.into_iter()
        .map(|hit| AnnotatedMovie {
            is_favorite: ids.contains(&hit.imdb_id.to_lowercase()),
            title: hit.title,
            imdb_id: hit.imdb_id,
            year: hit.year,
            poster: hit.poster,
        })
        .collect()
}
