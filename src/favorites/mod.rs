pub mod collection;
pub mod model;
pub mod pagination;
pub mod store;

pub use collection::Favorites;
pub use model::{FavoriteMovie, NewFavorite, MIN_YEAR};
pub use pagination::{check_page_args, paginate, Page, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use store::FavoritesStore;
