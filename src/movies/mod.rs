pub mod handlers;
pub mod reconcile;
pub mod service;
pub mod types;

pub use handlers::*;
pub use reconcile::annotate;
pub use service::MoviesService;
pub use types::*;
