mod normalize;
mod query;

pub use normalize::{normalize_poster, parse_year};
pub use query::QueryParams;
