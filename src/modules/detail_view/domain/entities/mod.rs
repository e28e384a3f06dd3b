pub mod anime_detail;
pub mod cast_entry;
pub mod detail_aggregate;
pub mod recommendation_entry;

pub use anime_detail::AnimeDetail;
pub use cast_entry::CastEntry;
pub use detail_aggregate::DetailAggregate;
pub use recommendation_entry::RecommendationEntry;
