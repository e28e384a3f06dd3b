pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::controller::{DetailViewController, ViewPhase};
pub use application::ports::CatalogClient;
pub use domain::{
    AnimeDetail, AnimeId, CastEntry, DerivedStats, DetailAggregate, DetailTab,
    RecommendationEntry, ViewState,
};
