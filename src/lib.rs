pub mod modules;
pub mod shared;

// Re-exports for consumers embedding the detail view
pub use modules::catalog::JikanAdapter;
pub use modules::detail_view::{
    application::controller::{DetailViewController, ViewPhase},
    application::ports::CatalogClient,
    domain::{
        AnimeDetail, AnimeId, CastEntry, DetailAggregate, DerivedStats, DetailTab,
        RecommendationEntry, ViewState,
    },
};
pub use shared::errors::{AppError, AppResult};
