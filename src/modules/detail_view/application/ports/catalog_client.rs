use async_trait::async_trait;

use crate::modules::detail_view::domain::{
    AnimeDetail, AnimeId, CastEntry, RecommendationEntry,
};
use crate::shared::errors::AppResult;

/// Port (interface) for the remote catalog API
/// Infrastructure layer implements this per provider (Jikan today)
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch the detail record for one catalog entry
    async fn fetch_detail(&self, id: AnimeId) -> AppResult<AnimeDetail>;

    /// Fetch the cast list for one catalog entry
    async fn fetch_cast(&self, id: AnimeId) -> AppResult<Vec<CastEntry>>;

    /// Fetch the recommendation list for one catalog entry
    async fn fetch_recommendations(&self, id: AnimeId) -> AppResult<Vec<RecommendationEntry>>;
}
