use crate::modules::detail_view::domain::{AnimeDetail, CastEntry, RecommendationEntry};
use crate::shared::errors::AppResult;

/// Tri-state result of one fan-out fetch: each resource settles on its own,
/// so a cast failure is visible independently of a detail success.
#[derive(Debug)]
pub struct FetchOutcome {
    pub detail: AppResult<AnimeDetail>,
    pub cast: AppResult<Vec<CastEntry>>,
    pub recommendations: AppResult<Vec<RecommendationEntry>>,
}
