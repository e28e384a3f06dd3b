use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::detail_view::application::ports::CatalogClient;
use crate::modules::detail_view::domain::{AnimeId, DetailAggregate};
use crate::shared::{application::use_case::Query, errors::AppResult};

use super::outcome::FetchOutcome;

/// Query handler for one detail-view fetch cycle
///
/// Fans out the three catalog requests concurrently, waits until all have
/// settled, then merges the results into one aggregate. The detail resource
/// is mandatory; cast and recommendations degrade to empty lists on failure.
pub struct LoadDetailViewHandler<C: CatalogClient> {
    catalog: Arc<C>,
}

impl<C: CatalogClient> LoadDetailViewHandler<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// Issue the three requests concurrently and capture every outcome.
    ///
    /// Never short-circuits on the first failure: the join completes only
    /// after all three have settled, and each result is captured on its own.
    pub async fn fetch(&self, id: AnimeId) -> FetchOutcome {
        let (detail, cast, recommendations) = tokio::join!(
            self.catalog.fetch_detail(id),
            self.catalog.fetch_cast(id),
            self.catalog.fetch_recommendations(id),
        );

        FetchOutcome {
            detail,
            cast,
            recommendations,
        }
    }

    /// Merge a settled fetch into exactly one aggregate.
    ///
    /// Fails the cycle only when the detail resource failed; a failed cast or
    /// recommendation list is downgraded to an empty one.
    pub fn build(&self, id: AnimeId, outcome: FetchOutcome) -> AppResult<DetailAggregate> {
        let detail = outcome.detail?;

        let cast = outcome.cast.unwrap_or_else(|e| {
            log::warn!("Cast fetch failed for anime '{}', continuing without: {}", id, e);
            Vec::new()
        });

        let recommendations = outcome.recommendations.unwrap_or_else(|e| {
            log::warn!(
                "Recommendations fetch failed for anime '{}', continuing without: {}",
                id,
                e
            );
            Vec::new()
        });

        Ok(DetailAggregate::new(id, detail, cast, recommendations))
    }
}

#[async_trait]
impl<C: CatalogClient> Query<AnimeId, DetailAggregate> for LoadDetailViewHandler<C> {
    async fn execute(&self, id: AnimeId) -> AppResult<DetailAggregate> {
        let outcome = self.fetch(id).await;
        self.build(id, outcome)
    }
}
