use async_trait::async_trait;

use crate::modules::catalog::infrastructure::http_client::RateLimitClient;
use crate::modules::detail_view::application::ports::CatalogClient;
use crate::modules::detail_view::domain::{
    AnimeDetail, AnimeId, CastEntry, RecommendationEntry,
};
use crate::shared::errors::{AppError, AppResult};

use super::mapper::JikanMapper;
use super::models::*;

const DEFAULT_BASE_URL: &str = "https://api.jikan.moe/v4";

/// Jikan (MyAnimeList) catalog adapter with REST API
pub struct JikanAdapter {
    http_client: RateLimitClient,
    base_url: String,
    mapper: JikanMapper,
}

impl JikanAdapter {
    pub fn new() -> Self {
        Self {
            http_client: RateLimitClient::for_jikan(),
            base_url: DEFAULT_BASE_URL.to_string(),
            mapper: JikanMapper::new(),
        }
    }

    /// Create adapter with custom HTTP client (for testing)
    pub fn with_client(http_client: RateLimitClient) -> Self {
        Self {
            http_client,
            base_url: DEFAULT_BASE_URL.to_string(),
            mapper: JikanMapper::new(),
        }
    }

    /// Point the adapter at a different base URL (staging, local stub)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Create adapter honoring the `CATALOG_API_BASE_URL` environment variable
    pub fn from_env() -> Self {
        match std::env::var("CATALOG_API_BASE_URL") {
            Ok(base_url) if !base_url.is_empty() => Self::new().with_base_url(base_url),
            _ => Self::new(),
        }
    }

    /// Check if a request can be made immediately (for testing and monitoring)
    pub fn can_make_request_now(&self) -> bool {
        self.http_client.can_make_request_now()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the detail record for an anime
    pub async fn get_anime(&self, id: AnimeId) -> AppResult<AnimeDetail> {
        let url = format!("{}/anime/{}", self.base_url, id);

        log::info!("Jikan: Getting anime by ID '{}'", id);

        let jikan_response: JikanItem<Anime> = match self.http_client.get(&url).await {
            Ok(response) => response,
            Err(AppError::ApiError(msg)) if msg.contains("404") => {
                return Err(AppError::NotFound(format!("No anime found for ID '{}'", id)));
            }
            Err(e) => return Err(e),
        };

        let detail = self.mapper.map_detail(jikan_response.data)?;

        log::info!("Jikan: Found anime by ID '{}'", id);
        Ok(detail)
    }

    /// Get anime characters
    pub async fn get_anime_characters(&self, id: AnimeId) -> AppResult<Vec<CastEntry>> {
        let url = format!("{}/anime/{}/characters", self.base_url, id);

        log::info!("Jikan: Getting characters for anime ID '{}'", id);

        let jikan_response: JikanList<AnimeCharacterEdge> = self.http_client.get(&url).await?;

        log::info!(
            "Jikan: Found {} characters for anime ID '{}'",
            jikan_response.data.len(),
            id
        );
        Ok(jikan_response
            .data
            .into_iter()
            .map(|edge| self.mapper.map_cast_entry(edge))
            .collect())
    }

    /// Get anime recommendations
    pub async fn get_anime_recommendations(
        &self,
        id: AnimeId,
    ) -> AppResult<Vec<RecommendationEntry>> {
        let url = format!("{}/anime/{}/recommendations", self.base_url, id);

        log::info!("Jikan: Getting recommendations for anime ID '{}'", id);

        let jikan_response: JikanList<RecommendationEdge> = self.http_client.get(&url).await?;

        log::info!(
            "Jikan: Found {} recommendations for anime ID '{}'",
            jikan_response.data.len(),
            id
        );
        Ok(jikan_response
            .data
            .into_iter()
            .map(|edge| self.mapper.map_recommendation(edge))
            .collect())
    }
}

impl Default for JikanAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogClient for JikanAdapter {
    async fn fetch_detail(&self, id: AnimeId) -> AppResult<AnimeDetail> {
        self.get_anime(id).await
    }

    async fn fetch_cast(&self, id: AnimeId) -> AppResult<Vec<CastEntry>> {
        self.get_anime_characters(id).await
    }

    async fn fetch_recommendations(&self, id: AnimeId) -> AppResult<Vec<RecommendationEntry>> {
        self.get_anime_recommendations(id).await
    }
}
