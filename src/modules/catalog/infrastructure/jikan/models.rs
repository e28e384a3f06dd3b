// Jikan v4 API models for the detail-view endpoints
// Wire shapes per https://docs.api.jikan.moe/

use serde::{Deserialize, Serialize};

// Response envelopes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JikanItem<T> {
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JikanList<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub last_visible_page: u32,
    pub has_next_page: bool,
}

// Shared primitives
pub type MalId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MalEntity {
    pub mal_id: MalId,
    pub r#type: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MalEntityWithImages {
    pub mal_id: MalId,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub images: Option<Images>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Images {
    #[serde(default)]
    pub jpg: Option<ImageUrls>,
    #[serde(default)]
    pub webp: Option<ImageUrls>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUrls {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub small_image_url: Option<String>,
    #[serde(default)]
    pub large_image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trailer {
    #[serde(default)]
    pub youtube_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub embed_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aired {
    #[serde(default)]
    pub from: Option<String>, // ISO8601 UTC
    #[serde(default)]
    pub to: Option<String>, // ISO8601 UTC
    #[serde(default)]
    pub string: Option<String>, // Human-readable date range
}

// Anime detail, trimmed to the fields the detail view renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anime {
    pub mal_id: MalId,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub images: Option<Images>,
    #[serde(default)]
    pub trailer: Option<Trailer>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub title_english: Option<String>,
    #[serde(default)]
    pub r#type: Option<String>, // TV, Movie, OVA, etc.
    #[serde(default)]
    pub episodes: Option<i32>,
    #[serde(default)]
    pub status: Option<String>, // Finished Airing, Currently Airing
    #[serde(default)]
    pub aired: Option<Aired>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub score: Option<f32>,
    #[serde(default)]
    pub popularity: Option<i32>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<MalEntity>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeCharacterEdge {
    pub character: MalEntityWithImages,
    pub role: String, // Main / Supporting
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEdge {
    pub entry: RecommendationTarget,
    #[serde(default)]
    pub votes: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationTarget {
    pub mal_id: MalId,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub images: Option<Images>,
    pub title: String,
}
