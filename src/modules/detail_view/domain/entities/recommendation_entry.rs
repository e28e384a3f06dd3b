use crate::modules::detail_view::domain::value_objects::AnimeId;
use serde::{Deserialize, Serialize};

/// One recommendation card: a recommended title reference and its identifier,
/// so the UI can navigate to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub id: AnimeId,
    pub title: String,
    pub image_url: Option<String>,
}
