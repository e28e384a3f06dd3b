//! Detail record for a single catalog entry

use serde::{Deserialize, Serialize};

/// Everything the Details tab renders for one anime
///
/// Owned by the aggregate once fetched; immutable for the rest of the cycle.
/// Most fields are optional because the catalog exposes sparse data for
/// not-yet-aired or obscure entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeDetail {
    pub title: String,
    /// User score on the catalog's 0-10 scale
    pub score: Option<f32>,
    pub episodes: Option<i32>,
    pub status: Option<String>,
    /// TV, Movie, OVA, ...
    pub kind: Option<String>,
    /// Ordered genre names
    pub genres: Vec<String>,
    /// Human-readable air-date descriptor, e.g. "Apr 3, 1998 to Apr 24, 1999"
    pub aired: Option<String>,
    pub duration: Option<String>,
    pub synopsis: Option<String>,
    /// Embeddable trailer URL, when the catalog has one
    pub trailer_embed_url: Option<String>,
    pub poster_url: Option<String>,
    pub popularity: Option<i32>,
}

impl AnimeDetail {
    pub fn has_trailer(&self) -> bool {
        self.trailer_embed_url.is_some()
    }
}
