//! Merged view model for one anime identifier

use super::{AnimeDetail, CastEntry, RecommendationEntry};
use crate::modules::detail_view::domain::value_objects::AnimeId;
use serde::{Deserialize, Serialize};

/// Display cap for the Characters tab
pub const CAST_DISPLAY_CAP: usize = 12;
/// Display cap for the Recommendations tab
pub const RECOMMENDATION_DISPLAY_CAP: usize = 8;

/// Detail, cast, and recommendations merged for one identifier
///
/// Built once per fetch cycle and replaced wholesale on identifier change;
/// nothing outside the builder mutates it field-by-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailAggregate {
    id: AnimeId,
    detail: AnimeDetail,
    cast: Vec<CastEntry>,
    recommendations: Vec<RecommendationEntry>,
}

impl DetailAggregate {
    /// Assemble the aggregate, truncating the list resources to their display
    /// caps while preserving source order.
    pub fn new(
        id: AnimeId,
        detail: AnimeDetail,
        mut cast: Vec<CastEntry>,
        mut recommendations: Vec<RecommendationEntry>,
    ) -> Self {
        cast.truncate(CAST_DISPLAY_CAP);
        recommendations.truncate(RECOMMENDATION_DISPLAY_CAP);
        Self {
            id,
            detail,
            cast,
            recommendations,
        }
    }

    pub fn id(&self) -> AnimeId {
        self.id
    }

    pub fn detail(&self) -> &AnimeDetail {
        &self.detail
    }

    pub fn cast(&self) -> &[CastEntry] {
        &self.cast
    }

    pub fn recommendations(&self) -> &[RecommendationEntry] {
        &self.recommendations
    }

    pub fn has_trailer(&self) -> bool {
        self.detail.has_trailer()
    }
}
