//! Presentation statistics derived from the current aggregate
//!
//! Pure and side-effect free. The controller recomputes these exactly once
//! per aggregate replacement; unrelated view-state churn (tab switches, the
//! favorite toggle) never touches them.

use crate::modules::detail_view::domain::entities::DetailAggregate;
use serde::{Deserialize, Serialize};

const GENRE_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedStats {
    /// Score mapped from the catalog's 0-10 scale to [0, 100]
    pub score_percentage: f32,
    /// Human-readable air-date descriptor, "Unknown" when absent
    pub formatted_air_date: String,
    /// Genre names joined with ", ", "N/A" when there are none
    pub genre_summary: String,
    /// Popularity rank, carried as derived data
    pub popularity_rank: Option<i32>,
}

impl DerivedStats {
    pub fn from_aggregate(aggregate: &DetailAggregate) -> Self {
        let detail = aggregate.detail();

        let score_percentage = match detail.score {
            Some(score) => (score / 10.0) * 100.0,
            None => 0.0,
        };

        let genre_summary = if detail.genres.is_empty() {
            "N/A".to_string()
        } else {
            detail.genres.join(GENRE_SEPARATOR)
        };

        let formatted_air_date = detail
            .aired
            .clone()
            .unwrap_or_else(|| "Unknown".to_string());

        Self {
            score_percentage,
            formatted_air_date,
            genre_summary,
            popularity_rank: detail.popularity,
        }
    }

    /// Rank formatted for display
    pub fn popularity_label(&self) -> String {
        match self.popularity_rank {
            Some(rank) => rank.to_string(),
            None => "N/A".to_string(),
        }
    }
}
