pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::{AnimeDetail, CastEntry, DetailAggregate, RecommendationEntry};
pub use services::DerivedStats;
pub use value_objects::{AnimeId, DetailTab, ViewState};
