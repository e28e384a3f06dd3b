pub mod derived_stats;

pub use derived_stats::DerivedStats;
