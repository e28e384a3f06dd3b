pub mod load_detail_view;

pub use load_detail_view::{FetchOutcome, LoadDetailViewHandler};
