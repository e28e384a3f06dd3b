pub mod controller;
pub mod ports;
pub mod use_cases;

pub use controller::{DetailViewController, ViewPhase};
pub use ports::CatalogClient;
pub use use_cases::load_detail_view::{FetchOutcome, LoadDetailViewHandler};
