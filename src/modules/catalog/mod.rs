pub mod infrastructure;

pub use infrastructure::http_client::RateLimitClient;
pub use infrastructure::jikan::JikanAdapter;
