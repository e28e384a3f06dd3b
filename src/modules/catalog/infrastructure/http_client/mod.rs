mod rate_limit_client;

pub use rate_limit_client::RateLimitClient;
