//! Rate-limited HTTP client for the catalog API
//!
//! Wraps reqwest with a governor quota so callers never have to think about
//! the catalog's request budget. Failed cycles are not retried here; a new
//! attempt only happens when the caller explicitly re-triggers one.

use crate::shared::errors::{AppError, AppResult};
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use reqwest::{Client, Response};
use std::num::NonZeroU32;
use std::time::Duration;

type DirectRateLimiter = GovernorRateLimiter<
    governor::state::direct::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
    governor::middleware::NoOpMiddleware,
>;

/// HTTP client that paces requests to the catalog's published limits
pub struct RateLimitClient {
    client: Client,
    rate_limiter: DirectRateLimiter,
    user_agent: String,
    provider_name: String,
}

impl RateLimitClient {
    /// Create a new client for the Jikan API
    pub fn for_jikan() -> Self {
        // Jikan v4: ~60 req/min = 1.0 req/sec average with 3 req/sec burst capability
        Self::new(
            "Jikan",
            Self::create_rate_limiter(1.0, 3),
            "miteru/1.0 (https://github.com/your-repo/miteru)".to_string(),
        )
    }

    /// Create a rate limiter with specified requests per second and burst capacity
    fn create_rate_limiter(requests_per_second: f64, burst_size: u32) -> DirectRateLimiter {
        // Convert rate to duration between requests
        let duration = if requests_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / requests_per_second)
        } else {
            Duration::MAX // Effectively disable if rate is 0
        };

        let burst = NonZeroU32::new(burst_size.max(1)).unwrap();
        let quota = Quota::with_period(duration).unwrap().allow_burst(burst);

        GovernorRateLimiter::direct(quota)
    }

    /// Create a custom client
    pub fn new(provider_name: &str, rate_limiter: DirectRateLimiter, user_agent: String) -> Self {
        Self {
            client: Client::new(),
            rate_limiter,
            user_agent,
            provider_name: provider_name.to_string(),
        }
    }

    /// Create a client with a custom rate (for testing)
    pub fn with_rate_limit(requests_per_second: f64, burst_size: u32) -> Self {
        Self::new(
            "Jikan",
            Self::create_rate_limiter(requests_per_second, burst_size),
            "miteru/1.0 (https://github.com/your-repo/miteru)".to_string(),
        )
    }

    /// Make a GET request, waiting for the rate limiter first
    pub async fn get<T>(&self, url: &str) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.rate_limiter.until_ready().await;

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                AppError::ApiError(format!("{} API request failed: {}", self.provider_name, e))
            })?;

        if response.status() == 429 {
            return Err(AppError::RateLimitError(format!(
                "{} API rate limit exceeded",
                self.provider_name
            )));
        }

        if !response.status().is_success() {
            return Err(AppError::ApiError(format!(
                "{} API returned error: {}",
                self.provider_name,
                response.status()
            )));
        }

        self.parse_response(response).await
    }

    /// Parse the response body as JSON
    async fn parse_response<T>(&self, response: Response) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to read {} response: {}",
                self.provider_name, e
            ))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.provider_name,
                e,
                body_preview(&response_text)
            ))
        })
    }

    /// Check if a request can be made now (for testing/debugging)
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter.check().is_ok()
    }

    /// Get provider name
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }
}

/// First 200 characters of a response body for error context.
/// Truncates on a char boundary so multi-byte bodies cannot panic the slice.
fn body_preview(text: &str) -> String {
    let mut preview: String = text.chars().take(200).collect();
    if preview.len() < text.len() {
        preview.push_str("...");
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = RateLimitClient::for_jikan();
        assert_eq!(client.provider_name(), "Jikan");
    }

    #[test]
    fn test_can_make_request() {
        let client = RateLimitClient::for_jikan();
        assert!(client.can_make_request_now());
    }

    #[test]
    fn test_burst_capacity() {
        let client = RateLimitClient::with_rate_limit(1.0, 2);
        assert!(client.can_make_request_now());
    }

    #[test]
    fn test_body_preview_short_bodies_pass_through() {
        assert_eq!(body_preview("{\"data\": null}"), "{\"data\": null}");
    }

    #[test]
    fn test_body_preview_truncates_long_bodies() {
        let body = "a".repeat(300);
        let preview = body_preview(&body);
        assert_eq!(preview, format!("{}...", "a".repeat(200)));
    }

    #[test]
    fn test_body_preview_multibyte_char_at_truncation_point() {
        // 199 ASCII bytes followed by a 3-byte char straddling offset 200
        let body = format!("{}€ and more", "a".repeat(199));
        let preview = body_preview(&body);
        assert!(preview.starts_with(&"a".repeat(199)));
        assert!(preview.contains('€'));
        assert!(preview.ends_with("..."));
    }
}
