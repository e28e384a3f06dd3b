use miteru_detail::modules::catalog::{JikanAdapter, RateLimitClient};
use miteru_detail::shared::utils::init_logger;

#[test]
fn test_adapter_creation() {
    init_logger();
    let adapter = JikanAdapter::new();
    assert_eq!(adapter.base_url(), "https://api.jikan.moe/v4");
}

#[test]
fn test_custom_base_url() {
    let adapter = JikanAdapter::new().with_base_url("http://localhost:8080/v4");
    assert_eq!(adapter.base_url(), "http://localhost:8080/v4");
}

#[test]
fn test_custom_rate_limit() {
    let adapter = JikanAdapter::with_client(RateLimitClient::with_rate_limit(5.0, 10));
    assert!(adapter.can_make_request_now());
}

#[test]
fn test_can_make_request() {
    let adapter = JikanAdapter::new();
    let _can_request = adapter.can_make_request_now();
}

#[tokio::test]
async fn test_multiple_adapters_are_independent() {
    let adapter1 = JikanAdapter::with_client(RateLimitClient::with_rate_limit(100.0, 50));
    let adapter2 = JikanAdapter::new();
    for _ in 0..5 {
        let _ = adapter1.can_make_request_now();
    }
    assert_eq!(adapter1.base_url(), adapter2.base_url());
}
