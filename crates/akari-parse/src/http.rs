//! Shared HTTP client construction for consistent timeout configuration.

use std::time::Duration;

/// Create an HTTP client with standard configuration.
///
/// Config: 10s connect timeout, 30s request timeout,
/// `akarifavo/{version}` user-agent.
#[must_use]
pub fn default_client() -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("akarifavo/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("default HTTP client construction must not fail")
}
