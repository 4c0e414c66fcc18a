//! Client configuration.

use std::time::Duration;

use url::Url;

use pricelens_core::limits::MAX_PAGES;

/// Public endpoint of the Retail Prices API.
pub const DEFAULT_ENDPOINT: &str = "https://prices.azure.com/api/retail/prices";

/// API version the gateway pins; includes savings-plan data in responses.
pub const API_VERSION: &str = "2023-01-01-preview";

/// Environment variable overriding the endpoint (tests, proxies).
pub const ENDPOINT_ENV_VAR: &str = "PRICELENS_API_URL";

/// Configuration for [`crate::PricingClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the pricing endpoint.
    pub base_url: Url,
    /// `api-version` query parameter sent with every request.
    pub api_version: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Hard bound on continuation pages followed per fetch.
    pub max_pages: usize,
    /// User agent header value.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint URL is valid"),
            api_version: API_VERSION.to_string(),
            timeout: Duration::from_secs(30),
            max_pages: MAX_PAGES,
            user_agent: concat!("pricelens/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration pointing at the given endpoint.
    #[must_use]
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    /// Creates a configuration honoring the `PRICELENS_API_URL` override
    /// when it is set and parses as a URL.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(ENDPOINT_ENV_VAR)
            .ok()
            .and_then(|v| Url::parse(&v).ok())
        {
            Some(url) => Self::with_base_url(url),
            None => Self::default(),
        }
    }
}
