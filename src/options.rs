// ABOUTME: Configuration options for the listing client, plus the ClientBuilder.
// ABOUTME: ClientBuilder provides a fluent API for constructing Client instances.

use std::time::Duration;

use crate::client::Client;

/// Production base URL of the upstream site.
pub const DEFAULT_BASE_URL: &str = "https://b.iacg.site";

/// Configuration options for the listing client.
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Duration,
    pub user_agent: String,
    /// How long a fetched listing page stays cached before re-fetching.
    pub route_expire: Duration,
    /// Base URL of the upstream site; overridable for tests.
    pub base_url: String,
    pub http_client: Option<reqwest::Client>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: "iacg-feed/0.1".to_string(),
            route_expire: Duration::from_secs(3600),
            base_url: DEFAULT_BASE_URL.to_string(),
            http_client: None,
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Set the cache expiry for fetched listing pages.
    pub fn route_expire(mut self, route_expire: Duration) -> Self {
        self.opts.route_expire = route_expire;
        self
    }

    /// Point the client at a different upstream base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.opts.base_url = base_url.into();
        self
    }

    /// Use a custom HTTP client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}
