// ABOUTME: The Client struct owning the HTTP client and the route cache.
// ABOUTME: Route handlers on Client live in their own modules (see book.rs).

use crate::cache::TtlCache;
use crate::options::{ClientBuilder, Options};

/// Client for the upstream site's listing routes.
pub struct Client {
    pub(crate) opts: Options,
    pub(crate) http_client: reqwest::Client,
    pub(crate) cache: TtlCache,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });

        Self {
            opts,
            http_client,
            cache: TtlCache::new(),
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
