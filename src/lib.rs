// ABOUTME: Main library entry point for the iacg-feed listing adapter.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, Options, models, errors, route metadata.

//! iacg-feed - A feed adapter for the b.iacg.site book listings.
//!
//! Fetches a listing page for a category, extracts the book entries, and
//! returns a normalized feed document for a host to render.
//!
//! # Example
//!
//! ```no_run
//! use iacg_feed::{Client, RouteError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), RouteError> {
//!     let client = Client::builder().build();
//!     let feed = client.book_listing(Some("day-book"), None).await?;
//!     println!("{}: {} items", feed.title, feed.item.len());
//!     Ok(())
//! }
//! ```

pub mod book;
pub mod cache;
pub mod client;
pub mod error;
pub mod fetch;
pub mod models;
pub mod options;
pub mod route;

pub use crate::cache::TtlCache;
pub use crate::client::Client;
pub use crate::error::RouteError;
pub use crate::models::{FeedDocument, FeedItem};
pub use crate::options::{ClientBuilder, Options, DEFAULT_BASE_URL};
pub use crate::route::{Features, Parameter, RadarRule, Route, BOOK_ROUTE};
