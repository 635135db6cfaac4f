// ABOUTME: Output models for listing routes.
// ABOUTME: FeedItem and FeedDocument are the shapes handed back to the host renderer.

use serde::{Deserialize, Serialize};

/// One book entry from a listing page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    pub title: String,
    /// HTML fragment embedding the cover image.
    pub description: String,
    pub link: String,
}

/// A complete listing feed, ready for the host to render.
///
/// The `item` field keeps the singular name the downstream renderer consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedDocument {
    pub title: String,
    pub link: String,
    pub item: Vec<FeedItem>,
}
