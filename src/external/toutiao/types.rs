use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct FeedResponse {
    #[serde(default)]
    pub data: Vec<FeedItem>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FeedItem {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "abstract", default)]
    pub summary: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub image_list: Vec<FeedImage>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FeedImage {
    #[serde(default)]
    pub url: String,
}

/// One news entry from the feed. `source_url` is site-relative and must be
/// prefixed with the configured site URL to form an absolute link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub summary: String,
    pub source_url: String,
    pub image_urls: Vec<String>,
}
