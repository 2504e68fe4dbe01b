use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct TimelineResponse {
    #[serde(default)]
    pub d: TimelineData,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct TimelineData {
    #[serde(default)]
    pub entrylist: Vec<TimelineEntry>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TimelineEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub screenshot: String,
    #[serde(rename = "originalUrl", default)]
    pub original_url: String,
}

/// One article from the timeline feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleEntry {
    pub title: String,
    pub screenshot: String,
    pub original_url: String,
}
