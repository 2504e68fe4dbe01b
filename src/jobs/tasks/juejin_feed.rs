use async_trait::async_trait;
use rand::Rng;

use crate::config::settings::JuejinProviderConfig;
use crate::error::{AppError, AppResult};
use crate::external::juejin::{ArticleEntry, JuejinClient};
use crate::jobs::types::{JobContext, NotifyTask};
use crate::message::{FeedCardBuilder, FeedCardContent, MessageBuilder, MessageKind};

/// Number of consecutive entries shown per digest
const WINDOW_LEN: usize = 3;

/// Exclusive upper bound on the window start, from the provider's 200-entry
/// page size
const MAX_WINDOW_START: usize = 196;

/// Article digest, rendered as a feed card of three consecutive entries
#[derive(Debug)]
pub struct JuejinFeedTask {
    client: JuejinClient,
}

impl JuejinFeedTask {
    pub fn new(config: &JuejinProviderConfig) -> Self {
        Self {
            client: JuejinClient::new(&config.endpoint),
        }
    }
}

/// Pick the starting offset of the entry window.
///
/// Offsets start at 1 so entry 0 is never shown. A payload too short to
/// hold the window is a decode failure rather than a panic.
fn select_window_start<R: Rng + ?Sized>(rng: &mut R, len: usize) -> AppResult<usize> {
    if len < WINDOW_LEN + 1 {
        return Err(AppError::Decode {
            context: format!("article feed too short: {} entries", len),
            source: None,
        });
    }
    let upper = MAX_WINDOW_START.min(len - WINDOW_LEN + 1);
    Ok(rng.random_range(1..upper))
}

/// Build the feed card from the window starting at `start`
fn build_feed_card(entries: &[ArticleEntry], start: usize) -> FeedCardContent {
    let mut builder = FeedCardBuilder::new();
    for entry in &entries[start..start + WINDOW_LEN] {
        builder = builder.link(&entry.title, &entry.original_url, &entry.screenshot);
    }
    builder.build()
}

#[async_trait]
impl NotifyTask for JuejinFeedTask {
    fn name(&self) -> &'static str {
        "juejin"
    }

    fn category(&self) -> &'static str {
        "掘金技术文章"
    }

    async fn run(&self, ctx: &JobContext) -> AppResult<()> {
        let entries = self.client.fetch_entries().await?;
        let start = select_window_start(&mut rand::rng(), entries.len())?;
        let message = MessageBuilder::new(MessageKind::FeedCard)
            .feed_card(build_feed_card(&entries, start))
            .build()?;
        ctx.robot.send(&message).await
    }
}
