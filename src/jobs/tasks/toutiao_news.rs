use async_trait::async_trait;
use rand::Rng;

use crate::config::settings::ToutiaoProviderConfig;
use crate::error::{AppError, AppResult};
use crate::external::toutiao::{NewsItem, ToutiaoClient};
use crate::jobs::types::{JobContext, NotifyTask};
use crate::message::{ActionCardBuilder, AvatarState, ButtonLayout, MessageBuilder, MessageKind};

/// Exclusive upper bound on the detail draw
const MAX_DETAIL_INDEX: usize = 5;

/// Label of the card's single button
const DETAIL_BUTTON_LABEL: &str = "查看详情";

/// Evening news pick, rendered as a single-button action card
#[derive(Debug)]
pub struct ToutiaoNewsTask {
    client: ToutiaoClient,
    site_url: String,
}

impl ToutiaoNewsTask {
    pub fn new(config: &ToutiaoProviderConfig) -> Self {
        Self {
            client: ToutiaoClient::new(&config.endpoint),
            site_url: config.site_url.clone(),
        }
    }
}

/// Pick which entry supplies the card detail.
///
/// Entry 0 only supplies the headline title, so the draw starts at 1.
fn select_detail_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> AppResult<usize> {
    if len < 2 {
        return Err(AppError::Decode {
            context: format!("news feed too short: {} entries", len),
            source: None,
        });
    }
    Ok(rng.random_range(1..MAX_DETAIL_INDEX.min(len)))
}

/// Render the card body for the chosen entry
fn format_detail(item: &NewsItem) -> AppResult<String> {
    let image_url = item.image_urls.first().ok_or_else(|| AppError::Decode {
        context: format!("news entry '{}' has no image", item.title),
        source: None,
    })?;
    Ok(format!(
        "![screenshot]({}) \n### {}\n {}",
        image_url, item.title, item.summary
    ))
}

#[async_trait]
impl NotifyTask for ToutiaoNewsTask {
    fn name(&self) -> &'static str {
        "toutiao"
    }

    fn category(&self) -> &'static str {
        "头条科技新闻"
    }

    async fn run(&self, ctx: &JobContext) -> AppResult<()> {
        let items = self.client.fetch_feed().await?;
        let index = select_detail_index(&mut rand::rng(), items.len())?;
        let detail = &items[index];

        let card = ActionCardBuilder::new(
            &items[0].title,
            format_detail(detail)?,
            ButtonLayout::Horizontal,
            AvatarState::Hidden,
        )
        .single_button(
            DETAIL_BUTTON_LABEL,
            format!("{}{}", self.site_url, detail.source_url),
        )
        .build();

        let message = MessageBuilder::new(MessageKind::ActionCard)
            .action_card(card)
            .build()?;
        ctx.robot.send(&message).await
    }
}
