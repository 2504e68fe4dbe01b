use crate::message::model::{
    ActionCardContent, AtElement, AvatarState, ButtonLayout, CardButton, FeedCardContent,
    FeedLink, LinkContent, MarkdownContent, Message, MessageKind, TextContent,
};
use crate::message::BuildError;

/// Fluent builder for [`Message`].
///
/// Setters populate their payload field and hand the builder back by value;
/// `build()` freezes the message. A payload that does not match the declared
/// kind, or a missing one, is rejected at build time rather than silently
/// serialized.
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    message: Message,
}

impl MessageBuilder {
    pub fn new(kind: MessageKind) -> Self {
        Self {
            message: Message {
                kind,
                text: None,
                link: None,
                markdown: None,
                action_card: None,
                feed_card: None,
                at: None,
            },
        }
    }

    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.message.text = Some(TextContent {
            content: content.into(),
        });
        self
    }

    pub fn link(
        mut self,
        title: impl Into<String>,
        text: impl Into<String>,
        message_url: impl Into<String>,
        pic_url: impl Into<String>,
    ) -> Self {
        self.message.link = Some(LinkContent {
            title: title.into(),
            text: text.into(),
            message_url: message_url.into(),
            pic_url: pic_url.into(),
        });
        self
    }

    pub fn markdown(mut self, title: impl Into<String>, text: impl Into<String>) -> Self {
        self.message.markdown = Some(MarkdownContent {
            title: title.into(),
            text: text.into(),
        });
        self
    }

    pub fn action_card(mut self, element: ActionCardContent) -> Self {
        self.message.action_card = Some(element);
        self
    }

    pub fn feed_card(mut self, element: FeedCardContent) -> Self {
        self.message.feed_card = Some(element);
        self
    }

    /// Attach a mention element; combines with any payload variant.
    pub fn at(mut self, at_mobiles: Vec<String>, is_at_all: bool) -> Self {
        self.message.at = Some(AtElement {
            at_mobiles,
            is_at_all,
        });
        self
    }

    pub fn build(self) -> Result<Message, BuildError> {
        let kind = self.message.kind;
        let populated = [
            (MessageKind::Text, self.message.text.is_some()),
            (MessageKind::Link, self.message.link.is_some()),
            (MessageKind::Markdown, self.message.markdown.is_some()),
            (MessageKind::ActionCard, self.message.action_card.is_some()),
            (MessageKind::FeedCard, self.message.feed_card.is_some()),
        ];
        for (variant, set) in populated {
            if set && variant != kind {
                return Err(BuildError::MismatchedPayload {
                    kind,
                    populated: variant,
                });
            }
        }
        if !populated.iter().any(|(variant, set)| *set && *variant == kind) {
            return Err(BuildError::MissingPayload { kind });
        }
        Ok(self.message)
    }
}

/// Sub-builder for the action card element.
///
/// `single_button` and `button` address the wire contract's two exclusive
/// button modes; the builder does not police the exclusivity, it keeps
/// whatever the caller set.
#[derive(Debug, Clone)]
pub struct ActionCardBuilder {
    element: ActionCardContent,
}

impl ActionCardBuilder {
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        layout: ButtonLayout,
        avatar: AvatarState,
    ) -> Self {
        Self {
            element: ActionCardContent {
                title: title.into(),
                text: text.into(),
                single_title: None,
                single_url: None,
                layout,
                avatar,
                buttons: Vec::new(),
            },
        }
    }

    pub fn single_button(mut self, title: impl Into<String>, action_url: impl Into<String>) -> Self {
        self.element.single_title = Some(title.into());
        self.element.single_url = Some(action_url.into());
        self
    }

    pub fn button(mut self, title: impl Into<String>, action_url: impl Into<String>) -> Self {
        self.element.buttons.push(CardButton {
            title: title.into(),
            action_url: action_url.into(),
        });
        self
    }

    pub fn build(self) -> ActionCardContent {
        self.element
    }
}

/// Sub-builder for the feed card element; items keep insertion order.
#[derive(Debug, Clone)]
pub struct FeedCardBuilder {
    element: FeedCardContent,
}

impl FeedCardBuilder {
    pub fn new() -> Self {
        Self {
            element: FeedCardContent { links: Vec::new() },
        }
    }

    pub fn link(
        mut self,
        title: impl Into<String>,
        message_url: impl Into<String>,
        pic_url: impl Into<String>,
    ) -> Self {
        self.element.links.push(FeedLink {
            title: title.into(),
            text: None,
            message_url: message_url.into(),
            pic_url: pic_url.into(),
        });
        self
    }

    pub fn build(self) -> FeedCardContent {
        self.element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_text_message() {
        let msg = MessageBuilder::new(MessageKind::Text)
            .text("hello")
            .build()
            .unwrap();
        assert_eq!(msg.kind, MessageKind::Text);
        assert_eq!(msg.text.unwrap().content, "hello");
        assert!(msg.at.is_none());
    }

    #[test]
    fn test_build_markdown_with_at_all() {
        let msg = MessageBuilder::new(MessageKind::Markdown)
            .markdown("早上好~", "#### 天气\n")
            .at(Vec::new(), true)
            .build()
            .unwrap();
        assert_eq!(msg.kind, MessageKind::Markdown);
        let at = msg.at.unwrap();
        assert!(at.is_at_all);
        assert!(at.at_mobiles.is_empty());
    }

    #[test]
    fn test_build_without_payload_is_rejected() {
        let err = MessageBuilder::new(MessageKind::Markdown).build().unwrap_err();
        assert_eq!(
            err,
            BuildError::MissingPayload {
                kind: MessageKind::Markdown
            }
        );
    }

    #[test]
    fn test_mismatched_payload_is_rejected() {
        let err = MessageBuilder::new(MessageKind::Text)
            .markdown("t", "b")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::MismatchedPayload {
                kind: MessageKind::Text,
                populated: MessageKind::Markdown,
            }
        );
    }

    #[test]
    fn test_matching_payload_plus_mismatched_one_is_rejected() {
        let err = MessageBuilder::new(MessageKind::Text)
            .text("ok")
            .link("t", "b", "https://example.com", "")
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::MismatchedPayload { .. }));
    }

    #[test]
    fn test_action_card_single_button() {
        let element = ActionCardBuilder::new(
            "头条",
            "body",
            ButtonLayout::Horizontal,
            AvatarState::Hidden,
        )
        .single_button("查看详情", "https://example.com/detail")
        .build();
        assert_eq!(element.single_title.as_deref(), Some("查看详情"));
        assert_eq!(element.single_url.as_deref(), Some("https://example.com/detail"));
        assert!(element.buttons.is_empty());
        assert_eq!(element.layout, ButtonLayout::Horizontal);
        assert_eq!(element.avatar, AvatarState::Hidden);
    }

    #[test]
    fn test_action_card_button_list_keeps_order() {
        let element = ActionCardBuilder::new("t", "b", ButtonLayout::Vertical, AvatarState::Shown)
            .button("one", "https://example.com/1")
            .button("two", "https://example.com/2")
            .build();
        let titles: Vec<&str> = element.buttons.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["one", "two"]);
        assert!(element.single_title.is_none());
    }

    #[test]
    fn test_feed_card_builder_starts_empty() {
        let element = FeedCardBuilder::new().build();
        assert!(element.links.is_empty());
    }

    #[test]
    fn test_feed_card_links_keep_insertion_order() {
        let element = FeedCardBuilder::new()
            .link("a", "https://example.com/a", "https://example.com/a.png")
            .link("b", "https://example.com/b", "https://example.com/b.png")
            .link("c", "https://example.com/c", "https://example.com/c.png")
            .build();
        let titles: Vec<&str> = element.links.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, ["a", "b", "c"]);
    }
}
