use std::fmt;

use serde::{Deserialize, Serialize};

/// Message layout discriminator, serialized as the wire `msgtype` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "link")]
    Link,
    #[serde(rename = "markdown")]
    Markdown,
    #[serde(rename = "actionCard")]
    ActionCard,
    #[serde(rename = "feedCard")]
    FeedCard,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Text => "text",
            MessageKind::Link => "link",
            MessageKind::Markdown => "markdown",
            MessageKind::ActionCard => "actionCard",
            MessageKind::FeedCard => "feedCard",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Button column layout on an action card, wire values "0"/"1".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonLayout {
    #[default]
    #[serde(rename = "0")]
    Vertical,
    #[serde(rename = "1")]
    Horizontal,
}

/// Whether the sender avatar is shown on an action card, wire values "0"/"1".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvatarState {
    #[default]
    #[serde(rename = "0")]
    Shown,
    #[serde(rename = "1")]
    Hidden,
}

/// An outbound DingTalk robot message.
///
/// Exactly one payload field matching `kind` is populated; the others stay
/// `None` and are omitted from the serialized form. The optional `at`
/// element combines with any variant. [`MessageBuilder`] is the only
/// intended constructor and enforces the variant match at build time.
///
/// [`MessageBuilder`]: crate::message::MessageBuilder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "msgtype")]
    pub kind: MessageKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<MarkdownContent>,
    #[serde(rename = "actionCard", skip_serializing_if = "Option::is_none")]
    pub action_card: Option<ActionCardContent>,
    #[serde(rename = "feedCard", skip_serializing_if = "Option::is_none")]
    pub feed_card: Option<FeedCardContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<AtElement>,
}

/// Plain text payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
}

/// Single-link payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkContent {
    pub title: String,
    pub text: String,
    #[serde(rename = "messageUrl")]
    pub message_url: String,
    #[serde(rename = "picUrl", default, skip_serializing_if = "String::is_empty")]
    pub pic_url: String,
}

/// Markdown payload. DingTalk renders a constrained markdown subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownContent {
    pub title: String,
    pub text: String,
}

/// Action card payload: a markdown body plus either one whole-card button
/// (`single_title`/`single_url`) or an ordered button list (`buttons`).
/// The wire contract treats the modes as exclusive but the model carries
/// whatever was set; see [`ActionCardBuilder`].
///
/// [`ActionCardBuilder`]: crate::message::ActionCardBuilder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCardContent {
    pub title: String,
    pub text: String,
    #[serde(rename = "singleTitle", skip_serializing_if = "Option::is_none")]
    pub single_title: Option<String>,
    #[serde(rename = "singleURL", skip_serializing_if = "Option::is_none")]
    pub single_url: Option<String>,
    #[serde(rename = "btnOrientation", default)]
    pub layout: ButtonLayout,
    #[serde(rename = "hideAvatar", default)]
    pub avatar: AvatarState,
    #[serde(rename = "btns", default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<CardButton>,
}

/// One button on a multi-button action card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardButton {
    pub title: String,
    #[serde(rename = "actionURL")]
    pub action_url: String,
}

/// Feed card payload: an ordered list of linked items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedCardContent {
    pub links: Vec<FeedLink>,
}

/// One item on a feed card. Note the wire casing differs from the link
/// variant (`messageURL`/`picURL` here, `messageUrl`/`picUrl` there).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedLink {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "messageURL")]
    pub message_url: String,
    #[serde(rename = "picURL")]
    pub pic_url: String,
}

/// Mention element attachable to any variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtElement {
    #[serde(rename = "atMobiles", default, skip_serializing_if = "Vec::is_empty")]
    pub at_mobiles: Vec<String>,
    #[serde(rename = "isAtAll", default)]
    pub is_at_all: bool,
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::message::{ActionCardBuilder, FeedCardBuilder, MessageBuilder};

    #[test]
    fn test_text_message_wire_shape_omits_inactive_variants() {
        let msg = MessageBuilder::new(MessageKind::Text)
            .text("ping")
            .build()
            .unwrap();
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({
                "msgtype": "text",
                "text": {"content": "ping"}
            })
        );
    }

    #[test]
    fn test_text_with_at_wire_shape() {
        let msg = MessageBuilder::new(MessageKind::Text)
            .text("各位注意")
            .at(vec!["13800000000".to_string()], false)
            .build()
            .unwrap();
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({
                "msgtype": "text",
                "text": {"content": "各位注意"},
                "at": {"atMobiles": ["13800000000"], "isAtAll": false}
            })
        );
    }

    #[test]
    fn test_link_wire_field_names() {
        let msg = MessageBuilder::new(MessageKind::Link)
            .link("标题", "正文", "https://example.com/a", "https://example.com/a.png")
            .build()
            .unwrap();
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({
                "msgtype": "link",
                "link": {
                    "title": "标题",
                    "text": "正文",
                    "messageUrl": "https://example.com/a",
                    "picUrl": "https://example.com/a.png"
                }
            })
        );
    }

    #[test]
    fn test_feed_card_wire_uses_uppercase_url_casing() {
        let element = FeedCardBuilder::new()
            .link("first", "https://example.com/1", "https://example.com/1.png")
            .build();
        let msg = MessageBuilder::new(MessageKind::FeedCard)
            .feed_card(element)
            .build()
            .unwrap();
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({
                "msgtype": "feedCard",
                "feedCard": {
                    "links": [{
                        "title": "first",
                        "messageURL": "https://example.com/1",
                        "picURL": "https://example.com/1.png"
                    }]
                }
            })
        );
    }

    // The wire contract treats single-button and button-list modes as
    // exclusive, but the builder keeps whatever was set. When both paths
    // were invoked the serialized card carries all three fields.
    #[test]
    fn test_action_card_with_both_button_modes_serializes_both() {
        let element = ActionCardBuilder::new("t", "b", ButtonLayout::Horizontal, AvatarState::Hidden)
            .single_button("查看详情", "https://example.com/d")
            .button("赞", "https://example.com/up")
            .button("踩", "https://example.com/down")
            .build();
        let msg = MessageBuilder::new(MessageKind::ActionCard)
            .action_card(element)
            .build()
            .unwrap();
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({
                "msgtype": "actionCard",
                "actionCard": {
                    "title": "t",
                    "text": "b",
                    "singleTitle": "查看详情",
                    "singleURL": "https://example.com/d",
                    "btnOrientation": "1",
                    "hideAvatar": "1",
                    "btns": [
                        {"title": "赞", "actionURL": "https://example.com/up"},
                        {"title": "踩", "actionURL": "https://example.com/down"}
                    ]
                }
            })
        );
    }

    #[test]
    fn test_layout_and_avatar_deserialize_from_wire_strings() {
        let card: ActionCardContent = serde_json::from_value(json!({
            "title": "t",
            "text": "b",
            "btnOrientation": "1",
            "hideAvatar": "0"
        }))
        .unwrap();
        assert_eq!(card.layout, ButtonLayout::Horizontal);
        assert_eq!(card.avatar, AvatarState::Shown);
        assert!(card.buttons.is_empty());
    }

    fn arb_at() -> impl Strategy<Value = Option<AtElement>> {
        proptest::option::of(
            (proptest::collection::vec("[0-9]{11}", 0..3), any::<bool>()).prop_map(
                |(at_mobiles, is_at_all)| AtElement {
                    at_mobiles,
                    is_at_all,
                },
            ),
        )
    }

    fn arb_message() -> impl Strategy<Value = Message> {
        let text = (any::<String>(), arb_at()).prop_map(|(content, at)| Message {
            kind: MessageKind::Text,
            text: Some(TextContent { content }),
            link: None,
            markdown: None,
            action_card: None,
            feed_card: None,
            at,
        });
        let link = (any::<String>(), any::<String>(), "[a-z/:.]{1,30}", "[a-z/:.]{0,30}", arb_at())
            .prop_map(|(title, text, message_url, pic_url, at)| Message {
                kind: MessageKind::Link,
                text: None,
                link: Some(LinkContent {
                    title,
                    text,
                    message_url,
                    pic_url,
                }),
                markdown: None,
                action_card: None,
                feed_card: None,
                at,
            });
        let markdown = (any::<String>(), any::<String>(), arb_at()).prop_map(|(title, text, at)| {
            Message {
                kind: MessageKind::Markdown,
                text: None,
                link: None,
                markdown: Some(MarkdownContent { title, text }),
                action_card: None,
                feed_card: None,
                at,
            }
        });
        let action_card = (
            any::<String>(),
            any::<String>(),
            proptest::option::of(any::<String>()),
            proptest::option::of("[a-z/:.]{1,30}"),
            prop_oneof![Just(ButtonLayout::Vertical), Just(ButtonLayout::Horizontal)],
            prop_oneof![Just(AvatarState::Shown), Just(AvatarState::Hidden)],
            proptest::collection::vec(
                (any::<String>(), "[a-z/:.]{1,30}").prop_map(|(title, action_url)| CardButton {
                    title,
                    action_url,
                }),
                0..4,
            ),
            arb_at(),
        )
            .prop_map(
                |(title, text, single_title, single_url, layout, avatar, buttons, at)| Message {
                    kind: MessageKind::ActionCard,
                    text: None,
                    link: None,
                    markdown: None,
                    action_card: Some(ActionCardContent {
                        title,
                        text,
                        single_title,
                        single_url,
                        layout,
                        avatar,
                        buttons,
                    }),
                    feed_card: None,
                    at,
                },
            );
        let feed_card = (
            proptest::collection::vec(
                (any::<String>(), "[a-z/:.]{1,30}", "[a-z/:.]{1,30}").prop_map(
                    |(title, message_url, pic_url)| FeedLink {
                        title,
                        text: None,
                        message_url,
                        pic_url,
                    },
                ),
                0..5,
            ),
            arb_at(),
        )
            .prop_map(|(links, at)| Message {
                kind: MessageKind::FeedCard,
                text: None,
                link: None,
                markdown: None,
                action_card: None,
                feed_card: Some(FeedCardContent { links }),
                at,
            });
        prop_oneof![text, link, markdown, action_card, feed_card]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        // Serialization keeps every populated field intact through a
        // round trip, for every variant.
        #[test]
        fn test_message_round_trip_preserves_fields(msg in arb_message()) {
            let wire = serde_json::to_string(&msg).unwrap();
            let back: Message = serde_json::from_str(&wire).unwrap();
            prop_assert_eq!(back, msg);
        }
    }
}
