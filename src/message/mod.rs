//! Outbound DingTalk message model and builders.
//!
//! The wire field names follow the robot webhook contract exactly; see the
//! per-struct serde attributes in [`model`].

mod builder;
mod error;
mod model;

pub use builder::{ActionCardBuilder, FeedCardBuilder, MessageBuilder};
pub use error::BuildError;
pub use model::{
    ActionCardContent, AtElement, AvatarState, ButtonLayout, CardButton, FeedCardContent,
    FeedLink, LinkContent, MarkdownContent, Message, MessageKind, TextContent,
};
