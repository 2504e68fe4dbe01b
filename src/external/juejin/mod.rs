//! Tech-article timeline provider.

mod client;
mod types;

pub use client::JuejinClient;
pub use types::ArticleEntry;
