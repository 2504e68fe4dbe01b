//! News feed provider.

mod client;
mod types;

pub use client::ToutiaoClient;
pub use types::NewsItem;
