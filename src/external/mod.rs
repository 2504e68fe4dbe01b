//! Clients for the third-party public APIs the bot reports on.

pub mod caiyun;
pub mod client;
pub mod juejin;
pub mod toutiao;
