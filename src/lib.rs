//! Dingbot Library
//!
//! Core library modules for the dingbot scheduled notification service.

use shadow_rs::shadow;
shadow!(build);

pub mod bot;
pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod jobs;
pub mod logger;
pub mod message;
pub mod robot;

pub use bot::Bot;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
