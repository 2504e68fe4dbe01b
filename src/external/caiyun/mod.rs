//! Realtime weather provider.

mod client;
mod skycon;
mod types;

pub use client::CaiyunClient;
pub use skycon::skycon_label;
pub use types::WeatherReading;
