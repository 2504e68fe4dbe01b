pub mod juejin_feed;
pub mod toutiao_news;
pub mod weather_report;

pub use juejin_feed::JuejinFeedTask;
pub use toutiao_news::ToutiaoNewsTask;
pub use weather_report::WeatherReportTask;
