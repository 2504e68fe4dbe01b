use async_trait::async_trait;
use jiff::Zoned;

use crate::config::settings::WeatherProviderConfig;
use crate::error::AppResult;
use crate::external::caiyun::{skycon_label, CaiyunClient, WeatherReading};
use crate::jobs::types::{JobContext, NotifyTask};
use crate::message::{MessageBuilder, MessageKind};

/// Greeting used as the markdown title of every report
const REPORT_TITLE: &str = "早上好~";

/// Morning weather report, rendered as a markdown message
#[derive(Debug)]
pub struct WeatherReportTask {
    client: CaiyunClient,
    location: String,
}

impl WeatherReportTask {
    pub fn new(config: &WeatherProviderConfig) -> Self {
        Self {
            client: CaiyunClient::new(&config.endpoint),
            location: config.location.clone(),
        }
    }
}

/// Render the markdown body for one reading.
///
/// Humidity arrives as the provider's 0..1 fraction and is shown as a
/// percentage. The footer carries the actual send time instead of a fixed
/// release stamp.
fn format_report(reading: &WeatherReading, sent_at: &Zoned, location: &str) -> String {
    format!(
        "#### {location}天气\n\
         > 天气{cond}，温度{temp:.1}度，湿度{hum:.1}%，PM2.5指数{pm25:.1}\n\n\
         > ###### {hour:02}点{minute:02}分发布 数据来自[彩云天气](https://caiyunapp.com/) \n",
        location = location,
        cond = skycon_label(&reading.skycon),
        temp = reading.temperature,
        hum = reading.humidity * 100.0,
        pm25 = reading.pm25,
        hour = sent_at.hour(),
        minute = sent_at.minute(),
    )
}

#[async_trait]
impl NotifyTask for WeatherReportTask {
    fn name(&self) -> &'static str {
        "weather"
    }

    fn category(&self) -> &'static str {
        "天气"
    }

    async fn run(&self, ctx: &JobContext) -> AppResult<()> {
        let reading = self.client.fetch_realtime().await?;
        let body = format_report(&reading, &Zoned::now(), &self.location);
        let message = MessageBuilder::new(MessageKind::Markdown)
            .markdown(REPORT_TITLE, body)
            .build()?;
        ctx.robot.send(&message).await
    }
}
