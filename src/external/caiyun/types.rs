use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct RealtimeResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub result: RealtimeResult,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct RealtimeResult {
    #[serde(default)]
    pub temperature: f64,
    #[serde(default)]
    pub skycon: String,
    #[serde(default)]
    pub pm25: f64,
    #[serde(default)]
    pub humidity: f64,
}

/// Current weather snapshot extracted from the realtime endpoint.
/// Humidity is the provider's 0..1 fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub temperature: f64,
    pub humidity: f64,
    pub pm25: f64,
    pub skycon: String,
}
