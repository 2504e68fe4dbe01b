use super::types::{RealtimeResponse, WeatherReading};
use crate::error::{AppError, AppResult};
use crate::external::client::HTTP_CLIENT;

/// Client for the realtime weather endpoint.
#[derive(Debug)]
pub struct CaiyunClient {
    endpoint: String,
}

impl CaiyunClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    fn transport_error(message: impl Into<String>, source: reqwest::Error) -> AppError {
        AppError::Transport {
            context: message.into(),
            source: source.into(),
        }
    }

    fn decode_error(message: impl Into<String>, source: Option<anyhow::Error>) -> AppError {
        AppError::Decode {
            context: message.into(),
            source,
        }
    }

    pub async fn fetch_realtime(&self) -> AppResult<WeatherReading> {
        let resp = HTTP_CLIENT
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e: reqwest::Error| {
                Self::transport_error(format!("realtime request failed: {}", e), e)
            })?
            .error_for_status()
            .map_err(|e: reqwest::Error| {
                Self::transport_error(format!("realtime HTTP error: {}", e), e)
            })?;

        let data: RealtimeResponse = resp.json().await.map_err(|e: reqwest::Error| {
            Self::decode_error(format!("realtime invalid JSON: {}", e), Some(e.into()))
        })?;

        if data.status != "ok" {
            return Err(Self::decode_error(
                format!("realtime status '{}'", data.status),
                None,
            ));
        }

        let r = data.result;
        Ok(WeatherReading {
            temperature: r.temperature,
            humidity: r.humidity,
            pm25: r.pm25,
            skycon: r.skycon,
        })
    }
}
