use super::types::{ArticleEntry, TimelineResponse};
use crate::error::{AppError, AppResult};
use crate::external::client::HTTP_CLIENT;

/// Client for the article timeline endpoint.
#[derive(Debug)]
pub struct JuejinClient {
    endpoint: String,
}

impl JuejinClient {
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

    pub async fn fetch_entries(&self) -> AppResult<Vec<ArticleEntry>> {
        let resp = HTTP_CLIENT
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e: reqwest::Error| {
                Self::transport_error(format!("timeline request failed: {}", e), e)
            })?
            .error_for_status()
            .map_err(|e: reqwest::Error| {
                Self::transport_error(format!("timeline HTTP error: {}", e), e)
            })?;

        let data: TimelineResponse = resp.json().await.map_err(|e: reqwest::Error| {
            AppError::Decode {
                context: format!("timeline invalid JSON: {}", e),
                source: Some(e.into()),
            }
        })?;

        Ok(data
            .d
            .entrylist
            .into_iter()
            .map(|e| ArticleEntry {
                title: e.title,
                screenshot: e.screenshot,
                original_url: e.original_url,
            })
            .collect())
    }
}
