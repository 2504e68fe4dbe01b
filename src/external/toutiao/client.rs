use super::types::{FeedResponse, NewsItem};
use crate::error::{AppError, AppResult};
use crate::external::client::HTTP_CLIENT;

/// Client for the news feed endpoint.
#[derive(Debug)]
pub struct ToutiaoClient {
    endpoint: String,
}

impl ToutiaoClient {
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

    pub async fn fetch_feed(&self) -> AppResult<Vec<NewsItem>> {
        let resp = HTTP_CLIENT
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e: reqwest::Error| {
                Self::transport_error(format!("feed request failed: {}", e), e)
            })?
            .error_for_status()
            .map_err(|e: reqwest::Error| {
                Self::transport_error(format!("feed HTTP error: {}", e), e)
            })?;

        let data: FeedResponse = resp.json().await.map_err(|e: reqwest::Error| {
            AppError::Decode {
                context: format!("feed invalid JSON: {}", e),
                source: Some(e.into()),
            }
        })?;

        Ok(data
            .data
            .into_iter()
            .map(|item| NewsItem {
                title: item.title,
                summary: item.summary,
                source_url: item.source_url,
                image_urls: item.image_list.into_iter().map(|i| i.url).collect(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn test_fetch_feed_decodes_items() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    {
                        "title": "芯片新进展",
                        "abstract": "三纳米试产",
                        "source_url": "/group/100/",
                        "image_list": [{"url": "https://example.com/a.jpg"}]
                    },
                    {
                        "title": "无图新闻",
                        "abstract": "没有配图",
                        "source_url": "/group/101/"
                    }
                ]
            })))
            .mount(&server)
            .await;

        let client = ToutiaoClient::new(server.uri());
        let items = client.fetch_feed().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].summary, "三纳米试产");
        assert_eq!(items[0].image_urls, ["https://example.com/a.jpg"]);
        assert!(items[1].image_urls.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_feed_http_error_is_transport() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = ToutiaoClient::new(server.uri());
        let err = client.fetch_feed().await.unwrap_err();
        assert!(matches!(err, AppError::Transport { .. }), "got {:?}", err);
    }
}
