//! DingTalk robot webhook client.
//!
//! Posts serialized messages to the token-derived send URL using the global
//! HTTP_CLIENT and interprets the `{errcode, errmsg}` delivery envelope.

use serde::Deserialize;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::external::client::HTTP_CLIENT;
use crate::message::{Message, MessageBuilder, MessageKind};

/// Placeholder substituted with the access token in the configured URL
/// template.
pub const TOKEN_PLACEHOLDER: &str = "{ACCESS_TOKEN}";

/// Delivery status wrapper returned by the webhook endpoint.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    errcode: i64,
    #[serde(default)]
    errmsg: String,
}

/// A single group-chat robot. Holds only the send URL derived once at
/// construction; safe to share across jobs without synchronization.
pub struct DingRobot {
    send_url: String,
}

impl DingRobot {
    /// Derives the fixed send URL by substituting `access_token` into the
    /// `{ACCESS_TOKEN}` placeholder of `base_url`. A template without the
    /// placeholder is used verbatim.
    pub fn new(base_url: &str, access_token: &str) -> Self {
        Self {
            send_url: base_url.replace(TOKEN_PLACEHOLDER, access_token),
        }
    }

    /// Sends one message. A single attempt, no retries.
    ///
    /// Succeeds iff the webhook answers with envelope errcode 0. The body
    /// is always read in full and parsed regardless of HTTP status; the
    /// envelope is the authority on delivery.
    pub async fn send(&self, message: &Message) -> AppResult<()> {
        debug!(msgtype = %message.kind, "sending robot message");

        let resp = HTTP_CLIENT
            .post(&self.send_url)
            .json(message)
            .send()
            .await
            .map_err(|e: reqwest::Error| AppError::Transport {
                context: format!("webhook POST failed: {}", e),
                source: e.into(),
            })?;

        let body = resp
            .text()
            .await
            .map_err(|e: reqwest::Error| AppError::Transport {
                context: format!("webhook response read failed: {}", e),
                source: e.into(),
            })?;

        let envelope: Envelope =
            serde_json::from_str(&body).map_err(|e: serde_json::Error| AppError::Decode {
                context: format!("webhook envelope invalid JSON: {}", e),
                source: Some(e.into()),
            })?;

        if envelope.errcode != 0 {
            return Err(AppError::UpstreamRejected {
                code: envelope.errcode,
                message: envelope.errmsg,
            });
        }

        Ok(())
    }

    /// Convenience wrapper for plain-text sends, used by the fallback path.
    pub async fn send_text(&self, content: impl Into<String>) -> AppResult<()> {
        let message = MessageBuilder::new(MessageKind::Text)
            .text(content)
            .build()?;
        self.send(&message).await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn robot_for(server: &MockServer) -> DingRobot {
        let template = format!(
            "{}/robot/send?access_token={}",
            server.uri(),
            TOKEN_PLACEHOLDER
        );
        DingRobot::new(&template, "secret-token")
    }

    #[tokio::test]
    async fn test_send_substitutes_token_and_accepts_ok_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/robot/send"))
            .and(query_param("access_token", "secret-token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"errcode": 0, "errmsg": "ok"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let robot = robot_for(&server);
        let msg = MessageBuilder::new(MessageKind::Text)
            .text("hello")
            .build()
            .unwrap();
        robot.send(&msg).await.unwrap();
    }

    #[tokio::test]
    async fn test_send_posts_exact_wire_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(serde_json::json!({
                "msgtype": "text",
                "text": {"content": "ping"}
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"errcode": 0, "errmsg": "ok"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let robot = robot_for(&server);
        robot.send_text("ping").await.unwrap();
    }

    #[tokio::test]
    async fn test_nonzero_errcode_is_upstream_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"errcode": 1, "errmsg": "token invalid"})),
            )
            .mount(&server)
            .await;

        let robot = robot_for(&server);
        let err = robot.send_text("hello").await.unwrap_err();
        match err {
            AppError::UpstreamRejected { code, message } => {
                assert_eq!(code, 1);
                assert_eq!(message, "token invalid");
            }
            other => panic!("Expected UpstreamRejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let robot = robot_for(&server);
        let err = robot.send_text("hello").await.unwrap_err();
        assert!(matches!(err, AppError::Decode { .. }), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let robot = DingRobot::new("http://127.0.0.1:1/robot/send?access_token={ACCESS_TOKEN}", "t");
        let err = robot.send_text("hello").await.unwrap_err();
        assert!(matches!(err, AppError::Transport { .. }), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_template_without_placeholder_is_used_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hook"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"errcode": 0, "errmsg": "ok"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let robot = DingRobot::new(&format!("{}/hook", server.uri()), "unused");
        robot.send_text("hi").await.unwrap();
    }
}
