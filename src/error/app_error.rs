use thiserror::Error;

use crate::message::BuildError;

/// Application-wide error type covering the fetch-format-send pipeline.
///
/// Every task failure funnels into one of these kinds so the job wrapper
/// can log it uniformly and decide whether to send the fallback notice.
#[derive(Error, Debug)]
pub enum AppError {
    /// Network or HTTP-level failure while talking to a remote endpoint
    #[error("Transport failure: {context}")]
    Transport {
        context: String,
        #[source]
        source: anyhow::Error,
    },

    /// Response body did not match the expected shape, or a required
    /// field/entry was missing
    #[error("Decode failure: {context}")]
    Decode {
        context: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// The webhook accepted the request but rejected the message
    #[error("Webhook rejected message (errcode {code}): {message}")]
    UpstreamRejected { code: i64, message: String },

    /// Message construction failed before anything was sent
    #[error("Invalid message")]
    InvalidMessage(#[from] BuildError),
}

impl AppError {
    /// Short kind tag used in structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Transport { .. } => "transport",
            AppError::Decode { .. } => "decode",
            AppError::UpstreamRejected { .. } => "upstream_rejected",
            AppError::InvalidMessage(_) => "invalid_message",
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_rejected_display_includes_code_and_message() {
        let err = AppError::UpstreamRejected {
            code: 310000,
            message: "keywords not in content".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("310000"));
        assert!(rendered.contains("keywords not in content"));
        assert_eq!(err.kind(), "upstream_rejected");
    }

    #[test]
    fn test_decode_without_source_displays_context() {
        let err = AppError::Decode {
            context: "entrylist shorter than 4 entries".to_string(),
            source: None,
        };
        assert!(err.to_string().contains("entrylist"));
        assert_eq!(err.kind(), "decode");
    }
}
