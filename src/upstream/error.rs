//! Upstream failure taxonomy.

use thiserror::Error;

/// Errors produced while talking to the upstream REST API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Upstream answered with a non-2xx status.
    #[error("{status} {status_text}")]
    Status { status: u16, status_text: String },

    /// Connection, TLS or body-read failure. No status is available.
    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The body was not valid JSON.
    #[error("malformed upstream JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// The body was JSON but lacked a field the operation needs.
    #[error("unexpected response shape from {method}: {source}")]
    UnexpectedShape {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A field was present but held a value that cannot be converted.
    #[error("invalid value for {field}: {value}")]
    InvalidField { field: &'static str, value: String },

    /// A fan-out task panicked or was aborted before producing a result.
    #[error("upstream task failed: {0}")]
    Task(String),
}

impl UpstreamError {
    /// Status code and status text, when the failure carries both.
    pub fn status(&self) -> Option<(u16, &str)> {
        match self {
            UpstreamError::Status { status, status_text } if !status_text.is_empty() => {
                Some((*status, status_text.as_str()))
            }
            _ => None,
        }
    }

    /// Short machine-readable name of the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Status { .. } => "upstream_status",
            UpstreamError::Transport(_) => "upstream_transport",
            UpstreamError::Parse(_) => "upstream_parse",
            UpstreamError::UnexpectedShape { .. } | UpstreamError::InvalidField { .. } => {
                "upstream_shape"
            }
            UpstreamError::Task(_) => "upstream_task",
        }
    }
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
