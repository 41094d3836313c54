//! Crate-wide error hierarchy for conversation-builder.

use std::fmt;

use thiserror::Error;

use crate::model::UnknownQuestionType;

/// Convenient alias for crate-wide results.
pub type BuilderResult<T> = Result<T, BuilderError>;

/// Upstream resource a request was issued for.
///
/// Used to attribute transport failures to the right lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamResource {
    Chat,
    Question,
    Answer,
}

impl fmt::Display for UpstreamResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UpstreamResource::Chat => "chat",
            UpstreamResource::Question => "question",
            UpstreamResource::Answer => "answer",
        };
        f.write_str(name)
    }
}

/// Root error type for the conversation-builder crate.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// Transport, status or decode failure while calling the upstream API.
    #[error("error fetching {resource} data: {source}")]
    UpstreamUnavailable {
        resource: UpstreamResource,
        #[source]
        source: UpstreamFailure,
    },

    /// The chat response was JSON but not the expected shape.
    #[error("invalid chat data: {0}")]
    InvalidUpstreamShape(String),

    /// Question type integer outside the closed enumeration.
    #[error(transparent)]
    UnknownQuestionType(#[from] UnknownQuestionType),

    /// Configuration problems (bad base URL, client construction).
    #[error(transparent)]
    Config(#[from] BuilderConfigError),

    /// The assembled conversation could not be rendered to JSON.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl BuilderError {
    /// Wraps a transport-level failure for the given resource.
    pub(crate) fn upstream(resource: UpstreamResource, err: impl Into<UpstreamFailure>) -> Self {
        BuilderError::UpstreamUnavailable {
            resource,
            source: err.into(),
        }
    }
}

/// Low-level reason behind [`BuilderError::UpstreamUnavailable`].
#[derive(Debug, Error)]
pub enum UpstreamFailure {
    /// Timeout at transport level.
    #[error("timeout")]
    Timeout,

    /// Non-2xx response.
    #[error("http status error: status {0}")]
    HttpStatus(u16),

    /// Body could not be decoded into the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// Network/transport failure without HTTP status (DNS/connect/reset).
    #[error("network error: {0}")]
    Network(String),
}

/// Configuration and setup errors.
#[derive(Debug, Error)]
pub enum BuilderConfigError {
    /// Base URL is empty or not http(s).
    #[error("invalid upstream base url: {0}")]
    InvalidBaseUrl(String),

    /// The HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
}

// ===== Mapping from reqwest::Error into UpstreamFailure =====

impl From<reqwest::Error> for UpstreamFailure {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return UpstreamFailure::Timeout;
        }

        if let Some(status) = e.status() {
            return UpstreamFailure::HttpStatus(status.as_u16());
        }

        if e.is_decode() {
            return UpstreamFailure::Decode(e.to_string());
        }

        UpstreamFailure::Network(e.to_string())
    }
}
