use std::{path::PathBuf, str::FromStr};

use ai_llm_service::{AiLlmError, LlmModelConfig, config_openai, prompt_template};
use conversation_builder::{DEFAULT_CONCURRENCY, UpstreamConfig};
use thiserror::Error;

/// Upstream conversation-builder API used when `CONVERSATION_BUILDER_URL` is unset.
pub const DEFAULT_UPSTREAM_URL: &str =
    "http://ec2-54-175-34-191.compute-1.amazonaws.com:8000/conversation_builder";

/// Startup configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value in {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },

    #[error(transparent)]
    Llm(#[from] AiLlmError),

    #[error(transparent)]
    Upstream(#[from] conversation_builder::BuilderError),
}

/// Process configuration, read once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen address, e.g. "0.0.0.0:8000".
    pub api_address: String,
    /// Upstream conversation-builder API.
    pub upstream: UpstreamConfig,
    /// Per-request question fan-out.
    pub assembly_concurrency: usize,
    /// Completion API settings.
    pub llm: LlmModelConfig,
    /// Prompt template resource.
    pub template_path: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let upstream_timeout: u64 = parse_var("UPSTREAM_TIMEOUT_SECS", var("UPSTREAM_TIMEOUT_SECS"), 30)?;

        Ok(Self {
            api_address: var("API_ADDRESS").unwrap_or_else(|| "0.0.0.0:8000".into()),
            upstream: UpstreamConfig {
                base_url: var("CONVERSATION_BUILDER_URL")
                    .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.into()),
                timeout_secs: Some(upstream_timeout),
            },
            assembly_concurrency: parse_var(
                "ASSEMBLY_CONCURRENCY",
                var("ASSEMBLY_CONCURRENCY"),
                DEFAULT_CONCURRENCY,
            )?,
            llm: config_openai()?,
            template_path: var("PROMPT_TEMPLATE_PATH")
                .unwrap_or_else(|| prompt_template::DEFAULT_TEMPLATE_PATH.into())
                .into(),
        })
    }
}

fn var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(v) => v.parse::<T>().map_err(|e| ConfigError::InvalidValue {
            var: name,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
