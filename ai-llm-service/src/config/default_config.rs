//! Default completion-API config loaded from environment variables.
//!
//! # Environment variables
//!
//! - `OPENAI_URL`          = API base (default `https://api.openai.com`)
//! - `OPENAI_MODEL`        = model identifier (default [`DEFAULT_MODEL`])
//! - `OPENAI_API_KEY`      = credential (optional here; checked per request)
//! - `OPENAI_TIMEOUT_SECS` = request timeout (default 60)
//! - `LLM_MAX_TOKENS`      = optional max tokens (u32)

use crate::{
    config::llm_model_config::LlmModelConfig,
    error_handler::{AiLlmError, ConfigError, env_opt, env_opt_u64, validate_http_endpoint},
};

/// Public OpenAI API base.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";

/// Model used for conversation generation unless overridden.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Constructs the config for the conversation generator.
///
/// # Defaults
/// - `temperature = Some(0.0)` (deterministic sampling)
/// - `timeout_secs = Some(60)`
///
/// # Errors
///
/// - [`ConfigError::InvalidFormat`] if `OPENAI_URL` is not http(s)
/// - [`ConfigError::InvalidNumber`] if a numeric variable fails to parse
/// - [`ConfigError::EmptyModel`] if the resolved model is blank
pub fn config_openai() -> Result<LlmModelConfig, AiLlmError> {
    let endpoint = env_opt("OPENAI_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    validate_http_endpoint("OPENAI_URL", &endpoint)?;

    let model = env_opt("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
    if model.is_empty() {
        return Err(ConfigError::EmptyModel.into());
    }

    let max_tokens = match env_opt("LLM_MAX_TOKENS") {
        Some(v) => Some(v.parse::<u32>().map_err(|_| ConfigError::InvalidNumber {
            var: "LLM_MAX_TOKENS",
            reason: "expected u32",
        })?),
        None => None,
    };

    Ok(LlmModelConfig {
        model,
        endpoint,
        api_key: env_opt("OPENAI_API_KEY"),
        max_tokens,
        temperature: Some(0.0),
        timeout_secs: Some(env_opt_u64("OPENAI_TIMEOUT_SECS")?.unwrap_or(60)),
    })
}
