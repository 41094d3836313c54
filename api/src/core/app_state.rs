use ai_llm_service::{ConversationGenerator, OpenAiService};
use conversation_builder::{ConversationAssembler, UpstreamClient};

use crate::core::app_config::{AppConfig, ConfigError};

/// Shared state for all HTTP handlers.
///
/// Holds only immutable clients; no request data is shared across requests.
#[derive(Debug)]
pub struct AppState {
    /// Chat → question → answer aggregation.
    pub assembler: ConversationAssembler,
    /// Position → LLM-generated conversation.
    pub generator: ConversationGenerator,
}

impl AppState {
    /// Build clients from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let upstream = UpstreamClient::from_config(config.upstream.clone())?;
        let llm = OpenAiService::new(config.llm.clone())?;

        Ok(Self {
            assembler: ConversationAssembler::new(upstream, config.assembly_concurrency),
            generator: ConversationGenerator::new(llm, config.template_path.clone()),
        })
    }
}
