pub mod config;
pub mod conversation_generator;
pub mod error_handler;
pub mod prompt_template;
pub mod services;

pub use config::{default_config::config_openai, llm_model_config::LlmModelConfig};
pub use conversation_generator::ConversationGenerator;
pub use error_handler::{AiLlmError, ConfigError, ProviderError};
pub use services::open_ai_service::OpenAiService;
