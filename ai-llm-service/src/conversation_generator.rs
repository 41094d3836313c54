//! LLM Conversation Generator.
//!
//! Fills the prompt template with a job position, asks the completion API
//! for a single deterministic reply and returns that reply parsed as JSON,
//! untouched. No retries, no streaming, no schema check on the output.

use std::path::PathBuf;

use serde_json::Value;
use tracing::{error, info, instrument};

use crate::{
    error_handler::{AiLlmError, Result},
    prompt_template::PromptTemplate,
    services::open_ai_service::OpenAiService,
};

/// Fixed system-role introduction sent with every request.
pub const SYSTEM_INTRO: &str = "You are an experienced recruiter who designs structured \
    interview conversations. Reply with valid JSON only.";

/// Generates conversation data for a job position.
#[derive(Debug)]
pub struct ConversationGenerator {
    llm: OpenAiService,
    template_path: PathBuf,
}

impl ConversationGenerator {
    pub fn new(llm: OpenAiService, template_path: impl Into<PathBuf>) -> Self {
        Self {
            llm,
            template_path: template_path.into(),
        }
    }

    /// Runs one generation for `position`.
    ///
    /// Checks happen in this order, each failing fast: position, credential,
    /// template, completion call, JSON parse.
    ///
    /// # Errors
    /// - [`AiLlmError::MissingParameter`] if `position` is blank
    /// - [`AiLlmError::MissingCredential`] if no API key is configured
    /// - [`AiLlmError::TemplateNotFound`] / [`AiLlmError::TemplateRead`] for template problems
    /// - [`AiLlmError::Provider`] / [`AiLlmError::HttpTransport`] for completion failures
    /// - [`AiLlmError::InvalidModelOutput`] if the reply is not JSON
    #[instrument(skip(self), fields(model = %self.llm.model()))]
    pub async fn generate(&self, position: &str) -> Result<Value> {
        if position.trim().is_empty() {
            return Err(AiLlmError::MissingParameter);
        }
        if !self.llm.has_credential() {
            error!("completion API key is not configured");
            return Err(AiLlmError::MissingCredential);
        }

        let template = PromptTemplate::load(&self.template_path).await?;
        let prompt = template.fill(position);

        let reply = self.llm.generate(&prompt, Some(SYSTEM_INTRO)).await?;

        let value = serde_json::from_str::<Value>(&reply).map_err(|e| {
            error!(error = %e, reply_len = reply.len(), "model reply is not valid JSON");
            AiLlmError::InvalidModelOutput(e)
        })?;

        info!("conversation generated");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use mockito::{Matcher, Server};
    use serde_json::json;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::config::llm_model_config::LlmModelConfig;

    fn service(endpoint: String, api_key: Option<&str>) -> OpenAiService {
        OpenAiService::new(LlmModelConfig {
            model: "gpt-test".into(),
            endpoint,
            api_key: api_key.map(str::to_string),
            max_tokens: None,
            temperature: Some(0.0),
            timeout_secs: Some(5),
        })
        .unwrap()
    }

    fn template(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    fn completion(content: &str) -> String {
        json!({"choices": [{"message": {"role": "assistant", "content": content}}]}).to_string()
    }

    #[tokio::test]
    async fn blank_position_is_rejected_first() {
        let generator = ConversationGenerator::new(
            service("http://127.0.0.1:9".into(), None),
            "does/not/exist.txt",
        );

        let err = generator.generate("  ").await.unwrap_err();
        assert!(matches!(err, AiLlmError::MissingParameter));
    }

    #[tokio::test]
    async fn missing_credential_precedes_template_lookup() {
        let generator = ConversationGenerator::new(
            service("http://127.0.0.1:9".into(), None),
            "does/not/exist.txt",
        );

        let err = generator.generate("Engineer").await.unwrap_err();
        assert!(matches!(err, AiLlmError::MissingCredential));
    }

    #[tokio::test]
    async fn missing_template_is_reported() {
        let generator = ConversationGenerator::new(
            service("http://127.0.0.1:9".into(), Some("sk-test")),
            "does/not/exist.txt",
        );

        let err = generator.generate("Engineer").await.unwrap_err();
        assert!(matches!(err, AiLlmError::TemplateNotFound(_)));
    }

    #[tokio::test]
    async fn sends_filled_prompt_and_returns_parsed_reply() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_body(Matcher::PartialJson(json!({
                "model": "gpt-test",
                "temperature": 0.0,
                "messages": [
                    {"role": "system", "content": SYSTEM_INTRO},
                    {"role": "user", "content": "Questions for a Data Engineer, Data Engineer only."}
                ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion(r#"{"questions": [{"text": "Why data?", "type": 1}]}"#))
            .create_async()
            .await;

        let tpl = template("Questions for a {POSITION}, {POSITION} only.");
        let generator =
            ConversationGenerator::new(service(server.url(), Some("sk-test")), tpl.path());

        let value = generator.generate("Data Engineer").await.unwrap();

        assert_eq!(value, json!({"questions": [{"text": "Why data?", "type": 1}]}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_json_reply_is_invalid_model_output() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion("Sure! Here are some questions."))
            .create_async()
            .await;

        let tpl = template("{POSITION}");
        let generator =
            ConversationGenerator::new(service(server.url(), Some("sk-test")), tpl.path());

        let err = generator.generate("Designer").await.unwrap_err();
        assert!(matches!(err, AiLlmError::InvalidModelOutput(_)));
    }
}
