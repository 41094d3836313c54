//! Prompt template loading and `{POSITION}` substitution.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::{debug, error};

use crate::error_handler::{AiLlmError, Result};

/// Placeholder replaced with the caller-supplied position.
pub const POSITION_PLACEHOLDER: &str = "{POSITION}";

/// Default on-disk location of the conversation prompt.
pub const DEFAULT_TEMPLATE_PATH: &str = "prompts/conversation_template.txt";

/// Raw prompt text read from disk.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    text: String,
}

impl PromptTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Reads the template file.
    ///
    /// # Errors
    /// - [`AiLlmError::TemplateNotFound`] if the file does not exist
    /// - [`AiLlmError::TemplateRead`] for any other I/O failure
    pub async fn load(path: &Path) -> Result<Self> {
        match tokio::fs::read_to_string(path).await {
            Ok(text) => {
                debug!(path = %path.display(), len = text.len(), "prompt template loaded");
                Ok(Self { text })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                error!(path = %path.display(), "prompt template not found");
                Err(AiLlmError::TemplateNotFound(path.to_path_buf()))
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to read prompt template");
                Err(AiLlmError::TemplateRead {
                    path: PathBuf::from(path),
                    source: e,
                })
            }
        }
    }

    /// Replaces every literal `{POSITION}` with `position`.
    ///
    /// The value is inserted verbatim, without escaping.
    pub fn fill(&self, position: &str) -> String {
        self.text.replace(POSITION_PLACEHOLDER, position)
    }
}
