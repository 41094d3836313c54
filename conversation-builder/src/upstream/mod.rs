//! Client for the upstream conversation-builder API.
//!
//! Endpoints used:
//!   * GET {base}/chat/:id
//!   * GET {base}/question/:qid
//!   * GET {base}/answer        (whole corpus, no per-question filter)
//!
//! No retries: every failure is returned to the caller as-is.

pub mod types;

use std::time::{Duration, Instant};

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::{
    errors::{BuilderConfigError, BuilderError, BuilderResult, UpstreamResource},
    model::Answer,
    resolver,
    upstream::types::{AnswerRecord, ChatData, QuestionData},
};

/// Runtime configuration for [`UpstreamClient`].
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// API base, e.g. "http://host:8000/conversation_builder".
    pub base_url: String,
    /// Optional request timeout; the reqwest default applies when `None`.
    pub timeout_secs: Option<u64>,
}

/// Thin HTTP wrapper around the three upstream lookups.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
    base_url: String,
}

impl UpstreamClient {
    /// Builds a client from configuration.
    ///
    /// The base URL must start with `http://` or `https://`; a trailing `/`
    /// is dropped.
    pub fn from_config(cfg: UpstreamConfig) -> BuilderResult<Self> {
        let base = cfg.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(BuilderConfigError::InvalidBaseUrl(cfg.base_url.clone()).into());
        }

        let mut builder = Client::builder().user_agent("conversation-builder/0.1");
        if let Some(secs) = cfg.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(BuilderConfigError::Client)?;

        debug!(base_url = %base, timeout_secs = ?cfg.timeout_secs, "upstream client initialized");

        Ok(Self::new(http, base.to_string()))
    }

    /// Constructs a client around an existing HTTP instance.
    pub fn new(http: Client, base_url: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches the ordered question references of a chat.
    ///
    /// # Errors
    /// - [`BuilderError::UpstreamUnavailable`] on transport/status failure or a non-JSON body
    /// - [`BuilderError::InvalidUpstreamShape`] when the body has no usable `questions` field
    #[instrument(skip(self))]
    pub async fn fetch_chat(&self, chat_id: &str) -> BuilderResult<ChatData> {
        let url = format!("{}/chat/{}", self.base_url, urlencoding::encode(chat_id));
        let mut body: Value = self.get_json(UpstreamResource::Chat, &url).await?;

        let questions = body
            .as_object_mut()
            .and_then(|obj| obj.remove("questions"))
            .ok_or_else(|| {
                error!(%url, "chat response has no `questions` field");
                BuilderError::InvalidUpstreamShape("missing `questions` field".into())
            })?;

        let questions = serde_json::from_value(questions).map_err(|e| {
            error!(%url, error = %e, "chat `questions` has unexpected shape");
            BuilderError::InvalidUpstreamShape(e.to_string())
        })?;

        Ok(ChatData { questions })
    }

    /// Fetches the raw type and text of one question.
    #[instrument(skip(self))]
    pub async fn fetch_question(&self, qid: &str) -> BuilderResult<QuestionData> {
        let url = format!("{}/question/{}", self.base_url, urlencoding::encode(qid));
        self.get_json(UpstreamResource::Question, &url).await
    }

    /// Fetches the entire answer corpus.
    pub async fn fetch_answer_corpus(&self) -> BuilderResult<Vec<AnswerRecord>> {
        let url = format!("{}/answer", self.base_url);
        self.get_json(UpstreamResource::Answer, &url).await
    }

    /// Resolves the answer applicable to `qid`.
    ///
    /// Scans the whole corpus on every call. Never fails for "no answer
    /// found"; only transport/decode failures are errors.
    #[instrument(skip(self))]
    pub async fn fetch_answers_for(&self, qid: &str) -> BuilderResult<Answer> {
        let corpus = self.fetch_answer_corpus().await?;
        let total = corpus.len();
        let answer = resolver::reconcile(qid, corpus);

        debug!(
            corpus = total,
            options = answer.options.len(),
            has_range = answer.has_range(),
            "answer resolved"
        );

        Ok(answer)
    }

    async fn get_json<T>(&self, resource: UpstreamResource, url: &str) -> BuilderResult<T>
    where
        T: DeserializeOwned,
    {
        let started = Instant::now();
        debug!(%resource, %url, "GET");

        let result: Result<T, reqwest::Error> = async {
            self.http
                .get(url)
                .send()
                .await?
                .error_for_status()?
                .json::<T>()
                .await
        }
        .await;

        match result {
            Ok(v) => {
                debug!(
                    %resource,
                    latency_ms = started.elapsed().as_millis(),
                    "upstream call completed"
                );
                Ok(v)
            }
            Err(e) => {
                error!(
                    %resource,
                    %url,
                    error = %e,
                    latency_ms = started.elapsed().as_millis(),
                    "upstream call failed"
                );
                Err(BuilderError::upstream(resource, e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_base() {
        let err = UpstreamClient::from_config(UpstreamConfig {
            base_url: "ftp://example.com".into(),
            timeout_secs: None,
        })
        .unwrap_err();

        assert!(matches!(
            err,
            BuilderError::Config(BuilderConfigError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = UpstreamClient::new(Client::new(), "http://localhost:1/api/".into());
        assert_eq!(client.base_url, "http://localhost:1/api");
    }
}
