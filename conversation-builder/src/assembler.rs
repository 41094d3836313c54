//! Conversation Assembler: chat → questions → answers.

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info, instrument};

use crate::{
    errors::BuilderResult,
    model::{Answer, Conversation, Question, QuestionType},
    upstream::{UpstreamClient, types::ChatQuestionRef},
};

/// Default number of questions resolved concurrently per chat.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Orchestrates the upstream lookups for one chat.
///
/// Per-question lookups run concurrently (bounded by `concurrency`) and are
/// put back into upstream order afterwards. The first failure aborts the
/// whole assembly; there is no partial conversation.
#[derive(Debug, Clone)]
pub struct ConversationAssembler {
    client: UpstreamClient,
    concurrency: usize,
}

impl ConversationAssembler {
    pub fn new(client: UpstreamClient, concurrency: usize) -> Self {
        Self {
            client,
            concurrency: concurrency.max(1),
        }
    }

    /// Builds the normalized conversation for `chat_id`.
    #[instrument(skip(self), fields(concurrency = self.concurrency))]
    pub async fn assemble(&self, chat_id: &str) -> BuilderResult<Conversation> {
        let chat = self.client.fetch_chat(chat_id).await?;
        info!(questions = chat.questions.len(), "chat fetched");

        let mut built: Vec<(usize, Question)> = stream::iter(chat.questions.into_iter().enumerate())
            .map(|(idx, entry)| async move {
                self.build_question(entry).await.map(|q| (idx, q))
            })
            .buffer_unordered(self.concurrency)
            .try_collect()
            .await?;

        built.sort_unstable_by_key(|(idx, _)| *idx);
        let questions: Vec<Question> = built.into_iter().map(|(_, q)| q).collect();

        info!(questions = questions.len(), "conversation assembled");

        Ok(Conversation {
            id: chat_id.to_string(),
            questions,
        })
    }

    #[instrument(skip(self, entry), fields(qid = %entry.qid, order = entry.order))]
    async fn build_question(&self, entry: ChatQuestionRef) -> BuilderResult<Question> {
        let data = self.client.fetch_question(&entry.qid).await?;
        let kind = QuestionType::try_from(data.kind)?;

        // Text questions skip the corpus scan entirely.
        let answer = if kind.carries_answer() {
            self.client.fetch_answers_for(&entry.qid).await?
        } else {
            Answer::default()
        };

        debug!(?kind, "question built");

        Ok(Question {
            kind,
            text: data.text,
            order: entry.order,
            answer,
        })
    }
}
