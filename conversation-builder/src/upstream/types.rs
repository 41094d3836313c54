//! Wire shapes returned by the conversation-builder API.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Chat record: the ordered question references of one chat.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatData {
    pub questions: Vec<ChatQuestionRef>,
}

/// One `(qid, order)` entry inside a chat record.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatQuestionRef {
    pub qid: String,
    pub order: i64,
}

/// Question record: raw type integer and text.
///
/// `kind` is converted into a `QuestionType` by the assembler.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionData {
    #[serde(rename = "type")]
    pub kind: i64,
    pub text: String,
}

/// One entry of the answer corpus.
///
/// `range` distinguishes an absent key (`None`) from an explicit `null`
/// (`Some(Value::Null)`); both `text` and `range` are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerRecord {
    #[serde(default)]
    pub qids: Vec<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub range: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
