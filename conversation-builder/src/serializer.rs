//! Conversation → JSON rendering.

use serde_json::Value;

use crate::{errors::BuilderResult, model::Conversation};

/// Renders a conversation as the public JSON document.
///
/// Questions and options keep the order they were assembled in. A question's
/// `answer` key appears only when the answer has options or a non-empty range,
/// and inside it `options`/`range` are omitted when empty.
pub fn serialize(conversation: &Conversation) -> BuilderResult<Value> {
    Ok(serde_json::to_value(conversation)?)
}
