//! Normalized conversation model.
//!
//! These types are built fresh for every request and dropped after the
//! response is written. Serde attributes encode the output rules: empty
//! `options`, absent or empty `range`, and empty answers are never emitted.
//! Every omitted field defaults on the way back in, so a parsed question
//! without an `answer` key carries `Answer::default()`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Closed set of question kinds understood by the service.
///
/// Serialized as its integer value (`1`, `2`, `3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum QuestionType {
    Text = 1,
    Numeric = 2,
    MultipleChoice = 3,
}

impl QuestionType {
    /// Whether questions of this kind are resolved against the answer corpus.
    pub fn carries_answer(self) -> bool {
        matches!(self, QuestionType::Numeric | QuestionType::MultipleChoice)
    }
}

/// Question type integer outside `{1, 2, 3}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown question type: {0}")]
pub struct UnknownQuestionType(pub i64);

impl TryFrom<i64> for QuestionType {
    type Error = UnknownQuestionType;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(QuestionType::Text),
            2 => Ok(QuestionType::Numeric),
            3 => Ok(QuestionType::MultipleChoice),
            other => Err(UnknownQuestionType(other)),
        }
    }
}

impl From<QuestionType> for i64 {
    fn from(value: QuestionType) -> Self {
        value as i64
    }
}

/// Resolved answer attached to a question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Free-text options in upstream order, duplicates preserved.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    /// Open-ended numeric bound description (e.g. `{"min": 0, "max": 10}`).
    #[serde(default, skip_serializing_if = "range_is_empty")]
    pub range: Option<Map<String, Value>>,
}

impl Answer {
    /// True once a non-empty range has been accepted.
    pub fn has_range(&self) -> bool {
        !range_is_empty(&self.range)
    }

    /// True when nothing would be emitted for this answer.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && !self.has_range()
    }
}

fn range_is_empty(range: &Option<Map<String, Value>>) -> bool {
    range.as_ref().is_none_or(Map::is_empty)
}

/// One prompt within a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub text: String,
    /// Display order as declared upstream; not validated for uniqueness.
    pub order: i64,
    #[serde(default, skip_serializing_if = "Answer::is_empty")]
    pub answer: Answer,
}

/// Assembled response for one chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    /// Upstream chat order; never re-sorted by `order`.
    pub questions: Vec<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_type_conversion_is_closed() {
        assert_eq!(QuestionType::try_from(1), Ok(QuestionType::Text));
        assert_eq!(QuestionType::try_from(2), Ok(QuestionType::Numeric));
        assert_eq!(QuestionType::try_from(3), Ok(QuestionType::MultipleChoice));
        assert_eq!(QuestionType::try_from(0), Err(UnknownQuestionType(0)));
        assert_eq!(QuestionType::try_from(4), Err(UnknownQuestionType(4)));
    }

    #[test]
    fn only_numeric_and_multiple_choice_carry_answers() {
        assert!(!QuestionType::Text.carries_answer());
        assert!(QuestionType::Numeric.carries_answer());
        assert!(QuestionType::MultipleChoice.carries_answer());
    }

    #[test]
    fn empty_range_map_counts_as_unset() {
        let answer = Answer {
            options: Vec::new(),
            range: Some(Map::new()),
        };
        assert!(!answer.has_range());
        assert!(answer.is_empty());
    }

    #[test]
    fn unknown_type_is_rejected_on_parse() {
        let err = serde_json::from_str::<Question>(r#"{"type": 7, "text": "x", "order": 1}"#)
            .unwrap_err();
        assert!(err.to_string().contains("unknown question type: 7"));
    }
}
