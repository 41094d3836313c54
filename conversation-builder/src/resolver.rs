//! Answer Resolver: reconciles answer-corpus records into one [`Answer`].

use serde_json::Value;

use crate::{model::Answer, upstream::types::AnswerRecord};

/// Folds every corpus record referencing `qid` into a single answer.
///
/// Records are visited in corpus order. A record with a `range` key supplies
/// the range while none has been accepted yet; otherwise its `text` (if any)
/// is appended to `options`. A record carrying both keys that arrives after a
/// range was accepted therefore contributes its text.
///
/// No matching record yields `Answer::default()`.
pub fn reconcile<I>(qid: &str, records: I) -> Answer
where
    I: IntoIterator<Item = AnswerRecord>,
{
    let mut answer = Answer::default();

    for record in records
        .into_iter()
        .filter(|r| r.qids.iter().any(|q| q == qid))
    {
        match (record.range, record.text) {
            (Some(range), _) if !answer.has_range() => {
                answer.range = match range {
                    Value::Object(map) => Some(map),
                    _ => None,
                };
            }
            (_, Some(text)) => answer.options.push(text),
            _ => {}
        }
    }

    answer
}
