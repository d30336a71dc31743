//! ResponseSet - Recorded answers keyed by question id.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::QuestionId;
use crate::domain::questions::ResponseValue;

/// The answers recorded so far, keyed by question id.
///
/// Owned by the session; the engine only ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet(BTreeMap<QuestionId, ResponseValue>);

impl ResponseSet {
    /// Creates an empty response set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, replacing any prior answer to the same question.
    pub fn record(&mut self, question_id: QuestionId, value: ResponseValue) {
        self.0.insert(question_id, value);
    }

    /// Removes the answer to a question, returning it if present.
    pub fn clear(&mut self, question_id: &QuestionId) -> Option<ResponseValue> {
        self.0.remove(question_id)
    }

    /// Returns the recorded answer for a question, if any.
    pub fn get(&self, question_id: &QuestionId) -> Option<&ResponseValue> {
        self.0.get(question_id)
    }

    /// Returns true if the question has a recorded answer.
    pub fn contains(&self, question_id: &QuestionId) -> bool {
        self.0.contains_key(question_id)
    }

    /// Returns the number of recorded answers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing has been answered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over (question id, answer) pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &ResponseValue)> {
        self.0.iter()
    }
}
