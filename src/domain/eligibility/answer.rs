//! Collected answers for one flow session.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The recorded answer to one question.
///
/// Single-select questions record one option id; multi-select questions
/// record the ordered set of selected option ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Single(String),
    Multi(Vec<String>),
}

impl Answer {
    pub fn single(option_id: impl Into<String>) -> Self {
        Answer::Single(option_id.into())
    }

    pub fn multi<I, S>(option_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Answer::Multi(option_ids.into_iter().map(Into::into).collect())
    }

    /// Returns true if the answer carries no selection.
    ///
    /// A single-select answer is always non-empty; a multi-select answer is
    /// empty when the user deselected every option.
    pub fn is_empty(&self) -> bool {
        match self {
            Answer::Single(_) => false,
            Answer::Multi(values) => values.is_empty(),
        }
    }
}

/// Mapping from question id to the answer given.
///
/// Session-local and in-memory; starts empty, grows by upsert as the user
/// progresses, and is pruned back to the persona answer when the user
/// backtracks past persona selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    entries: BTreeMap<String, Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records or replaces the answer for a question.
    pub fn upsert(&mut self, question_id: impl Into<String>, answer: Answer) {
        self.entries.insert(question_id.into(), answer);
    }

    /// Returns the answer for a question, if any.
    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.entries.get(question_id)
    }

    /// Returns true if the question has a non-empty answer recorded.
    pub fn has_answer(&self, question_id: &str) -> bool {
        self.entries
            .get(question_id)
            .map(|a| !a.is_empty())
            .unwrap_or(false)
    }

    /// Discards every answer except the one for `keep_question_id`.
    ///
    /// This is the full-reset-on-backtrack policy: partial answers from an
    /// abandoned persona path are never reused.
    pub fn retain_only(&mut self, keep_question_id: &str) {
        self.entries.retain(|k, _| k == keep_question_id);
    }

    /// Removes all answers.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(question id, answer)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
