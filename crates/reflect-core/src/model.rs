//! Core data model types for reflect.
//!
//! A question is identified only by its position in the bank. The 1-based
//! position, written as a decimal string, is also the key its answer is
//! stored under, so reordering a bank changes what saved answers refer to.

use std::collections::BTreeMap;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::BankError;

/// A single question shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Section heading the question is grouped under.
    pub section: String,
    /// The question itself.
    pub text: String,
}

impl Question {
    pub fn new(section: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            text: text.into(),
        }
    }
}

/// A contiguous run of questions sharing a section name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub name: &'a str,
    /// Zero-based indices of the questions in this run.
    pub range: Range<usize>,
}

/// An immutable, ordered, non-empty sequence of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank. Fails if `questions` is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false: a bank is never empty.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The question at zero-based `index`.
    pub fn get(&self, index: usize) -> Result<&Question, BankError> {
        self.questions.get(index).ok_or(BankError::OutOfRange {
            index,
            len: self.questions.len(),
        })
    }

    /// Group questions into sections. A section ends where the next
    /// question's section name differs.
    pub fn sections(&self) -> Vec<Section<'_>> {
        let mut sections: Vec<Section<'_>> = Vec::new();
        for (i, q) in self.questions.iter().enumerate() {
            match sections.last_mut() {
                Some(last) if last.name == q.section => last.range.end = i + 1,
                _ => sections.push(Section {
                    name: &q.section,
                    range: i..i + 1,
                }),
            }
        }
        sections
    }
}

/// Persistence key for the question at zero-based `index`.
pub fn position_key(index: usize) -> String {
    (index + 1).to_string()
}

/// Answers keyed by 1-based question position.
///
/// Backed by a `BTreeMap` so serialization order is stable and repeated
/// saves of the same answers are byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<String, String>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw lookup by position key (`"1"`, `"2"`, ...).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// The answer for the question at zero-based `index`, if it has a
    /// non-blank one.
    pub fn answer_at(&self, index: usize) -> Option<&str> {
        self.get(&position_key(index))
            .filter(|answer| !answer.trim().is_empty())
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.answer_at(index).is_some()
    }

    /// Store or overwrite the answer for zero-based `index`.
    pub fn set(&mut self, index: usize, answer: impl Into<String>) {
        self.0.insert(position_key(index), answer.into());
    }

    /// Number of non-blank answers among the first `total` questions.
    pub fn answered_count(&self, total: usize) -> usize {
        (0..total).filter(|&i| self.is_answered(i)).count()
    }
}

impl FromIterator<(String, String)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
