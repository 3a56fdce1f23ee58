//! # Answers and Answer Sets
//!
//! A [`Response`] records one rating for one question. The same record
//! shape serves the maturity assessment ([`Answer`]) and the quick check
//! ([`QuickCheckAnswer`]); only the value type differs.
//!
//! A [`ResponseSet`] holds at most one response per question id. Setting a
//! response for a question that already has one replaces it (upsert by
//! key, never append). Iteration order is by question id, so two sets with
//! the same contents serialize identically regardless of insertion order.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use regcheck_core::{CategoryId, MaturityLevel, QuestionId, QuickCheckValue, ValidationError};

/// A rating type that can be recorded against a question.
///
/// `Display` must produce a spelling that `FromStr` accepts back.
pub trait ResponseValue:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + Serialize
    + DeserializeOwned
    + FromStr<Err = ValidationError>
{
}

impl ResponseValue for MaturityLevel {}
impl ResponseValue for QuickCheckValue {}

/// One rating for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response<V> {
    pub question_id: QuestionId,
    pub category_id: CategoryId,
    pub value: V,
}

/// A maturity assessment answer.
pub type Answer = Response<MaturityLevel>;

/// A quick-check answer.
pub type QuickCheckAnswer = Response<QuickCheckValue>;

impl<V: ResponseValue> Response<V> {
    pub fn new(question_id: QuestionId, category_id: CategoryId, value: V) -> Self {
        Self {
            question_id,
            category_id,
            value,
        }
    }

    /// Build a response from untrusted strings.
    ///
    /// # Errors
    ///
    /// Empty identifiers and unrecognized values are rejected with a
    /// [`ValidationError`]; nothing is defaulted.
    pub fn parse(question_id: &str, category_id: &str, value: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            question_id: QuestionId::new(question_id)?,
            category_id: CategoryId::new(category_id)?,
            value: value.parse()?,
        })
    }
}

/// Unvalidated wire form of a response, as found in persisted blobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResponse {
    pub question_id: String,
    pub category_id: String,
    pub value: String,
}

impl RawResponse {
    pub fn from_response<V: ResponseValue>(response: &Response<V>) -> Self {
        Self {
            question_id: response.question_id.to_string(),
            category_id: response.category_id.to_string(),
            value: response.value.to_string(),
        }
    }

    /// Validate into a typed response.
    pub fn validate<V: ResponseValue>(&self) -> Result<Response<V>, ValidationError> {
        Response::parse(&self.question_id, &self.category_id, &self.value)
    }
}

// ---------------------------------------------------------------------------
// ResponseSet
// ---------------------------------------------------------------------------

/// At most one response per question id.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSet<V> {
    entries: BTreeMap<QuestionId, Response<V>>,
}

/// The answers of one maturity assessment.
pub type AnswerSet = ResponseSet<MaturityLevel>;

/// The answers of one quick check.
pub type QuickCheckSet = ResponseSet<QuickCheckValue>;

impl<V> Default for ResponseSet<V> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<V: ResponseValue> ResponseSet<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the response for its question.
    ///
    /// Returns the response it replaced, if any.
    pub fn set(&mut self, response: Response<V>) -> Option<Response<V>> {
        self.entries.insert(response.question_id.clone(), response)
    }

    /// Copy of this set with one response upserted.
    pub fn with(&self, response: Response<V>) -> Self {
        let mut next = self.clone();
        next.set(response);
        next
    }

    /// Remove the response for a question.
    pub fn remove(&mut self, question_id: &QuestionId) -> Option<Response<V>> {
        self.entries.remove(question_id)
    }

    pub fn get(&self, question_id: &QuestionId) -> Option<&Response<V>> {
        self.entries.get(question_id)
    }

    /// Number of distinct questions answered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Responses ordered by question id.
    pub fn iter(&self) -> impl Iterator<Item = &Response<V>> {
        self.entries.values()
    }

}

impl<V: ResponseValue> FromIterator<Response<V>> for ResponseSet<V> {
    /// Later responses for the same question replace earlier ones.
    fn from_iter<I: IntoIterator<Item = Response<V>>>(iter: I) -> Self {
        let mut set = Self::new();
        for response in iter {
            set.set(response);
        }
        set
    }
}

impl<V: Serialize> Serialize for ResponseSet<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.values())
    }
}

impl<'de, V: ResponseValue> Deserialize<'de> for ResponseSet<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let list = Vec::<Response<V>>::deserialize(deserializer)?;
        Ok(list.into_iter().collect())
    }
}
