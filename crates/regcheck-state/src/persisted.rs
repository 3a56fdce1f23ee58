//! Persisted blob format.
//!
//! ```json
//! { "version": 1, "updated_at": "2026-01-05T09:30:00Z", "answers": [ ... ] }
//! ```
//!
//! Answers are stored in their unvalidated string form and validated on
//! load. An unknown maturity value in a blob is a [`ValidationError`], never
//! a silently defaulted answer.

use serde::{Deserialize, Serialize};

use regcheck_core::{Timestamp, ValidationError};
use regcheck_scoring::{RawResponse, ResponseSet, ResponseValue};

use crate::error::StateError;

/// Current blob format version.
pub const STATE_VERSION: u32 = 1;

/// The persisted form of one answer store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub version: u32,
    pub updated_at: Timestamp,
    pub answers: Vec<RawResponse>,
}

impl PersistedState {
    pub fn from_set<V: ResponseValue>(set: &ResponseSet<V>, updated_at: Timestamp) -> Self {
        Self {
            version: STATE_VERSION,
            updated_at,
            answers: set.iter().map(RawResponse::from_response).collect(),
        }
    }

    /// Serialize to the JSON blob.
    pub fn encode(&self, key: &str) -> Result<String, StateError> {
        serde_json::to_string(self).map_err(|source| StateError::Corrupted {
            key: key.to_string(),
            source,
        })
    }

    /// Parse a blob and check its version.
    pub fn decode(key: &str, blob: &str) -> Result<Self, StateError> {
        let state: Self = serde_json::from_str(blob).map_err(|source| {
            tracing::warn!(key, error = %source, "corrupted state blob");
            StateError::Corrupted {
                key: key.to_string(),
                source,
            }
        })?;
        if state.version != STATE_VERSION {
            return Err(StateError::UnsupportedVersion {
                key: key.to_string(),
                version: state.version,
            });
        }
        Ok(state)
    }

    /// Validate the stored answers into a typed set.
    pub fn to_set<V: ResponseValue>(&self) -> Result<ResponseSet<V>, ValidationError> {
        self.answers.iter().map(RawResponse::validate::<V>).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regcheck_core::{CategoryId, MaturityLevel, QuestionId};
    use regcheck_scoring::{Answer, AnswerSet, QuickCheckSet};

    fn ts() -> Timestamp {
        Timestamp::parse("2026-01-05T09:30:00Z").unwrap()
    }

    #[test]
    fn encodes_documented_shape() {
        let set: AnswerSet = vec![Answer::new(
            QuestionId::new("q1").unwrap(),
            CategoryId::new("gov").unwrap(),
            MaturityLevel::Partial,
        )]
        .into_iter()
        .collect();
        let blob = PersistedState::from_set(&set, ts()).encode("k").unwrap();
        let json: serde_json::Value = serde_json::from_str(&blob).unwrap();
        assert_eq!(json["version"], 1);
        assert_eq!(json["updated_at"], "2026-01-05T09:30:00Z");
        assert_eq!(json["answers"][0]["value"], "partial");
        let back: AnswerSet = PersistedState::decode("k", &blob).unwrap().to_set().unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn unknown_maturity_value_is_validation_error() {
        let blob = r#"{"version":1,"updated_at":"2026-01-05T09:30:00Z","answers":[
            {"question_id":"q1","category_id":"gov","value":"somewhat"}]}"#;
        let state = PersistedState::decode("k", blob).unwrap();
        let err = state.to_set::<MaturityLevel>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownMaturityLevel("somewhat".into()));
    }

    #[test]
    fn garbage_is_corrupted() {
        assert!(matches!(
            PersistedState::decode("k", "not json"),
            Err(StateError::Corrupted { .. })
        ));
    }

    #[test]
    fn future_version_rejected() {
        let blob = r#"{"version":2,"updated_at":"2026-01-05T09:30:00Z","answers":[]}"#;
        assert!(matches!(
            PersistedState::decode("k", blob),
            Err(StateError::UnsupportedVersion { version: 2, .. })
        ));
    }

    #[test]
    fn quick_check_values_round_trip_through_strings() {
        let blob = r#"{"version":1,"updated_at":"2026-01-05T09:30:00Z","answers":[
            {"question_id":"qc1","category_id":"gov","value":"yes"},
            {"question_id":"qc2","category_id":"gov","value":"no"}]}"#;
        let set: QuickCheckSet = PersistedState::decode("k", blob).unwrap().to_set().unwrap();
        assert_eq!(set.len(), 2);
    }
}
