//! # Identity Newtypes
//!
//! Domain-primitive newtypes for identifiers used across regcheck.
//! Each identifier is a distinct type: a [`QuestionId`] cannot be passed
//! where a [`CategoryId`] is expected.
//!
//! ## Validation
//!
//! String-based identifiers are validated to be non-empty at construction
//! time, including when deserialized from packs or persisted state.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create the identifier, validating non-emptiness.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::EmptyIdentifier`] if the string is
            /// empty or whitespace-only.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let s = value.into();
                if s.trim().is_empty() {
                    return Err(ValidationError::EmptyIdentifier { kind: $kind });
                }
                Ok(Self(s))
            }

            /// Access the identifier string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a regulation or standard (e.g. `nis2`, `gdpr`, `dora`).
    RegulationId,
    "regulation"
);

string_id!(
    /// Identifier of a requirement category within a regulation.
    CategoryId,
    "category"
);

string_id!(
    /// Identifier of an assessment or quick-check question.
    QuestionId,
    "question"
);

string_id!(
    /// Identifier of a remediation recommendation.
    RecommendationId,
    "recommendation"
);

string_id!(
    /// Identifier of a cross-regulation crosswalk topic (e.g. `incident-handling`).
    TopicId,
    "topic"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regulation_id_rejects_empty() {
        assert!(RegulationId::new("").is_err());
        assert!(RegulationId::new("   ").is_err());
    }

    #[test]
    fn empty_identifier_names_its_kind() {
        let err = QuestionId::new("").unwrap_err();
        assert_eq!(err, ValidationError::EmptyIdentifier { kind: "question" });
    }

    #[test]
    fn identifier_display_is_raw_string() {
        let id = CategoryId::new("incident-handling").unwrap();
        assert_eq!(id.to_string(), "incident-handling");
        assert_eq!(id.as_str(), "incident-handling");
    }

    #[test]
    fn deserialization_validates_non_empty() {
        let ok: Result<RecommendationId, _> = serde_json::from_str("\"rec-1\"");
        assert!(ok.is_ok());
        let bad: Result<RecommendationId, _> = serde_json::from_str("\"\"");
        assert!(bad.is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = TopicId::new("governance").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"governance\"");
    }

    #[test]
    fn ids_order_lexicographically() {
        let a = QuestionId::new("a").unwrap();
        let b = QuestionId::new("b").unwrap();
        assert!(a < b);
    }
}
