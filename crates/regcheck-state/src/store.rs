//! # Answer Stores
//!
//! One [`AnswerStore`] owns the answers of one regulation, either the
//! maturity assessment ([`AssessmentStore`]) or the quick check
//! ([`QuickCheckStore`]).
//!
//! ## Consistency
//!
//! The current state is an immutable [`StoreState`] behind an `Arc`. Every
//! mutation builds a complete new state from the old one and swaps the
//! `Arc` under the write lock; readers clone the `Arc` under the read lock
//! and score against that snapshot. A score computation therefore never
//! observes a half-applied mutation, and a snapshot taken before a
//! mutation keeps its contents after it.
//!
//! When a storage backend is attached, the new state is persisted before
//! the swap. A failed write leaves the in-memory state unchanged.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use regcheck_core::{
    AssessmentScope, MaturityLevel, QuestionId, QuickCheckValue, RegulationId, Timestamp,
    ValidationError,
};
use regcheck_pack::RegulationConfig;
use regcheck_scoring::{
    score_assessment, score_quick_check, validate_answers, validate_quick_check, AssessmentResult,
    QuickCheckScore, Response, ResponseSet, ResponseValue,
};

use crate::error::StateError;
use crate::key::{storage_key, StoreKind};
use crate::persisted::PersistedState;
use crate::storage::StateStorage;

/// A response value with a dedicated store.
pub trait StoreValue: ResponseValue + Send + Sync + 'static {
    /// Store the value type lives in.
    const KIND: StoreKind;

    /// Check a candidate answer set against the regulation config.
    fn validate(config: &RegulationConfig, answers: &ResponseSet<Self>) -> Result<(), ValidationError>;
}

impl StoreValue for MaturityLevel {
    const KIND: StoreKind = StoreKind::Assessment;

    fn validate(config: &RegulationConfig, answers: &ResponseSet<Self>) -> Result<(), ValidationError> {
        validate_answers(config, answers)
    }
}

impl StoreValue for QuickCheckValue {
    const KIND: StoreKind = StoreKind::QuickCheck;

    fn validate(config: &RegulationConfig, answers: &ResponseSet<Self>) -> Result<(), ValidationError> {
        validate_quick_check(config, answers)
    }
}

/// Immutable snapshot of a store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreState<V> {
    pub answers: ResponseSet<V>,
    /// Time of the last mutation, `None` for a fresh store.
    pub updated_at: Option<Timestamp>,
    /// Incremented on every committed mutation.
    pub revision: u64,
}

impl<V> Default for StoreState<V> {
    fn default() -> Self {
        Self {
            answers: ResponseSet::default(),
            updated_at: None,
            revision: 0,
        }
    }
}

/// Answers of one regulation.
pub struct AnswerStore<V> {
    regulation: RegulationId,
    storage: Option<Arc<dyn StateStorage>>,
    state: RwLock<Arc<StoreState<V>>>,
}

/// Maturity assessment answers of one regulation.
pub type AssessmentStore = AnswerStore<MaturityLevel>;

/// Quick-check answers of one regulation.
pub type QuickCheckStore = AnswerStore<QuickCheckValue>;

impl<V: StoreValue> fmt::Debug for AnswerStore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnswerStore")
            .field("regulation", &self.regulation)
            .field("kind", &V::KIND)
            .field("persistent", &self.storage.is_some())
            .field("revision", &self.state.read().revision)
            .finish()
    }
}

impl<V: StoreValue> AnswerStore<V> {
    /// A store that is never persisted.
    pub fn in_memory(regulation: RegulationId) -> Self {
        Self {
            regulation,
            storage: None,
            state: RwLock::new(Arc::new(StoreState::default())),
        }
    }

    /// A store backed by `storage`, initialised from any blob already
    /// stored under its key.
    ///
    /// # Errors
    ///
    /// Fails if the blob cannot be read, is corrupted, or holds an answer
    /// with an unrecognized value.
    pub fn with_storage(
        regulation: RegulationId,
        storage: Arc<dyn StateStorage>,
    ) -> Result<Self, StateError> {
        let key = storage_key(&regulation, V::KIND);
        let initial = match storage.load(&key)? {
            Some(blob) => {
                let persisted = PersistedState::decode(&key, &blob)?;
                let answers = persisted.to_set::<V>()?;
                tracing::debug!(key = %key, answers = answers.len(), "restored answer store");
                StoreState {
                    answers,
                    updated_at: Some(persisted.updated_at),
                    revision: 0,
                }
            }
            None => StoreState::default(),
        };
        Ok(Self {
            regulation,
            storage: Some(storage),
            state: RwLock::new(Arc::new(initial)),
        })
    }

    pub fn regulation(&self) -> &RegulationId {
        &self.regulation
    }

    pub fn kind(&self) -> StoreKind {
        V::KIND
    }

    /// Storage key of this store.
    pub fn key(&self) -> String {
        storage_key(&self.regulation, V::KIND)
    }

    /// Consistent view of the current state.
    pub fn snapshot(&self) -> Arc<StoreState<V>> {
        Arc::clone(&self.state.read())
    }

    /// Build the next state from the current one and swap it in.
    fn commit(
        &self,
        next: impl FnOnce(&ResponseSet<V>) -> Result<ResponseSet<V>, StateError>,
    ) -> Result<Arc<StoreState<V>>, StateError> {
        let mut guard = self.state.write();
        let answers = next(&guard.answers)?;
        let updated_at = Timestamp::now();
        if let Some(storage) = &self.storage {
            let key = self.key();
            let blob = PersistedState::from_set(&answers, updated_at).encode(&key)?;
            storage.save(&key, &blob)?;
        }
        let state = Arc::new(StoreState {
            answers,
            updated_at: Some(updated_at),
            revision: guard.revision + 1,
        });
        *guard = Arc::clone(&state);
        Ok(state)
    }

    /// Upsert one answer.
    pub fn set(&self, response: Response<V>) -> Result<Arc<StoreState<V>>, StateError> {
        self.commit(|current| Ok(current.with(response)))
    }

    /// Upsert one answer after checking the resulting set against `config`.
    ///
    /// Nothing is stored if validation fails.
    pub fn set_checked(
        &self,
        config: &RegulationConfig,
        response: Response<V>,
    ) -> Result<Arc<StoreState<V>>, StateError> {
        self.commit(|current| {
            let next = current.with(response);
            V::validate(config, &next)?;
            Ok(next)
        })
    }

    /// Remove one answer. A missing answer is not an error.
    pub fn remove(&self, question: &QuestionId) -> Result<Arc<StoreState<V>>, StateError> {
        self.commit(|current| {
            let mut next = current.clone();
            next.remove(question);
            Ok(next)
        })
    }

    /// Replace the whole answer set.
    pub fn replace(&self, answers: ResponseSet<V>) -> Result<Arc<StoreState<V>>, StateError> {
        self.commit(|_| Ok(answers))
    }

    /// Clear all answers and delete the persisted blob.
    pub fn reset(&self) -> Result<(), StateError> {
        let mut guard = self.state.write();
        if let Some(storage) = &self.storage {
            storage.remove(&self.key())?;
        }
        *guard = Arc::new(StoreState {
            revision: guard.revision + 1,
            ..StoreState::default()
        });
        tracing::debug!(key = %self.key(), "reset answer store");
        Ok(())
    }
}

impl AnswerStore<MaturityLevel> {
    /// Score the current snapshot.
    pub fn score(
        &self,
        config: &RegulationConfig,
        scope: AssessmentScope,
    ) -> Result<AssessmentResult, ValidationError> {
        score_assessment(config, &self.snapshot().answers, scope)
    }
}

impl AnswerStore<QuickCheckValue> {
    /// Score the current snapshot. Does not mutate the store.
    pub fn score(&self, config: &RegulationConfig) -> Result<QuickCheckScore, ValidationError> {
        score_quick_check(config, &self.snapshot().answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use regcheck_core::CategoryId;
    use regcheck_pack::RegulationRegistry;
    use regcheck_scoring::{Answer, QuickCheckAnswer};

    fn nis2() -> RegulationId {
        RegulationId::new("nis2").unwrap()
    }

    fn answer(q: &str, c: &str, v: MaturityLevel) -> Answer {
        Answer::new(QuestionId::new(q).unwrap(), CategoryId::new(c).unwrap(), v)
    }

    #[test]
    fn set_upserts_and_bumps_revision() {
        let store = AssessmentStore::in_memory(nis2());
        store.set(answer("nis2-gov-1", "governance", MaturityLevel::Partial)).unwrap();
        let state = store
            .set(answer("nis2-gov-1", "governance", MaturityLevel::Implemented))
            .unwrap();
        assert_eq!(state.answers.len(), 1);
        assert_eq!(state.revision, 2);
        assert!(state.updated_at.is_some());
    }

    #[test]
    fn snapshot_is_unaffected_by_later_mutation() {
        let store = AssessmentStore::in_memory(nis2());
        store.set(answer("nis2-gov-1", "governance", MaturityLevel::Partial)).unwrap();
        let before = store.snapshot();
        store.set(answer("nis2-gov-2", "governance", MaturityLevel::Implemented)).unwrap();
        assert_eq!(before.answers.len(), 1);
        assert_eq!(store.snapshot().answers.len(), 2);
    }

    #[test]
    fn set_checked_rejects_unknown_question_without_storing() {
        let registry = RegulationRegistry::with_builtins().unwrap();
        let config = registry.get(&nis2()).unwrap();
        let store = AssessmentStore::in_memory(nis2());
        let err = store
            .set_checked(config, answer("nope", "governance", MaturityLevel::Partial))
            .unwrap_err();
        assert!(matches!(
            err,
            StateError::Validation(ValidationError::UnknownQuestion { .. })
        ));
        assert!(store.snapshot().answers.is_empty());
        assert_eq!(store.snapshot().revision, 0);
    }

    #[test]
    fn persists_and_restores() {
        let storage: Arc<dyn StateStorage> = Arc::new(MemoryStorage::new());
        let store = AssessmentStore::with_storage(nis2(), Arc::clone(&storage)).unwrap();
        store.set(answer("nis2-gov-1", "governance", MaturityLevel::Implemented)).unwrap();
        assert!(storage.load("nis2-assessment-storage").unwrap().is_some());

        let restored = AssessmentStore::with_storage(nis2(), storage).unwrap();
        assert_eq!(restored.snapshot().answers, store.snapshot().answers);
    }

    #[test]
    fn reset_clears_memory_and_storage() {
        let storage: Arc<dyn StateStorage> = Arc::new(MemoryStorage::new());
        let store = QuickCheckStore::with_storage(nis2(), Arc::clone(&storage)).unwrap();
        store
            .set(QuickCheckAnswer::parse("nis2-qc-01", "governance", "yes").unwrap())
            .unwrap();
        store.reset().unwrap();
        assert!(store.snapshot().answers.is_empty());
        assert!(storage.load("nis2-quick-check-storage").unwrap().is_none());
    }

    #[test]
    fn corrupted_blob_fails_to_load() {
        let storage: Arc<dyn StateStorage> = Arc::new(MemoryStorage::new());
        storage
            .save(
                "nis2-assessment-storage",
                r#"{"version":1,"updated_at":"2026-01-05T09:30:00Z","answers":[
                    {"question_id":"nis2-gov-1","category_id":"governance","value":"kinda"}]}"#,
            )
            .unwrap();
        let err = AssessmentStore::with_storage(nis2(), storage).unwrap_err();
        assert!(matches!(err, StateError::Validation(_)));
    }

    #[test]
    fn quick_check_score_is_a_pure_read() {
        let registry = RegulationRegistry::with_builtins().unwrap();
        let config = registry.get(&nis2()).unwrap();
        let store = QuickCheckStore::in_memory(nis2());
        store
            .set_checked(
                config,
                QuickCheckAnswer::parse("nis2-qc-01", "governance", "yes").unwrap(),
            )
            .unwrap();
        let revision = store.snapshot().revision;
        let score = store.score(config).unwrap();
        assert_eq!(score.overall.percentage, 10);
        assert_eq!(store.snapshot().revision, revision);
    }

    #[test]
    fn remove_and_replace() {
        let store = AssessmentStore::in_memory(nis2());
        store.set(answer("a", "c", MaturityLevel::Partial)).unwrap();
        store.remove(&QuestionId::new("a").unwrap()).unwrap();
        assert!(store.snapshot().answers.is_empty());
        let set = vec![answer("b", "c", MaturityLevel::Implemented)].into_iter().collect();
        store.replace(set).unwrap();
        assert_eq!(store.snapshot().answers.len(), 1);
    }
}
