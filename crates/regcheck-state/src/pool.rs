//! # Store Pool
//!
//! Hands out the answer stores of every regulation. At most one store of
//! each kind exists per regulation id: the first request creates it from
//! storage, later requests receive the same `Arc`.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use regcheck_core::RegulationId;

use crate::error::StateError;
use crate::key::{parse_storage_key, StoreKind};
use crate::storage::{MemoryStorage, StateStorage};
use crate::store::{AnswerStore, AssessmentStore, QuickCheckStore, StoreValue};

/// Get-or-create map from regulation id to a shared value.
#[derive(Debug)]
pub struct KeyedPool<T> {
    entries: RwLock<HashMap<RegulationId, Arc<T>>>,
}

impl<T> Default for KeyedPool<T> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> KeyedPool<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &RegulationId) -> Option<Arc<T>> {
        self.entries.read().get(key).cloned()
    }

    /// Return the existing entry or insert the one `make` produces.
    ///
    /// `make` runs under the write lock, so concurrent callers for the
    /// same key never create two values.
    pub fn get_or_try_insert_with<E>(
        &self,
        key: &RegulationId,
        make: impl FnOnce() -> Result<T, E>,
    ) -> Result<Arc<T>, E> {
        if let Some(existing) = self.get(key) {
            return Ok(existing);
        }
        let mut entries = self.entries.write();
        if let Some(existing) = entries.get(key) {
            return Ok(Arc::clone(existing));
        }
        let value = Arc::new(make()?);
        entries.insert(key.clone(), Arc::clone(&value));
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// All answer stores of one session, sharing a storage backend.
pub struct StorePool {
    storage: Arc<dyn StateStorage>,
    assessments: KeyedPool<AssessmentStore>,
    quick_checks: KeyedPool<QuickCheckStore>,
}

impl fmt::Debug for StorePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorePool")
            .field("assessments", &self.assessments.len())
            .field("quick_checks", &self.quick_checks.len())
            .finish_non_exhaustive()
    }
}

impl Default for StorePool {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl StorePool {
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        Self {
            storage,
            assessments: KeyedPool::new(),
            quick_checks: KeyedPool::new(),
        }
    }

    /// A pool whose stores vanish with the process.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    pub fn storage(&self) -> &Arc<dyn StateStorage> {
        &self.storage
    }

    fn open<V: StoreValue>(
        &self,
        pool: &KeyedPool<AnswerStore<V>>,
        regulation: &RegulationId,
    ) -> Result<Arc<AnswerStore<V>>, StateError> {
        pool.get_or_try_insert_with(regulation, || {
            tracing::debug!(regulation = %regulation, kind = %V::KIND, "opening answer store");
            AnswerStore::with_storage(regulation.clone(), Arc::clone(&self.storage))
        })
    }

    /// The assessment store of `regulation`, created on first use.
    pub fn assessment(&self, regulation: &RegulationId) -> Result<Arc<AssessmentStore>, StateError> {
        self.open(&self.assessments, regulation)
    }

    /// The quick-check store of `regulation`, created on first use.
    pub fn quick_check(&self, regulation: &RegulationId) -> Result<Arc<QuickCheckStore>, StateError> {
        self.open(&self.quick_checks, regulation)
    }

    /// Regulations with a persisted blob of `kind`, sorted by id.
    ///
    /// Keys that were not written by a store are ignored.
    pub fn persisted_regulations(&self, kind: StoreKind) -> Result<Vec<RegulationId>, StateError> {
        let ids: BTreeSet<RegulationId> = self
            .storage
            .keys()?
            .iter()
            .filter_map(|key| parse_storage_key(key))
            .filter(|(_, stored)| *stored == kind)
            .map(|(regulation, _)| regulation)
            .collect();
        Ok(ids.into_iter().collect())
    }

    /// Reset both stores of `regulation`.
    pub fn reset(&self, regulation: &RegulationId) -> Result<(), StateError> {
        self.assessment(regulation)?.reset()?;
        self.quick_check(regulation)?.reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DirectoryStorage;
    use regcheck_core::MaturityLevel;
    use regcheck_scoring::{Answer, QuickCheckAnswer};

    fn reg(s: &str) -> RegulationId {
        RegulationId::new(s).unwrap()
    }

    #[test]
    fn same_store_for_same_regulation() {
        let pool = StorePool::in_memory();
        let a = pool.assessment(&reg("nis2")).unwrap();
        let b = pool.assessment(&reg("nis2")).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        let c = pool.assessment(&reg("gdpr")).unwrap();
        assert!(!Arc::ptr_eq(&a, &c));
    }

    #[test]
    fn concurrent_get_or_create_yields_one_store() {
        let pool = Arc::new(StorePool::in_memory());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let pool = Arc::clone(&pool);
                std::thread::spawn(move || pool.quick_check(&reg("dora")).unwrap())
            })
            .collect();
        let stores: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(stores.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }

    #[test]
    fn failed_creation_is_not_cached() {
        let pool: KeyedPool<u32> = KeyedPool::new();
        let err: Result<_, &str> = pool.get_or_try_insert_with(&reg("x"), || Err("boom"));
        assert!(err.is_err());
        assert!(pool.is_empty());
        let ok: Result<_, &str> = pool.get_or_try_insert_with(&reg("x"), || Ok(7));
        assert_eq!(*ok.unwrap(), 7);
    }

    #[test]
    fn persisted_regulations_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let storage: Arc<dyn StateStorage> = Arc::new(DirectoryStorage::new(dir.path()));
        storage.save("unrelated", "{}").unwrap();
        let pool = StorePool::new(Arc::clone(&storage));
        for id in ["nis2", "gdpr"] {
            pool.assessment(&reg(id))
                .unwrap()
                .set(Answer::parse("q", "c", "implemented").unwrap())
                .unwrap();
        }
        assert_eq!(
            pool.persisted_regulations(StoreKind::Assessment).unwrap(),
            vec![reg("gdpr"), reg("nis2")]
        );

        let reopened = StorePool::new(storage);
        let store = reopened.assessment(&reg("nis2")).unwrap();
        let snapshot = store.snapshot();
        let answer = snapshot.answers.iter().next().unwrap();
        assert_eq!(answer.value, MaturityLevel::Implemented);
    }

    #[test]
    fn reset_clears_both_stores() {
        let pool = StorePool::in_memory();
        let id = reg("nis2");
        pool.assessment(&id)
            .unwrap()
            .set(Answer::parse("q", "c", "partial").unwrap())
            .unwrap();
        pool.reset(&id).unwrap();
        assert!(pool.assessment(&id).unwrap().snapshot().answers.is_empty());
        assert!(pool.persisted_regulations(StoreKind::Assessment).unwrap().is_empty());
    }

    #[test]
    fn persisted_regulations_filter_by_store_kind() {
        let pool = StorePool::in_memory();
        pool.assessment(&reg("nis2"))
            .unwrap()
            .set(Answer::parse("q", "c", "partial").unwrap())
            .unwrap();
        pool.quick_check(&reg("gdpr"))
            .unwrap()
            .set(QuickCheckAnswer::parse("qc", "c", "yes").unwrap())
            .unwrap();
        assert_eq!(pool.persisted_regulations(StoreKind::Assessment).unwrap(), vec![reg("nis2")]);
        assert_eq!(pool.persisted_regulations(StoreKind::QuickCheck).unwrap(), vec![reg("gdpr")]);
    }
}
