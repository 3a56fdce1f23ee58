//! # regcheck-state — Answer Stores and Persistence
//!
//! Holds the mutable part of regcheck: the answers a user has given.
//!
//! ## Architecture
//!
//! - [`AnswerStore`] keeps one regulation's answers as an immutable
//!   snapshot behind a `parking_lot::RwLock`. Mutations replace the whole
//!   snapshot atomically; scoring reads a snapshot and never blocks writers
//!   for longer than an `Arc` clone.
//! - [`StorePool`] guarantees at most one store per regulation and kind.
//! - [`StateStorage`] is the persistence seam. [`DirectoryStorage`] writes
//!   one JSON blob per key; [`MemoryStorage`] backs tests.
//! - Blobs follow the versioned [`PersistedState`] format under the keys
//!   produced by [`storage_key`].

pub mod error;
pub mod key;
pub mod persisted;
pub mod pool;
pub mod storage;
pub mod store;

pub use error::StateError;
pub use key::{parse_storage_key, storage_key, StoreKind};
pub use persisted::{PersistedState, STATE_VERSION};
pub use pool::{KeyedPool, StorePool};
pub use storage::{DirectoryStorage, MemoryStorage, StateStorage};
pub use store::{AnswerStore, AssessmentStore, QuickCheckStore, StoreState, StoreValue};
