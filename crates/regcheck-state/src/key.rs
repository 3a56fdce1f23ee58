//! Storage keys.
//!
//! Every persisted blob lives under `"{regulationId}-{storeName}-storage"`.

use std::fmt;

use serde::{Deserialize, Serialize};

use regcheck_core::RegulationId;

const KEY_SUFFIX: &str = "-storage";

/// Which answer store a blob belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoreKind {
    /// Maturity assessment answers.
    Assessment,
    /// Quick-check answers.
    QuickCheck,
}

impl StoreKind {
    /// Store name as it appears in storage keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Assessment => "assessment",
            Self::QuickCheck => "quick-check",
        }
    }

    pub fn all() -> &'static [StoreKind] {
        &[Self::Assessment, Self::QuickCheck]
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage key of one regulation's store.
pub fn storage_key(regulation: &RegulationId, kind: StoreKind) -> String {
    format!("{regulation}-{}{KEY_SUFFIX}", kind.as_str())
}

/// Split a storage key back into regulation id and store kind.
///
/// Returns `None` for keys not produced by [`storage_key`].
pub fn parse_storage_key(key: &str) -> Option<(RegulationId, StoreKind)> {
    let stem = key.strip_suffix(KEY_SUFFIX)?;
    StoreKind::all().iter().find_map(|kind| {
        let regulation = stem.strip_suffix(kind.as_str())?.strip_suffix('-')?;
        RegulationId::new(regulation).ok().map(|id| (id, *kind))
    })
}
