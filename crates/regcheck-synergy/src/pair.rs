//! # Pairwise Synergy
//!
//! Two regulations overlap where the crosswalk maps categories of both onto
//! the same topic. Overlap is reported Jaccard-style,
//! `|shared| / |union|` over topic sets, so pairs with very different
//! category counts stay comparable.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use regcheck_core::{percentage_of, RegulationId, TopicId};
use regcheck_pack::Crosswalk;

/// Topic overlap of two regulations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynergyPair {
    pub first: RegulationId,
    pub second: RegulationId,
    /// Topics covered by both, sorted by id.
    pub shared_topics: Vec<TopicId>,
    /// Number of topics covered by either.
    pub union_count: u32,
    /// `round(100 · shared / union)`, 0 when neither has any topic.
    pub overlap_percent: u8,
}

/// Overlap of `first` and `second`.
pub fn pair_synergy(crosswalk: &Crosswalk, first: &RegulationId, second: &RegulationId) -> SynergyPair {
    let a = crosswalk.topics_for(first);
    let b = crosswalk.topics_for(second);
    let shared: Vec<TopicId> = a.intersection(&b).map(|id| (*id).clone()).collect();
    let union_count = a.union(&b).count();
    let overlap_percent = if union_count == 0 {
        0
    } else {
        percentage_of(shared.len() as f64, union_count as f64)
    };
    SynergyPair {
        first: first.clone(),
        second: second.clone(),
        shared_topics: shared,
        union_count: u32::try_from(union_count).unwrap_or(u32::MAX),
        overlap_percent,
    }
}

/// Overlap of every unordered pair, in input order: `(0,1), (0,2), …, (1,2), …`.
pub fn all_pairs(crosswalk: &Crosswalk, regulations: &[RegulationId]) -> Vec<SynergyPair> {
    let mut pairs = Vec::new();
    for (i, first) in regulations.iter().enumerate() {
        for second in &regulations[i + 1..] {
            pairs.push(pair_synergy(crosswalk, first, second));
        }
    }
    pairs
}

/// Other regulations in `started` sharing any of `topics`, in input order.
pub(crate) fn regulations_sharing<'a>(
    crosswalk: &Crosswalk,
    topics: &BTreeSet<&TopicId>,
    own: &RegulationId,
    started: &'a [RegulationId],
) -> Vec<&'a RegulationId> {
    started
        .iter()
        .filter(|other| *other != own)
        .filter(|other| {
            topics.iter().any(|topic| {
                crosswalk
                    .topic(topic)
                    .is_some_and(|t| t.covers_regulation(other))
            })
        })
        .collect()
}
