//! # regcheck-synergy — Cross-Regulation Aggregator
//!
//! Works across the regulations a user has started.
//!
//! - [`pair_synergy`] / [`all_pairs`]: Jaccard overlap of the crosswalk
//!   topics two regulations touch.
//! - [`build_roadmap`]: phases recommendations by priority, then effort,
//!   keeping input order within a phase.
//! - [`Aggregator`]: one call producing the [`MultiRegulationOverview`].

pub mod aggregate;
pub mod error;
pub mod pair;
pub mod roadmap;

pub use aggregate::{Aggregator, MultiRegEntry, MultiRegulationOverview};
pub use error::SynergyError;
pub use pair::{all_pairs, pair_synergy, SynergyPair};
pub use roadmap::{build_roadmap, ConsolidatedRoadmapItem, RoadmapPhase};
