//! # regcheck-pack — Regulation Packs
//!
//! Static, per-regulation configuration and the registry holding it.
//!
//! - **Config** (`config.rs`): [`RegulationConfig`] with categories,
//!   questions, recommendations, the quick-check subset, an optional
//!   cost-model override and translations. Loaded from YAML.
//! - **Registry** (`registry.rs`): one config per regulation id;
//!   re-registration is an error, lookups of unknown ids return `None`.
//! - **Built-ins** (`builtin.rs`): NIS2, GDPR, DORA, TISAX, CRA,
//!   BSI IT-Grundschutz and DIN SPEC 27076, embedded in the binary.
//! - **Crosswalk** (`crosswalk.rs`): topics shared across regulations,
//!   input to the synergy aggregator.
//! - **Translations** (`i18n.rs`): `Option`-returning lookups with an
//!   explicit fallback chain, plus the glossary catalog.

pub mod builtin;
pub mod config;
pub mod crosswalk;
pub mod error;
pub mod i18n;
pub mod registry;

pub use builtin::{builtin_configs, BUILTIN_IDS};
pub use config::{
    Category, CostModelOverride, DayRange, EffortDays, Question, QuickCheckQuestion,
    Recommendation, RegulationConfig, QUICK_CHECK_LENGTH,
};
pub use crosswalk::{Crosswalk, CrosswalkMember, Topic};
pub use error::{PackError, PackResult};
pub use i18n::{glossary, glossary_term, Translations};
pub use registry::RegulationRegistry;
