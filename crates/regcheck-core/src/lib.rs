//! # regcheck-core — Foundational Types
//!
//! The leaf of the regcheck crate graph. Every other crate depends on
//! `regcheck-core`; it depends on nothing internal.
//!
//! ## Contents
//!
//! - **Identifiers** (`identity.rs`): `RegulationId`, `CategoryId`,
//!   `QuestionId`, `RecommendationId`, `TopicId`. No bare
//!   strings for identifiers.
//! - **Ratings** (`level.rs`): `MaturityLevel`, `QuickCheckValue`, `Tier`,
//!   `AssessmentScope`, `EffortLevel`, `Priority`.
//! - **Traffic light** (`traffic.rs`): fixed 40/70 thresholds and the
//!   scaled integer percentage rounding used by every scorer.
//! - **Company size** (`company.rs`) and **locale** (`locale.rs`).
//! - **Canonical bytes / digests** (`canonical.rs`, `digest.rs`) for
//!   content-addressed reports.
//! - **Errors** (`error.rs`): the structured error hierarchy.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `regcheck-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod company;
pub mod digest;
pub mod error;
pub mod identity;
pub mod level;
pub mod locale;
pub mod temporal;
pub mod traffic;

pub use canonical::CanonicalBytes;
pub use company::CompanySize;
pub use digest::{sha256_digest, ContentDigest};
pub use error::{CanonicalizationError, InvalidInputError, RegistryError, ValidationError};
pub use identity::{CategoryId, QuestionId, RecommendationId, RegulationId, TopicId};
pub use level::{AssessmentScope, EffortLevel, MaturityLevel, Priority, QuickCheckValue, Tier};
pub use locale::Locale;
pub use temporal::Timestamp;
pub use traffic::{percentage_of, TrafficLight, GREEN_THRESHOLD, YELLOW_THRESHOLD};
