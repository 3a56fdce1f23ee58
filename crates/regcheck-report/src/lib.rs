//! # regcheck-report — Report Assembly
//!
//! Produces the read-only result objects consumed by PDF rendering:
//!
//! - [`AssessmentReport`] via [`ReportBuilder`]: one regulation, localized,
//!   with the sections selected in [`ReportSections`].
//! - [`MultiRegulationReport`]: the cross-regulation overview.
//!
//! Every report carries a SHA-256 [`digest`](AssessmentReport::digest) over
//! its canonical JSON without the generation timestamp. Identical answers
//! and settings give identical digests.

pub mod assessment;
pub mod digest;
pub mod error;
pub mod multi;
pub mod sections;

pub use assessment::{
    format_range, AssessmentReport, CategoryRow, ReportBuilder, ReportRecommendation,
};
pub use digest::{body_digest, VOLATILE_FIELDS};
pub use error::ReportError;
pub use multi::{MultiRegulationReport, RegulationRow, RoadmapRow, SynergyRow};
pub use sections::ReportSections;
