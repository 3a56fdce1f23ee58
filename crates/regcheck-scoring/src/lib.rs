//! # regcheck-scoring — Maturity Scoring
//!
//! Pure scoring functions over a [`RegulationConfig`](regcheck_pack::RegulationConfig)
//! and an answer set.
//!
//! - **Answers** (`answer.rs`): typed responses and upsert-by-question sets.
//! - **Maturity** (`maturity.rs`): category scores, the count-weighted
//!   overall score and the 40/70 traffic light.
//! - **Quick check** (`quick.rs`): the ten-question yes/partial/no variant.
//! - **Recommendations** (`recommend.rs`): priority derivation from
//!   category ratings.
//! - **Scorer** (`scorer.rs`): lookup by regulation id against a borrowed
//!   registry.
//!
//! Nothing here performs I/O or holds state between calls.

pub mod answer;
pub mod maturity;
pub mod quick;
pub mod recommend;
pub mod scorer;

pub use answer::{
    Answer, AnswerSet, QuickCheckAnswer, QuickCheckSet, RawResponse, Response, ResponseSet,
    ResponseValue,
};
pub use maturity::{score_assessment, validate_answers, AssessmentResult, CategoryScore, OverallScore};
pub use quick::{score_quick_check, validate_quick_check, QuickCheckScore};
pub use recommend::{prioritize, PrioritizedRecommendation};
pub use scorer::{Scorer, ScoringError};
