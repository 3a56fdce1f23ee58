//! # Recommendation Prioritisation
//!
//! Attaches a roadmap priority to each recommendation of a scored
//! regulation. An explicit pack priority wins; otherwise the category's
//! traffic light implies one (red → high, yellow → medium, green → low).

use serde::{Deserialize, Serialize};

use regcheck_core::{Priority, RegulationId, TrafficLight};
use regcheck_pack::{Recommendation, RegulationConfig};

use crate::maturity::AssessmentResult;

/// A recommendation with the rating of its category and its priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrioritizedRecommendation {
    pub regulation_id: RegulationId,
    pub recommendation: Recommendation,
    pub category_light: TrafficLight,
    pub priority: Priority,
}

/// Recommendations for the scored categories of `result`, in the config's
/// declared order.
///
/// Categories excluded from scoring have nothing to remediate and are
/// skipped. Green categories are skipped unless `include_green` is set.
pub fn prioritize(
    config: &RegulationConfig,
    result: &AssessmentResult,
    include_green: bool,
) -> Vec<PrioritizedRecommendation> {
    config
        .recommendations
        .iter()
        .filter_map(|rec| {
            let score = result.category(&rec.category_id)?;
            if score.traffic_light == TrafficLight::Green && !include_green {
                return None;
            }
            Some(PrioritizedRecommendation {
                regulation_id: config.id.clone(),
                recommendation: rec.clone(),
                category_light: score.traffic_light,
                priority: rec
                    .priority
                    .unwrap_or_else(|| score.traffic_light.implied_priority()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::{Answer, AnswerSet};
    use crate::maturity::score_assessment;
    use regcheck_core::{AssessmentScope, CategoryId, MaturityLevel, QuestionId};

    fn config() -> RegulationConfig {
        let mut yaml = String::from(
            r#"
id: rec
name_key: rec.name
categories:
  - { id: weak, name_key: weak }
  - { id: strong, name_key: strong }
  - { id: unused, name_key: unused }
questions:
  - { id: w1, category_id: weak }
  - { id: s1, category_id: strong }
recommendations:
  - { id: r-weak, category_id: weak, effort_level: low, title: t }
  - { id: r-strong, category_id: strong, effort_level: high, title: t }
  - { id: r-pinned, category_id: weak, effort_level: high, title: t, priority: low }
  - { id: r-unused, category_id: unused, effort_level: low, title: t }
quick_check:
"#,
        );
        for i in 1..=10 {
            yaml.push_str(&format!("  - {{ id: qc{i}, category_id: weak }}\n"));
        }
        RegulationConfig::from_yaml_str("rec", &yaml).unwrap()
    }

    fn result() -> AssessmentResult {
        let answers: AnswerSet = vec![Answer::new(
            QuestionId::new("s1").unwrap(),
            CategoryId::new("strong").unwrap(),
            MaturityLevel::Implemented,
        )]
        .into_iter()
        .collect();
        score_assessment(&config(), &answers, AssessmentScope::Full).unwrap()
    }

    #[test]
    fn green_categories_skipped_by_default() {
        let recs = prioritize(&config(), &result(), false);
        let ids: Vec<_> = recs.iter().map(|r| r.recommendation.id.as_str()).collect();
        assert_eq!(ids, vec!["r-weak", "r-pinned"]);
    }

    #[test]
    fn include_green_keeps_them() {
        let recs = prioritize(&config(), &result(), true);
        let strong = recs
            .iter()
            .find(|r| r.recommendation.id.as_str() == "r-strong")
            .unwrap();
        assert_eq!(strong.priority, Priority::Low);
        assert_eq!(strong.category_light, TrafficLight::Green);
    }

    #[test]
    fn priority_derived_from_light_unless_pinned() {
        let recs = prioritize(&config(), &result(), false);
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[1].priority, Priority::Low);
    }

    #[test]
    fn excluded_categories_have_no_recommendations() {
        let recs = prioritize(&config(), &result(), true);
        assert!(recs.iter().all(|r| r.recommendation.id.as_str() != "r-unused"));
    }
}
