//! # Scoring Pipeline
//!
//! Answers flow through a persisted answer store into the maturity scorer,
//! and quick-check answers into the quick-check scorer. Uses a custom pack
//! registered next to the built-ins so category sizes are known exactly.

use regcheck_core::{
    AssessmentScope, CategoryId, MaturityLevel, QuestionId, QuickCheckValue, RegulationId,
    TrafficLight, ValidationError,
};
use regcheck_pack::{RegulationConfig, RegulationRegistry};
use regcheck_scoring::{score_assessment, Answer, AnswerSet, QuickCheckAnswer, Scorer};
use regcheck_state::{StateError, StorePool};

/// `two` has 2 questions, `four` has 4 (one advanced), `none` has none.
fn custom_pack() -> RegulationConfig {
    let mut yaml = String::from(
        r#"
id: custom
name_key: custom.name
categories:
  - { id: two, name_key: custom.cat.two }
  - { id: four, name_key: custom.cat.four }
  - { id: none, name_key: custom.cat.none }
questions:
  - { id: t1, category_id: two, tier: core }
  - { id: t2, category_id: two, tier: core }
  - { id: f1, category_id: four, tier: core }
  - { id: f2, category_id: four, tier: core }
  - { id: f3, category_id: four, tier: core }
  - { id: f4, category_id: four, tier: advanced }
recommendations:
  - { id: rec-two, category_id: two, effort_level: low, title: custom.rec.two }
  - { id: rec-four, category_id: four, effort_level: high, title: custom.rec.four }
translations:
  en: { custom.name: Custom Regulation }
quick_check:
"#,
    );
    for i in 1..=10 {
        let category = if i <= 5 { "two" } else { "four" };
        yaml.push_str(&format!("  - {{ id: qc-{i}, category_id: {category} }}\n"));
    }
    RegulationConfig::from_yaml_str("custom", &yaml).unwrap()
}

fn registry() -> RegulationRegistry {
    let mut registry = RegulationRegistry::with_builtins().unwrap();
    registry.register(custom_pack()).unwrap();
    registry
}

fn answer(question: &str, category: &str, level: MaturityLevel) -> Answer {
    Answer::new(
        QuestionId::new(question).unwrap(),
        CategoryId::new(category).unwrap(),
        level,
    )
}

fn custom_id() -> RegulationId {
    RegulationId::new("custom").unwrap()
}

#[test]
fn mixed_four_question_category_is_63_yellow() {
    use MaturityLevel::*;
    let registry = registry();
    let config = registry.get(&custom_id()).unwrap();
    let pool = StorePool::in_memory();
    let store = pool.assessment(&config.id).unwrap();
    for (q, level) in [("f1", Implemented), ("f2", Implemented), ("f3", Partial), ("f4", NotImplemented)] {
        store.set_checked(config, answer(q, "four", level)).unwrap();
    }

    let result = store.score(config, AssessmentScope::Full).unwrap();
    let four = result.category(&CategoryId::new("four").unwrap()).unwrap();
    assert_eq!(four.percentage, 63);
    assert_eq!(four.traffic_light, TrafficLight::Yellow);
    assert_eq!((four.answered_count, four.total_count), (4, 4));
    assert_eq!(result.excluded_categories, vec![CategoryId::new("none").unwrap()]);
}

#[test]
fn upsert_replaces_previous_answer() {
    let registry = registry();
    let config = registry.get(&custom_id()).unwrap();
    let pool = StorePool::in_memory();
    let store = pool.assessment(&config.id).unwrap();
    store
        .set_checked(config, answer("t1", "two", MaturityLevel::NotImplemented))
        .unwrap();
    store
        .set_checked(config, answer("t1", "two", MaturityLevel::Implemented))
        .unwrap();
    let state = store.snapshot();
    assert_eq!(state.answers.len(), 1);
    assert_eq!(state.revision, 2);
    let two = store
        .score(config, AssessmentScope::Full)
        .unwrap()
        .category(&CategoryId::new("two").unwrap())
        .cloned()
        .unwrap();
    assert_eq!(two.percentage, 50);
}

#[test]
fn overall_weights_categories_by_question_count() {
    let registry = registry();
    let config = registry.get(&custom_id()).unwrap();
    let answers: AnswerSet = vec![
        answer("t1", "two", MaturityLevel::Implemented),
        answer("t2", "two", MaturityLevel::Implemented),
        answer("f1", "four", MaturityLevel::NotImplemented),
        answer("f2", "four", MaturityLevel::NotImplemented),
        answer("f3", "four", MaturityLevel::NotImplemented),
        answer("f4", "four", MaturityLevel::NotImplemented),
    ]
    .into_iter()
    .collect();

    let result = score_assessment(config, &answers, AssessmentScope::Full).unwrap();
    // 2 of 6 applicable questions fully implemented; a 50/50 blend would be 50.
    assert_eq!(result.overall.percentage, 33);
    assert_eq!(result.overall.traffic_light, TrafficLight::Red);
    assert_eq!(result.overall.completion_rate, 100);
}

#[test]
fn core_scope_drops_advanced_questions() {
    let registry = registry();
    let config = registry.get(&custom_id()).unwrap();
    let answers: AnswerSet = vec![answer("f4", "four", MaturityLevel::Implemented)]
        .into_iter()
        .collect();

    let full = score_assessment(config, &answers, AssessmentScope::Full).unwrap();
    let core = score_assessment(config, &answers, AssessmentScope::Core).unwrap();
    assert_eq!(full.overall.answered_questions, 1);
    assert_eq!(core.overall.answered_questions, 0);
    assert_eq!(core.overall.total_questions, 5);
    assert_eq!(core.overall.percentage, 0);
}

#[test]
fn not_applicable_leaves_denominator() {
    let registry = registry();
    let config = registry.get(&custom_id()).unwrap();
    let answers: AnswerSet = vec![
        answer("t1", "two", MaturityLevel::Implemented),
        answer("t2", "two", MaturityLevel::NotApplicable),
    ]
    .into_iter()
    .collect();
    let result = score_assessment(config, &answers, AssessmentScope::Full).unwrap();
    let two = result.category(&CategoryId::new("two").unwrap()).unwrap();
    assert_eq!(two.percentage, 100);
    assert_eq!(two.total_count, 1);
    assert_eq!(two.not_applicable_count, 1);
    assert_eq!(two.traffic_light, TrafficLight::Green);
}

#[test]
fn unrecognized_level_fails_fast() {
    let err = Answer::parse("t1", "two", "mostly").unwrap_err();
    assert!(matches!(err, ValidationError::UnknownMaturityLevel(_)));
}

#[test]
fn wrong_category_is_rejected_and_not_stored() {
    let registry = registry();
    let config = registry.get(&custom_id()).unwrap();
    let pool = StorePool::in_memory();
    let store = pool.assessment(&config.id).unwrap();
    let err = store
        .set_checked(config, answer("t1", "four", MaturityLevel::Implemented))
        .unwrap_err();
    assert!(matches!(err, StateError::Validation(ValidationError::CategoryMismatch { .. })));
    assert!(store.snapshot().answers.is_empty());
    assert_eq!(store.snapshot().revision, 0);
}

#[test]
fn empty_quick_check_is_red_and_incomplete() {
    let registry = registry();
    let scorer = Scorer::new(&registry);
    let score = scorer
        .quick_check(&RegulationId::new("nis2").unwrap(), &Default::default())
        .unwrap();
    assert_eq!(score.overall.percentage, 0);
    assert_eq!(score.overall.traffic_light, TrafficLight::Red);
    assert!(!score.completed);
}

#[test]
fn full_quick_check_completes() {
    let registry = registry();
    let config = registry.get(&custom_id()).unwrap();
    let pool = StorePool::in_memory();
    let store = pool.quick_check(&config.id).unwrap();
    for question in &config.quick_check {
        let value = if question.category_id.as_str() == "two" {
            QuickCheckValue::Yes
        } else {
            QuickCheckValue::Partial
        };
        store
            .set_checked(
                config,
                QuickCheckAnswer::new(question.id.clone(), question.category_id.clone(), value),
            )
            .unwrap();
    }
    let score = store.score(config).unwrap();
    // 5 × 1 + 5 × 0.5 = 7.5 of 10.
    assert_eq!(score.overall.percentage, 75);
    assert_eq!(score.overall.traffic_light, TrafficLight::Green);
    assert!(score.completed);
}

#[test]
fn every_builtin_scores_empty_as_red() {
    let registry = RegulationRegistry::with_builtins().unwrap();
    let scorer = Scorer::new(&registry);
    for id in registry.ids() {
        let result = scorer.assess(id, &AnswerSet::new(), AssessmentScope::Full).unwrap();
        assert_eq!(result.overall.percentage, 0, "{id}");
        assert_eq!(result.overall.traffic_light, TrafficLight::Red, "{id}");
        assert!(result.overall.total_questions > 0, "{id}");
    }
}
