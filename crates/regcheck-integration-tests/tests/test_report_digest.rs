//! # Report Digests
//!
//! Report digests cover the content but not the generation time, and the
//! section toggles shape what is rendered and what is costed.

use regcheck_core::{
    AssessmentScope, CompanySize, Locale, MaturityLevel, RecommendationId, RegulationId, Timestamp,
};
use regcheck_pack::{Crosswalk, RegulationRegistry};
use regcheck_report::{body_digest, MultiRegulationReport, ReportBuilder, ReportSections};
use regcheck_scoring::{score_assessment, Answer, AnswerSet, AssessmentResult};
use regcheck_synergy::Aggregator;

fn ts(s: &str) -> Timestamp {
    Timestamp::parse(s).unwrap()
}

fn half_done(registry: &RegulationRegistry, id: &str) -> AssessmentResult {
    let config = registry.get(&RegulationId::new(id).unwrap()).unwrap();
    let answers: AnswerSet = config
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let level = if i % 2 == 0 {
                MaturityLevel::Implemented
            } else {
                MaturityLevel::NotImplemented
            };
            Answer::new(q.id.clone(), q.category_id.clone(), level)
        })
        .collect();
    score_assessment(config, &answers, AssessmentScope::Full).unwrap()
}

#[test]
fn digest_ignores_generation_time() {
    let registry = RegulationRegistry::with_builtins().unwrap();
    let crosswalk = Crosswalk::builtin().unwrap();
    let nis2 = registry.get(&RegulationId::new("nis2").unwrap()).unwrap();
    let result = half_done(&registry, "nis2");
    let builder = ReportBuilder::new(nis2, &crosswalk).locale(Locale::En);

    let first = builder.build_at(&result, None, ts("2026-01-05T09:30:00Z")).unwrap();
    let second = builder.build_at(&result, None, ts("2026-03-01T12:00:00Z")).unwrap();
    assert_ne!(first.generated_at, second.generated_at);
    assert_eq!(first.digest, second.digest);
    assert!(first.verify_digest().unwrap());
    assert_eq!(first.digest.to_string().len(), "sha256:".len() + 64);
}

#[test]
fn digest_tracks_content() {
    let registry = RegulationRegistry::with_builtins().unwrap();
    let crosswalk = Crosswalk::builtin().unwrap();
    let nis2 = registry.get(&RegulationId::new("nis2").unwrap()).unwrap();
    let result = half_done(&registry, "nis2");
    let at = ts("2026-01-05T09:30:00Z");

    let small = ReportBuilder::new(nis2, &crosswalk)
        .company_size(CompanySize::new(20).unwrap())
        .build_at(&result, None, at)
        .unwrap();
    let large = ReportBuilder::new(nis2, &crosswalk)
        .company_size(CompanySize::new(2_000).unwrap())
        .build_at(&result, None, at)
        .unwrap();
    assert_ne!(small.digest, large.digest);

    let mut tampered = small.clone();
    tampered.overall.percentage = 99;
    assert!(!tampered.verify_digest().unwrap());
}

#[test]
fn hidden_recommendation_is_not_rendered_or_costed() {
    let registry = RegulationRegistry::with_builtins().unwrap();
    let crosswalk = Crosswalk::builtin().unwrap();
    let nis2 = registry.get(&RegulationId::new("nis2").unwrap()).unwrap();
    let empty = score_assessment(nis2, &AnswerSet::new(), AssessmentScope::Full).unwrap();
    let hidden = RecommendationId::new("nis2-rec-gov-mandate").unwrap();

    let mut sections = ReportSections::default();
    let full = ReportBuilder::new(nis2, &crosswalk)
        .sections(sections.clone())
        .build(&empty, None)
        .unwrap();
    sections.hide(hidden.clone());
    let trimmed = ReportBuilder::new(nis2, &crosswalk)
        .sections(sections)
        .build(&empty, None)
        .unwrap();

    assert!(full.recommendations.iter().any(|r| r.id == hidden));
    assert!(trimmed.recommendations.iter().all(|r| r.id != hidden));
    let full_total = full.cost_summary.unwrap().total;
    let trimmed_total = trimmed.cost_summary.unwrap().total;
    assert_eq!(full_total.min - trimmed_total.min, 1_800);
    assert_eq!(full_total.max - trimmed_total.max, 8_100);
}

#[test]
fn multi_report_from_overview_is_reproducible() {
    let registry = RegulationRegistry::with_builtins().unwrap();
    let crosswalk = Crosswalk::builtin().unwrap();
    let results = vec![half_done(&registry, "gdpr"), half_done(&registry, "dora")];
    let overview = Aggregator::new(&registry, &crosswalk)
        .aggregate(&results, false)
        .unwrap();

    let a = MultiRegulationReport::from_overview(
        &registry,
        &crosswalk,
        &overview,
        Locale::De,
        ts("2026-01-05T09:30:00Z"),
    )
    .unwrap();
    let b = MultiRegulationReport::from_overview(
        &registry,
        &crosswalk,
        &overview,
        Locale::De,
        ts("2026-02-05T09:30:00Z"),
    )
    .unwrap();
    assert_eq!(a.digest, b.digest);
    assert_eq!(a.synergies[0].pair.overlap_percent, 31);

    let english = MultiRegulationReport::from_overview(
        &registry,
        &crosswalk,
        &overview,
        Locale::En,
        ts("2026-01-05T09:30:00Z"),
    )
    .unwrap();
    assert_ne!(a.digest, english.digest);

    // The digest equals the hash of the document minus its volatile fields.
    assert_eq!(body_digest(&a).unwrap(), a.digest);
}

#[test]
fn report_json_roundtrips_with_digest() {
    let registry = RegulationRegistry::with_builtins().unwrap();
    let crosswalk = Crosswalk::builtin().unwrap();
    let dora = registry.get(&RegulationId::new("dora").unwrap()).unwrap();
    let report = ReportBuilder::new(dora, &crosswalk)
        .include_green(true)
        .build(&half_done(&registry, "dora"), None)
        .unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let parsed: regcheck_report::AssessmentReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
    assert!(parsed.verify_digest().unwrap());
}
