//! # Crosswalk Topic Tables
//!
//! Static mapping of requirement topics to the `(regulation, category)`
//! pairs that address them. Two regulations share a topic when both have
//! at least one category listed under it; the synergy aggregator derives
//! its overlap figures from these tables and nothing else.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use regcheck_core::{CategoryId, Locale, RegulationId, TopicId};

use crate::error::{PackError, PackResult};
use crate::i18n::Translations;
use crate::registry::RegulationRegistry;

/// One `(regulation, category)` pair listed under a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrosswalkMember {
    pub regulation: RegulationId,
    pub category: CategoryId,
}

/// A requirement topic shared across regulations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    /// Translation key of the topic name.
    pub name_key: String,
    pub members: Vec<CrosswalkMember>,
}

impl Topic {
    /// Whether any category of `regulation` is listed under this topic.
    pub fn covers_regulation(&self, regulation: &RegulationId) -> bool {
        self.members.iter().any(|m| &m.regulation == regulation)
    }

    /// Whether this exact category is listed under this topic.
    pub fn covers_category(&self, regulation: &RegulationId, category: &CategoryId) -> bool {
        self.members
            .iter()
            .any(|m| &m.regulation == regulation && &m.category == category)
    }
}

/// The full crosswalk: topics plus their translations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Crosswalk {
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub translations: Translations,
}

static BUILTIN_CROSSWALK: &str = include_str!("../packs/crosswalk.yaml");

impl Crosswalk {
    /// The crosswalk shipped with the built-in packs.
    pub fn builtin() -> PackResult<Self> {
        Self::from_yaml_str("crosswalk", BUILTIN_CROSSWALK)
    }

    /// Parse a crosswalk document. Duplicate topic ids are rejected.
    pub fn from_yaml_str(name: &str, yaml: &str) -> PackResult<Self> {
        let crosswalk: Self =
            serde_yaml::from_str(yaml).map_err(|source| PackError::YamlParseStr {
                name: name.to_string(),
                source,
            })?;
        crosswalk.check_unique_topics()?;
        Ok(crosswalk)
    }

    fn check_unique_topics(&self) -> PackResult<()> {
        let mut seen = BTreeSet::new();
        for topic in &self.topics {
            if !seen.insert(&topic.id) {
                return Err(PackError::InvalidCrosswalk(format!(
                    "duplicate topic {}",
                    topic.id
                )));
            }
        }
        Ok(())
    }

    /// Check every member against the registry.
    ///
    /// Members naming an unregistered regulation are tolerated (the
    /// crosswalk may cover packs a deployment does not load). A member
    /// naming a registered regulation must name one of its categories.
    pub fn validate_against(&self, registry: &RegulationRegistry) -> PackResult<()> {
        for topic in &self.topics {
            for member in &topic.members {
                let Some(config) = registry.get(&member.regulation) else {
                    tracing::debug!(
                        topic = %topic.id,
                        regulation = %member.regulation,
                        "crosswalk member for unregistered regulation ignored"
                    );
                    continue;
                };
                if config.category(&member.category).is_none() {
                    return Err(PackError::InvalidCrosswalk(format!(
                        "topic {} references unknown category {}/{}",
                        topic.id, member.regulation, member.category
                    )));
                }
            }
        }
        Ok(())
    }

    /// Look up a topic by id.
    pub fn topic(&self, id: &TopicId) -> Option<&Topic> {
        self.topics.iter().find(|t| &t.id == id)
    }

    /// Topics touching any category of `regulation`, sorted by id.
    pub fn topics_for(&self, regulation: &RegulationId) -> BTreeSet<&TopicId> {
        self.topics
            .iter()
            .filter(|t| t.covers_regulation(regulation))
            .map(|t| &t.id)
            .collect()
    }

    /// Topics listing this exact category, sorted by id.
    pub fn topics_for_category(
        &self,
        regulation: &RegulationId,
        category: &CategoryId,
    ) -> BTreeSet<&TopicId> {
        self.topics
            .iter()
            .filter(|t| t.covers_category(regulation, category))
            .map(|t| &t.id)
            .collect()
    }

    /// Display name of a topic, falling back to its id.
    pub fn topic_name<'a>(&'a self, locale: Locale, id: &'a TopicId) -> &'a str {
        match self.topic(id) {
            Some(topic) => self.translations.label(locale, &topic.name_key),
            None => id.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::fixtures::sample_config;

    fn reg(s: &str) -> RegulationId {
        RegulationId::new(s).unwrap()
    }

    fn cat(s: &str) -> CategoryId {
        CategoryId::new(s).unwrap()
    }

    #[test]
    fn builtin_crosswalk_matches_builtin_packs() {
        let registry = RegulationRegistry::with_builtins().unwrap();
        Crosswalk::builtin().unwrap().validate_against(&registry).unwrap();
    }

    #[test]
    fn every_builtin_regulation_has_topics() {
        let crosswalk = Crosswalk::builtin().unwrap();
        for id in crate::builtin::BUILTIN_IDS {
            assert!(!crosswalk.topics_for(&reg(id)).is_empty(), "{id}");
        }
    }

    #[test]
    fn din_spec_and_nis2_share_core_topics() {
        let crosswalk = Crosswalk::builtin().unwrap();
        let nis2 = crosswalk.topics_for(&reg("nis2"));
        let din = crosswalk.topics_for(&reg("din-spec-27076"));
        let shared: Vec<_> = nis2.intersection(&din).map(|t| t.as_str()).collect();
        assert!(shared.contains(&"governance"));
        assert!(shared.contains(&"vulnerability-management"));
        assert!(!shared.contains(&"malware-protection"));
    }

    #[test]
    fn topics_for_category_is_exact() {
        let crosswalk = Crosswalk::builtin().unwrap();
        let topics = crosswalk.topics_for_category(&reg("din-spec-27076"), &cat("data-backup"));
        let ids: Vec<_> = topics.iter().map(|t| t.as_str()).collect();
        assert_eq!(ids, vec!["business-continuity"]);
    }

    #[test]
    fn unknown_regulation_has_no_topics() {
        let crosswalk = Crosswalk::builtin().unwrap();
        assert!(crosswalk.topics_for(&reg("unknown")).is_empty());
    }

    #[test]
    fn dangling_category_rejected() {
        let mut registry = RegulationRegistry::new();
        registry.register(sample_config()).unwrap();
        let yaml = r#"
topics:
  - id: t1
    name_key: t1
    members:
      - { regulation: sample, category: nope }
"#;
        let crosswalk = Crosswalk::from_yaml_str("test", yaml).unwrap();
        let err = crosswalk.validate_against(&registry).unwrap_err();
        assert!(matches!(err, PackError::InvalidCrosswalk(_)));
    }

    #[test]
    fn unregistered_regulation_tolerated() {
        let registry = RegulationRegistry::new();
        Crosswalk::builtin().unwrap().validate_against(&registry).unwrap();
    }

    #[test]
    fn duplicate_topic_rejected() {
        let yaml = r#"
topics:
  - { id: t1, name_key: a, members: [] }
  - { id: t1, name_key: b, members: [] }
"#;
        assert!(matches!(
            Crosswalk::from_yaml_str("dup", yaml),
            Err(PackError::InvalidCrosswalk(_))
        ));
    }

    #[test]
    fn topic_names_localized() {
        let crosswalk = Crosswalk::builtin().unwrap();
        let id = TopicId::new("awareness").unwrap();
        assert_eq!(crosswalk.topic_name(Locale::De, &id), "Sensibilisierung und Schulung");
        let missing = TopicId::new("nothing").unwrap();
        assert_eq!(crosswalk.topic_name(Locale::En, &missing), "nothing");
    }
}
