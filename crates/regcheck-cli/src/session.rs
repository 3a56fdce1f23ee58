//! # Session
//!
//! Everything a subcommand needs: the effective settings, the registry
//! with built-in and configured packs, the crosswalk, and the store pool
//! backed by the state directory.

use std::sync::Arc;

use anyhow::{bail, Context, Result};

use regcheck_core::{AssessmentScope, CompanySize, RegulationId};
use regcheck_pack::{Crosswalk, RegulationConfig, RegulationRegistry};
use regcheck_scoring::{AssessmentResult, QuickCheckScore};
use regcheck_state::{DirectoryStorage, StateStorage, StoreKind, StorePool};

use crate::settings::Settings;

/// Loaded state shared by all subcommands.
#[derive(Debug)]
pub struct Session {
    pub settings: Settings,
    pub registry: RegulationRegistry,
    pub crosswalk: Crosswalk,
    pub pool: StorePool,
}

impl Session {
    /// Load packs and open the state directory.
    pub fn open(settings: Settings) -> Result<Self> {
        let mut registry =
            RegulationRegistry::with_builtins().context("failed to load built-in regulation packs")?;
        for path in &settings.packs {
            let config = RegulationConfig::from_file(path)
                .with_context(|| format!("failed to load pack: {}", path.display()))?;
            registry
                .register(config)
                .with_context(|| format!("failed to register pack: {}", path.display()))?;
        }

        let crosswalk = Crosswalk::builtin().context("failed to load built-in crosswalk")?;
        crosswalk
            .validate_against(&registry)
            .context("crosswalk does not match the registered packs")?;

        let storage: Arc<dyn StateStorage> = Arc::new(DirectoryStorage::new(&settings.state_dir));
        tracing::debug!(
            state_dir = %settings.state_dir.display(),
            regulations = registry.len(),
            "opened session"
        );
        Ok(Self {
            settings,
            registry,
            crosswalk,
            pool: StorePool::new(storage),
        })
    }

    /// The config of a registered regulation.
    pub fn config(&self, id: &str) -> Result<&RegulationConfig> {
        let regulation = RegulationId::new(id)?;
        match self.registry.get(&regulation) {
            Some(config) => Ok(config),
            None => {
                let known: Vec<&str> = self.registry.ids().iter().map(RegulationId::as_str).collect();
                bail!("unknown regulation '{id}'. Available: {}", known.join(", "))
            }
        }
    }

    pub fn company_size(&self) -> Result<CompanySize> {
        CompanySize::new(self.settings.company_size).context("invalid company size")
    }

    /// Score the persisted assessment answers.
    pub fn assess(&self, config: &RegulationConfig, scope: AssessmentScope) -> Result<AssessmentResult> {
        let store = self.pool.assessment(&config.id)?;
        store
            .score(config, scope)
            .with_context(|| format!("stored answers for {} are invalid", config.id))
    }

    /// Score the persisted quick check, `None` if it has no answers.
    pub fn quick_check(&self, config: &RegulationConfig) -> Result<Option<QuickCheckScore>> {
        let store = self.pool.quick_check(&config.id)?;
        if store.snapshot().answers.is_empty() {
            return Ok(None);
        }
        let score = store
            .score(config)
            .with_context(|| format!("stored quick-check answers for {} are invalid", config.id))?;
        Ok(Some(score))
    }

    /// Registered regulations with persisted assessment answers, in
    /// registration order.
    pub fn started_regulations(&self) -> Result<Vec<&RegulationConfig>> {
        let persisted = self.pool.persisted_regulations(StoreKind::Assessment)?;
        Ok(self
            .registry
            .iter()
            .filter(|config| persisted.contains(&config.id))
            .collect())
    }
}
