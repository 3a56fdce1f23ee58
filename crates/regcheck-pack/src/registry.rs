//! # Regulation Registry
//!
//! Holds exactly one [`RegulationConfig`] per regulation id. Configs are
//! registered once, before any scoring call, and are immutable afterwards.
//!
//! The registry is an explicit value: build it at start-up, then hand a
//! reference to whoever needs to score. There is no module-global map.
//!
//! ## Lookup policy
//!
//! [`RegulationRegistry::get`] returns `None` for an unknown id and never
//! errors. Whether a missing config is fatal is the caller's decision.

use std::collections::HashMap;
use std::sync::Arc;

use regcheck_core::{RegistryError, RegulationId};

use crate::builtin;
use crate::config::RegulationConfig;
use crate::error::PackResult;

/// Registry of regulation configurations keyed by regulation id.
#[derive(Debug, Clone, Default)]
pub struct RegulationRegistry {
    configs: HashMap<RegulationId, Arc<RegulationConfig>>,
    /// Registration order, used for listing.
    order: Vec<RegulationId>,
}

impl RegulationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-loaded with the built-in regulation packs.
    ///
    /// # Errors
    ///
    /// Fails only if an embedded pack is malformed.
    pub fn with_builtins() -> PackResult<Self> {
        let mut registry = Self::new();
        for config in builtin::builtin_configs()? {
            registry.register(config)?;
        }
        Ok(registry)
    }

    /// Register a configuration.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::DuplicateRegulation`] if the id is already registered.
    /// - [`RegistryError::InvalidConfig`] if the config fails validation.
    pub fn register(&mut self, config: RegulationConfig) -> Result<(), RegistryError> {
        if self.configs.contains_key(&config.id) {
            tracing::warn!(regulation = %config.id, "rejected duplicate regulation registration");
            return Err(RegistryError::DuplicateRegulation(config.id.to_string()));
        }
        if let Err(e) = config.validate() {
            tracing::warn!(regulation = %config.id, error = %e, "rejected invalid regulation config");
            return Err(e);
        }
        tracing::info!(
            regulation = %config.id,
            categories = config.categories.len(),
            questions = config.questions.len(),
            recommendations = config.recommendations.len(),
            "registered regulation"
        );
        self.order.push(config.id.clone());
        self.configs.insert(config.id.clone(), Arc::new(config));
        Ok(())
    }

    /// Look up a configuration. `None` if absent.
    pub fn get(&self, id: &RegulationId) -> Option<&RegulationConfig> {
        self.configs.get(id).map(Arc::as_ref)
    }

    /// Whether a regulation id is registered.
    pub fn contains(&self, id: &RegulationId) -> bool {
        self.configs.contains_key(id)
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> &[RegulationId] {
        &self.order
    }

    /// Registered configs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegulationConfig> {
        self.order
            .iter()
            .filter_map(|id| self.configs.get(id).map(Arc::as_ref))
    }

    /// Number of registered regulations.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
