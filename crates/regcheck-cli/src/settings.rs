//! # Settings
//!
//! Optional YAML settings file, by default `regcheck.yaml` in the working
//! directory:
//!
//! ```yaml
//! locale: de
//! company_size: 250
//! state_dir: .regcheck
//! packs:
//!   - packs/iso-27001.yaml
//!   - packs/internal-policy.json
//! report:
//!   sections: { costs: true, roadmap: false }
//!   hidden_recommendations: [nis2-rec-crypto-policy]
//! ```
//!
//! Relative paths are resolved against the directory of the settings file.
//! Command-line flags override file values.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use regcheck_core::{Locale, RecommendationId};
use regcheck_report::ReportSections;

/// File name looked up in the working directory when `--config` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = "regcheck.yaml";

/// Default directory for persisted answers.
pub const DEFAULT_STATE_DIR: &str = ".regcheck";

/// Section toggles as written in the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionToggles {
    pub categories: bool,
    pub recommendations: bool,
    pub costs: bool,
    pub roadmap: bool,
    pub quick_check: bool,
}

impl Default for SectionToggles {
    fn default() -> Self {
        Self {
            categories: true,
            recommendations: true,
            costs: true,
            roadmap: true,
            quick_check: true,
        }
    }
}

/// The `report:` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub sections: SectionToggles,
    pub hidden_recommendations: Vec<RecommendationId>,
}

impl ReportSettings {
    pub fn to_sections(&self) -> ReportSections {
        let mut sections = ReportSections {
            categories: self.sections.categories,
            recommendations: self.sections.recommendations,
            costs: self.sections.costs,
            roadmap: self.sections.roadmap,
            quick_check: self.sections.quick_check,
            ..ReportSections::default()
        };
        for id in &self.hidden_recommendations {
            sections.hide(id.clone());
        }
        sections
    }
}

/// Effective settings of one invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub locale: Locale,
    /// Employees of the assessed company.
    pub company_size: i64,
    pub state_dir: PathBuf,
    /// Extra regulation packs registered after the built-ins.
    pub packs: Vec<PathBuf>,
    pub report: ReportSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            company_size: 100,
            state_dir: PathBuf::from(DEFAULT_STATE_DIR),
            packs: Vec::new(),
            report: ReportSettings::default(),
        }
    }
}

/// Command-line values that take precedence over the settings file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub locale: Option<Locale>,
    pub company_size: Option<i64>,
    pub state_dir: Option<PathBuf>,
}

impl Settings {
    /// Parse a settings file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings: {}", path.display()))?;
        let mut settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse settings: {}", path.display()))?;
        if let Some(base) = path.parent() {
            settings.resolve_relative_to(base);
        }
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Settings for this invocation.
    ///
    /// An explicit `config` path must exist. Without one,
    /// [`DEFAULT_SETTINGS_FILE`] in `cwd` is used if present, otherwise the
    /// defaults.
    pub fn load(config: Option<&Path>, cwd: &Path, overrides: &Overrides) -> Result<Self> {
        let mut settings = match config {
            Some(path) => Self::from_file(path)?,
            None => {
                let candidate = cwd.join(DEFAULT_SETTINGS_FILE);
                if candidate.is_file() {
                    Self::from_file(&candidate)?
                } else {
                    Self::default()
                }
            }
        };
        settings.apply(overrides);
        Ok(settings)
    }

    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(locale) = overrides.locale {
            self.locale = locale;
        }
        if let Some(size) = overrides.company_size {
            self.company_size = size;
        }
        if let Some(dir) = &overrides.state_dir {
            self.state_dir = dir.clone();
        }
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        let resolve = |p: &Path| {
            if p.is_absolute() || base.as_os_str().is_empty() {
                p.to_path_buf()
            } else {
                base.join(p)
            }
        };
        self.state_dir = resolve(&self.state_dir);
        self.packs = self.packs.iter().map(|p| resolve(p)).collect();
    }
}
