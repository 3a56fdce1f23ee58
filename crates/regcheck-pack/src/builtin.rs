//! # Built-in Regulation Packs
//!
//! The regulation packs shipped with regcheck, embedded at compile time.
//! Each pack is a YAML [`RegulationConfig`] under `packs/`.

use crate::config::RegulationConfig;
use crate::error::PackResult;

/// Ids of the built-in packs in registration order.
pub const BUILTIN_IDS: &[&str] = &[
    "nis2",
    "gdpr",
    "dora",
    "tisax",
    "cra",
    "bsi-grundschutz",
    "din-spec-27076",
];

static PACKS: &[(&str, &str)] = &[
    ("nis2", include_str!("../packs/nis2.yaml")),
    ("gdpr", include_str!("../packs/gdpr.yaml")),
    ("dora", include_str!("../packs/dora.yaml")),
    ("tisax", include_str!("../packs/tisax.yaml")),
    ("cra", include_str!("../packs/cra.yaml")),
    ("bsi-grundschutz", include_str!("../packs/bsi-grundschutz.yaml")),
    ("din-spec-27076", include_str!("../packs/din-spec-27076.yaml")),
];

/// Parse every built-in pack.
///
/// # Errors
///
/// Returns the first parse failure. Packs are not validated here; the
/// registry validates on registration.
pub fn builtin_configs() -> PackResult<Vec<RegulationConfig>> {
    PACKS
        .iter()
        .map(|(name, yaml)| RegulationConfig::from_yaml_str(name, yaml))
        .collect()
}
