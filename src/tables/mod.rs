//! Coefficient tables injected into both engines.
//!
//! Nothing here is ambient module state: a calculator owns an
//! [`EngineConfig`] value, so tests and deployments can substitute
//! alternate tables without touching globals. Lookups never fall back to a
//! default value; a missing entry is a [`EngineError::LookupMiss`].

mod loader;
mod pricing;
mod relevance;
mod roi;

pub use loader::{load_config_from_path, parse_and_validate_config, CONFIG_FILE_NAME};
pub use pricing::{PriceBand, PricingBands};
pub use relevance::{BucketThresholds, CostModel, RelevanceTables};
pub use roi::{ConfidenceRules, RoiTables};

use crate::error::{EngineError, Result};
use crate::relevance::{default_catalog, Service};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub roi: RoiTables,
    pub confidence: ConfidenceRules,
    pub pricing: PricingBands,
    pub relevance: RelevanceTables,
    pub catalog: Vec<Service>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            roi: RoiTables::default(),
            confidence: ConfidenceRules::default(),
            pricing: PricingBands::default(),
            relevance: RelevanceTables::default(),
            catalog: default_catalog(),
        }
    }
}

impl EngineConfig {
    /// Validate every table, failing on the first problem.
    pub fn validate(&self) -> Result<()> {
        self.roi.validate()?;
        self.confidence.validate()?;
        self.pricing.validate()?;
        self.relevance.validate()?;
        validate_catalog(&self.catalog)
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| EngineError::Config(format!("Failed to render config: {e}")))
    }
}

/// Service ids must be unique within a catalog.
pub fn validate_catalog(catalog: &[Service]) -> Result<()> {
    let mut ids = BTreeSet::new();
    match catalog.iter().find(|s| !ids.insert(s.id.as_str())) {
        Some(dup) => Err(invalid_config(
            "catalog",
            format!("service id '{}' appears more than once", dup.id),
        )),
        None => Ok(()),
    }
}

/// Fetch a coefficient, failing loudly when the table has no entry for `key`.
pub(crate) fn lookup<K, V>(table: &'static str, map: &BTreeMap<K, V>, key: K) -> Result<V>
where
    K: Ord + Display,
    V: Copy,
{
    match map.get(&key) {
        Some(value) => {
            tracing::trace!(table, %key, "coefficient lookup");
            Ok(*value)
        }
        None => Err(EngineError::lookup_miss(table, key)),
    }
}

pub(crate) fn invalid_config(section: &str, message: impl Display) -> EngineError {
    EngineError::Config(format!("{section}: {message}"))
}

pub(crate) fn check_complete<K, V>(table: &str, map: &BTreeMap<K, V>, keys: &[K]) -> Result<()>
where
    K: Ord + Display,
{
    let missing: Vec<String> = keys
        .iter()
        .filter(|key| !map.contains_key(key))
        .map(ToString::to_string)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(invalid_config(
            table,
            format!("missing entries for {}", missing.join(", ")),
        ))
    }
}

pub(crate) fn check_non_negative(
    table: &str,
    values: impl IntoIterator<Item = f64>,
) -> Result<()> {
    if values.into_iter().all(|v| v.is_finite() && v >= 0.0) {
        Ok(())
    } else {
        Err(invalid_config(table, "values must be finite and non-negative"))
    }
}
