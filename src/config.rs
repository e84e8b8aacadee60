use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::profile::OrderStatus;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Which orders count towards a member's purchased items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchasePolicy {
    /// Every order counts, whatever its status. Once bought, never
    /// recommended again.
    #[default]
    AnyStatus,
    /// Cancelled and refunded orders are ignored.
    ExcludeCancelled,
}

impl PurchasePolicy {
    pub fn counts(self, status: OrderStatus) -> bool {
        match self {
            PurchasePolicy::AnyStatus => true,
            PurchasePolicy::ExcludeCancelled => !status.is_voided(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    pub version: String,
    pub purchase_policy: PurchasePolicy,
}

impl RecommendConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            purchase_policy: PurchasePolicy::AnyStatus,
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self::v0()
    }
}
