//! Rock config file parsing
//!
//! ```toml
//! seed = 42
//!
//! [rock]
//! recipe = "eroded"
//! base = "icosphere"
//! size = 2.5
//! scale_direction = [1.0, 1.0, 1.0]
//! scale_factor = 1.0
//! low_poly = true
//!
//! [generator]
//! prefix = "Rock"
//! low_poly_suffix = "_LowPoly"
//! decimate_ratio = 0.01
//! cleanup = "session"
//! ```
//!
//! Every section and key is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RockError};
use crate::request::RequestConfig;

/// Name every generated rock starts with
pub const DEFAULT_PREFIX: &str = "Rock";
/// Appended to the prefix for the low-poly copy
pub const DEFAULT_LOW_POLY_SUFFIX: &str = "_LowPoly";
/// Fraction of faces the low-poly copy keeps
pub const DEFAULT_DECIMATE_RATIO: f32 = 0.01;

/// Which objects the generator removes before building a new rock
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanupPolicy {
    /// Only objects this generator session created
    #[default]
    Session,
    /// Every object whose name starts with the prefix, whoever created it
    Prefix,
}

/// How generated objects are named, cleaned up and simplified
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub prefix: String,
    pub low_poly_suffix: String,
    pub decimate_ratio: f32,
    pub cleanup: CleanupPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            low_poly_suffix: DEFAULT_LOW_POLY_SUFFIX.to_string(),
            decimate_ratio: DEFAULT_DECIMATE_RATIO,
            cleanup: CleanupPolicy::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn low_poly_name(&self) -> String {
        format!("{}{}", self.prefix, self.low_poly_suffix)
    }

    /// Check the settings as a whole
    ///
    /// An empty prefix would let prefix cleanup match every object in the
    /// scene. The decimation ratio must lie in (0, 1].
    pub fn validate(&self) -> Result<()> {
        if self.prefix.trim().is_empty() {
            return Err(RockError::InvalidGeneratorConfig(
                "prefix must not be empty".to_string(),
            ));
        }
        if self.low_poly_suffix.is_empty() {
            return Err(RockError::InvalidGeneratorConfig(
                "low_poly_suffix must not be empty".to_string(),
            ));
        }
        if !(self.decimate_ratio > 0.0 && self.decimate_ratio <= 1.0) {
            return Err(RockError::InvalidGeneratorConfig(format!(
                "decimate_ratio must be in (0, 1], got {}",
                self.decimate_ratio
            )));
        }
        Ok(())
    }
}

/// Top-level config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RockConfig {
    /// RNG seed; a random one is picked when absent
    pub seed: Option<u64>,
    pub rock: RequestConfig,
    pub generator: GeneratorConfig,
}

impl RockConfig {
    /// Load config from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RockError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse config from string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.generator.validate()?;
        Ok(config)
    }
}
