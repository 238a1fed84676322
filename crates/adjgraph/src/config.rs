//! Graph configuration.
//!
//! Link semantics can be chosen in code or loaded with the `config` crate
//! from TOML and environment variables.
//!
//! ```toml
//! directedness = "directed"   # or "undirected"
//! weight_policy = "arbitrary" # or "boolean"
//! ```
//!
//! Environment overrides use the `ADJGRAPH` prefix, e.g.
//! `ADJGRAPH__DIRECTEDNESS=directed`.

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::policy::{Directedness, GraphKind, WeightPolicy};
use crate::Result;

const ENV_PREFIX: &str = "ADJGRAPH";

/// Configuration for constructing a [`Graph`](crate::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Whether links are mirrored.
    #[serde(default)]
    pub directedness: Directedness,

    /// Whether weights are kept or stored as 0/1.
    #[serde(default)]
    pub weight_policy: WeightPolicy,
}

impl GraphConfig {
    /// Load from a TOML file, with environment overrides.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let builder = Config::builder()
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Load from file or fall back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Load from environment variables only.
    pub fn from_env() -> Result<Self> {
        let builder =
            Config::builder().add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Link semantics described by this configuration.
    pub fn kind(&self) -> GraphKind {
        GraphKind::new(self.directedness, self.weight_policy)
    }
}

impl From<GraphKind> for GraphConfig {
    fn from(kind: GraphKind) -> Self {
        Self {
            directedness: kind.directedness,
            weight_policy: kind.weight_policy,
        }
    }
}

/// Load configuration from a TOML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GraphConfig> {
    GraphConfig::load(path)
}

/// Load configuration from a TOML string.
pub fn load_config_from_str(content: &str) -> Result<GraphConfig> {
    let builder = Config::builder().add_source(File::from_str(content, FileFormat::Toml));

    Ok(builder.build()?.try_deserialize()?)
}
