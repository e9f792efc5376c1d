//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;
use crate::graph::PrimStrategy;

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// dsalgo configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Minimum spanning tree settings
    #[serde(default)]
    pub mst: MstConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Minimum spanning tree settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstConfig {
    /// How Prim's algorithm feeds its edge heap
    #[serde(default)]
    pub strategy: PrimStrategy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            mst: MstConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}
