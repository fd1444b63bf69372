//! Threshold and scan configuration, loaded from `.smellmap.toml`.

use crate::core::errors::{Error, Result};
use crate::io;
use crate::metrics::NestedScopeMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = ".smellmap.toml";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SmellConfig {
    pub thresholds: ThresholdsConfig,

    /// Whether control nesting inside nested definitions counts toward the
    /// enclosing function's depth.
    pub nested_scopes: NestedScopeMode,

    pub ignore: IgnoreConfig,

    /// Fan out per-file analysis across threads.
    pub parallel: bool,
}

impl Default for SmellConfig {
    fn default() -> Self {
        Self {
            thresholds: ThresholdsConfig::default(),
            nested_scopes: NestedScopeMode::default(),
            ignore: IgnoreConfig::default(),
            parallel: true,
        }
    }
}

/// Per-detector primary thresholds and the ceilings above which a finding
/// escalates from medium to high severity.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdsConfig {
    /// Line-span ceiling before a function counts as a long method.
    pub max_function_length: usize,
    /// Above this span a long-method finding is high severity.
    pub function_length_high: usize,

    pub max_parameters: usize,
    pub parameters_high: usize,

    pub max_nesting: usize,
    pub nesting_high: usize,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            max_function_length: default_max_function_length(),
            function_length_high: default_function_length_high(),
            max_parameters: default_max_parameters(),
            parameters_high: default_parameters_high(),
            max_nesting: default_max_nesting(),
            nesting_high: default_nesting_high(),
        }
    }
}

fn default_max_function_length() -> usize {
    50
}
fn default_function_length_high() -> usize {
    100
}
fn default_max_parameters() -> usize {
    5
}
fn default_parameters_high() -> usize {
    7
}
fn default_max_nesting() -> usize {
    4
}
fn default_nesting_high() -> usize {
    5
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IgnoreConfig {
    /// Glob patterns excluded from the scan.
    pub patterns: Vec<String>,
}

impl SmellConfig {
    /// Fail fast on caller misuse, before any analysis runs.
    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        let pairs = [
            ("function_length", t.max_function_length, t.function_length_high),
            ("parameters", t.max_parameters, t.parameters_high),
            ("nesting", t.max_nesting, t.nesting_high),
        ];
        for (name, primary, high) in pairs {
            if high < primary {
                return Err(Error::Config(format!(
                    "{name}: high-severity ceiling {high} is below the primary threshold {primary}"
                )));
            }
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        parse_and_validate(&io::read_file(path)?)
    }

    /// Looks for `.smellmap.toml` from `root` upward; defaults when none is
    /// found.
    pub fn discover(root: &Path) -> Result<Self> {
        for dir in root.ancestors() {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                log::debug!("using configuration from {}", candidate.display());
                return Self::load(&candidate);
            }
        }
        Ok(Self::default())
    }
}

fn parse_and_validate(contents: &str) -> Result<SmellConfig> {
    let config: SmellConfig =
        toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}
