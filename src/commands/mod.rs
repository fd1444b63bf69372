pub mod analyze;
pub mod check;
pub mod init;

use crate::config::SmellConfig;
use crate::metrics::NestedScopeMode;
use anyhow::Result;
use std::path::Path;

/// CLI-side threshold overrides layered on top of the file configuration.
#[derive(Debug, Default)]
pub struct Overrides {
    pub max_function_length: Option<usize>,
    pub max_parameters: Option<usize>,
    pub max_nesting: Option<usize>,
    pub nested_scopes: Option<NestedScopeMode>,
    pub exclude: Vec<String>,
    pub no_parallel: bool,
}

/// Loads (or discovers) the configuration and applies CLI overrides.
/// Raising a primary threshold lifts its high ceiling along with it so the
/// override cannot invalidate the config.
pub(crate) fn resolve_config(
    root: &Path,
    config_file: Option<&Path>,
    overrides: Overrides,
) -> Result<SmellConfig> {
    let mut config = match config_file {
        Some(path) => SmellConfig::load(path)?,
        None => SmellConfig::discover(root)?,
    };

    let t = &mut config.thresholds;
    if let Some(v) = overrides.max_function_length {
        t.max_function_length = v;
        t.function_length_high = t.function_length_high.max(v);
    }
    if let Some(v) = overrides.max_parameters {
        t.max_parameters = v;
        t.parameters_high = t.parameters_high.max(v);
    }
    if let Some(v) = overrides.max_nesting {
        t.max_nesting = v;
        t.nesting_high = t.nesting_high.max(v);
    }
    if let Some(mode) = overrides.nested_scopes {
        config.nested_scopes = mode;
    }
    config.ignore.patterns.extend(overrides.exclude);
    if overrides.no_parallel {
        config.parallel = false;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raising_a_threshold_lifts_its_ceiling() {
        let dir = tempfile::tempdir().unwrap();
        let overrides = Overrides {
            max_function_length: Some(120),
            ..Default::default()
        };
        let config = resolve_config(dir.path(), None, overrides).unwrap();
        assert_eq!(config.thresholds.max_function_length, 120);
        assert_eq!(config.thresholds.function_length_high, 120);
        config.validate().unwrap();
    }

    #[test]
    fn excludes_append_to_file_patterns() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".smellmap.toml"),
            "[ignore]\npatterns = [\"venv/**\"]\n",
        )
        .unwrap();

        let overrides = Overrides {
            exclude: vec!["build/**".to_string()],
            ..Default::default()
        };
        let config = resolve_config(dir.path(), None, overrides).unwrap();
        assert_eq!(config.ignore.patterns, ["venv/**", "build/**"]);
    }
}
