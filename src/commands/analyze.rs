use super::Overrides;
use crate::engine::SmellEngine;
use crate::io::output::{self, OutputFormat};
use anyhow::Result;
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
    pub overrides: Overrides,
}

pub fn analyze_project(cfg: AnalyzeConfig) -> Result<()> {
    let config = super::resolve_config(&cfg.path, cfg.config_file.as_deref(), cfg.overrides)?;
    let engine = SmellEngine::new(config)?;
    let results = engine.analyze_project(&cfg.path)?;

    let mut writer = output::create_writer(cfg.format, cfg.output.as_deref())?;
    writer.write_results(&results)?;
    Ok(())
}
