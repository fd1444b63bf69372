use super::Overrides;
use crate::core::Severity;
use crate::engine::SmellEngine;
use anyhow::Result;
use colored::*;
use std::path::PathBuf;

pub struct CheckConfig {
    pub path: PathBuf,
    pub config_file: Option<PathBuf>,
    pub fail_on: Severity,
    pub overrides: Overrides,
}

/// Returns whether the gate passed. The caller owns the exit code.
pub fn check_project(cfg: CheckConfig) -> Result<bool> {
    let config = super::resolve_config(&cfg.path, cfg.config_file.as_deref(), cfg.overrides)?;
    let engine = SmellEngine::new(config)?;
    let results = engine.analyze_project(&cfg.path)?;

    let failing: Vec<_> = results
        .files
        .iter()
        .flat_map(|file| file.findings.iter().map(move |f| (&file.path, f)))
        .filter(|(_, finding)| finding.severity >= cfg.fail_on)
        .collect();

    if failing.is_empty() {
        println!(
            "{} check passed: no findings at or above {} severity",
            "✓".green(),
            cfg.fail_on
        );
        return Ok(true);
    }

    for (path, finding) in &failing {
        println!(
            "  {}:{} {} [{}] {}",
            path.display(),
            finding.line,
            finding.smell_type,
            finding.severity,
            finding.message
        );
    }
    println!(
        "{} check failed: {} finding(s) at or above {} severity",
        "✗".red(),
        failing.len(),
        cfg.fail_on
    );
    Ok(false)
}
