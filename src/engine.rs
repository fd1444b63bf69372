//! Runs the registered detector set over parsed sources and aggregates
//! per-file reports into project results.

use crate::analyzers::{ParsedSource, PythonAnalyzer};
use crate::config::SmellConfig;
use crate::core::errors::Result;
use crate::core::{AnalysisResults, FileReport, Finding};
use crate::detectors::{self, FunctionContext, SmellDetector};
use crate::io::walker;
use crate::query::{self, DefinitionKind};
use log::{debug, warn};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

pub struct SmellEngine {
    config: SmellConfig,
    detectors: Vec<Box<dyn SmellDetector>>,
}

impl SmellEngine {
    /// Builds the engine with the shipped detector set. Fails fast on
    /// invalid configuration.
    pub fn new(config: SmellConfig) -> Result<Self> {
        config.validate()?;
        let detectors = detectors::default_detectors(&config);
        Ok(Self { config, detectors })
    }

    /// Appends a detector after the shipped set; it runs last, in
    /// registration order.
    pub fn register(&mut self, detector: Box<dyn SmellDetector>) {
        self.detectors.push(detector);
    }

    /// Findings for every function definition in the tree, nested and
    /// class-member functions included. Output order is (definition order,
    /// detector order), both deterministic.
    pub fn analyze(&self, parsed: &ParsedSource) -> Vec<Finding> {
        self.run(parsed).1
    }

    pub fn analyze_source(&self, content: &str, path: impl Into<PathBuf>) -> Result<FileReport> {
        let parsed = PythonAnalyzer::new()?.parse(content, path.into())?;
        Ok(self.report(&parsed))
    }

    /// Analyzes one unit. Read and parse failures are this unit's failure
    /// only; callers analyzing many files skip and continue.
    pub fn analyze_file(&self, path: &Path) -> Result<FileReport> {
        let parsed = PythonAnalyzer::new()?.parse_file(path)?;
        Ok(self.report(&parsed))
    }

    /// Walks `root` for Python files and analyzes each independently,
    /// fanning out across threads unless configured otherwise. Units that
    /// fail to read or parse are logged and skipped; they never abort the
    /// run.
    pub fn analyze_project(&self, root: &Path) -> Result<AnalysisResults> {
        let files = walker::find_python_files(root, &self.config.ignore.patterns)?;
        debug!(
            "analyzing {} python files under {}",
            files.len(),
            root.display()
        );

        let analyze_one = |path: &PathBuf| match self.analyze_file(path) {
            Ok(report) => Some(report),
            Err(err) => {
                warn!("skipping {}: {err}", path.display());
                None
            }
        };

        let reports: Vec<FileReport> = if self.config.parallel {
            files.par_iter().filter_map(analyze_one).collect()
        } else {
            files.iter().filter_map(analyze_one).collect()
        };

        Ok(AnalysisResults::new(root.to_path_buf(), reports))
    }

    fn report(&self, parsed: &ParsedSource) -> FileReport {
        let (functions_scanned, findings) = self.run(parsed);
        FileReport {
            path: parsed.path.clone(),
            functions_scanned,
            findings,
        }
    }

    fn run(&self, parsed: &ParsedSource) -> (usize, Vec<Finding>) {
        let functions = query::find_definitions(parsed.root(), DefinitionKind::Function);
        let mut findings = Vec::new();
        for node in &functions {
            let func = FunctionContext {
                node: *node,
                source: &parsed.source,
            };
            for detector in &self.detectors {
                findings.extend(detector.detect(&func));
            }
        }
        (functions.len(), findings)
    }
}
