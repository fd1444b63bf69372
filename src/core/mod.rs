pub mod errors;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Ordinal urgency of a finding, derived from how far a metric exceeds its
/// threshold. `Low` is reserved for future detector variants; none of the
/// shipped detectors produce it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        };
        write!(f, "{s}")
    }
}

/// Closed set of smell categories the shipped detectors emit.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SmellType {
    LongMethod,
    TooManyParameters,
    DeepNesting,
}

impl SmellType {
    /// Stable tag used in serialized output and report text.
    pub fn tag(&self) -> &'static str {
        match self {
            SmellType::LongMethod => "long_method",
            SmellType::TooManyParameters => "too_many_parameters",
            SmellType::DeepNesting => "deep_nesting",
        }
    }
}

impl std::fmt::Display for SmellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A single detected violation.
///
/// Constructed only when a measured value strictly exceeds its threshold;
/// `details` carries the measured metric and the threshold used, keyed by
/// metric name, so the message can be reconstructed by machine consumers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Finding {
    pub smell_type: SmellType,
    pub severity: Severity,
    /// 1-based start line of the violating definition.
    pub line: usize,
    /// 0-based start column of the violating definition.
    pub column: usize,
    /// Name of the offending function, or "unknown" when unresolvable.
    pub function: String,
    pub message: String,
    pub details: BTreeMap<String, u64>,
}

/// Findings for one analyzed source unit.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub functions_scanned: usize,
    pub findings: Vec<Finding>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub files_analyzed: usize,
    pub functions_scanned: usize,
    pub total_findings: usize,
    pub medium_findings: usize,
    pub high_findings: usize,
}

impl AnalysisSummary {
    pub fn collect(files: &[FileReport]) -> Self {
        let findings = files.iter().flat_map(|f| &f.findings);
        let (mut medium, mut high, mut total) = (0, 0, 0);
        for finding in findings {
            total += 1;
            match finding.severity {
                Severity::Medium => medium += 1,
                Severity::High => high += 1,
                Severity::Low => {}
            }
        }
        Self {
            files_analyzed: files.len(),
            functions_scanned: files.iter().map(|f| f.functions_scanned).sum(),
            total_findings: total,
            medium_findings: medium,
            high_findings: high,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub project_path: PathBuf,
    pub timestamp: DateTime<Utc>,
    pub files: Vec<FileReport>,
    pub summary: AnalysisSummary,
}

impl AnalysisResults {
    pub fn new(project_path: PathBuf, files: Vec<FileReport>) -> Self {
        let summary = AnalysisSummary::collect(&files);
        Self {
            project_path,
            timestamp: Utc::now(),
            files,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(severity: Severity) -> Finding {
        Finding {
            smell_type: SmellType::LongMethod,
            severity,
            line: 3,
            column: 0,
            function: "f".to_string(),
            message: String::new(),
            details: BTreeMap::new(),
        }
    }

    #[test]
    fn severity_is_ordered() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn smell_type_tags_match_serialized_form() {
        let json = serde_json::to_string(&SmellType::TooManyParameters).unwrap();
        assert_eq!(json, "\"too_many_parameters\"");
        assert_eq!(SmellType::TooManyParameters.tag(), "too_many_parameters");
    }

    #[test]
    fn summary_counts_by_severity() {
        let files = vec![
            FileReport {
                path: PathBuf::from("a.py"),
                functions_scanned: 2,
                findings: vec![finding(Severity::Medium), finding(Severity::High)],
            },
            FileReport {
                path: PathBuf::from("b.py"),
                functions_scanned: 1,
                findings: vec![finding(Severity::High)],
            },
        ];

        let summary = AnalysisSummary::collect(&files);
        assert_eq!(summary.files_analyzed, 2);
        assert_eq!(summary.functions_scanned, 3);
        assert_eq!(summary.total_findings, 3);
        assert_eq!(summary.medium_findings, 1);
        assert_eq!(summary.high_findings, 2);
    }
}
