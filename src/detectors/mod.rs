//! Threshold policy units that turn metrics into findings.
//!
//! Each detector is independent and pure: given a function definition it
//! produces zero or one [`Finding`], and never mutates the tree or another
//! detector's state. New smell categories implement [`SmellDetector`] and
//! register on the engine without touching traversal or orchestration.

mod long_method;
mod nesting;
mod parameters;

pub use long_method::LongMethod;
pub use nesting::DeepNesting;
pub use parameters::TooManyParameters;

use crate::config::SmellConfig;
use crate::core::{Finding, Severity, SmellType};
use crate::query;
use std::collections::BTreeMap;
use tree_sitter::Node;

/// A function definition handed to detectors, with the buffer it indexes
/// into.
#[derive(Clone, Copy)]
pub struct FunctionContext<'t> {
    pub node: Node<'t>,
    pub source: &'t str,
}

impl FunctionContext<'_> {
    pub fn name(&self) -> String {
        query::name_of(self.node, self.source)
    }

    /// 1-based start line of the definition.
    pub fn line(&self) -> usize {
        self.node.start_position().row + 1
    }

    /// 0-based start column of the definition.
    pub fn column(&self) -> usize {
        self.node.start_position().column
    }
}

pub trait SmellDetector: Send + Sync {
    fn smell_type(&self) -> SmellType;

    /// Returns a finding when the function strictly exceeds this detector's
    /// threshold; equality never fires.
    fn detect(&self, func: &FunctionContext<'_>) -> Option<Finding>;
}

/// The shipped detector set, in registration order.
pub fn default_detectors(config: &SmellConfig) -> Vec<Box<dyn SmellDetector>> {
    let t = &config.thresholds;
    vec![
        Box::new(LongMethod::new(t.max_function_length, t.function_length_high)),
        Box::new(TooManyParameters::new(t.max_parameters, t.parameters_high)),
        Box::new(DeepNesting::new(
            t.max_nesting,
            t.nesting_high,
            config.nested_scopes,
        )),
    ]
}

/// Severity split shared by the shipped detectors: above the high ceiling
/// is high, anything else that fired is medium.
fn classify(value: usize, high_ceiling: usize) -> Severity {
    if value > high_ceiling {
        Severity::High
    } else {
        Severity::Medium
    }
}

fn finding(
    func: &FunctionContext<'_>,
    smell_type: SmellType,
    severity: Severity,
    message: String,
    metric: &str,
    value: usize,
    threshold: usize,
) -> Finding {
    let mut details = BTreeMap::new();
    details.insert(metric.to_string(), value as u64);
    details.insert("threshold".to_string(), threshold as u64);
    Finding {
        smell_type,
        severity,
        line: func.line(),
        column: func.column(),
        function: func.name(),
        message,
        details,
    }
}
