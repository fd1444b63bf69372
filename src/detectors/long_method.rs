use super::{classify, finding, FunctionContext, SmellDetector};
use crate::core::{Finding, SmellType};
use crate::metrics;

/// Flags functions whose positional line span exceeds the threshold.
pub struct LongMethod {
    threshold: usize,
    high_ceiling: usize,
}

impl LongMethod {
    pub fn new(threshold: usize, high_ceiling: usize) -> Self {
        Self {
            threshold,
            high_ceiling,
        }
    }
}

impl SmellDetector for LongMethod {
    fn smell_type(&self) -> SmellType {
        SmellType::LongMethod
    }

    fn detect(&self, func: &FunctionContext<'_>) -> Option<Finding> {
        let line_count = metrics::line_span(func.node);
        if line_count <= self.threshold {
            return None;
        }
        Some(finding(
            func,
            SmellType::LongMethod,
            classify(line_count, self.high_ceiling),
            format!(
                "Function is {line_count} lines long (threshold: {})",
                self.threshold
            ),
            "line_count",
            line_count,
            self.threshold,
        ))
    }
}
