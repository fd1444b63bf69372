use super::{classify, finding, FunctionContext, SmellDetector};
use crate::core::{Finding, SmellType};
use crate::metrics;

/// Flags functions with more normal parameters than the threshold allows.
pub struct TooManyParameters {
    threshold: usize,
    high_ceiling: usize,
}

impl TooManyParameters {
    pub fn new(threshold: usize, high_ceiling: usize) -> Self {
        Self {
            threshold,
            high_ceiling,
        }
    }
}

impl SmellDetector for TooManyParameters {
    fn smell_type(&self) -> SmellType {
        SmellType::TooManyParameters
    }

    fn detect(&self, func: &FunctionContext<'_>) -> Option<Finding> {
        let param_count = metrics::parameter_count(func.node);
        if param_count <= self.threshold {
            return None;
        }
        Some(finding(
            func,
            SmellType::TooManyParameters,
            classify(param_count, self.high_ceiling),
            format!(
                "Function has {param_count} parameters (threshold: {})",
                self.threshold
            ),
            "param_count",
            param_count,
            self.threshold,
        ))
    }
}
