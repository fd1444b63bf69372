use super::{classify, finding, FunctionContext, SmellDetector};
use crate::core::{Finding, SmellType};
use crate::metrics::{self, NestedScopeMode};

/// Flags functions whose control structures nest deeper than the threshold.
pub struct DeepNesting {
    threshold: usize,
    high_ceiling: usize,
    mode: NestedScopeMode,
}

impl DeepNesting {
    pub fn new(threshold: usize, high_ceiling: usize, mode: NestedScopeMode) -> Self {
        Self {
            threshold,
            high_ceiling,
            mode,
        }
    }
}

impl SmellDetector for DeepNesting {
    fn smell_type(&self) -> SmellType {
        SmellType::DeepNesting
    }

    fn detect(&self, func: &FunctionContext<'_>) -> Option<Finding> {
        let depth = metrics::max_nesting_depth(func.node, self.mode);
        if depth <= self.threshold {
            return None;
        }
        Some(finding(
            func,
            SmellType::DeepNesting,
            classify(depth, self.high_ceiling),
            format!(
                "Function has nesting depth of {depth} (threshold: {})",
                self.threshold
            ),
            "nesting_depth",
            depth,
            self.threshold,
        ))
    }
}
