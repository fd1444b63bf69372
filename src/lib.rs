// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod detectors;
pub mod engine;
pub mod io;
pub mod metrics;
pub mod query;

// Re-export commonly used types
pub use crate::analyzers::{ParsedSource, PythonAnalyzer};
pub use crate::config::{IgnoreConfig, SmellConfig, ThresholdsConfig};
pub use crate::core::errors::{Error, Result};
pub use crate::core::{
    AnalysisResults, AnalysisSummary, FileReport, Finding, Severity, SmellType,
};
pub use crate::detectors::{
    default_detectors, DeepNesting, FunctionContext, LongMethod, SmellDetector, TooManyParameters,
};
pub use crate::engine::SmellEngine;
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::metrics::{line_span, max_nesting_depth, parameter_count, NestedScopeMode};
pub use crate::query::{
    find_definitions, methods_of, name_of, split_identifier, DefinitionKind,
};
