use crate::core::Severity;
use crate::metrics::NestedScopeMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "smellmap")]
#[command(about = "Structural code smell detector for Python sources", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a file or directory for code smells
    Analyze {
        /// Path to analyze
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to discovering .smellmap.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Line-span threshold for long-method findings
        #[arg(long)]
        max_function_length: Option<usize>,

        /// Parameter-count threshold for too-many-parameters findings
        #[arg(long)]
        max_parameters: Option<usize>,

        /// Depth threshold for deep-nesting findings
        #[arg(long)]
        max_nesting: Option<usize>,

        /// How nested definitions count toward enclosing nesting depth
        #[arg(long, value_enum)]
        nested_scopes: Option<NestedScopes>,

        /// Glob patterns to exclude from the scan
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<String>,

        /// Analyze files sequentially instead of fanning out
        #[arg(long)]
        no_parallel: bool,
    },

    /// Analyze and exit non-zero when findings reach a severity (CI gate)
    Check {
        /// Path to analyze
        path: PathBuf,

        /// Configuration file (defaults to discovering .smellmap.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Fail when any finding is at or above this severity
        #[arg(long, value_enum, default_value = "high")]
        fail_on: FailOn,

        /// Glob patterns to exclude from the scan
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<String>,

        /// Analyze files sequentially instead of fanning out
        #[arg(long)]
        no_parallel: bool,
    },

    /// Write a starter .smellmap.toml to the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum NestedScopes {
    Accumulate,
    Isolate,
}

impl From<NestedScopes> for NestedScopeMode {
    fn from(m: NestedScopes) -> Self {
        match m {
            NestedScopes::Accumulate => NestedScopeMode::Accumulate,
            NestedScopes::Isolate => NestedScopeMode::Isolate,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    Low,
    Medium,
    High,
}

impl From<FailOn> for Severity {
    fn from(f: FailOn) -> Self {
        match f {
            FailOn::Low => Severity::Low,
            FailOn::Medium => Severity::Medium,
            FailOn::High => Severity::High,
        }
    }
}
