//! Parsing adapters over the external tree-sitter grammars.
//!
//! The rest of the crate consumes syntax trees through [`ParsedSource`] and
//! never tokenizes or parses on its own.

pub mod python;

pub use python::{ParsedSource, PythonAnalyzer};
