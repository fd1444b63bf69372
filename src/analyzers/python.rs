use crate::core::errors::{Error, Result};
use crate::io;
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Parser, Tree};

/// A parsed source unit: the syntax tree plus the buffer its nodes index
/// into. Dropped once the unit's analysis is done.
#[derive(Debug)]
pub struct ParsedSource {
    pub tree: Tree,
    pub source: String,
    pub path: PathBuf,
}

impl ParsedSource {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }
}

/// Thin seam over the tree-sitter Python parser.
pub struct PythonAnalyzer {
    parser: Parser,
}

impl PythonAnalyzer {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_python::LANGUAGE.into())?;
        Ok(Self { parser })
    }

    pub fn parse(&mut self, content: &str, path: PathBuf) -> Result<ParsedSource> {
        let tree = self.parser.parse(content, None).ok_or_else(|| Error::Parse {
            path: path.clone(),
            message: "parser produced no tree".to_string(),
        })?;
        Ok(ParsedSource {
            tree,
            source: content.to_string(),
            path,
        })
    }

    pub fn parse_file(&mut self, path: &Path) -> Result<ParsedSource> {
        let content = io::read_file(path)?;
        self.parse(&content, path.to_path_buf())
    }
}
