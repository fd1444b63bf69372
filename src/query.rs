//! Generic tree-walking utilities over tree-sitter nodes.
//!
//! These are best-effort lookups: a malformed or incomplete subtree yields
//! sentinels and empty results, never an error.

use tree_sitter::Node;

/// Sentinel returned when a definition carries no resolvable identifier.
pub const UNKNOWN_NAME: &str = "unknown";

const IDENTIFIER: &str = "identifier";
const BLOCK: &str = "block";

/// The definitional node kinds this analysis cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefinitionKind {
    Function,
    Class,
}

impl DefinitionKind {
    pub(crate) fn grammar_kind(self) -> &'static str {
        match self {
            DefinitionKind::Function => "function_definition",
            DefinitionKind::Class => "class_definition",
        }
    }
}

/// All nodes of the requested definitional kind anywhere under `root`, in
/// pre-order traversal order (source appearance order).
pub fn find_definitions(root: Node<'_>, kind: DefinitionKind) -> Vec<Node<'_>> {
    let mut found = Vec::new();
    collect_definitions(root, kind.grammar_kind(), &mut found);
    found
}

fn collect_definitions<'t>(node: Node<'t>, kind: &str, found: &mut Vec<Node<'t>>) {
    if node.kind() == kind {
        found.push(node);
    }
    for child in node.children(&mut node.walk()) {
        collect_definitions(child, kind, found);
    }
}

/// Name of a definition node: the first immediate identifier child.
pub fn name_of(node: Node<'_>, source: &str) -> String {
    node.children(&mut node.walk())
        .find(|child| child.kind() == IDENTIFIER)
        .and_then(|child| child.utf8_text(source.as_bytes()).ok())
        .map_or_else(|| UNKNOWN_NAME.to_string(), str::to_string)
}

/// Function definitions that are direct statements of the class's body
/// block, in source order. One level deep only: helpers nested inside a
/// method are not methods of the class.
pub fn methods_of(class_node: Node<'_>) -> Vec<Node<'_>> {
    let mut methods = Vec::new();
    for child in class_node.children(&mut class_node.walk()) {
        if child.kind() != BLOCK {
            continue;
        }
        for item in child.children(&mut child.walk()) {
            if item.kind() == DefinitionKind::Function.grammar_kind() {
                methods.push(item);
            }
        }
    }
    methods
}

/// Decompose an identifier into lowercase words. `_` separates; an
/// uppercase letter directly after a lowercase one starts a new word, so
/// `get_user_name` and `getUserName` decompose identically.
pub fn split_identifier(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for ch in name.chars() {
        if ch == '_' {
            push_word(&mut words, &mut current);
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower {
            push_word(&mut words, &mut current);
        }
        current.extend(ch.to_lowercase());
        prev_lower = ch.is_lowercase();
    }
    push_word(&mut words, &mut current);
    words
}

fn push_word(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::{ParsedSource, PythonAnalyzer};
    use indoc::indoc;
    use std::path::PathBuf;

    fn parse(source: &str) -> ParsedSource {
        PythonAnalyzer::new()
            .unwrap()
            .parse(source, PathBuf::from("test.py"))
            .unwrap()
    }

    #[test]
    fn finds_nested_and_member_functions_in_source_order() {
        let parsed = parse(indoc! {"
            def top():
                def inner():
                    pass

            class Widget:
                def method(self):
                    pass
        "});

        let functions = find_definitions(parsed.root(), DefinitionKind::Function);
        let names: Vec<String> = functions
            .iter()
            .map(|f| name_of(*f, &parsed.source))
            .collect();
        assert_eq!(names, ["top", "inner", "method"]);
    }

    #[test]
    fn finds_classes() {
        let parsed = parse("class A:\n    pass\n\nclass B:\n    pass\n");
        let classes = find_definitions(parsed.root(), DefinitionKind::Class);
        assert_eq!(classes.len(), 2);
        assert_eq!(name_of(classes[0], &parsed.source), "A");
    }

    #[test]
    fn name_of_falls_back_to_unknown() {
        let parsed = parse("x = 1\n");
        // The module node has no identifier child.
        assert_eq!(name_of(parsed.root(), &parsed.source), UNKNOWN_NAME);
    }

    #[test]
    fn methods_are_one_level_deep_only() {
        let parsed = parse(indoc! {"
            class Widget:
                def first(self):
                    def helper():
                        pass

                def second(self):
                    pass
        "});

        let class = find_definitions(parsed.root(), DefinitionKind::Class)[0];
        let names: Vec<String> = methods_of(class)
            .iter()
            .map(|m| name_of(*m, &parsed.source))
            .collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn splits_snake_and_camel_identically() {
        let expected = vec!["get", "user", "name"];
        assert_eq!(split_identifier("get_user_name"), expected);
        assert_eq!(split_identifier("getUserName"), expected);
        assert_eq!(split_identifier("get_userName"), expected);
    }

    #[test]
    fn split_handles_edges() {
        assert_eq!(split_identifier(""), Vec::<String>::new());
        assert_eq!(split_identifier("__init__"), vec!["init"]);
        assert_eq!(split_identifier("HTTPServer"), vec!["httpserver"]);
        assert_eq!(split_identifier("getHTTPResponse"), vec!["get", "httpresponse"]);
        assert_eq!(split_identifier("x"), vec!["x"]);
    }
}
