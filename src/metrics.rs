//! Structural metrics over definition nodes. Pure functions of the tree.

use serde::{Deserialize, Serialize};
use tree_sitter::Node;

/// Node kinds that deepen control-flow nesting.
const NESTING_KINDS: [&str; 5] = [
    "if_statement",
    "for_statement",
    "while_statement",
    "with_statement",
    "try_statement",
];

/// Parameter kinds counted as normal positional/keyword parameters. Splat
/// markers and typed defaults carry other kind tags and are excluded by
/// construction.
const PARAMETER_KINDS: [&str; 3] = ["identifier", "typed_parameter", "default_parameter"];

const PARAMETERS: &str = "parameters";

/// Whether control structures inside nested `def`/`class` bodies count
/// toward the enclosing function's nesting depth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NestedScopeMode {
    /// Depth accumulates through nested definitions.
    #[default]
    Accumulate,
    /// Nested definitions are not descended into; each is measured on its
    /// own when it is analyzed as a definition in its own right.
    Isolate,
}

/// Inclusive positional line span of a node. Always >= 1.
pub fn line_span(node: Node<'_>) -> usize {
    node.end_position().row - node.start_position().row + 1
}

/// Number of normal parameters of a definition node. A definition with no
/// parameter list yields 0.
pub fn parameter_count(definition: Node<'_>) -> usize {
    definition
        .children(&mut definition.walk())
        .find(|child| child.kind() == PARAMETERS)
        .map_or(0, |params| {
            params
                .children(&mut params.walk())
                .filter(|p| PARAMETER_KINDS.contains(&p.kind()))
                .count()
        })
}

/// Maximum control-nesting depth reached anywhere under `definition`,
/// starting at depth 0 at the definition node itself.
pub fn max_nesting_depth(definition: Node<'_>, mode: NestedScopeMode) -> usize {
    nesting_depth(definition, 0, mode)
}

fn nesting_depth(node: Node<'_>, depth: usize, mode: NestedScopeMode) -> usize {
    let mut max_depth = depth;
    for child in node.children(&mut node.walk()) {
        if mode == NestedScopeMode::Isolate && is_definition(child) {
            continue;
        }
        let child_depth = if NESTING_KINDS.contains(&child.kind()) {
            depth + 1
        } else {
            depth
        };
        max_depth = max_depth.max(nesting_depth(child, child_depth, mode));
    }
    max_depth
}

fn is_definition(node: Node<'_>) -> bool {
    node.kind() == "function_definition" || node.kind() == "class_definition"
}
