//! Parse tree to DOT (Graphviz) conversion.
//!
//! The exporter is a client of the tree's traversal contract: it receives
//! each node together with its parent, labels the node with its glyph,
//! and emits one edge per parent-child pair. Render the output with
//! `dot -Tpng`.
//!
//! # Examples
//!
//! ```
//! use wff_rs::dot::to_dot;
//! use wff_rs::parse::parse;
//!
//! let tree = parse("p∧q").unwrap();
//! let dot = to_dot(&tree).unwrap();
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! assert!(dot.starts_with("digraph {"));
//! ```

use std::collections::HashMap;

use crate::tree::WffNode;

/// Configuration options for DOT output generation.
///
/// Use `DotConfig::default()` for standard settings.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for operator nodes (default: "circle")
    pub node_shape: &'static str,
    /// Shape for atomic (leaf) nodes (default: "square")
    pub leaf_shape: &'static str,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            node_shape: "circle",
            leaf_shape: "square",
        }
    }
}

/// Converts a parse tree to DOT format with default settings.
pub fn to_dot(root: &WffNode) -> Result<String, std::fmt::Error> {
    to_dot_with_config(root, &DotConfig::default())
}

/// Converts a parse tree to DOT format with custom configuration.
///
/// Node identifiers are pre-order positions, so the output is stable for
/// a given tree. Operator nodes take `node_shape`, leaves `leaf_shape`;
/// labels are the atomic letter or the canonical operator glyph.
///
/// # Examples
///
/// ```
/// use wff_rs::dot::{to_dot_with_config, DotConfig};
/// use wff_rs::parse::parse;
///
/// let tree = parse("¬p").unwrap();
/// let config = DotConfig {
///     leaf_shape: "plaintext",
///     ..DotConfig::default()
/// };
/// let dot = to_dot_with_config(&tree, &config).unwrap();
/// assert!(dot.contains("shape=plaintext"));
/// ```
pub fn to_dot_with_config(root: &WffNode, config: &DotConfig) -> Result<String, std::fmt::Error> {
    use std::fmt::Write as _;

    // Flatten in pre-order; the position doubles as the node id, and the
    // traversal guarantees parents appear before their children.
    let mut order: Vec<(&WffNode, Option<&WffNode>)> = Vec::new();
    root.traverse(&mut |node, parent| order.push((node, parent)));

    let ids: HashMap<*const WffNode, usize> = order
        .iter()
        .enumerate()
        .map(|(id, (node, _))| (*node as *const WffNode, id))
        .collect();

    let mut dot = String::new();
    writeln!(dot, "digraph {{")?;

    for (id, (node, _)) in order.iter().enumerate() {
        let shape = if node.is_leaf() {
            config.leaf_shape
        } else {
            config.node_shape
        };
        writeln!(dot, "  n{} [label=\"{}\", shape={}];", id, node.label(), shape)?;
    }

    for (id, (_, parent)) in order.iter().enumerate() {
        if let Some(parent) = parent {
            writeln!(dot, "  n{} -> n{};", ids[&(*parent as *const WffNode)], id)?;
        }
    }

    writeln!(dot, "}}")?;
    Ok(dot)
}
