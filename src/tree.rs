//! The parse tree of a well-formed formula.

use std::collections::HashSet;
use std::fmt;

use crate::alphabet::{BinaryOp, UnaryOp};

/// A node of the parse tree: an atomic letter, a negation over one operand,
/// or a binary connective over two.
///
/// Children are owned exclusively, so the structure is a strict tree and
/// every consumer matches exhaustively on the three shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WffNode {
    /// An atomic sentence letter.
    Leaf(char),
    /// A unary operator applied to a single operand.
    Unary(UnaryOp, Box<WffNode>),
    /// A binary connective with left and right operands.
    Binary(BinaryOp, Box<WffNode>, Box<WffNode>),
}

impl WffNode {
    /// Whether the tree is well formed: trivially true for a leaf, the
    /// conjunction over the children otherwise.
    ///
    /// Trees built by [`parse`](crate::parse::parse) are well formed by
    /// construction; the parser reports an error instead of producing a
    /// malformed node.
    pub fn well_formed(&self) -> bool {
        match self {
            WffNode::Leaf(_) => true,
            WffNode::Unary(_, operand) => operand.well_formed(),
            WffNode::Binary(_, left, right) => left.well_formed() && right.well_formed(),
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, WffNode::Leaf(_))
    }

    /// Number of atomic and operator glyphs in the subtree, which is also
    /// the number of trace positions the subtree contributes to a
    /// truth-table row.
    pub fn glyph_count(&self) -> usize {
        match self {
            WffNode::Leaf(_) => 1,
            WffNode::Unary(_, operand) => 1 + operand.glyph_count(),
            WffNode::Binary(_, left, right) => 1 + left.glyph_count() + right.glyph_count(),
        }
    }

    /// The glyph a drawing collaborator labels this node with: the letter
    /// for a leaf, the canonical family glyph otherwise.
    pub fn label(&self) -> char {
        match self {
            WffNode::Leaf(symbol) => *symbol,
            WffNode::Unary(op, _) => op.glyph(),
            WffNode::Binary(op, _, _) => op.glyph(),
        }
    }

    /// Canonical rendering: one canonical glyph per operator family, every
    /// binary subformula parenthesized. Reparsing the result reproduces
    /// the tree.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Pre-order traversal: `visit(node, parent)` is called exactly once
    /// per node, parent before children, with `None` for the root's
    /// parent.
    ///
    /// This is the boundary graph-rendering collaborators consume; see
    /// [`dot`](crate::dot).
    pub fn traverse<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a WffNode, Option<&'a WffNode>),
    {
        self.traverse_from(None, visit);
    }

    fn traverse_from<'a, F>(&'a self, parent: Option<&'a WffNode>, visit: &mut F)
    where
        F: FnMut(&'a WffNode, Option<&'a WffNode>),
    {
        visit(self, parent);
        match self {
            WffNode::Leaf(_) => {}
            WffNode::Unary(_, operand) => operand.traverse_from(Some(self), visit),
            WffNode::Binary(_, left, right) => {
                left.traverse_from(Some(self), visit);
                right.traverse_from(Some(self), visit);
            }
        }
    }

    /// The distinct atomic letters of the subtree, collected unordered by
    /// the traversal callback.
    pub fn atomics(&self) -> HashSet<char> {
        let mut found = HashSet::new();
        self.traverse(&mut |node, _| {
            if let WffNode::Leaf(symbol) = node {
                found.insert(*symbol);
            }
        });
        found
    }
}

impl fmt::Display for WffNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WffNode::Leaf(symbol) => write!(f, "{}", symbol),
            WffNode::Unary(op, operand) => write!(f, "{}{}", op.glyph(), operand),
            WffNode::Binary(op, left, right) => {
                write!(f, "({}{}{})", left, op.glyph(), right)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn implication(left: WffNode, right: WffNode) -> WffNode {
        WffNode::Binary(BinaryOp::Implication, Box::new(left), Box::new(right))
    }

    #[test]
    fn test_render() {
        let tree = WffNode::Unary(
            UnaryOp::Negation,
            Box::new(implication(WffNode::Leaf('p'), WffNode::Leaf('q'))),
        );
        assert_eq!(tree.render(), "¬(p⊃q)");
        assert_eq!(tree.to_string(), tree.render());
    }

    #[test]
    fn test_glyph_count_skips_parentheses() {
        let tree = implication(
            implication(WffNode::Leaf('p'), WffNode::Leaf('q')),
            WffNode::Leaf('r'),
        );
        // Renders as "((p⊃q)⊃r)": five glyphs, four parentheses.
        assert_eq!(tree.glyph_count(), 5);
    }

    #[test]
    fn test_traverse_is_preorder() {
        let tree = implication(
            WffNode::Unary(UnaryOp::Negation, Box::new(WffNode::Leaf('p'))),
            WffNode::Leaf('q'),
        );
        let mut labels = Vec::new();
        let mut parents = Vec::new();
        tree.traverse(&mut |node, parent| {
            labels.push(node.label());
            parents.push(parent.map(WffNode::label));
        });
        assert_eq!(labels, ['⊃', '¬', 'p', 'q']);
        assert_eq!(parents, [None, Some('⊃'), Some('¬'), Some('⊃')]);
    }

    #[test]
    fn test_atomics_are_distinct() {
        let tree = implication(
            implication(WffNode::Leaf('q'), WffNode::Leaf('p')),
            WffNode::Leaf('q'),
        );
        let atomics = tree.atomics();
        assert_eq!(atomics.len(), 2);
        assert!(atomics.contains(&'p'));
        assert!(atomics.contains(&'q'));
    }

    #[test]
    fn test_well_formed() {
        assert!(WffNode::Leaf('a').well_formed());
        assert!(implication(WffNode::Leaf('a'), WffNode::Leaf('b')).well_formed());
    }
}
