//! Truth-value evaluation of a parse tree under an assignment.

use std::collections::HashMap;

use crate::tree::WffNode;

/// A boolean assignment to atomic letters.
pub type Assignment = HashMap<char, bool>;

/// Evaluate `node` under `assignment`, returning the truth value together
/// with the left-to-right evaluation trace.
///
/// The trace carries one `1`/`0` digit per atomic or operator glyph, in
/// source order with parentheses dropped: a leaf contributes its own
/// digit, a unary node its value followed by the operand's trace (the
/// operator is textually the prefix), a binary node the left trace, its
/// own value, then the right trace. Laid over the normalized source
/// string, every digit sits under the glyph whose subformula it values.
///
/// Evaluation of a well-formed tree under a complete assignment never
/// fails and is deterministic.
///
/// # Panics
///
/// Panics if the assignment lacks an atomic that occurs in the tree.
/// Callers populate every atomic first; see
/// [`Wff::find_atomics`](crate::wff::Wff::find_atomics).
pub fn evaluate(node: &WffNode, assignment: &Assignment) -> (bool, String) {
    match node {
        WffNode::Leaf(symbol) => {
            let value = *assignment
                .get(symbol)
                .unwrap_or_else(|| panic!("assignment is missing atomic '{}'", symbol));
            (value, digit(value).to_string())
        }
        WffNode::Unary(op, operand) => {
            let (operand_value, operand_trace) = evaluate(operand, assignment);
            let value = op.apply(operand_value);
            let mut trace = String::with_capacity(1 + operand_trace.len());
            trace.push(digit(value));
            trace.push_str(&operand_trace);
            (value, trace)
        }
        WffNode::Binary(op, left, right) => {
            let (left_value, left_trace) = evaluate(left, assignment);
            let (right_value, right_trace) = evaluate(right, assignment);
            let value = op.apply(left_value, right_value);
            let mut trace = String::with_capacity(left_trace.len() + 1 + right_trace.len());
            trace.push_str(&left_trace);
            trace.push(digit(value));
            trace.push_str(&right_trace);
            (value, trace)
        }
    }
}

fn digit(value: bool) -> char {
    if value {
        '1'
    } else {
        '0'
    }
}
