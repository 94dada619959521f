//! Depth-aware scanning over character slices.
//!
//! The grammar wants every binary subformula fully parenthesized, so a
//! well-formed binary expression exposes exactly one operator at
//! parenthesis depth 0. These routines find that operator and decide
//! whether an enclosing parenthesis pair is redundant. Both take `char`
//! slices so the multi-byte glyphs index cleanly.

use log::trace;

use crate::alphabet::{binary_family, BinaryOp};
use crate::parse::ParseError;

/// Whether `chars` is exactly enclosed by one matching outer parenthesis
/// pair, such that the pair can be stripped without changing the formula.
///
/// The interior is scanned with a running depth counter; if the counter
/// ever dips below zero, the first and last characters do not form a pair
/// (as in `(a)∧(b)`).
///
/// # Errors
///
/// [`ParseError::DegenerateParens`] when the string is wrapped but too
/// short to wrap a legal subformula, i.e. `()`.
pub fn outer_parens_removable(chars: &[char]) -> Result<bool, ParseError> {
    if chars.first() != Some(&'(') || chars.last() != Some(&')') {
        return Ok(false);
    }
    if chars.len() < 3 {
        return Err(ParseError::DegenerateParens(chars.iter().collect()));
    }

    let mut depth: i32 = 0;
    for &c in &chars[1..chars.len() - 1] {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Locate the outer binary operator: the first glyph at parenthesis depth 0
/// naming a binary family, scanning left to right.
///
/// Fully-parenthesized input exposes at most one such glyph. Input that
/// leaves several operators at depth 0 is split at the leftmost one; see
/// [`parse`](crate::parse::parse) for what that means for the tree.
///
/// # Errors
///
/// [`ParseError::NoOuterOperator`] when the scan finds no depth-0 binary
/// glyph.
pub fn locate_main_operator(chars: &[char]) -> Result<(BinaryOp, usize), ParseError> {
    let mut depth: i32 = 0;
    for (i, &c) in chars.iter().enumerate() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {
                if depth == 0 {
                    if let Some(op) = binary_family(c) {
                        trace!("outer operator {:?} ('{}') at {}", op, c, i);
                        return Ok((op, i));
                    }
                }
            }
        }
    }
    Err(ParseError::NoOuterOperator(chars.iter().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_removable() {
        assert_eq!(outer_parens_removable(&chars("(p⊃q)")), Ok(true));
        assert_eq!(outer_parens_removable(&chars("((p)⊃(q))")), Ok(true));
        assert_eq!(outer_parens_removable(&chars("((a∧b))")), Ok(true));
    }

    #[test]
    fn test_not_removable() {
        assert_eq!(outer_parens_removable(&chars("p⊃q")), Ok(false));
        assert_eq!(outer_parens_removable(&chars("(p)⊃(q)")), Ok(false));
        assert_eq!(outer_parens_removable(&chars("(p⊃q)∧r")), Ok(false));
        assert_eq!(outer_parens_removable(&chars("p")), Ok(false));
        assert_eq!(outer_parens_removable(&chars("(")), Ok(false));
    }

    #[test]
    fn test_degenerate_pair() {
        assert_eq!(
            outer_parens_removable(&chars("()")),
            Err(ParseError::DegenerateParens("()".to_string()))
        );
    }

    #[test]
    fn test_locate_main_operator() {
        assert_eq!(
            locate_main_operator(&chars("p⊃q")),
            Ok((BinaryOp::Implication, 1))
        );
        assert_eq!(
            locate_main_operator(&chars("(p∧q)∨(p∧r)")),
            Ok((BinaryOp::Disjunction, 5))
        );
    }

    #[test]
    fn test_no_operator_at_depth_zero() {
        assert!(matches!(
            locate_main_operator(&chars("(p∧q)")),
            Err(ParseError::NoOuterOperator(_))
        ));
        assert!(matches!(
            locate_main_operator(&chars("pq")),
            Err(ParseError::NoOuterOperator(_))
        ));
    }

    #[test]
    fn test_leftmost_wins() {
        assert_eq!(
            locate_main_operator(&chars("p∧q∨r")),
            Ok((BinaryOp::Conjunction, 1))
        );
    }
}
