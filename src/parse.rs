//! Recursive-descent parsing of fully-parenthesized propositional
//! sentences.
//!
//! There is no token stream: the parser recurses directly over character
//! positions, using the depth scanner to strip redundant parentheses and
//! to find the outer operator of a binary form.

use std::error::Error;
use std::fmt;

use log::debug;

use crate::alphabet::{is_atomic, is_valid, unary_family};
use crate::scan::{locate_main_operator, outer_parens_removable};
use crate::tree::WffNode;

/// Why a string failed to parse.
///
/// Every variant aborts the enclosing parse immediately; malformed input
/// is never repaired. `EmptyFormula` is the distinguished case for a
/// zero-length (post-whitespace-stripping) input: unaccepted, but callers
/// that treat emptiness as ordinary (as [`Wff::new`] does) can match on it
/// rather than on a rejection.
///
/// [`Wff::new`]: crate::wff::Wff::new
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty once whitespace was stripped.
    EmptyFormula,
    /// A character outside the alphabet.
    RejectedSymbol(char),
    /// An outer parenthesis pair too short to wrap a legal subformula.
    DegenerateParens(String),
    /// A length-1 residual string that is not an atomic letter.
    NotAnAtomic(char),
    /// No depth-0 binary glyph where a binary form was expected.
    NoOuterOperator(String),
    /// The outer operator sits at the very start or end, leaving an
    /// operand empty.
    MalformedSplit(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyFormula => write!(f, "empty formula"),
            ParseError::RejectedSymbol(c) => write!(f, "rejected symbol '{}'", c),
            ParseError::DegenerateParens(s) => write!(f, "'{}' cannot wrap a subformula", s),
            ParseError::NotAnAtomic(c) => write!(f, "'{}' is not an atomic", c),
            ParseError::NoOuterOperator(s) => write!(f, "'{}' has no outer operator", s),
            ParseError::MalformedSplit(s) => write!(f, "'{}' leaves an operand empty", s),
        }
    }
}

impl Error for ParseError {}

/// Parse a sentence of propositional logic into its tree.
///
/// Whitespace is insignificant and stripped first; every remaining
/// character must belong to the alphabet. The grammar wants every binary
/// subformula parenthesized, but input that leaves several operators at
/// depth 0 is not rejected: the split happens at the leftmost one, so
/// `p∧q∨r` parses as `(p∧(q∨r))`.
///
/// # Errors
///
/// See [`ParseError`]; the first failure wins.
///
/// # Examples
///
/// ```
/// use wff_rs::parse::parse;
///
/// let tree = parse("¬(p ⊃ q)").unwrap();
/// assert_eq!(tree.to_string(), "¬(p⊃q)");
/// ```
pub fn parse(input: &str) -> Result<WffNode, ParseError> {
    // Spaces carry no syntactic or semantic weight.
    let chars: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.is_empty() {
        return Err(ParseError::EmptyFormula);
    }

    // One symbol outside the alphabet rejects the whole input.
    if let Some(&bad) = chars.iter().find(|&&c| !is_valid(c)) {
        return Err(ParseError::RejectedSymbol(bad));
    }

    debug!("parse(\"{}\")", chars.iter().collect::<String>());
    parse_node(&chars)
}

/// One recursive step over a validated, non-empty slice.
fn parse_node(chars: &[char]) -> Result<WffNode, ParseError> {
    // A redundant enclosing pair is stripped and the interior re-examined
    // from the top.
    if outer_parens_removable(chars)? {
        return parse_node(&chars[1..chars.len() - 1]);
    }

    // Base case: a single atomic letter.
    if chars.len() == 1 {
        return if is_atomic(chars[0]) {
            Ok(WffNode::Leaf(chars[0]))
        } else {
            Err(ParseError::NotAnAtomic(chars[0]))
        };
    }

    // Prefix unary operator over the remainder.
    if let Some(op) = unary_family(chars[0]) {
        let operand = parse_node(&chars[1..])?;
        return Ok(WffNode::Unary(op, Box::new(operand)));
    }

    // Binary form: split at the depth-0 operator.
    let (op, index) = locate_main_operator(chars)?;
    if index == 0 || index + 1 >= chars.len() {
        return Err(ParseError::MalformedSplit(chars.iter().collect()));
    }
    debug!("split {:?} at {}", op, index);
    let left = parse_node(&chars[..index])?;
    let right = parse_node(&chars[index + 1..])?;
    Ok(WffNode::Binary(op, Box::new(left), Box::new(right)))
}
