//! The fixed symbol alphabet and its partition into operator families.
//!
//! Every accepted character is an atomic letter, a negation glyph, a
//! binary-operator glyph, or a parenthesis. Binary glyphs fall into four
//! semantic families; synonym glyphs within a family denote the same
//! operator and collapse to one canonical glyph when rendering, so nothing
//! past classification ever branches on an individual synonym.

use std::fmt;

/// Atomic sentence letters.
///
/// All lowercase ASCII letters except `v`, which is reserved as a
/// disjunction glyph. Do not "fix" the omission: admitting `v` as an atomic
/// would change which strings the grammar accepts.
pub const ATOMICS: &str = "abcdefghijklmnopqrstuwxyz";

/// Negation glyphs, all synonymous.
pub const NEGATION: [char; 4] = ['¬', '˜', '!', '∼'];

/// Implication glyphs, all synonymous.
pub const IMPLICATION: [char; 3] = ['⇒', '→', '⊃'];

/// Equivalence glyphs, all synonymous.
pub const EQUIVALENCE: [char; 3] = ['⇔', '≡', '↔'];

/// Conjunction glyphs, all synonymous.
pub const CONJUNCTION: [char; 3] = ['∧', '·', '&'];

/// Disjunction glyphs, all synonymous. The letter-shaped `v` is the reason
/// it is missing from [`ATOMICS`].
pub const DISJUNCTION: [char; 4] = ['∨', '+', '∥', 'v'];

/// The unary operator families. There is exactly one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UnaryOp {
    Negation,
}

impl UnaryOp {
    /// The glyph used when rendering canonically.
    pub const fn glyph(self) -> char {
        match self {
            UnaryOp::Negation => '¬',
        }
    }

    /// The family's truth function.
    pub const fn apply(self, operand: bool) -> bool {
        match self {
            UnaryOp::Negation => !operand,
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// The binary operator families.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    Implication,
    Equivalence,
    Conjunction,
    Disjunction,
}

impl BinaryOp {
    /// The glyph used when rendering canonically.
    pub const fn glyph(self) -> char {
        match self {
            BinaryOp::Implication => '⊃',
            BinaryOp::Equivalence => '≡',
            BinaryOp::Conjunction => '∧',
            BinaryOp::Disjunction => '∨',
        }
    }

    /// The family's truth function on `(left, right)`.
    pub const fn apply(self, left: bool, right: bool) -> bool {
        match self {
            BinaryOp::Implication => !left || right,
            BinaryOp::Equivalence => left == right,
            BinaryOp::Conjunction => left && right,
            BinaryOp::Disjunction => left || right,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A classified input character.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Symbol {
    /// An atomic sentence letter.
    Atomic(char),
    /// A glyph of the one unary family.
    Unary(UnaryOp),
    /// A glyph of one of the four binary families.
    Binary(BinaryOp),
    /// An opening parenthesis.
    Open,
    /// A closing parenthesis.
    Close,
}

/// Classify a character, or `None` for a character outside the alphabet.
///
/// Classification is total: it never fails, it only sorts characters into
/// their class. [`is_valid`] is the union of the classes.
pub fn classify(c: char) -> Option<Symbol> {
    if ATOMICS.contains(c) {
        return Some(Symbol::Atomic(c));
    }
    if let Some(op) = unary_family(c) {
        return Some(Symbol::Unary(op));
    }
    if let Some(op) = binary_family(c) {
        return Some(Symbol::Binary(op));
    }
    match c {
        '(' => Some(Symbol::Open),
        ')' => Some(Symbol::Close),
        _ => None,
    }
}

/// Resolve a glyph to its unary family, independent of which synonym was
/// used.
pub fn unary_family(c: char) -> Option<UnaryOp> {
    if NEGATION.contains(&c) {
        Some(UnaryOp::Negation)
    } else {
        None
    }
}

/// Resolve a glyph to its binary family, independent of which synonym was
/// used.
pub fn binary_family(c: char) -> Option<BinaryOp> {
    if IMPLICATION.contains(&c) {
        Some(BinaryOp::Implication)
    } else if EQUIVALENCE.contains(&c) {
        Some(BinaryOp::Equivalence)
    } else if CONJUNCTION.contains(&c) {
        Some(BinaryOp::Conjunction)
    } else if DISJUNCTION.contains(&c) {
        Some(BinaryOp::Disjunction)
    } else {
        None
    }
}

/// Whether `c` is an atomic sentence letter.
pub fn is_atomic(c: char) -> bool {
    ATOMICS.contains(c)
}

/// Whether `c` is a unary-operator glyph.
pub fn is_unary(c: char) -> bool {
    unary_family(c).is_some()
}

/// Whether `c` is a binary-operator glyph.
pub fn is_binary(c: char) -> bool {
    binary_family(c).is_some()
}

/// Whether `c` is a parenthesis.
pub fn is_punctuation(c: char) -> bool {
    c == '(' || c == ')'
}

/// Whether `c` belongs to the alphabet at all.
pub fn is_valid(c: char) -> bool {
    classify(c).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomics_exclude_v() {
        assert!(!is_atomic('v'));
        assert!(is_binary('v'));
        assert_eq!(binary_family('v'), Some(BinaryOp::Disjunction));
        for c in 'a'..='z' {
            if c != 'v' {
                assert!(is_atomic(c), "'{}' should be an atomic", c);
            }
        }
        assert_eq!(ATOMICS.chars().count(), 25);
    }

    #[test]
    fn test_synonyms_share_a_family() {
        for c in NEGATION {
            assert_eq!(unary_family(c), Some(UnaryOp::Negation));
        }
        for c in IMPLICATION {
            assert_eq!(binary_family(c), Some(BinaryOp::Implication));
        }
        for c in EQUIVALENCE {
            assert_eq!(binary_family(c), Some(BinaryOp::Equivalence));
        }
        for c in CONJUNCTION {
            assert_eq!(binary_family(c), Some(BinaryOp::Conjunction));
        }
        for c in DISJUNCTION {
            assert_eq!(binary_family(c), Some(BinaryOp::Disjunction));
        }
    }

    #[test]
    fn test_classify_is_total() {
        assert_eq!(classify('p'), Some(Symbol::Atomic('p')));
        assert_eq!(classify('¬'), Some(Symbol::Unary(UnaryOp::Negation)));
        assert_eq!(classify('⊃'), Some(Symbol::Binary(BinaryOp::Implication)));
        assert_eq!(classify('('), Some(Symbol::Open));
        assert_eq!(classify(')'), Some(Symbol::Close));

        assert_eq!(classify('A'), None);
        assert_eq!(classify(' '), None);
        assert_eq!(classify('7'), None);
        assert!(!is_valid('?'));
    }

    #[test]
    fn test_punctuation() {
        assert!(is_punctuation('('));
        assert!(is_punctuation(')'));
        assert!(!is_punctuation('['));
    }

    #[test]
    fn test_truth_functions() {
        assert!(BinaryOp::Implication.apply(true, true));
        assert!(!BinaryOp::Implication.apply(true, false));
        assert!(BinaryOp::Implication.apply(false, true));
        assert!(BinaryOp::Implication.apply(false, false));

        assert!(BinaryOp::Equivalence.apply(true, true));
        assert!(!BinaryOp::Equivalence.apply(true, false));
        assert!(!BinaryOp::Equivalence.apply(false, true));
        assert!(BinaryOp::Equivalence.apply(false, false));

        assert!(BinaryOp::Conjunction.apply(true, true));
        assert!(!BinaryOp::Conjunction.apply(true, false));

        assert!(BinaryOp::Disjunction.apply(false, true));
        assert!(!BinaryOp::Disjunction.apply(false, false));

        assert!(UnaryOp::Negation.apply(false));
        assert!(!UnaryOp::Negation.apply(true));
    }

    #[test]
    fn test_canonical_glyphs_belong_to_their_family() {
        assert!(NEGATION.contains(&UnaryOp::Negation.glyph()));
        assert!(IMPLICATION.contains(&BinaryOp::Implication.glyph()));
        assert!(EQUIVALENCE.contains(&BinaryOp::Equivalence.glyph()));
        assert!(CONJUNCTION.contains(&BinaryOp::Conjunction.glyph()));
        assert!(DISJUNCTION.contains(&BinaryOp::Disjunction.glyph()));
    }
}
