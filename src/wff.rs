//! The well-formed-formula wrapper: a parsed sentence together with its
//! normalized source, its atomics, and (once tabulated) its main column.

use std::collections::HashSet;
use std::fmt;

use num_bigint::BigUint;

use crate::dot;
use crate::parse::{parse, ParseError};
use crate::table::{Classification, TruthTable};
use crate::tree::WffNode;

/// A sentence of propositional logic, parsed.
///
/// Construction normalizes, validates, and parses in one step, and
/// discovers the distinct atomics on the way. Their canonical ordering
/// and the table's main column are populated by the explicit follow-up
/// calls [`find_atomics`](Wff::find_atomics) and
/// [`make_table`](Wff::make_table).
#[derive(Debug, Clone)]
pub struct Wff {
    source: String,
    root: Option<WffNode>,
    atomics: HashSet<char>,
    atomics_ordered: Vec<char>,
    main_column: Option<Vec<bool>>,
}

impl Wff {
    /// Parse `input` into a wff.
    ///
    /// The empty (post-whitespace-stripping) input is the one
    /// unaccepted-but-not-rejected case: it yields an empty wff with
    /// `accepted() == false` rather than an error. Every other failure is
    /// returned as the specific [`ParseError`].
    ///
    /// # Examples
    ///
    /// ```
    /// use wff_rs::wff::Wff;
    ///
    /// let f = Wff::new("p ∨ ¬p").unwrap();
    /// assert!(f.accepted());
    /// assert_eq!(f.source(), "p∨¬p");
    ///
    /// let empty = Wff::new("").unwrap();
    /// assert!(!empty.accepted());
    /// assert!(empty.is_empty());
    /// ```
    pub fn new(input: &str) -> Result<Self, ParseError> {
        let source: String = input.chars().filter(|c| !c.is_whitespace()).collect();

        let root = match parse(&source) {
            Ok(root) => Some(root),
            Err(ParseError::EmptyFormula) => None,
            Err(err) => return Err(err),
        };

        let atomics = root.as_ref().map(WffNode::atomics).unwrap_or_default();

        Ok(Wff {
            source,
            root,
            atomics,
            atomics_ordered: Vec::new(),
            main_column: None,
        })
    }

    /// Whether the input was accepted: a tree exists and is well formed.
    pub fn accepted(&self) -> bool {
        self.root.as_ref().map_or(false, WffNode::well_formed)
    }

    /// Whether the input was empty once whitespace was stripped.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The normalized (whitespace-stripped) source string.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parse tree, present for every non-empty input.
    pub fn root(&self) -> Option<&WffNode> {
        self.root.as_ref()
    }

    /// The distinct atomics as discovered, unordered.
    pub fn atomic_set(&self) -> &HashSet<char> {
        &self.atomics
    }

    /// Sort the distinct atomics into their canonical ascending order and
    /// return them. Idempotent. The ordering is both the left-header
    /// order of the table and the bit-significance order of the row
    /// enumeration, so callers wanting either go through here first.
    pub fn find_atomics(&mut self) -> &[char] {
        if self.atomics_ordered.is_empty() && !self.atomics.is_empty() {
            let mut ordered: Vec<char> = self.atomics.iter().copied().collect();
            ordered.sort_unstable();
            self.atomics_ordered = ordered;
        }
        &self.atomics_ordered
    }

    /// The canonically ordered atomics; empty until
    /// [`find_atomics`](Wff::find_atomics) or
    /// [`make_table`](Wff::make_table) has run.
    pub fn atomics_ordered(&self) -> &[char] {
        &self.atomics_ordered
    }

    /// How many rows a truth table for this formula has: `2^k` over the
    /// `k` distinct atomics.
    ///
    /// Row counts grow combinatorially; callers wanting a ceiling check
    /// this before [`make_table`](Wff::make_table).
    pub fn row_count(&self) -> BigUint {
        BigUint::from(2u32).pow(self.atomics.len() as u32)
    }

    /// Build the complete truth table, keeping the main column for the
    /// classification queries.
    ///
    /// # Panics
    ///
    /// Panics on an empty wff; tabulation assumes an accepted parse.
    pub fn make_table(&mut self) -> TruthTable {
        self.find_atomics();
        let root = self
            .root
            .as_ref()
            .unwrap_or_else(|| panic!("cannot build a truth table for an empty formula"));
        let table = TruthTable::build(root, &self.source);
        self.main_column = Some(table.main_column().to_vec());
        table
    }

    /// Classify the formula over the stored main column.
    ///
    /// # Panics
    ///
    /// Panics unless [`make_table`](Wff::make_table) has been called.
    pub fn classification(&self) -> Classification {
        let main = self
            .main_column
            .as_ref()
            .unwrap_or_else(|| panic!("make_table must run before classification queries"));
        Classification::of(main)
    }

    /// Whether every row of the table evaluates true.
    ///
    /// # Panics
    ///
    /// Panics unless [`make_table`](Wff::make_table) has been called.
    pub fn is_tautology(&self) -> bool {
        self.classification() == Classification::Tautology
    }

    /// Whether every row of the table evaluates false.
    ///
    /// # Panics
    ///
    /// Panics unless [`make_table`](Wff::make_table) has been called.
    pub fn is_contradiction(&self) -> bool {
        self.classification() == Classification::Contradiction
    }

    /// Whether the table mixes true and false rows.
    ///
    /// # Panics
    ///
    /// Panics unless [`make_table`](Wff::make_table) has been called.
    pub fn is_contingent(&self) -> bool {
        self.classification() == Classification::Contingent
    }

    /// DOT (Graphviz) rendering of the parse tree.
    ///
    /// # Panics
    ///
    /// Panics on an empty wff.
    pub fn to_dot(&self) -> Result<String, fmt::Error> {
        let root = self
            .root
            .as_ref()
            .unwrap_or_else(|| panic!("cannot draw an empty formula"));
        dot::to_dot(root)
    }
}

impl fmt::Display for Wff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => write!(f, "wff: {}", root),
            None => write!(f, "wff:"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted() {
        for input in ["a", "p", "p⊃q", "¬(p⊃q)", "((p⊃q)⊃r)⊃(∼t⊃q)"] {
            let f = Wff::new(input).unwrap();
            assert!(f.accepted(), "'{}' should be accepted", input);
            assert!(!f.is_empty());
        }
    }

    #[test]
    fn test_empty_is_distinguished() {
        let f = Wff::new("  ").unwrap();
        assert!(f.is_empty());
        assert!(!f.accepted());
        assert_eq!(f.source(), "");
        assert!(f.root().is_none());
        assert!(f.atomic_set().is_empty());
    }

    #[test]
    fn test_rejection_propagates() {
        assert!(matches!(
            Wff::new("p⊃Q"),
            Err(ParseError::RejectedSymbol('Q'))
        ));
        assert!(matches!(Wff::new("()"), Err(ParseError::DegenerateParens(_))));
    }

    #[test]
    fn test_atomics_lifecycle() {
        let mut f = Wff::new("(q∧p)⊃q").unwrap();
        assert_eq!(f.atomic_set().len(), 2);
        assert!(f.atomics_ordered().is_empty());
        assert_eq!(f.find_atomics(), ['p', 'q']);
        assert_eq!(f.atomics_ordered(), ['p', 'q']);
        // Idempotent.
        assert_eq!(f.find_atomics(), ['p', 'q']);
    }

    #[test]
    fn test_row_count() {
        let f = Wff::new("(a∧b)∨(c∧d)").unwrap();
        assert_eq!(f.row_count(), BigUint::from(16u32));
        assert_eq!(Wff::new("").unwrap().row_count(), BigUint::from(1u32));
    }

    #[test]
    fn test_table_then_classification() {
        let mut f = Wff::new("p∨¬p").unwrap();
        let table = f.make_table();
        assert_eq!(table.rows().len(), 2);
        assert!(f.is_tautology());
        assert!(!f.is_contradiction());
        assert!(!f.is_contingent());
    }

    #[test]
    #[should_panic(expected = "make_table")]
    fn test_classification_requires_table() {
        let f = Wff::new("p").unwrap();
        f.is_tautology();
    }

    #[test]
    #[should_panic(expected = "empty formula")]
    fn test_table_of_empty_panics() {
        let mut f = Wff::new("").unwrap();
        f.make_table();
    }

    #[test]
    fn test_display_prefix() {
        let f = Wff::new(" p ⊃ q ").unwrap();
        assert_eq!(f.to_string(), "wff: (p⊃q)");
        assert_eq!(Wff::new("¬a").unwrap().to_string(), "wff: ¬a");
    }
}
