//! Exhaustive truth tables.
//!
//! The builder enumerates every assignment over a formula's distinct
//! atomics, evaluates the tree per row, and lays each row's evaluation
//! trace out against a tokenization of the source string, so the table's
//! right-hand columns line up with the glyphs of the formula itself.

use std::fmt;
use std::mem;

use log::debug;
use num_bigint::BigUint;

use crate::eval::{evaluate, Assignment};
use crate::tree::WffNode;

/// Classification of a formula by its completed main column.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Classification {
    /// True in every row.
    Tautology,
    /// False in every row.
    Contradiction,
    /// True in some rows and false in others.
    Contingent,
}

impl Classification {
    /// Classify a completed main column. The three classes are mutually
    /// exclusive and exhaustive over any non-empty column.
    pub fn of(column: &[bool]) -> Self {
        if column.iter().all(|&value| value) {
            Classification::Tautology
        } else if column.iter().all(|&value| !value) {
            Classification::Contradiction
        } else {
            Classification::Contingent
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Tautology => write!(f, "tautology"),
            Classification::Contradiction => write!(f, "contradiction"),
            Classification::Contingent => write!(f, "contingent"),
        }
    }
}

/// A complete truth table: `2^k` rows by `k + m` columns, where `k` counts
/// the distinct atomics and `m` the glyph tokens of the source string.
#[derive(Debug, Clone)]
pub struct TruthTable {
    atomics: Vec<char>,
    tokens: Vec<String>,
    rows: Vec<Vec<bool>>,
    main: Vec<bool>,
    main_index: usize,
}

impl TruthTable {
    /// Build the table for `root`, whose normalized source string is
    /// `source`. The string only shapes the right-hand header; its glyphs
    /// must be those of `root`, which holds for any parsed formula.
    ///
    /// Rows follow the descending binary countdown: row 0 assigns 1
    /// everywhere, the lexicographically first atomic varies slowest, and
    /// each atomic cycles 1-then-0 within its block.
    pub fn build(root: &WffNode, source: &str) -> Self {
        let mut atomics: Vec<char> = root.atomics().into_iter().collect();
        atomics.sort_unstable();
        let k = atomics.len();

        let tokens = tokenize(source);
        debug_assert_eq!(tokens.len(), root.glyph_count());

        let row_count = 1usize << k;
        let mut rows = Vec::with_capacity(row_count);
        let mut main = Vec::with_capacity(row_count);

        for i in 0..row_count {
            let assignment: Assignment = atomics
                .iter()
                .enumerate()
                .map(|(j, &atomic)| (atomic, ((i >> (k - 1 - j)) & 1) == 0))
                .collect();

            let (value, trace) = evaluate(root, &assignment);

            let mut row = Vec::with_capacity(k + tokens.len());
            row.extend(atomics.iter().map(|a| assignment[a]));
            row.extend(trace.chars().map(|c| c == '1'));
            rows.push(row);
            main.push(value);
        }

        let main_index = match root {
            WffNode::Leaf(_) | WffNode::Unary(_, _) => 0,
            WffNode::Binary(_, left, _) => left.glyph_count(),
        };

        debug!(
            "table over {:?}: {} rows, {} trace columns, main at {}",
            atomics,
            row_count,
            tokens.len(),
            main_index
        );

        TruthTable {
            atomics,
            tokens,
            rows,
            main,
            main_index,
        }
    }

    /// Left header: the distinct atomics in ascending order, which is also
    /// the bit-significance order of the row enumeration.
    pub fn atomics(&self) -> &[char] {
        &self.atomics
    }

    /// Right header: the source string split into one-glyph tokens;
    /// concatenated they reproduce the source exactly.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// All rows, assignment block first, trace block second.
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// The formula's value per row.
    pub fn main_column(&self) -> &[bool] {
        &self.main
    }

    /// Which trace column (0-based within the right block) carries the
    /// formula's own value: the position of the root's glyph.
    pub fn main_index(&self) -> usize {
        self.main_index
    }

    /// Number of satisfying rows.
    pub fn models(&self) -> BigUint {
        let count = self.main.iter().filter(|&&value| value).count();
        BigUint::from(count)
    }

    /// Classify the formula over the completed main column.
    pub fn classification(&self) -> Classification {
        Classification::of(&self.main)
    }
}

/// Split the source string into tokens of exactly one atomic or operator
/// glyph each: a trailing `)` run attaches to the previous token, a
/// leading `(` run to the next. Concatenating the tokens reproduces the
/// string.
pub(crate) fn tokenize(source: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut pending = String::new();

    for c in source.chars() {
        match c {
            '(' => pending.push(c),
            ')' => match tokens.last_mut() {
                Some(last) => last.push(c),
                None => pending.push(c),
            },
            _ => {
                pending.push(c);
                tokens.push(mem::take(&mut pending));
            }
        }
    }
    if !pending.is_empty() {
        match tokens.last_mut() {
            Some(last) => last.push_str(&pending),
            None => tokens.push(pending),
        }
    }
    tokens
}
