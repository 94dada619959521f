//! # wff-rs: propositional logic sentences in Rust
//!
//! **`wff-rs`** parses sentences of propositional logic written in a
//! fully-parenthesized grammar, and derives two artifacts from the parse
//! tree: a canonical rendering and a complete truth table with
//! tautology / contradiction / contingency classification.
//!
//! ## The grammar
//!
//! - Atomics are single lowercase letters, with `v` excluded: it is a
//!   disjunction glyph.
//! - Negation is a prefix operator (`¬p`, `!p`, `∼p`). Implication,
//!   equivalence, conjunction, and disjunction each accept several
//!   synonym glyphs (`⊃`/`→`/`⇒`, `≡`/`↔`/`⇔`, `∧`/`·`/`&`,
//!   `∨`/`+`/`∥`/`v`).
//! - Every binary subformula is parenthesized: `¬(p⊃q)`, `(a∧b)∨c`.
//! - Whitespace is insignificant.
//!
//! There is no precedence table and no token stream: parsing is a direct
//! recursive descent over character positions with a parenthesis depth
//! counter.
//!
//! ## Quick Start
//!
//! ```rust
//! use wff_rs::wff::Wff;
//!
//! // 1. Parse. Whitespace is stripped; bad symbols are rejected.
//! let mut f = Wff::new("p ∨ ¬p").unwrap();
//! assert!(f.accepted());
//!
//! // 2. Tabulate: 2^k rows over the sorted distinct atomics.
//! let table = f.make_table();
//! assert_eq!(table.rows().len(), 2);
//!
//! // 3. Classify over the completed main column.
//! assert!(f.is_tautology());
//! ```
//!
//! ## Core Components
//!
//! - **[`alphabet`]**: the fixed symbol alphabet and the operator
//!   families.
//! - **[`scan`]**: depth-aware scanning for outer parentheses and the
//!   outer operator.
//! - **[`parse`]**: recursive-descent parsing into a [`tree::WffNode`].
//! - **[`eval`]**: per-assignment evaluation with a positional trace.
//! - **[`table`]**: exhaustive truth tables and classification.
//! - **[`wff`]**: the [`Wff`][crate::wff::Wff] wrapper tying source,
//!   tree, and table together.
//! - **[`dot`]**: parse-tree visualization using Graphviz.

pub mod alphabet;
pub mod dot;
pub mod eval;
pub mod parse;
pub mod scan;
pub mod table;
pub mod tree;
pub mod wff;
