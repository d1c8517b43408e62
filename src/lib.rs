//! A bounded rewrite-search prover for propositional logic equivalence.
//!
//! The pipeline: free-form text is tokenized ([`token::tokenize`]),
//! re-bracketed so precedence is explicit ([`paren::parenthesize`]), and
//! [`parse`]d into an [`Expr`] tree. From there, [`evaluate`] checks a
//! single assignment, [`TruthTable::build`] checks every assignment at
//! once, and [`find_proof`] searches for a chain of equivalence-preserving
//! rewrites (see [`rules`]) connecting two expressions.
//!
//! Four entry points cover everything a caller needs: [`parse`],
//! [`evaluate`], [`TruthTable::build`], and [`find_proof`]. There is no
//! CLI and no wire protocol here — callers embed this crate directly.

pub mod ast;
pub mod driver;
pub mod error;
pub mod eval;
pub mod paren;
pub mod parser;
pub mod rules;
pub mod search;
pub mod token;
pub mod truth_table;

pub use ast::{BinOp, Expr};
pub use error::{EvalError, ParseError, RuleViolation, TruthTableError};
pub use eval::{evaluate, Assignment};
pub use parser::parse;
pub use rules::{Rule, RuleCategory};
pub use search::{find_proof, Proof, ProofStep, SearchOptions, SearchOutcome};
pub use truth_table::{equivalent, Analysis, TruthTable};
