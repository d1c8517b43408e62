//! The rewrite rule catalogue (spec §4.6): ~30 equivalence-preserving
//! rules, each a `(name, category, description, can_apply, apply)` tuple.
//! `apply` is a partial function — calling it where `can_apply` is false
//! is the contract violation [`RuleViolation`] models; [`Rule::apply`]
//! checks the guard itself so callers cannot skip it by accident.
//!
//! All matching here is structural (via [`Expr::structurally_equals`]),
//! never semantic — two expressions that merely evaluate the same way are
//! not "the same operand" for a rule's purposes.

use std::fmt;

use crate::ast::{BinOp, Expr};
use crate::error::RuleViolation;

/// The grouping tag the host UI uses to cluster rules, and the word that
/// appears after "by" in rendered proof steps (spec §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum RuleCategory {
    CommAssoc,
    Neg,
    Lem,
    Contr,
    Dm,
    Impl,
    Distr,
    Contrapos,
    Idemp,
    Equiv,
    Simp1,
    Simp2,
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RuleCategory::CommAssoc => "comm_assoc",
            RuleCategory::Neg => "neg",
            RuleCategory::Lem => "lem",
            RuleCategory::Contr => "contr",
            RuleCategory::Dm => "dm",
            RuleCategory::Impl => "impl",
            RuleCategory::Distr => "distr",
            RuleCategory::Contrapos => "contrapos",
            RuleCategory::Idemp => "idemp",
            RuleCategory::Equiv => "equiv",
            RuleCategory::Simp1 => "simp1",
            RuleCategory::Simp2 => "simp2",
        };
        write!(f, "{}", s)
    }
}

type ApplyFn = fn(&Expr) -> Expr;
type CanApplyFn = fn(&Expr) -> bool;

/// One named equivalence rule. Rules act only at the root of the
/// expression handed to them — finding a suitable subexpression elsewhere
/// in a larger tree is [`crate::driver`]'s job, not the rule's.
pub struct Rule {
    pub name: &'static str,
    pub category: RuleCategory,
    pub description: &'static str,
    can_apply_fn: CanApplyFn,
    apply_fn: ApplyFn,
}

impl Rule {
    pub fn can_apply(&self, e: &Expr) -> bool {
        (self.can_apply_fn)(e)
    }

    /// Apply this rule at the root of `e`. Returns [`RuleViolation`] rather
    /// than panicking if `can_apply(e)` does not hold, so the rewrite
    /// driver can treat the occurrence as recoverable (spec §7).
    pub fn apply(&self, e: &Expr) -> Result<Expr, RuleViolation> {
        if !self.can_apply(e) {
            return Err(RuleViolation { rule: self.name });
        }
        Ok((self.apply_fn)(e))
    }

    /// The full catalogue, in the canonical order of spec §4.6. Proof
    /// search and the rewrite driver default to this order when the
    /// caller supplies none of their own — it is what the determinism
    /// property (spec §8) is tested against.
    pub fn catalogue() -> Vec<Rule> {
        vec![
            Rule { name: "CommutativityAnd", category: RuleCategory::CommAssoc, description: "a & b  <=>  b & a", can_apply_fn: comm_and_can, apply_fn: comm_and_apply },
            Rule { name: "CommutativityOr", category: RuleCategory::CommAssoc, description: "a | b  <=>  b | a", can_apply_fn: comm_or_can, apply_fn: comm_or_apply },
            Rule { name: "CommutativityIff", category: RuleCategory::CommAssoc, description: "a <=> b  <=>  b <=> a", can_apply_fn: comm_iff_can, apply_fn: comm_iff_apply },
            Rule { name: "AssociativitySwapAnd", category: RuleCategory::CommAssoc, description: "(a & b) & c  <=>  b & (a & c)", can_apply_fn: assoc_and_can, apply_fn: assoc_and_apply },
            Rule { name: "AssociativitySwapOr", category: RuleCategory::CommAssoc, description: "(a | b) | c  <=>  b | (a | c)", can_apply_fn: assoc_or_can, apply_fn: assoc_or_apply },
            Rule { name: "DoubleNegation", category: RuleCategory::Neg, description: "!!a  <=>  a", can_apply_fn: double_neg_can, apply_fn: double_neg_apply },
            Rule { name: "ExcludedMiddle", category: RuleCategory::Lem, description: "a | !a  <=>  true", can_apply_fn: excluded_middle_can, apply_fn: excluded_middle_apply },
            Rule { name: "Contradiction", category: RuleCategory::Contr, description: "a & !a  <=>  false", can_apply_fn: contradiction_can, apply_fn: contradiction_apply },
            Rule { name: "DeMorganAnd", category: RuleCategory::Dm, description: "!(a & b)  <=>  !a | !b", can_apply_fn: de_morgan_and_can, apply_fn: de_morgan_and_apply },
            Rule { name: "DeMorganOr", category: RuleCategory::Dm, description: "!(a | b)  <=>  !a & !b", can_apply_fn: de_morgan_or_can, apply_fn: de_morgan_or_apply },
            Rule { name: "DeMorganAndReverse", category: RuleCategory::Dm, description: "!a | !b  <=>  !(a & b)", can_apply_fn: de_morgan_and_rev_can, apply_fn: de_morgan_and_rev_apply },
            Rule { name: "DeMorganOrReverse", category: RuleCategory::Dm, description: "!a & !b  <=>  !(a | b)", can_apply_fn: de_morgan_or_rev_can, apply_fn: de_morgan_or_rev_apply },
            Rule { name: "ImplicationElimination", category: RuleCategory::Impl, description: "a => b  <=>  !a | b", can_apply_fn: impl_elim_can, apply_fn: impl_elim_apply },
            Rule { name: "ImplicationEliminationReverse", category: RuleCategory::Impl, description: "!a | b  <=>  a => b", can_apply_fn: impl_elim_rev_can, apply_fn: impl_elim_rev_apply },
            Rule { name: "Contrapositive", category: RuleCategory::Contrapos, description: "a => b  <=>  !b => !a", can_apply_fn: contrapositive_can, apply_fn: contrapositive_apply },
            Rule { name: "DistributivityAndOverOr", category: RuleCategory::Distr, description: "a & (b | c)  <=>  (a & b) | (a & c)", can_apply_fn: distr_and_over_or_can, apply_fn: distr_and_over_or_apply },
            Rule { name: "DistributivityOrOverAnd", category: RuleCategory::Distr, description: "a | (b & c)  <=>  (a | b) & (a | c)", can_apply_fn: distr_or_over_and_can, apply_fn: distr_or_over_and_apply },
            Rule { name: "DistributivityReverseAnd", category: RuleCategory::Distr, description: "(a & b) | (a & c)  <=>  a & (b | c)", can_apply_fn: distr_rev_and_can, apply_fn: distr_rev_and_apply },
            Rule { name: "DistributivityReverseOr", category: RuleCategory::Distr, description: "(a | b) & (a | c)  <=>  a | (b & c)", can_apply_fn: distr_rev_or_can, apply_fn: distr_rev_or_apply },
            Rule { name: "IdempotenceAnd", category: RuleCategory::Idemp, description: "a & a  <=>  a", can_apply_fn: idemp_and_can, apply_fn: idemp_and_apply },
            Rule { name: "IdempotenceOr", category: RuleCategory::Idemp, description: "a | a  <=>  a", can_apply_fn: idemp_or_can, apply_fn: idemp_or_apply },
            Rule { name: "IdempotenceReverseAnd", category: RuleCategory::Idemp, description: "a  <=>  a & a", can_apply_fn: idemp_rev_and_can, apply_fn: idemp_rev_and_apply },
            Rule { name: "IdempotenceReverseOr", category: RuleCategory::Idemp, description: "a  <=>  a | a", can_apply_fn: idemp_rev_or_can, apply_fn: idemp_rev_or_apply },
            Rule { name: "Equivalence", category: RuleCategory::Equiv, description: "a <=> b  <=>  (a => b) & (b => a)", can_apply_fn: equiv_can, apply_fn: equiv_apply },
            Rule { name: "EquivalenceReverse", category: RuleCategory::Equiv, description: "(a => b) & (b => a)  <=>  a <=> b", can_apply_fn: equiv_rev_can, apply_fn: equiv_rev_apply },
            Rule { name: "SimplifyAndTrue", category: RuleCategory::Simp1, description: "a & true  <=>  a", can_apply_fn: simplify_and_true_can, apply_fn: simplify_and_true_apply },
            Rule { name: "SimplifyOrFalse", category: RuleCategory::Simp1, description: "a | false  <=>  a", can_apply_fn: simplify_or_false_can, apply_fn: simplify_or_false_apply },
            Rule { name: "SimplifyOrTrue", category: RuleCategory::Simp1, description: "a | true  <=>  true", can_apply_fn: simplify_or_true_can, apply_fn: simplify_or_true_apply },
            Rule { name: "SimplifyAndFalse", category: RuleCategory::Simp1, description: "a & false  <=>  false", can_apply_fn: simplify_and_false_can, apply_fn: simplify_and_false_apply },
            Rule { name: "Simp1ReverseAnd", category: RuleCategory::Simp1, description: "a  <=>  a & true", can_apply_fn: simp1_rev_and_can, apply_fn: simp1_rev_and_apply },
            Rule { name: "Simp1ReverseOr", category: RuleCategory::Simp1, description: "a  <=>  a | false", can_apply_fn: simp1_rev_or_can, apply_fn: simp1_rev_or_apply },
            Rule { name: "AbsorptionOrAnd", category: RuleCategory::Simp2, description: "a | (a & b)  <=>  a", can_apply_fn: absorption_or_and_can, apply_fn: absorption_or_and_apply },
            Rule { name: "AbsorptionAndOr", category: RuleCategory::Simp2, description: "a & (a | b)  <=>  a", can_apply_fn: absorption_and_or_can, apply_fn: absorption_and_or_apply },
        ]
    }
}

// =============================================================================
// SHAPE HELPERS
// =============================================================================

fn as_binary(e: &Expr, op: BinOp) -> Option<(&Expr, &Expr)> {
    match e {
        Expr::BinaryOp(o, l, r) if *o == op => Some((l, r)),
        _ => None,
    }
}

fn as_negation(e: &Expr) -> Option<&Expr> {
    match e {
        Expr::Negation(inner) => Some(inner),
        _ => None,
    }
}

// =============================================================================
// COMMUTATIVITY / ASSOCIATIVITY
// =============================================================================

fn comm_and_can(e: &Expr) -> bool {
    as_binary(e, BinOp::And).is_some()
}
fn comm_and_apply(e: &Expr) -> Expr {
    let (l, r) = as_binary(e, BinOp::And).expect("can_apply checked");
    Expr::and(r.clone(), l.clone())
}

fn comm_or_can(e: &Expr) -> bool {
    as_binary(e, BinOp::Or).is_some()
}
fn comm_or_apply(e: &Expr) -> Expr {
    let (l, r) = as_binary(e, BinOp::Or).expect("can_apply checked");
    Expr::or(r.clone(), l.clone())
}

fn comm_iff_can(e: &Expr) -> bool {
    as_binary(e, BinOp::Iff).is_some()
}
fn comm_iff_apply(e: &Expr) -> Expr {
    let (l, r) = as_binary(e, BinOp::Iff).expect("can_apply checked");
    Expr::iff(r.clone(), l.clone())
}

fn assoc_and_can(e: &Expr) -> bool {
    match as_binary(e, BinOp::And) {
        Some((l, _)) => as_binary(l, BinOp::And).is_some(),
        None => false,
    }
}
fn assoc_and_apply(e: &Expr) -> Expr {
    let (l, c) = as_binary(e, BinOp::And).expect("can_apply checked");
    let (a, b) = as_binary(l, BinOp::And).expect("can_apply checked");
    Expr::and(b.clone(), Expr::and(a.clone(), c.clone()))
}

fn assoc_or_can(e: &Expr) -> bool {
    match as_binary(e, BinOp::Or) {
        Some((l, _)) => as_binary(l, BinOp::Or).is_some(),
        None => false,
    }
}
fn assoc_or_apply(e: &Expr) -> Expr {
    let (l, c) = as_binary(e, BinOp::Or).expect("can_apply checked");
    let (a, b) = as_binary(l, BinOp::Or).expect("can_apply checked");
    Expr::or(b.clone(), Expr::or(a.clone(), c.clone()))
}

// =============================================================================
// NEGATION / EXCLUDED MIDDLE / CONTRADICTION
// =============================================================================

fn double_neg_can(e: &Expr) -> bool {
    matches!(as_negation(e), Some(inner) if as_negation(inner).is_some())
}
fn double_neg_apply(e: &Expr) -> Expr {
    let inner = as_negation(e).expect("can_apply checked");
    let inner2 = as_negation(inner).expect("can_apply checked");
    (**inner2).clone()
}

fn excluded_middle_can(e: &Expr) -> bool {
    match as_binary(e, BinOp::Or) {
        Some((l, r)) => {
            as_negation(r).is_some_and(|nr| nr.structurally_equals(l))
                || as_negation(l).is_some_and(|nl| nl.structurally_equals(r))
        }
        None => false,
    }
}
fn excluded_middle_apply(_e: &Expr) -> Expr {
    Expr::TrueConstant
}

fn contradiction_can(e: &Expr) -> bool {
    match as_binary(e, BinOp::And) {
        Some((l, r)) => {
            as_negation(r).is_some_and(|nr| nr.structurally_equals(l))
                || as_negation(l).is_some_and(|nl| nl.structurally_equals(r))
        }
        None => false,
    }
}
fn contradiction_apply(_e: &Expr) -> Expr {
    Expr::FalseConstant
}

// =============================================================================
// DE MORGAN
// =============================================================================

fn de_morgan_and_can(e: &Expr) -> bool {
    as_negation(e).is_some_and(|inner| as_binary(inner, BinOp::And).is_some())
}
fn de_morgan_and_apply(e: &Expr) -> Expr {
    let inner = as_negation(e).expect("can_apply checked");
    let (a, b) = as_binary(inner, BinOp::And).expect("can_apply checked");
    Expr::or(Expr::not(a.clone()), Expr::not(b.clone()))
}

fn de_morgan_or_can(e: &Expr) -> bool {
    as_negation(e).is_some_and(|inner| as_binary(inner, BinOp::Or).is_some())
}
fn de_morgan_or_apply(e: &Expr) -> Expr {
    let inner = as_negation(e).expect("can_apply checked");
    let (a, b) = as_binary(inner, BinOp::Or).expect("can_apply checked");
    Expr::and(Expr::not(a.clone()), Expr::not(b.clone()))
}

fn de_morgan_and_rev_can(e: &Expr) -> bool {
    match as_binary(e, BinOp::Or) {
        Some((l, r)) => as_negation(l).is_some() && as_negation(r).is_some(),
        None => false,
    }
}
fn de_morgan_and_rev_apply(e: &Expr) -> Expr {
    let (l, r) = as_binary(e, BinOp::Or).expect("can_apply checked");
    let a = as_negation(l).expect("can_apply checked");
    let b = as_negation(r).expect("can_apply checked");
    Expr::not(Expr::and(a.clone(), b.clone()))
}

fn de_morgan_or_rev_can(e: &Expr) -> bool {
    match as_binary(e, BinOp::And) {
        Some((l, r)) => as_negation(l).is_some() && as_negation(r).is_some(),
        None => false,
    }
}
fn de_morgan_or_rev_apply(e: &Expr) -> Expr {
    let (l, r) = as_binary(e, BinOp::And).expect("can_apply checked");
    let a = as_negation(l).expect("can_apply checked");
    let b = as_negation(r).expect("can_apply checked");
    Expr::not(Expr::or(a.clone(), b.clone()))
}

// =============================================================================
// IMPLICATION / CONTRAPOSITIVE
// =============================================================================

fn impl_elim_can(e: &Expr) -> bool {
    as_binary(e, BinOp::Imp).is_some()
}
fn impl_elim_apply(e: &Expr) -> Expr {
    let (a, b) = as_binary(e, BinOp::Imp).expect("can_apply checked");
    Expr::or(Expr::not(a.clone()), b.clone())
}

fn impl_elim_rev_can(e: &Expr) -> bool {
    match as_binary(e, BinOp::Or) {
        Some((l, _)) => as_negation(l).is_some(),
        None => false,
    }
}
fn impl_elim_rev_apply(e: &Expr) -> Expr {
    let (l, r) = as_binary(e, BinOp::Or).expect("can_apply checked");
    let a = as_negation(l).expect("can_apply checked");
    Expr::imp(a.clone(), r.clone())
}

fn contrapositive_can(e: &Expr) -> bool {
    match as_binary(e, BinOp::Imp) {
        Some((a, b)) => !(as_negation(a).is_some() && as_negation(b).is_some()),
        None => false,
    }
}
fn contrapositive_apply(e: &Expr) -> Expr {
    let (a, b) = as_binary(e, BinOp::Imp).expect("can_apply checked");
    Expr::imp(Expr::not(b.clone()), Expr::not(a.clone()))
}

// =============================================================================
// DISTRIBUTIVITY
// =============================================================================

fn distr_and_over_or_can(e: &Expr) -> bool {
    match as_binary(e, BinOp::And) {
        Some((_, r)) => as_binary(r, BinOp::Or).is_some(),
        None => false,
    }
}
fn distr_and_over_or_apply(e: &Expr) -> Expr {
    let (a, r) = as_binary(e, BinOp::And).expect("can_apply checked");
    let (b, c) = as_binary(r, BinOp::Or).expect("can_apply checked");
    Expr::or(Expr::and(a.clone(), b.clone()), Expr::and(a.clone(), c.clone()))
}

fn distr_or_over_and_can(e: &Expr) -> bool {
    match as_binary(e, BinOp::Or) {
        Some((_, r)) => as_binary(r, BinOp::And).is_some(),
        None => false,
    }
}
fn distr_or_over_and_apply(e: &Expr) -> Expr {
    let (a, r) = as_binary(e, BinOp::Or).expect("can_apply checked");
    let (b, c) = as_binary(r, BinOp::And).expect("can_apply checked");
    Expr::and(Expr::or(a.clone(), b.clone()), Expr::or(a.clone(), c.clone()))
}

fn distr_rev_and_can(e: &Expr) -> bool {
    match as_binary(e, BinOp::Or) {
        Some((l, r)) => match (as_binary(l, BinOp::And), as_binary(r, BinOp::And)) {
            (Some((a1, _)), Some((a2, _))) => a1.structurally_equals(a2),
            _ => false,
        },
        None => false,
    }
}
fn distr_rev_and_apply(e: &Expr) -> Expr {
    let (l, r) = as_binary(e, BinOp::Or).expect("can_apply checked");
    let (a, b) = as_binary(l, BinOp::And).expect("can_apply checked");
    let (_, c) = as_binary(r, BinOp::And).expect("can_apply checked");
    Expr::and(a.clone(), Expr::or(b.clone(), c.clone()))
}

fn distr_rev_or_can(e: &Expr) -> bool {
    match as_binary(e, BinOp::And) {
        Some((l, r)) => match (as_binary(l, BinOp::Or), as_binary(r, BinOp::Or)) {
            (Some((a1, _)), Some((a2, _))) => a1.structurally_equals(a2),
            _ => false,
        },
        None => false,
    }
}
fn distr_rev_or_apply(e: &Expr) -> Expr {
    let (l, r) = as_binary(e, BinOp::And).expect("can_apply checked");
    let (a, b) = as_binary(l, BinOp::Or).expect("can_apply checked");
    let (_, c) = as_binary(r, BinOp::Or).expect("can_apply checked");
    Expr::or(a.clone(), Expr::and(b.clone(), c.clone()))
}

// =============================================================================
// IDEMPOTENCE
// =============================================================================

fn idemp_and_can(e: &Expr) -> bool {
    as_binary(e, BinOp::And).is_some_and(|(l, r)| l.structurally_equals(r))
}
fn idemp_and_apply(e: &Expr) -> Expr {
    let (l, _) = as_binary(e, BinOp::And).expect("can_apply checked");
    l.clone()
}

fn idemp_or_can(e: &Expr) -> bool {
    as_binary(e, BinOp::Or).is_some_and(|(l, r)| l.structurally_equals(r))
}
fn idemp_or_apply(e: &Expr) -> Expr {
    let (l, _) = as_binary(e, BinOp::Or).expect("can_apply checked");
    l.clone()
}

fn is_idempotent_and_form(e: &Expr) -> bool {
    as_binary(e, BinOp::And).is_some_and(|(l, r)| l.structurally_equals(r))
}
fn is_idempotent_or_form(e: &Expr) -> bool {
    as_binary(e, BinOp::Or).is_some_and(|(l, r)| l.structurally_equals(r))
}

fn idemp_rev_and_can(e: &Expr) -> bool {
    !is_idempotent_and_form(e)
}
fn idemp_rev_and_apply(e: &Expr) -> Expr {
    Expr::and(e.clone(), e.clone())
}

fn idemp_rev_or_can(e: &Expr) -> bool {
    !is_idempotent_or_form(e)
}
fn idemp_rev_or_apply(e: &Expr) -> Expr {
    Expr::or(e.clone(), e.clone())
}

// =============================================================================
// EQUIVALENCE
// =============================================================================

fn equiv_can(e: &Expr) -> bool {
    as_binary(e, BinOp::Iff).is_some()
}
fn equiv_apply(e: &Expr) -> Expr {
    let (a, b) = as_binary(e, BinOp::Iff).expect("can_apply checked");
    Expr::and(Expr::imp(a.clone(), b.clone()), Expr::imp(b.clone(), a.clone()))
}

fn equiv_rev_can(e: &Expr) -> bool {
    match as_binary(e, BinOp::And) {
        Some((l, r)) => match (as_binary(l, BinOp::Imp), as_binary(r, BinOp::Imp)) {
            (Some((a1, b1)), Some((b2, a2))) => a1.structurally_equals(a2) && b1.structurally_equals(b2),
            _ => false,
        },
        None => false,
    }
}
fn equiv_rev_apply(e: &Expr) -> Expr {
    let (l, _) = as_binary(e, BinOp::And).expect("can_apply checked");
    let (a, b) = as_binary(l, BinOp::Imp).expect("can_apply checked");
    Expr::iff(a.clone(), b.clone())
}

// =============================================================================
// SIMPLIFICATION WITH TRUE/FALSE
// =============================================================================

fn simplify_and_true_can(e: &Expr) -> bool {
    as_binary(e, BinOp::And).is_some_and(|(l, r)| matches!(l, Expr::TrueConstant) || matches!(r, Expr::TrueConstant))
}
fn simplify_and_true_apply(e: &Expr) -> Expr {
    let (l, r) = as_binary(e, BinOp::And).expect("can_apply checked");
    if matches!(l, Expr::TrueConstant) { r.clone() } else { l.clone() }
}

fn simplify_or_false_can(e: &Expr) -> bool {
    as_binary(e, BinOp::Or).is_some_and(|(l, r)| matches!(l, Expr::FalseConstant) || matches!(r, Expr::FalseConstant))
}
fn simplify_or_false_apply(e: &Expr) -> Expr {
    let (l, r) = as_binary(e, BinOp::Or).expect("can_apply checked");
    if matches!(l, Expr::FalseConstant) { r.clone() } else { l.clone() }
}

fn simplify_or_true_can(e: &Expr) -> bool {
    as_binary(e, BinOp::Or).is_some_and(|(l, r)| matches!(l, Expr::TrueConstant) || matches!(r, Expr::TrueConstant))
}
fn simplify_or_true_apply(_e: &Expr) -> Expr {
    Expr::TrueConstant
}

fn simplify_and_false_can(e: &Expr) -> bool {
    as_binary(e, BinOp::And).is_some_and(|(l, r)| matches!(l, Expr::FalseConstant) || matches!(r, Expr::FalseConstant))
}
fn simplify_and_false_apply(_e: &Expr) -> Expr {
    Expr::FalseConstant
}

fn simp1_rev_and_can(e: &Expr) -> bool {
    !as_binary(e, BinOp::And).is_some_and(|(_, r)| matches!(r, Expr::TrueConstant))
}
fn simp1_rev_and_apply(e: &Expr) -> Expr {
    Expr::and(e.clone(), Expr::TrueConstant)
}

fn simp1_rev_or_can(e: &Expr) -> bool {
    !as_binary(e, BinOp::Or).is_some_and(|(_, r)| matches!(r, Expr::FalseConstant))
}
fn simp1_rev_or_apply(e: &Expr) -> Expr {
    Expr::or(e.clone(), Expr::FalseConstant)
}

// =============================================================================
// ABSORPTION (SIMP2)
// =============================================================================

fn absorption_or_and_can(e: &Expr) -> bool {
    match as_binary(e, BinOp::Or) {
        Some((l, r)) => {
            as_binary(r, BinOp::And).is_some_and(|(a, _)| a.structurally_equals(l))
                || as_binary(l, BinOp::And).is_some_and(|(a, _)| a.structurally_equals(r))
        }
        None => false,
    }
}
fn absorption_or_and_apply(e: &Expr) -> Expr {
    let (l, r) = as_binary(e, BinOp::Or).expect("can_apply checked");
    if as_binary(r, BinOp::And).is_some_and(|(a, _)| a.structurally_equals(l)) {
        l.clone()
    } else {
        r.clone()
    }
}

fn absorption_and_or_can(e: &Expr) -> bool {
    match as_binary(e, BinOp::And) {
        Some((l, r)) => {
            as_binary(r, BinOp::Or).is_some_and(|(a, _)| a.structurally_equals(l))
                || as_binary(l, BinOp::Or).is_some_and(|(a, _)| a.structurally_equals(r))
        }
        None => false,
    }
}
fn absorption_and_or_apply(e: &Expr) -> Expr {
    let (l, r) = as_binary(e, BinOp::And).expect("can_apply checked");
    if as_binary(r, BinOp::Or).is_some_and(|(a, _)| a.structurally_equals(l)) {
        l.clone()
    } else {
        r.clone()
    }
}
