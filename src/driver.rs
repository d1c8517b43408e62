//! The rewrite driver (spec §4.7): for a single expression, enumerate
//! every `(rule, position)` pair that fires anywhere in the tree, subject
//! to a maximum output length. One rule firing at one position produces
//! one candidate expression — this is the full one-step neighborhood
//! proof search expands from.

use log::warn;

use crate::ast::Expr;
use crate::rules::Rule;

/// All `(rule, expression)` pairs reachable from `expr` by applying that
/// rule at exactly one position, none of the expressions longer than
/// `max_len`. Positions are visited root first, then (for `Negation`) its
/// child, then (for `BinaryOp`) left before right — [`crate::search`]
/// relies on this exact order for deterministic traversal, and calls this
/// function directly rather than keeping its own copy of the walk.
///
/// A rule reporting [`crate::error::RuleViolation`] after its own
/// `can_apply` said yes is a bug in that rule, not a caller error; the
/// driver logs it and moves on rather than aborting the whole search.
pub fn all_rewrites<'a>(expr: &Expr, rules: &'a [Rule], max_len: usize) -> Vec<(&'a Rule, Expr)> {
    let mut out = Vec::new();
    collect_rewrites(expr, rules, max_len, &mut out);
    out
}

fn collect_rewrites<'a>(expr: &Expr, rules: &'a [Rule], max_len: usize, out: &mut Vec<(&'a Rule, Expr)>) {
    for rule in rules {
        if !rule.can_apply(expr) {
            continue;
        }
        match rule.apply(expr) {
            Ok(rewritten) => {
                if rewritten.size() <= max_len {
                    out.push((rule, rewritten));
                }
            }
            Err(violation) => {
                warn!("{} reported can_apply() but apply() failed: {}", rule.name, violation);
            }
        }
    }

    match expr {
        Expr::Variable(_) | Expr::TrueConstant | Expr::FalseConstant => {}
        Expr::Negation(child) => {
            if max_len >= 2 {
                let mut child_rewrites = Vec::new();
                collect_rewrites(child, rules, max_len - 1, &mut child_rewrites);
                out.extend(child_rewrites.into_iter().map(|(rule, e)| (rule, Expr::not(e))));
            }
        }
        Expr::BinaryOp(op, l, r) => {
            let r_size = r.size();
            if max_len > r_size + 1 {
                let mut left_rewrites = Vec::new();
                collect_rewrites(l, rules, max_len - r_size - 1, &mut left_rewrites);
                for (rule, new_l) in left_rewrites {
                    out.push((rule, Expr::BinaryOp(*op, Box::new(new_l), r.clone())));
                }
            }
            let l_size = l.size();
            if max_len > l_size + 1 {
                let mut right_rewrites = Vec::new();
                collect_rewrites(r, rules, max_len - l_size - 1, &mut right_rewrites);
                for (rule, new_r) in right_rewrites {
                    out.push((rule, Expr::BinaryOp(*op, l.clone(), Box::new(new_r))));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn root_level_rule_fires() {
        let e = parse("!(a & b)").unwrap();
        let rules = Rule::catalogue();
        let rewrites = all_rewrites(&e, &rules, 20);
        let de_morgan = parse("!a | !b").unwrap();
        assert!(rewrites.iter().any(|(_, r)| r.structurally_equals(&de_morgan)));
    }

    #[test]
    fn rewrite_under_a_binary_operator_preserves_the_other_side() {
        let e = parse("(a & !!b) | c").unwrap();
        let rules = Rule::catalogue();
        let rewrites = all_rewrites(&e, &rules, 20);
        let expected = parse("(a & b) | c").unwrap();
        assert!(rewrites.iter().any(|(_, r)| r.structurally_equals(&expected)));
    }

    #[test]
    fn rewrite_under_negation_preserves_shape() {
        let e = parse("!(a & !!b)").unwrap();
        let rules = Rule::catalogue();
        let rewrites = all_rewrites(&e, &rules, 20);
        let expected = parse("!(a & b)").unwrap();
        assert!(rewrites.iter().any(|(_, r)| r.structurally_equals(&expected)));
    }

    #[test]
    fn length_budget_excludes_oversized_candidates() {
        let e = parse("a").unwrap();
        let rules = Rule::catalogue();
        let rewrites = all_rewrites(&e, &rules, 1);
        assert!(rewrites.is_empty(), "a & true (size 3) should not fit a budget of 1");
    }

    #[test]
    fn no_candidate_exceeds_its_budget() {
        let e = parse("(a & b) | (c => !d)").unwrap();
        let rules = Rule::catalogue();
        let max_len = 9;
        for (_, r) in all_rewrites(&e, &rules, max_len) {
            assert!(r.size() <= max_len);
        }
    }

    #[test]
    fn the_producing_rule_is_attached_to_each_candidate() {
        let e = parse("!(a & b)").unwrap();
        let rules = Rule::catalogue();
        let rewrites = all_rewrites(&e, &rules, 20);
        let (rule, _) = rewrites.iter().find(|(_, r)| r.structurally_equals(&parse("!a | !b").unwrap())).unwrap();
        assert_eq!(rule.name, "DeMorganAnd");
    }
}
