//! Recursive evaluation of an [`Expr`] under a variable assignment.

use std::collections::BTreeMap;

use crate::ast::{BinOp, Expr};
use crate::error::{EvalError, EvalResult};

/// A total map from variable name to boolean value. A `BTreeMap` keeps
/// iteration order deterministic, which truth-table construction (§4.5)
/// relies on when it builds assignments in sorted variable order.
pub type Assignment = BTreeMap<String, bool>;

/// Evaluate `expr` under `assignment`. Every variable in `expr.vars()` must
/// be bound; constants ignore the assignment entirely. Implication and
/// biconditional are desugared per spec §4.4: `a => b` is `!a | b`,
/// `a <=> b` is `(a & b) | (!a & !b)`.
pub fn evaluate(expr: &Expr, assignment: &Assignment) -> EvalResult<bool> {
    match expr {
        Expr::Variable(name) => assignment
            .get(name)
            .copied()
            .ok_or_else(|| EvalError::UnboundVariable(name.clone())),
        Expr::TrueConstant => Ok(true),
        Expr::FalseConstant => Ok(false),
        Expr::Negation(child) => Ok(!evaluate(child, assignment)?),
        Expr::BinaryOp(op, l, r) => {
            let lv = evaluate(l, assignment)?;
            let rv = evaluate(r, assignment)?;
            Ok(match op {
                BinOp::And => lv && rv,
                BinOp::Or => lv || rv,
                BinOp::Imp => !lv || rv,
                BinOp::Iff => (lv && rv) || (!lv && !rv),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assign(pairs: &[(&str, bool)]) -> Assignment {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn evaluates_mixed_expression() {
        let e = crate::parser::parse("a AND b | c").unwrap();
        let a = assign(&[("a", true), ("b", false), ("c", true)]);
        assert_eq!(evaluate(&e, &a).unwrap(), true);
    }

    #[test]
    fn missing_variable_errors() {
        let e = Expr::var("a");
        let a = Assignment::new();
        assert_eq!(evaluate(&e, &a), Err(EvalError::UnboundVariable("a".to_string())));
    }

    #[test]
    fn implication_desugars_to_not_or() {
        let e = Expr::imp(Expr::var("a"), Expr::var("b"));
        assert_eq!(evaluate(&e, &assign(&[("a", true), ("b", false)])).unwrap(), false);
        assert_eq!(evaluate(&e, &assign(&[("a", false), ("b", false)])).unwrap(), true);
    }

    #[test]
    fn biconditional_is_true_iff_equal() {
        let e = Expr::iff(Expr::var("a"), Expr::var("b"));
        assert_eq!(evaluate(&e, &assign(&[("a", true), ("b", true)])).unwrap(), true);
        assert_eq!(evaluate(&e, &assign(&[("a", true), ("b", false)])).unwrap(), false);
    }
}
