//! End-to-end tokenizer -> parenthesizer -> parser pipeline, exercised
//! through the public `parse` entry point only.

use boolprover::{parse, BinOp, Expr, ParseError};

#[test]
fn double_negation_renders_without_parens() {
    let e = parse("!!a").unwrap();
    assert_eq!(e.to_string(), "!!a");
}

#[test]
fn full_precedence_ladder() {
    let e = parse("a <=> b => c | d & !e").unwrap();
    // & binds tightest, then |, then =>, then <=>, so this parses as
    // a <=> (b => (c | (d & (!e))))
    match e {
        Expr::BinaryOp(BinOp::Iff, l, r) => {
            assert_eq!(*l, Expr::var("a"));
            match *r {
                Expr::BinaryOp(BinOp::Imp, ..) => {}
                other => panic!("expected implication under iff, got {other}"),
            }
        }
        other => panic!("expected top-level iff, got {other}"),
    }
}

#[test]
fn mixed_notations_parse_to_the_same_tree() {
    let a = parse("NOT a AND b").unwrap();
    let b = parse("!a & b").unwrap();
    let c = parse("¬a ∧ b").unwrap();
    assert!(a.structurally_equals(&b));
    assert!(b.structurally_equals(&c));
}

#[test]
fn unbalanced_parentheses_is_reported() {
    assert_eq!(parse("(a & b"), Err(ParseError::UnbalancedParens));
}

#[test]
fn empty_input_is_reported() {
    assert_eq!(parse("   "), Err(ParseError::Empty));
}

#[test]
fn variable_names_are_case_sensitive_and_distinct_from_synonyms() {
    let e = parse("Apple & orange").unwrap();
    let vars: Vec<String> = e.vars().into_iter().collect();
    assert_eq!(vars, vec!["Apple".to_string(), "orange".to_string()]);
}
