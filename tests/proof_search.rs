//! Concrete proof-search scenarios: each one names a law by its rule
//! category so a regression here points straight at the rule that broke.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use boolprover::{equivalent, evaluate, find_proof, parse, Assignment, SearchOptions, SearchOutcome};

fn found_depth(outcome: &SearchOutcome) -> usize {
    match outcome {
        SearchOutcome::Found(proof) => proof.depth(),
        other => panic!("expected a proof, got {other:?}"),
    }
}

#[test]
fn de_morgan_and_is_one_step() {
    let start = parse("!(a & b)").unwrap();
    let goal = parse("!a | !b").unwrap();
    let outcome = find_proof(&start, &goal, &SearchOptions::default());
    assert_eq!(found_depth(&outcome), 1);
}

#[test]
fn contrapositive_is_one_step() {
    let start = parse("p => q").unwrap();
    let goal = parse("!q => !p").unwrap();
    let outcome = find_proof(&start, &goal, &SearchOptions::default());
    assert_eq!(found_depth(&outcome), 1);
}

#[test]
fn absorption_collapses_in_one_step() {
    let start = parse("a | (a & b)").unwrap();
    let goal = parse("a").unwrap();
    let outcome = find_proof(&start, &goal, &SearchOptions::default());
    assert_eq!(found_depth(&outcome), 1);
}

#[test]
fn unrelated_atoms_are_not_found() {
    let a = parse("a").unwrap();
    let b = parse("b").unwrap();
    let outcome = find_proof(&a, &b, &SearchOptions::default());
    assert!(matches!(outcome, SearchOutcome::NotFound { .. }));
    assert!(!equivalent(&a, &b));
}

#[test]
fn a_multi_step_proof_chains_equivalence_and_implication_elimination() {
    // a <=> b  ==  (a => b) & (b => a)  ==  (!a | b) & (!b | a)
    let start = parse("a <=> b").unwrap();
    let goal = parse("(!a | b) & (!b | a)").unwrap();
    let outcome = find_proof(&start, &goal, &SearchOptions::default());
    match &outcome {
        SearchOutcome::Found(proof) => {
            assert_eq!(proof.depth(), 3);
            let mut assignment = Assignment::new();
            for (name, value) in [("a", true), ("b", false)] {
                assignment.insert(name.to_string(), value);
            }
            let start_value = evaluate(&proof.steps.first().unwrap().expr, &assignment).unwrap();
            let end_value = evaluate(&proof.steps.last().unwrap().expr, &assignment).unwrap();
            assert_eq!(start_value, end_value);
        }
        other => panic!("expected a proof, got {other:?}"),
    }
}

#[test]
fn a_shallow_budget_can_turn_a_reachable_goal_into_not_found() {
    let start = parse("a <=> b").unwrap();
    let goal = parse("(!a | b) & (!b | a)").unwrap();
    let starved = SearchOptions { max_depth: 1, ..SearchOptions::default() };
    let outcome = find_proof(&start, &goal, &starved);
    assert!(matches!(outcome, SearchOutcome::NotFound { .. }));
}

#[test]
fn a_pre_cancelled_search_reports_cancelled_not_not_found() {
    let start = parse("a & b").unwrap();
    let goal = parse("z").unwrap();
    let cancel = Arc::new(AtomicBool::new(true));
    let opts = SearchOptions { cancel: Some(cancel.clone()), ..SearchOptions::default() };
    let outcome = find_proof(&start, &goal, &opts);
    assert!(matches!(outcome, SearchOutcome::Cancelled { .. }));
    cancel.store(false, Ordering::Relaxed);
}

#[test]
fn proof_render_matches_the_canonical_text_format() {
    let start = parse("a & !a").unwrap();
    let goal = parse("false").unwrap();
    let outcome = find_proof(&start, &goal, &SearchOptions::default());
    let proof = match outcome {
        SearchOutcome::Found(p) => p,
        other => panic!("expected a proof, got {other:?}"),
    };
    let rendered = proof.render();
    assert_eq!(rendered, "a & !a  <->  false\n\n1) a & !a\n2) false    by contr\n");
}
