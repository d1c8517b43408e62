use boolprover::{equivalent, parse, TruthTable};

#[test]
fn csv_and_rendered_text_agree_on_row_count() {
    let e = parse("(a & b) | !c").unwrap();
    let table = TruthTable::build(&e).unwrap();
    assert_eq!(table.rows.len(), 8);

    let csv = table.to_csv();
    assert_eq!(csv.lines().count(), 9); // header + 8 rows
    assert!(csv.lines().next().unwrap().starts_with("a,b,c,Result"));

    let text = table.to_rendered_text();
    // header + separator + 8 body rows
    assert_eq!(text.lines().count(), 10);
}

#[test]
fn tautology_and_contradiction_are_mutually_exclusive() {
    let tautology = parse("a | !a").unwrap();
    let contradiction = parse("a & !a").unwrap();
    let contingent = parse("a & b").unwrap();

    let t = TruthTable::build(&tautology).unwrap().analyze();
    assert!(t.is_tautology);
    assert!(!t.is_contradiction);
    assert!(!t.is_contingent);

    let c = TruthTable::build(&contradiction).unwrap().analyze();
    assert!(c.is_contradiction);
    assert!(!c.is_tautology);

    let n = TruthTable::build(&contingent).unwrap().analyze();
    assert!(n.is_contingent);
    assert_eq!(n.satisfiable_count, 1);
    assert_eq!(n.total_rows, 4);
}

#[test]
fn equivalent_matches_de_morgan_and_rejects_unrelated_forms() {
    let a = parse("!(a | b)").unwrap();
    let b = parse("!a & !b").unwrap();
    assert!(equivalent(&a, &b));

    let c = parse("a & b").unwrap();
    assert!(!equivalent(&a, &c));
}

#[test]
fn no_variables_is_a_single_row_table() {
    let e = parse("true & !false").unwrap();
    let table = TruthTable::build(&e).unwrap();
    assert_eq!(table.rows.len(), 1);
    assert!(table.rows[0].result);
}
