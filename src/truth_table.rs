//! Truth table enumeration and analysis (spec §4.5).

use crate::ast::Expr;
use crate::error::{EvalError, TruthTableError, TruthTableResult};
use crate::eval::{evaluate, Assignment};

/// Hard cap on the number of distinct variables a truth table may cover —
/// beyond this, `2^k` rows is no longer a reasonable thing to materialize.
pub const MAX_TRUTH_TABLE_VARIABLES: usize = 15;

/// One row: the assignment that produced it, and the expression's value
/// under that assignment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TruthTableRow {
    pub assignment: Assignment,
    pub result: bool,
}

/// A complete truth table: the variable list (sorted ascending) and all
/// `2^k` rows in canonical index order — row `i`'s variable at sorted
/// position `j` gets bit `j` of `i`, counting from the high bit.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TruthTable {
    pub variables: Vec<String>,
    pub rows: Vec<TruthTableRow>,
}

/// Tautology / contradiction / contingency plus the fraction of
/// satisfying rows.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Analysis {
    pub is_tautology: bool,
    pub is_contradiction: bool,
    pub is_contingent: bool,
    pub satisfiable_count: usize,
    pub total_rows: usize,
    pub satisfiability_ratio: f64,
}

impl TruthTable {
    /// Build the full table for `expr`. Fails if `expr` has more than
    /// [`MAX_TRUTH_TABLE_VARIABLES`] distinct variables.
    pub fn build(expr: &Expr) -> TruthTableResult<TruthTable> {
        let variables: Vec<String> = expr.vars().into_iter().collect();
        if variables.len() > MAX_TRUTH_TABLE_VARIABLES {
            return Err(TruthTableError { found: variables.len(), max: MAX_TRUTH_TABLE_VARIABLES });
        }

        let k = variables.len();
        let total_rows = 1usize << k;
        let mut rows = Vec::with_capacity(total_rows);

        for i in 0..total_rows {
            let assignment: Assignment = variables
                .iter()
                .enumerate()
                .map(|(j, name)| {
                    let bit = (i >> (k - 1 - j)) & 1;
                    (name.clone(), bit == 1)
                })
                .collect();
            // `variables` comes from `expr.vars()`, so every name `evaluate`
            // needs is present in `assignment` by construction.
            let result = evaluate(expr, &assignment).expect("assignment covers all variables");
            rows.push(TruthTableRow { assignment, result });
        }

        Ok(TruthTable { variables, rows })
    }

    pub fn analyze(&self) -> Analysis {
        let total_rows = self.rows.len();
        let satisfiable_count = self.rows.iter().filter(|r| r.result).count();
        let is_tautology = total_rows > 0 && satisfiable_count == total_rows;
        let is_contradiction = total_rows > 0 && satisfiable_count == 0;
        let is_contingent = satisfiable_count > 0 && satisfiable_count < total_rows;
        let satisfiability_ratio = if total_rows == 0 {
            0.0
        } else {
            satisfiable_count as f64 / total_rows as f64
        };
        Analysis {
            is_tautology,
            is_contradiction,
            is_contingent,
            satisfiable_count,
            total_rows,
            satisfiability_ratio,
        }
    }

    /// CSV text: header `var1,var2,…,Result`, rows of `0`/`1`, LF endings
    /// (spec §6).
    pub fn to_csv(&self) -> String {
        let mut buf = Vec::new();
        {
            let mut writer = csv::WriterBuilder::new().terminator(csv::Terminator::Any(b'\n')).from_writer(&mut buf);
            let mut header: Vec<&str> = self.variables.iter().map(String::as_str).collect();
            header.push("Result");
            writer.write_record(&header).expect("in-memory csv write cannot fail");
            for row in &self.rows {
                let mut record: Vec<String> =
                    self.variables.iter().map(|v| if row.assignment[v] { "1".to_string() } else { "0".to_string() }).collect();
                record.push(if row.result { "1".to_string() } else { "0".to_string() });
                writer.write_record(&record).expect("in-memory csv write cannot fail");
            }
            writer.flush().expect("in-memory csv flush cannot fail");
        }
        String::from_utf8(buf).expect("csv writer only emits ASCII for this table")
    }

    /// Rendered text: `var1 | var2 | … | Result` header, a dashed
    /// separator row, then body rows with `T`/`F` cells (spec §6).
    pub fn to_rendered_text(&self) -> String {
        let mut columns: Vec<String> = self.variables.clone();
        columns.push("Result".to_string());

        let mut out = String::new();
        out.push_str(&columns.join(" | "));
        out.push('\n');

        let separator: Vec<String> = columns.iter().map(|c| "-".repeat(c.len())).collect();
        out.push_str(&separator.join("-+-"));

        for row in &self.rows {
            out.push('\n');
            let mut cells: Vec<String> = self
                .variables
                .iter()
                .map(|v| if row.assignment[v] { "T".to_string() } else { "F".to_string() })
                .collect();
            cells.push(if row.result { "T".to_string() } else { "F".to_string() });
            let padded: Vec<String> = cells
                .iter()
                .zip(columns.iter())
                .map(|(cell, col)| format!("{:width$}", cell, width = col.len()))
                .collect();
            out.push_str(&padded.join(" | "));
        }
        out
    }
}

/// Semantic equivalence of two expressions by exhaustive evaluation over
/// the union of their variable sets (spec §4.5). Any evaluation failure
/// counts as non-equivalent rather than propagating.
pub fn equivalent(a: &Expr, b: &Expr) -> bool {
    let mut vars: std::collections::BTreeSet<String> = a.vars();
    vars.extend(b.vars());
    let vars: Vec<String> = vars.into_iter().collect();
    let k = vars.len();

    for i in 0..(1usize << k) {
        let assignment: Assignment = vars
            .iter()
            .enumerate()
            .map(|(j, name)| {
                let bit = (i >> (k - 1 - j)) & 1;
                (name.clone(), bit == 1)
            })
            .collect();
        let ra = evaluate(a, &assignment);
        let rb = evaluate(b, &assignment);
        match (ra, rb) {
            (Ok(x), Ok(y)) if x == y => continue,
            _ => return false,
        }
    }
    true
}

impl From<EvalError> for TruthTableError {
    fn from(_: EvalError) -> Self {
        // Unreachable in practice: `build`/`equivalent` only evaluate under
        // assignments derived from the expression's own variable set.
        TruthTableError { found: 0, max: MAX_TRUTH_TABLE_VARIABLES }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expr;
    use crate::parser::parse;

    #[test]
    fn excluded_middle_is_a_tautology() {
        let e = parse("a | !a").unwrap();
        let table = TruthTable::build(&e).unwrap();
        assert_eq!(table.rows.len(), 2);
        let analysis = table.analyze();
        assert!(analysis.is_tautology);
        assert!(table.rows.iter().all(|r| r.result));
    }

    #[test]
    fn truth_table_law_satisfiable_count_matches_brute_force() {
        let e = parse("(a & b) | c").unwrap();
        let table = TruthTable::build(&e).unwrap();
        let analysis = table.analyze();
        let brute_force = table.rows.iter().filter(|r| r.result).count();
        assert_eq!(analysis.satisfiable_count, brute_force);
        let is_extreme = analysis.satisfiable_count == 0 || analysis.satisfiable_count == analysis.total_rows;
        assert_eq!(is_extreme, analysis.is_tautology || analysis.is_contradiction);
    }

    #[test]
    fn too_many_variables_is_rejected() {
        let mut e = Expr::var("x0");
        for i in 1..=MAX_TRUTH_TABLE_VARIABLES {
            e = Expr::and(e, Expr::var(format!("x{i}")));
        }
        assert!(TruthTable::build(&e).is_err());
    }

    #[test]
    fn csv_header_and_row_shape() {
        let e = parse("a & b").unwrap();
        let table = TruthTable::build(&e).unwrap();
        let csv = table.to_csv();
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), "a,b,Result");
        assert_eq!(lines.count(), 4);
    }

    #[test]
    fn equivalence_of_de_morgan_pair() {
        let a = parse("!(a & b)").unwrap();
        let b = parse("!a | !b").unwrap();
        assert!(equivalent(&a, &b));
    }

    #[test]
    fn non_equivalent_expressions() {
        let a = parse("a").unwrap();
        let b = parse("b").unwrap();
        assert!(!equivalent(&a, &b));
    }
}
