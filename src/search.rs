//! Bounded breadth-first proof search (spec §4.8): starting from one
//! expression, explore one-step rewrites (via [`crate::driver::all_rewrites`])
//! until a goal expression is reached, structurally, or a budget runs out.
//!
//! States are deduplicated by [`Expr::structural_hash`] — revisiting a
//! state structurally equal to one already queued or expanded is never
//! useful in a BFS, since the first path found to it is already shortest.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::ast::Expr;
use crate::rules::{Rule, RuleCategory};

/// Tuning knobs for [`find_proof`]. Defaults mirror the values spec §4.8
/// calls out explicitly.
pub struct SearchOptions {
    pub max_depth: usize,
    pub max_states: usize,
    pub max_expression_length: usize,
    /// Invoked every 100 states expanded, with the running expansion count.
    pub on_progress: Option<Box<dyn Fn(usize) + Send>>,
    /// Checked before each state is expanded; search stops early if set.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            max_depth: 15,
            max_states: 10_000,
            max_expression_length: 15,
            on_progress: None,
            cancel: None,
        }
    }
}

/// One step of a reconstructed proof. The first step in a [`Proof`] always
/// has `rule` and `category` both `None` — it is the starting expression,
/// not a rewrite of anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofStep {
    pub expr: Expr,
    pub rule: Option<&'static str>,
    pub category: Option<RuleCategory>,
}

/// A chain of rewrites from the start expression to the goal, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    pub steps: Vec<ProofStep>,
}

impl Proof {
    pub fn depth(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Rendered proof text (spec §6): a `"S  <->  T"` header line, a blank
    /// line, then numbered steps `"N) expr"`; every step after the first
    /// is suffixed with `"by <category>"`, column-aligned to the longest
    /// step prefix plus three spaces.
    pub fn render(&self) -> String {
        let start = &self.steps.first().expect("a proof always has at least one step").expr;
        let goal = &self.steps.last().expect("a proof always has at least one step").expr;

        let prefixes: Vec<String> =
            self.steps.iter().enumerate().map(|(i, step)| format!("{}) {}", i + 1, step.expr)).collect();
        let width = prefixes.iter().map(|p| p.chars().count()).max().unwrap_or(0) + 3;

        let mut out = format!("{}  <->  {}\n\n", start, goal);
        for (prefix, step) in prefixes.iter().zip(&self.steps) {
            match step.category {
                Some(category) => out.push_str(&format!("{:width$}by {}\n", prefix, category)),
                None => out.push_str(&format!("{}\n", prefix)),
            }
        }
        out
    }
}

/// The result of a bounded search: a proof, or an account of why the
/// search gave up. Neither "not found" nor "cancelled" is an error —
/// both are ordinary, expected outcomes of a bounded search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Proof),
    NotFound { states_explored: usize, search_depth: usize },
    Cancelled { states_explored: usize, search_depth: usize },
}

struct Node {
    expr: Expr,
    parent: Option<usize>,
    rule: Option<&'static str>,
    category: Option<RuleCategory>,
    depth: usize,
}

fn reconstruct(nodes: &[Node], mut index: usize) -> Proof {
    let mut steps = Vec::new();
    loop {
        let node = &nodes[index];
        steps.push(ProofStep { expr: node.expr.clone(), rule: node.rule, category: node.category });
        match node.parent {
            Some(parent) => index = parent,
            None => break,
        }
    }
    steps.reverse();
    Proof { steps }
}

/// Search for a chain of rewrites turning `start` into an expression
/// structurally equal to `goal`, using the default rule catalogue.
pub fn find_proof(start: &Expr, goal: &Expr, opts: &SearchOptions) -> SearchOutcome {
    find_proof_with_rules(start, goal, &Rule::catalogue(), opts)
}

/// As [`find_proof`], but with a caller-supplied rule set and order —
/// the traversal order the determinism property (spec §8) is tested
/// against is whatever order `rules` is in.
pub fn find_proof_with_rules(start: &Expr, goal: &Expr, rules: &[Rule], opts: &SearchOptions) -> SearchOutcome {
    let goal_hash = goal.structural_hash();

    let mut nodes: Vec<Node> = vec![Node { expr: start.clone(), parent: None, rule: None, category: None, depth: 0 }];
    let mut visited: rustc_hash::FxHashSet<String> = rustc_hash::FxHashSet::default();
    visited.insert(start.structural_hash());

    if start.structurally_equals(goal) {
        return SearchOutcome::Found(reconstruct(&nodes, 0));
    }

    let mut queue = std::collections::VecDeque::new();
    queue.push_back(0usize);

    let mut states_explored = 0usize;
    let mut deepest = 0usize;

    while let Some(current_index) = queue.pop_front() {
        if let Some(cancel) = &opts.cancel {
            if cancel.load(Ordering::Relaxed) {
                return SearchOutcome::Cancelled { states_explored, search_depth: deepest };
            }
        }

        if states_explored >= opts.max_states {
            return SearchOutcome::NotFound { states_explored, search_depth: deepest };
        }

        let current_depth = nodes[current_index].depth;
        if current_depth >= opts.max_depth {
            continue;
        }

        states_explored += 1;
        deepest = deepest.max(current_depth);
        if states_explored % 100 == 0 {
            if let Some(cb) = &opts.on_progress {
                cb(states_explored);
            }
        }

        let current_expr = nodes[current_index].expr.clone();
        for (rule, next_expr) in crate::driver::all_rewrites(&current_expr, rules, opts.max_expression_length) {
            let hash = next_expr.structural_hash();
            if visited.contains(&hash) {
                continue;
            }
            visited.insert(hash.clone());

            let node_index = nodes.len();
            nodes.push(Node {
                expr: next_expr.clone(),
                parent: Some(current_index),
                rule: Some(rule.name),
                category: Some(rule.category),
                depth: current_depth + 1,
            });

            if hash == goal_hash {
                return SearchOutcome::Found(reconstruct(&nodes, node_index));
            }

            queue.push_back(node_index);
        }
    }

    SearchOutcome::NotFound { states_explored, search_depth: deepest }
}
