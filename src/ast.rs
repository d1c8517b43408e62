//! The Boolean expression AST.
//!
//! A strict tree: every non-leaf owns its children exclusively, there is no
//! sharing, and expressions are immutable once built. Rewrites (see
//! [`crate::rules`]) always allocate a new tree rather than mutating one in
//! place.

use std::collections::BTreeSet;
use std::fmt;

/// The four binary connectives. Commutativity, De Morgan, distributivity
/// and friends are expressed uniformly over this enum so the rule
/// catalogue does not need four near-duplicate variants per rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum BinOp {
    And,
    Or,
    Imp,
    Iff,
}

impl BinOp {
    /// The canonical output symbol for this operator (spec §6).
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::And => "&",
            BinOp::Or => "|",
            BinOp::Imp => "=>",
            BinOp::Iff => "<=>",
        }
    }

    /// The name used as the `<OPNAME>` component of a structural hash.
    fn hash_name(self) -> &'static str {
        match self {
            BinOp::And => "AND",
            BinOp::Or => "OR",
            BinOp::Imp => "IMP",
            BinOp::Iff => "IFF",
        }
    }
}

/// A Boolean expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Expr {
    Variable(String),
    TrueConstant,
    FalseConstant,
    Negation(Box<Expr>),
    BinaryOp(BinOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Expr {
        Expr::Variable(name.into())
    }

    pub fn not(e: Expr) -> Expr {
        Expr::Negation(Box::new(e))
    }

    pub fn and(l: Expr, r: Expr) -> Expr {
        Expr::BinaryOp(BinOp::And, Box::new(l), Box::new(r))
    }

    pub fn or(l: Expr, r: Expr) -> Expr {
        Expr::BinaryOp(BinOp::Or, Box::new(l), Box::new(r))
    }

    pub fn imp(l: Expr, r: Expr) -> Expr {
        Expr::BinaryOp(BinOp::Imp, Box::new(l), Box::new(r))
    }

    pub fn iff(l: Expr, r: Expr) -> Expr {
        Expr::BinaryOp(BinOp::Iff, Box::new(l), Box::new(r))
    }

    /// Count of variables + constants + operators in this subtree.
    pub fn size(&self) -> usize {
        match self {
            Expr::Variable(_) | Expr::TrueConstant | Expr::FalseConstant => 1,
            Expr::Negation(child) => 1 + child.size(),
            Expr::BinaryOp(_, l, r) => 1 + l.size() + r.size(),
        }
    }

    /// The set of variable names appearing anywhere in this subtree,
    /// sorted ascending by name (spec §3/§4.5 both require ascending
    /// order, so a `BTreeSet` is used rather than a `HashSet`).
    pub fn vars(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        self.collect_vars(&mut out);
        out
    }

    fn collect_vars(&self, out: &mut BTreeSet<String>) {
        match self {
            Expr::Variable(name) => {
                out.insert(name.clone());
            }
            Expr::TrueConstant | Expr::FalseConstant => {}
            Expr::Negation(child) => child.collect_vars(out),
            Expr::BinaryOp(_, l, r) => {
                l.collect_vars(out);
                r.collect_vars(out);
            }
        }
    }

    /// A total, deterministic structural fingerprint: `VAR(n)`, `TRUE`,
    /// `FALSE`, `NOT(h)`, `<OPNAME>(h1,h2)`. Two expressions are
    /// structurally equal iff their hashes match, and this function is
    /// injective over AST shape — it is the identity used by the visited
    /// set during proof search (spec §3, §4.8, §9).
    pub fn structural_hash(&self) -> String {
        match self {
            Expr::Variable(name) => format!("VAR({})", name),
            Expr::TrueConstant => "TRUE".to_string(),
            Expr::FalseConstant => "FALSE".to_string(),
            Expr::Negation(child) => format!("NOT({})", child.structural_hash()),
            Expr::BinaryOp(op, l, r) => {
                format!("{}({},{})", op.hash_name(), l.structural_hash(), r.structural_hash())
            }
        }
    }

    /// Structural equality via the hash (not `PartialEq`, which would also
    /// be structural here but the spec frames equivalence in terms of the
    /// hash explicitly — see spec §3).
    pub fn structurally_equals(&self, other: &Expr) -> bool {
        self.structural_hash() == other.structural_hash()
    }

    fn is_binary(&self) -> bool {
        matches!(self, Expr::BinaryOp(..))
    }
}

impl fmt::Display for Expr {
    /// Canonical output form (spec §6): negation of an atom or a negation
    /// omits parentheses (`!a`, `!!a`); negation of a binary wraps the
    /// operand (`!(a & b)`); binary operands are parenthesized iff they
    /// are themselves binary operations.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::TrueConstant => write!(f, "true"),
            Expr::FalseConstant => write!(f, "false"),
            Expr::Negation(child) => {
                if child.is_binary() {
                    write!(f, "!({})", child)
                } else {
                    write!(f, "!{}", child)
                }
            }
            Expr::BinaryOp(op, l, r) => {
                if l.is_binary() {
                    write!(f, "({})", l)?;
                } else {
                    write!(f, "{}", l)?;
                }
                write!(f, " {} ", op.symbol())?;
                if r.is_binary() {
                    write!(f, "({})", r)
                } else {
                    write!(f, "{}", r)
                }
            }
        }
    }
}
