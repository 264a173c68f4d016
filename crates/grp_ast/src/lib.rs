#![allow(clippy::should_implement_trait)] // Builder names mirror the operators they build

pub mod condition;
pub mod display;
pub mod expression;
pub mod ordering;
pub mod substitute;
pub mod traversal;

pub use condition::{Condition, IntoCondition};
pub use expression::{Expr, IntoExpr, Var};
pub use ordering::{compare_expr, expr_eq};
pub use substitute::Substitution;
pub use traversal::{collect_variables, condition_contains_var, contains_var, map_condition, map_variables};

use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelOp {
    Eq,  // ==
    Gt,  // >
    Geq, // >=
    Lt,  // <
    Leq, // <=
}

impl RelOp {
    /// The relation obtained by exchanging the two sides: `a < b` ⇔ `b > a`.
    pub fn mirror(self) -> Self {
        match self {
            RelOp::Eq => RelOp::Eq,
            RelOp::Gt => RelOp::Lt,
            RelOp::Geq => RelOp::Leq,
            RelOp::Lt => RelOp::Gt,
            RelOp::Leq => RelOp::Geq,
        }
    }

    pub fn holds(self, lhs: i64, rhs: i64) -> bool {
        match self {
            RelOp::Eq => lhs == rhs,
            RelOp::Gt => lhs > rhs,
            RelOp::Geq => lhs >= rhs,
            RelOp::Lt => lhs < rhs,
            RelOp::Leq => lhs <= rhs,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            RelOp::Eq => "==",
            RelOp::Gt => ">",
            RelOp::Geq => ">=",
            RelOp::Lt => "<",
            RelOp::Leq => "<=",
        }
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An equality `lhs == rhs`, the input and output of the equation solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    pub lhs: Rc<Expr>, // Left Hand Side
    pub rhs: Rc<Expr>, // Right Hand Side
}

impl Equation {
    pub fn new(lhs: impl IntoExpr, rhs: impl IntoExpr) -> Self {
        Equation {
            lhs: lhs.into_expr(),
            rhs: rhs.into_expr(),
        }
    }

    pub fn to_condition(&self) -> Rc<Condition> {
        Condition::eq(&self.lhs, &self.rhs)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} == {}", self.lhs, self.rhs)
    }
}
