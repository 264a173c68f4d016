//! Variable substitution driven by a binding table.

use crate::condition::Condition;
use crate::expression::{Expr, IntoExpr, Var};
use crate::traversal::{map_condition, map_variables};
use std::collections::BTreeMap;
use std::rc::Rc;

/// Simultaneous substitution `{var ↦ replacement}`.
///
/// Replacements are inserted verbatim: nothing is evaluated or simplified, and
/// variables inside a replacement are not substituted again, so swapping
/// `x ↦ y, y ↦ x` behaves as expected.
#[derive(Debug, Clone, Default)]
pub struct Substitution {
    bindings: BTreeMap<Var, Rc<Expr>>,
}

impl Substitution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, var: Var, replacement: impl IntoExpr) -> Self {
        self.bindings.insert(var, replacement.into_expr());
        self
    }

    /// Bindings for the two operands of a binary function `f(x, y)`.
    pub fn operands(x: impl IntoExpr, y: impl IntoExpr) -> Self {
        Self::new().bind(Var::X, x).bind(Var::Y, y)
    }

    pub fn get(&self, var: Var) -> Option<&Rc<Expr>> {
        self.bindings.get(&var)
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn apply(&self, expr: &Rc<Expr>) -> Rc<Expr> {
        if self.is_empty() {
            return Rc::clone(expr);
        }
        map_variables(expr, &mut |v| self.bindings.get(&v).cloned())
    }

    pub fn apply_condition(&self, cond: &Rc<Condition>) -> Rc<Condition> {
        if self.is_empty() {
            return Rc::clone(cond);
        }
        map_condition(cond, &mut |v| self.bindings.get(&v).cloned())
    }
}
