use crate::expression::{Expr, IntoExpr};
use crate::RelOp;
use std::rc::Rc;

/// Boolean condition over integer expressions, describing the members of a
/// candidate group as a predicate on `x`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Every integer.
    AlwaysTrue,
    /// No integer.
    AlwaysFalse,
    /// Opaque named predicate; only used for diagnostics and never holds.
    Predicate(String),
    And(Rc<Condition>, Rc<Condition>),
    Or(Rc<Condition>, Rc<Condition>),
    Compare(RelOp, Rc<Expr>, Rc<Expr>),
}

/// Operands accepted by the condition builders. Strings become named predicates.
pub trait IntoCondition {
    fn into_condition(self) -> Rc<Condition>;
}

impl IntoCondition for Rc<Condition> {
    fn into_condition(self) -> Rc<Condition> {
        self
    }
}

impl IntoCondition for &Rc<Condition> {
    fn into_condition(self) -> Rc<Condition> {
        Rc::clone(self)
    }
}

impl IntoCondition for Condition {
    fn into_condition(self) -> Rc<Condition> {
        Rc::new(self)
    }
}

impl IntoCondition for &str {
    fn into_condition(self) -> Rc<Condition> {
        Condition::named(self)
    }
}

impl Condition {
    pub fn always() -> Rc<Self> {
        Rc::new(Condition::AlwaysTrue)
    }

    pub fn never() -> Rc<Self> {
        Rc::new(Condition::AlwaysFalse)
    }

    pub fn named(name: &str) -> Rc<Self> {
        Rc::new(Condition::Predicate(name.to_string()))
    }

    pub fn and(lhs: impl IntoCondition, rhs: impl IntoCondition) -> Rc<Self> {
        Rc::new(Condition::And(lhs.into_condition(), rhs.into_condition()))
    }

    pub fn or(lhs: impl IntoCondition, rhs: impl IntoCondition) -> Rc<Self> {
        Rc::new(Condition::Or(lhs.into_condition(), rhs.into_condition()))
    }

    pub fn compare(op: RelOp, lhs: impl IntoExpr, rhs: impl IntoExpr) -> Rc<Self> {
        Rc::new(Condition::Compare(op, lhs.into_expr(), rhs.into_expr()))
    }

    pub fn eq(lhs: impl IntoExpr, rhs: impl IntoExpr) -> Rc<Self> {
        Self::compare(RelOp::Eq, lhs, rhs)
    }

    pub fn gt(lhs: impl IntoExpr, rhs: impl IntoExpr) -> Rc<Self> {
        Self::compare(RelOp::Gt, lhs, rhs)
    }

    pub fn geq(lhs: impl IntoExpr, rhs: impl IntoExpr) -> Rc<Self> {
        Self::compare(RelOp::Geq, lhs, rhs)
    }

    pub fn lt(lhs: impl IntoExpr, rhs: impl IntoExpr) -> Rc<Self> {
        Self::compare(RelOp::Lt, lhs, rhs)
    }

    pub fn leq(lhs: impl IntoExpr, rhs: impl IntoExpr) -> Rc<Self> {
        Self::compare(RelOp::Leq, lhs, rhs)
    }
}

impl Condition {
    /// Formatter binding strength: `||` loosest, then `&&`, then atoms.
    pub fn precedence(&self) -> u8 {
        match self {
            Condition::Or(_, _) => 1,
            Condition::And(_, _) => 2,
            _ => 3,
        }
    }

    /// Truth value once every operand is a constant.
    ///
    /// Comparisons with a non-constant side are false, as are named predicates.
    pub fn evaluate(&self) -> bool {
        match self {
            Condition::AlwaysTrue => true,
            Condition::AlwaysFalse | Condition::Predicate(_) => false,
            Condition::And(l, r) => l.evaluate() && r.evaluate(),
            Condition::Or(l, r) => l.evaluate() || r.evaluate(),
            Condition::Compare(op, l, r) => match (l.evaluate(), r.evaluate()) {
                (Some(lv), Some(rv)) => op.holds(lv, rv),
                _ => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Var;

    #[test]
    fn evaluate_constant_comparisons() {
        assert!(Condition::eq(Expr::modulo(4, 2), 0).evaluate());
        assert!(!Condition::geq(0, 5).evaluate());
        assert!(Condition::lt(-1, 0).evaluate());
    }

    #[test]
    fn evaluate_short_circuits_connectives() {
        let c = Condition::or(Condition::never(), Condition::and(Condition::always(), Condition::leq(2, 2)));
        assert!(c.evaluate());
        assert!(!Condition::and(Condition::always(), Condition::never()).evaluate());
    }

    #[test]
    fn non_constant_and_named_are_false() {
        assert!(!Condition::gt(Var::X, 0).evaluate());
        assert!(!Condition::or("p", Condition::never()).evaluate());
    }
}
