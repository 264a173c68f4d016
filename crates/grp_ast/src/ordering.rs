//! Canonical total order over expressions.
//!
//! This order is the only notion of expression equality used by the engine:
//! two trees are considered equal iff `compare_expr` returns `Equal` after both
//! have been simplified independently.
//!
//! Keys, in priority order:
//! 1. Anything that evaluates to a constant sorts after every non-constant;
//!    two constants compare by value.
//! 2. Non-constants that expose a variable name (`v`, `k * v`, `-v`, `v / k`)
//!    sort after those that do not, and compare by that name.
//! 3. Operator rank (see [`rank`]).
//! 4. Operands, left before right.

use crate::expression::{Expr, Var};
use std::cmp::Ordering;

pub fn compare_expr(a: &Expr, b: &Expr) -> Ordering {
    if std::ptr::eq(a, b) {
        return Ordering::Equal;
    }

    // 1. Constants
    match (a.evaluate(), b.evaluate()) {
        (Some(va), Some(vb)) => return va.cmp(&vb),
        (Some(_), None) => return Ordering::Greater,
        (None, Some(_)) => return Ordering::Less,
        (None, None) => {}
    }

    // 2. Variable names
    match (variable_name(a), variable_name(b)) {
        (Some(na), Some(nb)) => {
            let ord = na.name().cmp(nb.name());
            if ord != Ordering::Equal {
                return ord;
            }
        }
        (Some(_), None) => return Ordering::Greater,
        (None, Some(_)) => return Ordering::Less,
        (None, None) => {}
    }

    // 3. Hierarchy Check
    let rank_a = rank(a);
    let rank_b = rank(b);
    if rank_a != rank_b {
        return rank_a.cmp(&rank_b);
    }

    // 4. Same Type Comparison
    use Expr::*;
    match (a, b) {
        (Number(n1), Number(n2)) => n1.cmp(n2),
        (Variable(v1), Variable(v2)) => v1.cmp(v2),
        (Neg(e1), Neg(e2)) => compare_expr(e1, e2),
        (Add(l1, r1), Add(l2, r2))
        | (Sub(l1, r1), Sub(l2, r2))
        | (Mul(l1, r1), Mul(l2, r2))
        | (Div(l1, r1), Div(l2, r2))
        | (Mod(l1, r1), Mod(l2, r2)) => compare_expr(l1, l2).then_with(|| compare_expr(r1, r2)),
        _ => Ordering::Equal, // Should be unreachable if ranks are correct
    }
}

/// Canonical equality: `compare_expr(a, b) == Equal`.
pub fn expr_eq(a: &Expr, b: &Expr) -> bool {
    compare_expr(a, b) == Ordering::Equal
}

/// Fixed operator rank:
/// `Mul < Add < Sub < Div < Mod < Neg < a < b < c < x < y < Number`.
pub fn rank(expr: &Expr) -> u8 {
    match expr {
        Expr::Mul(_, _) => 0,
        Expr::Add(_, _) => 1,
        Expr::Sub(_, _) => 2,
        Expr::Div(_, _) => 3,
        Expr::Mod(_, _) => 4,
        Expr::Neg(_) => 5,
        Expr::Variable(Var::A) => 6,
        Expr::Variable(Var::B) => 7,
        Expr::Variable(Var::C) => 8,
        Expr::Variable(Var::X) => 9,
        Expr::Variable(Var::Y) => 10,
        Expr::Number(_) => 11,
    }
}

/// The variable an expression is a constant multiple (or quotient) of, if any.
pub fn variable_name(expr: &Expr) -> Option<Var> {
    match expr {
        Expr::Variable(v) => Some(*v),
        Expr::Neg(e) => variable_name(e),
        Expr::Mul(l, r) if l.is_constant() => variable_name(r),
        Expr::Div(l, r) if r.is_constant() => variable_name(l),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn sorted(mut items: Vec<Rc<Expr>>) -> Vec<String> {
        items.sort_by(|a, b| compare_expr(a, b));
        items.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn constants_sort_last_by_value() {
        let items = vec![Expr::num(3), Expr::var(Var::X), Expr::num(-1), Expr::var(Var::A)];
        assert_eq!(sorted(items), vec!["a", "x", "-1", "3"]);
    }

    #[test]
    fn scaled_variables_sort_by_name() {
        let items = vec![Expr::var(Var::C), Expr::neg(Var::B), Expr::mul(2, Var::A)];
        assert_eq!(sorted(items), vec!["2 * a", "-b", "c"]);
    }

    #[test]
    fn same_name_falls_back_to_rank() {
        assert_eq!(compare_expr(&Expr::mul(2, Var::X), &Expr::var(Var::X)), Ordering::Less);
        assert_eq!(compare_expr(&Expr::neg(Var::X), &Expr::var(Var::X)), Ordering::Less);
        assert_eq!(compare_expr(&Expr::mul(2, Var::X), &Expr::mul(3, Var::X)), Ordering::Less);
    }

    #[test]
    fn unnamed_compounds_sort_before_named() {
        let product = Expr::mul(Var::A, Var::B);
        assert_eq!(compare_expr(&product, &Expr::var(Var::A)), Ordering::Less);
        assert_eq!(compare_expr(&Expr::modulo(Var::X, 2), &Expr::add(Var::X, Var::Y)), Ordering::Greater);
    }

    #[test]
    fn order_is_transitive_across_classes() {
        // A named product, a variable, and an unnamed sum.
        let a = Expr::mul(2, Var::Y);
        let b = Expr::var(Var::X);
        let c = Expr::add(Var::A, Var::B);
        assert_eq!(compare_expr(&a, &b), Ordering::Greater);
        assert_eq!(compare_expr(&b, &c), Ordering::Greater);
        assert_eq!(compare_expr(&a, &c), Ordering::Greater);
    }

    #[test]
    fn structural_recursion_on_operands() {
        let l = Expr::add(Var::A, Var::B);
        let r = Expr::add(Var::A, Var::C);
        assert_eq!(compare_expr(&l, &r), Ordering::Less);
        assert!(expr_eq(&l, &Expr::add(Var::A, Var::B)));
    }

    #[test]
    fn constant_trees_equal_their_value() {
        assert!(expr_eq(&Expr::add(1, 2), &Expr::num(3)));
    }
}
