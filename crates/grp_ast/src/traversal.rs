//! Tree walks shared by every rewriting pass.
//!
//! [`map_variables`] is the single rewriting primitive: it rebuilds a tree with
//! each variable leaf replaced by whatever the callback returns. Substitution,
//! renaming and instantiation with numbers are all expressed through it.
//! Untouched subtrees are shared with the input rather than copied.

use crate::condition::Condition;
use crate::expression::{Expr, Var};
use std::collections::BTreeSet;
use std::rc::Rc;

/// Rebuild `expr`, replacing each variable for which `f` returns `Some`.
pub fn map_variables<F>(expr: &Rc<Expr>, f: &mut F) -> Rc<Expr>
where
    F: FnMut(Var) -> Option<Rc<Expr>>,
{
    match &**expr {
        Expr::Number(_) => Rc::clone(expr),
        Expr::Variable(v) => f(*v).unwrap_or_else(|| Rc::clone(expr)),
        Expr::Add(l, r) => map_binary(expr, l, r, f, Expr::Add),
        Expr::Sub(l, r) => map_binary(expr, l, r, f, Expr::Sub),
        Expr::Mul(l, r) => map_binary(expr, l, r, f, Expr::Mul),
        Expr::Div(l, r) => map_binary(expr, l, r, f, Expr::Div),
        Expr::Mod(l, r) => map_binary(expr, l, r, f, Expr::Mod),
        Expr::Neg(e) => {
            let new_e = map_variables(e, f);
            if Rc::ptr_eq(&new_e, e) {
                Rc::clone(expr)
            } else {
                Rc::new(Expr::Neg(new_e))
            }
        }
    }
}

fn map_binary<F>(
    original: &Rc<Expr>,
    l: &Rc<Expr>,
    r: &Rc<Expr>,
    f: &mut F,
    make: fn(Rc<Expr>, Rc<Expr>) -> Expr,
) -> Rc<Expr>
where
    F: FnMut(Var) -> Option<Rc<Expr>>,
{
    let new_l = map_variables(l, f);
    let new_r = map_variables(r, f);
    if Rc::ptr_eq(&new_l, l) && Rc::ptr_eq(&new_r, r) {
        Rc::clone(original)
    } else {
        Rc::new(make(new_l, new_r))
    }
}

/// Apply [`map_variables`] to both sides of every comparison in `cond`.
pub fn map_condition<F>(cond: &Rc<Condition>, f: &mut F) -> Rc<Condition>
where
    F: FnMut(Var) -> Option<Rc<Expr>>,
{
    match &**cond {
        Condition::AlwaysTrue | Condition::AlwaysFalse | Condition::Predicate(_) => Rc::clone(cond),
        Condition::And(l, r) => Rc::new(Condition::And(map_condition(l, f), map_condition(r, f))),
        Condition::Or(l, r) => Rc::new(Condition::Or(map_condition(l, f), map_condition(r, f))),
        Condition::Compare(op, l, r) => Rc::new(Condition::Compare(*op, map_variables(l, f), map_variables(r, f))),
    }
}

pub fn contains_var(expr: &Expr, var: Var) -> bool {
    match expr {
        Expr::Number(_) => false,
        Expr::Variable(v) => *v == var,
        Expr::Add(l, r) | Expr::Sub(l, r) | Expr::Mul(l, r) | Expr::Div(l, r) | Expr::Mod(l, r) => {
            contains_var(l, var) || contains_var(r, var)
        }
        Expr::Neg(e) => contains_var(e, var),
    }
}

pub fn condition_contains_var(cond: &Condition, var: Var) -> bool {
    match cond {
        Condition::AlwaysTrue | Condition::AlwaysFalse | Condition::Predicate(_) => false,
        Condition::And(l, r) | Condition::Or(l, r) => {
            condition_contains_var(l, var) || condition_contains_var(r, var)
        }
        Condition::Compare(_, l, r) => contains_var(l, var) || contains_var(r, var),
    }
}

/// All variables mentioned by `expr`, in canonical name order.
pub fn collect_variables(expr: &Expr) -> BTreeSet<Var> {
    let mut vars = BTreeSet::new();
    let mut stack = vec![expr];
    while let Some(node) = stack.pop() {
        match node {
            Expr::Number(_) => {}
            Expr::Variable(v) => {
                vars.insert(*v);
            }
            Expr::Add(l, r) | Expr::Sub(l, r) | Expr::Mul(l, r) | Expr::Div(l, r) | Expr::Mod(l, r) => {
                stack.push(l);
                stack.push(r);
            }
            Expr::Neg(e) => stack.push(e),
        }
    }
    vars
}
