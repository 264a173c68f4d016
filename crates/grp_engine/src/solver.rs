//! Isolation of a single variable in an equation.
//!
//! Only the shapes the simplifier produces are handled; anything else is
//! reported as [`SolveOutcome::Unsolved`], which callers treat as an ordinary
//! negative result.

use crate::simplify::{build_sum, divide_exact, sum_terms, Simplifier};
use grp_ast::{contains_var, expr_eq, Equation, Expr, Var};
use std::rc::Rc;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// `target == rhs` with `rhs` free of the target.
    Isolated(Equation),
    /// `target % n == rhs`: a residue fact rather than a value.
    Residue(Equation),
    /// The last equation reached before giving up.
    Unsolved(Equation),
}

impl SolveOutcome {
    pub fn is_solved(&self) -> bool {
        !matches!(self, SolveOutcome::Unsolved(_))
    }

    pub fn equation(&self) -> &Equation {
        match self {
            SolveOutcome::Isolated(eq) | SolveOutcome::Residue(eq) | SolveOutcome::Unsolved(eq) => eq,
        }
    }

    /// The expression the target was isolated to.
    pub fn value(&self) -> Option<&Rc<Expr>> {
        match self {
            SolveOutcome::Isolated(eq) => Some(&eq.rhs),
            _ => None,
        }
    }
}

pub fn solve(equation: &Equation, target: Var, simplifier: &Simplifier) -> SolveOutcome {
    let lhs = simplifier.simplify(&equation.lhs);
    let rhs = simplifier.simplify(&equation.rhs);

    let (lhs, rhs) = match (contains_var(&lhs, target), contains_var(&rhs, target)) {
        (true, false) => (lhs, rhs),
        (false, true) => (rhs, lhs),
        (true, true) => (simplifier.simplify(&Expr::sub(&lhs, &rhs)), Expr::num(0)),
        (false, false) => {
            debug!(target: "solve", equation = %equation, var = %target, "target_absent");
            return SolveOutcome::Unsolved(Equation { lhs, rhs });
        }
    };

    isolate(lhs, rhs, target, simplifier)
}

fn isolate(mut lhs: Rc<Expr>, mut rhs: Rc<Expr>, target: Var, simplifier: &Simplifier) -> SolveOutcome {
    loop {
        trace!(target: "solve", lhs = %lhs, rhs = %rhs, "isolation_step");

        if !contains_var(&lhs, target) {
            return give_up(lhs, rhs, "target_cancelled");
        }

        match &*lhs {
            Expr::Variable(v) if *v == target => {
                return SolveOutcome::Isolated(Equation { lhs, rhs });
            }
            Expr::Add(_, _) => {
                let (bearing, free): (Vec<_>, Vec<_>) =
                    sum_terms(&lhs).into_iter().partition(|t| contains_var(t, target));
                if free.is_empty() {
                    return give_up(lhs, rhs, "no_free_terms");
                }
                let moved = free.iter().fold(rhs, |acc, term| Expr::sub(acc, term));
                rhs = simplifier.simplify(&moved);
                lhs = build_sum(bearing);
            }
            Expr::Neg(inner) => {
                rhs = simplifier.simplify(&Expr::neg(&rhs));
                lhs = Rc::clone(inner);
            }
            Expr::Mul(l, r) => {
                if let Some(k) = l.as_number() {
                    match divide_exact(&rhs, k) {
                        Some(quotient) => {
                            rhs = quotient;
                            lhs = Rc::clone(r);
                        }
                        None => return give_up(lhs, rhs, "not_divisible"),
                    }
                    continue;
                }

                // target * e == e  ⇒  target == 1
                let (bearing, free): (Vec<_>, Vec<_>) =
                    product_factors(&lhs).into_iter().partition(|f| contains_var(f, target));
                let free_product = free.into_iter().reduce(|acc, f| Rc::new(Expr::Mul(acc, f)));
                match free_product {
                    Some(p) if expr_eq(&simplifier.simplify(&p), &rhs) => {
                        lhs = simplifier.simplify(&rebuild_product(bearing));
                        rhs = Expr::num(1);
                    }
                    _ => return give_up(lhs, rhs, "non_linear"),
                }
            }
            Expr::Mod(inner, modulus) if inner.is_var(target) && modulus.is_constant() => {
                return SolveOutcome::Residue(Equation { lhs, rhs });
            }
            _ => return give_up(lhs, rhs, "unsupported_shape"),
        }
    }
}

fn give_up(lhs: Rc<Expr>, rhs: Rc<Expr>, reason: &'static str) -> SolveOutcome {
    debug!(target: "solve", lhs = %lhs, rhs = %rhs, reason, "unsolved");
    SolveOutcome::Unsolved(Equation { lhs, rhs })
}

fn product_factors(expr: &Rc<Expr>) -> Vec<Rc<Expr>> {
    let mut factors = Vec::new();
    let mut stack = vec![Rc::clone(expr)];
    while let Some(node) = stack.pop() {
        match &*node {
            Expr::Mul(l, r) => {
                stack.push(Rc::clone(r));
                stack.push(Rc::clone(l));
            }
            _ => factors.push(node),
        }
    }
    factors
}

fn rebuild_product(factors: Vec<Rc<Expr>>) -> Rc<Expr> {
    factors
        .into_iter()
        .reduce(|acc, f| Rc::new(Expr::Mul(acc, f)))
        .unwrap_or_else(|| Expr::num(1))
}
