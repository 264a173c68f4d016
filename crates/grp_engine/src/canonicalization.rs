//! Canonicalization of membership conditions.
//!
//! Each comparison is rewritten so that the non-constant side stands alone on
//! the left against a single constant: `3 < 2*x + 1` becomes `x > 1`.
//! Range and residue inference only recognise atoms of that shape.

use crate::simplify::Simplifier;
use grp_ast::{Condition, Expr, RelOp};
use num_integer::Integer;
use std::rc::Rc;

/// Canonicalize with default options.
pub fn simplify_condition(cond: &Rc<Condition>) -> Rc<Condition> {
    Simplifier::default().simplify_condition(cond)
}

impl Simplifier {
    pub fn simplify_condition(&self, cond: &Rc<Condition>) -> Rc<Condition> {
        match &**cond {
            Condition::AlwaysTrue | Condition::AlwaysFalse | Condition::Predicate(_) => Rc::clone(cond),
            Condition::And(l, r) => {
                let l = self.simplify_condition(l);
                let r = self.simplify_condition(r);
                match (&*l, &*r) {
                    (Condition::AlwaysFalse, _) | (_, Condition::AlwaysFalse) => Condition::never(),
                    (Condition::AlwaysTrue, _) => r,
                    (_, Condition::AlwaysTrue) => l,
                    _ => Rc::new(Condition::And(l, r)),
                }
            }
            Condition::Or(l, r) => {
                let l = self.simplify_condition(l);
                let r = self.simplify_condition(r);
                match (&*l, &*r) {
                    (Condition::AlwaysTrue, _) | (_, Condition::AlwaysTrue) => Condition::always(),
                    (Condition::AlwaysFalse, _) => r,
                    (_, Condition::AlwaysFalse) => l,
                    _ => Rc::new(Condition::Or(l, r)),
                }
            }
            Condition::Compare(op, l, r) => self.normalize_comparison(*op, self.simplify(l), self.simplify(r)),
        }
    }

    fn normalize_comparison(&self, op: RelOp, lhs: Rc<Expr>, rhs: Rc<Expr>) -> Rc<Condition> {
        let (op, lhs, c) = match (lhs.as_number(), rhs.as_number()) {
            (Some(l), Some(r)) => return constant_truth(op.holds(l, r)),
            (None, Some(c)) => (op, lhs, c),
            // c OP e  ⇔  e OP' c
            (Some(c), None) => (op.mirror(), rhs, c),
            (None, None) => {
                let difference = self.simplify(&Expr::sub(&lhs, &rhs));
                return match difference.as_number() {
                    Some(d) => constant_truth(op.holds(d, 0)),
                    None => self.normalize_comparison(op, difference, Expr::num(0)),
                };
            }
        };
        isolate_comparison(op, lhs, c)
    }
}

fn constant_truth(holds: bool) -> Rc<Condition> {
    if holds {
        Condition::always()
    } else {
        Condition::never()
    }
}

/// Move the constant term and coefficient of `lhs` over to `c`.
fn isolate_comparison(mut op: RelOp, mut lhs: Rc<Expr>, mut c: i64) -> Rc<Condition> {
    // e + k OP c  ⇔  e OP c - k
    if let Expr::Add(rest, last) = &*lhs {
        if let Some(shifted) = last.as_number().and_then(|k| c.checked_sub(k)) {
            c = shifted;
            lhs = Rc::clone(rest);
        }
    }

    match &*lhs {
        // -e OP c  ⇔  e OP' -c
        Expr::Neg(inner) => {
            if let Some(neg_c) = c.checked_neg() {
                op = op.mirror();
                c = neg_c;
                lhs = Rc::clone(inner);
            }
        }
        Expr::Mul(coeff, base) => {
            if let Some(k) = coeff.as_number() {
                match divide_relation(op, k, c) {
                    Some(Some((new_op, quotient))) => {
                        op = new_op;
                        c = quotient;
                        lhs = Rc::clone(base);
                    }
                    Some(None) => return Condition::never(),
                    None => {}
                }
            }
        }
        _ => {}
    }

    Rc::new(Condition::Compare(op, lhs, Expr::num(c)))
}

/// Rewrite `k * e OP c` as `e OP' c'`.
///
/// `Some(None)` marks an unsatisfiable equality; `None` means the coefficient
/// could not be divided out without overflow.
fn divide_relation(op: RelOp, k: i64, c: i64) -> Option<Option<(RelOp, i64)>> {
    if k == 0 {
        return None;
    }
    let (op, k, c) = if k < 0 {
        (op.mirror(), k.checked_neg()?, c.checked_neg()?)
    } else {
        (op, k, c)
    };
    let rewritten = match op {
        RelOp::Eq => {
            if Integer::is_multiple_of(&c, &k) {
                Some((RelOp::Eq, c / k))
            } else {
                None
            }
        }
        RelOp::Gt | RelOp::Leq => Some((op, Integer::div_floor(&c, &k))),
        RelOp::Geq | RelOp::Lt => Some((op, Integer::div_ceil(&c, &k))),
    };
    Some(rewritten)
}

/// Rewrite `cond` as a disjunction of conjunctions, one entry per disjunct.
///
/// `And` distributes over `Or`, so the number of clauses is the product of the
/// disjunct counts of each conjunct.
pub fn disjunctive_clauses(cond: &Rc<Condition>) -> Vec<Rc<Condition>> {
    match &**cond {
        Condition::And(l, r) => {
            let lefts = disjunctive_clauses(l);
            let rights = disjunctive_clauses(r);
            let mut clauses = Vec::with_capacity(lefts.len() * rights.len());
            for left in &lefts {
                for right in &rights {
                    clauses.push(Condition::and(left, right));
                }
            }
            clauses
        }
        Condition::Or(l, r) => {
            let mut clauses = disjunctive_clauses(l);
            clauses.extend(disjunctive_clauses(r));
            clauses
        }
        _ => vec![Rc::clone(cond)],
    }
}
