//! Canonical-form simplification of arithmetic expressions.
//!
//! A single bottom-up pass produces the normal form; running it again is a no-op.
//!
//! Normal form:
//! - sums are left-nested `Add` chains of terms sorted by the canonical order,
//!   with the folded constant (if non-zero) as the last term;
//! - a term is `base`, `-base`, or `k * base` for a constant `k ∉ {0, 1, -1}`;
//! - a base is a left-nested `Mul` chain of sorted non-constant factors;
//! - `a - b` is `a + -b`, and negation is pushed into sums;
//! - products of sums are distributed (within [`SimplifyOptions::max_distributed_terms`]);
//! - `/` and `%` are only constant-folded.

use crate::options::SimplifyOptions;
use grp_ast::{compare_expr, expr_eq, Expr};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, Default)]
pub struct Simplifier {
    options: SimplifyOptions,
}

/// Simplify with default options.
pub fn simplify(expr: &Rc<Expr>) -> Rc<Expr> {
    Simplifier::default().simplify(expr)
}

impl Simplifier {
    pub fn new(options: SimplifyOptions) -> Self {
        Simplifier { options }
    }

    pub fn options(&self) -> SimplifyOptions {
        self.options
    }

    pub fn simplify(&self, expr: &Rc<Expr>) -> Rc<Expr> {
        let result = self.simplify_node(expr);
        tracing::trace!(target: "simplify", input = %expr, output = %result, "simplified");
        result
    }

    fn simplify_node(&self, expr: &Rc<Expr>) -> Rc<Expr> {
        if let Some(value) = expr.evaluate() {
            return match **expr {
                Expr::Number(_) => Rc::clone(expr),
                _ => Expr::num(value),
            };
        }

        match &**expr {
            Expr::Number(_) | Expr::Variable(_) => Rc::clone(expr),
            Expr::Add(l, r) => {
                let mut terms = Vec::new();
                push_terms(&self.simplify_node(l), &mut terms);
                push_terms(&self.simplify_node(r), &mut terms);
                build_sum(terms)
            }
            Expr::Sub(l, r) => self.simplify_node(&Expr::add(l, Expr::neg(r))),
            Expr::Neg(e) => negate(&self.simplify_node(e)),
            Expr::Mul(_, _) => {
                // The whole chain at once, so the distribution decision does
                // not depend on how the product was parenthesized.
                let mut operands = Vec::new();
                push_operands(expr, &mut operands);
                let operands = operands.iter().map(|o| self.simplify_node(o)).collect();
                self.multiply(operands)
            }
            Expr::Div(l, r) => fold_constant(Expr::div(self.simplify_node(l), self.simplify_node(r))),
            Expr::Mod(l, r) => fold_constant(Expr::modulo(self.simplify_node(l), self.simplify_node(r))),
        }
    }

    /// Product of simplified expressions, in normal form.
    ///
    /// Sum factors are distributed when the expansion stays within
    /// `max_distributed_terms`; otherwise they are kept as factors.
    fn multiply(&self, operands: Vec<Rc<Expr>>) -> Rc<Expr> {
        let mut coeff = 1i64;
        let mut factors = Vec::new();
        for operand in &operands {
            collect_factors(operand, &mut coeff, &mut factors);
        }
        if coeff == 0 {
            return Expr::num(0);
        }

        let (sums, plain): (Vec<_>, Vec<_>) = factors.into_iter().partition(|f| matches!(**f, Expr::Add(_, _)));
        let product_count = sums
            .iter()
            .fold(1usize, |acc, sum| acc.saturating_mul(sum_terms(sum).len()));
        if sums.is_empty() || product_count > self.options.max_distributed_terms {
            let mut all = plain;
            all.extend(sums);
            return build_product(coeff, all);
        }

        let mut products = vec![build_product(coeff, plain)];
        for sum in &sums {
            let mut next = Vec::with_capacity(products.len() * 2);
            for product in &products {
                for term in sum_terms(sum) {
                    push_terms(&self.multiply(vec![Rc::clone(product), term]), &mut next);
                }
            }
            products = next;
        }
        build_sum(products)
    }
}

fn push_operands(expr: &Rc<Expr>, out: &mut Vec<Rc<Expr>>) {
    match &**expr {
        Expr::Mul(l, r) => {
            push_operands(l, out);
            push_operands(r, out);
        }
        _ => out.push(Rc::clone(expr)),
    }
}

fn fold_constant(expr: Rc<Expr>) -> Rc<Expr> {
    match expr.evaluate() {
        Some(value) => Expr::num(value),
        None => expr,
    }
}

fn push_terms(expr: &Rc<Expr>, out: &mut Vec<Rc<Expr>>) {
    match &**expr {
        Expr::Add(l, r) => {
            push_terms(l, out);
            push_terms(r, out);
        }
        _ => out.push(Rc::clone(expr)),
    }
}

/// The terms of a simplified sum; a non-sum is a single term.
pub(crate) fn sum_terms(expr: &Rc<Expr>) -> Vec<Rc<Expr>> {
    let mut terms = Vec::new();
    push_terms(expr, &mut terms);
    terms
}

/// Split a simplified term into `(coefficient, base)`.
pub(crate) fn split_term(term: &Rc<Expr>) -> (i64, Rc<Expr>) {
    match &**term {
        Expr::Neg(inner) => {
            let (k, base) = split_term(inner);
            match k.checked_neg() {
                Some(neg_k) => (neg_k, base),
                None => (1, Rc::clone(term)),
            }
        }
        Expr::Mul(l, r) => match l.as_number() {
            Some(k) => (k, Rc::clone(r)),
            None => (1, Rc::clone(term)),
        },
        _ => (1, Rc::clone(term)),
    }
}

/// Inverse of [`split_term`].
pub(crate) fn make_term(coeff: i64, base: Rc<Expr>) -> Rc<Expr> {
    match coeff {
        0 => Expr::num(0),
        1 => base,
        -1 => Rc::new(Expr::Neg(base)),
        k => Rc::new(Expr::Mul(Expr::num(k), base)),
    }
}

/// Assemble simplified terms into a canonical sum: fold constants, merge like
/// terms, drop zeros, sort.
pub(crate) fn build_sum(terms: Vec<Rc<Expr>>) -> Rc<Expr> {
    // Constants that would overflow when folded stay as separate terms.
    let mut constants: Vec<i64> = Vec::new();
    let mut merged: Vec<(i64, Rc<Expr>)> = Vec::new();

    for term in terms {
        if let Some(n) = term.as_number() {
            match constants.last().and_then(|c| c.checked_add(n)) {
                Some(sum) => {
                    let last = constants.len() - 1;
                    constants[last] = sum;
                }
                None => constants.push(n),
            }
            continue;
        }

        let (k, base) = split_term(&term);
        match merged.iter().position(|(_, b)| expr_eq(b, &base)) {
            Some(i) => match merged[i].0.checked_add(k) {
                Some(sum) => merged[i].0 = sum,
                None => merged.push((k, base)),
            },
            None => merged.push((k, base)),
        }
    }

    let mut out: Vec<Rc<Expr>> = merged
        .into_iter()
        .filter(|(k, _)| *k != 0)
        .map(|(k, base)| make_term(k, base))
        .collect();
    out.sort_by(|a, b| compare_expr(a, b));
    out.extend(constants.into_iter().filter(|c| *c != 0).map(Expr::num));

    out.into_iter()
        .reduce(|acc, term| Rc::new(Expr::Add(acc, term)))
        .unwrap_or_else(|| Expr::num(0))
}

fn collect_factors(expr: &Rc<Expr>, coeff: &mut i64, factors: &mut Vec<Rc<Expr>>) {
    match &**expr {
        Expr::Number(n) => match coeff.checked_mul(*n) {
            Some(c) => *coeff = c,
            None => factors.push(Rc::clone(expr)),
        },
        Expr::Neg(inner) => {
            match coeff.checked_neg() {
                Some(c) => *coeff = c,
                None => factors.push(Expr::num(-1)),
            }
            collect_factors(inner, coeff, factors);
        }
        Expr::Mul(l, r) => {
            collect_factors(l, coeff, factors);
            collect_factors(r, coeff, factors);
        }
        _ => factors.push(Rc::clone(expr)),
    }
}

fn build_product(coeff: i64, mut factors: Vec<Rc<Expr>>) -> Rc<Expr> {
    if coeff == 0 {
        return Expr::num(0);
    }
    factors.sort_by(|a, b| compare_expr(a, b));
    match factors.into_iter().reduce(|acc, f| Rc::new(Expr::Mul(acc, f))) {
        Some(base) => make_term(coeff, base),
        None => Expr::num(coeff),
    }
}

/// Negation of a simplified expression, in normal form.
pub(crate) fn negate(expr: &Rc<Expr>) -> Rc<Expr> {
    match &**expr {
        Expr::Number(n) => match n.checked_neg() {
            Some(v) => Expr::num(v),
            None => Rc::new(Expr::Neg(Rc::clone(expr))),
        },
        Expr::Neg(inner) => Rc::clone(inner),
        Expr::Add(_, _) => {
            let terms = sum_terms(expr).iter().map(negate).collect();
            build_sum(terms)
        }
        _ => {
            let (k, base) = split_term(expr);
            match k.checked_neg() {
                Some(neg_k) => make_term(neg_k, base),
                None => Rc::new(Expr::Neg(Rc::clone(expr))),
            }
        }
    }
}

/// `expr / k` when every coefficient of the simplified `expr` is divisible by `k`.
pub(crate) fn divide_exact(expr: &Rc<Expr>, k: i64) -> Option<Rc<Expr>> {
    if k == 0 {
        return None;
    }
    let mut quotient = Vec::new();
    for term in sum_terms(expr) {
        match term.as_number() {
            Some(n) => {
                if n.checked_rem(k)? != 0 {
                    return None;
                }
                quotient.push(Expr::num(n.checked_div(k)?));
            }
            None => {
                let (c, base) = split_term(&term);
                if c.checked_rem(k)? != 0 {
                    return None;
                }
                quotient.push(make_term(c.checked_div(k)?, base));
            }
        }
    }
    Some(build_sum(quotient))
}
