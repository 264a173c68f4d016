#![allow(dead_code)]

use grp_ast::{Expr, RelOp, Var};
use grp_engine::{Bound, Interval};
use proptest::prelude::*;
use std::rc::Rc;

pub fn arb_var() -> impl Strategy<Value = Var> {
    prop_oneof![Just(Var::A), Just(Var::B), Just(Var::C), Just(Var::X), Just(Var::Y)]
}

pub fn arb_expr() -> impl Strategy<Value = Rc<Expr>> {
    let leaf = prop_oneof![(-10i64..10).prop_map(Expr::num), arb_var().prop_map(Expr::var)];

    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::add(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::sub(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::mul(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::div(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::modulo(l, r)),
            inner.clone().prop_map(|e| Expr::neg(e)),
        ]
    })
}

/// Functions of `x` and `y` only.
pub fn arb_function() -> impl Strategy<Value = Rc<Expr>> {
    let leaf = prop_oneof![
        (-6i64..6).prop_map(Expr::num),
        Just(Expr::var(Var::X)),
        Just(Expr::var(Var::Y)),
    ];

    leaf.prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::add(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::sub(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::mul(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::div(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::modulo(l, r)),
            inner.clone().prop_map(|e| Expr::neg(e)),
        ]
    })
}

/// Linear expressions in `x`: sums of constants and constant multiples of `x`.
pub fn arb_linear() -> impl Strategy<Value = Rc<Expr>> {
    let leaf = prop_oneof![(-9i64..9).prop_map(Expr::num), Just(Expr::var(Var::X))];

    leaf.prop_recursive(3, 12, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::add(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::sub(l, r)),
            ((-4i64..4), inner.clone()).prop_map(|(k, e)| Expr::mul(k, e)),
            inner.clone().prop_map(|e| Expr::neg(e)),
        ]
    })
}

pub fn arb_relop() -> impl Strategy<Value = RelOp> {
    prop_oneof![
        Just(RelOp::Eq),
        Just(RelOp::Gt),
        Just(RelOp::Geq),
        Just(RelOp::Lt),
        Just(RelOp::Leq),
    ]
}

pub fn arb_bound() -> impl Strategy<Value = Bound> {
    prop_oneof![
        1 => Just(Bound::NegInf),
        4 => (-20i64..20).prop_map(Bound::Finite),
        1 => Just(Bound::PosInf),
    ]
}

/// Possibly empty intervals.
pub fn arb_interval() -> impl Strategy<Value = Interval> {
    (arb_bound(), arb_bound()).prop_map(|(low, high)| Interval::new(low, high))
}

/// Non-empty finite intervals within a small window.
pub fn arb_finite_interval() -> impl Strategy<Value = Interval> {
    (-15i64..15, 0i64..10).prop_map(|(low, width)| Interval::finite(low, low + width))
}
