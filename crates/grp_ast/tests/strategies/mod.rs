use grp_ast::{Expr, Var};
use proptest::prelude::*;
use std::rc::Rc;

pub fn arb_var() -> impl Strategy<Value = Var> {
    prop_oneof![Just(Var::A), Just(Var::B), Just(Var::C), Just(Var::X), Just(Var::Y)]
}

pub fn arb_expr() -> impl Strategy<Value = Rc<Expr>> {
    let leaf = prop_oneof![
        // Numbers: small integers for simplicity
        (-10i64..10).prop_map(Expr::num),
        arb_var().prop_map(Expr::var),
    ];

    leaf.prop_recursive(
        4,  // levels deep
        32, // max size
        2,  // items per collection
        |inner| {
            prop_oneof![
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::add(l, r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::sub(l, r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::mul(l, r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::div(l, r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::modulo(l, r)),
                inner.clone().prop_map(|e| Expr::neg(e)),
            ]
        },
    )
}

/// Constant-only trees, for checks against `evaluate`.
pub fn arb_constant_expr() -> impl Strategy<Value = Rc<Expr>> {
    (-20i64..20).prop_map(Expr::num).prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::add(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::sub(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::mul(l, r)),
            inner.clone().prop_map(|e| Expr::neg(e)),
        ]
    })
}
