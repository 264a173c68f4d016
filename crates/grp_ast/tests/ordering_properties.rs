use grp_ast::{compare_expr, Expr, Substitution, Var};
use proptest::prelude::*;
use std::cmp::Ordering;

mod strategies;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn compare_is_reflexive(e in strategies::arb_expr()) {
        prop_assert_eq!(compare_expr(&e, &e), Ordering::Equal);
        let copy = (*e).clone();
        prop_assert_eq!(compare_expr(&e, &copy), Ordering::Equal);
    }

    #[test]
    fn compare_is_antisymmetric(a in strategies::arb_expr(), b in strategies::arb_expr()) {
        prop_assert_eq!(compare_expr(&a, &b), compare_expr(&b, &a).reverse());
    }

    #[test]
    fn compare_is_transitive(
        a in strategies::arb_expr(),
        b in strategies::arb_expr(),
        c in strategies::arb_expr(),
    ) {
        let mut items = [a, b, c];
        items.sort_by(|l, r| compare_expr(l, r));
        prop_assert_ne!(compare_expr(&items[0], &items[1]), Ordering::Greater);
        prop_assert_ne!(compare_expr(&items[1], &items[2]), Ordering::Greater);
        prop_assert_ne!(compare_expr(&items[0], &items[2]), Ordering::Greater);
    }

    #[test]
    fn empty_substitution_is_identity(e in strategies::arb_expr()) {
        let out = Substitution::new().apply(&e);
        prop_assert_eq!(&*out, &*e);
    }

    #[test]
    fn grounding_every_variable_makes_evaluation_total(e in strategies::arb_expr()) {
        let mut subst = Substitution::new();
        for v in Var::ALL {
            subst = subst.bind(v, 3);
        }
        let grounded = subst.apply(&e);
        prop_assert!(grp_ast::collect_variables(&grounded).is_empty());
        // Division by zero may still leave it non-constant, but never panics.
        let _ = grounded.evaluate();
    }

    #[test]
    fn display_never_panics(e in strategies::arb_constant_expr()) {
        let shown = e.to_string();
        prop_assert!(!shown.is_empty());
        let _ = Expr::neg(e).to_string();
    }
}
