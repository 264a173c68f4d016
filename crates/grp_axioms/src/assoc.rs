use grp_ast::{expr_eq, Expr, Substitution, Var};
use grp_engine::Simplifier;
use std::rc::Rc;
use tracing::debug;

/// `f(f(a, b), c)` and `f(a, f(b, c))` simplify to the same canonical form.
///
/// A negative answer only means the two normal forms differ; it is not a
/// proof of non-associativity.
pub fn check_associative(function: &Rc<Expr>, simplifier: &Simplifier) -> bool {
    let ab = Substitution::operands(Var::A, Var::B).apply(function);
    let bc = Substitution::operands(Var::B, Var::C).apply(function);

    let left = simplifier.simplify(&Substitution::operands(ab, Var::C).apply(function));
    let right = simplifier.simplify(&Substitution::operands(Var::A, bc).apply(function));

    let associative = expr_eq(&left, &right);
    debug!(target: "axioms", function = %function, left = %left, right = %right, associative, "associativity");
    associative
}
