//! Identity and inverse elements, found by solving `f(b, a) == b` and
//! `f(a, b) == e` for `a`.

use crate::closure::check_closure;
use grp_ast::{expr_eq, Condition, Equation, Expr, Substitution, Var};
use grp_engine::{CheckOptions, GroupError, Simplifier};
use std::rc::Rc;
use tracing::debug;

/// Solve `f(b, a) == rhs` and `f(a, b) == rhs` for `a`, requiring both sides
/// to isolate `a` to the same expression.
fn two_sided_solution(function: &Rc<Expr>, rhs: &Rc<Expr>, simplifier: &Simplifier) -> Option<Rc<Expr>> {
    let right = Substitution::operands(Var::B, Var::A).apply(function);
    let left = Substitution::operands(Var::A, Var::B).apply(function);

    let right = grp_engine::solve(&Equation::new(right, rhs), Var::A, simplifier);
    let left = grp_engine::solve(&Equation::new(left, rhs), Var::A, simplifier);

    match (right.value(), left.value()) {
        (Some(r), Some(l)) if expr_eq(r, l) => Some(Rc::clone(r)),
        _ => {
            debug!(
                target: "axioms",
                function = %function,
                right = %right.equation(),
                left = %left.equation(),
                "sides_disagree"
            );
            None
        }
    }
}

/// The identity element `e` of `function` under `cond`, if one exists.
///
/// `e` must be a constant solving both `f(b, e) == b` and `f(e, b) == b`, and
/// must itself satisfy the condition.
pub fn check_identity(cond: &Rc<Condition>, function: &Rc<Expr>, simplifier: &Simplifier) -> Option<Rc<Expr>> {
    let identity = two_sided_solution(function, &Expr::var(Var::B), simplifier)?;
    let value = identity.as_number()?;

    let member = Substitution::new().bind(Var::X, value).apply_condition(cond).evaluate();
    debug!(target: "axioms", function = %function, identity = value, member, "identity");
    member.then_some(identity)
}

/// The inverse of `x` under `function` with identity `identity`, as a
/// function of `x`.
///
/// The inverse is only accepted when it maps the allowed set into itself.
pub fn check_inverse(
    cond: &Rc<Condition>,
    function: &Rc<Expr>,
    identity: &Rc<Expr>,
    options: &CheckOptions,
    simplifier: &Simplifier,
) -> Result<Option<Rc<Expr>>, GroupError> {
    let Some(solution) = two_sided_solution(function, identity, simplifier) else {
        return Ok(None);
    };
    let inverse = simplifier.simplify(&Substitution::new().bind(Var::B, Var::X).apply(&solution));

    let closed = check_closure(cond, &inverse, options)?;
    debug!(target: "axioms", function = %function, inverse = %inverse, closed, "inverse");
    Ok(closed.then_some(inverse))
}
