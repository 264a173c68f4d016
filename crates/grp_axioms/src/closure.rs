//! Closure: `f(x, y)` satisfies the condition whenever `x` and `y` do.
//!
//! Proved from two independent over-approximations of the function's image,
//! one per residue class and one per interval. Both must stay inside the
//! allowed set.

use grp_ast::{Condition, Expr};
use grp_engine::{
    allowed_ranges, allowed_residues, disjunctive_clauses, infer_residues, largest_modulus, ranges_closed,
    unsupported_atom, CheckOptions, GroupError,
};
use std::rc::Rc;
use tracing::{debug, warn};

pub fn check_closure(cond: &Rc<Condition>, function: &Rc<Expr>, options: &CheckOptions) -> Result<bool, GroupError> {
    if let Some(modulus) = largest_modulus(cond)? {
        if modulus > options.max_residue_modulus {
            warn!(
                target: "closure",
                modulus,
                limit = options.max_residue_modulus,
                "residue_budget_exceeded"
            );
            return Ok(false);
        }
    }

    if let Some(atom) = unsupported_atom(cond) {
        debug!(target: "closure", condition = %cond, atom = %atom, "unsupported_atom");
        return Ok(false);
    }

    let target = allowed_residues(cond)?;

    let clauses = disjunctive_clauses(cond);
    for clause in &clauses {
        if allowed_residues(clause)? != target {
            debug!(target: "closure", condition = %cond, clause = %clause, "mixed_residue_clauses");
            return Ok(false);
        }
    }

    let inferred = infer_residues(function, &target)?;
    if !inferred.is_within(&target) {
        debug!(
            target: "closure",
            function = %function,
            allowed = %target,
            inferred = %inferred,
            "residues_escape"
        );
        return Ok(false);
    }

    let ranges = allowed_ranges(cond)?;
    let closed = ranges_closed(&ranges, function);
    debug!(target: "closure", condition = %cond, function = %function, residues = %target, closed, "checked");
    Ok(closed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grp_ast::Var;
    use grp_engine::simplify_condition;

    fn closed(cond: Rc<Condition>, function: Rc<Expr>) -> bool {
        check_closure(&simplify_condition(&cond), &function, &CheckOptions::default()).unwrap()
    }

    #[test]
    fn test_unconstrained_is_closed() {
        assert!(closed(Condition::always(), Expr::add(Var::X, Var::Y)));
        assert!(closed(Condition::always(), Expr::mul(Var::X, Var::Y)));
    }

    #[test]
    fn test_residues() {
        let evens = Condition::eq(Expr::modulo(Var::X, 2), 0);
        assert!(closed(evens.clone(), Expr::add(Var::X, Var::Y)));
        assert!(closed(evens, Expr::mul(Var::X, Var::Y)));

        let odds = Condition::eq(Expr::modulo(Var::X, 2), 1);
        assert!(!closed(odds.clone(), Expr::add(Var::X, Var::Y)));
        assert!(closed(odds, Expr::mul(Var::X, Var::Y)));

        // 2 + 3 ≡ 1 (mod 4)
        assert!(!closed(Condition::gt(Expr::modulo(Var::X, 4), 1), Expr::add(Var::X, Var::Y)));
    }

    #[test]
    fn test_ranges() {
        assert!(closed(Condition::geq(Var::X, 5), Expr::add(Var::X, Var::Y)));
        assert!(closed(Condition::geq(Var::X, 0), Expr::mul(Var::X, Var::Y)));
        assert!(!closed(Condition::geq(Var::X, -3), Expr::add(Var::X, Var::Y)));
        assert!(!closed(Condition::leq(Var::X, 10), Expr::mul(Var::X, Var::Y)));

        let outside = Condition::or(Condition::lt(Var::X, -4), Condition::gt(Var::X, 4));
        assert!(!closed(outside, Expr::add(Var::X, Var::Y)));
    }

    #[test]
    fn test_single_variable_function() {
        // The inverse check feeds one-variable functions through here
        assert!(closed(Condition::always(), Expr::neg(Var::X)));
        assert!(!closed(Condition::geq(Var::X, 0), Expr::neg(Var::X)));
        assert!(closed(Condition::eq(Expr::modulo(Var::X, 3), 0), Expr::neg(Var::X)));
    }

    #[test]
    fn test_mixed_clauses_are_refused() {
        // x ≥ 0 || x % 2 == 0: the residue constraint only holds on one branch
        let c = Condition::or(Condition::geq(Var::X, 0), Condition::eq(Expr::modulo(Var::X, 2), 0));
        assert!(!closed(c, Expr::add(Var::X, Var::Y)));
    }

    #[test]
    fn test_unbounded_atoms_are_refused() {
        // both describe {-1, 0, 1}, where 1 + 1 escapes
        assert!(!closed(Condition::eq(Expr::div(Var::X, 2), 0), Expr::add(Var::X, Var::Y)));
        assert!(!closed(Condition::leq(Expr::mul(Var::X, Var::X), 1), Expr::add(Var::X, Var::Y)));
        assert!(!closed(Condition::leq(Expr::mul(Var::X, Var::X), 1), Expr::mul(Var::X, Var::Y)));
    }

    #[test]
    fn test_residue_budget() {
        let options = CheckOptions {
            max_residue_modulus: 8,
            ..CheckOptions::default()
        };
        let cond = simplify_condition(&Condition::eq(Expr::modulo(Var::X, 16), 0));
        let sum = Expr::add(Var::X, Var::Y);
        assert_eq!(check_closure(&cond, &sum, &options), Ok(false));
        assert_eq!(check_closure(&cond, &sum, &CheckOptions::default()), Ok(true));
    }

    #[test]
    fn test_fatal_errors_propagate() {
        let cond = Condition::eq(Expr::modulo(Var::X, 3), 5);
        let err = check_closure(&cond, &Expr::add(Var::X, Var::Y), &CheckOptions::default()).unwrap_err();
        assert!(matches!(err, GroupError::InvalidResidue { modulus: 3, residue: 5, .. }));

        let cond = Condition::and(Condition::eq(Var::X, 1), Condition::eq(Var::X, 2));
        let err = check_closure(&cond, &Expr::add(Var::X, Var::Y), &CheckOptions::default()).unwrap_err();
        assert_eq!(err, GroupError::ConflictingEquality { first: 1, second: 2 });
    }
}
