//! Group axiom checks for integer sets under a binary operation.
//!
//! ```
//! use grp_axioms::{Condition, Expr, Group, Var};
//!
//! let mut evens = Group::new(Condition::eq(Expr::modulo(Var::X, 2), 0), Expr::add(Var::X, Var::Y));
//! assert_eq!(evens.is_group(), Ok(true));
//! assert_eq!(evens.inverse().map(|e| e.to_string()), Some("-x".to_string()));
//! ```

pub mod assoc;
pub mod closure;
pub mod group;
pub mod identity;

pub use assoc::check_associative;
pub use closure::check_closure;
pub use group::{AxiomFailure, Group};
pub use identity::{check_identity, check_inverse};

pub use grp_ast::{Condition, Expr, IntoCondition, IntoExpr, RelOp, Var};
pub use grp_engine::{CheckOptions, GroupError, SimplifyOptions};
