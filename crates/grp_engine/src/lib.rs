pub mod canonicalization;
pub mod error;
pub mod modular;
pub mod options;
pub mod range;
pub mod simplify;
pub mod solver;

pub use canonicalization::{disjunctive_clauses, simplify_condition};
pub use error::GroupError;
pub use modular::{allowed_residues, infer_residues, largest_modulus, ResidueMap};
pub use options::{CheckOptions, SimplifyOptions};
pub use range::{
    allowed_ranges, forbidden_ranges, pinned, propagate_range, ranges_closed, unsupported_atom, Bound, Interval,
};
pub use simplify::{simplify, Simplifier};
pub use solver::{solve, SolveOutcome};
