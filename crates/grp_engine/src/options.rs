//! Tuning knobs for simplification and the closure check.

/// Options for the [`Simplifier`](crate::Simplifier).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimplifyOptions {
    /// Largest number of products a single distribution `(a + b + ..) * (c + ..)`
    /// may materialize. Larger products are kept undistributed.
    pub max_distributed_terms: usize,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        SimplifyOptions {
            max_distributed_terms: 256,
        }
    }
}

/// Options for a full group check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckOptions {
    pub simplify: SimplifyOptions,
    /// Residue inference evaluates the function on every pair of allowed
    /// residues, i.e. up to `n²` evaluations per modulus `n`. Conditions with a
    /// larger modulus are reported as not proven closed.
    pub max_residue_modulus: i64,
}

impl Default for CheckOptions {
    fn default() -> Self {
        CheckOptions {
            simplify: SimplifyOptions::default(),
            max_residue_modulus: 1024,
        }
    }
}
