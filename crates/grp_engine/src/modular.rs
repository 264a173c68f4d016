//! Residue inference: which values `x % n` may take under a condition, and
//! which values `f(x, y) % n` may take when both operands obey it.

use crate::error::GroupError;
use grp_ast::{Condition, Expr, RelOp, Substitution, Var};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::rc::Rc;
use tracing::trace;

/// Allowed residues per modulus. A modulus without an entry is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidueMap {
    sets: BTreeMap<i64, BTreeSet<i64>>,
}

impl ResidueMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(modulus: i64, residues: impl IntoIterator<Item = i64>) -> Self {
        let mut map = Self::new();
        map.sets.insert(modulus, residues.into_iter().collect());
        map
    }

    pub fn get(&self, modulus: i64) -> Option<&BTreeSet<i64>> {
        self.sets.get(&modulus)
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &BTreeSet<i64>)> {
        self.sets.iter().map(|(n, set)| (*n, set))
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Residues allowed by both maps. A modulus constrained on one side only
    /// keeps that side's set.
    pub fn intersect(&self, other: &ResidueMap) -> ResidueMap {
        let mut sets = self.sets.clone();
        for (n, theirs) in &other.sets {
            sets.entry(*n)
                .and_modify(|ours| ours.retain(|r| theirs.contains(r)))
                .or_insert_with(|| theirs.clone());
        }
        ResidueMap { sets }
    }

    /// Residues allowed by either map. A modulus constrained on one side only
    /// is unconstrained on the other, so it widens to every residue.
    pub fn union(&self, other: &ResidueMap) -> ResidueMap {
        let moduli: BTreeSet<i64> = self.sets.keys().chain(other.sets.keys()).copied().collect();
        let sets = moduli
            .into_iter()
            .map(|n| {
                let set = match (self.sets.get(&n), other.sets.get(&n)) {
                    (Some(a), Some(b)) => a.union(b).copied().collect(),
                    _ => (0..n).collect(),
                };
                (n, set)
            })
            .collect();
        ResidueMap { sets }
    }

    /// Every modulus `target` constrains is present here with a subset of the
    /// target's residues.
    pub fn is_within(&self, target: &ResidueMap) -> bool {
        target.sets.iter().all(|(n, allowed)| match self.sets.get(n) {
            Some(inferred) => inferred.is_subset(allowed),
            None => false,
        })
    }
}

impl fmt::Display for ResidueMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (n, set)) in self.sets.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let residues: Vec<String> = set.iter().map(|r| r.to_string()).collect();
            write!(f, "{}: [{}]", n, residues.join(", "))?;
        }
        write!(f, "}}")
    }
}

/// Recognise `x % n OP j` with constant `n` and `j`, validating both.
fn residue_atom(cond: &Condition) -> Result<Option<(RelOp, i64, i64)>, GroupError> {
    let Condition::Compare(op, lhs, rhs) = cond else {
        return Ok(None);
    };
    let Expr::Mod(inner, modulus) = &**lhs else {
        return Ok(None);
    };
    if !inner.is_var(Var::X) {
        return Ok(None);
    }
    let (Some(n), Some(j)) = (modulus.evaluate(), rhs.evaluate()) else {
        return Ok(None);
    };

    if n <= 0 {
        return Err(GroupError::InvalidModulus {
            modulus: n,
            relation: cond.to_string(),
        });
    }
    if j < 0 || j >= n {
        return Err(GroupError::InvalidResidue {
            modulus: n,
            residue: j,
            relation: cond.to_string(),
        });
    }
    Ok(Some((*op, n, j)))
}

/// Residues `x % n` may take under `cond`, per modulus mentioned in it.
pub fn allowed_residues(cond: &Condition) -> Result<ResidueMap, GroupError> {
    match cond {
        Condition::And(l, r) => Ok(allowed_residues(l)?.intersect(&allowed_residues(r)?)),
        Condition::Or(l, r) => Ok(allowed_residues(l)?.union(&allowed_residues(r)?)),
        _ => {
            let Some((op, n, j)) = residue_atom(cond)? else {
                return Ok(ResidueMap::new());
            };
            let residues: BTreeSet<i64> = match op {
                RelOp::Eq => [j].into_iter().collect(),
                RelOp::Gt => (j + 1..n).collect(),
                RelOp::Geq => (j..n).collect(),
                RelOp::Lt => (0..j).collect(),
                RelOp::Leq => (0..=j).collect(),
            };
            Ok(ResidueMap {
                sets: BTreeMap::from([(n, residues)]),
            })
        }
    }
}

/// Largest modulus among the residue atoms of `cond`, validating each atom.
pub fn largest_modulus(cond: &Condition) -> Result<Option<i64>, GroupError> {
    match cond {
        Condition::And(l, r) | Condition::Or(l, r) => Ok(largest_modulus(l)?.max(largest_modulus(r)?)),
        _ => Ok(residue_atom(cond)?.map(|(_, n, _)| n)),
    }
}

/// Residues of `function(x, y)` when `x` and `y` range over the residues in
/// `allowed`, computed from one representative per residue class.
pub fn infer_residues(function: &Rc<Expr>, allowed: &ResidueMap) -> Result<ResidueMap, GroupError> {
    let mut sets = BTreeMap::new();
    for (n, residues) in allowed.iter() {
        let mut produced = BTreeSet::new();
        for &i in residues {
            for &j in residues {
                let value = Substitution::operands(i, j)
                    .apply(function)
                    .evaluate()
                    .ok_or_else(|| GroupError::ResidueEvaluation {
                        function: function.to_string(),
                        x: i,
                        y: j,
                    })?;
                produced.insert(value.rem_euclid(n));
            }
        }
        trace!(target: "residue", modulus = n, function = %function, residues = ?produced, "inferred");
        sets.insert(n, produced);
    }
    Ok(ResidueMap { sets })
}
