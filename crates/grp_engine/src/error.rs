use thiserror::Error;

/// Fatal validation errors. Any of these aborts the whole group check; they are
/// never folded into an ordinary "not a group" verdict.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    #[error("Invalid modulus {modulus} in '{relation}'")]
    InvalidModulus { modulus: i64, relation: String },
    #[error("Residue {residue} out of range for modulus {modulus} in '{relation}'")]
    InvalidResidue {
        modulus: i64,
        residue: i64,
        relation: String,
    },
    #[error("Conflicting equalities: x == {first} and x == {second}")]
    ConflictingEquality { first: i64, second: i64 },
    #[error("Cannot evaluate '{function}' at x = {x}, y = {y}")]
    ResidueEvaluation { function: String, x: i64, y: i64 },
}
