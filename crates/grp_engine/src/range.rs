//! Interval inference over the integers.
//!
//! A condition on `x` is approximated by a union of closed intervals
//! ([`allowed_ranges`]); its complement by the gaps between them
//! ([`forbidden_ranges`]). A function is range-closed when the interval image
//! of the allowed set ([`propagate_range`]) misses every gap.
//!
//! Endpoint arithmetic is carried out in `i128` and rounded outward when the
//! result leaves `i64`, so every derived interval over-approximates the
//! concrete value set.

use crate::canonicalization::disjunctive_clauses;
use crate::error::GroupError;
use grp_ast::{condition_contains_var, Condition, Expr, RelOp, Var};
use std::cmp::{self, Ordering};
use std::fmt;
use std::rc::Rc;
use tracing::trace;

// =============================================================================
// Bound Type
// =============================================================================

/// Interval endpoint: negative infinity, a finite value, or positive infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    NegInf,
    Finite(i64),
    PosInf,
}

impl Bound {
    pub fn as_finite(self) -> Option<i64> {
        match self {
            Bound::Finite(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Bound::Finite(_))
    }

    /// The next integer position; `None` past `i64::MAX`.
    fn succ(self) -> Option<Bound> {
        match self {
            Bound::Finite(n) => n.checked_add(1).map(Bound::Finite),
            infinite => Some(infinite),
        }
    }

    /// The previous integer position; `None` before `i64::MIN`.
    fn pred(self) -> Option<Bound> {
        match self {
            Bound::Finite(n) => n.checked_sub(1).map(Bound::Finite),
            infinite => Some(infinite),
        }
    }
}

impl PartialOrd for Bound {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bound {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Bound::NegInf, Bound::NegInf) => Ordering::Equal,
            (Bound::NegInf, _) => Ordering::Less,
            (_, Bound::NegInf) => Ordering::Greater,
            (Bound::PosInf, Bound::PosInf) => Ordering::Equal,
            (Bound::PosInf, _) => Ordering::Greater,
            (_, Bound::PosInf) => Ordering::Less,
            (Bound::Finite(a), Bound::Finite(b)) => a.cmp(b),
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::NegInf => write!(f, "-∞"),
            Bound::Finite(n) => write!(f, "{}", n),
            Bound::PosInf => write!(f, "+∞"),
        }
    }
}

/// Endpoint value wide enough to hold any sum or product of two `i64` bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Wide {
    NegInf,
    Finite(i128),
    PosInf,
}

impl From<Bound> for Wide {
    fn from(b: Bound) -> Self {
        match b {
            Bound::NegInf => Wide::NegInf,
            Bound::Finite(n) => Wide::Finite(n as i128),
            Bound::PosInf => Wide::PosInf,
        }
    }
}

impl Wide {
    fn signum(self) -> i128 {
        match self {
            Wide::NegInf => -1,
            Wide::Finite(n) => n.signum(),
            Wide::PosInf => 1,
        }
    }

    fn infinity(sign: i128) -> Wide {
        if sign < 0 {
            Wide::NegInf
        } else {
            Wide::PosInf
        }
    }

    fn neg(self) -> Wide {
        match self {
            Wide::NegInf => Wide::PosInf,
            Wide::Finite(n) => Wide::Finite(-n),
            Wide::PosInf => Wide::NegInf,
        }
    }

    /// `None` for `∞ + -∞`.
    fn add(self, other: Wide) -> Option<Wide> {
        match (self, other) {
            (Wide::Finite(a), Wide::Finite(b)) => Some(Wide::Finite(a + b)),
            (Wide::NegInf, Wide::PosInf) | (Wide::PosInf, Wide::NegInf) => None,
            (Wide::NegInf, _) | (_, Wide::NegInf) => Some(Wide::NegInf),
            _ => Some(Wide::PosInf),
        }
    }

    /// `0 · ∞` is taken as `0`.
    fn mul(self, other: Wide) -> Wide {
        match (self, other) {
            (Wide::Finite(a), Wide::Finite(b)) => Wide::Finite(a * b),
            _ => match self.signum() * other.signum() {
                0 => Wide::Finite(0),
                sign => Wide::infinity(sign),
            },
        }
    }

    /// Truncating division by a non-zero divisor; `None` for `∞ / ∞`.
    fn div(self, divisor: Wide) -> Option<Wide> {
        match (self, divisor) {
            (_, Wide::Finite(0)) => None,
            (Wide::Finite(a), Wide::Finite(b)) => Some(Wide::Finite(a / b)),
            (Wide::Finite(_), _) => Some(Wide::Finite(0)),
            (_, Wide::Finite(b)) => Some(Wide::infinity(self.signum() * b.signum())),
            _ => None,
        }
    }

    /// Round down into a lower bound.
    fn into_low(self) -> Bound {
        match self {
            Wide::NegInf => Bound::NegInf,
            Wide::Finite(n) => match i64::try_from(n) {
                Ok(v) => Bound::Finite(v),
                Err(_) if n < 0 => Bound::NegInf,
                Err(_) => Bound::Finite(i64::MAX),
            },
            Wide::PosInf => Bound::PosInf,
        }
    }

    /// Round up into an upper bound.
    fn into_high(self) -> Bound {
        match self {
            Wide::NegInf => Bound::NegInf,
            Wide::Finite(n) => match i64::try_from(n) {
                Ok(v) => Bound::Finite(v),
                Err(_) if n > 0 => Bound::PosInf,
                Err(_) => Bound::Finite(i64::MIN),
            },
            Wide::PosInf => Bound::PosInf,
        }
    }
}

// =============================================================================
// Interval
// =============================================================================

/// Closed integer interval `[low, high]`.
///
/// Construction does not reorder the bounds: an inverted pair is the empty
/// interval, and every operation below treats it as such.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    low: Bound,
    high: Bound,
}

impl Interval {
    pub fn new(low: Bound, high: Bound) -> Self {
        Interval { low, high }
    }

    pub fn finite(low: i64, high: i64) -> Self {
        Self::new(Bound::Finite(low), Bound::Finite(high))
    }

    pub fn point(value: i64) -> Self {
        Self::finite(value, value)
    }

    pub fn unbounded() -> Self {
        Self::new(Bound::NegInf, Bound::PosInf)
    }

    pub fn at_least(low: i64) -> Self {
        Self::new(Bound::Finite(low), Bound::PosInf)
    }

    pub fn at_most(high: i64) -> Self {
        Self::new(Bound::NegInf, Bound::Finite(high))
    }

    pub fn empty() -> Self {
        Self::new(Bound::PosInf, Bound::NegInf)
    }

    pub fn low(&self) -> Bound {
        self.low
    }

    pub fn high(&self) -> Bound {
        self.high
    }

    /// No integer lies in the interval.
    pub fn is_empty(&self) -> bool {
        self.low > self.high || self.low == Bound::PosInf || self.high == Bound::NegInf
    }

    pub fn is_unbounded(&self) -> bool {
        self.low == Bound::NegInf && self.high == Bound::PosInf
    }

    pub fn contains(&self, value: i64) -> bool {
        self.contains_bound(Bound::Finite(value))
    }

    fn contains_bound(&self, b: Bound) -> bool {
        !self.is_empty() && self.low <= b && b <= self.high
    }

    /// True iff an endpoint of either interval lies within the other.
    /// An empty interval overlaps nothing.
    pub fn overlaps(&self, other: &Interval) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.contains_bound(other.low)
            || self.contains_bound(other.high)
            || other.contains_bound(self.low)
            || other.contains_bound(self.high)
    }

    pub fn meet(&self, other: &Interval) -> Interval {
        Interval::new(cmp::max(self.low, other.low), cmp::min(self.high, other.high))
    }

    /// Smallest interval containing both.
    pub fn hull(&self, other: &Interval) -> Interval {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Interval::new(cmp::min(self.low, other.low), cmp::max(self.high, other.high))
    }

    fn from_corners(corners: &[Option<Wide>]) -> Interval {
        let mut low: Option<Wide> = None;
        let mut high: Option<Wide> = None;
        for corner in corners {
            let Some(c) = *corner else {
                return Interval::unbounded();
            };
            low = Some(low.map_or(c, |l| cmp::min(l, c)));
            high = Some(high.map_or(c, |h| cmp::max(h, c)));
        }
        match (low, high) {
            (Some(l), Some(h)) => Interval::new(l.into_low(), h.into_high()),
            _ => Interval::unbounded(),
        }
    }

    pub fn add(&self, other: &Interval) -> Interval {
        if self.is_empty() || other.is_empty() {
            return Interval::empty();
        }
        let (a, b) = (Wide::from(self.low), Wide::from(self.high));
        let (c, d) = (Wide::from(other.low), Wide::from(other.high));
        Interval::from_corners(&[a.add(c), b.add(d)])
    }

    pub fn neg(&self) -> Interval {
        if self.is_empty() {
            return Interval::empty();
        }
        let low = Wide::from(self.high).neg();
        let high = Wide::from(self.low).neg();
        Interval::new(low.into_low(), high.into_high())
    }

    pub fn sub(&self, other: &Interval) -> Interval {
        self.add(&other.neg())
    }

    pub fn mul(&self, other: &Interval) -> Interval {
        if self.is_empty() || other.is_empty() {
            return Interval::empty();
        }
        let (a, b) = (Wide::from(self.low), Wide::from(self.high));
        let (c, d) = (Wide::from(other.low), Wide::from(other.high));
        Interval::from_corners(&[Some(a.mul(c)), Some(a.mul(d)), Some(b.mul(c)), Some(b.mul(d))])
    }

    /// Truncating division. Divisor endpoints equal to zero are skipped; `±1`
    /// are added when the divisor spans them.
    pub fn div(&self, other: &Interval) -> Interval {
        if self.is_empty() || other.is_empty() {
            return Interval::empty();
        }
        let mut divisors: Vec<Wide> = [other.low, other.high]
            .into_iter()
            .filter(|b| *b != Bound::Finite(0))
            .map(Wide::from)
            .collect();
        for unit in [-1, 1] {
            if other.contains(unit) {
                divisors.push(Wide::Finite(unit as i128));
            }
        }
        if divisors.is_empty() {
            return Interval::unbounded();
        }

        let mut corners = Vec::with_capacity(2 * divisors.len());
        for numerator in [Wide::from(self.low), Wide::from(self.high)] {
            for divisor in &divisors {
                corners.push(numerator.div(*divisor));
            }
        }
        Interval::from_corners(&corners)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

// =============================================================================
// Inference
// =============================================================================

/// Intervals covering every `x` satisfying `cond`, one per disjunctive clause.
/// Empty clauses are dropped; the result is sorted and free of duplicates.
pub fn allowed_ranges(cond: &Rc<Condition>) -> Result<Vec<Interval>, GroupError> {
    let mut ranges = Vec::new();
    for clause in disjunctive_clauses(cond) {
        pinned(&clause)?;
        let range = clause_range(&clause);
        trace!(target: "range", clause = %clause, range = %range, "clause_range");
        ranges.push(range);
    }
    Ok(normalize(ranges))
}

/// The value `cond` pins `x` to through an equality, if any.
///
/// Fails when a conjunction pins `x` to two different values.
pub fn pinned(cond: &Condition) -> Result<Option<i64>, GroupError> {
    match cond {
        Condition::And(l, r) => match (pinned(l)?, pinned(r)?) {
            (Some(first), Some(second)) if first != second => {
                Err(GroupError::ConflictingEquality { first, second })
            }
            (Some(v), _) | (None, Some(v)) => Ok(Some(v)),
            (None, None) => Ok(None),
        },
        Condition::Or(l, r) => match (pinned(l)?, pinned(r)?) {
            (Some(a), Some(b)) if a == b => Ok(Some(a)),
            _ => Ok(None),
        },
        Condition::Compare(RelOp::Eq, l, r) if l.is_var(Var::X) => Ok(r.evaluate()),
        _ => Ok(None),
    }
}

fn clause_range(cond: &Condition) -> Interval {
    match cond {
        Condition::AlwaysTrue => Interval::unbounded(),
        Condition::AlwaysFalse | Condition::Predicate(_) => Interval::empty(),
        Condition::And(l, r) => clause_range(l).meet(&clause_range(r)),
        Condition::Or(l, r) => clause_range(l).hull(&clause_range(r)),
        Condition::Compare(op, l, r) => atom_range(*op, l, r),
    }
}

/// Only `x OP c` constrains the range; every other atom leaves it unbounded.
fn atom_range(op: RelOp, lhs: &Expr, rhs: &Expr) -> Interval {
    let c = match rhs.evaluate() {
        Some(c) if lhs.is_var(Var::X) => c,
        _ => return Interval::unbounded(),
    };
    match op {
        RelOp::Eq => Interval::point(c),
        RelOp::Gt => c.checked_add(1).map_or_else(Interval::empty, Interval::at_least),
        RelOp::Geq => Interval::at_least(c),
        RelOp::Lt => c.checked_sub(1).map_or_else(Interval::empty, Interval::at_most),
        RelOp::Leq => Interval::at_most(c),
    }
}

/// The first comparison mentioning `x` that is neither `x OP c` nor
/// `x % n OP j`. Neither range nor residue inference can bound such an atom,
/// so closure over a condition containing one is unprovable.
pub fn unsupported_atom(cond: &Rc<Condition>) -> Option<Rc<Condition>> {
    match &**cond {
        Condition::And(l, r) | Condition::Or(l, r) => unsupported_atom(l).or_else(|| unsupported_atom(r)),
        Condition::Compare(_, lhs, rhs) => {
            let recognised = rhs.is_constant()
                && match &**lhs {
                    Expr::Variable(Var::X) => true,
                    Expr::Mod(inner, modulus) => inner.is_var(Var::X) && modulus.is_constant(),
                    _ => false,
                };
            (!recognised && condition_contains_var(cond, Var::X)).then(|| Rc::clone(cond))
        }
        Condition::AlwaysTrue | Condition::AlwaysFalse | Condition::Predicate(_) => None,
    }
}

/// The maximal intervals no allowed interval covers, in ascending order.
pub fn forbidden_ranges(allowed: &[Interval]) -> Vec<Interval> {
    let mut sorted: Vec<Interval> = allowed.iter().copied().filter(|r| !r.is_empty()).collect();
    sorted.sort();

    // Merge overlapping and adjacent intervals
    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for range in sorted {
        if let Some(last) = merged.last_mut() {
            let touches = match last.high.succ() {
                Some(next) => range.low <= next,
                None => true,
            };
            if touches {
                last.high = cmp::max(last.high, range.high);
                continue;
            }
        }
        merged.push(range);
    }

    let (first, last) = match (merged.first(), merged.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return vec![Interval::unbounded()],
    };

    let mut gaps = Vec::new();
    if first.low != Bound::NegInf {
        gaps.extend(gap(Some(Bound::NegInf), first.low.pred()));
    }
    for pair in merged.windows(2) {
        gaps.extend(gap(pair[0].high.succ(), pair[1].low.pred()));
    }
    if last.high != Bound::PosInf {
        gaps.extend(gap(last.high.succ(), Some(Bound::PosInf)));
    }
    gaps
}

fn gap(from: Option<Bound>, to: Option<Bound>) -> Option<Interval> {
    let interval = Interval::new(from?, to?);
    (!interval.is_empty()).then_some(interval)
}

/// Interval image of `expr` when `x` and `y` range over `inputs`.
pub fn propagate_range(expr: &Expr, inputs: &[Interval]) -> Vec<Interval> {
    if let Some(value) = expr.evaluate() {
        return vec![Interval::point(value)];
    }

    let ranges = match expr {
        Expr::Number(n) => vec![Interval::point(*n)],
        Expr::Variable(Var::X) | Expr::Variable(Var::Y) => inputs.to_vec(),
        Expr::Variable(_) => vec![Interval::unbounded()],
        Expr::Add(l, r) => combine(l, r, inputs, Interval::add),
        Expr::Sub(l, r) => combine(l, r, inputs, Interval::sub),
        Expr::Mul(l, r) => combine(l, r, inputs, Interval::mul),
        Expr::Div(l, r) => combine(l, r, inputs, Interval::div),
        Expr::Neg(e) => propagate_range(e, inputs).iter().map(Interval::neg).collect(),
        Expr::Mod(l, r) => {
            if propagate_range(l, inputs).is_empty() || propagate_range(r, inputs).is_empty() {
                Vec::new()
            } else {
                match r.evaluate() {
                    Some(k) if k != 0 => {
                        let high = i64::try_from(k.unsigned_abs() - 1).unwrap_or(i64::MAX);
                        vec![Interval::finite(0, high)]
                    }
                    _ => vec![Interval::at_least(0)],
                }
            }
        }
    };
    normalize(ranges)
}

fn combine(
    l: &Expr,
    r: &Expr,
    inputs: &[Interval],
    op: fn(&Interval, &Interval) -> Interval,
) -> Vec<Interval> {
    let lefts = propagate_range(l, inputs);
    let rights = propagate_range(r, inputs);
    let mut out = Vec::with_capacity(lefts.len() * rights.len());
    for a in &lefts {
        for b in &rights {
            out.push(op(a, b));
        }
    }
    out
}

fn normalize(mut ranges: Vec<Interval>) -> Vec<Interval> {
    ranges.retain(|r| !r.is_empty());
    ranges.sort();
    ranges.dedup();
    ranges
}

/// Range half of the closure test: the image of `function` over `allowed`
/// never meets a forbidden gap.
pub fn ranges_closed(allowed: &[Interval], function: &Expr) -> bool {
    let forbidden = forbidden_ranges(allowed);
    let image = propagate_range(function, allowed);
    let violation = image
        .iter()
        .find_map(|i| forbidden.iter().find(|g| i.overlaps(g)).map(|g| (*i, *g)));
    match violation {
        Some((produced, gap)) => {
            trace!(target: "range", function = %function, produced = %produced, forbidden = %gap, "range_violation");
            false
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonicalization::simplify_condition;

    fn show(ranges: &[Interval]) -> Vec<String> {
        ranges.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn test_bound_order() {
        assert!(Bound::NegInf < Bound::Finite(i64::MIN));
        assert!(Bound::Finite(i64::MAX) < Bound::PosInf);
        assert!(Bound::Finite(-1) < Bound::Finite(0));
    }

    #[test]
    fn test_emptiness() {
        assert!(Interval::empty().is_empty());
        assert!(Interval::finite(3, 2).is_empty());
        assert!(Interval::new(Bound::PosInf, Bound::PosInf).is_empty());
        assert!(!Interval::point(0).is_empty());
        assert!(!Interval::finite(2, 3).overlaps(&Interval::finite(3, 2)));
    }

    #[test]
    fn test_overlap_with_infinite_bounds() {
        let below = Interval::at_most(5);
        assert!(below.overlaps(&Interval::at_most(3)));
        assert!(below.overlaps(&Interval::finite(5, 9)));
        assert!(!below.overlaps(&Interval::at_least(6)));
        assert!(Interval::unbounded().overlaps(&Interval::point(0)));
        assert!(Interval::finite(0, 10).overlaps(&Interval::finite(2, 3)));
    }

    #[test]
    fn test_arithmetic() {
        let a = Interval::finite(-2, 3);
        let b = Interval::finite(4, 5);
        assert_eq!(a.add(&b), Interval::finite(2, 8));
        assert_eq!(a.sub(&b), Interval::finite(-7, -1));
        assert_eq!(a.mul(&b), Interval::finite(-10, 15));
        assert_eq!(a.neg(), Interval::finite(-3, 2));
        assert_eq!(Interval::at_least(1).mul(&Interval::at_least(1)), Interval::at_least(1));
        assert_eq!(Interval::at_least(0).mul(&Interval::at_most(0)), Interval::at_most(0));
    }

    #[test]
    fn test_division() {
        assert_eq!(Interval::finite(10, 20).div(&Interval::finite(2, 5)), Interval::finite(2, 10));
        // divisor spans zero: extremes at ±1
        assert_eq!(Interval::finite(10, 20).div(&Interval::finite(-3, 4)), Interval::finite(-20, 20));
        assert_eq!(Interval::finite(1, 2).div(&Interval::point(0)), Interval::unbounded());
        assert_eq!(Interval::at_least(4).div(&Interval::point(2)), Interval::at_least(2));
        assert_eq!(Interval::point(7).div(&Interval::at_least(1)), Interval::finite(0, 7));
    }

    #[test]
    fn test_overflow_widens_outward() {
        let big = Interval::point(i64::MAX);
        assert_eq!(big.add(&Interval::point(1)), Interval::new(Bound::Finite(i64::MAX), Bound::PosInf));
        assert_eq!(Interval::point(i64::MIN).neg(), Interval::new(Bound::Finite(i64::MAX), Bound::PosInf));
    }

    #[test]
    fn test_allowed_ranges() {
        let c = simplify_condition(&Condition::or(Condition::lt(Var::X, -4), Condition::gt(Var::X, 4)));
        assert_eq!(show(&allowed_ranges(&c).unwrap()), vec!["[-∞, -5]", "[5, +∞]"]);

        let c = simplify_condition(&Condition::and(Condition::geq(Var::X, 0), Condition::leq(Var::X, 9)));
        assert_eq!(show(&allowed_ranges(&c).unwrap()), vec!["[0, 9]"]);

        let c = simplify_condition(&Condition::eq(Expr::modulo(Var::X, 2), 0));
        assert_eq!(allowed_ranges(&c).unwrap(), vec![Interval::unbounded()]);

        let c = Condition::and(Condition::eq(Var::X, 3), Condition::gt(Var::X, 5));
        assert!(allowed_ranges(&c).unwrap().is_empty());
    }

    #[test]
    fn test_conflicting_equalities() {
        let c = Condition::and(Condition::eq(Var::X, 1), Condition::eq(Var::X, 2));
        assert_eq!(
            allowed_ranges(&c),
            Err(GroupError::ConflictingEquality { first: 1, second: 2 })
        );
        let c = Condition::or(Condition::eq(Var::X, 1), Condition::eq(Var::X, 2));
        assert_eq!(pinned(&c), Ok(None));
    }

    #[test]
    fn test_unsupported_atoms() {
        let c = simplify_condition(&Condition::and(Condition::geq(Var::X, 0), Condition::eq(Expr::modulo(Var::X, 3), 1)));
        assert_eq!(unsupported_atom(&c), None);

        let c = simplify_condition(&Condition::eq(Expr::div(Var::X, 2), 0));
        assert_eq!(unsupported_atom(&c).map(|a| a.to_string()), Some("x / 2 == 0".to_string()));

        let c = simplify_condition(&Condition::or(Condition::gt(Var::X, 4), Condition::leq(Expr::mul(Var::X, Var::X), 1)));
        assert_eq!(unsupported_atom(&c).map(|a| a.to_string()), Some("x * x <= 1".to_string()));

        assert_eq!(unsupported_atom(&Condition::named("prime")), None);
    }

    #[test]
    fn test_forbidden_ranges() {
        let allowed = vec![Interval::at_most(-5), Interval::at_least(5)];
        assert_eq!(show(&forbidden_ranges(&allowed)), vec!["[-4, 4]"]);

        let allowed = vec![Interval::finite(0, 3), Interval::finite(4, 6), Interval::finite(10, 12)];
        assert_eq!(show(&forbidden_ranges(&allowed)), vec!["[-∞, -1]", "[7, 9]", "[13, +∞]"]);

        assert!(forbidden_ranges(&[Interval::unbounded()]).is_empty());
        assert_eq!(forbidden_ranges(&[]), vec![Interval::unbounded()]);
    }

    #[test]
    fn test_propagate_range() {
        let inputs = vec![Interval::at_least(5)];
        let sum = Expr::add(Var::X, Var::Y);
        assert_eq!(propagate_range(&sum, &inputs), vec![Interval::at_least(10)]);

        let diff = Expr::sub(Var::X, Var::Y);
        assert_eq!(propagate_range(&diff, &inputs), vec![Interval::unbounded()]);

        let rem = Expr::modulo(Var::X, -3);
        assert_eq!(propagate_range(&rem, &inputs), vec![Interval::finite(0, 2)]);

        assert_eq!(propagate_range(&Expr::add(2, 3), &inputs), vec![Interval::point(5)]);
        assert_eq!(propagate_range(&Expr::var(Var::A), &inputs), vec![Interval::unbounded()]);
        assert!(propagate_range(&sum, &[]).is_empty());
    }

    #[test]
    fn test_ranges_closed() {
        let inputs = vec![Interval::at_least(5)];
        assert!(ranges_closed(&inputs, &Expr::add(Var::X, Var::Y)));
        assert!(!ranges_closed(&inputs, &Expr::sub(Var::X, Var::Y)));

        let inputs = vec![Interval::at_least(-3)];
        assert!(!ranges_closed(&inputs, &Expr::add(Var::X, Var::Y)));

        let split = vec![Interval::at_most(-5), Interval::at_least(5)];
        assert!(!ranges_closed(&split, &Expr::add(Var::X, Var::Y)));
        assert!(ranges_closed(&split, &Expr::neg(Var::X)));
    }
}
