use crate::assoc::check_associative;
use crate::closure::check_closure;
use crate::identity::{check_identity, check_inverse};
use grp_ast::{Condition, Expr, IntoCondition, IntoExpr};
use grp_engine::{CheckOptions, GroupError, Simplifier};
use std::fmt;
use std::rc::Rc;
use tracing::info;

/// The first group axiom a candidate failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxiomFailure {
    NotClosed,
    NotAssociative,
    NoIdentity,
    NoInverse,
}

impl fmt::Display for AxiomFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AxiomFailure::NotClosed => "not closed",
            AxiomFailure::NotAssociative => "not associative",
            AxiomFailure::NoIdentity => "no identity element",
            AxiomFailure::NoInverse => "no inverse",
        };
        f.write_str(reason)
    }
}

/// A candidate group: the integers `x` satisfying `condition`, under the
/// binary operation `function(x, y)`.
///
/// Both are stored in canonical form. [`Group::is_group`] fills in the
/// identity, the inverse and the failing axiom.
#[derive(Debug, Clone)]
pub struct Group {
    condition: Rc<Condition>,
    function: Rc<Expr>,
    options: CheckOptions,
    identity: Option<Rc<Expr>>,
    inverse: Option<Rc<Expr>>,
    failure: Option<AxiomFailure>,
}

impl Group {
    pub fn new(condition: impl IntoCondition, function: impl IntoExpr) -> Self {
        Self::with_options(condition, function, CheckOptions::default())
    }

    pub fn with_options(condition: impl IntoCondition, function: impl IntoExpr, options: CheckOptions) -> Self {
        let simplifier = Simplifier::new(options.simplify);
        Group {
            condition: simplifier.simplify_condition(&condition.into_condition()),
            function: simplifier.simplify(&function.into_expr()),
            options,
            identity: None,
            inverse: None,
            failure: None,
        }
    }

    pub fn condition(&self) -> &Rc<Condition> {
        &self.condition
    }

    pub fn function(&self) -> &Rc<Expr> {
        &self.function
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// Identity element found by the last [`Group::is_group`] call.
    pub fn identity(&self) -> Option<&Rc<Expr>> {
        self.identity.as_ref()
    }

    /// Inverse of `x`, as an expression in `x`.
    pub fn inverse(&self) -> Option<&Rc<Expr>> {
        self.inverse.as_ref()
    }

    pub fn failure(&self) -> Option<AxiomFailure> {
        self.failure
    }

    /// Check closure, associativity, identity and inverse in that order,
    /// stopping at the first axiom that does not hold.
    ///
    /// `Ok(false)` is an ordinary verdict; see [`Group::failure`] for the
    /// reason. Errors are invalid conditions or functions, not verdicts.
    pub fn is_group(&mut self) -> Result<bool, GroupError> {
        self.identity = None;
        self.inverse = None;
        self.failure = None;

        let simplifier = Simplifier::new(self.options.simplify);

        if !check_closure(&self.condition, &self.function, &self.options)? {
            return Ok(self.fail(AxiomFailure::NotClosed));
        }
        if !check_associative(&self.function, &simplifier) {
            return Ok(self.fail(AxiomFailure::NotAssociative));
        }

        let Some(identity) = check_identity(&self.condition, &self.function, &simplifier) else {
            return Ok(self.fail(AxiomFailure::NoIdentity));
        };
        let inverse = check_inverse(&self.condition, &self.function, &identity, &self.options, &simplifier)?;
        self.identity = Some(identity);

        let Some(inverse) = inverse else {
            return Ok(self.fail(AxiomFailure::NoInverse));
        };
        self.inverse = Some(inverse);

        info!(target: "axioms", group = %self, "is_group");
        Ok(true)
    }

    fn fail(&mut self, failure: AxiomFailure) -> bool {
        info!(target: "axioms", group = %self, reason = %failure, "not_a_group");
        self.failure = Some(failure);
        false
    }

    /// Multi-line summary of the candidate and the elements found for it.
    pub fn pretty(&self) -> String {
        let show = |e: Option<&Rc<Expr>>| e.map_or_else(|| "None".to_string(), |e| e.to_string());
        format!(
            "{{\n  condition(x) = {}\n  function(x, y) = {}\n  identity = {}\n  inverse(x) = {}\n}}",
            self.condition,
            self.function,
            show(self.identity()),
            show(self.inverse()),
        )
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c(x) = {}, f(x, y) = {}", self.condition, self.function)
    }
}
