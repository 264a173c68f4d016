use std::fmt;
use std::rc::Rc;

/// The variables an expression may mention.
///
/// `X` and `Y` are the operands of a binary function and `X` is the element a
/// condition talks about. `A`, `B` and `C` are scratch variables used when the
/// axiom checkers instantiate a function with symbolic operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Var {
    A,
    B,
    C,
    X,
    Y,
}

impl Var {
    pub const ALL: [Var; 5] = [Var::A, Var::B, Var::C, Var::X, Var::Y];

    pub const fn name(self) -> &'static str {
        match self {
            Var::A => "a",
            Var::B => "b",
            Var::C => "c",
            Var::X => "x",
            Var::Y => "y",
        }
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Integer-valued expression tree. Nodes are immutable and shared via `Rc`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Number(i64),
    Variable(Var),
    Add(Rc<Expr>, Rc<Expr>),
    Sub(Rc<Expr>, Rc<Expr>),
    Mul(Rc<Expr>, Rc<Expr>),
    /// Truncating integer division.
    Div(Rc<Expr>, Rc<Expr>),
    /// Euclidean remainder, always in `[0, |rhs|)`.
    Mod(Rc<Expr>, Rc<Expr>),
    Neg(Rc<Expr>),
}

/// Anything that can stand as an operand in a builder call: integer literals,
/// variable markers, or already-built expressions.
pub trait IntoExpr {
    fn into_expr(self) -> Rc<Expr>;
}

impl IntoExpr for Rc<Expr> {
    fn into_expr(self) -> Rc<Expr> {
        self
    }
}

impl IntoExpr for &Rc<Expr> {
    fn into_expr(self) -> Rc<Expr> {
        Rc::clone(self)
    }
}

impl IntoExpr for Expr {
    fn into_expr(self) -> Rc<Expr> {
        Rc::new(self)
    }
}

impl IntoExpr for i64 {
    fn into_expr(self) -> Rc<Expr> {
        Expr::num(self)
    }
}

impl IntoExpr for i32 {
    fn into_expr(self) -> Rc<Expr> {
        Expr::num(i64::from(self))
    }
}

impl IntoExpr for Var {
    fn into_expr(self) -> Rc<Expr> {
        Expr::var(self)
    }
}

impl Expr {
    // Helper constructors for cleaner code
    pub fn num(n: i64) -> Rc<Self> {
        Rc::new(Expr::Number(n))
    }

    pub fn var(v: Var) -> Rc<Self> {
        Rc::new(Expr::Variable(v))
    }

    pub fn add(lhs: impl IntoExpr, rhs: impl IntoExpr) -> Rc<Self> {
        Rc::new(Expr::Add(lhs.into_expr(), rhs.into_expr()))
    }

    pub fn sub(lhs: impl IntoExpr, rhs: impl IntoExpr) -> Rc<Self> {
        Rc::new(Expr::Sub(lhs.into_expr(), rhs.into_expr()))
    }

    pub fn mul(lhs: impl IntoExpr, rhs: impl IntoExpr) -> Rc<Self> {
        Rc::new(Expr::Mul(lhs.into_expr(), rhs.into_expr()))
    }

    pub fn div(lhs: impl IntoExpr, rhs: impl IntoExpr) -> Rc<Self> {
        Rc::new(Expr::Div(lhs.into_expr(), rhs.into_expr()))
    }

    pub fn modulo(lhs: impl IntoExpr, rhs: impl IntoExpr) -> Rc<Self> {
        Rc::new(Expr::Mod(lhs.into_expr(), rhs.into_expr()))
    }

    pub fn neg(expr: impl IntoExpr) -> Rc<Self> {
        Rc::new(Expr::Neg(expr.into_expr()))
    }
}

impl Expr {
    /// Binding strength used by the formatter: `+ -` bind loosest, atoms tightest.
    pub fn precedence(&self) -> u8 {
        match self {
            Expr::Add(_, _) | Expr::Sub(_, _) => 1,
            Expr::Mul(_, _) | Expr::Div(_, _) | Expr::Mod(_, _) => 2,
            Expr::Neg(_) => 3,
            // A negative literal prints with a leading sign, so it binds like Neg.
            Expr::Number(n) if *n < 0 => 3,
            Expr::Number(_) | Expr::Variable(_) => 4,
        }
    }

    /// Whether this node must be parenthesized when it appears as an operand
    /// of an operator with precedence `parent`. `strict` is set for the right
    /// operand of non-associative operators.
    pub fn needs_parens(&self, parent: u8, strict: bool) -> bool {
        let own = self.precedence();
        own < parent || (strict && own == parent)
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Expr::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<Var> {
        match self {
            Expr::Variable(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_var(&self, var: Var) -> bool {
        matches!(self, Expr::Variable(v) if *v == var)
    }

    /// Evaluate to an integer when every leaf is a constant.
    ///
    /// Returns `None` for any variable leaf, division by zero, or overflow;
    /// "not constant" is a normal answer, never an error.
    pub fn evaluate(&self) -> Option<i64> {
        match self {
            Expr::Number(n) => Some(*n),
            Expr::Variable(_) => None,
            Expr::Add(l, r) => l.evaluate()?.checked_add(r.evaluate()?),
            Expr::Sub(l, r) => l.evaluate()?.checked_sub(r.evaluate()?),
            Expr::Mul(l, r) => l.evaluate()?.checked_mul(r.evaluate()?),
            Expr::Div(l, r) => l.evaluate()?.checked_div(r.evaluate()?),
            Expr::Mod(l, r) => l.evaluate()?.checked_rem_euclid(r.evaluate()?),
            Expr::Neg(e) => e.evaluate()?.checked_neg(),
        }
    }

    pub fn is_constant(&self) -> bool {
        self.evaluate().is_some()
    }
}
