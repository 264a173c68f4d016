//! Infix display for expressions and conditions.
//!
//! Parentheses are emitted only where the child binds more loosely than its
//! parent (see [`Expr::precedence`] and [`Condition::precedence`]). The right
//! operand of `-`, `/` and `%` is also wrapped at equal precedence since those
//! operators do not associate.

use crate::condition::Condition;
use crate::expression::Expr;
use std::fmt;

fn write_operand(f: &mut fmt::Formatter<'_>, e: &Expr, parent: u8, strict: bool) -> fmt::Result {
    if e.needs_parens(parent, strict) {
        write!(f, "({})", e)
    } else {
        write!(f, "{}", e)
    }
}

fn write_binary(f: &mut fmt::Formatter<'_>, l: &Expr, op: &str, r: &Expr, prec: u8, strict_right: bool) -> fmt::Result {
    write_operand(f, l, prec, false)?;
    write!(f, " {} ", op)?;
    write_operand(f, r, prec, strict_right)
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = self.precedence();
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Variable(v) => write!(f, "{}", v),
            Expr::Add(l, r) => match &**r {
                // `l + -r` reads better as `l - r`
                Expr::Neg(inner) => write_binary(f, l, "-", inner, prec, true),
                Expr::Number(n) if *n < 0 && *n != i64::MIN => {
                    write_operand(f, l, prec, false)?;
                    write!(f, " - {}", -n)
                }
                _ => write_binary(f, l, "+", r, prec, false),
            },
            Expr::Sub(l, r) => write_binary(f, l, "-", r, prec, true),
            // `x * (y / z)` must keep its parentheses under truncating division
            Expr::Mul(l, r) => write_binary(f, l, "*", r, prec, !matches!(**r, Expr::Mul(_, _))),
            Expr::Div(l, r) => write_binary(f, l, "/", r, prec, true),
            Expr::Mod(l, r) => write_binary(f, l, "%", r, prec, true),
            Expr::Neg(e) => {
                write!(f, "-")?;
                write_operand(f, e, prec, true)
            }
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::AlwaysTrue => write!(f, "True"),
            Condition::AlwaysFalse => write!(f, "False"),
            Condition::Predicate(name) => write!(f, "{}", name),
            Condition::And(l, r) => {
                write_condition_operand(f, l, self.precedence())?;
                write!(f, " && ")?;
                write_condition_operand(f, r, self.precedence())
            }
            Condition::Or(l, r) => write!(f, "{} || {}", l, r),
            Condition::Compare(op, l, r) => write!(f, "{} {} {}", l, op, r),
        }
    }
}

fn write_condition_operand(f: &mut fmt::Formatter<'_>, c: &Condition, parent: u8) -> fmt::Result {
    if c.precedence() < parent {
        write!(f, "({})", c)
    } else {
        write!(f, "{}", c)
    }
}
