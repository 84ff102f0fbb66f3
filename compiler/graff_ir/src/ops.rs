//! Operators and their numeric semantics.
//!
//! Precedence and associativity live here so the compiler and the
//! diagnostics agree on one table. Arithmetic never fails: any result that
//! is not a finite real becomes NaN and stays NaN.

use std::fmt;

/// Collapse `inf`, `-inf`, and NaN to NaN.
///
/// Every intermediate in a program passes through this, so a single
/// undefined step poisons the whole sample.
#[inline]
pub fn finite_or_nan(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        f64::NAN
    }
}

/// Binary infix operators.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    /// Binding strength. Higher binds tighter.
    ///
    /// Unary minus sits at [`UnaryOp::PRECEDENCE`], between `*` and `^`.
    #[inline]
    pub const fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div => 2,
            BinaryOp::Pow => 4,
        }
    }

    /// `2^3^2` groups as `2^(3^2)`; everything else groups left.
    #[inline]
    pub const fn is_right_assoc(self) -> bool {
        matches!(self, BinaryOp::Pow)
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }

    /// Compute `lhs op rhs`, mapping every non-real result to NaN.
    #[inline]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        let raw = match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
            // `powf` maps NaN^0 and 1^NaN to 1.0; an undefined operand must
            // stay undefined.
            BinaryOp::Pow if lhs.is_nan() || rhs.is_nan() => f64::NAN,
            BinaryOp::Pow => lhs.powf(rhs),
        };
        finite_or_nan(raw)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Prefix operators.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum UnaryOp {
    Neg,
}

impl UnaryOp {
    /// Above `*` and `/`, below `^`: `-2*3 == (-2)*3`, `-2^2 == -(2^2)`.
    pub const PRECEDENCE: u8 = 3;

    pub const fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "neg",
        }
    }

    #[inline]
    pub fn apply(self, operand: f64) -> f64 {
        match self {
            UnaryOp::Neg => finite_or_nan(-operand),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
