//! Built-in single-argument functions and named constants.
//!
//! The required set is `sin cos tan sqrt abs exp log ln`. The inverse and
//! hyperbolic trigonometric functions plus `floor`/`ceil` are additions;
//! each is a plain `f64` method so it costs nothing at evaluation time.

use std::fmt;

use crate::ops::finite_or_nan;

/// A function applied to exactly one parenthesized argument.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Abs,
    Exp,
    /// Base-10 logarithm.
    Log,
    /// Natural logarithm.
    Ln,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Floor,
    Ceil,
}

impl Func {
    /// Every function, in the order they are listed to users.
    pub const ALL: [Func; 16] = [
        Func::Sin,
        Func::Cos,
        Func::Tan,
        Func::Sqrt,
        Func::Abs,
        Func::Exp,
        Func::Log,
        Func::Ln,
        Func::Asin,
        Func::Acos,
        Func::Atan,
        Func::Sinh,
        Func::Cosh,
        Func::Tanh,
        Func::Floor,
        Func::Ceil,
    ];

    /// Look up a function by its source spelling. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Func> {
        let func = match name {
            "sin" => Func::Sin,
            "cos" => Func::Cos,
            "tan" => Func::Tan,
            "sqrt" => Func::Sqrt,
            "abs" => Func::Abs,
            "exp" => Func::Exp,
            "log" => Func::Log,
            "ln" => Func::Ln,
            "asin" => Func::Asin,
            "acos" => Func::Acos,
            "atan" => Func::Atan,
            "sinh" => Func::Sinh,
            "cosh" => Func::Cosh,
            "tanh" => Func::Tanh,
            "floor" => Func::Floor,
            "ceil" => Func::Ceil,
            _ => return None,
        };
        Some(func)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Sqrt => "sqrt",
            Func::Abs => "abs",
            Func::Exp => "exp",
            Func::Log => "log",
            Func::Ln => "ln",
            Func::Asin => "asin",
            Func::Acos => "acos",
            Func::Atan => "atan",
            Func::Sinh => "sinh",
            Func::Cosh => "cosh",
            Func::Tanh => "tanh",
            Func::Floor => "floor",
            Func::Ceil => "ceil",
        }
    }

    /// Apply the function. Out-of-domain arguments and overflow give NaN.
    #[inline]
    pub fn apply(self, arg: f64) -> f64 {
        let raw = match self {
            Func::Sin => arg.sin(),
            Func::Cos => arg.cos(),
            Func::Tan => arg.tan(),
            Func::Sqrt => arg.sqrt(),
            Func::Abs => arg.abs(),
            Func::Exp => arg.exp(),
            Func::Log => arg.log10(),
            Func::Ln => arg.ln(),
            Func::Asin => arg.asin(),
            Func::Acos => arg.acos(),
            Func::Atan => arg.atan(),
            Func::Sinh => arg.sinh(),
            Func::Cosh => arg.cosh(),
            Func::Tanh => arg.tanh(),
            Func::Floor => arg.floor(),
            Func::Ceil => arg.ceil(),
        };
        finite_or_nan(raw)
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a named constant (`pi`, `e`).
///
/// The plotted variable takes priority: the compiler only asks for a
/// constant after ruling out the variable name.
pub fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(std::f64::consts::PI),
        "e" => Some(std::f64::consts::E),
        _ => None,
    }
}
