//! Postfix instruction sequences.
//!
//! A [`Program`] is the compiled form of one expression: an ordered,
//! immutable slice of [`Instr`]. Order encodes evaluation order, so there is
//! no tree to walk and nothing to allocate per evaluation beyond a value
//! stack of [`Program::max_depth`] slots.

use std::fmt;

use crate::{BinaryOp, Func, UnaryOp};

/// One step of the stack machine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Instr {
    /// Push a literal or named constant.
    PushConst(f64),
    /// Push the sample's input value.
    PushVar,
    /// Pop `rhs`, pop `lhs`, push `lhs op rhs`.
    Binary(BinaryOp),
    /// Pop one operand, push the result.
    Unary(UnaryOp),
    /// Pop one argument, push the function's value.
    Call(Func),
}

impl Instr {
    /// `(pops, pushes)` for this instruction.
    #[inline]
    pub const fn stack_effect(self) -> (usize, usize) {
        match self {
            Instr::PushConst(_) | Instr::PushVar => (0, 1),
            Instr::Binary(_) => (2, 1),
            Instr::Unary(_) | Instr::Call(_) => (1, 1),
        }
    }
}

/// A compiled expression.
///
/// Built only by the compiler after its arity check succeeds, which is what
/// lets the evaluator skip stack-height checks on every sample. Cloning is
/// cheap enough for per-plot ownership; sharing by reference across threads
/// needs no locking.
#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    instrs: Box<[Instr]>,
    max_depth: usize,
    variable: Box<str>,
}

impl Program {
    /// Assemble a program from an already depth-checked instruction list.
    ///
    /// `max_depth` is the peak stack height the instructions reach. Debug
    /// builds re-run the simulation to catch a compiler that lied.
    pub fn from_verified(instrs: Vec<Instr>, max_depth: usize, variable: &str) -> Self {
        debug_assert_eq!(
            simulate_depth(&instrs),
            Some((1, max_depth)),
            "program must leave exactly one value and peak at max_depth"
        );
        Program {
            instrs: instrs.into_boxed_slice(),
            max_depth,
            variable: variable.into(),
        }
    }

    #[inline]
    pub fn instrs(&self) -> &[Instr] {
        &self.instrs
    }

    /// Number of instructions.
    #[inline]
    pub fn len(&self) -> usize {
        self.instrs.len()
    }

    /// Always false for a compiled program; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instrs.is_empty()
    }

    /// Peak number of values on the stack during evaluation.
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Name of the independent variable this program was compiled against.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Whether the result depends on the input at all.
    pub fn is_constant(&self) -> bool {
        !self.instrs.iter().any(|i| matches!(i, Instr::PushVar))
    }
}

/// Final and peak depth, or `None` on underflow.
fn simulate_depth(instrs: &[Instr]) -> Option<(usize, usize)> {
    let mut depth = 0usize;
    let mut peak = 0usize;
    for instr in instrs {
        let (pops, pushes) = instr.stack_effect();
        depth = depth.checked_sub(pops)? + pushes;
        peak = peak.max(depth);
    }
    Some((depth, peak))
}

impl fmt::Display for Program {
    /// Space-separated postfix form, e.g. `2 3 x * +`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, instr) in self.instrs.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match instr {
                Instr::PushConst(value) => write!(f, "{value}")?,
                Instr::PushVar => f.write_str(&self.variable)?,
                Instr::Binary(op) => write!(f, "{op}")?,
                Instr::Unary(op) => write!(f, "{op}")?,
                Instr::Call(func) => write!(f, "{func}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
