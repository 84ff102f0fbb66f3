//! Stack-machine evaluation of compiled programs.
//!
//! This is the hot loop: one call per horizontal pixel, per plotted
//! expression, per frame. It therefore
//! - never allocates for programs up to [`INLINE_DEPTH`] deep, and reuses
//!   its buffer for deeper ones when driven through a [`Machine`];
//! - never checks stack arity (the compiler already proved it);
//! - never fails: domain errors become NaN and propagate to the result.

use graff_ir::{finite_or_nan, Instr, Program};
use smallvec::SmallVec;

mod sweep;

pub use sweep::Sweep;

/// Stack slots held inline before spilling to the heap.
pub const INLINE_DEPTH: usize = 32;

/// Evaluate `program` with its variable bound to `input`.
///
/// Returns NaN when the expression is undefined at `input`.
#[inline]
pub fn evaluate(input: f64, program: &Program) -> f64 {
    Machine::new().eval(program, input)
}

/// A reusable evaluator.
///
/// The value stack keeps its capacity between calls, so sweeping a deep
/// program allocates at most once. One machine per thread; the program
/// itself is shared read-only.
#[derive(Debug, Default)]
pub struct Machine {
    stack: SmallVec<[f64; INLINE_DEPTH]>,
}

impl Machine {
    pub fn new() -> Self {
        Machine {
            stack: SmallVec::new(),
        }
    }

    /// Evaluate one sample.
    #[inline]
    pub fn eval(&mut self, program: &Program, input: f64) -> f64 {
        let stack = &mut self.stack;
        stack.clear();
        stack.reserve(program.max_depth());
        let x = finite_or_nan(input);

        for instr in program.instrs() {
            match *instr {
                Instr::PushConst(value) => stack.push(value),
                Instr::PushVar => stack.push(x),
                Instr::Binary(op) => {
                    let rhs = stack.pop().unwrap_or(f64::NAN);
                    if let Some(lhs) = stack.last_mut() {
                        *lhs = op.apply(*lhs, rhs);
                    }
                }
                Instr::Unary(op) => {
                    if let Some(top) = stack.last_mut() {
                        *top = op.apply(*top);
                    }
                }
                Instr::Call(func) => {
                    if let Some(top) = stack.last_mut() {
                        *top = func.apply(*top);
                    }
                }
            }
        }

        debug_assert_eq!(stack.len(), 1, "compiled program must leave exactly one value");
        stack.pop().unwrap_or(f64::NAN)
    }

    /// Evaluate `program` at every point of `sweep`, replacing `out`.
    pub fn sample_into(&mut self, program: &Program, sweep: Sweep, out: &mut Vec<f64>) {
        out.clear();
        out.reserve(sweep.count);
        out.extend(sweep.iter().map(|x| self.eval(program, x)));
    }

    /// Whether the stack has spilled to the heap.
    pub fn spilled(&self) -> bool {
        self.stack.spilled()
    }
}
