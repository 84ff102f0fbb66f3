//! Shared representation for the graff expression pipeline.
//!
//! The compiler turns expression text into a [`Program`]: a flat, immutable
//! sequence of [`Instr`] in postfix order. The evaluator walks that sequence
//! with a small value stack. Nothing here is tree-shaped; the instruction
//! slice is the only artifact that outlives compilation.

mod func;
mod ops;
mod program;
mod span;

pub use func::{constant, Func};
pub use ops::{finite_or_nan, BinaryOp, UnaryOp};
pub use program::{Instr, Program};
pub use span::{Span, SpanError};
