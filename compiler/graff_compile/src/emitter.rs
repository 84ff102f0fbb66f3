//! Instruction output with simulated stack depth.
//!
//! Every instruction is checked against the depth it would see at run
//! time. A program only leaves here if it ends at depth exactly one, which
//! is what lets the evaluator trust its stack without checking.

use graff_ir::{Instr, Program, Span};

use crate::ArityError;

pub(crate) struct Emitter {
    code: Vec<Instr>,
    depth: usize,
    max_depth: usize,
}

impl Emitter {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Emitter {
            code: Vec::with_capacity(capacity),
            depth: 0,
            max_depth: 0,
        }
    }

    /// Append `instr`, which came from the source text at `span`.
    pub(crate) fn emit(&mut self, instr: Instr, span: Span) -> Result<(), ArityError> {
        let (pops, pushes) = instr.stack_effect();
        if self.depth < pops {
            return Err(ArityError::Underflow {
                needed: pops,
                available: self.depth,
                span,
            });
        }
        self.depth = self.depth - pops + pushes;
        self.max_depth = self.max_depth.max(self.depth);
        self.code.push(instr);
        Ok(())
    }

    pub(crate) fn finish(self, variable: &str, whole: Span) -> Result<Program, ArityError> {
        if self.depth != 1 {
            return Err(ArityError::Unbalanced {
                depth: self.depth,
                span: whole,
            });
        }
        Ok(Program::from_verified(self.code, self.max_depth, variable))
    }
}

#[cfg(test)]
mod tests;
