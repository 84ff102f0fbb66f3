#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use graff_ir::{BinaryOp, Func};

use super::*;

const WHOLE: Span = Span::new(0, 10);

#[test]
fn balanced_sequence_finishes() {
    let mut out = Emitter::with_capacity(4);
    out.emit(Instr::PushVar, Span::new(0, 1)).unwrap();
    out.emit(Instr::PushConst(2.0), Span::new(2, 3)).unwrap();
    out.emit(Instr::Binary(BinaryOp::Mul), Span::new(1, 2)).unwrap();
    out.emit(Instr::Call(Func::Sin), Span::new(0, 3)).unwrap();
    let program = out.finish("x", WHOLE).unwrap();
    assert_eq!(program.len(), 4);
    assert_eq!(program.max_depth(), 2);
}

#[test]
fn underflow_is_reported_at_the_instruction() {
    let mut out = Emitter::with_capacity(2);
    out.emit(Instr::PushConst(1.0), Span::new(0, 1)).unwrap();
    let err = out
        .emit(Instr::Binary(BinaryOp::Add), Span::new(1, 2))
        .unwrap_err();
    assert_eq!(
        err,
        ArityError::Underflow {
            needed: 2,
            available: 1,
            span: Span::new(1, 2),
        }
    );
}

#[test]
fn unary_on_empty_stack_underflows() {
    let mut out = Emitter::with_capacity(1);
    let err = out.emit(Instr::Call(Func::Abs), Span::new(0, 3)).unwrap_err();
    assert!(matches!(err, ArityError::Underflow { needed: 1, available: 0, .. }));
}

#[test]
fn leftover_values_are_unbalanced() {
    let mut out = Emitter::with_capacity(2);
    out.emit(Instr::PushConst(1.0), Span::new(0, 1)).unwrap();
    out.emit(Instr::PushConst(2.0), Span::new(2, 3)).unwrap();
    let err = out.finish("x", WHOLE).unwrap_err();
    assert_eq!(err, ArityError::Unbalanced { depth: 2, span: WHOLE });
}

#[test]
fn empty_output_is_unbalanced() {
    let out = Emitter::with_capacity(0);
    let err = out.finish("x", WHOLE).unwrap_err();
    assert_eq!(err, ArityError::Unbalanced { depth: 0, span: WHOLE });
}
