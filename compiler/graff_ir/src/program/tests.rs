use pretty_assertions::assert_eq;

use super::*;

fn two_plus_x_squared() -> Program {
    Program::from_verified(
        vec![
            Instr::PushConst(2.0),
            Instr::PushVar,
            Instr::PushConst(2.0),
            Instr::Binary(BinaryOp::Pow),
            Instr::Binary(BinaryOp::Add),
        ],
        3,
        "x",
    )
}

#[test]
fn display_is_postfix() {
    assert_eq!(two_plus_x_squared().to_string(), "2 x 2 ^ +");
}

#[test]
fn display_uses_variable_name() {
    let program = Program::from_verified(
        vec![Instr::PushVar, Instr::Call(Func::Sin), Instr::Unary(UnaryOp::Neg)],
        1,
        "t",
    );
    assert_eq!(program.to_string(), "t sin neg");
}

#[test]
fn accessors() {
    let program = two_plus_x_squared();
    assert_eq!(program.len(), 5);
    assert!(!program.is_empty());
    assert_eq!(program.max_depth(), 3);
    assert_eq!(program.variable(), "x");
    assert!(!program.is_constant());
}

#[test]
fn constant_program() {
    let program = Program::from_verified(vec![Instr::PushConst(4.0)], 1, "x");
    assert!(program.is_constant());
}

#[test]
fn stack_effects() {
    assert_eq!(Instr::PushVar.stack_effect(), (0, 1));
    assert_eq!(Instr::Binary(BinaryOp::Mul).stack_effect(), (2, 1));
    assert_eq!(Instr::Call(Func::Abs).stack_effect(), (1, 1));
}

#[test]
fn simulate_detects_underflow_and_leftovers() {
    assert_eq!(simulate_depth(&[Instr::Binary(BinaryOp::Add)]), None);
    assert_eq!(
        simulate_depth(&[Instr::PushVar, Instr::PushVar]),
        Some((2, 2))
    );
}
