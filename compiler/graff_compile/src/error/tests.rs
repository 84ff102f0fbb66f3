use graff_ir::Func;

use super::*;

#[test]
fn syntax_error_message_includes_position() {
    let err = SyntaxError::new(SyntaxErrorKind::MissingOperand { op: '+' }, Span::new(3, 4));
    assert_eq!(err.to_string(), "operator `+` is missing an operand at 3");
}

#[test]
fn codes_are_phase_prefixed() {
    let lex: CompileError = LexError::unexpected_char(Span::new(0, 1), '$').into();
    assert_eq!(lex.code(), ErrorCode::E0001);
    assert_eq!(lex.code().to_string(), "E0001");

    let syntax: CompileError = SyntaxError::new(SyntaxErrorKind::UnclosedParen, Span::new(0, 1)).into();
    assert_eq!(syntax.code(), ErrorCode::E1004);

    let arity: CompileError = ArityError::Unbalanced {
        depth: 2,
        span: Span::new(0, 3),
    }
    .into();
    assert_eq!(arity.code(), ErrorCode::E9001);
    assert!(arity.is_internal());
    assert!(!syntax.is_internal());
}

#[test]
fn transparent_display_for_wrapped_errors() {
    let err: CompileError = LexError::number_out_of_range(Span::new(2, 7)).into();
    assert_eq!(err.to_string(), "number literal at 2 is out of range");
}

#[test]
fn spans_are_exposed_except_for_variable_errors() {
    let err: CompileError = SyntaxError::new(SyntaxErrorKind::EmptyParens, Span::new(4, 6)).into();
    assert_eq!(err.span(), Some(Span::new(4, 6)));

    let var = CompileError::InvalidVariable {
        name: "sin".to_string(),
    };
    assert_eq!(var.span(), None);
    assert_eq!(var.code(), ErrorCode::E1010);
    assert_eq!(var.to_string(), "`sin` cannot be used as the variable name");

    let long: CompileError = LexError::source_too_long().into();
    assert_eq!(long.span(), None);
}

#[test]
fn hints() {
    let unknown = SyntaxError::new(
        SyntaxErrorKind::UnknownFunction {
            name: "sine".to_string(),
        },
        Span::new(0, 4),
    );
    let hint = unknown.hint().unwrap_or_default();
    assert!(hint.contains("sin"), "{hint}");
    assert!(hint.contains("ceil"), "{hint}");

    let call = SyntaxError::new(SyntaxErrorKind::MissingCallParen { func: Func::Tan }, Span::new(0, 3));
    assert_eq!(call.hint().as_deref(), Some("write `tan(...)` with the argument in parentheses"));

    let unclosed = SyntaxError::new(SyntaxErrorKind::UnclosedParen, Span::new(0, 1));
    assert_eq!(unclosed.hint(), None);
}

#[test]
fn arity_messages() {
    let under = ArityError::Underflow {
        needed: 2,
        available: 1,
        span: Span::new(1, 2),
    };
    assert_eq!(
        under.to_string(),
        "instruction at 1..2 needs 2 operand(s) but 1 are available"
    );
    assert_eq!(under.span(), Span::new(1, 2));
}
