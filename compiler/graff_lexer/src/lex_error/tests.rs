use super::*;

#[test]
fn unexpected_char_message_names_position() {
    let err = LexError::unexpected_char(Span::new(4, 5), '$');
    assert_eq!(err.to_string(), "unexpected character `$` at 4");
    assert_eq!(err.kind, LexErrorKind::UnexpectedChar('$'));
}

#[test]
fn control_chars_are_escaped() {
    let err = LexError::unexpected_char(Span::new(0, 1), '\u{7}');
    assert_eq!(err.to_string(), "unexpected character `\\u{7}` at 0");
}

#[test]
fn math_symbols_get_specific_hints() {
    let times = LexError::unexpected_char(Span::new(1, 3), '×');
    assert_eq!(times.hint(), Some("use `*` for multiplication"));
    let squared = LexError::unexpected_char(Span::new(1, 3), '²');
    assert_eq!(squared.hint(), Some("use `^` for powers, e.g. `x^2`"));
}

#[test]
fn out_of_range_number() {
    let err = LexError::number_out_of_range(Span::new(2, 7));
    assert_eq!(err.to_string(), "number literal at 2 is out of range");
    assert!(err.hint().is_some());
}
