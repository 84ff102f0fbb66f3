//! Lexer error types.
//!
//! A lexer error always carries the span of the offending text so the
//! caller can underline it.

use std::fmt;

use graff_ir::Span;

#[derive(Clone, Debug, PartialEq)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LexErrorKind {
    /// A character that starts no token.
    UnexpectedChar(char),
    /// A numeric literal too large to represent as a finite `f64`.
    NumberOutOfRange,
    /// The expression is longer than spans can address.
    SourceTooLong,
}

impl LexError {
    pub fn unexpected_char(span: Span, found: char) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnexpectedChar(found),
        }
    }

    pub fn number_out_of_range(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::NumberOutOfRange,
        }
    }

    pub fn source_too_long() -> Self {
        LexError {
            span: Span::point(u32::MAX),
            kind: LexErrorKind::SourceTooLong,
        }
    }

    /// Short hint shown under the message, if there is a useful one.
    pub fn hint(&self) -> Option<&'static str> {
        match self.kind {
            LexErrorKind::UnexpectedChar('×' | '·') => Some("use `*` for multiplication"),
            LexErrorKind::UnexpectedChar('÷') => Some("use `/` for division"),
            LexErrorKind::UnexpectedChar('²' | '³') => Some("use `^` for powers, e.g. `x^2`"),
            LexErrorKind::UnexpectedChar(',') => {
                Some("functions take a single argument; use `.` as the decimal point")
            }
            LexErrorKind::UnexpectedChar(_) => {
                Some("expected a number, a name, `+ - * / ^`, or parentheses")
            }
            LexErrorKind::NumberOutOfRange => Some("literals must fit in a 64-bit float"),
            LexErrorKind::SourceTooLong => None,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LexErrorKind::UnexpectedChar(c) => {
                write!(f, "unexpected character `{}` at {}", c.escape_debug(), self.span.start)
            }
            LexErrorKind::NumberOutOfRange => {
                write!(f, "number literal at {} is out of range", self.span.start)
            }
            LexErrorKind::SourceTooLong => f.write_str("expression is too long"),
        }
    }
}

impl std::error::Error for LexError {}

#[cfg(test)]
mod tests;
