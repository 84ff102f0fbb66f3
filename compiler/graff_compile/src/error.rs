//! Compile-time errors.
//!
//! Every failure names the defect and, where there is one, the span of the
//! offending text. Codes follow the phase-prefixed scheme:
//! - E0xxx: lexer errors
//! - E1xxx: parser errors
//! - E9xxx: internal errors (the arity guarantee was violated)

use std::fmt;

use graff_ir::{Func, Span};
use graff_lexer::{LexError, LexErrorKind};

/// Stable identifier for each kind of compile error.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unexpected character
    E0001,
    /// Number literal out of range
    E0002,
    /// Expression too long
    E0003,

    // Parser Errors (E1xxx)
    /// Empty expression
    E1001,
    /// Operator missing an operand
    E1002,
    /// Two operands with no operator between them
    E1003,
    /// Unclosed `(`
    E1004,
    /// Unmatched `)`
    E1005,
    /// Empty parentheses
    E1006,
    /// Unknown function
    E1007,
    /// Unknown identifier
    E1008,
    /// Function name not followed by `(`
    E1009,
    /// Invalid variable name
    E1010,

    // Internal Errors (E9xxx)
    /// Stack arity check failed
    E9001,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{kind} at {}", .span.start)]
pub struct SyntaxError {
    pub span: Span,
    pub kind: SyntaxErrorKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SyntaxErrorKind {
    EmptyExpression,
    /// An operator without the operand it needs, as in `2+` or `*3`.
    MissingOperand { op: char },
    /// Two operands side by side, as in `2 x` or `x(1)`.
    MissingOperator,
    UnclosedParen,
    UnmatchedCloseParen,
    EmptyParens,
    UnknownFunction { name: String },
    UnknownIdentifier { name: String, variable: String },
    MissingCallParen { func: Func },
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxErrorKind::EmptyExpression => f.write_str("empty expression"),
            SyntaxErrorKind::MissingOperand { op } => {
                write!(f, "operator `{op}` is missing an operand")
            }
            SyntaxErrorKind::MissingOperator => f.write_str("expected an operator"),
            SyntaxErrorKind::UnclosedParen => f.write_str("unclosed `(`"),
            SyntaxErrorKind::UnmatchedCloseParen => f.write_str("unmatched `)`"),
            SyntaxErrorKind::EmptyParens => f.write_str("empty parentheses"),
            SyntaxErrorKind::UnknownFunction { name } => write!(f, "unknown function `{name}`"),
            SyntaxErrorKind::UnknownIdentifier { name, .. } => write!(f, "unknown name `{name}`"),
            SyntaxErrorKind::MissingCallParen { func } => {
                write!(f, "function `{func}` must be followed by `(`")
            }
        }
    }
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, span: Span) -> Self {
        SyntaxError { span, kind }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            SyntaxErrorKind::EmptyExpression => ErrorCode::E1001,
            SyntaxErrorKind::MissingOperand { .. } => ErrorCode::E1002,
            SyntaxErrorKind::MissingOperator => ErrorCode::E1003,
            SyntaxErrorKind::UnclosedParen => ErrorCode::E1004,
            SyntaxErrorKind::UnmatchedCloseParen => ErrorCode::E1005,
            SyntaxErrorKind::EmptyParens => ErrorCode::E1006,
            SyntaxErrorKind::UnknownFunction { .. } => ErrorCode::E1007,
            SyntaxErrorKind::UnknownIdentifier { .. } => ErrorCode::E1008,
            SyntaxErrorKind::MissingCallParen { .. } => ErrorCode::E1009,
        }
    }

    pub fn hint(&self) -> Option<String> {
        match &self.kind {
            SyntaxErrorKind::MissingOperator => {
                Some("implicit multiplication is not supported; write `2*x`".to_string())
            }
            SyntaxErrorKind::UnknownFunction { .. } => {
                let names: Vec<_> = Func::ALL.iter().map(|f| f.name()).collect();
                Some(format!("available functions: {}", names.join(", ")))
            }
            SyntaxErrorKind::UnknownIdentifier { variable, .. } => Some(format!(
                "the plotted variable is `{variable}`; `pi` and `e` are also defined"
            )),
            SyntaxErrorKind::MissingCallParen { func } => {
                Some(format!("write `{func}(...)` with the argument in parentheses"))
            }
            SyntaxErrorKind::EmptyParens => Some("parentheses must contain an expression".to_string()),
            _ => None,
        }
    }
}

/// The simulated stack did not end at exactly one value.
///
/// The parser rejects every malformed expression it knows about before this
/// can happen, so seeing one means the parser has a hole.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ArityError {
    #[error("instruction at {span} needs {needed} operand(s) but {available} are available")]
    Underflow {
        needed: usize,
        available: usize,
        span: Span,
    },
    #[error("expression leaves {depth} values instead of one")]
    Unbalanced { depth: usize, span: Span },
}

impl ArityError {
    pub fn span(&self) -> Span {
        match self {
            ArityError::Underflow { span, .. } | ArityError::Unbalanced { span, .. } => *span,
        }
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Arity(#[from] ArityError),
    #[error("`{name}` cannot be used as the variable name")]
    InvalidVariable { name: String },
}

impl CompileError {
    /// Location in the expression text, if the error has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            CompileError::Lex(err) => Some(err.span).filter(|_| err.kind != LexErrorKind::SourceTooLong),
            CompileError::Syntax(err) => Some(err.span),
            CompileError::Arity(err) => Some(err.span()),
            CompileError::InvalidVariable { .. } => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CompileError::Lex(err) => match err.kind {
                LexErrorKind::UnexpectedChar(_) => ErrorCode::E0001,
                LexErrorKind::NumberOutOfRange => ErrorCode::E0002,
                LexErrorKind::SourceTooLong => ErrorCode::E0003,
            },
            CompileError::Syntax(err) => err.code(),
            CompileError::Arity(_) => ErrorCode::E9001,
            CompileError::InvalidVariable { .. } => ErrorCode::E1010,
        }
    }

    pub fn hint(&self) -> Option<String> {
        match self {
            CompileError::Lex(err) => err.hint().map(str::to_string),
            CompileError::Syntax(err) => err.hint(),
            CompileError::Arity(_) => Some("this is a compiler bug; please report it".to_string()),
            CompileError::InvalidVariable { .. } => {
                Some("variable names are identifiers that are not function names".to_string())
            }
        }
    }

    /// Whether the error indicates a compiler defect rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, CompileError::Arity(_))
    }
}

#[cfg(test)]
mod tests;
