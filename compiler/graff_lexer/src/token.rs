//! Cooked tokens handed to the compiler.

use std::fmt;

use graff_ir::{BinaryOp, Func, Span};

/// Operator characters. Whether `-` is negation or subtraction is decided
/// by the compiler from context, not here.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
}

impl Operator {
    /// The infix meaning of this operator.
    pub const fn binary(self) -> BinaryOp {
        match self {
            Operator::Plus => BinaryOp::Add,
            Operator::Minus => BinaryOp::Sub,
            Operator::Star => BinaryOp::Mul,
            Operator::Slash => BinaryOp::Div,
            Operator::Caret => BinaryOp::Pow,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Star => '*',
            Operator::Slash => '/',
            Operator::Caret => '^',
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Token<'src> {
    Number(f64),
    /// Any identifier that is not a function name: the variable, a named
    /// constant, or something the compiler will reject.
    Ident(&'src str),
    Function(Func),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{value}"),
            Token::Ident(name) => f.write_str(name),
            Token::Function(func) => write!(f, "{func}"),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(value: T, span: Span) -> Self {
        Spanned { value, span }
    }
}
