//! Tokenizer for graff expressions.
//!
//! Scanning is done by a `logos` automaton over [`RawToken`]; the cooking
//! step then classifies identifiers into function names and everything
//! else, and attaches compact spans. Whitespace is skipped. The first
//! character that starts no token ends lexing with a [`LexError`].

use graff_ir::{Func, Span};
use logos::Logos;

mod lex_error;
mod token;

pub use lex_error::{LexError, LexErrorKind};
pub use token::{Operator, Spanned, Token};

/// Errors the raw scanner can produce.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum RawError {
    #[default]
    Unrecognized,
    NumberOutOfRange,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(error = RawError)]
enum RawToken<'src> {
    #[regex(r"[0-9]+(\.[0-9]*)?", lex_number)]
    #[regex(r"\.[0-9]+", lex_number)]
    Number(f64),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice())]
    Ident(&'src str),

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// Finish a numeric literal: take an optional exponent, then parse.
///
/// The exponent is consumed by hand so that `2e` or `2e+` lex as the number
/// `2` followed by an identifier, instead of an error.
fn lex_number<'src>(lex: &mut logos::Lexer<'src, RawToken<'src>>) -> Result<f64, RawError> {
    let exponent = exponent_len(lex.remainder().as_bytes());
    lex.bump(exponent);
    let value: f64 = lex
        .slice()
        .parse()
        .map_err(|_| RawError::NumberOutOfRange)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RawError::NumberOutOfRange)
    }
}

/// Length of a well-formed `[eE][+-]?[0-9]+` prefix of `rest`, or 0.
fn exponent_len(rest: &[u8]) -> usize {
    if !matches!(rest.first(), Some(b'e' | b'E')) {
        return 0;
    }
    let mut i = 1;
    if matches!(rest.get(i), Some(b'+' | b'-')) {
        i += 1;
    }
    let digits = rest[i..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        0
    } else {
        i + digits
    }
}

fn cook(raw: RawToken<'_>) -> Token<'_> {
    match raw {
        RawToken::Number(value) => Token::Number(value),
        RawToken::Ident(name) => match Func::from_name(name) {
            Some(func) => Token::Function(func),
            None => Token::Ident(name),
        },
        RawToken::Plus => Token::Operator(Operator::Plus),
        RawToken::Minus => Token::Operator(Operator::Minus),
        RawToken::Star => Token::Operator(Operator::Star),
        RawToken::Slash => Token::Operator(Operator::Slash),
        RawToken::Caret => Token::Operator(Operator::Caret),
        RawToken::LParen => Token::LeftParen,
        RawToken::RParen => Token::RightParen,
    }
}

/// Tokenize an expression.
///
/// Identifiers borrow from `source`. Spans are byte offsets into `source`.
pub fn tokenize(source: &str) -> Result<Vec<Spanned<Token<'_>>>, LexError> {
    if u32::try_from(source.len()).is_err() {
        return Err(LexError::source_too_long());
    }

    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        // Length was checked above, so offsets fit in u32.
        let span = Span::new(range.start as u32, range.end as u32);
        match result {
            Ok(raw) => tokens.push(Spanned::new(cook(raw), span)),
            Err(RawError::NumberOutOfRange) => return Err(LexError::number_out_of_range(span)),
            Err(RawError::Unrecognized) => {
                let found = source
                    .get(range.start..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or('\0');
                let end = span.start + found.len_utf8() as u32;
                return Err(LexError::unexpected_char(Span::new(span.start, end), found));
            }
        }
    }

    Ok(tokens)
}
