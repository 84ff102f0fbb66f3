//! Expression compiler: infix text in, postfix [`Program`] out.
//!
//! Compilation runs once per expression. It tokenizes, converts to postfix
//! with the shunting-yard algorithm, and checks the resulting stack arity so
//! that evaluation never has to.
//!
//! ```text
//! "2 + 3 * x"  ──tokenize──▶  [2] [+] [3] [*] [x]  ──shunting-yard──▶  2 3 x * +
//! ```

use graff_ir::{Program, Span};
use graff_lexer::Token;

mod compiler;
mod emitter;
mod error;

pub use error::{ArityError, CompileError, ErrorCode, SyntaxError, SyntaxErrorKind};

/// Compile `source` into a program over the single variable `variable`.
///
/// Nothing is cached between calls; compiling the same text twice yields
/// two equal, independent programs.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len(), variable = %variable))]
pub fn compile(source: &str, variable: &str) -> Result<Program, CompileError> {
    check_variable(variable)?;

    let tokens = graff_lexer::tokenize(source)?;
    // `tokenize` already rejected sources whose length does not fit a span.
    let whole = Span::new(0, source.len() as u32);
    let result = compiler::Compiler::new(&tokens, variable).compile(whole);

    match &result {
        Ok(program) => tracing::trace!(
            instrs = program.len(),
            depth = program.max_depth(),
            rpn = %program,
            "compiled"
        ),
        Err(error) => tracing::debug!(%error, code = %error.code(), "compile failed"),
    }
    result
}

/// The variable must lex as a single identifier that is not a function name.
fn check_variable(variable: &str) -> Result<(), CompileError> {
    match graff_lexer::tokenize(variable).as_deref() {
        Ok([token]) if matches!(token.value, Token::Ident(name) if name == variable) => Ok(()),
        _ => Err(CompileError::InvalidVariable {
            name: variable.to_string(),
        }),
    }
}
