//! Shunting-yard conversion from tokens to postfix instructions.
//!
//! The compiler walks the token list once. Operands go straight to the
//! [`Emitter`]; operators wait on the pending stack until something of lower
//! precedence (or a closing parenthesis, or the end of input) releases them.
//!
//! `expect_operand` is the only parser state. It is true at the start,
//! after an operator, and after `(`; a `-` seen there is negation, a `+` seen
//! there is a no-op, and anything that is not an operand start is an error.

use graff_ir::{constant, BinaryOp, Func, Instr, Program, Span, UnaryOp};
use graff_lexer::{Operator, Spanned, Token};
use smallvec::SmallVec;

use crate::emitter::Emitter;
use crate::{CompileError, SyntaxError, SyntaxErrorKind};

/// Operators waiting for their right-hand side to be emitted.
#[derive(Copy, Clone, Debug)]
enum Pending {
    Binary(BinaryOp, Span),
    Negate(Span),
    Call(Func, Span),
    Group(Span),
}

impl Pending {
    /// Precedence while sitting on the pending stack. `None` for `(`, which
    /// is only released by its `)`.
    fn precedence(self) -> Option<u8> {
        match self {
            Pending::Binary(op, _) => Some(op.precedence()),
            Pending::Negate(_) => Some(UnaryOp::PRECEDENCE),
            Pending::Call(..) => Some(u8::MAX),
            Pending::Group(_) => None,
        }
    }
}

type Result<T> = std::result::Result<T, CompileError>;

fn syntax(kind: SyntaxErrorKind, span: Span) -> CompileError {
    SyntaxError::new(kind, span).into()
}

pub(crate) struct Compiler<'a, 'src> {
    tokens: &'a [Spanned<Token<'src>>],
    variable: &'a str,
    pending: SmallVec<[Pending; 16]>,
    out: Emitter,
    expect_operand: bool,
    /// Most recent operator, for "missing operand" messages.
    last_op: Option<(char, Span)>,
}

impl<'a, 'src> Compiler<'a, 'src> {
    pub(crate) fn new(tokens: &'a [Spanned<Token<'src>>], variable: &'a str) -> Self {
        Compiler {
            tokens,
            variable,
            pending: SmallVec::new(),
            out: Emitter::with_capacity(tokens.len()),
            expect_operand: true,
            last_op: None,
        }
    }

    /// Run the conversion. `whole` spans the full expression text.
    pub(crate) fn compile(mut self, whole: Span) -> Result<Program> {
        let tokens = self.tokens;
        if tokens.is_empty() {
            return Err(syntax(SyntaxErrorKind::EmptyExpression, whole));
        }

        for (index, token) in tokens.iter().enumerate() {
            let span = token.span;
            match token.value {
                Token::Number(value) => self.operand(Instr::PushConst(value), span)?,
                Token::Ident(name) => self.identifier(name, index, span)?,
                Token::Function(func) => self.function(func, index, span)?,
                Token::Operator(op) => self.operator(op, span)?,
                Token::LeftParen => self.open(span)?,
                Token::RightParen => self.close(index, span)?,
            }
        }

        self.finish(whole)
    }

    fn next_is_open(&self, index: usize) -> bool {
        matches!(
            self.tokens.get(index + 1).map(|t| t.value),
            Some(Token::LeftParen)
        )
    }

    fn operand(&mut self, instr: Instr, span: Span) -> Result<()> {
        if !self.expect_operand {
            return Err(syntax(SyntaxErrorKind::MissingOperator, span));
        }
        self.out.emit(instr, span)?;
        self.expect_operand = false;
        Ok(())
    }

    fn identifier(&mut self, name: &str, index: usize, span: Span) -> Result<()> {
        if name == self.variable {
            return self.operand(Instr::PushVar, span);
        }
        if let Some(value) = constant(name) {
            return self.operand(Instr::PushConst(value), span);
        }
        let kind = if self.next_is_open(index) {
            SyntaxErrorKind::UnknownFunction {
                name: name.to_string(),
            }
        } else {
            SyntaxErrorKind::UnknownIdentifier {
                name: name.to_string(),
                variable: self.variable.to_string(),
            }
        };
        Err(syntax(kind, span))
    }

    fn function(&mut self, func: Func, index: usize, span: Span) -> Result<()> {
        if !self.expect_operand {
            return Err(syntax(SyntaxErrorKind::MissingOperator, span));
        }
        if !self.next_is_open(index) {
            return Err(syntax(SyntaxErrorKind::MissingCallParen { func }, span));
        }
        self.pending.push(Pending::Call(func, span));
        Ok(())
    }

    fn operator(&mut self, op: Operator, span: Span) -> Result<()> {
        self.last_op = Some((op.symbol(), span));

        if self.expect_operand {
            return match op {
                Operator::Minus => {
                    self.pending.push(Pending::Negate(span));
                    Ok(())
                }
                Operator::Plus => Ok(()),
                _ => Err(syntax(
                    SyntaxErrorKind::MissingOperand { op: op.symbol() },
                    span,
                )),
            };
        }

        let incoming = op.binary();
        self.release_for(incoming)?;
        self.pending.push(Pending::Binary(incoming, span));
        self.expect_operand = true;
        Ok(())
    }

    /// Emit every pending operator that binds at least as tightly as
    /// `incoming` (strictly tighter when `incoming` is right-associative).
    fn release_for(&mut self, incoming: BinaryOp) -> Result<()> {
        while let Some(&top) = self.pending.last() {
            let Some(top_prec) = top.precedence() else {
                break;
            };
            let prec = incoming.precedence();
            let releases = top_prec > prec || (top_prec == prec && !incoming.is_right_assoc());
            if !releases {
                break;
            }
            self.pending.pop();
            self.emit_pending(top)?;
        }
        Ok(())
    }

    fn emit_pending(&mut self, pending: Pending) -> Result<()> {
        let (instr, span) = match pending {
            Pending::Binary(op, span) => (Instr::Binary(op), span),
            Pending::Negate(span) => (Instr::Unary(UnaryOp::Neg), span),
            Pending::Call(func, span) => (Instr::Call(func), span),
            Pending::Group(span) => return Err(syntax(SyntaxErrorKind::UnclosedParen, span)),
        };
        self.out.emit(instr, span)?;
        Ok(())
    }

    fn open(&mut self, span: Span) -> Result<()> {
        if !self.expect_operand {
            return Err(syntax(SyntaxErrorKind::MissingOperator, span));
        }
        self.pending.push(Pending::Group(span));
        Ok(())
    }

    fn close(&mut self, index: usize, span: Span) -> Result<()> {
        if self.expect_operand {
            let previous = index.checked_sub(1).and_then(|i| self.tokens.get(i));
            return Err(match (previous, self.last_op) {
                (Some(prev), _) if prev.value == Token::LeftParen => {
                    syntax(SyntaxErrorKind::EmptyParens, prev.span.merge(span))
                }
                (Some(_), Some((op, op_span))) => {
                    syntax(SyntaxErrorKind::MissingOperand { op }, op_span)
                }
                _ => syntax(SyntaxErrorKind::UnmatchedCloseParen, span),
            });
        }

        loop {
            match self.pending.pop() {
                None => return Err(syntax(SyntaxErrorKind::UnmatchedCloseParen, span)),
                Some(Pending::Group(_)) => break,
                Some(other) => self.emit_pending(other)?,
            }
        }

        if let Some(&Pending::Call(func, name_span)) = self.pending.last() {
            self.pending.pop();
            self.out.emit(Instr::Call(func), name_span.merge(span))?;
        }

        Ok(())
    }

    fn finish(mut self, whole: Span) -> Result<Program> {
        if self.expect_operand {
            if let Some((op, span)) = self.last_op {
                return Err(syntax(SyntaxErrorKind::MissingOperand { op }, span));
            }
            // Only openers were seen, e.g. `(` or `sin(`.
            let unclosed = self.pending.iter().find_map(|p| match p {
                Pending::Group(span) => Some(*span),
                _ => None,
            });
            return Err(match unclosed {
                Some(span) => syntax(SyntaxErrorKind::UnclosedParen, span),
                None => syntax(SyntaxErrorKind::EmptyExpression, whole),
            });
        }

        while let Some(pending) = self.pending.pop() {
            self.emit_pending(pending)?;
        }

        Ok(self.out.finish(self.variable, whole)?)
    }
}
