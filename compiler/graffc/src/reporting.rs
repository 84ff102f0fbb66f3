//! Terminal rendering of compile errors.
//!
//! ```text
//! error[E1002]: missing operand after `+` at 2
//!   |
//!   | 2+
//!   |   ^
//!   = help: ...
//! ```

use std::io::{self, Write};

use graff_compile::CompileError;
use graff_ir::Span;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for the reporter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Parse a `--color=` value.
    pub fn parse(value: &str) -> Option<ColorMode> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// For `Auto`, `is_tty` decides; the other modes ignore it.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writes compile errors with a caret under the offending text.
pub struct Reporter<W: Write> {
    writer: W,
    colors: bool,
    errors: usize,
}

impl<W: Write> Reporter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        Reporter {
            writer,
            colors: mode.should_use_colors(is_tty),
            errors: 0,
        }
    }

    /// Number of errors emitted so far.
    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Render `error`, which came from compiling `source`.
    pub fn emit(&mut self, source: &str, error: &CompileError) -> io::Result<()> {
        self.errors += 1;

        self.write_colored("error", colors::ERROR)?;
        self.write_colored(&format!("[{}]", error.code()), colors::BOLD)?;
        writeln!(self.writer, ": {error}")?;

        if let Some(span) = error.span() {
            let (column, width) = caret_position(source, span);
            self.write_gutter()?;
            writeln!(self.writer)?;
            self.write_gutter()?;
            writeln!(self.writer, " {source}")?;
            self.write_gutter()?;
            write!(self.writer, " {}", " ".repeat(column))?;
            self.write_colored(&"^".repeat(width), colors::ERROR)?;
            writeln!(self.writer)?;
        } else {
            self.write_gutter()?;
            writeln!(self.writer, " {source}")?;
        }

        if let Some(hint) = error.hint() {
            write!(self.writer, "  = ")?;
            self.write_colored("help", colors::HELP)?;
            writeln!(self.writer, ": {hint}")?;
        }
        writeln!(self.writer)
    }

    /// `error: aborting due to N previous errors`, if there were any.
    pub fn emit_summary(&mut self) -> io::Result<()> {
        if self.errors == 0 {
            return Ok(());
        }
        self.write_colored("error", colors::ERROR)?;
        if self.errors == 1 {
            writeln!(self.writer, ": aborting due to previous error")?;
        } else {
            writeln!(self.writer, ": aborting due to {} previous errors", self.errors)?;
        }
        self.writer.flush()
    }

    fn write_gutter(&mut self) -> io::Result<()> {
        self.write_colored("  |", colors::GUTTER)
    }

    fn write_colored(&mut self, text: &str, color: &str) -> io::Result<()> {
        if self.colors {
            write!(self.writer, "{color}{text}{}", colors::RESET)
        } else {
            write!(self.writer, "{text}")
        }
    }
}

/// Character column and width of the caret for `span` in `source`.
///
/// Spans past the end (an error at end of input) point just after the last
/// character.
fn caret_position(source: &str, span: Span) -> (usize, usize) {
    let start = (span.start as usize).min(source.len());
    let end = (span.end as usize).clamp(start, source.len());
    let column = source.get(..start).map_or(start, |s| s.chars().count());
    let width = source.get(start..end).map_or(0, |s| s.chars().count());
    (column, width.max(1))
}
