//! The `rpn` command: print each expression in postfix form.

use std::io::Write;

use crate::reporting::Reporter;

use super::{compile_all, CommandError, PlotOptions};

pub fn rpn<O: Write, E: Write>(
    sources: &[String],
    options: &PlotOptions,
    out: &mut O,
    reporter: &mut Reporter<E>,
) -> Result<(), CommandError> {
    for program in compile_all(sources, options.variable(), reporter)? {
        writeln!(out, "{program}")?;
    }
    Ok(())
}
