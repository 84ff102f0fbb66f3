//! Command handlers for the graff CLI.
//!
//! Each submodule implements one command. Handlers write results to `out`
//! and compile errors to a [`Reporter`]; the binary maps a returned
//! [`CommandError`] to exit status 1.

use std::io::{self, Write};

use graff_compile::compile;
use graff_ir::Program;
use graff_view::ViewportError;
use thiserror::Error;

use crate::reporting::Reporter;

mod check;
mod eval;
mod options;
mod rpn;
mod table;
mod trace;

pub use check::check;
pub use eval::eval;
pub use options::{parse_plot_options, OptionError, PlotOptions};
pub use rpn::rpn;
pub use table::table;
pub use trace::trace;

#[derive(Debug, Error)]
pub enum CommandError {
    /// Already reported in full through the [`Reporter`].
    #[error("{count} expression(s) failed to compile")]
    Rejected { count: usize },
    #[error("invalid sample point `{0}`")]
    InvalidPoint(String),
    #[error(transparent)]
    Options(#[from] OptionError),
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Split command arguments into merged options and positional arguments.
///
/// Anything starting with `--` is an option, except after a bare `--`.
/// A single leading `-` is positional, so `-x^2` and `-3` need no escaping.
pub fn split_args(args: &[String]) -> Result<(PlotOptions, Vec<String>), OptionError> {
    let mut options = PlotOptions::default();
    let mut positional = Vec::new();
    let mut rest = args.iter();

    while let Some(arg) = rest.next() {
        if arg == "--" {
            positional.extend(rest.by_ref().cloned());
            break;
        }
        if arg.starts_with("--") {
            let parsed = parse_plot_options(std::slice::from_ref(arg))?;
            options.merge(&parsed);
        } else {
            positional.push(arg.clone());
        }
    }

    Ok((options, positional))
}

/// Compile every source, reporting each failure.
///
/// Fails if any source fails, after all of them have been reported.
fn compile_all<W: Write>(
    sources: &[String],
    variable: &str,
    reporter: &mut Reporter<W>,
) -> Result<Vec<Program>, CommandError> {
    let mut programs = Vec::with_capacity(sources.len());
    let mut failed = 0;
    for source in sources {
        match compile(source, variable) {
            Ok(program) => programs.push(program),
            Err(err) => {
                reporter.emit(source, &err)?;
                failed += 1;
            }
        }
    }

    if failed > 0 {
        reporter.emit_summary()?;
        return Err(CommandError::Rejected { count: failed });
    }
    Ok(programs)
}

/// Sample values as printed: NaN is `undefined`.
fn format_value(value: f64) -> String {
    if value.is_nan() {
        "undefined".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests;
