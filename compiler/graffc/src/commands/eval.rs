//! The `eval` command: evaluate one expression at given points.

use std::io::Write;

use graff_eval::Machine;

use crate::reporting::Reporter;

use super::{compile_all, format_value, CommandError, PlotOptions};

/// Print `f(x) = y` for each point. Points are parsed before compiling so a
/// typo in a point is reported even when the expression is also bad.
pub fn eval<O: Write, E: Write>(
    source: &str,
    points: &[String],
    options: &PlotOptions,
    out: &mut O,
    reporter: &mut Reporter<E>,
) -> Result<(), CommandError> {
    let xs = points
        .iter()
        .map(|p| {
            p.parse::<f64>()
                .map_err(|_| CommandError::InvalidPoint(p.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let programs = compile_all(&[source.to_string()], options.variable(), reporter)?;
    let mut machine = Machine::new();
    for program in &programs {
        for &x in &xs {
            let y = machine.eval(program, x);
            writeln!(out, "f({x}) = {}", format_value(y))?;
        }
    }
    Ok(())
}
