//! The `table` command: tab-separated samples of one or more expressions.

use std::io::Write;

use graff_eval::Machine;

use crate::reporting::Reporter;

use super::{compile_all, format_value, CommandError, PlotOptions};

#[tracing::instrument(level = "debug", skip_all, fields(count = sources.len()))]
pub fn table<O: Write, E: Write>(
    sources: &[String],
    options: &PlotOptions,
    out: &mut O,
    reporter: &mut Reporter<E>,
) -> Result<(), CommandError> {
    let programs = compile_all(sources, options.variable(), reporter)?;
    let sweep = options.table_sweep();

    let mut columns = Vec::with_capacity(programs.len());
    let mut machine = Machine::new();
    for program in &programs {
        let mut samples = Vec::new();
        machine.sample_into(program, sweep, &mut samples);
        columns.push(samples);
    }

    write!(out, "{}", options.variable())?;
    for source in sources {
        write!(out, "\t{source}")?;
    }
    writeln!(out)?;

    for (row, x) in sweep.iter().enumerate() {
        write!(out, "{x}")?;
        for column in &columns {
            write!(out, "\t{}", format_value(column[row]))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
