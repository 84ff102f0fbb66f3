//! The `check` command: validate expressions without evaluating them.

use std::io::Write;

use graff_compile::compile;

use crate::reporting::Reporter;

use super::{CommandError, PlotOptions};

/// Report every expression; fail if any is rejected.
pub fn check<O: Write, E: Write>(
    sources: &[String],
    options: &PlotOptions,
    out: &mut O,
    reporter: &mut Reporter<E>,
) -> Result<(), CommandError> {
    for source in sources {
        match compile(source, options.variable()) {
            Ok(program) => writeln!(
                out,
                "OK: {source} ({} instructions, stack depth {})",
                program.len(),
                program.max_depth()
            )?,
            Err(err) => reporter.emit(source, &err)?,
        }
    }

    let failed = reporter.error_count();
    if failed > 0 {
        reporter.emit_summary()?;
        return Err(CommandError::Rejected { count: failed });
    }
    Ok(())
}
