//! The `trace` command: the polylines a window would draw for one frame.

use std::io::Write;

use graff_view::{Segment, Session};

use crate::reporting::Reporter;

use super::{CommandError, PlotOptions};

#[tracing::instrument(level = "debug", skip_all, fields(count = sources.len()))]
pub fn trace<O: Write, E: Write>(
    sources: &[String],
    options: &PlotOptions,
    out: &mut O,
    reporter: &mut Reporter<E>,
) -> Result<(), CommandError> {
    let mut session = Session::new(options.session_config()?);
    for source in sources {
        if let Err(err) = session.add(source) {
            reporter.emit(source, &err)?;
        }
    }
    let failed = reporter.error_count();
    if failed > 0 {
        reporter.emit_summary()?;
        return Err(CommandError::Rejected { count: failed });
    }

    let view = session.viewport();
    let (x_min, x_max) = view.x_range();
    let (y_min, y_max) = view.y_range();
    writeln!(
        out,
        "viewport: x {x_min}..{x_max}, y {y_min}..{y_max} ({}x{})",
        view.width, view.height
    )?;
    writeln!(
        out,
        "axes: row {}, column {}",
        on_screen(view.axis_row()),
        on_screen(view.axis_column())
    )?;

    for (plot, curve) in session.plots().iter().zip(session.frame()) {
        let segments = curve.segments.len();
        writeln!(
            out,
            "{} {}: {segments} segment{}, {} points",
            plot.color(),
            plot.source(),
            if segments == 1 { "" } else { "s" },
            curve.point_count()
        )?;
        for segment in &curve.segments {
            let (first, last) = segment.columns();
            let (top, bottom) = row_extent(segment);
            writeln!(out, "  columns {first}..={last}, rows {top}..={bottom}")?;
        }
    }
    Ok(())
}

fn on_screen(position: Option<u32>) -> String {
    position.map_or_else(|| "off-screen".to_string(), |p| p.to_string())
}

/// Smallest and largest row touched by `segment`.
fn row_extent(segment: &Segment) -> (i64, i64) {
    segment
        .points()
        .iter()
        .fold((i64::MAX, i64::MIN), |(lo, hi), p| (lo.min(p.row), hi.max(p.row)))
}
