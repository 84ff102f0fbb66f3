//! Curve tracing: one sample per pixel column, split at undefined points.

use std::mem;

use graff_eval::Machine;
use graff_ir::Program;

use crate::Viewport;

/// A pixel position. Rows may lie off screen.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ScreenPoint {
    pub column: u32,
    pub row: i64,
}

/// A run of consecutive defined samples, drawn as one polyline.
///
/// Always holds at least two points.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Segment {
    points: Vec<ScreenPoint>,
}

impl Segment {
    pub fn points(&self) -> &[ScreenPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; see the type-level invariant.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last pixel column covered.
    pub fn columns(&self) -> (u32, u32) {
        let first = self.points.first().map_or(0, |p| p.column);
        let last = self.points.last().map_or(0, |p| p.column);
        (first, last)
    }
}

/// Everything drawn for one expression in one frame.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Curve {
    pub segments: Vec<Segment>,
}

impl Curve {
    /// Total points across all segments.
    pub fn point_count(&self) -> usize {
        self.segments.iter().map(Segment::len).sum()
    }
}

/// Sample `program` at every pixel column of `view`.
///
/// NaN samples break the curve. A run shorter than two points has nothing
/// to connect and is dropped.
pub fn trace(program: &Program, view: &Viewport, machine: &mut Machine) -> Curve {
    let mut samples = Vec::new();
    machine.sample_into(program, view.sweep(), &mut samples);

    let mut segments = Vec::new();
    let mut run = Vec::new();
    for (column, &y) in (0u32..).zip(samples.iter()) {
        if y.is_nan() {
            close_run(&mut run, &mut segments);
            continue;
        }
        run.push(ScreenPoint {
            column,
            row: view.row_of(y),
        });
    }
    close_run(&mut run, &mut segments);

    tracing::trace!(
        columns = samples.len(),
        segments = segments.len(),
        "traced curve"
    );
    Curve { segments }
}

fn close_run(run: &mut Vec<ScreenPoint>, segments: &mut Vec<Segment>) {
    if run.len() > 1 {
        segments.push(Segment {
            points: mem::take(run),
        });
    } else {
        run.clear();
    }
}

#[cfg(test)]
mod tests;
