//! A set of plotted expressions sharing one viewport.

use graff_compile::{compile, CompileError};
use graff_eval::Machine;
use graff_ir::Program;
use rayon::prelude::*;
use thiserror::Error;

use crate::{trace, Command, Curve, Palette, Rgb, Viewport};

/// Session settings.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub viewport: Viewport,
    /// Name every expression is compiled against.
    pub variable: String,
    /// Palette seed.
    pub seed: u64,
    /// Trace plots on the rayon pool when there is more than one.
    pub parallel: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            viewport: Viewport::default(),
            variable: "x".to_string(),
            seed: 0,
            parallel: true,
        }
    }
}

/// One accepted expression.
#[derive(Clone, Debug)]
pub struct Plot {
    source: String,
    program: Program,
    color: Rgb,
}

impl Plot {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn color(&self) -> Rgb {
        self.color
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error("no plot at index {index} ({count} plotted)")]
    NoSuchPlot { index: usize, count: usize },
}

/// Plotted expressions plus the view they are drawn in.
///
/// Expressions that fail to compile are never stored, so every frame draws
/// only programs that passed the arity check.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    palette: Palette,
    plots: Vec<Plot>,
    /// Colors are handed out in order and not reused after removal.
    next_color: usize,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let palette = Palette::new(config.seed);
        Session {
            config,
            palette,
            plots: Vec::new(),
            next_color: 0,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.config.viewport
    }

    pub fn plots(&self) -> &[Plot] {
        &self.plots
    }

    pub fn navigate(&mut self, command: Command) {
        self.config.viewport.apply(command);
        tracing::trace!(%command, viewport = ?self.config.viewport, "navigated");
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.config.viewport.resize(width, height);
    }

    /// Compile `source` and add it. Returns the new plot's index.
    pub fn add(&mut self, source: &str) -> Result<usize, CompileError> {
        let program = compile(source, &self.config.variable)?;
        let color = self.palette.color(self.next_color);
        self.next_color += 1;
        self.plots.push(Plot {
            source: source.to_string(),
            program,
            color,
        });
        tracing::debug!(source, %color, plots = self.plots.len(), "plot added");
        Ok(self.plots.len() - 1)
    }

    /// Swap the expression at `index`, keeping its color.
    ///
    /// On error the old expression stays.
    pub fn replace(&mut self, index: usize, source: &str) -> Result<(), SessionError> {
        let count = self.plots.len();
        let variable = &self.config.variable;
        let plot = self
            .plots
            .get_mut(index)
            .ok_or(SessionError::NoSuchPlot { index, count })?;
        plot.program = compile(source, variable)?;
        plot.source = source.to_string();
        tracing::debug!(index, source, "plot replaced");
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Plot, SessionError> {
        if index < self.plots.len() {
            Ok(self.plots.remove(index))
        } else {
            Err(SessionError::NoSuchPlot {
                index,
                count: self.plots.len(),
            })
        }
    }

    /// Trace every plot, in plot order.
    pub fn frame(&self) -> Vec<Curve> {
        let view = &self.config.viewport;
        let parallel = self.config.parallel && self.plots.len() > 1;
        tracing::debug!(plots = self.plots.len(), parallel, "tracing frame");

        if parallel {
            self.plots
                .par_iter()
                .map_init(Machine::new, |machine, plot| {
                    trace(&plot.program, view, machine)
                })
                .collect()
        } else {
            let mut machine = Machine::new();
            self.plots
                .iter()
                .map(|plot| trace(&plot.program, view, &mut machine))
                .collect()
        }
    }
}
