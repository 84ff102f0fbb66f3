//! Command-line options shared by the plotting commands.

use graff_eval::Sweep;
use graff_view::{Command, SessionConfig, Viewport, ViewportError};
use thiserror::Error;

use crate::reporting::ColorMode;

/// Default x interval for `table`.
const TABLE_RANGE: (f64, f64) = (-10.0, 10.0);
const TABLE_SAMPLES: usize = 11;

/// Options from `--name=value` flags.
///
/// Unset fields fall back to [`SessionConfig::default`]. Options are parsed
/// one flag at a time and combined with [`merge`](PlotOptions::merge).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlotOptions {
    /// Variable name (--var=NAME)
    pub variable: Option<String>,
    /// Screen width in pixels (--width=N)
    pub width: Option<u32>,
    /// Screen height in pixels (--height=N)
    pub height: Option<u32>,
    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    /// Palette seed (--seed=N)
    pub seed: Option<u64>,
    /// Trace plots one at a time (--no-parallel)
    pub no_parallel: bool,
    /// Diagnostic colors (--color=auto|always|never)
    pub color: Option<ColorMode>,
    /// Table start (--from=A)
    pub from: Option<f64>,
    /// Table end (--to=B)
    pub to: Option<f64>,
    /// Table rows (--samples=N)
    pub samples: Option<usize>,
    /// Navigation key presses applied before tracing (--keys=qwe)
    pub keys: Vec<Command>,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum OptionError {
    #[error("unknown option `{0}`")]
    Unknown(String),
    #[error("invalid value `{value}` for `--{option}`")]
    InvalidValue { option: &'static str, value: String },
    #[error("unknown key `{0}` in `--keys` (expected q, e, w, a, s, or d)")]
    UnknownKey(char),
}

impl PlotOptions {
    /// Layer `other` over `self`: set fields in `other` win, flags OR, key
    /// presses append.
    pub fn merge(&mut self, other: &Self) {
        if other.variable.is_some() {
            self.variable.clone_from(&other.variable);
        }
        merge_copy(&mut self.width, other.width);
        merge_copy(&mut self.height, other.height);
        merge_copy(&mut self.x_min, other.x_min);
        merge_copy(&mut self.x_max, other.x_max);
        merge_copy(&mut self.y_min, other.y_min);
        merge_copy(&mut self.y_max, other.y_max);
        merge_copy(&mut self.seed, other.seed);
        merge_copy(&mut self.color, other.color);
        merge_copy(&mut self.from, other.from);
        merge_copy(&mut self.to, other.to);
        merge_copy(&mut self.samples, other.samples);

        self.no_parallel |= other.no_parallel;
        self.keys.extend_from_slice(&other.keys);
    }

    pub fn variable(&self) -> &str {
        self.variable.as_deref().unwrap_or("x")
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color.unwrap_or_default()
    }

    /// Session settings with the viewport bounds and key presses applied.
    pub fn session_config(&self) -> Result<SessionConfig, ViewportError> {
        let defaults = SessionConfig::default();
        let base = defaults.viewport;
        let (x_lo, x_hi) = base.x_range();
        let (y_lo, y_hi) = base.y_range();

        let mut viewport = Viewport::from_bounds(
            (self.x_min.unwrap_or(x_lo), self.x_max.unwrap_or(x_hi)),
            (self.y_min.unwrap_or(y_lo), self.y_max.unwrap_or(y_hi)),
            self.width.unwrap_or(base.width),
            self.height.unwrap_or(base.height),
        )?;
        for &command in &self.keys {
            viewport.apply(command);
        }

        Ok(SessionConfig {
            viewport,
            variable: self.variable().to_string(),
            seed: self.seed.unwrap_or(defaults.seed),
            parallel: defaults.parallel && !self.no_parallel,
        })
    }

    /// Sample points for `table`, both ends included.
    pub fn table_sweep(&self) -> Sweep {
        Sweep::over(
            self.from.unwrap_or(TABLE_RANGE.0),
            self.to.unwrap_or(TABLE_RANGE.1),
            self.samples.unwrap_or(TABLE_SAMPLES),
        )
    }
}

fn merge_copy<T: Copy>(slot: &mut Option<T>, other: Option<T>) {
    if other.is_some() {
        *slot = other;
    }
}

/// Parse option flags. Every element of `args` must be a `--` flag.
pub fn parse_plot_options(args: &[String]) -> Result<PlotOptions, OptionError> {
    let mut options = PlotOptions::default();

    for arg in args {
        if arg == "--no-parallel" {
            options.no_parallel = true;
        } else if let Some(name) = arg.strip_prefix("--var=") {
            options.variable = Some(name.to_string());
        } else if let Some(value) = arg.strip_prefix("--width=") {
            options.width = Some(parse_value("width", value)?);
        } else if let Some(value) = arg.strip_prefix("--height=") {
            options.height = Some(parse_value("height", value)?);
        } else if let Some(value) = arg.strip_prefix("--x-min=") {
            options.x_min = Some(parse_value("x-min", value)?);
        } else if let Some(value) = arg.strip_prefix("--x-max=") {
            options.x_max = Some(parse_value("x-max", value)?);
        } else if let Some(value) = arg.strip_prefix("--y-min=") {
            options.y_min = Some(parse_value("y-min", value)?);
        } else if let Some(value) = arg.strip_prefix("--y-max=") {
            options.y_max = Some(parse_value("y-max", value)?);
        } else if let Some(value) = arg.strip_prefix("--seed=") {
            options.seed = Some(parse_value("seed", value)?);
        } else if let Some(value) = arg.strip_prefix("--from=") {
            options.from = Some(parse_value("from", value)?);
        } else if let Some(value) = arg.strip_prefix("--to=") {
            options.to = Some(parse_value("to", value)?);
        } else if let Some(value) = arg.strip_prefix("--samples=") {
            options.samples = Some(parse_value("samples", value)?);
        } else if let Some(value) = arg.strip_prefix("--color=") {
            options.color = Some(ColorMode::parse(value).ok_or_else(|| {
                OptionError::InvalidValue {
                    option: "color",
                    value: value.to_string(),
                }
            })?);
        } else if let Some(keys) = arg.strip_prefix("--keys=") {
            for key in keys.chars() {
                let command = Command::from_key(key).ok_or(OptionError::UnknownKey(key))?;
                options.keys.push(command);
            }
        } else {
            return Err(OptionError::Unknown(arg.clone()));
        }
    }

    Ok(options)
}

fn parse_value<T: std::str::FromStr>(option: &'static str, value: &str) -> Result<T, OptionError> {
    value.parse().map_err(|_| OptionError::InvalidValue {
        option,
        value: value.to_string(),
    })
}
