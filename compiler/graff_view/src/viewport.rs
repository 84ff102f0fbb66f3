//! Pixel/world coordinate mapping.
//!
//! Pixel column `i` samples world `x = base_x + i * diff_x`. Rows grow
//! downward, so world `y` lands on row `height - 1 - trunc((y - base_y) / diff_y)`.
//! Rows are signed: points above or below the screen keep their true row so
//! a polyline leaving the screen still points the right way.

use graff_eval::Sweep;
use thiserror::Error;

use crate::{Command, Direction};

/// Scale factor for one zoom or stretch step.
pub const ZOOM: f64 = 1.25;

/// Pixels moved by one pan step.
pub const PAN_PIXELS: f64 = 30.0;

/// Wheel deltas are divided by this before scaling.
pub const WHEEL_DIVISOR: f64 = 30.0;

/// The visible region of the plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// World x at pixel column 0.
    pub base_x: f64,
    /// World y at the bottom row.
    pub base_y: f64,
    /// World units per pixel, horizontally.
    pub diff_x: f64,
    /// World units per pixel, vertically.
    pub diff_y: f64,
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    /// 800x600 pixels, 40 pixels per unit, origin centered.
    fn default() -> Self {
        Viewport {
            base_x: -10.0,
            base_y: -7.5,
            diff_x: 0.025,
            diff_y: 0.025,
            width: 800,
            height: 600,
        }
    }
}

/// A viewport that cannot be drawn.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ViewportError {
    #[error("screen size {width}x{height} has no pixels")]
    EmptyScreen { width: u32, height: u32 },
    #[error("{axis} range {min}..{max} is empty or not finite")]
    EmptyRange { axis: char, min: f64, max: f64 },
}

impl Viewport {
    /// The viewport showing `x_min..x_max` by `y_min..y_max` on a
    /// `width` x `height` screen.
    pub fn from_bounds(
        (x_min, x_max): (f64, f64),
        (y_min, y_max): (f64, f64),
        width: u32,
        height: u32,
    ) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::EmptyScreen { width, height });
        }
        check_range('x', x_min, x_max)?;
        check_range('y', y_min, y_max)?;
        Ok(Viewport {
            base_x: x_min,
            base_y: y_min,
            diff_x: (x_max - x_min) / f64::from(width),
            diff_y: (y_max - y_min) / f64::from(height),
            width,
            height,
        })
    }

    /// World x sampled by pixel column `column`.
    #[inline]
    pub fn x_at(&self, column: u32) -> f64 {
        self.base_x + f64::from(column) * self.diff_x
    }

    /// One sample per pixel column.
    pub fn sweep(&self) -> Sweep {
        Sweep::new(self.base_x, self.diff_x, self.width as usize)
    }

    /// Screen row of world `y`. May fall outside `0..height`.
    #[inline]
    pub fn row_of(&self, y: f64) -> i64 {
        i64::from(self.height) - 1 - ((y - self.base_y) / self.diff_y) as i64
    }

    /// Screen column of world `x`. May fall outside `0..width`.
    #[inline]
    pub fn column_of(&self, x: f64) -> i64 {
        ((x - self.base_x) / self.diff_x) as i64
    }

    /// World coordinates under the pixel `(px, py)`.
    pub fn cursor_coords(&self, px: i32, py: i32) -> (f64, f64) {
        let x = self.base_x + f64::from(px) * self.diff_x;
        let y = self.base_y + (f64::from(self.height) - 1.0 - f64::from(py)) * self.diff_y;
        (x, y)
    }

    /// Row of the x axis, if it is on screen.
    pub fn axis_row(&self) -> Option<u32> {
        on_screen(self.row_of(0.0), self.height)
    }

    /// Column of the y axis, if it is on screen.
    pub fn axis_column(&self) -> Option<u32> {
        on_screen(self.column_of(0.0), self.width)
    }

    /// Visible world x interval.
    pub fn x_range(&self) -> (f64, f64) {
        (self.base_x, self.base_x + f64::from(self.width) * self.diff_x)
    }

    /// Visible world y interval.
    pub fn y_range(&self) -> (f64, f64) {
        (self.base_y, self.base_y + f64::from(self.height) * self.diff_y)
    }

    /// Change the screen size, keeping the scale and the bottom-left corner.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Apply one navigation step.
    ///
    /// Scaling keeps the bottom-left corner fixed.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::ZoomOut => {
                self.diff_x *= ZOOM;
                self.diff_y *= ZOOM;
            }
            Command::ZoomIn => {
                self.diff_x /= ZOOM;
                self.diff_y /= ZOOM;
            }
            Command::StretchY => self.diff_y /= ZOOM,
            Command::ShrinkY => self.diff_y *= ZOOM,
            Command::StretchX => self.diff_x /= ZOOM,
            Command::ShrinkX => self.diff_x *= ZOOM,
            Command::Pan(Direction::Up) => self.base_y += PAN_PIXELS * self.diff_y,
            Command::Pan(Direction::Down) => self.base_y -= PAN_PIXELS * self.diff_y,
            Command::Pan(Direction::Left) => self.base_x -= PAN_PIXELS * self.diff_x,
            Command::Pan(Direction::Right) => self.base_x += PAN_PIXELS * self.diff_x,
            Command::Wheel(delta) => {
                let factor = 1.0 + delta.abs() / WHEEL_DIVISOR;
                if delta > 0.0 {
                    self.diff_x /= factor;
                    self.diff_y /= factor;
                } else if delta < 0.0 {
                    self.diff_x *= factor;
                    self.diff_y *= factor;
                }
            }
            Command::Drag { from, to } => {
                self.base_x -= (f64::from(to.0) - f64::from(from.0)) * self.diff_x;
                self.base_y += (f64::from(to.1) - f64::from(from.1)) * self.diff_y;
            }
        }
    }
}

fn check_range(axis: char, min: f64, max: f64) -> Result<(), ViewportError> {
    if min.is_finite() && max.is_finite() && max > min {
        Ok(())
    } else {
        Err(ViewportError::EmptyRange { axis, min, max })
    }
}

fn on_screen(position: i64, extent: u32) -> Option<u32> {
    u32::try_from(position).ok().filter(|&p| p < extent)
}
