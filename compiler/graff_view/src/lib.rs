//! Headless plotting state for graff.
//!
//! Everything a window would need to draw a frame, without the window:
//! the [`Viewport`] that maps pixels to world coordinates, the navigation
//! [`Command`]s that move it, a seeded [`Palette`], and [`trace`], which
//! turns a compiled program into screen-space polyline [`Segment`]s.
//! A [`Session`] ties these together for a list of expressions.

mod command;
mod palette;
mod session;
mod trace;
mod viewport;

pub use command::{Command, Direction};
pub use palette::{Palette, Rgb};
pub use session::{Plot, Session, SessionConfig, SessionError};
pub use trace::{trace, Curve, ScreenPoint, Segment};
pub use viewport::{Viewport, ViewportError, PAN_PIXELS, WHEEL_DIVISOR, ZOOM};
