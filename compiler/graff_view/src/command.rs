//! Navigation commands.

use std::fmt;

/// Pan direction, in screen terms.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One navigation step applied to a [`Viewport`](crate::Viewport).
///
/// Keyboard bindings: `q`/`e` zoom out/in, `w`/`a`/`s`/`d` pan. The arrow
/// keys stretch and shrink a single axis and have no letter binding.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    /// Scale both axes out by [`ZOOM`](crate::ZOOM).
    ZoomOut,
    /// Scale both axes in by [`ZOOM`](crate::ZOOM).
    ZoomIn,
    /// Up arrow: magnify the y axis.
    StretchY,
    /// Down arrow.
    ShrinkY,
    /// Right arrow: magnify the x axis.
    StretchX,
    /// Left arrow.
    ShrinkX,
    /// Shift the view by [`PAN_PIXELS`](crate::PAN_PIXELS).
    Pan(Direction),
    /// Mouse wheel, precise vertical delta. Positive zooms in.
    Wheel(f64),
    /// Mouse drag between two pixel positions; the world point under the
    /// cursor follows it.
    Drag { from: (i32, i32), to: (i32, i32) },
}

impl Command {
    /// Map a letter key to its command.
    pub fn from_key(key: char) -> Option<Command> {
        let command = match key {
            'q' => Command::ZoomOut,
            'e' => Command::ZoomIn,
            'w' => Command::Pan(Direction::Up),
            'a' => Command::Pan(Direction::Left),
            's' => Command::Pan(Direction::Down),
            'd' => Command::Pan(Direction::Right),
            _ => return None,
        };
        Some(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::ZoomOut => f.write_str("zoom out"),
            Command::ZoomIn => f.write_str("zoom in"),
            Command::StretchY => f.write_str("stretch y"),
            Command::ShrinkY => f.write_str("shrink y"),
            Command::StretchX => f.write_str("stretch x"),
            Command::ShrinkX => f.write_str("shrink x"),
            Command::Pan(direction) => write!(f, "pan {direction:?}"),
            Command::Wheel(delta) => write!(f, "wheel {delta}"),
            Command::Drag { from, to } => {
                write!(f, "drag ({}, {}) -> ({}, {})", from.0, from.1, to.0, to.1)
            }
        }
    }
}
