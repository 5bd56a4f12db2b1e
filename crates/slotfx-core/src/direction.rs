//! Frequency-shifter direction enumeration.
//!
//! The render path only ever sees one of three directions. The native
//! protocol transports them as integer codes and rejects anything it does not
//! recognise; the legacy protocol's lenient mapping lives in
//! [`convert`](crate::convert).

use core::fmt;

/// Native protocol code for [`Direction::Down`].
pub const NATIVE_DIRECTION_DOWN: i32 = 0;
/// Native protocol code for [`Direction::Up`].
pub const NATIVE_DIRECTION_UP: i32 = 1;
/// Native protocol code for [`Direction::Off`].
pub const NATIVE_DIRECTION_OFF: i32 = 2;

/// Shift direction for one channel of the frequency shifter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Shift the spectrum downwards.
    #[default]
    Down,
    /// Pass the channel through unshifted.
    Off,
    /// Shift the spectrum upwards.
    Up,
}

impl Direction {
    /// All directions in declaration order.
    pub const ALL: [Direction; 3] = [Direction::Down, Direction::Off, Direction::Up];

    /// Strict conversion from a native protocol code.
    ///
    /// Returns `None` for any code other than the three known ones.
    ///
    /// ```rust
    /// use slotfx_core::Direction;
    ///
    /// assert_eq!(Direction::from_native_code(1), Some(Direction::Up));
    /// assert_eq!(Direction::from_native_code(999), None);
    /// ```
    pub const fn from_native_code(code: i32) -> Option<Self> {
        match code {
            NATIVE_DIRECTION_DOWN => Some(Direction::Down),
            NATIVE_DIRECTION_UP => Some(Direction::Up),
            NATIVE_DIRECTION_OFF => Some(Direction::Off),
            _ => None,
        }
    }

    /// Native protocol code for this direction.
    pub const fn native_code(self) -> i32 {
        match self {
            Direction::Down => NATIVE_DIRECTION_DOWN,
            Direction::Up => NATIVE_DIRECTION_UP,
            Direction::Off => NATIVE_DIRECTION_OFF,
        }
    }

    /// Lowercase name used in presets and CLI output.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Off => "off",
            Direction::Up => "up",
        }
    }

    /// Parse a lowercase or mixed-case direction name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
