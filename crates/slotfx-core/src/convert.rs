//! Unit conversions between legacy protocol units and engine working units.
//!
//! - [`millibel_to_gain`] - logarithmic level to linear amplitude
//! - [`direction_from_legacy`] - legacy raw direction code to [`Direction`]
//!
//! Both are stateless and allocation-free. Conversion is one-directional for
//! gains: the legacy protocol writes levels, it never reads them back from a
//! converted block.

use libm::powf;

use crate::direction::Direction;

/// Legacy raw code for [`Direction::Down`].
pub const LEGACY_DIRECTION_DOWN: u32 = 0;
/// Legacy raw code for [`Direction::Up`].
pub const LEGACY_DIRECTION_UP: u32 = 1;
/// Legacy raw code for [`Direction::Off`].
pub const LEGACY_DIRECTION_OFF: u32 = 2;

/// Convert hundredths of a decibel to linear gain.
///
/// `linear = 10^(millibels / 2000)`
///
/// ```rust
/// use slotfx_core::millibel_to_gain;
///
/// assert_eq!(millibel_to_gain(0.0), 1.0);
/// assert!((millibel_to_gain(-600.0) - 0.501).abs() < 0.001);
/// assert!((millibel_to_gain(2000.0) - 10.0).abs() < 1e-4);
/// ```
#[inline]
pub fn millibel_to_gain(millibels: f32) -> f32 {
    powf(10.0, millibels / 2000.0)
}

/// Map a legacy raw direction code onto the three-member enumeration.
///
/// Exactly one code means down and exactly one means up; every other code,
/// including ones outside the legacy protocol's declared range, means off.
/// This leniency is deliberate and differs from the native protocol, which
/// rejects unknown codes.
///
/// ```rust
/// use slotfx_core::{Direction, direction_from_legacy};
///
/// assert_eq!(direction_from_legacy(0), Direction::Down);
/// assert_eq!(direction_from_legacy(1), Direction::Up);
/// assert_eq!(direction_from_legacy(999), Direction::Off);
/// ```
#[inline]
pub const fn direction_from_legacy(code: u32) -> Direction {
    match code {
        LEGACY_DIRECTION_DOWN => Direction::Down,
        LEGACY_DIRECTION_UP => Direction::Up,
        _ => Direction::Off,
    }
}

/// Legacy raw code for a direction.
#[inline]
pub const fn direction_to_legacy(direction: Direction) -> u32 {
    match direction {
        Direction::Down => LEGACY_DIRECTION_DOWN,
        Direction::Up => LEGACY_DIRECTION_UP,
        Direction::Off => LEGACY_DIRECTION_OFF,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_millibels_is_unity() {
        assert_eq!(millibel_to_gain(0.0), 1.0);
    }

    #[test]
    fn negative_millibels_attenuate() {
        let g = millibel_to_gain(-1200.0);
        assert!(g > 0.0 && g < 1.0, "got {g}");
        // -12 dB
        assert!((g - 0.2512).abs() < 1e-3, "got {g}");
    }

    #[test]
    fn positive_millibels_boost() {
        let g = millibel_to_gain(1800.0);
        assert!((g - 7.943).abs() < 1e-3, "got {g}");
    }

    #[test]
    fn legacy_floor_sits_just_under_native_floor() {
        // 10^(-0.9); the committer clamps this into the native gain range.
        let g = millibel_to_gain(-1800.0);
        assert!(g < 0.126 && g > 0.1258, "got {g}");
    }

    #[test]
    fn legacy_directions() {
        assert_eq!(direction_from_legacy(LEGACY_DIRECTION_DOWN), Direction::Down);
        assert_eq!(direction_from_legacy(LEGACY_DIRECTION_UP), Direction::Up);
        assert_eq!(direction_from_legacy(LEGACY_DIRECTION_OFF), Direction::Off);
        assert_eq!(direction_from_legacy(3), Direction::Off);
        assert_eq!(direction_from_legacy(u32::MAX), Direction::Off);
    }

    #[test]
    fn legacy_direction_codes_roundtrip() {
        for dir in Direction::ALL {
            assert_eq!(direction_from_legacy(direction_to_legacy(dir)), dir);
        }
    }
}
