/* fixtrig | cyclic.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* 30-bit cyclic angle domain */

/******************************************************************************/

use crate::consts::{ANGLES_IN_CYCLE, TWO_PI};

/// Width of the table index field
const INDEX_WIDTH: u32 = 8;
/// Width of the interpolation field
pub(crate) const INTERP_WIDTH: u32 = 16;
/// Position of the table index field, right below the quadrant bits
const INDEX_OFFSET: u32 = 28 - INDEX_WIDTH;
/// Position of the interpolation field, right below the table index
const INTERP_OFFSET: u32 = INDEX_OFFSET - INTERP_WIDTH;

const QUADRANT_HIGH_MASK: u32 = 1 << 29;
const QUADRANT_LOW_MASK: u32 = 1 << 28;

/******************************************************************************/

/// An angle in the cyclic domain, where a full turn is 2^30 units
///
/// Bit layout:
/// ```text
///  29 28 | 27 ... 20 | 19 ... 4 | 3 .. 0
/// quadrant|   index   |  interp  | unused
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CyclicAngle(u32);

/// One of the four quarter cycles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Quadrant {
    /// [0, π/2)
    First,
    /// [π/2, π)
    Second,
    /// [π, 3π/2)
    Third,
    /// [3π/2, 2π)
    Fourth
}

impl Quadrant {
    /// Whether the sine rises away from zero in this quadrant
    ///
    /// The table is read in ascending order for the first and third quadrants,
    /// and mirrored for the other two.
    pub const fn is_ascending(self) -> bool {
        matches!(self, Quadrant::First | Quadrant::Third)
    }

    /// Whether the sine is negative in this quadrant
    pub const fn is_negative(self) -> bool {
        matches!(self, Quadrant::Third | Quadrant::Fourth)
    }
}

impl CyclicAngle {
    /// Normalizes a fixed-point angle (radians × 10^18) into the cyclic domain
    ///
    /// Any input is accepted: the angle is first reduced modulo 2π, then
    /// rescaled with a floor division.
    /// ```
    /// use fixtrig::{consts::PI, cyclic::CyclicAngle};
    ///
    /// assert_eq!(CyclicAngle::from_fixed(PI).raw(), 1 << 29);
    /// ```
    pub const fn from_fixed(angle: u128) -> Self {
        // (2^30 * (TWO_PI - 1)) < 2^93, no overflow possible
        let cyclic = (ANGLES_IN_CYCLE as u128 * (angle % TWO_PI)) / TWO_PI;
        Self(cyclic as u32)
    }

    /// Builds a cyclic angle from raw units, wrapping at a full turn
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw & (ANGLES_IN_CYCLE - 1))
    }

    /// Raw value, in [0, 2^30)
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Quarter cycle this angle falls in
    pub const fn quadrant(self) -> Quadrant {
        match (self.0 & QUADRANT_HIGH_MASK != 0, self.0 & QUADRANT_LOW_MASK != 0) {
            (false, false) => Quadrant::First,
            (false, true) => Quadrant::Second,
            (true, false) => Quadrant::Third,
            (true, true) => Quadrant::Fourth
        }
    }

    /// Table index within the quarter cycle, before mirroring
    pub const fn index(self) -> u8 {
        ((self.0 >> INDEX_OFFSET) & ((1 << INDEX_WIDTH) - 1)) as u8
    }

    /// Position between two table entries, as a fraction of 2^16
    pub const fn interp(self) -> u16 {
        ((self.0 >> INTERP_OFFSET) & ((1 << INTERP_WIDTH) - 1)) as u16
    }
}

/******************************************************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{PI, PI_OVER_TWO};

    #[test]
    fn test_quadrant_boundaries() {
        assert_eq!(CyclicAngle::from_fixed(0).raw(), 0);
        assert_eq!(CyclicAngle::from_fixed(PI_OVER_TWO).raw(), 1 << 28);
        assert_eq!(CyclicAngle::from_fixed(PI).raw(), 1 << 29);
        assert_eq!(CyclicAngle::from_fixed(3 * PI_OVER_TWO).raw(), 3 << 28);
        assert_eq!(CyclicAngle::from_fixed(TWO_PI).raw(), 0);
    }

    #[test]
    fn test_quadrants() {
        assert_eq!(CyclicAngle::from_fixed(1).quadrant(), Quadrant::First);
        assert_eq!(CyclicAngle::from_fixed(PI_OVER_TWO).quadrant(), Quadrant::Second);
        assert_eq!(CyclicAngle::from_fixed(PI).quadrant(), Quadrant::Third);
        assert_eq!(CyclicAngle::from_fixed(TWO_PI - 1).quadrant(), Quadrant::Fourth);
        assert!(Quadrant::First.is_ascending() && !Quadrant::First.is_negative());
        assert!(!Quadrant::Second.is_ascending() && !Quadrant::Second.is_negative());
        assert!(Quadrant::Third.is_ascending() && Quadrant::Third.is_negative());
        assert!(!Quadrant::Fourth.is_ascending() && Quadrant::Fourth.is_negative());
    }

    #[test]
    fn test_fields() {
        let angle = CyclicAngle::from_raw(0b11_1010_0101_1100_0011_1010_0101_0110);
        assert_eq!(angle.quadrant(), Quadrant::Fourth);
        assert_eq!(angle.index(), 0b1010_0101);
        assert_eq!(angle.interp(), 0b1100_0011_1010_0101);
    }

    #[test]
    fn test_from_raw_wraps() {
        assert_eq!(CyclicAngle::from_raw(ANGLES_IN_CYCLE).raw(), 0);
        assert_eq!(CyclicAngle::from_raw(u32::MAX).raw(), ANGLES_IN_CYCLE - 1);
    }

    #[test]
    fn test_one_radian() {
        // floor(2^30 / 2π)
        assert_eq!(CyclicAngle::from_fixed(1_000_000_000_000_000_000).raw(), 170_891_318);
    }

    #[test]
    fn test_max_input() {
        let angle = CyclicAngle::from_fixed(u128::MAX);
        assert!(angle.raw() < ANGLES_IN_CYCLE);
    }
}
