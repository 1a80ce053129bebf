/* fixtrig | lib.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Integer-only sine and cosine using a cyclic lookup table */

/******************************************************************************/

#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/******************************************************************************/

/// Fixed-point angle and amplitude constants
pub mod consts;
/// The 30-bit cyclic angle domain
pub mod cyclic;
/// Build-time generated quarter period table
pub mod table;

use consts::{AMPLITUDE, PI_OVER_TWO, SCALE, TWO_PI};
use cyclic::{CyclicAngle, INTERP_WIDTH};

/******************************************************************************/

/// Signed sine of a cyclic angle, in table units
///
/// The result lies in `[-(2^31 - 1), 2^31 - 1]`. The quarter period table is
/// read forward in the first and third quadrants and mirrored in the others,
/// then the two adjacent samples are linearly interpolated.
/// ```
/// use fixtrig::{amplitude, cyclic::CyclicAngle};
///
/// assert_eq!(amplitude(CyclicAngle::from_raw(1 << 28)), i32::MAX);
/// assert_eq!(amplitude(CyclicAngle::from_raw(3 << 28)), -i32::MAX);
/// ```
pub const fn amplitude(angle: CyclicAngle) -> i32 {
    let quadrant = angle.quadrant();
    let ascending = quadrant.is_ascending();

    let mut index = angle.index();
    if !ascending {
        index = u8::MAX - index;
    }

    // x2 >= x1 everywhere on the quarter period
    let (x1, x2) = table::pair(index);
    let delta = (((x2 - x1) as u64 * angle.interp() as u64) >> INTERP_WIDTH) as u32;

    // Mirrored quadrants slope downwards, so interpolate from the upper sample
    let sine = (if ascending { x1 + delta } else { x2 - delta }) as i32;

    if quadrant.is_negative() {
        -sine
    } else {
        sine
    }
}

/// Sine of a fixed-point angle
///
/// `angle` is in radians × 10^18 and may take any value, the result is in
/// `[-10^18, 10^18]` with the same scale.
/// ```
/// use fixtrig::consts::{PI, PI_OVER_TWO, SCALE};
///
/// assert_eq!(fixtrig::sin(0), 0);
/// assert_eq!(fixtrig::sin(PI_OVER_TWO), SCALE as i128);
/// assert_eq!(fixtrig::sin(PI), 0);
/// ```
pub const fn sin(angle: u128) -> i128 {
    let sine = amplitude(CyclicAngle::from_fixed(angle));
    // |sine| * 10^18 < 2^92
    sine as i128 * SCALE as i128 / AMPLITUDE as i128
}

/// Cosine of a fixed-point angle
///
/// Computed as the sine shifted by a quarter cycle. The angle is reduced to
/// one cycle before the shift, so the sum never overflows.
/// ```
/// use fixtrig::consts::{PI, SCALE};
///
/// assert_eq!(fixtrig::cos(0), SCALE as i128);
/// assert_eq!(fixtrig::cos(PI), -(SCALE as i128));
/// ```
pub const fn cos(angle: u128) -> i128 {
    sin(angle % TWO_PI + PI_OVER_TWO)
}

/// Sine and cosine of a fixed-point angle, as a `(sin, cos)` tuple
pub const fn sin_cos(angle: u128) -> (i128, i128) {
    (sin(angle), cos(angle))
}

/******************************************************************************/
