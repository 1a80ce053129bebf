/* fixtrig | consts.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Fixed-point constants */

/******************************************************************************/

/// One, in the 18-decimal fixed-point representation
pub const SCALE: u128 = 1_000_000_000_000_000_000;

/// π × 10^18, truncated
pub const PI: u128 = 3_141_592_653_589_793_238;

/// 2π × 10^18, one full cycle
pub const TWO_PI: u128 = 2 * PI;

/// π/2 × 10^18, one quarter cycle
pub const PI_OVER_TWO: u128 = PI / 2;

/******************************************************************************/

/// Peak value of the amplitude table, 2^31 - 1
pub const AMPLITUDE: u32 = 0x7FFF_FFFF;

/// Number of cyclic units in a full turn
pub const ANGLES_IN_CYCLE: u32 = 1 << 30;

/******************************************************************************/
