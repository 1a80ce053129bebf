/* fixtrig | table.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Quarter period amplitude table */

/******************************************************************************/

include!(concat!(env!("OUT_DIR"), "/sine_table.rs"));

/// Number of intervals covered by the table
///
/// The table holds one more entry than this, so that `index + 1` is always readable.
pub const TABLE_SIZE: usize = 256;

/// Reads one sample of the quarter period
///
/// `index` 0 is sin(0) and `index` [`TABLE_SIZE`] is sin(π/2), scaled to
/// [`AMPLITUDE`](crate::consts::AMPLITUDE).
#[inline]
pub const fn sample(index: u8) -> u32 {
    SINE_TABLE[index as usize]
}

/// Reads two adjacent samples, starting at `index`
#[inline]
pub(crate) const fn pair(index: u8) -> (u32, u32) {
    (SINE_TABLE[index as usize], SINE_TABLE[index as usize + 1])
}

/******************************************************************************/
