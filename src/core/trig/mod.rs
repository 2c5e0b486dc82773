// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! GTE-style fixed-point trigonometry
//!
//! Angles are `i32` values where one full turn (2π) is `0x1000` units.
//! Results are Q12 fixed point: `4096` represents `1.0`.
//!
//! ```text
//! Angle  | Degrees | rsin
//! -------|---------|-------
//! 0x000  |   0     |     0
//! 0x400  |  90     |  4096
//! 0x800  | 180     |     0
//! 0xC00  | 270     | -4096
//! ```
//!
//! The free functions evaluate against a process-wide default table that is
//! generated once on first use and never mutated, so they may be called from
//! any thread. Use [`SineTable`] directly to evaluate against a legacy table
//! asset instead.
//!
//! # Example
//!
//! ```
//! use psyq_math::core::trig::{rcos, rsin};
//!
//! assert_eq!(rsin(0x400), 4096);
//! assert_eq!(rsin(-0x400), -4096);
//! assert_eq!(rcos(0), 4096);
//! ```

mod table;

#[cfg(test)]
mod tests;

use std::sync::LazyLock;

pub use table::{SineTable, TABLE_BYTES, TABLE_LEN};

/// Fixed-point angle (4096 units per turn)
pub type Angle = i32;

/// One full turn (2π)
pub const ONE_TURN: Angle = 0x1000;

/// Three quarters of a turn (3π/2)
pub const THREE_QUARTER_TURN: Angle = 0xC00;

/// Half a turn (π)
pub const HALF_TURN: Angle = 0x800;

/// Quarter of a turn (π/2)
pub const QUARTER_TURN: Angle = 0x400;

/// Q12 unity, the quarter-wave peak of the generated table
pub const ONE: i32 = 4096;

static DEFAULT_TABLE: LazyLock<SineTable> = LazyLock::new(SineTable::generate);

/// Shared default (generated) sine table
pub fn default_table() -> &'static SineTable {
    &DEFAULT_TABLE
}

/// Fixed-point sine of `angle` using the default table
#[inline]
pub fn rsin(angle: Angle) -> i16 {
    DEFAULT_TABLE.rsin(angle)
}

/// Fixed-point cosine of `angle` using the default table
#[inline]
pub fn rcos(angle: Angle) -> i16 {
    DEFAULT_TABLE.rcos(angle)
}

/// Unsigned sine core using the default table
///
/// Only the low 12 bits of `angle` are used.
#[inline]
pub fn sin_1(angle: Angle) -> i16 {
    DEFAULT_TABLE.sin_1(angle)
}
