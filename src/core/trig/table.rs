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

//! Quarter-wave sine table
//!
//! The library stores one quarter period of the sine wave: 1025 samples
//! covering angles `0..=0x400` at Q12 scale. The other three quadrants are
//! reconstructed by folding (see [`SineTable::sin_1`]).
//!
//! Two table sources are supported:
//! - [`SineTable::generate`]: recomputed from `f64::sin`, rounded to nearest
//! - [`SineTable::from_le_bytes`] / [`SineTable::load`]: a legacy table asset
//!   dumped from the original library as 1025 little-endian `i16` values
//!
//! The two are not guaranteed to be bitwise identical. Games whose logic
//! depends on exact `rsin` output should load the legacy asset.

use std::f64::consts::TAU;
use std::path::Path;

use super::{HALF_TURN, ONE, ONE_TURN, QUARTER_TURN, THREE_QUARTER_TURN};
use crate::core::error::{MathError, Result};

/// Number of entries in the quarter-wave table (`0..=0x400`)
pub const TABLE_LEN: usize = QUARTER_TURN as usize + 1;

/// Size in bytes of a serialized table asset
pub const TABLE_BYTES: usize = TABLE_LEN * 2;

/// Immutable quarter-wave sine table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SineTable {
    samples: Box<[i16; TABLE_LEN]>,
}

impl SineTable {
    /// Build the recomputed table: `round(4096 * sin(i * 2π / 4096))`
    ///
    /// # Example
    ///
    /// ```
    /// use psyq_math::core::trig::SineTable;
    ///
    /// let table = SineTable::generate();
    /// assert_eq!(table.get(0), 0);
    /// assert_eq!(table.get(0x400), 4096);
    /// ```
    pub fn generate() -> Self {
        let mut samples = Box::new([0i16; TABLE_LEN]);
        for (i, sample) in samples.iter_mut().enumerate() {
            let radians = i as f64 * TAU / ONE_TURN as f64;
            *sample = (radians.sin() * ONE as f64).round() as i16;
        }

        Self { samples }
    }

    /// Parse a legacy table asset (1025 little-endian `i16` samples)
    ///
    /// The table is validated before use:
    /// - exactly [`TABLE_BYTES`] bytes
    /// - `table[0] == 0`
    /// - samples never decrease across the quarter wave
    /// - `table[0x400]` is a positive peak
    pub fn from_le_bytes(data: &[u8]) -> Result<Self> {
        if data.len() != TABLE_BYTES {
            return Err(MathError::InvalidTableSize {
                expected: TABLE_BYTES,
                got: data.len(),
            });
        }

        let mut samples = Box::new([0i16; TABLE_LEN]);
        for (sample, bytes) in samples.iter_mut().zip(data.chunks_exact(2)) {
            *sample = i16::from_le_bytes([bytes[0], bytes[1]]);
        }

        let table = Self { samples };
        table.validate()?;
        Ok(table)
    }

    /// Load and validate a legacy table asset from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let table = Self::from_le_bytes(&data)?;

        log::debug!(
            "Loaded sine table from {} (peak {})",
            path.display(),
            table.peak()
        );

        Ok(table)
    }

    /// Serialize the table in the legacy asset format
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.samples
            .iter()
            .flat_map(|sample| sample.to_le_bytes())
            .collect()
    }

    /// Quarter-wave peak (`table[0x400]`)
    #[inline(always)]
    pub fn peak(&self) -> i16 {
        self.samples[TABLE_LEN - 1]
    }

    /// Raw sample at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index > 0x400`.
    #[inline(always)]
    pub fn get(&self, index: usize) -> i16 {
        self.samples[index]
    }

    /// All 1025 samples
    pub fn as_slice(&self) -> &[i16] {
        &self.samples[..]
    }

    /// Unsigned core of `rsin`
    ///
    /// Folds a 12-bit angle onto the stored quarter wave:
    ///
    /// ```text
    /// Quadrant | Angle range       | Result
    /// ---------|-------------------|-------------------------
    /// 0        | [0x000, 0x400]    |  table[a]
    /// 1        | (0x400, 0x800]    |  table[0x800 - a]
    /// 2        | (0x800, 0xC00]    | -table[a - 0x800]
    /// 3        | (0xC00, 0x1000)   | -table[0x1000 - a]
    /// ```
    ///
    /// Only the low 12 bits of `angle` are used.
    #[inline]
    pub fn sin_1(&self, angle: i32) -> i16 {
        let a = angle & (ONE_TURN - 1);

        if a <= QUARTER_TURN {
            self.samples[a as usize]
        } else if a <= HALF_TURN {
            self.samples[(HALF_TURN - a) as usize]
        } else if a <= THREE_QUARTER_TURN {
            self.samples[(a - HALF_TURN) as usize].wrapping_neg()
        } else {
            self.samples[(ONE_TURN - a) as usize].wrapping_neg()
        }
    }

    /// Fixed-point sine of `angle` (4096 units per turn)
    ///
    /// Negative angles use odd symmetry: the magnitude is folded and the
    /// result negated. Any `i32` is accepted; out-of-range angles wrap.
    #[inline]
    pub fn rsin(&self, angle: i32) -> i16 {
        if angle < 0 {
            // i32::MIN negates to itself, which masks to 0
            self.sin_1(angle.wrapping_neg() & (ONE_TURN - 1))
                .wrapping_neg()
        } else {
            self.sin_1(angle & (ONE_TURN - 1))
        }
    }

    /// Fixed-point cosine of `angle` (4096 units per turn)
    ///
    /// Cosine is even, so the sign of `angle` is dropped before shifting by
    /// a quarter turn onto the sine table.
    #[inline]
    pub fn rcos(&self, angle: i32) -> i16 {
        let a = angle.wrapping_abs() & (ONE_TURN - 1);
        self.sin_1((a + QUARTER_TURN) & (ONE_TURN - 1))
    }

    fn validate(&self) -> Result<()> {
        if self.samples[0] != 0 {
            return Err(MathError::InvalidTable(format!(
                "table[0] must be 0, found {}",
                self.samples[0]
            )));
        }

        if self.peak() <= 0 {
            return Err(MathError::InvalidTable(format!(
                "peak table[0x400] must be positive, found {}",
                self.peak()
            )));
        }

        if let Some(index) = self.samples.windows(2).position(|w| w[1] < w[0]) {
            return Err(MathError::InvalidTable(format!(
                "samples decrease at index 0x{:03X} ({} -> {})",
                index + 1,
                self.samples[index],
                self.samples[index + 1]
            )));
        }

        Ok(())
    }
}

impl Default for SineTable {
    fn default() -> Self {
        Self::generate()
    }
}
