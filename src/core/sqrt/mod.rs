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

//! Fixed-point square root (`SquareRoot0` / `SquareRoot12`)
//!
//! The library exposes two entry points:
//! - `SquareRoot0(a)`: integer square root of a plain integer, truncated
//! - `SquareRoot12(a)`: square root of a Q12 value, `trunc(sqrt(a) * 64)`
//!
//! Because `sqrt(a * 2^12) = sqrt(a) * 2^6`, `SquareRoot12` maps a Q12 input
//! back onto Q12: `SquareRoot12(4096) == 4096` (√1.0 = 1.0).
//!
//! Negative input is not an error. It logs a single warning naming the
//! routine and the value, then returns 0.
//!
//! Two interchangeable backends are provided:
//!
//! ```text
//! Backend      | Method                              | Use
//! -------------|-------------------------------------|--------------------
//! FloatSqrt    | f64::sqrt, truncated toward zero    | default
//! IntegerSqrt  | digit-by-digit integer square root  | no-FPU / reference
//! ```
//!
//! For every non-negative `i32` the two backends return identical results.
//!
//! # Example
//!
//! ```
//! use psyq_math::core::sqrt::{square_root0, square_root12};
//!
//! assert_eq!(square_root0(16), 4);
//! assert_eq!(square_root0(15), 3);
//! assert_eq!(square_root12(4096), 4096);
//! assert_eq!(square_root0(-1), 0);
//! ```

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::MathError;

/// Q12 -> Q12 rescale factor applied after the square root (2^6)
const Q12_ROOT_SCALE: f64 = 64.0;

/// Fractional bits of a Q12 value
const Q12_SHIFT: u32 = 12;

/// Square root implementation
///
/// Implementors only handle the non-negative domain; the provided
/// `sqrt0`/`sqrt12` methods apply the shared negative-input policy.
pub trait SqrtBackend: Send + Sync {
    /// Short backend name (for logging and configuration)
    fn name(&self) -> &'static str;

    /// `trunc(sqrt(a))` for non-negative `a`
    fn root0(&self, a: u32) -> i32;

    /// `trunc(sqrt(a) * 64)` for non-negative Q12 `a`
    fn root12(&self, a: u32) -> i32;

    /// `SquareRoot0`: integer square root, 0 for negative input
    fn sqrt0(&self, a: i32) -> i32 {
        match u32::try_from(a) {
            Ok(0) => 0,
            Ok(a) => self.root0(a),
            Err(_) => negative_input("SquareRoot0", a),
        }
    }

    /// `SquareRoot12`: Q12 square root, 0 for negative input
    fn sqrt12(&self, a: i32) -> i32 {
        match u32::try_from(a) {
            Ok(0) => 0,
            Ok(a) => self.root12(a),
            Err(_) => negative_input("SquareRoot12", a),
        }
    }
}

fn negative_input(routine: &str, a: i32) -> i32 {
    log::warn!("{}: negative input {} (returning 0)", routine, a);
    0
}

/// Host floating-point square root
///
/// Replaces the BIOS table/iteration routine with `f64::sqrt`. Every `i32`
/// is exactly representable in `f64`, and the correctly rounded root never
/// crosses an integer boundary, so truncation gives the exact floor.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatSqrt;

impl SqrtBackend for FloatSqrt {
    fn name(&self) -> &'static str {
        "float"
    }

    #[inline]
    fn root0(&self, a: u32) -> i32 {
        (a as f64).sqrt() as i32
    }

    #[inline]
    fn root12(&self, a: u32) -> i32 {
        ((a as f64).sqrt() * Q12_ROOT_SCALE) as i32
    }
}

/// Digit-by-digit integer square root
///
/// No floating point involved. `root12` evaluates `isqrt(a << 12)` in 64-bit
/// arithmetic, which equals `trunc(sqrt(a) * 64)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerSqrt;

impl IntegerSqrt {
    /// Floor of the square root of `n`
    pub fn isqrt(n: u64) -> u64 {
        let mut remainder = n;
        let mut root = 0u64;
        let mut bit = 1u64 << 62;

        while bit > remainder {
            bit >>= 2;
        }

        while bit != 0 {
            if remainder >= root + bit {
                remainder -= root + bit;
                root = (root >> 1) + bit;
            } else {
                root >>= 1;
            }
            bit >>= 2;
        }

        root
    }
}

impl SqrtBackend for IntegerSqrt {
    fn name(&self) -> &'static str {
        "integer"
    }

    #[inline]
    fn root0(&self, a: u32) -> i32 {
        Self::isqrt(a as u64) as i32
    }

    #[inline]
    fn root12(&self, a: u32) -> i32 {
        Self::isqrt((a as u64) << Q12_SHIFT) as i32
    }
}

static FLOAT_SQRT: FloatSqrt = FloatSqrt;
static INTEGER_SQRT: IntegerSqrt = IntegerSqrt;

/// Backend selector (configuration / command line)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqrtKind {
    /// [`FloatSqrt`]
    #[default]
    Float,
    /// [`IntegerSqrt`]
    Integer,
}

impl SqrtKind {
    /// Shared backend instance for this kind
    pub fn backend(self) -> &'static dyn SqrtBackend {
        match self {
            SqrtKind::Float => &FLOAT_SQRT,
            SqrtKind::Integer => &INTEGER_SQRT,
        }
    }
}

impl fmt::Display for SqrtKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.backend().name())
    }
}

impl FromStr for SqrtKind {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "float" => Ok(SqrtKind::Float),
            "integer" => Ok(SqrtKind::Integer),
            other => Err(MathError::Config(format!(
                "Unknown sqrt backend: {} (expected \"float\" or \"integer\")",
                other
            ))),
        }
    }
}

/// `SquareRoot0` using the default (float) backend
#[inline]
pub fn square_root0(a: i32) -> i32 {
    FLOAT_SQRT.sqrt0(a)
}

/// `SquareRoot12` using the default (float) backend
#[inline]
pub fn square_root12(a: i32) -> i32 {
    FLOAT_SQRT.sqrt12(a)
}

/// Alias of [`square_root0`]
#[inline]
pub fn sqrt0(a: i32) -> i32 {
    square_root0(a)
}

/// Alias of [`square_root12`]
#[inline]
pub fn sqrt12(a: i32) -> i32 {
    square_root12(a)
}
