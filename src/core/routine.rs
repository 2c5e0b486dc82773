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

//! Library routine registry and dispatch
//!
//! Maps PSY-Q libgte symbol names onto the kernels in this crate. Routines
//! whose original object code was never decompiled stay in the registry as
//! explicit [`PortStatus::Unported`] markers: calling one fails fast with
//! [`MathError::NotPorted`] instead of guessing at its numeric behavior.
//!
//! ```text
//! Symbol       | Status   | Kernel
//! -------------|----------|------------------------------
//! rsin         | ported   | SineTable::rsin
//! rcos         | ported   | SineTable::rcos
//! SquareRoot0  | ported   | SqrtBackend::sqrt0
//! SquareRoot12 | ported   | SqrtBackend::sqrt12
//! ratan2       | unported | -
//! csqrt        | unported | -
//! ```
//!
//! # Example
//!
//! ```
//! use psyq_math::core::routine::{MathLib, Routine};
//!
//! let lib = MathLib::new();
//! assert_eq!(lib.call(Routine::Rsin, 0x400).unwrap(), 4096);
//! assert!(lib.call(Routine::Ratan2, 0).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::error::{MathError, Result};
use crate::core::sqrt::SqrtKind;
use crate::core::trig::SineTable;

/// Port status of a library routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PortStatus {
    /// Implemented in this crate
    Ported,
    /// Assembly stub in the source library, not reimplemented
    Unported,
}

/// Known libgte routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Routine {
    Rsin,
    Rcos,
    SquareRoot0,
    SquareRoot12,
    Ratan2,
    Csqrt,
}

impl Routine {
    /// Every routine in the registry
    pub const ALL: [Routine; 6] = [
        Routine::Rsin,
        Routine::Rcos,
        Routine::SquareRoot0,
        Routine::SquareRoot12,
        Routine::Ratan2,
        Routine::Csqrt,
    ];

    /// Library symbol name
    pub fn name(self) -> &'static str {
        match self {
            Routine::Rsin => "rsin",
            Routine::Rcos => "rcos",
            Routine::SquareRoot0 => "SquareRoot0",
            Routine::SquareRoot12 => "SquareRoot12",
            Routine::Ratan2 => "ratan2",
            Routine::Csqrt => "csqrt",
        }
    }

    /// Look up a routine by its exact symbol name
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|routine| routine.name() == name)
            .ok_or_else(|| MathError::UnknownRoutine(name.to_string()))
    }

    pub fn status(self) -> PortStatus {
        match self {
            Routine::Rsin | Routine::Rcos | Routine::SquareRoot0 | Routine::SquareRoot12 => {
                PortStatus::Ported
            }
            Routine::Ratan2 | Routine::Csqrt => PortStatus::Unported,
        }
    }
}

impl fmt::Display for Routine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Routine {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// Dispatch facade over a sine table and a sqrt backend
///
/// Owns its configuration explicitly; there is no hidden global state.
#[derive(Debug, Clone)]
pub struct MathLib {
    table: SineTable,
    sqrt: SqrtKind,
}

impl MathLib {
    /// Generated sine table, float sqrt backend
    pub fn new() -> Self {
        Self::with_parts(SineTable::generate(), SqrtKind::default())
    }

    pub fn with_parts(table: SineTable, sqrt: SqrtKind) -> Self {
        Self { table, sqrt }
    }

    pub fn table(&self) -> &SineTable {
        &self.table
    }

    pub fn sqrt_kind(&self) -> SqrtKind {
        self.sqrt
    }

    /// Evaluate `routine` on `arg`
    ///
    /// Returns [`MathError::NotPorted`] for unported routines.
    pub fn call(&self, routine: Routine, arg: i32) -> Result<i32> {
        let backend = self.sqrt.backend();

        let value = match routine {
            Routine::Rsin => self.table.rsin(arg) as i32,
            Routine::Rcos => self.table.rcos(arg) as i32,
            Routine::SquareRoot0 => backend.sqrt0(arg),
            Routine::SquareRoot12 => backend.sqrt12(arg),
            Routine::Ratan2 | Routine::Csqrt => {
                return Err(MathError::NotPorted { routine });
            }
        };

        log::trace!("{}({}) = {}", routine, arg, value);
        Ok(value)
    }

    /// Evaluate a routine looked up by symbol name
    pub fn call_by_name(&self, name: &str, arg: i32) -> Result<i32> {
        self.call(Routine::from_name(name)?, arg)
    }
}

impl Default for MathLib {
    fn default() -> Self {
        Self::new()
    }
}
