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

//! Math library error types

use thiserror::Error;

use super::routine::Routine;

/// Result type for library operations
pub type Result<T> = std::result::Result<T, MathError>;

/// Main error type for the library
///
/// The numeric kernels never produce one of these; only table loading,
/// configuration and routine dispatch can fail.
#[derive(Error, Debug)]
pub enum MathError {
    #[error("Invalid sine table size: {got} bytes (expected {expected})")]
    InvalidTableSize { expected: usize, got: usize },

    #[error("Invalid sine table: {0}")]
    InvalidTable(String),

    #[error("Unknown routine: {0}")]
    UnknownRoutine(String),

    #[error("Routine {routine} has not been ported")]
    NotPorted { routine: Routine },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
