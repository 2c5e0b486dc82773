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

//! Core library components
//!
//! This module contains the PSY-Q libgte compatibility kernels:
//! - Trigonometry (quarter-wave sine table, `rsin`/`rcos`)
//! - Square root (`SquareRoot0`/`SquareRoot12`)
//! - Routine registry and dispatch
//! - Configuration

pub mod config;
pub mod error;
pub mod routine;
pub mod sqrt;
pub mod trig;

// Re-export commonly used types
pub use config::MathConfig;
pub use error::{MathError, Result};
pub use routine::{MathLib, PortStatus, Routine};
pub use sqrt::{square_root0, square_root12, SqrtBackend, SqrtKind};
pub use trig::{rcos, rsin, SineTable};
