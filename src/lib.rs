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

//! PSY-Q libgte fixed-point math kernels
//!
//! This library reimplements the numeric core of the PlayStation PSY-Q
//! system libraries: the quarter-wave sine table lookup (`rsin`/`rcos`) and
//! the square root routines (`SquareRoot0`/`SquareRoot12`). All kernels are
//! pure functions over `i32` inputs and may be called from any thread.
//!
//! # Example
//!
//! ```
//! use psyq_math::core::sqrt::{square_root0, square_root12};
//! use psyq_math::core::trig::rsin;
//!
//! assert_eq!(rsin(0x400), 4096);
//! assert_eq!(square_root0(15), 3);
//! assert_eq!(square_root12(4096), 4096);
//! ```

pub mod core;
