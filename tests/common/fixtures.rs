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

//! Test fixtures for common test scenarios

use psyq_math::core::trig::SineTable;
use std::path::{Path, PathBuf};

/// Write `table` as a legacy asset into `dir` and return its path
#[allow(dead_code)]
pub fn write_table(dir: &Path, name: &str, table: &SineTable) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, table.to_le_bytes()).expect("Failed to write table asset");
    path
}

/// Write a TOML config into `dir` and return its path
#[allow(dead_code)]
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("psyq.toml");
    std::fs::write(&path, contents).expect("Failed to write config");
    path
}

/// Generated table with every sample scaled by `num / den`
#[allow(dead_code)]
pub fn scaled_table(num: i32, den: i32) -> SineTable {
    let bytes: Vec<u8> = SineTable::generate()
        .as_slice()
        .iter()
        .flat_map(|&s| ((s as i32 * num / den) as i16).to_le_bytes())
        .collect();
    SineTable::from_le_bytes(&bytes).expect("Scaled table must stay valid")
}
