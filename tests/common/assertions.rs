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

//! Custom assertions for fixed-point math testing

use psyq_math::core::trig::SineTable;

/// Assert `rsin` on `table` returns `expected` at `angle`
#[allow(dead_code)]
pub fn assert_rsin(table: &SineTable, angle: i32, expected: i16) {
    let actual = table.rsin(angle);
    assert_eq!(
        actual, expected,
        "rsin(0x{:X}) mismatch: expected {}, got {}",
        angle, expected, actual
    );
}

/// Assert the quarter-wave invariants hold for `table`
#[allow(dead_code)]
pub fn assert_quarter_wave(table: &SineTable) {
    let peak = table.peak();
    assert_eq!(table.get(0), 0, "table[0] must be 0");
    assert_rsin(table, 0x000, 0);
    assert_rsin(table, 0x400, peak);
    assert_rsin(table, 0x800, 0);
    assert_rsin(table, 0xC00, -peak);

    for angle in -0x1000..0x1000 {
        assert_eq!(
            table.rsin(angle),
            -table.rsin(-angle),
            "odd symmetry broken at 0x{:X}",
            angle
        );
    }
}
