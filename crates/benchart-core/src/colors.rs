// Benchart - benchmark data normalization
//
// Copyright (c) 2026 Benchart contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Deterministic series color assignment.

use crate::config::Series;

/// The fixed series palette. Order is a contract: series colors are assigned
/// round-robin by the number of series already present, and wrap after the
/// twelfth entry.
pub const COLORS: [&str; 12] = [
    "#8b5cf6", "#ec4899", "#14b8a6", "#f97316", "#06b6d4", "#84cc16", "#6366f1", "#f43f5e",
    "#10b981", "#3b82f6", "#a855f7", "#eab308",
];

/// Pick the color for the next series added to `existing`.
///
/// ```
/// use benchart_core::next_available_color;
///
/// assert_eq!(next_available_color(&[]), "#8b5cf6");
/// ```
pub fn next_available_color(existing: &[Series]) -> &'static str {
    COLORS[existing.len() % COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(id: i64) -> Series {
        Series {
            id,
            config_id: -1,
            label: format!("Series {}", id + 1),
            color: COLORS[id as usize % COLORS.len()].to_string(),
            command: None,
            parameters: None,
        }
    }

    #[test]
    fn test_first_two_colors() {
        let existing = vec![series(0)];
        assert_eq!(next_available_color(&[]), "#8b5cf6");
        assert_eq!(next_available_color(&existing), "#ec4899");
    }

    #[test]
    fn test_palette_is_pinned() {
        assert_eq!(
            COLORS,
            [
                "#8b5cf6", "#ec4899", "#14b8a6", "#f97316", "#06b6d4", "#84cc16", "#6366f1",
                "#f43f5e", "#10b981", "#3b82f6", "#a855f7", "#eab308",
            ]
        );
    }

    #[test]
    fn test_thirteenth_series_wraps() {
        let existing: Vec<Series> = (0..12).map(series).collect();
        assert_eq!(next_available_color(&existing), "#8b5cf6");
    }
}
