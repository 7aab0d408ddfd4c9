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

//! Shape sniffing and transformation of raw benchmark output into the
//! benchart data model.
//!
//! The single public entry point is [`transform`]: it recognizes a fixed,
//! small set of shapes (hyperfine JSON, mitata JSON, label-value tuple
//! arrays, flat and nested numeric arrays, and three textual layouts) and
//! either creates a new [`benchart_core::Configuration`] or merges the new
//! samples into an existing one. Unrecognized input yields the no-match
//! result rather than an error.
//!
//! # Examples
//!
//! ```
//! use benchart_transform::{transform, TransformOptions};
//!
//! let output = transform("1 2 3\n4 5 6", TransformOptions::default()).unwrap();
//! let config = output.config.unwrap();
//! assert_eq!(config.series.len(), 2);
//! assert_eq!(output.data[0].stats.mean, 2.0);
//! ```

pub mod command;
pub mod hyperfine;
pub mod mitata;
pub mod sniff;
pub mod standard;
mod transform;

pub use command::generate_command;
pub use hyperfine::transform_hyperfine_data;
pub use mitata::transform_mitata_data;
pub use standard::{
    detect_sort_order, transform_data, transform_labeled_columns_data, transform_labeled_data,
    transform_raw_data,
};
pub use transform::{transform, InitialConfig, TransformInput, TransformOptions, TransformOutput};

/// Title for a freshly created configuration: kind plus a local `M/D H:MM`
/// timestamp (month/day unpadded, minute zero-padded).
pub(crate) fn timestamp_title(prefix: &str) -> String {
    let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
    format!(
        "{} ({}/{} {}:{:02})",
        prefix,
        u8::from(now.month()),
        now.day(),
        now.hour(),
        now.minute()
    )
}
