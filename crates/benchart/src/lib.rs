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

//! # Benchart
//!
//! Benchart ingests unstructured benchmark output (hyperfine or mitata
//! JSON, pasted numeric text, labeled rows or columns) and converts it
//! deterministically into a normalized data model: a [`Configuration`]
//! describing the chart plus one [`SeriesData`] per series with computed
//! statistics.
//!
//! ## Quick Start
//!
//! ```
//! use benchart::{transform, TransformOptions};
//!
//! // Paste-style numeric input: one number per line is one series.
//! let output = transform("1\n2\n3", TransformOptions::default()).unwrap();
//! let config = output.config.expect("shape recognized");
//! assert_eq!(config.series[0].label, "Series 1");
//! assert_eq!(output.data[0].stats.mean, 2.0);
//!
//! // Unrecognized input is a no-match result, never an error.
//! let output = transform("{not json", TransformOptions::default()).unwrap();
//! assert!(output.is_no_match());
//! ```
//!
//! ## Appending
//!
//! Passing the configuration and data from a previous call back in via
//! [`TransformOptions::append_to`] merges the new input instead of creating
//! a new configuration: label-keyed shapes accumulate samples into the
//! matching series, positional shapes append fresh series after the
//! existing ones.
//!
//! ## Modules
//!
//! - [`benchart_core`]: data model, statistics, palette, errors
//! - [`benchart_transform`]: sniffers, shape transformers, the dispatcher
//!   and the hyperfine command generator

pub use benchart_core::{
    calculate_stats, next_available_color, parameter_string, BenchartError, ConfigKind,
    ConfigType, Configuration, ParameterMap, Result, Series, SeriesData, SortOrder, Statistics,
    COLORS,
};
pub use benchart_transform::{
    generate_command, transform, InitialConfig, TransformInput, TransformOptions, TransformOutput,
};

/// Shape sniffing predicates and text parsers.
pub mod sniff {
    pub use benchart_transform::sniff::{
        is_hyperfine_json, is_label_value_tuple, is_labeled_columns_raw_data, is_labeled_raw_data,
        is_mitata_json, is_raw_numeric_data, parse_labeled_column_values, parse_labeled_values,
        parse_raw_values,
    };
}
