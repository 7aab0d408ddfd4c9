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

//! Core data model for benchart: chart configurations, series, computed
//! series statistics, the fixed color palette, and the error taxonomy shared
//! by the transform pipeline.
//!
//! This crate performs no I/O and holds no state beyond the immutable
//! palette constant. Rendering, storage and URL encoding live in separate
//! layers that consume these types.

pub mod colors;
pub mod config;
pub mod error;
pub mod stats;

pub use colors::{next_available_color, COLORS};
pub use config::{
    parameter_string, ConfigKind, ConfigType, Configuration, ParameterMap, Series, SeriesData,
    SortOrder,
};
pub use error::{BenchartError, Result};
pub use stats::{calculate_stats, Statistics};
