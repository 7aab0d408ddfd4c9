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

//! The chart data model: configurations, series and computed series data.

use crate::error::{BenchartError, Result};
use crate::stats::Statistics;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameter name → value map for parameterized benchmark series.
///
/// Values keep the JSON type they arrived with (mitata emits numbers,
/// hyperfine emits strings). Key order is preserved because it drives the
/// order of `parameterNames`, generated labels and command templates.
pub type ParameterMap = serde_json::Map<String, serde_json::Value>;

/// Render a parameter value the way it appears in labels and commands:
/// strings unquoted, everything else in JSON notation.
pub fn parameter_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Discriminant of a [`Configuration`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigType {
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "hyperfine")]
    Hyperfine,
    #[serde(rename = "hyperfine-parameter")]
    HyperfineParameter,
    #[serde(rename = "mitata")]
    Mitata,
    #[serde(rename = "mitata-parameter")]
    MitataParameter,
    #[serde(rename = "list")]
    List,
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Standard => "standard",
            Self::Hyperfine => "hyperfine",
            Self::HyperfineParameter => "hyperfine-parameter",
            Self::Mitata => "mitata",
            Self::MitataParameter => "mitata-parameter",
            Self::List => "list",
        };
        write!(f, "{}", name)
    }
}

/// Sort hint for label-keyed configurations, detected from the labels
/// themselves (version strings sort as semver, dates as datetime).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Default,
    Semver,
    Data,
    Datetime,
}

/// One named line/group within a configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Unique within the configuration; never reused after removal.
    pub id: i64,
    /// Back-reference to the owning configuration.
    pub config_id: i64,
    /// Display label, user-editable.
    pub label: String,
    /// Hex color from the fixed palette.
    pub color: String,
    /// Literal shell invocation that produced this series, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Parameter assignments, present only on parameterized series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ParameterMap>,
}

/// Computed statistics for one series, or one labeled row of a per-label
/// time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesData {
    /// Identity within the data array. Mirrors the series id for
    /// single-metric series; for labeled rows it is a running index.
    pub id: i64,
    /// Foreign key into [`Series::id`].
    pub series_id: i64,
    /// Raw samples plus derived statistics.
    #[serde(flatten)]
    pub stats: Statistics,
    /// Row label (a date, version, ...) for per-label data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Variant-specific payload of a [`Configuration`], keyed by `type` on the
/// wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ConfigKind {
    /// Generic series.
    #[serde(rename = "standard")]
    Standard {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sort: Option<SortOrder>,
    },
    /// Plain hyperfine benchmark output.
    #[serde(rename = "hyperfine")]
    Hyperfine,
    /// Hyperfine output with `--parameter-list` style parameters.
    #[serde(rename = "hyperfine-parameter")]
    HyperfineParameter {
        #[serde(rename = "parameterNames")]
        parameter_names: Vec<String>,
        /// Command template with `{name}` placeholders.
        command: String,
    },
    /// Plain mitata benchmark output.
    #[serde(rename = "mitata")]
    Mitata,
    /// Mitata multi-args output.
    #[serde(rename = "mitata-parameter")]
    MitataParameter {
        #[serde(rename = "parameterNames")]
        parameter_names: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        command: Option<String>,
    },
    /// Ordered/sorted label-value pairs.
    #[serde(rename = "list")]
    List {
        sort: SortOrder,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        command: Option<String>,
    },
}

impl ConfigKind {
    /// The discriminant of this payload.
    pub fn config_type(&self) -> ConfigType {
        match self {
            Self::Standard { .. } => ConfigType::Standard,
            Self::Hyperfine => ConfigType::Hyperfine,
            Self::HyperfineParameter { .. } => ConfigType::HyperfineParameter,
            Self::Mitata => ConfigType::Mitata,
            Self::MitataParameter { .. } => ConfigType::MitataParameter,
            Self::List { .. } => ConfigType::List,
        }
    }
}

/// The persisted description of one chart's dataset and display metadata.
///
/// A configuration owns its series list; [`SeriesData`] lives alongside it
/// in storage, keyed by the same id. The `kind` discriminant is immutable
/// once set: appending new input to an existing configuration never changes
/// its variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Caller-supplied numeric id; `-1` conventionally means "unsaved".
    pub id: i64,
    /// Human title, auto-generated with a timestamp on creation.
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_y: Option<String>,
    pub series: Vec<Series>,
    #[serde(flatten)]
    pub kind: ConfigKind,
}

impl Configuration {
    /// The discriminant of this configuration.
    pub fn config_type(&self) -> ConfigType {
        self.kind.config_type()
    }

    /// The next unused series id: one past the largest id ever assigned, so
    /// ids are never reused within a session even after removals.
    pub fn next_series_id(&self) -> i64 {
        self.series.iter().map(|s| s.id + 1).max().unwrap_or(0)
    }

    /// Find a series by its display label.
    pub fn series_by_label(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.label == label)
    }

    /// Check the variant invariants: parameterized variants must carry a
    /// non-empty `parameterNames` list.
    pub fn validate(&self) -> Result<()> {
        match &self.kind {
            ConfigKind::HyperfineParameter {
                parameter_names, ..
            }
            | ConfigKind::MitataParameter {
                parameter_names, ..
            } if parameter_names.is_empty() => Err(BenchartError::validation(format!(
                "{} configuration requires at least one parameter name",
                self.config_type()
            ))),
            _ => Ok(()),
        }
    }
}
