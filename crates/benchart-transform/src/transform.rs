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

//! The `transform` dispatcher: sniff the shape of arbitrary input and
//! delegate to the matching shape transformer.

use crate::sniff;
use crate::{hyperfine, mitata, standard};
use benchart_core::{ConfigType, Configuration, Result, SeriesData};
use serde_json::Value as JsonValue;

/// Raw input to [`transform`]: UTF-8 text or an already-parsed JSON value.
#[derive(Debug, Clone)]
pub enum TransformInput {
    Text(String),
    Json(JsonValue),
}

impl From<&str> for TransformInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TransformInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<JsonValue> for TransformInput {
    fn from(value: JsonValue) -> Self {
        Self::Json(value)
    }
}

/// Labels and colors supplied out-of-band (for example reconstructed from a
/// URL) before any data arrives. Consumed only when a transformer creates a
/// new `standard` or `list` configuration; tool-specific shapes ignore it.
#[derive(Debug, Clone, Default)]
pub struct InitialConfig {
    /// Variant hint; only [`ConfigType::Standard`] and [`ConfigType::List`]
    /// are honored.
    pub config_type: Option<ConfigType>,
    pub label_x: Option<String>,
    pub label_y: Option<String>,
    /// Per-series label overrides, by series position.
    pub labels: Vec<String>,
    /// Per-series color overrides, by series position.
    pub colors: Vec<String>,
    /// Per-series command overrides, by series position.
    pub commands: Vec<String>,
}

/// Options for one [`transform`] call. The default carries the `-1`
/// "unsaved" configuration id and no existing state.
#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// Id assigned to a newly created configuration (`-1` for "unsaved").
    pub config_id: i64,
    /// Explicit series id override for newly created series.
    pub series_id: Option<i64>,
    /// Existing configuration to append to instead of creating a new one.
    pub config: Option<Configuration>,
    /// Existing series data to extend; ignored without `config`.
    pub data: Vec<SeriesData>,
    /// Pre-seeded labels/colors for new `standard`/`list` configurations.
    pub initial: Option<InitialConfig>,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            config_id: -1,
            series_id: None,
            config: None,
            data: Vec::new(),
            initial: None,
        }
    }
}

impl TransformOptions {
    /// Options for creating a new configuration under the given id.
    pub fn with_config_id(config_id: i64) -> Self {
        Self {
            config_id,
            ..Self::default()
        }
    }

    /// Options for appending to an existing configuration and its data.
    pub fn append_to(config: Configuration, data: Vec<SeriesData>) -> Self {
        Self {
            config_id: config.id,
            config: Some(config),
            data,
            ..Self::default()
        }
    }
}

/// Result of one [`transform`] call. `config == None` means no sniffer
/// recognized the input and is always paired with empty `data`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformOutput {
    pub config: Option<Configuration>,
    pub data: Vec<SeriesData>,
}

impl TransformOutput {
    pub(crate) fn no_match() -> Self {
        Self {
            config: None,
            data: Vec::new(),
        }
    }

    /// True when no sniffer recognized the input.
    pub fn is_no_match(&self) -> bool {
        self.config.is_none()
    }
}

/// Convert raw benchmark output into a [`Configuration`] plus computed
/// [`SeriesData`].
///
/// Text input is tried as JSON first; on success the tool-specific shapes
/// (hyperfine, then mitata) are tested before the generic array shapes, and
/// on parse failure the text shapes are tried in order: labeled rows, raw
/// numeric, labeled columns. The first matching shape wins.
///
/// Failure policy: empty input and unrecognized shapes return the no-match
/// result rather than an error, and a shape that matches but fails to
/// transform is logged and downgraded to no-match as well. Only
/// [`benchart_core::BenchartError::Validation`] propagates.
///
/// The call is synchronous and keeps no state between invocations, but it
/// offers no internal locking: callers appending to one shared
/// `Configuration` from several threads must serialize those calls
/// themselves.
pub fn transform(
    input: impl Into<TransformInput>,
    options: TransformOptions,
) -> Result<TransformOutput> {
    let result = match input.into() {
        TransformInput::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(TransformOutput::no_match());
            }
            match serde_json::from_str::<JsonValue>(trimmed) {
                Ok(json) => transform_json(&json, options),
                Err(_) => transform_text(trimmed, options),
            }
        }
        TransformInput::Json(json) => transform_json(&json, options),
    };

    match result {
        Err(err) if !err.is_validation() => {
            tracing::warn!(error = %err, "matched shape failed to transform, treating as no match");
            Ok(TransformOutput::no_match())
        }
        other => other,
    }
}

fn transform_json(json: &JsonValue, options: TransformOptions) -> Result<TransformOutput> {
    if sniff::is_hyperfine_json(json) {
        return hyperfine::transform_hyperfine_data(json, options);
    }
    if sniff::is_mitata_json(json) {
        return mitata::transform_mitata_data(json, options);
    }
    if let Some(items) = json.as_array() {
        if items.is_empty() {
            return Ok(TransformOutput::no_match());
        }
        if items.iter().all(sniff::is_label_value_tuple) {
            let entries = items
                .iter()
                .filter_map(|pair| {
                    let pair = pair.as_array()?;
                    let label = pair[0].as_str()?.to_string();
                    let values = match &pair[1] {
                        JsonValue::Number(n) => vec![n.as_f64()?],
                        other => sniff::as_number_array(other)?,
                    };
                    Some((label, values))
                })
                .collect();
            return standard::transform_labeled_data(entries, options);
        }
        if let Some(values) = sniff::as_number_array(json) {
            return standard::transform_data(vec![values], options);
        }
        if items.iter().all(|v| sniff::as_number_array(v).is_some()) {
            let matrix = items
                .iter()
                .filter_map(sniff::as_number_array)
                .collect();
            return standard::transform_data(matrix, options);
        }
    }
    Ok(TransformOutput::no_match())
}

fn transform_text(input: &str, options: TransformOptions) -> Result<TransformOutput> {
    if sniff::is_labeled_raw_data(input) {
        return standard::transform_labeled_data(sniff::parse_labeled_values(input), options);
    }
    if sniff::is_raw_numeric_data(input) {
        return standard::transform_raw_data(input, options);
    }
    if sniff::is_labeled_columns_raw_data(input) {
        return standard::transform_labeled_columns_data(
            sniff::parse_labeled_column_values(input),
            options,
        );
    }
    Ok(TransformOutput::no_match())
}
