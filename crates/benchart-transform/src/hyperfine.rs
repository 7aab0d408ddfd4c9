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

//! Transformer for hyperfine's `--export-json` output.
//!
//! Hyperfine ships its own statistics, so they are passed through untouched
//! instead of recomputed from `times`. When every result carries parameters
//! the configuration becomes `hyperfine-parameter` and a command template is
//! derived by replacing the first parameter's value in the first command
//! with a `{name}` placeholder. This is a single-pass string replace, not a
//! template parser; a parameter value that also occurs as a substring of
//! another token is replaced where it first appears.

use crate::timestamp_title;
use crate::transform::{TransformOptions, TransformOutput};
use benchart_core::{
    next_available_color, parameter_string, BenchartError, ConfigKind, Configuration,
    ParameterMap, Result, Series, SeriesData, Statistics,
};
use serde::Deserialize;
use serde_json::Value as JsonValue;

const SHAPE: &str = "hyperfine";

#[derive(Debug, Deserialize)]
struct HyperfineJson {
    results: Vec<HyperfineResult>,
}

/// One benchmarked command from hyperfine's export.
#[derive(Debug, Deserialize)]
struct HyperfineResult {
    command: String,
    mean: f64,
    // Null when hyperfine only ran the command once.
    #[serde(default)]
    stddev: Option<f64>,
    median: f64,
    min: f64,
    max: f64,
    times: Vec<f64>,
    #[serde(default)]
    parameters: Option<ParameterMap>,
}

impl HyperfineResult {
    fn statistics(&self) -> Statistics {
        Statistics {
            values: self.times.clone(),
            mean: self.mean,
            median: self.median,
            stddev: self.stddev.unwrap_or(0.0),
            min: self.min,
            max: self.max,
        }
    }

    fn has_parameters(&self) -> bool {
        self.parameters.as_ref().is_some_and(|p| !p.is_empty())
    }
}

/// Transform hyperfine JSON into a configuration plus series data.
pub fn transform_hyperfine_data(
    json: &JsonValue,
    options: TransformOptions,
) -> Result<TransformOutput> {
    let parsed: HyperfineJson = serde_json::from_value(json.clone())
        .map_err(|e| BenchartError::malformed(SHAPE, e.to_string()))?;
    if parsed.results.is_empty() {
        return Err(BenchartError::malformed(SHAPE, "empty results array"));
    }

    let has_parameters = parsed.results.iter().all(HyperfineResult::has_parameters);
    let first = &parsed.results[0];
    let parameter_name = first
        .parameters
        .as_ref()
        .filter(|_| has_parameters)
        .and_then(|p| p.keys().next().cloned());
    let command_template = parameter_name.as_ref().and_then(|name| {
        let value = first.parameters.as_ref()?.get(name)?;
        Some(
            first
                .command
                .replacen(&parameter_string(value), &format!("{{{}}}", name), 1),
        )
    });

    if let Some(config) = options.config {
        let mut data = options.data;
        for (index, result) in parsed.results.iter().enumerate() {
            let series = config.series.get(index).ok_or_else(|| {
                BenchartError::malformed(
                    SHAPE,
                    format!("existing configuration has no series at position {}", index),
                )
            })?;
            let stats = result.statistics();
            match data.iter_mut().find(|d| d.series_id == series.id) {
                Some(row) => row.stats = stats,
                None => data.push(SeriesData {
                    id: series.id,
                    series_id: series.id,
                    stats,
                    label: None,
                }),
            }
        }
        return Ok(TransformOutput {
            config: Some(config),
            data,
        });
    }

    let mut series: Vec<Series> = Vec::new();
    let mut data: Vec<SeriesData> = Vec::new();
    for result in &parsed.results {
        let id = options.series_id.unwrap_or(series.len() as i64);
        let label = parameter_name
            .as_ref()
            .and_then(|name| result.parameters.as_ref()?.get(name))
            .map(parameter_string)
            .unwrap_or_else(|| format!("Command {}", id + 1));
        series.push(Series {
            id,
            config_id: options.config_id,
            label,
            color: next_available_color(&series).to_string(),
            command: Some(result.command.clone()),
            parameters: result.parameters.clone(),
        });
        data.push(SeriesData {
            id,
            series_id: id,
            stats: result.statistics(),
            label: None,
        });
    }

    let kind = if has_parameters {
        ConfigKind::HyperfineParameter {
            parameter_names: parameter_name.into_iter().collect(),
            command: command_template.unwrap_or_default(),
        }
    } else {
        ConfigKind::Hyperfine
    };
    let config = Configuration {
        id: options.config_id,
        title: timestamp_title("New hyperfine benchmark"),
        label_x: None,
        label_y: None,
        series,
        kind,
    };
    Ok(TransformOutput {
        config: Some(config),
        data,
    })
}
