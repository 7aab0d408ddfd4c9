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

//! Transformer for mitata's JSON output.
//!
//! Two sub-shapes: a `multi-args` first benchmark is parameterized and each
//! of its runs becomes one series keyed by its `args`; otherwise each
//! benchmark becomes one series from its first run. Samples are nanosecond
//! timestamps when the first sample is integral and are converted to
//! seconds before statistics are computed; fractional first samples are
//! assumed to already be seconds.

use crate::standard::stats_for;
use crate::timestamp_title;
use crate::transform::{TransformOptions, TransformOutput};
use benchart_core::{
    next_available_color, parameter_string, BenchartError, ConfigKind, Configuration,
    ParameterMap, Result, Series, SeriesData, Statistics,
};
use serde::Deserialize;
use serde_json::Value as JsonValue;

const SHAPE: &str = "mitata";

/// Cap on samples per series; mitata can emit millions for fast benches.
const MAX_SAMPLES: usize = 100_000;

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

#[derive(Debug, Deserialize)]
struct MitataJson {
    benchmarks: Vec<MitataBenchmark>,
}

#[derive(Debug, Deserialize)]
struct MitataBenchmark {
    #[serde(default)]
    alias: Option<String>,
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    args: Option<JsonValue>,
    runs: Vec<MitataRun>,
}

#[derive(Debug, Deserialize)]
struct MitataRun {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    args: Option<ParameterMap>,
    stats: MitataStats,
}

#[derive(Debug, Deserialize)]
struct MitataStats {
    samples: Vec<f64>,
}

struct Workload {
    label: Option<String>,
    parameters: Option<ParameterMap>,
    stats: Statistics,
}

fn truncate_samples(mut samples: Vec<f64>) -> Vec<f64> {
    if samples.len() > MAX_SAMPLES {
        let loss = (samples.len() - MAX_SAMPLES) as f64 / samples.len() as f64 * 100.0;
        tracing::warn!(
            total = samples.len(),
            kept = MAX_SAMPLES,
            "truncating mitata samples, data loss: {:.2}%",
            loss
        );
        samples.truncate(MAX_SAMPLES);
    }
    samples
}

/// An integral first sample means nanosecond timestamps; convert to seconds.
fn is_nanosecond_scale(samples: &[f64]) -> bool {
    samples.first().is_some_and(|s| s.fract() == 0.0)
}

fn normalize_samples(samples: Vec<f64>) -> Vec<f64> {
    if is_nanosecond_scale(&samples) {
        samples.into_iter().map(|s| s / NANOS_PER_SECOND).collect()
    } else {
        samples
    }
}

fn workload_stats(samples: &[f64]) -> Result<Statistics> {
    stats_for(SHAPE, normalize_samples(truncate_samples(samples.to_vec())))
}

fn collect_workloads(parsed: &MitataJson) -> Result<Vec<Workload>> {
    let first = parsed
        .benchmarks
        .first()
        .ok_or_else(|| BenchartError::malformed(SHAPE, "empty benchmarks array"))?;
    let parameterized = first.kind.as_deref() == Some("multi-args") && first.args.is_some();

    if parameterized {
        return first
            .runs
            .iter()
            .map(|run| {
                Ok(Workload {
                    label: run.name.clone(),
                    parameters: run.args.clone(),
                    stats: workload_stats(&run.stats.samples)?,
                })
            })
            .collect();
    }

    parsed
        .benchmarks
        .iter()
        .map(|benchmark| {
            let run = benchmark
                .runs
                .first()
                .ok_or_else(|| BenchartError::malformed(SHAPE, "benchmark has no runs"))?;
            Ok(Workload {
                label: benchmark.alias.clone().or_else(|| run.name.clone()),
                parameters: None,
                stats: workload_stats(&run.stats.samples)?,
            })
        })
        .collect()
}

/// Transform mitata JSON into a configuration plus series data.
pub fn transform_mitata_data(
    json: &JsonValue,
    options: TransformOptions,
) -> Result<TransformOutput> {
    let parsed: MitataJson = serde_json::from_value(json.clone())
        .map_err(|e| BenchartError::malformed(SHAPE, e.to_string()))?;
    let workloads = collect_workloads(&parsed)?;
    if workloads.is_empty() {
        return Err(BenchartError::malformed(SHAPE, "no runs to transform"));
    }

    let has_parameters = workloads
        .iter()
        .all(|w| w.parameters.as_ref().is_some_and(|p| !p.is_empty()));
    let parameter_names: Vec<String> = if has_parameters {
        workloads[0]
            .parameters
            .as_ref()
            .map(|p| p.keys().cloned().collect())
            .unwrap_or_default()
    } else {
        Vec::new()
    };
    let command_template = if has_parameters {
        workloads[0].label.as_ref().map(|label| {
            let placeholders: Vec<String> =
                parameter_names.iter().map(|n| format!("{{{}}}", n)).collect();
            format!("{} {}", label, placeholders.join(" "))
        })
    } else {
        None
    };

    if let Some(config) = options.config {
        let mut data = options.data;
        for (index, workload) in workloads.into_iter().enumerate() {
            let series = config.series.get(index).ok_or_else(|| {
                BenchartError::malformed(
                    SHAPE,
                    format!("existing configuration has no series at position {}", index),
                )
            })?;
            match data.iter_mut().find(|d| d.series_id == series.id) {
                Some(row) => row.stats = workload.stats,
                None => data.push(SeriesData {
                    id: series.id,
                    series_id: series.id,
                    stats: workload.stats,
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
    for workload in workloads {
        let id = options.series_id.unwrap_or(series.len() as i64);
        let (label, command) = if has_parameters {
            let parameters = workload.parameters.as_ref();
            let label = parameter_names
                .iter()
                .map(|name| {
                    parameters
                        .and_then(|p| p.get(name))
                        .map(parameter_string)
                        .unwrap_or_default()
                })
                .collect::<Vec<String>>()
                .join(" ");
            let command = parameter_names.iter().fold(
                command_template.clone().unwrap_or_default(),
                |acc, name| {
                    let value = parameters
                        .and_then(|p| p.get(name))
                        .map(parameter_string)
                        .unwrap_or_default();
                    acc.replacen(&format!("{{{}}}", name), &value, 1)
                },
            );
            (label, Some(command))
        } else {
            (format!("Series {}", id + 1), workload.label.clone())
        };
        series.push(Series {
            id,
            config_id: options.config_id,
            label,
            color: next_available_color(&series).to_string(),
            command,
            parameters: if has_parameters {
                workload.parameters
            } else {
                None
            },
        });
        data.push(SeriesData {
            id,
            series_id: id,
            stats: workload.stats,
            label: None,
        });
    }

    let kind = if has_parameters {
        ConfigKind::MitataParameter {
            parameter_names,
            command: command_template,
        }
    } else {
        ConfigKind::Mitata
    };
    // The Y-axis unit follows the sample scale: converted nanosecond
    // timestamps are plotted in seconds, fractional samples as-is.
    let label_y = if parsed
        .benchmarks
        .first()
        .and_then(|b| b.runs.first())
        .is_some_and(|run| is_nanosecond_scale(&run.stats.samples))
    {
        "median (s)"
    } else {
        "median (ns)"
    };
    let config = Configuration {
        id: options.config_id,
        title: timestamp_title("New mitata benchmark"),
        label_x: None,
        label_y: Some(label_y.to_string()),
        series,
        kind,
    };
    Ok(TransformOutput {
        config: Some(config),
        data,
    })
}
