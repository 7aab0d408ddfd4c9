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

//! Transformers for the generic shapes: positional numeric series, labeled
//! rows/tuples, and labeled columns.
//!
//! Positional shapes always append new series after the existing ones.
//! Label-keyed shapes merge by label: a matching series accumulates the new
//! samples into its data row and recomputes statistics over the full
//! history, an unmatched label becomes a fresh series with the next id and
//! palette color.

use crate::timestamp_title;
use crate::transform::{InitialConfig, TransformOptions, TransformOutput};
use benchart_core::{
    calculate_stats, next_available_color, BenchartError, ConfigKind, ConfigType, Configuration,
    Result, Series, SeriesData, SortOrder, Statistics,
};

pub(crate) fn stats_for(shape: &'static str, values: Vec<f64>) -> Result<Statistics> {
    calculate_stats(values).map_err(|_| BenchartError::malformed(shape, "empty sample sequence"))
}

fn looks_like_semver(label: &str) -> bool {
    let parts: Vec<&str> = label.split('.').collect();
    parts.len() >= 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}

fn looks_like_date(label: &str) -> bool {
    let bytes = label.as_bytes();
    bytes.len() >= 7
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes[5..7].iter().all(u8::is_ascii_digit)
}

/// Infer the sort hint for a label-keyed configuration from its labels.
pub fn detect_sort_order(labels: &[String]) -> Option<SortOrder> {
    if labels.is_empty() {
        return None;
    }
    if labels.iter().all(|l| looks_like_semver(l)) {
        return Some(SortOrder::Semver);
    }
    if labels.iter().all(|l| looks_like_date(l)) {
        return Some(SortOrder::Datetime);
    }
    None
}

/// Concatenate new samples onto a data row and recompute its statistics
/// over the accumulated history.
fn extend_row(shape: &'static str, row: &mut SeriesData, values: Vec<f64>) -> Result<()> {
    let mut all = std::mem::take(&mut row.stats.values);
    all.extend(values);
    row.stats = stats_for(shape, all)?;
    Ok(())
}

/// Transform positional numeric series, one inner vector per series.
pub fn transform_data(values: Vec<Vec<f64>>, options: TransformOptions) -> Result<TransformOutput> {
    const SHAPE: &str = "numeric";
    let TransformOptions {
        config_id,
        series_id,
        config,
        mut data,
        initial,
    } = options;

    if let Some(mut config) = config {
        let start_id = config.next_series_id();
        let series_number = config.series.len() + 1;
        for (index, samples) in values.into_iter().enumerate() {
            let id = start_id + index as i64;
            config.series.push(Series {
                id,
                config_id: config.id,
                label: format!("Series {}", series_number + index),
                color: next_available_color(&config.series).to_string(),
                command: Some(String::new()),
                parameters: None,
            });
            data.push(SeriesData {
                id,
                series_id: id,
                stats: stats_for(SHAPE, samples)?,
                label: None,
            });
        }
        return Ok(TransformOutput {
            config: Some(config),
            data,
        });
    }

    let initial = initial.unwrap_or_default();
    let start_id = series_id.unwrap_or(0);
    let mut series: Vec<Series> = Vec::new();
    let mut data: Vec<SeriesData> = Vec::new();
    for (index, samples) in values.into_iter().enumerate() {
        let id = start_id + index as i64;
        let label = initial
            .labels
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("Series {}", index + 1));
        let color = initial
            .colors
            .get(index)
            .cloned()
            .unwrap_or_else(|| next_available_color(&series).to_string());
        series.push(Series {
            id,
            config_id,
            label,
            color,
            command: Some(initial.commands.get(index).cloned().unwrap_or_default()),
            parameters: None,
        });
        data.push(SeriesData {
            id,
            series_id: id,
            stats: stats_for(SHAPE, samples)?,
            label: None,
        });
    }

    let config = Configuration {
        id: config_id,
        title: timestamp_title("Raw data input"),
        label_x: initial.label_x,
        label_y: initial.label_y,
        series,
        kind: ConfigKind::Standard { sort: None },
    };
    Ok(TransformOutput {
        config: Some(config),
        data,
    })
}

/// Transform raw numeric text: one number per line is a single series of
/// all samples, several numbers per line are one series per line.
pub fn transform_raw_data(input: &str, options: TransformOptions) -> Result<TransformOutput> {
    let lines: Vec<&str> = input.lines().filter(|l| !l.trim().is_empty()).collect();
    let one_number_per_line = lines
        .iter()
        .all(|l| crate::sniff::parse_raw_values(l).len() == 1);
    let values: Vec<Vec<f64>> = if one_number_per_line {
        vec![crate::sniff::parse_raw_values(input)]
    } else {
        lines
            .iter()
            .map(|l| crate::sniff::parse_raw_values(l))
            .filter(|v| !v.is_empty())
            .collect()
    };
    transform_data(values, options)
}

/// Transform label-keyed entries: JSON `[label, value]` tuples or textual
/// `label value value ...` rows. Each distinct label is one series.
pub fn transform_labeled_data(
    entries: Vec<(String, Vec<f64>)>,
    options: TransformOptions,
) -> Result<TransformOutput> {
    const SHAPE: &str = "labeled";
    let TransformOptions {
        config_id,
        series_id,
        config,
        mut data,
        initial,
    } = options;

    if let Some(mut config) = config {
        for (label, values) in entries {
            merge_labeled_entry(SHAPE, &mut config, &mut data, label, values, None)?;
        }
        return Ok(TransformOutput {
            config: Some(config),
            data,
        });
    }

    let initial = initial.unwrap_or_default();
    let labels: Vec<String> = entries.iter().map(|(label, _)| label.clone()).collect();
    let sort = detect_sort_order(&labels);
    let kind = match initial.config_type {
        Some(ConfigType::List) => ConfigKind::List {
            sort: sort.unwrap_or(SortOrder::Default),
            command: Some(String::new()),
        },
        _ => ConfigKind::Standard { sort },
    };
    let mut config = Configuration {
        id: config_id,
        title: timestamp_title("New labeled data series"),
        label_x: initial.label_x.clone(),
        label_y: initial.label_y.clone(),
        series: Vec::new(),
        kind,
    };
    let mut data = Vec::new();
    let base_id = series_id.unwrap_or(0);
    for (label, values) in entries {
        merge_labeled_entry(
            SHAPE,
            &mut config,
            &mut data,
            label,
            values,
            Some((base_id, &initial)),
        )?;
    }
    Ok(TransformOutput {
        config: Some(config),
        data,
    })
}

/// Merge one `(label, samples)` entry into a configuration: accumulate into
/// the matching series' data row, or mint a new series and row. `creating`
/// carries the id base and initial overrides when the configuration is
/// being built from scratch.
fn merge_labeled_entry(
    shape: &'static str,
    config: &mut Configuration,
    data: &mut Vec<SeriesData>,
    label: String,
    values: Vec<f64>,
    creating: Option<(i64, &InitialConfig)>,
) -> Result<()> {
    if let Some(series) = config.series_by_label(&label) {
        let series_id = series.id;
        match data.iter_mut().find(|d| d.series_id == series_id) {
            Some(row) => extend_row(shape, row, values)?,
            None => data.push(SeriesData {
                id: data.len() as i64,
                series_id,
                stats: stats_for(shape, values)?,
                label: Some(label),
            }),
        }
        return Ok(());
    }

    let position = config.series.len();
    let id = match creating {
        Some((base_id, _)) => base_id + position as i64,
        None => config.next_series_id(),
    };
    let color = creating
        .and_then(|(_, initial)| initial.colors.get(position).cloned())
        .unwrap_or_else(|| next_available_color(&config.series).to_string());
    let command = creating.and_then(|(_, initial)| initial.commands.get(position).cloned());
    config.series.push(Series {
        id,
        config_id: config.id,
        label: label.clone(),
        color,
        command,
        parameters: None,
    });
    data.push(SeriesData {
        id: data.len() as i64,
        series_id: id,
        stats: stats_for(shape, values)?,
        label: Some(label),
    });
    Ok(())
}

/// Transform a labeled-columns block: one series per column, keyed by the
/// header label.
pub fn transform_labeled_columns_data(
    parsed: (Vec<String>, Vec<Vec<f64>>),
    options: TransformOptions,
) -> Result<TransformOutput> {
    const SHAPE: &str = "labeled-columns";
    let (headers, columns) = parsed;
    if headers.len() != columns.len() {
        return Err(BenchartError::malformed(
            SHAPE,
            format!("{} headers for {} columns", headers.len(), columns.len()),
        ));
    }
    let TransformOptions {
        config_id,
        config,
        mut data,
        initial,
        ..
    } = options;

    if let Some(mut config) = config {
        for (header, column) in headers.into_iter().zip(columns) {
            if let Some(series) = config.series_by_label(&header) {
                let series_id = series.id;
                match data.iter_mut().find(|d| d.series_id == series_id) {
                    Some(row) => extend_row(SHAPE, row, column)?,
                    None => data.push(SeriesData {
                        id: data.len() as i64,
                        series_id,
                        stats: stats_for(SHAPE, column)?,
                        label: None,
                    }),
                }
            } else {
                let id = config.next_series_id();
                config.series.push(Series {
                    id,
                    config_id: config.id,
                    label: header,
                    color: next_available_color(&config.series).to_string(),
                    command: None,
                    parameters: None,
                });
                data.push(SeriesData {
                    id: data.len() as i64,
                    series_id: id,
                    stats: stats_for(SHAPE, column)?,
                    label: None,
                });
            }
        }
        return Ok(TransformOutput {
            config: Some(config),
            data,
        });
    }

    let initial = initial.unwrap_or_default();
    let mut series: Vec<Series> = Vec::new();
    let mut data: Vec<SeriesData> = Vec::new();
    for (index, (header, column)) in headers.into_iter().zip(columns).enumerate() {
        let id = index as i64;
        let color = initial
            .colors
            .get(index)
            .cloned()
            .unwrap_or_else(|| next_available_color(&series).to_string());
        series.push(Series {
            id,
            config_id,
            label: header,
            color,
            command: None,
            parameters: None,
        });
        data.push(SeriesData {
            id,
            series_id: id,
            stats: stats_for(SHAPE, column)?,
            label: None,
        });
    }

    let config = Configuration {
        id: config_id,
        title: timestamp_title("New labeled data series"),
        label_x: initial.label_x,
        label_y: initial.label_y,
        series,
        kind: ConfigKind::Standard { sort: None },
    };
    Ok(TransformOutput {
        config: Some(config),
        data,
    })
}
