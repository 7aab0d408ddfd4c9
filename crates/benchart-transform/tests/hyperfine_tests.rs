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

//! Hyperfine `--export-json` ingestion and the command round-trip.

use benchart_core::ConfigKind;
use benchart_transform::{generate_command, transform, TransformOptions};
use serde_json::json;

fn plain_export() -> String {
    json!({"results": [
        {
            "command": "sleep 0.22",
            "mean": 0.2207, "stddev": 0.0004, "median": 0.2206,
            "user": 0.0012, "system": 0.0006, "min": 0.2201, "max": 0.2213,
            "times": [0.2213, 0.2201, 0.2206],
            "exit_codes": [0, 0, 0]
        },
        {
            "command": "sleep 0.23",
            "mean": 0.2306, "stddev": 0.0002, "median": 0.2306,
            "user": 0.0011, "system": 0.0007, "min": 0.2304, "max": 0.2308,
            "times": [0.2304, 0.2308, 0.2306],
            "exit_codes": [0, 0, 0]
        }
    ]})
    .to_string()
}

fn parameterized_export() -> String {
    json!({"results": [
        {
            "command": "echo 0",
            "mean": 0.001, "stddev": 0.0001, "median": 0.001,
            "min": 0.0009, "max": 0.0011,
            "times": [0.0009, 0.0011, 0.001],
            "exit_codes": [0, 0, 0],
            "parameters": {"value": "0"}
        },
        {
            "command": "echo 1",
            "mean": 0.002, "stddev": 0.0001, "median": 0.002,
            "min": 0.0019, "max": 0.0021,
            "times": [0.0019, 0.0021, 0.002],
            "exit_codes": [0, 0, 0],
            "parameters": {"value": "1"}
        }
    ]})
    .to_string()
}

#[test]
fn test_plain_export_creates_hyperfine_config() {
    let output = transform(plain_export(), TransformOptions::with_config_id(-1)).unwrap();
    let config = output.config.unwrap();

    assert!(config.title.starts_with("New hyperfine benchmark ("));
    assert!(matches!(config.kind, ConfigKind::Hyperfine));
    assert_eq!(config.series.len(), 2);
    assert_eq!(config.series[0].label, "Command 1");
    assert_eq!(config.series[0].color, "#8b5cf6");
    assert_eq!(config.series[0].command.as_deref(), Some("sleep 0.22"));
    assert_eq!(config.series[1].label, "Command 2");
    assert_eq!(config.series[1].color, "#ec4899");

    // Statistics are hyperfine's own, passed through untouched.
    assert_eq!(output.data.len(), 2);
    assert_eq!(output.data[0].stats.values, vec![0.2213, 0.2201, 0.2206]);
    assert_eq!(output.data[0].stats.mean, 0.2207);
    assert_eq!(output.data[0].stats.median, 0.2206);
    assert_eq!(output.data[0].stats.stddev, 0.0004);
    assert_eq!(output.data[1].stats.max, 0.2308);
}

#[test]
fn test_parameterized_export_creates_parameter_config() {
    let output = transform(parameterized_export(), TransformOptions::with_config_id(3)).unwrap();
    let config = output.config.unwrap();

    match &config.kind {
        ConfigKind::HyperfineParameter {
            parameter_names,
            command,
        } => {
            assert_eq!(parameter_names, &vec!["value".to_string()]);
            assert_eq!(command, "echo {value}");
        }
        other => panic!("expected hyperfine-parameter, got {:?}", other),
    }
    assert_eq!(config.series[0].label, "0");
    assert_eq!(config.series[1].label, "1");
    assert!(config.series[0].parameters.is_some());
}

#[test]
fn test_parameterized_config_round_trips_to_command() {
    let output = transform(parameterized_export(), TransformOptions::with_config_id(3)).unwrap();
    assert_eq!(
        generate_command(&output.config.unwrap()),
        "hyperfine --warmup 3 --parameter-list value 0,1 'echo {value}' --export-json benchart-drop-3.json"
    );
}

#[test]
fn test_append_replaces_statistics_by_position() {
    let first = transform(plain_export(), TransformOptions::with_config_id(-1)).unwrap();
    let rerun = json!({"results": [
        {
            "command": "sleep 0.22",
            "mean": 0.5, "stddev": 0.0, "median": 0.5, "min": 0.5, "max": 0.5,
            "times": [0.5], "exit_codes": [0]
        },
        {
            "command": "sleep 0.23",
            "mean": 0.6, "stddev": 0.0, "median": 0.6, "min": 0.6, "max": 0.6,
            "times": [0.6], "exit_codes": [0]
        }
    ]})
    .to_string();
    let output = transform(
        rerun,
        TransformOptions::append_to(first.config.unwrap(), first.data),
    )
    .unwrap();
    let config = output.config.unwrap();

    // Series are untouched, data rows replaced rather than accumulated.
    assert_eq!(config.series.len(), 2);
    assert_eq!(output.data.len(), 2);
    assert_eq!(output.data[0].stats.values, vec![0.5]);
    assert_eq!(output.data[0].stats.mean, 0.5);
    assert_eq!(output.data[1].stats.mean, 0.6);
}

#[test]
fn test_append_with_extra_result_is_no_match() {
    let first = transform(plain_export(), TransformOptions::with_config_id(-1)).unwrap();
    let mut config = first.config.unwrap();
    config.series.pop();
    // Two results against one remaining series cannot be paired up; the
    // dispatcher downgrades the failure.
    let output = transform(
        plain_export(),
        TransformOptions::append_to(config, first.data),
    )
    .unwrap();
    assert!(output.is_no_match());
}

#[test]
fn test_series_id_override_applies_to_single_result() {
    let export = json!({"results": [{
        "command": "sleep 0.22",
        "mean": 0.22, "stddev": 0.0, "median": 0.22, "min": 0.22, "max": 0.22,
        "times": [0.22], "exit_codes": [0]
    }]})
    .to_string();
    let output = transform(
        export,
        TransformOptions {
            series_id: Some(5),
            ..TransformOptions::with_config_id(-1)
        },
    )
    .unwrap();
    let config = output.config.unwrap();
    assert_eq!(config.series[0].id, 5);
    assert_eq!(config.series[0].label, "Command 6");
    assert_eq!(output.data[0].series_id, 5);
}
