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

//! Mitata JSON ingestion: simple and parameterized benchmarks.

use benchart_core::ConfigKind;
use benchart_transform::{transform, TransformOptions};
use serde_json::json;

fn simple_export() -> String {
    json!({"benchmarks": [
        {
            "alias": "sleep 2.1s",
            "kind": "static",
            "runs": [{
                "name": "sleep 2.1s",
                "stats": {"samples": [2_100_000_000.0, 2_200_000_000.0, 2_000_000_000.0]}
            }]
        },
        {
            "alias": "sleep 2.3s",
            "kind": "static",
            "runs": [{
                "name": "sleep 2.3s",
                "stats": {"samples": [2_300_000_000.0, 2_400_000_000.0, 2_200_000_000.0]}
            }]
        }
    ]})
    .to_string()
}

fn parameterized_export() -> String {
    json!({"benchmarks": [{
        "alias": null,
        "kind": "multi-args",
        "args": {"len": [1, 2], "len2": ["4"]},
        "runs": [
            {
                "name": "look_mom_no_spaghetti",
                "args": {"len": 1, "len2": "4"},
                "stats": {"samples": [0.5, 0.6, 0.7]}
            },
            {
                "name": "look_mom_no_spaghetti",
                "args": {"len": 2, "len2": "4"},
                "stats": {"samples": [0.8, 0.9, 1.0]}
            }
        ]
    }]})
    .to_string()
}

#[test]
fn test_simple_export_creates_mitata_config() {
    let output = transform(simple_export(), TransformOptions::with_config_id(-1)).unwrap();
    let config = output.config.unwrap();

    assert!(config.title.starts_with("New mitata benchmark ("));
    assert!(matches!(config.kind, ConfigKind::Mitata));
    assert_eq!(config.label_y.as_deref(), Some("median (s)"));
    assert_eq!(config.series.len(), 2);
    assert_eq!(config.series[0].label, "Series 1");
    assert_eq!(config.series[0].command.as_deref(), Some("sleep 2.1s"));
    assert_eq!(config.series[1].label, "Series 2");
    assert_eq!(config.series[1].color, "#ec4899");

    // Integral samples are nanoseconds, so stored values are seconds.
    assert_eq!(output.data[0].stats.values, vec![2.1, 2.2, 2.0]);
    assert_eq!(output.data[0].stats.median, 2.1);
    assert_eq!(output.data[1].stats.min, 2.2);
}

#[test]
fn test_parameterized_export_creates_parameter_config() {
    let output = transform(parameterized_export(), TransformOptions::with_config_id(-1)).unwrap();
    let config = output.config.unwrap();

    match &config.kind {
        ConfigKind::MitataParameter {
            parameter_names,
            command,
        } => {
            assert_eq!(
                parameter_names,
                &vec!["len".to_string(), "len2".to_string()]
            );
            assert_eq!(command.as_deref(), Some("look_mom_no_spaghetti {len} {len2}"));
        }
        other => panic!("expected mitata-parameter, got {:?}", other),
    }

    // Fractional samples were not rescaled, so the axis stays in ns.
    assert_eq!(config.label_y.as_deref(), Some("median (ns)"));
    assert_eq!(config.series.len(), 2);
    assert_eq!(config.series[0].label, "1 4");
    assert_eq!(
        config.series[0].command.as_deref(),
        Some("look_mom_no_spaghetti 1 4")
    );
    assert_eq!(config.series[1].label, "2 4");
    assert!(config.series[1].parameters.is_some());

    // Fractional samples are already seconds, statistics are recomputed.
    assert_eq!(output.data[0].stats.values, vec![0.5, 0.6, 0.7]);
    assert!((output.data[0].stats.mean - 0.6).abs() < 1e-12);
    assert_eq!(output.data[1].stats.median, 0.9);
}

#[test]
fn test_append_replaces_statistics_by_position() {
    let first = transform(simple_export(), TransformOptions::with_config_id(-1)).unwrap();
    let rerun = json!({"benchmarks": [
        {
            "alias": "sleep 2.1s", "kind": "static",
            "runs": [{"name": "sleep 2.1s", "stats": {"samples": [1.5, 1.5]}}]
        },
        {
            "alias": "sleep 2.3s", "kind": "static",
            "runs": [{"name": "sleep 2.3s", "stats": {"samples": [1.7, 1.7]}}]
        }
    ]})
    .to_string();
    let output = transform(
        rerun,
        TransformOptions::append_to(first.config.unwrap(), first.data),
    )
    .unwrap();
    let config = output.config.unwrap();

    assert_eq!(config.series.len(), 2);
    assert_eq!(output.data.len(), 2);
    assert_eq!(output.data[0].stats.values, vec![1.5, 1.5]);
    assert_eq!(output.data[1].stats.mean, 1.7);
}

#[test]
fn test_empty_benchmarks_is_no_match() {
    let output = transform(r#"{"benchmarks": []}"#, TransformOptions::default()).unwrap();
    assert!(output.is_no_match());
}
