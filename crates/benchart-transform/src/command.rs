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

//! Render a runnable hyperfine invocation from a configuration, so users
//! can re-run the benchmark that produced it.

use benchart_core::{ConfigKind, Configuration, Series};

/// Generate a shell command for a `hyperfine` or `hyperfine-parameter`
/// configuration. Series without both a label and a command are skipped;
/// other configuration variants yield an empty string.
///
/// No escaping is performed beyond doubling single quotes inside the
/// measured commands; the output is meant to be pasted into a shell, not
/// executed programmatically.
pub fn generate_command(config: &Configuration) -> String {
    let commands: Vec<&Series> = config
        .series
        .iter()
        .filter(|s| {
            !s.label.trim().is_empty() && s.command.as_ref().is_some_and(|c| !c.trim().is_empty())
        })
        .collect();

    match &config.kind {
        ConfigKind::HyperfineParameter {
            parameter_names,
            command,
        } => {
            let labels: Vec<&str> = commands.iter().map(|s| s.label.as_str()).collect();
            format!(
                "hyperfine --warmup 3 --parameter-list {} {} '{}' --export-json benchart-drop-{}.json",
                parameter_names.first().map(String::as_str).unwrap_or(""),
                labels.join(","),
                command,
                config.id
            )
        }
        ConfigKind::Hyperfine => {
            let mut lines = vec!["hyperfine --warmup 3".to_string()];
            lines.extend(commands.iter().map(|s| {
                format!("'{}'", s.command.as_deref().unwrap_or("").replace('\'', "\\'"))
            }));
            lines.push(format!("--export-json benchart-drop-{}.json", config.id));
            lines.join(" \\\n  ")
        }
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchart_core::{ConfigKind, Configuration, Series};

    fn series(id: i64, label: &str, command: &str) -> Series {
        Series {
            id,
            config_id: 3,
            label: label.to_string(),
            color: "#8b5cf6".to_string(),
            command: Some(command.to_string()),
            parameters: None,
        }
    }

    fn config(kind: ConfigKind, series: Vec<Series>) -> Configuration {
        Configuration {
            id: 3,
            title: "New hyperfine benchmark (4/1 12:05)".to_string(),
            label_x: None,
            label_y: None,
            series,
            kind,
        }
    }

    #[test]
    fn test_plain_hyperfine_command() {
        let config = config(
            ConfigKind::Hyperfine,
            vec![
                series(0, "Command 1", "sleep 0.22"),
                series(1, "Command 2", "echo 'hi'"),
            ],
        );
        assert_eq!(
            generate_command(&config),
            "hyperfine --warmup 3 \\\n  'sleep 0.22' \\\n  'echo \\'hi\\'' \\\n  --export-json benchart-drop-3.json"
        );
    }

    #[test]
    fn test_parameterized_command() {
        let config = config(
            ConfigKind::HyperfineParameter {
                parameter_names: vec!["value".to_string()],
                command: "echo {value}".to_string(),
            },
            vec![series(0, "0", "echo 0"), series(1, "1", "echo 1")],
        );
        assert_eq!(
            generate_command(&config),
            "hyperfine --warmup 3 --parameter-list value 0,1 'echo {value}' --export-json benchart-drop-3.json"
        );
    }

    #[test]
    fn test_series_without_label_or_command_excluded() {
        let mut empty_command = series(1, "Command 2", "");
        empty_command.command = Some(String::new());
        let config = config(
            ConfigKind::Hyperfine,
            vec![
                series(0, "Command 1", "sleep 0.22"),
                empty_command,
                series(2, "  ", "sleep 0.23"),
            ],
        );
        let command = generate_command(&config);
        assert!(command.contains("sleep 0.22"));
        assert!(!command.contains("sleep 0.23"));
    }

    #[test]
    fn test_non_hyperfine_variants_yield_empty_string() {
        let standard = config(ConfigKind::Standard { sort: None }, vec![]);
        assert_eq!(generate_command(&standard), "");

        let mitata = config(ConfigKind::Mitata, vec![]);
        assert_eq!(generate_command(&mitata), "");
    }
}
