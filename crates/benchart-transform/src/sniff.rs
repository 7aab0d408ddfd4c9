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

//! Structural predicates over untyped input, one per recognized shape, plus
//! the token/row parsers the text shapes share.
//!
//! The predicates are deliberately shallow: they look at just enough of the
//! payload to commit to a shape. The dispatcher evaluates them in a fixed
//! precedence order because the tool-specific JSON shapes are structurally
//! compatible with the generic array shapes and must win.

use serde_json::Value as JsonValue;

/// A token delimiter in textual input: any run of whitespace, commas or
/// semicolons counts as one separator.
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == ';'
}

/// Split a line into non-empty tokens.
pub(crate) fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_delimiter).filter(|t| !t.is_empty())
}

fn non_empty_lines(input: &str) -> impl Iterator<Item = &str> {
    input.lines().filter(|l| !l.trim().is_empty())
}

/// Parse every numeric token in `input`, silently dropping anything that is
/// not a number.
pub fn parse_raw_values(input: &str) -> Vec<f64> {
    tokens(input).filter_map(|t| t.parse::<f64>().ok()).collect()
}

/// True when the whole input is numbers separated by whitespace, commas or
/// semicolons: either one number per line (a single series) or several per
/// line (one series per line).
pub fn is_raw_numeric_data(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty()
        || !trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || is_delimiter(c))
    {
        return false;
    }
    let lines: Vec<&str> = non_empty_lines(trimmed).collect();
    let one_number_per_line = lines.iter().all(|l| parse_raw_values(l).len() == 1);
    if one_number_per_line {
        !parse_raw_values(trimmed).is_empty()
    } else {
        lines.iter().any(|l| !parse_raw_values(l).is_empty())
    }
}

/// True when the first line looks like `label value value ...`: the label
/// fails a strict number parse and the second token succeeds.
pub fn is_labeled_raw_data(input: &str) -> bool {
    let Some(first) = non_empty_lines(input.trim()).next() else {
        return false;
    };
    let parts: Vec<&str> = tokens(first).collect();
    parts.len() >= 2 && parts[0].parse::<f64>().is_err() && parts[1].parse::<f64>().is_ok()
}

/// True for a header row of names followed by numeric data rows. The third
/// physical line must be purely numeric, which tolerates a dashed separator
/// line between header and data.
pub fn is_labeled_columns_raw_data(input: &str) -> bool {
    let lines: Vec<&str> = non_empty_lines(input.trim()).collect();
    if lines.len() < 3 {
        return false;
    }
    let labels: Vec<&str> = tokens(lines[0]).collect();
    let values: Vec<&str> = tokens(lines[2]).collect();
    !labels.is_empty()
        && !values.is_empty()
        && labels
            .iter()
            .all(|t| t.chars().any(|c| c.is_ascii_alphanumeric() || c == '_'))
        && values
            .iter()
            .all(|t| t.chars().all(|c| c.is_ascii_digit() || c == '.'))
}

/// Parse `label value value ...` rows into per-label sample lists. Lines
/// without at least one numeric value are skipped.
pub fn parse_labeled_values(input: &str) -> Vec<(String, Vec<f64>)> {
    non_empty_lines(input)
        .filter_map(|line| {
            let mut parts = tokens(line);
            let label = parts.next()?;
            let values: Vec<f64> = parts.filter_map(|t| t.parse::<f64>().ok()).collect();
            (!values.is_empty()).then(|| (label.to_string(), values))
        })
        .collect()
}

/// Parse a labeled-columns block into `(headers, per-column samples)`. Rows
/// whose numeric token count does not match the header width (for example a
/// dashed separator line) are skipped.
pub fn parse_labeled_column_values(input: &str) -> (Vec<String>, Vec<Vec<f64>>) {
    let mut lines = non_empty_lines(input);
    let headers: Vec<String> = lines
        .next()
        .map(|l| tokens(l).map(str::to_string).collect())
        .unwrap_or_default();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];
    for line in lines {
        let numbers: Vec<f64> = tokens(line).filter_map(|t| t.parse::<f64>().ok()).collect();
        if numbers.len() == headers.len() {
            for (column, number) in columns.iter_mut().zip(numbers) {
                column.push(number);
            }
        }
    }
    (headers, columns)
}

/// True for hyperfine's `--export-json` shape: an object with a `results`
/// array whose first element carries an `exit_codes` field.
pub fn is_hyperfine_json(data: &JsonValue) -> bool {
    data.get("results")
        .and_then(JsonValue::as_array)
        .and_then(|results| results.first())
        .is_some_and(|first| first.is_object() && first.get("exit_codes").is_some())
}

/// True for mitata's JSON output: an object with a `benchmarks` array whose
/// first element has `runs[0].stats.samples`.
pub fn is_mitata_json(data: &JsonValue) -> bool {
    data.get("benchmarks")
        .and_then(JsonValue::as_array)
        .and_then(|benchmarks| benchmarks.first())
        .and_then(|first| first.get("runs"))
        .and_then(JsonValue::as_array)
        .and_then(|runs| runs.first())
        .and_then(|run| run.get("stats"))
        .and_then(|stats| stats.get("samples"))
        .is_some()
}

/// True for a `[label, value]` or `[label, [values...]]` tuple.
pub fn is_label_value_tuple(value: &JsonValue) -> bool {
    match value.as_array() {
        Some(pair) if pair.len() == 2 => {
            pair[0].is_string()
                && (pair[1].is_number()
                    || pair[1]
                        .as_array()
                        .is_some_and(|v| v.iter().all(JsonValue::is_number)))
        }
        _ => false,
    }
}

/// Extract an all-numbers array, if that is what `value` is.
pub(crate) fn as_number_array(value: &JsonValue) -> Option<Vec<f64>> {
    value
        .as_array()?
        .iter()
        .map(JsonValue::as_f64)
        .collect::<Option<Vec<f64>>>()
}
