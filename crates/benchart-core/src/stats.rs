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

//! Summary statistics over raw samples.

use crate::error::{BenchartError, Result};
use serde::{Deserialize, Serialize};

/// Summary statistics for one series, together with the raw samples that
/// back them.
///
/// `values` keeps the samples in arrival order; the derived fields are
/// computed over a sorted copy. When a series is extended, statistics are
/// recomputed from the full accumulated history rather than updated
/// incrementally, so merging is order-independent for every field except
/// `values` itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Raw samples in arrival order.
    pub values: Vec<f64>,
    /// Arithmetic mean.
    pub mean: f64,
    /// Upper-middle element of the sorted samples. For even-length input
    /// this is the element at index `n / 2`, not the average of the two
    /// middle elements.
    pub median: f64,
    /// Population standard deviation (divides by `n`, not `n - 1`).
    pub stddev: f64,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
}

/// Compute summary statistics over a non-empty sample sequence.
///
/// # Errors
///
/// Returns [`BenchartError::Validation`] when `values` is empty.
///
/// # Examples
///
/// ```
/// use benchart_core::calculate_stats;
///
/// let stats = calculate_stats(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(stats.mean, 2.5);
/// assert_eq!(stats.median, 3.0); // upper middle, not 2.5
/// assert_eq!(stats.min, 1.0);
/// assert_eq!(stats.max, 4.0);
/// ```
pub fn calculate_stats(values: Vec<f64>) -> Result<Statistics> {
    if values.is_empty() {
        return Err(BenchartError::validation(
            "cannot compute statistics over an empty sample sequence",
        ));
    }

    let mut sorted = values.clone();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    Ok(Statistics {
        median: sorted[sorted.len() / 2],
        stddev: variance.sqrt(),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        mean,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_sample() {
        let stats = calculate_stats(vec![42.5]).unwrap();
        assert_eq!(stats.values, vec![42.5]);
        assert_eq!(stats.mean, 42.5);
        assert_eq!(stats.median, 42.5);
        assert_eq!(stats.stddev, 0.0);
        assert_eq!(stats.min, 42.5);
        assert_eq!(stats.max, 42.5);
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = calculate_stats(vec![]).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_median_upper_middle_tie_break() {
        // Even length: index n/2 of the sorted copy, not the average of the
        // two middle elements.
        let stats = calculate_stats(vec![2.0, 4.0]).unwrap();
        assert_eq!(stats.median, 4.0);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.stddev, 1.0);
    }

    #[test]
    fn test_population_stddev() {
        let stats = calculate_stats(vec![1.0, 2.0, 3.0]).unwrap();
        assert!((stats.stddev - 0.816_496_580_927_726).abs() < 1e-12);
    }

    #[test]
    fn test_values_keep_arrival_order() {
        let stats = calculate_stats(vec![3.0, 1.0, 2.0]).unwrap();
        assert_eq!(stats.values, vec![3.0, 1.0, 2.0]);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 3.0);
        assert_eq!(stats.median, 2.0);
    }

    #[test]
    fn test_four_samples() {
        let stats = calculate_stats(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.median, 3.0);
        assert!((stats.stddev - 1.118_033_988_749_895).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_min_mean_max_ordering(values in proptest::collection::vec(-1e6f64..1e6, 1..64)) {
            let stats = calculate_stats(values).unwrap();
            prop_assert!(stats.min <= stats.mean + 1e-9);
            prop_assert!(stats.mean <= stats.max + 1e-9);
            prop_assert!(stats.min <= stats.median);
            prop_assert!(stats.median <= stats.max);
        }
    }
}
