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

//! Error types for benchart.

use thiserror::Error;

/// Errors produced while normalizing benchmark input.
///
/// Only [`BenchartError::Validation`] ever crosses the public API boundary:
/// it signals caller misuse (an empty sample sequence, an input that is not
/// text or JSON). [`BenchartError::Malformed`] is raised by shape
/// transformers when a sniffer's predicate matched but the payload turned out
/// to be inconsistent; the dispatcher catches it, logs it, and degrades the
/// call to the "no match" result.
///
/// # Examples
///
/// ```
/// use benchart_core::BenchartError;
///
/// let err = BenchartError::validation("values must not be empty");
/// assert!(err.is_validation());
/// assert_eq!(err.to_string(), "validation error: values must not be empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BenchartError {
    /// The caller violated a precondition of the API.
    #[error("validation error: {0}")]
    Validation(String),

    /// A sniffer matched but the payload could not be transformed.
    #[error("malformed {shape} input: {message}")]
    Malformed {
        /// Name of the shape whose transformer failed.
        shape: &'static str,
        /// What was wrong with the payload.
        message: String,
    },
}

impl BenchartError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a malformed-input error for the named shape.
    pub fn malformed(shape: &'static str, message: impl Into<String>) -> Self {
        Self::Malformed {
            shape,
            message: message.into(),
        }
    }

    /// Returns true for errors that must propagate to the caller.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type for benchart operations.
pub type Result<T> = std::result::Result<T, BenchartError>;
