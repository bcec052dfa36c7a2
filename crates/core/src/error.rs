// Copyright 2025 LLM Contrast Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types shared across the LLM Contrast workspace.

use crate::types::{MetricKind, TaskCategory};
use thiserror::Error;

/// Errors that can occur while simulating or comparing workflows.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input rejected before any simulation ran (negative item count,
    /// unknown category tag, unknown output format).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A baseline metric of zero leaves the relative improvement undefined.
    #[error("Degenerate baseline: {metric} is zero for {category}")]
    DegenerateBaseline {
        /// Category whose baseline run produced the zero value
        category: TaskCategory,
        /// Metric that cannot be normalized
        metric: MetricKind,
    },

    /// Configuration could not be loaded or deserialized
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem error while reading or writing reports
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Create a degenerate baseline error for one metric of one category.
    pub fn degenerate(category: TaskCategory, metric: MetricKind) -> Self {
        Error::DegenerateBaseline { category, metric }
    }

    /// Whether this error was caused by caller input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }

    /// Whether this error was caused by a zero baseline value.
    pub fn is_degenerate_baseline(&self) -> bool {
        matches!(self, Error::DegenerateBaseline { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}

/// Result type alias for LLM Contrast operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_message_names_metric_and_category() {
        let err = Error::degenerate(TaskCategory::QueryProcessing, MetricKind::CostEstimate);
        assert_eq!(
            err.to_string(),
            "Degenerate baseline: cost_estimate is zero for query_processing"
        );
        assert!(err.is_degenerate_baseline());
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_invalid_input_helper() {
        let err = Error::invalid_input("item count must be non-negative");
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(ref m) if m.contains("missing")));
    }
}
