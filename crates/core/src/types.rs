// Copyright 2025 LLM Contrast Contributors
// SPDX-License-Identifier: Apache-2.0

//! Data model for workflow comparisons.
//!
//! A [`MetricRecord`] is the outcome of one simulated run; a [`TaskInput`]
//! is what a simulator reads to produce it. Both are plain values with no
//! identity beyond their fields.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three analysis scenarios every comparison covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    /// Ingesting a batch of documents
    DocumentProcessing,
    /// Answering a free-text query over the documents
    QueryProcessing,
    /// Synthesizing knowledge across documents for a query
    KnowledgeSynthesis,
}

impl TaskCategory {
    /// All categories in canonical comparison order.
    pub const ALL: [TaskCategory; 3] = [
        TaskCategory::DocumentProcessing,
        TaskCategory::QueryProcessing,
        TaskCategory::KnowledgeSynthesis,
    ];

    /// The category tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DocumentProcessing => "document_processing",
            Self::QueryProcessing => "query_processing",
            Self::KnowledgeSynthesis => "knowledge_synthesis",
        }
    }

    /// Human-readable name for reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::DocumentProcessing => "Document Processing",
            Self::QueryProcessing => "Query Processing",
            Self::KnowledgeSynthesis => "Knowledge Synthesis",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "document_processing" => Ok(Self::DocumentProcessing),
            "query_processing" => Ok(Self::QueryProcessing),
            "knowledge_synthesis" => Ok(Self::KnowledgeSynthesis),
            _ => Err(Error::invalid_input(format!("unknown task category: {s}"))),
        }
    }
}

/// Whether a larger value of a metric is an improvement or a regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Time, complexity, cost, steps
    LowerIsBetter,
    /// Accuracy, success rate
    HigherIsBetter,
}

/// The six measurements carried by a [`MetricRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Simulated elapsed seconds
    TimeTaken,
    /// Difficulty rating, 0-100
    ComplexityScore,
    /// Fraction in [0,1]
    AccuracyScore,
    /// Currency units
    CostEstimate,
    /// Discrete process steps
    StepsRequired,
    /// Fraction in [0,1]
    SuccessRate,
}

impl MetricKind {
    /// All metrics in evaluation order.
    pub const ALL: [MetricKind; 6] = [
        MetricKind::TimeTaken,
        MetricKind::ComplexityScore,
        MetricKind::AccuracyScore,
        MetricKind::CostEstimate,
        MetricKind::StepsRequired,
        MetricKind::SuccessRate,
    ];

    /// Field name of the metric.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TimeTaken => "time_taken",
            Self::ComplexityScore => "complexity_score",
            Self::AccuracyScore => "accuracy_score",
            Self::CostEstimate => "cost_estimate",
            Self::StepsRequired => "steps_required",
            Self::SuccessRate => "success_rate",
        }
    }

    /// Name of the improvement percentage derived from this metric.
    pub fn improvement_label(&self) -> &'static str {
        match self {
            Self::TimeTaken => "time_reduction",
            Self::ComplexityScore => "complexity_reduction",
            Self::AccuracyScore => "accuracy_improvement",
            Self::CostEstimate => "cost_savings",
            Self::StepsRequired => "steps_reduction",
            Self::SuccessRate => "success_rate_improvement",
        }
    }

    /// Which way is better for this metric.
    pub fn direction(&self) -> Direction {
        match self {
            Self::AccuracyScore | Self::SuccessRate => Direction::HigherIsBetter,
            _ => Direction::LowerIsBetter,
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Measurements of one simulated workflow run.
///
/// Fields are only readable; a record never changes after a simulator
/// returns it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    time_taken: f64,
    complexity_score: f64,
    accuracy_score: f64,
    cost_estimate: f64,
    steps_required: u32,
    success_rate: f64,
}

impl MetricRecord {
    /// Create a new record.
    pub fn new(
        time_taken: f64,
        complexity_score: f64,
        accuracy_score: f64,
        cost_estimate: f64,
        steps_required: u32,
        success_rate: f64,
    ) -> Self {
        Self {
            time_taken,
            complexity_score,
            accuracy_score,
            cost_estimate,
            steps_required,
            success_rate,
        }
    }

    /// Simulated elapsed seconds.
    pub fn time_taken(&self) -> f64 {
        self.time_taken
    }

    /// Difficulty rating, 0-100.
    pub fn complexity_score(&self) -> f64 {
        self.complexity_score
    }

    /// Answer quality, fraction in [0,1].
    pub fn accuracy_score(&self) -> f64 {
        self.accuracy_score
    }

    /// Monetary cost.
    pub fn cost_estimate(&self) -> f64 {
        self.cost_estimate
    }

    /// Number of discrete process steps.
    pub fn steps_required(&self) -> u32 {
        self.steps_required
    }

    /// Fraction of runs that succeed.
    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }

    /// Read one metric as a float.
    pub fn value(&self, metric: MetricKind) -> f64 {
        match metric {
            MetricKind::TimeTaken => self.time_taken,
            MetricKind::ComplexityScore => self.complexity_score,
            MetricKind::AccuracyScore => self.accuracy_score,
            MetricKind::CostEstimate => self.cost_estimate,
            MetricKind::StepsRequired => f64::from(self.steps_required),
            MetricKind::SuccessRate => self.success_rate,
        }
    }
}

/// An opaque content record supplied by a document catalog.
///
/// Simulators only count these; the content itself is never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Identifying label
    pub title: String,
    /// Category tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ContentItem {
    /// Create a new content item.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tags: Vec::new(),
        }
    }

    /// Add a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Build `count` placeholder items.
    ///
    /// Fails with [`Error::InvalidInput`] when `count` is negative.
    pub fn synthetic_batch(count: i64) -> Result<Vec<ContentItem>> {
        let count = parse_item_count(count)?;
        Ok((1..=count)
            .map(|i| ContentItem::new(format!("Document {i}")).with_tag("synthetic"))
            .collect())
    }
}

/// Validate a raw item count without materializing any items.
///
/// Fails with [`Error::InvalidInput`] when `count` is negative or does not
/// fit in `usize`.
pub fn parse_item_count(count: i64) -> Result<usize> {
    if count < 0 {
        return Err(Error::invalid_input(format!(
            "item count must be non-negative, got {count}"
        )));
    }
    usize::try_from(count)
        .map_err(|_| Error::invalid_input(format!("item count too large: {count}")))
}

/// Everything a simulator reads for one run.
///
/// Simulators only need how many items there are, so the input carries the
/// count rather than the items themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInput {
    /// Which scenario to simulate
    pub category: TaskCategory,
    /// Number of content items (drives cost and document timing)
    #[serde(default)]
    pub item_count: usize,
    /// Free-text query (query and synthesis tasks)
    #[serde(default)]
    pub query: String,
}

impl TaskInput {
    /// Create a new task input.
    pub fn new(category: TaskCategory, item_count: usize, query: impl Into<String>) -> Self {
        Self {
            category,
            item_count,
            query: query.into(),
        }
    }

    /// Create a task input over a batch of content items.
    pub fn from_items(
        category: TaskCategory,
        items: &[ContentItem],
        query: impl Into<String>,
    ) -> Self {
        Self::new(category, items.len(), query)
    }

    /// Build an input from an untyped category tag and a raw item count.
    ///
    /// This is the boundary where both [`Error::InvalidInput`] cases are
    /// caught: an unrecognized tag and a negative count.
    pub fn parse(tag: &str, item_count: i64, query: impl Into<String>) -> Result<Self> {
        let category = tag.parse()?;
        let item_count = parse_item_count(item_count)?;
        Ok(Self::new(category, item_count, query))
    }

    /// Document processing input.
    pub fn documents(item_count: usize) -> Self {
        Self::new(TaskCategory::DocumentProcessing, item_count, String::new())
    }
}
