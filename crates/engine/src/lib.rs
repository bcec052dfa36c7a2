// Copyright 2025 LLM Contrast Contributors
// SPDX-License-Identifier: Apache-2.0

//! Comparison engine for LLM Contrast.
//!
//! The engine runs the [`Baseline`] and [`Candidate`] simulators for each
//! task category, derives an [`ImprovementVector`] per category and
//! averages them into an [`OverallSummary`].
//!
//! # Quick Start
//!
//! ```
//! use llm_contrast_core::ContentItem;
//! use llm_contrast_engine::{ComparisonEngine, EngineOptions};
//!
//! let engine = ComparisonEngine::with_options(EngineOptions::seeded(42));
//! let items = ContentItem::synthetic_batch(5).unwrap();
//! let report = engine.compare_all(&items, "What are our top risks?").unwrap();
//!
//! assert_eq!(report.document_processing.baseline.cost_estimate(), 2500.0);
//! assert!((report.document_processing.improvements.cost_savings - 90.0).abs() < 1e-9);
//! ```
//!
//! # Modules
//!
//! - [`improvement`] - relative improvement math
//! - [`result`] - comparison result types
//! - [`visualization`] - static display table
//! - [`io`] - reading and writing reports
//! - [`markdown`] - markdown rendering

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod improvement;
pub mod io;
pub mod markdown;
pub mod result;
pub mod visualization;

pub use improvement::ImprovementVector;
pub use result::{CategoryComparison, ComparisonReport, OverallSummary};
pub use visualization::{VisualizationData, WorkflowVisualization};

use chrono::Utc;
use llm_contrast_core::{
    ContentItem, ContrastConfig, PacingMode, Result, TaskCategory, TaskInput,
};
use llm_contrast_simulators::{Baseline, Candidate, WorkflowSimulator};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;

/// How the engine draws durations and paces stages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Fixed seed; each call starts a fresh generator from it
    pub seed: Option<u64>,
    /// Stage pacing for both simulators
    pub pacing: PacingMode,
}

impl EngineOptions {
    /// Options with a fixed seed and instant pacing.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            pacing: PacingMode::Instant,
        }
    }
}

impl From<&ContrastConfig> for EngineOptions {
    fn from(config: &ContrastConfig) -> Self {
        Self {
            seed: config.seed,
            pacing: config.pacing,
        }
    }
}

/// Orchestrates one baseline and one candidate simulator.
///
/// The engine holds no mutable state; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct ComparisonEngine {
    baseline: Baseline,
    candidate: Candidate,
    options: EngineOptions,
}

impl ComparisonEngine {
    /// Create an engine drawing from entropy with instant pacing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with explicit options.
    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            baseline: Baseline::with_pacing(options.pacing),
            candidate: Candidate::with_pacing(options.pacing),
            options,
        }
    }

    /// Create an engine from loaded configuration.
    pub fn from_config(config: &ContrastConfig) -> Self {
        Self::with_options(EngineOptions::from(config))
    }

    /// Options in effect.
    pub fn options(&self) -> EngineOptions {
        self.options
    }

    fn rng(&self) -> StdRng {
        match self.options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Compare both workflows on one category.
    ///
    /// With a fixed seed, repeated calls on the same input return equal
    /// results.
    pub fn compare(&self, input: &TaskInput) -> Result<CategoryComparison> {
        self.compare_with_rng(input, &mut self.rng())
    }

    /// Compare both workflows on one category using the given generator.
    ///
    /// The baseline draws first, then the candidate.
    pub fn compare_with_rng(
        &self,
        input: &TaskInput,
        rng: &mut dyn RngCore,
    ) -> Result<CategoryComparison> {
        let baseline = self.baseline.trace(input, rng);
        let candidate = self.candidate.trace(input, rng);
        let improvements =
            ImprovementVector::between(input.category, &baseline.record, &candidate.record)?;

        debug!(
            category = %input.category,
            items = input.item_count,
            cost_savings = improvements.cost_savings,
            time_reduction = improvements.time_reduction,
            "Compared workflows"
        );

        Ok(CategoryComparison {
            category: input.category,
            baseline: baseline.record,
            candidate: candidate.record,
            improvements,
            baseline_stages: baseline.stages,
            candidate_stages: candidate.stages,
        })
    }

    /// Compare every category and aggregate the results.
    ///
    /// Document processing reads `items`; query processing and knowledge
    /// synthesis read `query` and scale cost by `items`. The first failing
    /// category aborts the whole call.
    pub fn compare_all(&self, items: &[ContentItem], query: &str) -> Result<ComparisonReport> {
        self.compare_count(items.len(), query)
    }

    /// Compare every category for `item_count` items.
    ///
    /// Only the count matters to the simulators, so callers holding a raw
    /// count never need to build the items.
    pub fn compare_count(&self, item_count: usize, query: &str) -> Result<ComparisonReport> {
        self.compare_count_with_rng(item_count, query, &mut self.rng())
    }

    /// Compare every category using the given generator.
    pub fn compare_all_with_rng(
        &self,
        items: &[ContentItem],
        query: &str,
        rng: &mut dyn RngCore,
    ) -> Result<ComparisonReport> {
        self.compare_count_with_rng(items.len(), query, rng)
    }

    /// Compare every category for `item_count` items using the given generator.
    pub fn compare_count_with_rng(
        &self,
        item_count: usize,
        query: &str,
        rng: &mut dyn RngCore,
    ) -> Result<ComparisonReport> {
        let document_processing = self.compare_with_rng(&TaskInput::documents(item_count), rng)?;
        let query_processing = self.compare_with_rng(
            &TaskInput::new(TaskCategory::QueryProcessing, item_count, query),
            rng,
        )?;
        let knowledge_synthesis = self.compare_with_rng(
            &TaskInput::new(TaskCategory::KnowledgeSynthesis, item_count, query),
            rng,
        )?;

        let summary = OverallSummary::aggregate(
            &[
                document_processing.clone(),
                query_processing.clone(),
                knowledge_synthesis.clone(),
            ],
            item_count,
            query,
        )?;

        debug!(
            items = item_count,
            baseline_total_cost = summary.baseline_total_cost,
            candidate_total_cost = summary.candidate_total_cost,
            total_time_savings = summary.total_time_savings,
            "Aggregated comparison"
        );

        Ok(ComparisonReport {
            document_processing,
            query_processing,
            knowledge_synthesis,
            summary,
            seed: self.options.seed,
            generated_at: Utc::now(),
        })
    }

    /// The fixed display table; never derived from simulator output.
    pub fn visualization_breakdown(&self) -> VisualizationData {
        VisualizationData::breakdown()
    }

    /// Display table together with the overall improvements of a fresh run.
    pub fn workflow_visualization(
        &self,
        items: &[ContentItem],
        query: &str,
    ) -> Result<WorkflowVisualization> {
        let report = self.compare_all(items, query)?;
        Ok(WorkflowVisualization {
            workflows: self.visualization_breakdown(),
            metrics: report.summary.improvements,
        })
    }
}
