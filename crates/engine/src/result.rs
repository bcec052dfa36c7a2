//! Comparison result types.
//!
//! These are the nested structures handed to the presentation layer. They
//! are built fresh per engine call and never persisted by the engine.

use crate::improvement::ImprovementVector;
use chrono::{DateTime, Utc};
use llm_contrast_core::{Error, MetricRecord, Result, TaskCategory};
use llm_contrast_simulators::StageTiming;
use serde::{Deserialize, Serialize};

/// Baseline and candidate runs of one category with their improvement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryComparison {
    /// Category compared
    pub category: TaskCategory,
    /// Baseline measurements
    pub baseline: MetricRecord,
    /// Candidate measurements
    pub candidate: MetricRecord,
    /// Percentage improvement per metric
    pub improvements: ImprovementVector,
    /// Baseline stage timings
    #[serde(default)]
    pub baseline_stages: Vec<StageTiming>,
    /// Candidate stage timings
    #[serde(default)]
    pub candidate_stages: Vec<StageTiming>,
}

/// Cross-category aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallSummary {
    /// Unweighted mean of each improvement across categories
    pub improvements: ImprovementVector,
    /// Number of content items in every category
    pub total_items: usize,
    /// Query used for query and synthesis tasks
    pub query: String,
    /// Sum of baseline costs
    pub baseline_total_cost: f64,
    /// Sum of candidate costs
    pub candidate_total_cost: f64,
    /// Sum of baseline times
    pub baseline_total_time: f64,
    /// Sum of candidate times
    pub candidate_total_time: f64,
    /// `baseline_total_time - candidate_total_time`
    pub total_time_savings: f64,
}

impl OverallSummary {
    /// Aggregate per-category comparisons.
    ///
    /// Fails with [`Error::InvalidInput`] when there is nothing to average.
    pub fn aggregate(
        comparisons: &[CategoryComparison],
        total_items: usize,
        query: impl Into<String>,
    ) -> Result<Self> {
        let vectors: Vec<ImprovementVector> =
            comparisons.iter().map(|c| c.improvements).collect();
        let improvements = ImprovementVector::mean(&vectors)
            .ok_or_else(|| Error::invalid_input("no comparisons to aggregate"))?;

        let baseline_total_cost: f64 =
            comparisons.iter().map(|c| c.baseline.cost_estimate()).sum();
        let candidate_total_cost: f64 =
            comparisons.iter().map(|c| c.candidate.cost_estimate()).sum();
        let baseline_total_time: f64 = comparisons.iter().map(|c| c.baseline.time_taken()).sum();
        let candidate_total_time: f64 =
            comparisons.iter().map(|c| c.candidate.time_taken()).sum();

        Ok(Self {
            improvements,
            total_items,
            query: query.into(),
            baseline_total_cost,
            candidate_total_cost,
            baseline_total_time,
            candidate_total_time,
            total_time_savings: baseline_total_time - candidate_total_time,
        })
    }
}

/// Full result of comparing every category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Document processing comparison
    pub document_processing: CategoryComparison,
    /// Query processing comparison
    pub query_processing: CategoryComparison,
    /// Knowledge synthesis comparison
    pub knowledge_synthesis: CategoryComparison,
    /// Cross-category aggregate
    pub summary: OverallSummary,
    /// Seed of the duration generator, if one was fixed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
}

impl ComparisonReport {
    /// Per-category comparisons in canonical order.
    pub fn comparisons(&self) -> [&CategoryComparison; 3] {
        [
            &self.document_processing,
            &self.query_processing,
            &self.knowledge_synthesis,
        ]
    }

    /// Comparison for one category.
    pub fn get(&self, category: TaskCategory) -> &CategoryComparison {
        match category {
            TaskCategory::DocumentProcessing => &self.document_processing,
            TaskCategory::QueryProcessing => &self.query_processing,
            TaskCategory::KnowledgeSynthesis => &self.knowledge_synthesis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comparison(
        category: TaskCategory,
        baseline_cost: f64,
        candidate_cost: f64,
    ) -> CategoryComparison {
        let baseline = MetricRecord::new(2.0, 80.0, 0.6, baseline_cost, 6, 0.5);
        let candidate = MetricRecord::new(0.5, 10.0, 0.9, candidate_cost, 1, 0.9);
        CategoryComparison {
            category,
            baseline,
            candidate,
            improvements: ImprovementVector::between(category, &baseline, &candidate).unwrap(),
            baseline_stages: Vec::new(),
            candidate_stages: Vec::new(),
        }
    }

    #[test]
    fn test_aggregate_totals() {
        let comparisons = vec![
            comparison(TaskCategory::DocumentProcessing, 500.0, 50.0),
            comparison(TaskCategory::QueryProcessing, 100.0, 10.0),
            comparison(TaskCategory::KnowledgeSynthesis, 800.0, 25.0),
        ];

        let summary = OverallSummary::aggregate(&comparisons, 1, "q").unwrap();
        assert_eq!(summary.baseline_total_cost, 1400.0);
        assert_eq!(summary.candidate_total_cost, 85.0);
        assert!((summary.baseline_total_time - 6.0).abs() < 1e-12);
        assert!((summary.candidate_total_time - 1.5).abs() < 1e-12);
        assert!((summary.total_time_savings - 4.5).abs() < 1e-12);
        assert_eq!(summary.total_items, 1);
        assert_eq!(summary.query, "q");
    }

    #[test]
    fn test_aggregate_mean() {
        let comparisons = vec![
            comparison(TaskCategory::DocumentProcessing, 500.0, 50.0),
            comparison(TaskCategory::QueryProcessing, 100.0, 10.0),
            comparison(TaskCategory::KnowledgeSynthesis, 800.0, 25.0),
        ];
        let summary = OverallSummary::aggregate(&comparisons, 1, "").unwrap();

        let expected = (90.0 + 90.0 + 96.875) / 3.0;
        assert!((summary.improvements.cost_savings - expected).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_empty_is_invalid() {
        let err = OverallSummary::aggregate(&[], 0, "").unwrap_err();
        assert!(err.is_invalid_input());
    }
}
