// Copyright 2025 LLM Contrast Contributors
// SPDX-License-Identifier: Apache-2.0

//! Relative improvement of the candidate over the baseline.
//!
//! Every metric is normalized against the baseline value:
//!
//! ```text
//! lower is better:   (baseline - candidate) / baseline * 100
//! higher is better:  (candidate - baseline) / baseline * 100
//! ```
//!
//! A zero baseline has no defined ratio and is reported as
//! [`Error::DegenerateBaseline`] instead of producing NaN or infinity.

use llm_contrast_core::{Direction, Error, MetricKind, MetricRecord, Result, TaskCategory};
use serde::{Deserialize, Serialize};

/// Percentage change of one metric, positive when the candidate is better.
///
/// Returns `None` when the baseline is zero or the ratio is not finite.
pub fn relative_improvement(direction: Direction, baseline: f64, candidate: f64) -> Option<f64> {
    if baseline == 0.0 {
        return None;
    }
    let delta = match direction {
        Direction::LowerIsBetter => baseline - candidate,
        Direction::HigherIsBetter => candidate - baseline,
    };
    let pct = delta / baseline * 100.0;
    pct.is_finite().then_some(pct)
}

/// Six percentage deltas comparing candidate to baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImprovementVector {
    /// From `time_taken`
    pub time_reduction: f64,
    /// From `complexity_score`
    pub complexity_reduction: f64,
    /// From `accuracy_score`
    pub accuracy_improvement: f64,
    /// From `cost_estimate`
    pub cost_savings: f64,
    /// From `steps_required`
    pub steps_reduction: f64,
    /// From `success_rate`
    pub success_rate_improvement: f64,
}

impl ImprovementVector {
    /// Compare two records of the same category.
    ///
    /// Metrics are checked in [`MetricKind::ALL`] order; the first zero
    /// baseline aborts with [`Error::DegenerateBaseline`].
    pub fn between(
        category: TaskCategory,
        baseline: &MetricRecord,
        candidate: &MetricRecord,
    ) -> Result<Self> {
        let mut values = [0.0; 6];
        for (slot, metric) in values.iter_mut().zip(MetricKind::ALL) {
            *slot = relative_improvement(
                metric.direction(),
                baseline.value(metric),
                candidate.value(metric),
            )
            .ok_or_else(|| Error::degenerate(category, metric))?;
        }
        Ok(Self::from_array(values))
    }

    /// Unweighted component-wise mean. `None` for an empty slice.
    pub fn mean(vectors: &[ImprovementVector]) -> Option<Self> {
        if vectors.is_empty() {
            return None;
        }
        let n = vectors.len() as f64;
        let mut sums = [0.0; 6];
        for vector in vectors {
            for (sum, value) in sums.iter_mut().zip(vector.to_array()) {
                *sum += value;
            }
        }
        Some(Self::from_array(sums.map(|sum| sum / n)))
    }

    /// Improvement for one metric.
    pub fn get(&self, metric: MetricKind) -> f64 {
        match metric {
            MetricKind::TimeTaken => self.time_reduction,
            MetricKind::ComplexityScore => self.complexity_reduction,
            MetricKind::AccuracyScore => self.accuracy_improvement,
            MetricKind::CostEstimate => self.cost_savings,
            MetricKind::StepsRequired => self.steps_reduction,
            MetricKind::SuccessRate => self.success_rate_improvement,
        }
    }

    /// Components in [`MetricKind::ALL`] order.
    pub fn to_array(&self) -> [f64; 6] {
        MetricKind::ALL.map(|metric| self.get(metric))
    }

    fn from_array(values: [f64; 6]) -> Self {
        Self {
            time_reduction: values[0],
            complexity_reduction: values[1],
            accuracy_improvement: values[2],
            cost_savings: values[3],
            steps_reduction: values[4],
            success_rate_improvement: values[5],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> MetricRecord {
        MetricRecord::new(2.75, 85.0, 0.72, 2500.0, 12, 0.65)
    }

    fn candidate() -> MetricRecord {
        MetricRecord::new(0.15, 15.0, 0.94, 250.0, 2, 0.98)
    }

    #[test]
    fn test_lower_is_better() {
        let pct = relative_improvement(Direction::LowerIsBetter, 2500.0, 250.0).unwrap();
        assert!((pct - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_higher_is_better() {
        let pct = relative_improvement(Direction::HigherIsBetter, 0.68, 0.91).unwrap();
        assert!((pct - 33.82352941176471).abs() < 1e-9);
    }

    #[test]
    fn test_regression_is_negative() {
        let pct = relative_improvement(Direction::LowerIsBetter, 10.0, 15.0).unwrap();
        assert!((pct + 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_baseline_is_undefined() {
        assert_eq!(relative_improvement(Direction::LowerIsBetter, 0.0, 0.0), None);
        assert_eq!(relative_improvement(Direction::HigherIsBetter, 0.0, 0.5), None);
    }

    #[test]
    fn test_between_document_records() {
        let v = ImprovementVector::between(
            TaskCategory::DocumentProcessing,
            &baseline(),
            &candidate(),
        )
        .unwrap();

        assert!((v.cost_savings - 90.0).abs() < 1e-9);
        assert!((v.steps_reduction - 1000.0 / 12.0).abs() < 1e-9);
        assert!((v.complexity_reduction - 70.0 / 85.0 * 100.0).abs() < 1e-9);
        assert!((v.accuracy_improvement - 0.22 / 0.72 * 100.0).abs() < 1e-9);
        assert!(v.success_rate_improvement > 0.0);
    }

    #[test]
    fn test_between_reports_first_zero_metric() {
        let zero_cost = MetricRecord::new(1.0, 78.0, 0.68, 0.0, 6, 0.58);
        let free = MetricRecord::new(0.2, 8.0, 0.91, 0.0, 1, 0.95);

        let err = ImprovementVector::between(TaskCategory::QueryProcessing, &zero_cost, &free)
            .unwrap_err();
        assert_eq!(
            err,
            Error::DegenerateBaseline {
                category: TaskCategory::QueryProcessing,
                metric: MetricKind::CostEstimate,
            }
        );
    }

    fn document_vector() -> ImprovementVector {
        ImprovementVector::between(TaskCategory::DocumentProcessing, &baseline(), &candidate())
            .unwrap()
    }

    #[test]
    fn test_mean_is_unweighted() {
        let a = document_vector();
        let mut b = a;
        b.cost_savings = 50.0;
        let mut c = a;
        c.cost_savings = 10.0;

        let mean = ImprovementVector::mean(&[a, b, c]).unwrap();
        assert!((mean.cost_savings - 50.0).abs() < 1e-9);
        assert!((mean.time_reduction - a.time_reduction).abs() < 1e-9);
        assert!(ImprovementVector::mean(&[]).is_none());
    }

    #[test]
    fn test_get_matches_fields() {
        let v = document_vector();
        assert_eq!(v.get(MetricKind::CostEstimate), v.cost_savings);
        assert_eq!(v.to_array()[5], v.success_rate_improvement);
    }
}
