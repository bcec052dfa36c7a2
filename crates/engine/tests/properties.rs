//! Property tests for the comparison engine.

use llm_contrast_core::{ContentItem, Error, MetricKind, TaskCategory, TaskInput};
use llm_contrast_engine::{ComparisonEngine, EngineOptions};
use proptest::prelude::*;

fn items(n: i64) -> Vec<ContentItem> {
    ContentItem::synthetic_batch(n).expect("non-negative count")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: the candidate is cheaper than the baseline in every category
    #[test]
    fn prop_candidate_cost_strictly_lower(n in 1_i64..500, seed in any::<u64>()) {
        let report = ComparisonEngine::with_options(EngineOptions::seeded(seed))
            .compare_all(&items(n), "quarterly outlook")
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        for comparison in report.comparisons() {
            let (baseline, candidate) = (comparison.baseline, comparison.candidate);
            prop_assert!(candidate.cost_estimate() < baseline.cost_estimate());
            prop_assert!(comparison.improvements.cost_savings > 0.0);
        }
    }

    /// Property: the candidate never needs more steps
    #[test]
    fn prop_candidate_steps_not_higher(n in 1_i64..200, seed in any::<u64>()) {
        let report = ComparisonEngine::with_options(EngineOptions::seeded(seed))
            .compare_all(&items(n), "")
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        for comparison in report.comparisons() {
            let (baseline, candidate) = (comparison.baseline, comparison.candidate);
            prop_assert!(candidate.steps_required() <= baseline.steps_required());
        }
    }

    /// Property: overall improvement is the unweighted mean of the categories
    #[test]
    fn prop_summary_is_mean(n in 1_i64..100, seed in any::<u64>()) {
        let report = ComparisonEngine::with_options(EngineOptions::seeded(seed))
            .compare_all(&items(n), "synthesis")
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        for metric in MetricKind::ALL {
            let values: Vec<f64> = report
                .comparisons()
                .iter()
                .map(|c| c.improvements.get(metric))
                .collect();
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            prop_assert!((report.summary.improvements.get(metric) - mean).abs() < 1e-9);
        }
    }

    /// Property: same seed and input give the same comparison
    #[test]
    fn prop_seeded_compare_is_idempotent(
        n in 1_usize..50,
        seed in any::<u64>(),
        category in 0_usize..3,
    ) {
        let engine = ComparisonEngine::with_options(EngineOptions::seeded(seed));
        let input = TaskInput::new(TaskCategory::ALL[category], n, "q");

        let first = engine.compare(&input).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let second = engine.compare(&input).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(first, second);
    }

    /// Property: a plain count and a batch of that many items compare alike
    #[test]
    fn prop_count_matches_batch(n in 1_i64..300, seed in any::<u64>()) {
        let engine = ComparisonEngine::with_options(EngineOptions::seeded(seed));
        let by_items = engine
            .compare_all(&items(n), "q")
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let by_count = engine
            .compare_count(n as usize, "q")
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(by_items.summary, by_count.summary);
    }

    /// Property: improvements are always finite
    #[test]
    fn prop_improvements_finite(n in 1_i64..1000, seed in any::<u64>()) {
        let report = ComparisonEngine::with_options(EngineOptions::seeded(seed))
            .compare_all(&items(n), "q")
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        for value in report.summary.improvements.to_array() {
            prop_assert!(value.is_finite());
        }
    }
}

#[test]
fn zero_items_empty_query_is_degenerate() {
    let err = ComparisonEngine::with_options(EngineOptions::seeded(1))
        .compare_all(&[], "")
        .unwrap_err();
    assert!(err.is_degenerate_baseline());
}

#[test]
fn zero_items_fail_on_first_zero_baseline_metric() {
    let mut rng = <rand::rngs::StdRng as rand::SeedableRng>::seed_from_u64(1);
    let engine = ComparisonEngine::new();

    for category in TaskCategory::ALL {
        let input = TaskInput::new(category, 0, "");
        let err = engine.compare_with_rng(&input, &mut rng).unwrap_err();
        match category {
            // No documents means no document time either; time is checked first.
            TaskCategory::DocumentProcessing => assert_eq!(
                err,
                Error::DegenerateBaseline { category, metric: MetricKind::TimeTaken }
            ),
            _ => assert_eq!(
                err,
                Error::DegenerateBaseline { category, metric: MetricKind::CostEstimate }
            ),
        }
    }
}

#[test]
fn negative_item_count_is_invalid_input() {
    let err = TaskInput::parse("document_processing", -5, "").unwrap_err();
    assert!(err.is_invalid_input());
}
