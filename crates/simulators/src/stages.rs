// Copyright 2025 LLM Contrast Contributors
// SPDX-License-Identifier: Apache-2.0

//! Stage plans and the shared profile runner.
//!
//! A [`WorkflowProfile`] fixes everything about one workflow for one
//! category: how its stages are timed, what each item costs, and the
//! quality constants reported in the resulting record.

use crate::pacing;
use llm_contrast_core::{MetricRecord, PacingMode, TaskInput};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Seconds per simulated time unit.
pub const TIME_UNIT: f64 = 0.1;

/// How a profile's stage durations are derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StagePlan {
    /// Each stage lasts `factor × TIME_UNIT × item_count` seconds.
    PerItem(&'static [(&'static str, f64)]),
    /// Each stage draws uniformly from `[low, high]` and multiplies by `scale`.
    Random {
        /// Stage names, drawn in this order
        stages: &'static [&'static str],
        /// Lower bound of the draw
        low: f64,
        /// Upper bound of the draw
        high: f64,
        /// Multiplier applied to each draw
        scale: f64,
    },
}

/// Fixed behaviour of one workflow on one task category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkflowProfile {
    /// Stage timing
    pub plan: StagePlan,
    /// Cost charged per content item
    pub cost_per_item: f64,
    /// Reported complexity score
    pub complexity_score: f64,
    /// Reported accuracy
    pub accuracy_score: f64,
    /// Reported step count
    pub steps_required: u32,
    /// Reported success rate
    pub success_rate: f64,
}

/// Simulated duration of one named stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageTiming {
    /// Stage name
    pub name: String,
    /// Simulated seconds
    pub seconds: f64,
}

/// Time each stage of `plan` for `item_count` items.
///
/// Random plans consume one draw per stage, in stage order.
pub fn time_stages(
    plan: &StagePlan,
    item_count: usize,
    rng: &mut dyn RngCore,
) -> Vec<StageTiming> {
    match *plan {
        StagePlan::PerItem(stages) => stages
            .iter()
            .map(|&(name, factor)| StageTiming {
                name: name.to_string(),
                seconds: factor * TIME_UNIT * item_count as f64,
            })
            .collect(),
        StagePlan::Random {
            stages,
            low,
            high,
            scale,
        } => stages
            .iter()
            .map(|&name| StageTiming {
                name: name.to_string(),
                seconds: rng.gen_range(low..=high) * scale,
            })
            .collect(),
    }
}

impl WorkflowProfile {
    /// Run the profile against an input, returning the record and its stages.
    pub fn run(
        &self,
        input: &TaskInput,
        rng: &mut dyn RngCore,
        pacing: PacingMode,
    ) -> (MetricRecord, Vec<StageTiming>) {
        let item_count = input.item_count;
        let stages = time_stages(&self.plan, item_count, rng);

        for stage in &stages {
            pacing::pause(pacing, &stage.name, stage.seconds);
        }

        let time_taken: f64 = stages.iter().map(|s| s.seconds).sum();
        let cost_estimate = self.cost_per_item * item_count as f64;

        debug!(
            category = %input.category,
            item_count,
            stages = stages.len(),
            time_taken,
            cost_estimate,
            "Simulated workflow profile"
        );

        let record = MetricRecord::new(
            time_taken,
            self.complexity_score,
            self.accuracy_score,
            cost_estimate,
            self.steps_required,
            self.success_rate,
        );

        (record, stages)
    }
}
