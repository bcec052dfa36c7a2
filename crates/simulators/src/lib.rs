// Copyright 2025 LLM Contrast Contributors
// SPDX-License-Identifier: Apache-2.0

//! Workflow simulators for LLM Contrast.
//!
//! Two variants share one capability, [`WorkflowSimulator`]:
//!
//! - [`Baseline`] - the manual / legacy analysis process
//! - [`Candidate`] - the automated alternative
//!
//! Simulators are stateless. Randomness comes from the caller so a seeded
//! generator gives reproducible records.
//!
//! # Example
//!
//! ```
//! use llm_contrast_core::TaskInput;
//! use llm_contrast_simulators::{Baseline, WorkflowSimulator};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let record = Baseline::new().simulate(&TaskInput::documents(5), &mut rng);
//! assert_eq!(record.cost_estimate(), 2500.0);
//! ```

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod baseline;
pub mod candidate;
pub mod pacing;
pub mod stages;

pub use baseline::Baseline;
pub use candidate::Candidate;
pub use stages::{StagePlan, StageTiming, WorkflowProfile};

use llm_contrast_core::{MetricRecord, PacingMode, TaskCategory, TaskInput};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which track a simulator represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Workflow {
    /// Manual / legacy process
    Baseline,
    /// Automated process
    Candidate,
}

impl fmt::Display for Workflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Baseline => f.write_str("baseline"),
            Self::Candidate => f.write_str("candidate"),
        }
    }
}

/// A simulated run together with its stage breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationTrace {
    /// Track that produced the run
    pub workflow: Workflow,
    /// Category that was simulated
    pub category: TaskCategory,
    /// Resulting measurements
    pub record: MetricRecord,
    /// Stage durations in execution order; they sum to `record.time_taken()`
    pub stages: Vec<StageTiming>,
}

/// Common contract of the baseline and candidate workflows.
pub trait WorkflowSimulator {
    /// Track this simulator represents.
    fn workflow(&self) -> Workflow;

    /// Whether stages are also waited on in real time.
    fn pacing(&self) -> PacingMode;

    /// Fixed profile for a category.
    fn profile(&self, category: TaskCategory) -> &'static WorkflowProfile;

    /// Simulate a run and keep the per-stage timings.
    fn trace(&self, input: &TaskInput, rng: &mut dyn RngCore) -> SimulationTrace {
        let (record, stages) = self.profile(input.category).run(input, rng, self.pacing());
        SimulationTrace {
            workflow: self.workflow(),
            category: input.category,
            record,
            stages,
        }
    }

    /// Simulate a run.
    fn simulate(&self, input: &TaskInput, rng: &mut dyn RngCore) -> MetricRecord {
        self.trace(input, rng).record
    }
}
