// Copyright 2025 LLM Contrast Contributors
// SPDX-License-Identifier: Apache-2.0

//! Candidate (automated) workflow: one or two stages, low cost, high quality.

use crate::stages::{StagePlan, WorkflowProfile};
use crate::{Workflow, WorkflowSimulator};
use llm_contrast_core::{PacingMode, TaskCategory};

const DOCUMENT_PROFILE: WorkflowProfile = WorkflowProfile {
    plan: StagePlan::PerItem(&[("streamlined_processing", 0.3)]),
    cost_per_item: 50.0,
    complexity_score: 15.0,
    accuracy_score: 0.94,
    steps_required: 2,
    success_rate: 0.98,
};

// Candidate draws are already in seconds, hence scale 1.0.
const QUERY_PROFILE: WorkflowProfile = WorkflowProfile {
    plan: StagePlan::Random {
        stages: &["unified_query"],
        low: 0.1,
        high: 0.5,
        scale: 1.0,
    },
    cost_per_item: 10.0,
    complexity_score: 8.0,
    accuracy_score: 0.91,
    steps_required: 1,
    success_rate: 0.95,
};

const SYNTHESIS_PROFILE: WorkflowProfile = WorkflowProfile {
    plan: StagePlan::Random {
        stages: &["unified_synthesis"],
        low: 0.5,
        high: 1.5,
        scale: 1.0,
    },
    cost_per_item: 25.0,
    complexity_score: 12.0,
    accuracy_score: 0.89,
    steps_required: 1,
    success_rate: 0.92,
};

/// Simulator for the candidate workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Candidate {
    pacing: PacingMode,
}

impl Candidate {
    /// Create a candidate simulator with instant pacing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a candidate simulator with the given pacing.
    pub fn with_pacing(pacing: PacingMode) -> Self {
        Self { pacing }
    }
}

impl WorkflowSimulator for Candidate {
    fn workflow(&self) -> Workflow {
        Workflow::Candidate
    }

    fn pacing(&self) -> PacingMode {
        self.pacing
    }

    fn profile(&self, category: TaskCategory) -> &'static WorkflowProfile {
        match category {
            TaskCategory::DocumentProcessing => &DOCUMENT_PROFILE,
            TaskCategory::QueryProcessing => &QUERY_PROFILE,
            TaskCategory::KnowledgeSynthesis => &SYNTHESIS_PROFILE,
        }
    }
}
