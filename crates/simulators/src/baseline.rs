// Copyright 2025 LLM Contrast Contributors
// SPDX-License-Identifier: Apache-2.0

//! Baseline (manual / legacy) workflow.
//!
//! Many stages, high per-item cost, lower quality.

use crate::stages::{StagePlan, WorkflowProfile, TIME_UNIT};
use crate::{Workflow, WorkflowSimulator};
use llm_contrast_core::{PacingMode, TaskCategory};

/// Stages of a baseline query run.
pub const QUERY_STAGES: [&str; 6] = [
    "query_parsing",
    "document_retrieval",
    "relevance_scoring",
    "context_extraction",
    "answer_generation",
    "result_ranking",
];

/// Stages of a baseline synthesis run.
pub const SYNTHESIS_STAGES: [&str; 6] = [
    "cross_document_analysis",
    "semantic_similarity_computation",
    "knowledge_graph_construction",
    "inference_engine_processing",
    "synthesis_generation",
    "quality_assurance",
];

const DOCUMENT_PROFILE: WorkflowProfile = WorkflowProfile {
    plan: StagePlan::PerItem(&[
        ("data_preprocessing", 2.5),
        ("model_training", 1.8),
        ("system_integration", 1.2),
    ]),
    cost_per_item: 500.0,
    complexity_score: 85.0,
    accuracy_score: 0.72,
    steps_required: 12,
    success_rate: 0.65,
};

const QUERY_PROFILE: WorkflowProfile = WorkflowProfile {
    plan: StagePlan::Random {
        stages: &QUERY_STAGES,
        low: 0.5,
        high: 2.0,
        scale: TIME_UNIT,
    },
    cost_per_item: 100.0,
    complexity_score: 78.0,
    accuracy_score: 0.68,
    steps_required: QUERY_STAGES.len() as u32,
    success_rate: 0.58,
};

const SYNTHESIS_PROFILE: WorkflowProfile = WorkflowProfile {
    plan: StagePlan::Random {
        stages: &SYNTHESIS_STAGES,
        low: 1.0,
        high: 3.0,
        scale: TIME_UNIT,
    },
    cost_per_item: 800.0,
    complexity_score: 92.0,
    accuracy_score: 0.61,
    steps_required: SYNTHESIS_STAGES.len() as u32,
    success_rate: 0.45,
};

/// Simulator for the baseline workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Baseline {
    pacing: PacingMode,
}

impl Baseline {
    /// Create a baseline simulator with instant pacing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a baseline simulator with the given pacing.
    pub fn with_pacing(pacing: PacingMode) -> Self {
        Self { pacing }
    }
}

impl WorkflowSimulator for Baseline {
    fn workflow(&self) -> Workflow {
        Workflow::Baseline
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
