//! Static workflow breakdown for display.
//!
//! The step table is illustrative metadata for rendering the two tracks
//! side by side. It is fixed and independent of any simulated run.

use crate::improvement::ImprovementVector;
use serde::{Deserialize, Serialize};

const TRADITIONAL_STEPS: [(&str, f64, u32); 6] = [
    ("Data Preprocessing", 2.5, 8),
    ("Model Training", 1.8, 9),
    ("System Integration", 1.2, 7),
    ("Query Processing", 1.5, 8),
    ("Knowledge Synthesis", 2.0, 9),
    ("Quality Assurance", 1.0, 6),
];
const TRADITIONAL_TOTAL_TIME: f64 = 10.0;
const TRADITIONAL_TOTAL_COMPLEXITY: u32 = 47;

const CANDIDATE_STEPS: [(&str, f64, u32); 3] = [
    ("Document Upload", 0.3, 2),
    ("Query Processing", 0.5, 1),
    ("Knowledge Synthesis", 1.0, 2),
];
const CANDIDATE_TOTAL_TIME: f64 = 1.8;
const CANDIDATE_TOTAL_COMPLEXITY: u32 = 5;

/// One display row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayStep {
    /// Step label
    pub name: String,
    /// Illustrative duration
    pub time: f64,
    /// Illustrative complexity, 1-10
    pub complexity: u32,
}

/// Rows and totals of one track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowTrack {
    /// Display rows in order
    pub steps: Vec<DisplayStep>,
    /// Listed total duration
    pub total_time: f64,
    /// Listed total complexity
    pub total_complexity: u32,
}

impl WorkflowTrack {
    fn from_table(rows: &[(&str, f64, u32)], total_time: f64, total_complexity: u32) -> Self {
        Self {
            steps: rows
                .iter()
                .map(|&(name, time, complexity)| DisplayStep {
                    name: name.to_string(),
                    time,
                    complexity,
                })
                .collect(),
            total_time,
            total_complexity,
        }
    }
}

/// Both tracks of the display table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationData {
    /// Baseline track
    pub traditional: WorkflowTrack,
    /// Candidate track
    pub candidate: WorkflowTrack,
}

impl VisualizationData {
    /// The fixed display table.
    pub fn breakdown() -> Self {
        Self {
            traditional: WorkflowTrack::from_table(
                &TRADITIONAL_STEPS,
                TRADITIONAL_TOTAL_TIME,
                TRADITIONAL_TOTAL_COMPLEXITY,
            ),
            candidate: WorkflowTrack::from_table(
                &CANDIDATE_STEPS,
                CANDIDATE_TOTAL_TIME,
                CANDIDATE_TOTAL_COMPLEXITY,
            ),
        }
    }
}

/// Display table paired with the overall improvements of a live comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowVisualization {
    /// Static step table
    pub workflows: VisualizationData,
    /// Mean improvements across categories
    pub metrics: ImprovementVector,
}
