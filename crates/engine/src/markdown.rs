//! Markdown output for comparison reports.
//!
//! Rendering goes through [`fmt::Display`] wrappers so every write is
//! propagated with `?`.

use crate::result::{CategoryComparison, ComparisonReport};
use crate::visualization::{VisualizationData, WorkflowTrack};
use llm_contrast_core::MetricKind;
use std::fmt;

/// Generate a markdown summary of a report.
pub fn render_report(report: &ComparisonReport) -> String {
    ReportMarkdown(report).to_string()
}

/// Generate a markdown table of the static workflow breakdown.
pub fn render_visualization(data: &VisualizationData) -> String {
    VisualizationMarkdown(data).to_string()
}

/// Displays a [`ComparisonReport`] as markdown.
pub struct ReportMarkdown<'a>(pub &'a ComparisonReport);

impl fmt::Display for ReportMarkdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let summary = &report.summary;

        writeln!(f, "# Workflow Comparison")?;
        writeln!(f)?;
        writeln!(f, "Generated: {}", report.generated_at.to_rfc3339())?;
        if let Some(seed) = report.seed {
            writeln!(f, "Seed: {seed}")?;
        }
        writeln!(f, "Items: {}", summary.total_items)?;
        if !summary.query.is_empty() {
            writeln!(f, "Query: {}", summary.query)?;
        }
        writeln!(f)?;

        for comparison in report.comparisons() {
            write_category(f, comparison)?;
        }

        writeln!(f, "## Overall")?;
        writeln!(f)?;
        writeln!(f, "| Improvement | Mean |")?;
        writeln!(f, "|-------------|------|")?;
        for metric in MetricKind::ALL {
            writeln!(
                f,
                "| {} | {:+.2}% |",
                metric.improvement_label(),
                summary.improvements.get(metric)
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Total cost: baseline ${:.2}, candidate ${:.2}",
            summary.baseline_total_cost, summary.candidate_total_cost
        )?;
        writeln!(
            f,
            "Total time: baseline {:.2}s, candidate {:.2}s (saved {:.2}s)",
            summary.baseline_total_time, summary.candidate_total_time, summary.total_time_savings
        )?;

        Ok(())
    }
}

fn write_category(f: &mut fmt::Formatter<'_>, comparison: &CategoryComparison) -> fmt::Result {
    writeln!(f, "## {}", comparison.category.display_name())?;
    writeln!(f)?;
    writeln!(f, "| Metric | Baseline | Candidate | Improvement |")?;
    writeln!(f, "|--------|----------|-----------|-------------|")?;
    for metric in MetricKind::ALL {
        writeln!(
            f,
            "| {} | {:.2} | {:.2} | {:+.2}% |",
            metric,
            comparison.baseline.value(metric),
            comparison.candidate.value(metric),
            comparison.improvements.get(metric)
        )?;
    }
    writeln!(f)
}

/// Displays [`VisualizationData`] as markdown.
pub struct VisualizationMarkdown<'a>(pub &'a VisualizationData);

impl fmt::Display for VisualizationMarkdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Workflow Breakdown")?;
        writeln!(f)?;
        write_track(f, "Traditional", &self.0.traditional)?;
        write_track(f, "Candidate", &self.0.candidate)
    }
}

fn write_track(f: &mut fmt::Formatter<'_>, title: &str, track: &WorkflowTrack) -> fmt::Result {
    writeln!(f, "## {title}")?;
    writeln!(f)?;
    writeln!(f, "| Step | Time | Complexity |")?;
    writeln!(f, "|------|------|------------|")?;
    for step in &track.steps {
        writeln!(f, "| {} | {:.1} | {} |", step.name, step.time, step.complexity)?;
    }
    writeln!(
        f,
        "| **Total** | **{:.1}** | **{}** |",
        track.total_time, track.total_complexity
    )?;
    writeln!(f)
}
