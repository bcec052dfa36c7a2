//! I/O operations for comparison reports.
//!
//! This module reads and writes reports on the filesystem as JSON and
//! markdown.

use crate::markdown;
use crate::result::ComparisonReport;
use llm_contrast_core::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON report file name.
pub const REPORT_JSON: &str = "comparison.json";

/// Markdown report file name.
pub const REPORT_MARKDOWN: &str = "summary.md";

/// Paths written by [`write_all_outputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    /// JSON report
    pub json: PathBuf,
    /// Markdown summary
    pub markdown: PathBuf,
}

/// Ensure the output directory exists.
pub fn ensure_output_dir(dir: impl AsRef<Path>) -> Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Write a report to a JSON file.
pub fn write_report_json(report: &ComparisonReport, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write a report as a markdown file.
pub fn write_report_markdown(report: &ComparisonReport, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, markdown::render_report(report))?;
    Ok(())
}

/// Write both the JSON report and the markdown summary into `dir`.
pub fn write_all_outputs(report: &ComparisonReport, dir: impl AsRef<Path>) -> Result<ReportPaths> {
    let dir = dir.as_ref();
    ensure_output_dir(dir)?;

    let paths = ReportPaths {
        json: dir.join(REPORT_JSON),
        markdown: dir.join(REPORT_MARKDOWN),
    };
    write_report_json(report, &paths.json)?;
    write_report_markdown(report, &paths.markdown)?;

    Ok(paths)
}

/// Read a report from a JSON file.
pub fn read_report_json(path: impl AsRef<Path>) -> Result<ComparisonReport> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ComparisonEngine, EngineOptions};
    use llm_contrast_core::{ContentItem, Error};

    fn report() -> ComparisonReport {
        ComparisonEngine::with_options(EngineOptions::seeded(3))
            .compare_all(&ContentItem::synthetic_batch(4).unwrap(), "Where are we overspending?")
            .unwrap()
    }

    #[test]
    fn test_write_all_outputs_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("output");

        let paths = write_all_outputs(&report(), &dir).unwrap();
        assert!(paths.json.exists());
        assert!(paths.markdown.exists());
        assert_eq!(paths.json, dir.join("comparison.json"));

        let summary = fs::read_to_string(&paths.markdown).unwrap();
        assert!(summary.starts_with("# Workflow Comparison"));
    }

    #[test]
    fn test_json_read_back() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("report.json");
        let original = report();

        write_report_json(&original, &path).unwrap();
        let loaded = read_report_json(&path).unwrap();
        assert_eq!(loaded.summary.total_items, 4);
        assert_eq!(loaded.seed, Some(3));
        assert_eq!(
            loaded.document_processing.baseline.cost_estimate(),
            original.document_processing.baseline.cost_estimate()
        );
        assert_eq!(loaded.query_processing.candidate_stages.len(), 1);
    }

    #[test]
    fn test_read_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = read_report_json(tmp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_read_malformed_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let err = read_report_json(&path).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
