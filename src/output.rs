//! Output formatting and persistence for computed grade mappings.
//!
//! Supports console text rendering, JSON serialization, and CSV append.

use anyhow::Result;
use tracing::debug;

use crate::mapper::types::{GradeMapping, MappingReport};
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// Logs a report using Rust's debug pretty-print format.
pub fn print_pretty(report: &MappingReport) {
    debug!("{:#?}", report);
}

/// Renders the batch report: minimum and maximum final grade followed
/// by one line per grade band.
pub fn render_text(report: &MappingReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Minimum final grade: {} (rounded: {})\n",
        report.min_final, report.min_final_rounded
    ));
    out.push_str(&format!(
        "Maximum final grade: {} (rounded: {})\n\n",
        report.max_final, report.max_final_rounded
    ));

    out.push_str("Final grade will be\n");
    for band in &report.bands {
        if band.min_score != band.max_score {
            out.push_str(&format!(
                "{}\tfrom {} to {}\n",
                band.rounded, band.min_score, band.max_score
            ));
        } else {
            out.push_str(&format!("{}\tif {}\n", band.rounded, band.min_score));
        }
    }

    out
}

/// Serializes a report as pretty-printed JSON.
pub fn render_json(report: &MappingReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Appends the exam-to-final rows of a [`GradeMapping`] to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_outcomes(path: &str, mapping: &GradeMapping) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV outcomes");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    for outcome in &mapping.outcomes {
        writer.serialize(outcome)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::aggregate::compute_mapping;
    use crate::mapper::report::build_report;
    use crate::mapper::scores::SCORE_COUNT;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        let report = build_report(10.0, 40.0, None);
        print_pretty(&report);
    }

    #[test]
    fn test_render_text_reports_min_and_max() {
        let report = build_report(10.0, 40.0, None);
        let text = render_text(&report);

        assert!(text.contains("Minimum final grade: 6 (rounded: 6)"));
        assert!(text.contains("Maximum final grade: 14 (rounded: 14)"));
        assert!(text.contains("6\tfrom 0 to 1.2"));
    }

    #[test]
    fn test_render_text_single_score_band_uses_if() {
        let report = build_report(10.0, 40.0, Some(20.0));
        let text = render_text(&report);

        assert!(text.contains("14\tif 20"));
        assert!(text.contains("0\tfrom 0 to 19.9"));
    }

    #[test]
    fn test_render_json_round_trips_fields() {
        let report = build_report(10.0, 40.0, Some(9.5));
        let json = render_json(&report).unwrap();

        assert!(json.contains("\"min_exam_grade\": 9.5"));
        assert!(json.contains("\"bands\""));
        assert!(json.contains("\"max_final\": 14.0"));
    }

    #[test]
    fn test_append_outcomes_creates_file() {
        let path = temp_path("grade_mapper_test_create.csv");
        let _ = fs::remove_file(&path); // clean up any prior run

        let mapping = compute_mapping(10.0, 40.0);
        append_outcomes(&path, &mapping).unwrap();

        assert!(Path::new(&path).exists());
        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), SCORE_COUNT + 1);
        assert_eq!(lines[0], "exam_score,final_grade");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_append_outcomes_writes_header_once() {
        let path = temp_path("grade_mapper_test_header.csv");
        let _ = fs::remove_file(&path);

        let mapping = compute_mapping(10.0, 40.0);
        append_outcomes(&path, &mapping).unwrap();
        append_outcomes(&path, &mapping).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header_count = content
            .lines()
            .filter(|l| l.contains("exam_score"))
            .count();
        assert_eq!(header_count, 1);
        assert_eq!(content.lines().count(), 2 * SCORE_COUNT + 1);

        fs::remove_file(&path).unwrap();
    }
}
