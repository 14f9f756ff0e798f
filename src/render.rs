//! Static HTML rendering of a grade mapping report.

use anyhow::Result;
use tracing::info;

use crate::mapper::types::MappingReport;
use std::fs;

/// Renders a report as a standalone HTML document: the minimum and
/// maximum final grade, then a three-column band table.
pub fn render_page(report: &MappingReport) -> String {
    let mut page = String::new();

    page.push_str("<!DOCTYPE html>\n");
    page.push_str("<html lang=\"en\">\n");
    page.push_str("<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    page.push_str("<title>Final grade mapping</title>\n");
    page.push_str("</head>\n");
    page.push_str("<body>\n");
    page.push_str("<div id=\"results\">\n");

    page.push_str(&format!(
        "<p><strong>Minimum final grade:</strong> {} (rounded: {})</p>\n",
        report.min_final, report.min_final_rounded
    ));
    page.push_str(&format!(
        "<p class=\"final-grade-max-min\"><strong>Maximum final grade:</strong> {} (rounded: {})</p>\n",
        report.max_final, report.max_final_rounded
    ));
    page.push_str("<p><strong>Final grade will be:</strong></p>\n");

    page.push_str("<table>\n");
    page.push_str("<tr><th>Final Grade</th><th>from</th><th>to</th></tr>\n");
    for band in &report.bands {
        page.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            band.rounded, band.min_score, band.max_score
        ));
    }
    page.push_str("</table>\n");

    page.push_str(&format!(
        "<p>Generated at {}</p>\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    page.push_str("</div>\n");
    page.push_str("</body>\n");
    page.push_str("</html>\n");

    page
}

/// Writes the rendered page to disk.
pub fn write_page(path: &str, report: &MappingReport) -> Result<()> {
    fs::write(path, render_page(report))?;
    info!(path, "HTML page written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::report::build_report;
    use std::env;

    #[test]
    fn test_page_contains_min_max_and_table() {
        let report = build_report(10.0, 40.0, None);
        let page = render_page(&report);

        assert!(page.contains("<strong>Minimum final grade:</strong> 6 (rounded: 6)"));
        assert!(page.contains("<strong>Maximum final grade:</strong> 14 (rounded: 14)"));
        assert!(page.contains("<tr><th>Final Grade</th><th>from</th><th>to</th></tr>"));
        assert!(page.contains("<tr><td>6</td><td>0</td><td>1.2</td></tr>"));
    }

    #[test]
    fn test_page_has_one_row_per_band() {
        let report = build_report(10.0, 40.0, Some(9.5));
        let page = render_page(&report);

        let rows = page.matches("<tr><td>").count();
        assert_eq!(rows, report.bands.len());
    }

    #[test]
    fn test_write_page_creates_file() {
        let path = format!("{}/grade_mapper_test_page.html", env::temp_dir().display());
        let _ = std::fs::remove_file(&path);

        let report = build_report(10.0, 40.0, Some(9.5));
        write_page(&path, &report).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<!DOCTYPE html>"));
        assert!(content.contains("<td>9.4</td>"));

        std::fs::remove_file(&path).unwrap();
    }
}
