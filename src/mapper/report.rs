use chrono::Utc;

use crate::mapper::aggregate::{compute_mapping, final_grade_for};
use crate::mapper::crop::crop_below_min;
use crate::mapper::scores::round_grade;
use crate::mapper::types::MappingReport;

/// Computes the mapping for the given inputs and wraps it in a report
/// envelope ready for rendering.
///
/// When a minimum passing exam grade is set, the band table is cropped
/// and the reported minimum final grade is the one earned at that
/// minimum score rather than at 0.0.
pub fn build_report(
    freq_grade: f64,
    exam_percentage: f64,
    min_exam_grade: Option<f64>,
) -> MappingReport {
    let mapping = compute_mapping(freq_grade, exam_percentage);

    let min_final = match min_exam_grade {
        Some(min) => final_grade_for(freq_grade, exam_percentage, min),
        None => mapping.min_final(),
    };
    let max_final = mapping.max_final();

    let bands = match min_exam_grade {
        Some(min) => crop_below_min(&mapping.bands, min),
        None => mapping.bands,
    };

    MappingReport {
        generated_at: Utc::now(),
        freq_grade,
        exam_percentage,
        min_exam_grade,
        min_final,
        min_final_rounded: round_grade(min_final),
        max_final,
        max_final_rounded: round_grade(max_final),
        bands,
    }
}
