use crate::mapper::scores::{SCORE_COUNT, possible_exam_scores, round3, round_grade};
use crate::mapper::types::{ExamOutcome, GradeBand, GradeMapping};

/// Exact final grade for a single exam score, rounded to 3 decimals.
///
/// The frequency weight is the complement of the exam weight:
/// `final = freq_grade * (100 - w)/100 + exam_score * w/100`.
pub fn final_grade_for(freq_grade: f64, exam_percentage: f64, exam_score: f64) -> f64 {
    let freq_percentage = 100.0 - exam_percentage;
    round3(freq_grade * freq_percentage / 100.0 + exam_score * exam_percentage / 100.0)
}

/// Maps every possible exam score to its final grade and groups scores
/// into bands by rounded final grade.
///
/// Scores are scanned in ascending order, so the band of the current
/// rounded grade is always the last one opened: a score either extends
/// it or opens the next band. The returned bands partition the score
/// grid into contiguous, non-overlapping, ascending ranges.
pub fn compute_mapping(freq_grade: f64, exam_percentage: f64) -> GradeMapping {
    let mut outcomes = Vec::with_capacity(SCORE_COUNT);
    let mut bands: Vec<GradeBand> = Vec::new();

    for exam_score in possible_exam_scores() {
        let final_grade = final_grade_for(freq_grade, exam_percentage, exam_score);
        let rounded = round_grade(final_grade);

        match bands.last_mut() {
            Some(band) if band.rounded == rounded => band.max_score = exam_score,
            _ => bands.push(GradeBand {
                rounded,
                min_score: exam_score,
                max_score: exam_score,
            }),
        }

        outcomes.push(ExamOutcome {
            exam_score,
            final_grade,
        });
    }

    GradeMapping { outcomes, bands }
}
