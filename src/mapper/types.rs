//! Data types produced by the grade mapping pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Exact final grade produced by one possible exam score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExamOutcome {
    pub exam_score: f64,
    pub final_grade: f64,
}

/// Inclusive range of exam scores whose final grade rounds to `rounded`.
///
/// Bands are kept in ascending scan order. Each range is contiguous on
/// the score grid because the final grade never decreases as the exam
/// score grows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeBand {
    pub rounded: u8,
    pub min_score: f64,
    pub max_score: f64,
}

/// Complete mapping for one (frequency grade, exam weight) pair.
#[derive(Debug, Clone, Serialize)]
pub struct GradeMapping {
    pub outcomes: Vec<ExamOutcome>,
    pub bands: Vec<GradeBand>,
}

impl GradeMapping {
    /// Final grade when the exam scores 0.0.
    pub fn min_final(&self) -> f64 {
        self.outcomes.first().map_or(0.0, |o| o.final_grade)
    }

    /// Final grade when the exam scores 20.0.
    pub fn max_final(&self) -> f64 {
        self.outcomes.last().map_or(0.0, |o| o.final_grade)
    }
}

/// Report envelope wrapping a computed mapping for rendering and export.
#[derive(Debug, Clone, Serialize)]
pub struct MappingReport {
    pub generated_at: DateTime<Utc>,
    pub freq_grade: f64,
    pub exam_percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_exam_grade: Option<f64>,
    pub min_final: f64,
    pub min_final_rounded: u8,
    pub max_final: f64,
    pub max_final_rounded: u8,
    pub bands: Vec<GradeBand>,
}
