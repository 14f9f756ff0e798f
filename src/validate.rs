//! Input validation for the user-supplied parameters.
//!
//! Validation is pure and runs before any computation. Each failure
//! kind carries its own process exit code for the batch interface.

use std::fmt;

/// Inclusive bounds of the grade scale, shared by the frequency grade
/// and the minimum passing exam grade.
pub const GRADE_MIN: f64 = 0.0;
pub const GRADE_MAX: f64 = 20.0;

/// Inclusive bounds of the exam weight percentage.
pub const PERCENTAGE_MIN: f64 = 1.0;
pub const PERCENTAGE_MAX: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    NotANumber { field: &'static str },
    GradeOutOfRange { field: &'static str, value: f64 },
    PercentageOutOfRange { value: f64 },
}

impl ValidationError {
    /// Distinct exit code per failure kind. Missing or unknown
    /// arguments are reported by clap itself, which exits with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            ValidationError::NotANumber { .. } => 3,
            ValidationError::GradeOutOfRange { .. } => 4,
            ValidationError::PercentageOutOfRange { .. } => 5,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotANumber { field } => {
                write!(f, "{} must be a number", field)
            }
            ValidationError::GradeOutOfRange { field, value } => {
                write!(
                    f,
                    "{} should be in the range [{}, {}], got {}",
                    field, GRADE_MIN, GRADE_MAX, value
                )
            }
            ValidationError::PercentageOutOfRange { value } => {
                write!(
                    f,
                    "exam percentage should be in the range [{}, {}], got {}",
                    PERCENTAGE_MIN, PERCENTAGE_MAX, value
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Parses a raw parameter value, accepting a decimal comma as well as a
/// decimal point. Non-finite values are rejected.
pub fn parse_number(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::NotANumber { field }),
    }
}

pub fn valid_grade(grade: f64) -> bool {
    (GRADE_MIN..=GRADE_MAX).contains(&grade)
}

pub fn valid_percentage(percentage: f64) -> bool {
    (PERCENTAGE_MIN..=PERCENTAGE_MAX).contains(&percentage)
}

/// Checks all parameters, failing on the first violation.
pub fn validate(
    freq_grade: f64,
    exam_percentage: f64,
    min_exam_grade: Option<f64>,
) -> Result<(), ValidationError> {
    if !valid_grade(freq_grade) {
        return Err(ValidationError::GradeOutOfRange {
            field: "frequency grade",
            value: freq_grade,
        });
    }

    if !valid_percentage(exam_percentage) {
        return Err(ValidationError::PercentageOutOfRange {
            value: exam_percentage,
        });
    }

    if let Some(min) = min_exam_grade {
        if !valid_grade(min) {
            return Err(ValidationError::GradeOutOfRange {
                field: "exam minimum grade",
                value: min,
            });
        }
    }

    Ok(())
}
