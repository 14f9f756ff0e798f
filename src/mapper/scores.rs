/// Number of discrete exam scores on the [0, 20] scale at 0.1 steps.
pub const SCORE_COUNT: usize = 201;

/// Builds the ordered sequence of all possible exam scores:
/// 0.0, 0.1, ..., 20.0.
pub fn possible_exam_scores() -> Vec<f64> {
    (0..SCORE_COUNT).map(|i| i as f64 / 10.0).collect()
}

/// Rounds to 3 decimal places, stripping floating-point noise from the
/// weighted sum.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Rounds a final grade to the nearest integer grade. Ties round away
/// from zero; the grade scale is non-negative so this is round-half-up.
pub fn round_grade(value: f64) -> u8 {
    value.round() as u8
}
